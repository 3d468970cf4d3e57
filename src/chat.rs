// src/chat.rs

use crate::model::ChatMessage;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Segundos entre dos consultas de mensajes mientras la ventana está abierta.
pub const POLL_INTERVAL_SECS: f64 = 3.0;

/// Conversación abierta con un único interlocutor.
#[derive(Debug, Clone)]
pub struct ChatThread {
    pub other_user_id: i64,
    pub other_name: String,
    pub draft: String,
    messages: Vec<ChatMessage>,
    last_poll: Option<f64>,
    sending: bool,
    loaded: bool,
}

impl ChatThread {
    pub fn new(other_user_id: i64, other_name: impl Into<String>) -> Self {
        Self {
            other_user_id,
            other_name: other_name.into(),
            draft: String::new(),
            messages: Vec::new(),
            last_poll: None,
            sending: false,
            loaded: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// `now` en segundos del reloj de egui.
    pub fn poll_due(&self, now: f64) -> bool {
        match self.last_poll {
            None => true,
            Some(last) => now - last >= POLL_INTERVAL_SECS,
        }
    }

    pub fn mark_polled(&mut self, now: f64) {
        self.last_poll = Some(now);
    }

    /// Sustituye la lista entera; no hay fusión.
    pub fn apply_fetch(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.loaded = true;
    }

    /// Mensaje listo para enviar, o `None` si el borrador está vacío o ya
    /// hay un envío en curso. El borrador no se toca hasta `finish_send`.
    pub fn begin_send(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() || self.sending {
            return None;
        }
        self.sending = true;
        Some(text.to_string())
    }

    pub fn finish_send(&mut self, delivered: bool) {
        self.sending = false;
        if delivered {
            self.draft.clear();
        }
    }

    pub fn groups(&self) -> Vec<DayGroup<'_>> {
        group_by_day(&self.messages)
    }
}

/// Mensajes de un mismo día natural; `day == None` agrupa las fechas ilegibles.
#[derive(Debug, PartialEq)]
pub struct DayGroup<'a> {
    pub day: Option<NaiveDate>,
    pub messages: Vec<&'a ChatMessage>,
}

/// Acepta RFC 3339 (se pasa a hora local) o fecha ISO sin zona.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn message_time(message: &ChatMessage) -> Option<NaiveDateTime> {
    message.created_at.as_deref().and_then(parse_timestamp)
}

/// Agrupa por día en el orden en que aparece cada día por primera vez.
pub fn group_by_day(messages: &[ChatMessage]) -> Vec<DayGroup<'_>> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    for message in messages {
        let day = message_time(message).map(|t| t.date());
        match groups.iter_mut().find(|g| g.day == day) {
            Some(group) => group.messages.push(message),
            None => groups.push(DayGroup {
                day,
                messages: vec![message],
            }),
        }
    }
    groups
}

pub fn day_label(day: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(day) = day else {
        return "Sin fecha".to_string();
    };
    if day == today {
        "Hoy".to_string()
    } else if today.pred_opt() == Some(day) {
        "Ayer".to_string()
    } else {
        day.format("%d.%m.%Y").to_string()
    }
}

/// `HH:MM`, vacío si la fecha no se entiende.
pub fn time_label(message: &ChatMessage) -> String {
    message_time(message)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}
