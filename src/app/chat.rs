use super::*;
use crate::api::{Ack, ApiError};
use crate::model::ChatMessage;

impl EduApp {
    /// Abre (o reemplaza) la ventana de chat; el primer tick consulta enseguida.
    pub fn open_chat(&mut self, other_user_id: i64, other_name: &str) {
        if self.token().is_none() {
            self.force_logout(&ApiError::MissingToken);
            return;
        }
        log::debug!("Chat abierto con {other_user_id}");
        self.chat = Some(ChatThread::new(other_user_id, other_name));
    }

    pub fn close_chat(&mut self) {
        if let Some(chat) = self.chat.take() {
            log::debug!("Chat cerrado con {}", chat.other_user_id);
        }
    }

    /// Sondeo periódico; `now` es el reloj de egui en segundos.
    pub fn tick_chat(&mut self, now: f64) {
        let Some(token) = self.token() else {
            return;
        };
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        if chat.poll_due(now) {
            chat.mark_polled(now);
            self.api.chat_messages(&token, chat.other_user_id);
        }
    }

    pub fn send_chat(&mut self) {
        let Some(token) = self.token() else {
            return;
        };
        let Some(chat) = self.chat.as_mut() else {
            return;
        };
        if let Some(text) = chat.begin_send() {
            self.api.send_chat_message(&token, chat.other_user_id, &text);
        }
    }

    fn is_current_chat(&self, other_user_id: i64) -> bool {
        self.chat
            .as_ref()
            .is_some_and(|c| c.other_user_id == other_user_id)
    }

    pub(crate) fn on_chat_messages(
        &mut self,
        other_user_id: i64,
        result: Result<Vec<ChatMessage>, ApiError>,
    ) {
        match result {
            Err(err) if err.requires_login() => self.force_logout(&err),
            _ if !self.is_current_chat(other_user_id) => {
                log::debug!("Respuesta de chat descartada ({other_user_id})");
            }
            Ok(messages) => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.apply_fetch(messages);
                }
            }
            // Se mantiene la última lista; el siguiente tick reintenta
            Err(err) => log::warn!("Error cargando mensajes: {err}"),
        }
    }

    pub(crate) fn on_chat_sent(&mut self, other_user_id: i64, result: Result<Ack, ApiError>) {
        if let Err(err) = &result {
            if err.requires_login() {
                self.force_logout(err);
                return;
            }
        }
        // Un chat reabierto no espera esta confirmación: su borrador es otro
        let awaiting = self
            .chat
            .as_ref()
            .is_some_and(|c| c.other_user_id == other_user_id && c.is_sending());
        if !awaiting {
            log::debug!("Confirmación de envío descartada ({other_user_id})");
            return;
        }
        let delivered = result.is_ok();
        if let Err(err) = result {
            log::warn!("Error enviando mensaje: {err}");
            self.alert = Some(format!("No se pudo enviar el mensaje: {}", err.user_message()));
        }
        if let Some(chat) = self.chat.as_mut() {
            chat.finish_send(delivered);
        }
        // Siempre se recarga la conversación tras un envío
        if let Some(token) = self.token() {
            self.api.chat_messages(&token, other_user_id);
        }
    }
}
