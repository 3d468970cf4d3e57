//! Cálculos de presentación para el panel del profesor y el perfil.
//!
//! Todo es derivado de los datos que manda el servidor; nada se guarda.

use crate::chat::parse_timestamp;
use crate::model::Student;
use chrono::NaiveDateTime;

/// Umbrales de nota media (en %).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Excellent,
        ScoreBand::Good,
        ScoreBand::Fair,
        ScoreBand::Poor,
    ];

    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// Etiqueta corta del listado de estudiantes.
    pub fn badge(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excelente",
            ScoreBand::Good => "Bien",
            ScoreBand::Fair => "Suficiente",
            ScoreBand::Poor => "Requiere atención",
        }
    }

    /// Etiqueta con rango para la analítica.
    pub fn range_label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excelente (85-100%)",
            ScoreBand::Good => "Bien (70-84%)",
            ScoreBand::Fair => "Suficiente (50-69%)",
            ScoreBand::Poor => "Insuficiente (<50%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandCount {
    pub band: ScoreBand,
    pub count: usize,
    pub share: f32, // 0..=1, 0 sin estudiantes
}

pub fn score_distribution(students: &[Student]) -> Vec<BandCount> {
    ScoreBand::ALL
        .iter()
        .map(|&band| {
            let count = students
                .iter()
                .filter(|s| ScoreBand::from_score(s.average_score) == band)
                .count();
            BandCount {
                band,
                count,
                share: share(count, students.len()),
            }
        })
        .collect()
}

fn share(count: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        count as f32 / total as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Active,
    Inactive,
    NeedsReminder,
}

impl Activity {
    pub const ALL: [Activity; 3] = [Activity::Active, Activity::Inactive, Activity::NeedsReminder];

    /// Días completos desde la última actividad: ≤3 activo, 4-7 inactivo,
    /// más de 7 (o nunca) pide recordatorio.
    pub fn classify(last_activity: Option<&str>, now: NaiveDateTime) -> Self {
        let Some(last) = last_activity.and_then(parse_timestamp) else {
            return Activity::NeedsReminder;
        };
        let days = now.signed_duration_since(last).num_days();
        if days <= 3 {
            Activity::Active
        } else if days <= 7 {
            Activity::Inactive
        } else {
            Activity::NeedsReminder
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Activity::Active => "Activos (últimos 3 días)",
            Activity::Inactive => "Inactivos (3-7 días)",
            Activity::NeedsReminder => "Necesitan recordatorio (>7 días)",
        }
    }
}

pub fn activity_breakdown(students: &[Student], now: NaiveDateTime) -> Vec<(Activity, usize)> {
    Activity::ALL
        .iter()
        .map(|&bucket| {
            let count = students
                .iter()
                .filter(|s| Activity::classify(s.last_activity.as_deref(), now) == bucket)
                .count();
            (bucket, count)
        })
        .collect()
}

/// Tarjetas de la pestaña Resumen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overview {
    pub students: usize,
    pub total_tests: u32,
    pub average_score: i64,
    pub needs_help: usize,
}

pub const NEEDS_HELP_BELOW: f64 = 70.0;

pub fn overview(students: &[Student]) -> Overview {
    if students.is_empty() {
        return Overview::default();
    }
    let sum: f64 = students.iter().map(|s| s.average_score).sum();
    Overview {
        students: students.len(),
        total_tests: students.iter().map(|s| s.tests_completed).sum(),
        average_score: (sum / students.len() as f64).round() as i64,
        needs_help: needs_help(students).len(),
    }
}

pub fn needs_help(students: &[Student]) -> Vec<&Student> {
    students
        .iter()
        .filter(|s| s.average_score < NEEDS_HELP_BELOW)
        .collect()
}

/// Primera letra de cada palabra: "Ana María Ruiz" → "AMR".
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Video,
    Document,
    Spreadsheet,
    Presentation,
    Other,
}

impl FileKind {
    /// Por subcadena del tipo MIME, en este orden. Los `.xlsx`/`.pptx`
    /// (`officedocument`) salen como documento.
    pub fn from_mime(file_type: &str) -> Self {
        let t = file_type.to_ascii_lowercase();
        if t.contains("pdf") {
            FileKind::Pdf
        } else if t.contains("image") {
            FileKind::Image
        } else if t.contains("video") {
            FileKind::Video
        } else if t.contains("word") || t.contains("document") {
            FileKind::Document
        } else if t.contains("excel") || t.contains("spreadsheet") {
            FileKind::Spreadsheet
        } else if t.contains("powerpoint") || t.contains("presentation") {
            FileKind::Presentation
        } else {
            FileKind::Other
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Pdf | FileKind::Document => "📄",
            FileKind::Image => "🖼",
            FileKind::Video => "🎬",
            FileKind::Spreadsheet => "📊",
            FileKind::Presentation => "📽",
            FileKind::Other => "📁",
        }
    }
}

/// `dd.mm.aaaa`; si no se entiende la fecha se muestra tal cual.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|t| t.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Porcentaje de la barra del perfil: 10 tests completan el objetivo.
pub fn profile_progress(tests_completed: usize) -> u32 {
    let pct = (tests_completed as f64 / 10.0 * 100.0).round();
    pct.min(100.0) as u32
}
