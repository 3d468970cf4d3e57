// src/view_models.rs

use crate::model::{Material, Student, TestResult};
use crate::roster::{FileKind, ScoreBand, format_date, format_file_size, initials};

/// Fila del listado de estudiantes.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub tests: u32,
    pub average: i64, // redondeada
    pub band: ScoreBand,
    pub last_activity: Option<String>,
}

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id,
            name: s.full_name.clone(),
            email: s.email.clone(),
            initials: initials(&s.full_name),
            tests: s.tests_completed,
            average: s.average_score.round() as i64,
            band: ScoreBand::from_score(s.average_score),
            last_activity: s.last_activity.as_deref().map(format_date),
        }
    }
}

impl StudentRow {
    pub fn summary(&self) -> String {
        format!("{} tests · media {}%", self.tests, self.average)
    }

    pub fn activity_label(&self) -> String {
        match &self.last_activity {
            Some(date) => format!("Última actividad: {date}"),
            None => "Sin actividad".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub icon: &'static str,
    pub category: String,
    pub size: Option<String>, // sin tamaño en los materiales de texto
    pub date: Option<String>,
    pub teacher: Option<String>,
    pub file_url: Option<String>,
}

impl From<&Material> for MaterialRow {
    fn from(m: &Material) -> Self {
        Self {
            id: m.id,
            title: m.title.clone(),
            description: m.description.clone().filter(|d| !d.trim().is_empty()),
            content: m.content.clone().filter(|c| !c.trim().is_empty()),
            icon: FileKind::from_mime(&m.file_type).icon(),
            category: m.category.clone(),
            size: (m.file_size > 0).then(|| format_file_size(m.file_size)),
            date: m.created_at.as_deref().map(format_date),
            teacher: m.teacher_name.clone(),
            file_url: Some(m.file_url.clone()).filter(|u| !u.trim().is_empty()),
        }
    }
}

impl MaterialRow {
    pub fn meta_label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(date) = &self.date {
            parts.push(format!("📅 {date}"));
        }
        if let Some(size) = &self.size {
            parts.push(size.clone());
        }
        if let Some(teacher) = &self.teacher {
            parts.push(format!("👤 {teacher}"));
        }
        parts.join("  ·  ")
    }
}

/// Una línea del historial de tests del perfil.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub topic: String,
    pub score: i64,
    pub answers: String,
    pub date: String,
    pub band: ScoreBand,
}

impl From<&TestResult> for HistoryRow {
    fn from(r: &TestResult) -> Self {
        Self {
            topic: r.topic.clone().unwrap_or_else(|| "Test".to_owned()),
            score: r.score.round() as i64,
            answers: format!("{}/{}", r.correct_answers, r.total_questions),
            date: r.date.as_deref().map(format_date).unwrap_or_default(),
            band: ScoreBand::from_score(r.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_row_rounds_and_badges() {
        let s = Student {
            id: 3,
            full_name: "Eva Sanz Gil".into(),
            email: "eva@example.com".into(),
            tests_completed: 2,
            average_score: 69.6,
            last_activity: Some("2024-02-05T10:00:00".into()),
        };
        let row = StudentRow::from(&s);
        assert_eq!(row.initials, "ESG");
        assert_eq!(row.average, 70);
        // el badge usa la nota sin redondear
        assert_eq!(row.band, ScoreBand::Fair);
        assert_eq!(row.activity_label(), "Última actividad: 05.02.2024");
    }

    #[test]
    fn text_material_has_no_size_or_link() {
        let m = Material {
            id: 1,
            title: "Resumen".into(),
            description: Some("  ".into()),
            content: Some("Texto".into()),
            file_url: String::new(),
            file_type: "text/plain".into(),
            file_size: 0,
            category: "General".into(),
            created_at: None,
            teacher_name: Some("Luis Mora".into()),
        };
        let row = MaterialRow::from(&m);
        assert_eq!(row.size, None);
        assert_eq!(row.file_url, None);
        assert_eq!(row.description, None);
        assert_eq!(row.meta_label(), "👤 Luis Mora");
    }
}
