// src/data.rs

use crate::model::Question;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionBank {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Importante",
            Priority::Medium => "Media",
            Priority::Low => "Baja",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentStats {
    pub name: String,
    pub grade: String,
    pub tests_completed: u32,
    pub average_score: u32,
    pub monthly_growth: i32,
    pub study_hours: u32,
    pub achievements_count: u32,
    pub strong_subjects: Vec<String>,
    pub weak_subjects: Vec<String>,
}

impl StudentStats {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubjectProgress {
    pub subject: String,
    pub score: u32,
    pub trend: Trend,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Recommendation {
    pub subject: String,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DayActivity {
    pub day: String,
    pub level: f32, // 0.0..=1.0
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Achievement {
    pub title: String,
    pub detail: String,
    pub icon: String,
}

/// Contenido estático de la página principal del estudiante
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HomeContent {
    pub student: StudentStats,
    pub subjects: Vec<SubjectProgress>,
    pub recommendations: Vec<Recommendation>,
    pub weekly_activity: Vec<DayActivity>,
    pub achievements: Vec<Achievement>,
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<QuestionBank, serde_yaml::Error> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content)
}

pub fn read_home_embedded() -> Result<HomeContent, serde_yaml::Error> {
    let file_content = include_str!("data/home.yaml");
    serde_yaml::from_str(file_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_question_bank_is_consistent() {
        let bank = read_questions_embedded().unwrap();
        assert_eq!(bank.questions.len(), 3);
        for q in &bank.questions {
            assert!(q.correct < q.answers.len(), "{}", q.prompt);
            assert!(!q.topic.is_empty());
        }
    }

    #[test]
    fn embedded_home_content_parses() {
        let home = read_home_embedded().unwrap();
        assert_eq!(home.student.first_name(), "Ana");
        assert_eq!(home.subjects.len(), 5);
        assert_eq!(home.recommendations[0].priority, Priority::High);
        assert!(home.weekly_activity.iter().all(|d| (0.0..=1.0).contains(&d.level)));
    }
}
