use serde::{Deserialize, Serialize};

/// Pregunta de opción múltiple del banco embebido.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,       // Enunciado
    pub answers: Vec<String>, // Opciones, en orden
    pub correct: usize,       // Índice de la opción correcta
    pub topic: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    /// Cualquier valor desconocido se trata como estudiante.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "teacher" {
            Role::Teacher
        } else {
            Role::Student
        }
    }
}

/// Usuario tal y como lo devuelve el endpoint de auth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TestResult {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub date: Option<String>,
}

/// Perfil completo (endpoint de progreso).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub test_results: Vec<TestResult>,
    #[serde(default)]
    pub completed_topics: Vec<String>,
    #[serde(default)]
    pub last_activity: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// Fila del listado de estudiantes del profesor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub tests_completed: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub last_activity: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStatus {
    #[default]
    Assigned,
    InProgress,
    Completed,
}

impl MaterialStatus {
    pub const ALL: [MaterialStatus; 3] = [
        MaterialStatus::Assigned,
        MaterialStatus::InProgress,
        MaterialStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaterialStatus::Assigned => "Asignado",
            MaterialStatus::InProgress => "En curso",
            MaterialStatus::Completed => "Completado",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentMaterial {
    pub material_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: MaterialStatus,
}

/// Ficha detallada de un estudiante.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentDetail {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub tests_completed: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub test_results: Vec<TestResult>,
    #[serde(default)]
    pub completed_topics: Vec<String>,
    #[serde(default)]
    pub last_activity: Option<String>,
    #[serde(default)]
    pub materials: Vec<StudentMaterial>,
}

impl From<&Student> for StudentDetail {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id,
            full_name: s.full_name.clone(),
            email: s.email.clone(),
            created_at: None,
            tests_completed: s.tests_completed,
            average_score: s.average_score,
            test_results: Vec::new(),
            completed_topics: Vec::new(),
            last_activity: s.last_activity.clone(),
            materials: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Material {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: Option<String>,
    // Solo llega en la vista de estudiante
    #[serde(default)]
    pub teacher_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sender_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Login,
    Register,
    Home,
    Profile,
    Teacher,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&MaterialStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn student_detail_tolerates_missing_optional_fields() {
        let json = r#"{"id": 4, "full_name": "Ana Ruiz", "email": "ana@example.com"}"#;
        let detail: StudentDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.tests_completed, 0);
        assert!(detail.test_results.is_empty());
        assert!(detail.materials.is_empty());
    }

    #[test]
    fn unknown_role_falls_back_to_student() {
        assert_eq!(Role::parse("teacher"), Role::Teacher);
        assert_eq!(Role::parse("admin"), Role::Student);
        assert_eq!(Role::parse(""), Role::Student);
    }
}
