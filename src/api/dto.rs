//! Cuerpos de petición y respuesta del backend.
//!
//! Los POST multipropósito llevan un discriminador `action`.

use crate::model::{
    ChatMessage, Material, MaterialStatus, Student, StudentDetail, Teacher, User, UserProfile,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuthAction {
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        full_name: String,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProgressAction {
    SaveTestResult {
        topic: String,
        score: u32,
        total_questions: u32,
        correct_answers: u32,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ChatAction {
    Send { receiver_id: i64, message: String },
    UnreadCount,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TeacherAction {
    SendMessage {
        student_id: i64,
        message: String,
    },
    AddStudent {
        email: String,
    },
    UpdateMaterialStatus {
        student_id: i64,
        material_id: i64,
        status: MaterialStatus,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MaterialAction {
    Create {
        title: String,
        description: String,
        content: String,
        category: String,
    },
    Upload {
        title: String,
        description: String,
        file_base64: String,
        file_name: String,
        file_type: String,
        category: String,
    },
    Update {
        material_id: i64,
        title: String,
        description: String,
        category: String,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ProfileResponse {
    pub user: UserProfile,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TeachersResponse {
    #[serde(default)]
    pub teachers: Vec<Teacher>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct UnreadResponse {
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Deserialize, Debug)]
pub(crate) struct StudentsResponse {
    #[serde(default)]
    pub students: Vec<Student>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct StudentResponse {
    pub student: StudentDetail,
}

#[derive(Deserialize, Debug)]
pub(crate) struct MaterialsResponse {
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Confirmación genérica de las mutaciones.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_serialize_with_discriminator() {
        let body = serde_json::to_value(TeacherAction::AddStudent {
            email: "ana@example.com".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"action": "add_student", "email": "ana@example.com"}));

        let body = serde_json::to_value(ChatAction::UnreadCount).unwrap();
        assert_eq!(body, json!({"action": "unread_count"}));
    }

    #[test]
    fn ack_ignores_extra_fields() {
        let ack: Ack = serde_json::from_str(r#"{"success": true, "message_id": 12}"#).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, None);
    }
}
