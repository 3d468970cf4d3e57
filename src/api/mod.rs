pub mod client;
pub mod dto;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;

pub use client::{ApiClient, FileUpload, NewTestResult, TextMaterialDraft};
pub use dto::{Ack, AuthResponse};
pub use error::ApiError;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

use crate::model::{ChatMessage, Material, Student, StudentDetail, Teacher, UserProfile};

/// Resultado de una llamada remota, entregado al hilo de la UI.
#[derive(Debug)]
pub enum ApiEvent {
    LoggedIn(Result<AuthResponse, ApiError>),
    Registered(Result<AuthResponse, ApiError>),
    Profile(Result<UserProfile, ApiError>),
    Teachers(Result<Vec<Teacher>, ApiError>),
    UnreadCount(Result<u32, ApiError>),
    TestResultSaved(Result<Ack, ApiError>),
    ChatMessages {
        other_user_id: i64,
        result: Result<Vec<ChatMessage>, ApiError>,
    },
    ChatSent {
        other_user_id: i64,
        result: Result<Ack, ApiError>,
    },
    Students(Result<Vec<Student>, ApiError>),
    StudentDetail(Result<StudentDetail, ApiError>),
    TeacherMessageSent(Result<Ack, ApiError>),
    StudentAdded(Result<Ack, ApiError>),
    MaterialStatusUpdated {
        student_id: i64,
        result: Result<Ack, ApiError>,
    },
    Materials(Result<Vec<Material>, ApiError>),
    MaterialSaved(Result<Ack, ApiError>),
    MaterialDeleted(Result<Ack, ApiError>),
}
