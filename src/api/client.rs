use super::dto::{
    Ack, AuthAction, ChatAction, MaterialAction, MaterialsResponse,
    MessagesResponse, ProfileResponse, ProgressAction, StudentResponse, StudentsResponse,
    TeacherAction, TeachersResponse, UnreadResponse,
};
use super::error::{ApiError, error_message};
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::ApiEvent;
use crate::config::ApiConfig;
use crate::model::MaterialStatus;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Resultado de un test para el endpoint de progreso.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestResult {
    pub topic: String,
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextMaterialDraft {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub title: String,
    pub description: String,
    pub file_base64: String,
    pub file_name: String,
    pub file_type: String,
    pub category: String,
}

/// Cliente del backend. Cada método lanza una petición y vuelve enseguida;
/// el resultado llega como `ApiEvent` por el canal devuelto en `new`.
pub struct ApiClient {
    config: ApiConfig,
    transport: Box<dyn Transport>,
    events: Sender<ApiEvent>,
    repaint: Option<egui::Context>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Box<dyn Transport>) -> (Self, Receiver<ApiEvent>) {
        let (events, rx) = channel();
        let client = Self {
            config,
            transport,
            events,
            repaint: None,
        };
        (client, rx)
    }

    /// Pide un repintado cuando llega una respuesta (si no, egui no se
    /// entera hasta el siguiente evento de entrada).
    pub fn set_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    // ---------- auth ----------

    pub fn login(&self, email: &str, password: &str) {
        let body = AuthAction::Login {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.post(&self.config.auth_url, None, &body, ApiEvent::LoggedIn);
    }

    pub fn register(&self, full_name: &str, email: &str, password: &str) {
        let body = AuthAction::Register {
            email: email.trim().to_string(),
            password: password.to_string(),
            full_name: full_name.trim().to_string(),
        };
        self.post(&self.config.auth_url, None, &body, ApiEvent::Registered);
    }

    // ---------- progreso / perfil ----------

    pub fn profile(&self, token: &str) {
        let request = get(self.config.progress_url.clone(), token);
        self.call(request, |r: Result<ProfileResponse, _>| {
            ApiEvent::Profile(r.map(|p| p.user))
        });
    }

    pub fn teachers(&self, token: &str) {
        let url = format!("{}?action=get_teachers", self.config.progress_url);
        self.call(get(url, token), |r: Result<TeachersResponse, _>| {
            ApiEvent::Teachers(r.map(|t| t.teachers))
        });
    }

    pub fn save_test_result(&self, token: &str, result: &NewTestResult) {
        let body = ProgressAction::SaveTestResult {
            topic: result.topic.clone(),
            score: result.score,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
        };
        self.post(
            &self.config.progress_url,
            Some(token),
            &body,
            ApiEvent::TestResultSaved,
        );
    }

    // ---------- chat ----------

    pub fn chat_messages(&self, token: &str, other_user_id: i64) {
        let url = format!("{}?other_user_id={other_user_id}", self.config.chat_url);
        self.call(get(url, token), move |r: Result<MessagesResponse, _>| {
            ApiEvent::ChatMessages {
                other_user_id,
                result: r.map(|m| m.messages),
            }
        });
    }

    pub fn send_chat_message(&self, token: &str, receiver_id: i64, message: &str) {
        let body = ChatAction::Send {
            receiver_id,
            message: message.to_string(),
        };
        self.post(&self.config.chat_url, Some(token), &body, move |result| {
            ApiEvent::ChatSent {
                other_user_id: receiver_id,
                result,
            }
        });
    }

    pub fn unread_count(&self, token: &str) {
        self.post(
            &self.config.chat_url,
            Some(token),
            &ChatAction::UnreadCount,
            |r: Result<UnreadResponse, _>| ApiEvent::UnreadCount(r.map(|u| u.unread_count)),
        );
    }

    // ---------- profesor ----------

    pub fn students(&self, token: &str) {
        let request = get(self.config.teacher_url.clone(), token);
        self.call(request, |r: Result<StudentsResponse, _>| {
            ApiEvent::Students(r.map(|s| s.students))
        });
    }

    pub fn student_detail(&self, token: &str, student_id: i64) {
        let url = format!("{}?student_id={student_id}", self.config.teacher_url);
        self.call(get(url, token), |r: Result<StudentResponse, _>| {
            ApiEvent::StudentDetail(r.map(|s| s.student))
        });
    }

    pub fn send_teacher_message(&self, token: &str, student_id: i64, message: &str) {
        let body = TeacherAction::SendMessage {
            student_id,
            message: message.to_string(),
        };
        self.post(
            &self.config.teacher_url,
            Some(token),
            &body,
            ApiEvent::TeacherMessageSent,
        );
    }

    pub fn add_student(&self, token: &str, email: &str) {
        let body = TeacherAction::AddStudent {
            email: email.trim().to_string(),
        };
        self.post(&self.config.teacher_url, Some(token), &body, ApiEvent::StudentAdded);
    }

    pub fn update_material_status(
        &self,
        token: &str,
        student_id: i64,
        material_id: i64,
        status: MaterialStatus,
    ) {
        let body = TeacherAction::UpdateMaterialStatus {
            student_id,
            material_id,
            status,
        };
        self.post(&self.config.teacher_url, Some(token), &body, move |result| {
            ApiEvent::MaterialStatusUpdated { student_id, result }
        });
    }

    // ---------- materiales ----------

    pub fn materials(&self, token: &str) {
        let request = get(self.config.materials_url.clone(), token);
        self.call(request, |r: Result<MaterialsResponse, _>| {
            ApiEvent::Materials(r.map(|m| m.materials))
        });
    }

    pub fn create_material(&self, token: &str, draft: &TextMaterialDraft) {
        let body = MaterialAction::Create {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            content: draft.content.clone(),
            category: draft.category.clone(),
        };
        self.post(&self.config.materials_url, Some(token), &body, ApiEvent::MaterialSaved);
    }

    pub fn upload_material(&self, token: &str, upload: &FileUpload) {
        let body = MaterialAction::Upload {
            title: upload.title.trim().to_string(),
            description: upload.description.trim().to_string(),
            file_base64: upload.file_base64.clone(),
            file_name: upload.file_name.clone(),
            file_type: upload.file_type.clone(),
            category: upload.category.clone(),
        };
        self.post(&self.config.materials_url, Some(token), &body, ApiEvent::MaterialSaved);
    }

    pub fn update_material(
        &self,
        token: &str,
        material_id: i64,
        title: &str,
        description: &str,
        category: &str,
    ) {
        let body = MaterialAction::Update {
            material_id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category: category.to_string(),
        };
        self.post(&self.config.materials_url, Some(token), &body, ApiEvent::MaterialSaved);
    }

    pub fn delete_material(&self, token: &str, material_id: i64) {
        let request = HttpRequest {
            method: Method::Delete,
            url: format!("{}?material_id={material_id}", self.config.materials_url),
            token: Some(token.to_string()),
            body: None,
        };
        self.call(request, ApiEvent::MaterialDeleted);
    }

    // ---------- internos ----------

    fn post<B, T, F>(&self, url: &str, token: Option<&str>, body: &B, wrap: F)
    where
        B: Serialize,
        T: DeserializeOwned + 'static,
        F: FnOnce(Result<T, ApiError>) -> ApiEvent + Send + 'static,
    {
        match serde_json::to_string(body) {
            Ok(json) => {
                let request = HttpRequest {
                    method: Method::Post,
                    url: url.to_string(),
                    token: token.map(str::to_string),
                    body: Some(json),
                };
                self.call(request, wrap);
            }
            Err(err) => self.emit(wrap(Err(ApiError::Decode(err.to_string())))),
        }
    }

    fn call<T, F>(&self, request: HttpRequest, wrap: F)
    where
        T: DeserializeOwned + 'static,
        F: FnOnce(Result<T, ApiError>) -> ApiEvent + Send + 'static,
    {
        let events = self.events.clone();
        let repaint = self.repaint.clone();
        let label = format!("{} {}", request.method.as_str(), request.url);

        self.transport.dispatch(
            request,
            Box::new(move |raw| {
                let result = raw.and_then(decode::<T>);
                if let Err(err) = &result {
                    log::warn!("{label}: {err}");
                }
                if events.send(wrap(result)).is_err() {
                    log::debug!("{label}: la app ya no escucha");
                }
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            }),
        );
    }

    fn emit(&self, event: ApiEvent) {
        let _ = self.events.send(event);
    }
}

fn get(url: String, token: &str) -> HttpRequest {
    HttpRequest {
        method: Method::Get,
        url,
        token: Some(token.to_string()),
        body: None,
    }
}

/// 2xx → JSON decodificado; 401 → `Unauthorized`; resto → `Http`.
pub(crate) fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    match response.status {
        200..=299 => serde_json::from_str(&response.body)
            .map_err(|err| ApiError::Decode(err.to_string())),
        401 => Err(ApiError::Unauthorized(error_message(401, &response.body))),
        status => Err(ApiError::Http {
            status,
            message: error_message(status, &response.body),
        }),
    }
}
