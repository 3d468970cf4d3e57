use crate::api::{ApiClient, ApiEvent, Transport};
use crate::chat::ChatThread;
use crate::config::ApiConfig;
use crate::data::{HomeContent, QuestionBank, read_home_embedded, read_questions_embedded};
use crate::model::{AppState, Material, Role, Student, StudentDetail, Teacher, UserProfile};
use crate::quiz::QuizSession;
use crate::storage::{KeyValueStore, StoredSession};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod auth;
pub mod chat;
pub mod events;
pub mod navigation;
pub mod student;
pub mod teacher;

/// Preferencias de interfaz que guarda eframe entre sesiones.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UiPrefs {
    pub dark_mode: bool,
    pub last_email: String,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HomeTab {
    #[default]
    Overview,
    Tests,
    Profile,
    Analytics,
    Materials,
}

impl HomeTab {
    pub const ALL: [HomeTab; 5] = [
        HomeTab::Overview,
        HomeTab::Tests,
        HomeTab::Profile,
        HomeTab::Analytics,
        HomeTab::Materials,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::Overview => "Inicio",
            HomeTab::Tests => "Tests",
            HomeTab::Profile => "Perfil",
            HomeTab::Analytics => "Analítica",
            HomeTab::Materials => "Materiales",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TeacherTab {
    #[default]
    Overview,
    Students,
    Analytics,
    Materials,
}

impl TeacherTab {
    pub const ALL: [TeacherTab; 4] = [
        TeacherTab::Overview,
        TeacherTab::Students,
        TeacherTab::Analytics,
        TeacherTab::Materials,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeacherTab::Overview => "Resumen",
            TeacherTab::Students => "Estudiantes",
            TeacherTab::Analytics => "Analítica",
            TeacherTab::Materials => "Materiales",
        }
    }
}

/// Estado del envío del resultado del test al servidor.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ReportStatus {
    #[default]
    Idle,
    Sending,
    Saved,
    Failed(String),
}

/// Pantalla principal del estudiante.
#[derive(Default)]
pub struct StudentScreen {
    pub tab: HomeTab,
    pub home: Option<HomeContent>,
    pub bank: Option<QuestionBank>,
    pub quiz: Option<QuizSession>,
    pub report: ReportStatus,
    pub materials: Vec<Material>,
    pub materials_loading: bool,
    pub materials_error: Option<String>,
    pub open_material: Option<i64>,
}

#[derive(Default)]
pub struct ProfileScreen {
    pub profile: Option<UserProfile>,
    pub teachers: Vec<Teacher>,
    pub unread: u32,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageDialog {
    pub student_id: i64,
    pub student_name: String,
    pub text: String,
    pub sending: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AddStudentDialog {
    pub email: String,
    pub sending: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MaterialMode {
    #[default]
    Text,
    File,
}

/// Alta, subida o edición de un material.
#[derive(Debug, Clone)]
pub struct MaterialDialog {
    pub editing: Option<i64>,
    pub mode: MaterialMode,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub file_path: String,
    pub upload_started: Option<f64>,
    pub saving: bool,
}

pub const DEFAULT_CATEGORY: &str = "General";

impl Default for MaterialDialog {
    fn default() -> Self {
        Self {
            editing: None,
            mode: MaterialMode::Text,
            title: String::new(),
            description: String::new(),
            content: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            file_path: String::new(),
            upload_started: None,
            saving: false,
        }
    }
}

#[derive(Default)]
pub struct TeacherScreen {
    pub tab: TeacherTab,
    pub students: Vec<Student>,
    pub students_loading: bool,
    pub materials: Vec<Material>,
    pub search: String,
    pub detail: Option<StudentDetail>,
    pub detail_loading: bool,
    pub message_dialog: Option<MessageDialog>,
    pub add_dialog: Option<AddStudentDialog>,
    pub material_dialog: Option<MaterialDialog>,
    pub confirm_delete: Option<(i64, String)>,
}

pub struct EduApp {
    pub state: AppState,
    pub prefs: UiPrefs,
    pub session: Option<StoredSession>,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub student: StudentScreen,
    pub profile: ProfileScreen,
    pub teacher: TeacherScreen,
    pub chat: Option<ChatThread>,
    pub alert: Option<String>,
    pub message: String,
    pub(crate) store: Box<dyn KeyValueStore>,
    pub(crate) api: ApiClient,
    events: Receiver<ApiEvent>,
}

impl EduApp {
    /// Arranque real: almacén y transporte de la plataforma, preferencias de eframe.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut app = Self::with_parts(
            crate::storage::platform_store(),
            crate::api::transport::platform_transport(),
            ApiConfig::resolve(),
        );
        app.api.set_repaint(cc.egui_ctx.clone());
        app.login.email = prefs.last_email.clone();
        app.prefs = prefs;
        app.restore_session();
        app
    }

    pub fn with_parts(
        store: Box<dyn KeyValueStore>,
        transport: Box<dyn Transport>,
        config: ApiConfig,
    ) -> Self {
        let (api, events) = ApiClient::new(config, transport);

        let mut student = StudentScreen::default();
        match read_home_embedded() {
            Ok(home) => student.home = Some(home),
            Err(err) => log::error!("Contenido de inicio inválido: {err}"),
        }
        match read_questions_embedded() {
            Ok(bank) => student.bank = Some(bank),
            Err(err) => log::error!("Banco de preguntas inválido: {err}"),
        }

        Self {
            state: AppState::Login,
            prefs: UiPrefs::default(),
            session: None,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            student,
            profile: ProfileScreen::default(),
            teacher: TeacherScreen::default(),
            chat: None,
            alert: None,
            message: String::new(),
            store,
            api,
            events,
        }
    }

    /// Con sesión guardada se entra directamente según el rol.
    pub fn restore_session(&mut self) {
        self.session = StoredSession::read(self.store.as_ref());
        match self.session.as_ref().map(|s| s.role) {
            Some(Role::Teacher) => self.navigate(AppState::Teacher),
            Some(Role::Student) => self.navigate(AppState::Home),
            None => self.state = AppState::Login,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().and_then(|s| s.user_id)
    }

    pub fn user_name(&self) -> &str {
        self.session
            .as_ref()
            .map(|s| s.user_name.as_str())
            .unwrap_or("")
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    /// Vacía la cola de respuestas; se llama al principio de cada frame.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::api::mock::{MockTransport, RequestLog};
    use crate::api::{HttpRequest, HttpResponse};
    use crate::model::User;
    use crate::storage::MemoryStore;

    /// Responde según la URL; lo que no encaja devuelve 404.
    pub fn routed(routes: Vec<(&'static str, u16, &'static str)>) -> (MockTransport, RequestLog) {
        MockTransport::new(move |request: &HttpRequest| {
            let hit = routes
                .iter()
                .find(|(needle, _, _)| request.url.contains(needle));
            Ok(match hit {
                Some((_, status, body)) => HttpResponse {
                    status: *status,
                    body: body.to_string(),
                },
                None => HttpResponse {
                    status: 404,
                    body: r#"{"error": "no encontrado"}"#.to_string(),
                },
            })
        })
    }

    pub fn user(role: Role) -> User {
        User {
            id: 1,
            email: "ana@example.com".into(),
            full_name: "Ana Ruiz".into(),
            role: Some(role),
            created_at: None,
        }
    }

    /// App con una sesión ya guardada para `role`.
    pub fn logged_in(role: Role, transport: MockTransport) -> EduApp {
        let mut store = MemoryStore::new();
        StoredSession::persist(&mut store, "tok-1", &user(role));
        let mut app = EduApp::with_parts(
            Box::new(store),
            Box::new(transport),
            ApiConfig::from_base("http://api.test"),
        );
        app.session = StoredSession::read(app.store.as_ref());
        app
    }

    pub fn logged_out(transport: MockTransport) -> EduApp {
        EduApp::with_parts(
            Box::new(MemoryStore::new()),
            Box::new(transport),
            ApiConfig::from_base("http://api.test"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::storage::{KEY_TOKEN, MemoryStore};

    #[test]
    fn embedded_content_is_loaded_on_start() {
        let (mock, _log) = routed(vec![]);
        let app = logged_out(mock);
        assert!(app.student.home.is_some());
        assert!(app.student.bank.is_some());
        assert_eq!(app.state, AppState::Login);
    }

    #[test]
    fn stored_teacher_session_opens_dashboard() {
        let (mock, log) = routed(vec![
            ("/teacher", 200, r#"{"students": []}"#),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        let mut store = MemoryStore::new();
        StoredSession::persist(&mut store, "tok", &user(Role::Teacher));
        let mut app = EduApp::with_parts(
            Box::new(store),
            Box::new(mock),
            ApiConfig::from_base("http://api.test"),
        );
        app.restore_session();
        app.poll_events();

        assert_eq!(app.state, AppState::Teacher);
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(app.store.get(KEY_TOKEN).as_deref(), Some("tok"));
    }
}
