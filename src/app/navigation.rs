use super::*;
use crate::api::ApiError;

impl EduApp {
    /// Cambia de pantalla y lanza las cargas que esa pantalla necesita al montarse.
    pub fn navigate(&mut self, state: AppState) {
        match state {
            AppState::Login | AppState::Register => {
                self.state = state;
            }
            AppState::Home => {
                self.state = AppState::Home;
                self.load_student_materials();
            }
            AppState::Profile => {
                let Some(token) = self.require_token() else {
                    return;
                };
                self.state = AppState::Profile;
                self.profile.loading = true;
                self.profile.error = None;
                self.api.profile(&token);
                self.api.teachers(&token);
                self.api.unread_count(&token);
            }
            AppState::Teacher => {
                let Some(token) = self.require_token() else {
                    return;
                };
                if self.role() != Some(Role::Teacher) {
                    log::info!("Acceso al panel del profesor denegado: rol sin permisos");
                    self.message = "Solo los profesores pueden abrir el panel.".to_owned();
                    self.navigate(AppState::Home);
                    return;
                }
                self.state = AppState::Teacher;
                self.teacher.students_loading = true;
                self.api.students(&token);
                self.api.materials(&token);
            }
        }
    }

    /// Token guardado o, si no hay, vuelta al login.
    pub(crate) fn require_token(&mut self) -> Option<String> {
        let token = self.token();
        if token.is_none() {
            self.force_logout(&ApiError::MissingToken);
        }
        token
    }

    /// Sesión inválida: se borran las claves y se vuelve al login.
    pub fn force_logout(&mut self, reason: &ApiError) {
        log::warn!("Sesión cerrada: {reason}");
        self.clear_session();
        self.login.error = Some(match reason {
            ApiError::MissingToken => "Inicia sesión para continuar".to_owned(),
            _ => "Tu sesión ha caducado. Vuelve a iniciar sesión.".to_owned(),
        });
        self.state = AppState::Login;
    }

    pub fn logout(&mut self) {
        log::info!("Cierre de sesión de {}", self.user_name());
        self.clear_session();
        self.login.error = None;
        self.state = AppState::Login;
    }

    fn clear_session(&mut self) {
        StoredSession::clear(self.store.as_mut());
        self.session = None;
        self.chat = None;
        self.alert = None;
        self.message.clear();
        self.login.password.clear();
        self.login.loading = false;
        self.student.quiz = None;
        self.student.report = ReportStatus::Idle;
        self.student.materials.clear();
        self.profile = ProfileScreen::default();
        self.teacher = TeacherScreen::default();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::storage::{KEY_TOKEN, KEY_USER_ID};

    #[test]
    fn student_cannot_open_teacher_dashboard() {
        let (mock, log) = routed(vec![("/materials", 200, r#"{"materials": []}"#)]);
        let mut app = logged_in(Role::Student, mock);

        app.navigate(AppState::Teacher);

        assert_eq!(app.state, AppState::Home);
        assert!(log.borrow().iter().all(|r| !r.url.contains("/teacher")));
    }

    #[test]
    fn profile_without_token_goes_to_login() {
        let (mock, log) = routed(vec![]);
        let mut app = logged_out(mock);
        app.state = AppState::Home;

        app.navigate(AppState::Profile);

        assert_eq!(app.state, AppState::Login);
        assert!(log.borrow().is_empty());
        assert!(app.login.error.is_some());
    }

    #[test]
    fn logout_clears_every_stored_key() {
        let (mock, _log) = routed(vec![]);
        let mut app = logged_in(Role::Teacher, mock);
        app.state = AppState::Teacher;

        app.logout();

        assert_eq!(app.state, AppState::Login);
        assert_eq!(app.store.get(KEY_TOKEN), None);
        assert_eq!(app.store.get(KEY_USER_ID), None);
        assert!(app.session.is_none());
    }
}
