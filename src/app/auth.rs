use super::*;
use crate::api::{ApiError, AuthResponse};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Comprobaciones locales antes de enviar el registro.
pub fn validate_registration(form: &RegisterForm) -> Result<(), String> {
    if form.full_name.trim().is_empty() || form.email.trim().is_empty() {
        return Err("Rellena el nombre y el email".to_owned());
    }
    if form.password != form.confirm {
        return Err("Las contraseñas no coinciden".to_owned());
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "La contraseña debe tener al menos {MIN_PASSWORD_LEN} caracteres"
        ));
    }
    Ok(())
}

impl EduApp {
    pub fn submit_login(&mut self) {
        if self.login.loading {
            return;
        }
        if self.login.email.trim().is_empty() || self.login.password.is_empty() {
            self.login.error = Some("Introduce email y contraseña".to_owned());
            return;
        }
        self.login.error = None;
        self.login.loading = true;
        self.prefs.last_email = self.login.email.trim().to_owned();
        self.api.login(&self.login.email, &self.login.password);
    }

    pub fn submit_register(&mut self) {
        if self.register.loading {
            return;
        }
        if let Err(reason) = validate_registration(&self.register) {
            self.register.error = Some(reason);
            return;
        }
        self.register.error = None;
        self.register.loading = true;
        self.api.register(
            &self.register.full_name,
            &self.register.email,
            &self.register.password,
        );
    }

    pub(crate) fn on_logged_in(&mut self, result: Result<AuthResponse, ApiError>) {
        self.login.loading = false;
        match result {
            Ok(auth) => {
                log::info!("Sesión iniciada: {} ({:?})", auth.user.email, auth.user.role);
                self.session = Some(StoredSession::persist(
                    self.store.as_mut(),
                    &auth.token,
                    &auth.user,
                ));
                self.login.password.clear();
                let target = match auth.user.role.unwrap_or_default() {
                    Role::Teacher => AppState::Teacher,
                    Role::Student => AppState::Home,
                };
                self.navigate(target);
            }
            // Aquí un 401 son credenciales erróneas, no una sesión caducada
            Err(err) => {
                log::warn!("Login fallido: {err}");
                self.login.error = Some(auth_error_text(&err, "Error al iniciar sesión"));
            }
        }
    }

    pub(crate) fn on_registered(&mut self, result: Result<AuthResponse, ApiError>) {
        self.register.loading = false;
        match result {
            Ok(auth) => {
                log::info!("Usuario registrado: {}", auth.user.email);
                self.session = Some(StoredSession::persist(
                    self.store.as_mut(),
                    &auth.token,
                    &auth.user,
                ));
                self.prefs.last_email = auth.user.email.clone();
                self.register = RegisterForm::default();
                self.navigate(AppState::Home);
            }
            Err(err) => {
                log::warn!("Registro fallido: {err}");
                self.register.error = Some(auth_error_text(&err, "Error en el registro"));
            }
        }
    }
}

fn auth_error_text(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Network(_) => "Sin conexión con el servidor".to_owned(),
        ApiError::Unauthorized(message) | ApiError::Http { message, .. } => message.clone(),
        _ => fallback.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::storage::{KEY_TOKEN, KEY_USER_ROLE};

    const TEACHER_LOGIN: &str = r#"{"token": "t-9", "user": {"id": 3, "email": "luis@example.com", "full_name": "Luis Mora", "role": "teacher"}}"#;

    #[test]
    fn login_routes_teacher_to_dashboard() {
        let (mock, _log) = routed(vec![
            ("/auth", 200, TEACHER_LOGIN),
            ("/teacher", 200, r#"{"students": []}"#),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        let mut app = logged_out(mock);
        app.login.email = "luis@example.com".into();
        app.login.password = "secreto".into();

        app.submit_login();
        app.poll_events();

        assert_eq!(app.state, AppState::Teacher);
        assert_eq!(app.store.get(KEY_TOKEN).as_deref(), Some("t-9"));
        assert_eq!(app.store.get(KEY_USER_ROLE).as_deref(), Some("teacher"));
        assert!(app.login.password.is_empty());
        assert_eq!(app.prefs.last_email, "luis@example.com");
    }

    #[test]
    fn wrong_credentials_stay_on_the_form() {
        let (mock, _log) = routed(vec![(
            "/auth",
            401,
            r#"{"error": "Email o contraseña incorrectos"}"#,
        )]);
        let mut app = logged_out(mock);
        app.login.email = "a@b.c".into();
        app.login.password = "x".into();

        app.submit_login();
        app.poll_events();

        assert_eq!(app.state, AppState::Login);
        assert_eq!(app.login.error.as_deref(), Some("Email o contraseña incorrectos"));
        assert!(!app.login.loading);
    }

    #[test]
    fn network_error_reads_as_no_connection() {
        let (mock, _log) = MockTransport::failing("dns");
        let mut app = logged_out(mock);
        app.login.email = "a@b.c".into();
        app.login.password = "x".into();

        app.submit_login();
        app.poll_events();

        assert_eq!(app.login.error.as_deref(), Some("Sin conexión con el servidor"));
    }

    #[test]
    fn registration_checks_run_before_the_request() {
        let (mock, log) = routed(vec![]);
        let mut app = logged_out(mock);
        app.register = RegisterForm {
            full_name: "Eva Sanz".into(),
            email: "eva@example.com".into(),
            password: "abcdef".into(),
            confirm: "abcdeg".into(),
            ..Default::default()
        };
        app.submit_register();
        assert_eq!(app.register.error.as_deref(), Some("Las contraseñas no coinciden"));

        app.register.password = "abc".into();
        app.register.confirm = "abc".into();
        app.submit_register();
        assert!(app.register.error.as_deref().unwrap().contains("6"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn registration_stores_session_and_opens_home() {
        let (mock, _log) = routed(vec![
            (
                "/auth",
                200,
                r#"{"token": "r-1", "user": {"id": 8, "email": "eva@example.com", "full_name": "Eva Sanz", "role": "student"}}"#,
            ),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        let mut app = logged_out(mock);
        app.state = AppState::Register;
        app.register = RegisterForm {
            full_name: "Eva Sanz".into(),
            email: "eva@example.com".into(),
            password: "abcdef".into(),
            confirm: "abcdef".into(),
            ..Default::default()
        };

        app.submit_register();
        app.poll_events();

        assert_eq!(app.state, AppState::Home);
        assert_eq!(app.user_id(), Some(8));
        assert_eq!(app.store.get(KEY_TOKEN).as_deref(), Some("r-1"));
    }
}
