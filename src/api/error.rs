use serde::Deserialize;
use thiserror::Error;

/// Fallos de una llamada al backend.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("error de conexión con el servidor: {0}")]
    Network(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("el servidor respondió HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("respuesta JSON inválida: {0}")]
    Decode(String),
    #[error("no hay sesión iniciada")]
    MissingToken,
}

impl ApiError {
    /// Sesión caducada o inexistente: hay que volver al login.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::MissingToken)
    }

    /// Texto para mostrar al usuario: el `error` del servidor si lo hubo.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Error de conexión con el servidor".to_string(),
            ApiError::Unauthorized(message) | ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Extrae `{"error": "..."}` o devuelve un texto genérico con el status.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("Error del servidor (HTTP {status})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_text() {
        assert_eq!(
            error_message(404, r#"{"error": "Estudiante no encontrado"}"#),
            "Estudiante no encontrado"
        );
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "Error del servidor (HTTP 502)");
    }

    #[test]
    fn only_auth_failures_require_login() {
        assert!(ApiError::Unauthorized("Token inválido".into()).requires_login());
        assert!(ApiError::MissingToken.requires_login());
        assert!(!ApiError::Network("timeout".into()).requires_login());
        let forbidden = ApiError::Http {
            status: 403,
            message: "x".into(),
        };
        assert!(!forbidden.requires_login());
    }
}
