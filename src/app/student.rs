use super::*;
use crate::api::{Ack, ApiError, NewTestResult};
use crate::model::TestResult;

impl EduApp {
    // ---------- test ----------

    pub fn start_quiz(&mut self) {
        let Some(bank) = &self.student.bank else {
            self.message = "No hay preguntas disponibles.".to_owned();
            return;
        };
        self.student.quiz = Some(QuizSession::new(bank.questions.clone()));
        self.student.report = ReportStatus::Idle;
        self.student.tab = HomeTab::Tests;
    }

    pub fn select_quiz_answer(&mut self, index: usize) {
        if let Some(quiz) = self.student.quiz.as_mut() {
            quiz.select_answer(index);
        }
    }

    /// Confirma la respuesta elegida; al cerrar el test se envía el resultado.
    pub fn advance_quiz(&mut self) {
        let Some(quiz) = self.student.quiz.as_mut() else {
            return;
        };
        let was_completed = quiz.is_completed();
        if !quiz.advance() {
            return;
        }
        if !was_completed && quiz.is_completed() {
            self.report_quiz_result();
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(quiz) = self.student.quiz.as_mut() {
            quiz.restart();
        }
        self.student.report = ReportStatus::Idle;
    }

    fn report_quiz_result(&mut self) {
        let Some(quiz) = &self.student.quiz else {
            return;
        };
        let topic = self
            .student
            .bank
            .as_ref()
            .map(|b| b.title.clone())
            .unwrap_or_default();
        let result = NewTestResult {
            topic,
            score: quiz.score(),
            total_questions: quiz.total() as u32,
            correct_answers: quiz.correct_count() as u32,
        };
        log::info!(
            "Test terminado: {}/{} ({}%)",
            result.correct_answers,
            result.total_questions,
            result.score
        );

        // Sin sesión el resultado se queda solo en pantalla
        let Some(token) = self.token() else {
            self.student.report =
                ReportStatus::Failed("Inicia sesión para guardar el resultado".to_owned());
            return;
        };
        self.student.report = ReportStatus::Sending;
        self.api.save_test_result(&token, &result);
    }

    pub(crate) fn on_test_result_saved(&mut self, result: Result<Ack, ApiError>) {
        match result {
            Ok(_) => self.student.report = ReportStatus::Saved,
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("No se pudo guardar el resultado del test: {err}");
                self.student.report = ReportStatus::Failed(err.user_message());
            }
        }
    }

    // ---------- materiales (solo lectura) ----------

    pub fn load_student_materials(&mut self) {
        let Some(token) = self.token() else {
            self.student.materials_error =
                Some("Inicia sesión para ver los materiales".to_owned());
            return;
        };
        self.student.materials_loading = true;
        self.student.materials_error = None;
        self.api.materials(&token);
    }

    // ---------- perfil ----------

    pub(crate) fn on_profile(&mut self, result: Result<UserProfile, ApiError>) {
        self.profile.loading = false;
        match result {
            Ok(profile) => {
                self.profile.profile = Some(profile);
                self.profile.error = None;
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error cargando el perfil: {err}");
                self.profile.error = Some(err.user_message());
            }
        }
    }

    pub(crate) fn on_teachers(&mut self, result: Result<Vec<Teacher>, ApiError>) {
        match result {
            Ok(teachers) => self.profile.teachers = teachers,
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => log::warn!("Error cargando profesores: {err}"),
        }
    }

    pub(crate) fn on_unread_count(&mut self, result: Result<u32, ApiError>) {
        match result {
            Ok(count) => self.profile.unread = count,
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => log::debug!("Contador de no leídos no disponible: {err}"),
        }
    }
}

/// Historial del perfil, el más reciente primero.
pub fn history_newest_first(results: &[TestResult]) -> Vec<&TestResult> {
    let mut sorted: Vec<&TestResult> = results.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use serde_json::Value;

    fn answer_all(app: &mut EduApp, correct: bool) {
        let answers: Vec<usize> = app
            .student
            .quiz
            .as_ref()
            .unwrap()
            .questions()
            .iter()
            .map(|q| if correct { q.correct } else { q.correct + 1 })
            .collect();
        for a in answers {
            app.select_quiz_answer(a);
            app.advance_quiz();
        }
    }

    #[test]
    fn finished_quiz_is_reported_once() {
        let (mock, log) = routed(vec![("/progress", 200, r#"{"success": true}"#)]);
        let mut app = logged_in(Role::Student, mock);
        app.start_quiz();

        answer_all(&mut app, true);
        app.advance_quiz(); // ya completado: no hace nada
        app.poll_events();

        let sent = log.borrow();
        assert_eq!(sent.len(), 1);
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["action"], "save_test_result");
        assert_eq!(body["score"], 100);
        assert_eq!(body["topic"], "Test general");
        assert_eq!(app.student.report, ReportStatus::Saved);
    }

    #[test]
    fn failed_report_keeps_local_result() {
        let (mock, _log) = routed(vec![("/progress", 500, r#"{"error": "fallo interno"}"#)]);
        let mut app = logged_in(Role::Student, mock);
        app.start_quiz();

        answer_all(&mut app, false);
        app.poll_events();

        let quiz = app.student.quiz.as_ref().unwrap();
        assert!(quiz.is_completed());
        assert_eq!(quiz.score(), 0);
        assert_eq!(app.student.report, ReportStatus::Failed("fallo interno".into()));
        assert!(app.session.is_some());
    }

    #[test]
    fn expired_session_while_loading_profile_logs_out() {
        let (mock, _log) = routed(vec![("/progress", 401, r#"{"error": "Invalid token"}"#)]);
        let mut app = logged_in(Role::Student, mock);

        app.navigate(AppState::Profile);
        app.poll_events();

        assert_eq!(app.state, AppState::Login);
        assert!(app.session.is_none());
        assert_eq!(app.store.get(crate::storage::KEY_TOKEN), None);
    }

    #[test]
    fn profile_screen_collects_profile_teachers_and_unread() {
        let (mock, _log) = routed(vec![
            ("action=get_teachers", 200, r#"{"teachers": [{"id": 2, "full_name": "Luis Mora", "email": "l@m.es"}]}"#),
            ("/progress", 200, r#"{"user": {"id": 1, "email": "ana@example.com", "full_name": "Ana Ruiz", "test_results": [{"score": 80, "date": "2024-01-02"}]}}"#),
            ("/chat", 200, r#"{"unread_count": 4}"#),
        ]);
        let mut app = logged_in(Role::Student, mock);

        app.navigate(AppState::Profile);
        app.poll_events();

        assert_eq!(app.state, AppState::Profile);
        assert_eq!(app.profile.profile.as_ref().unwrap().test_results.len(), 1);
        assert_eq!(app.profile.teachers[0].id, 2);
        assert_eq!(app.profile.unread, 4);
        assert!(!app.profile.loading);
    }

    #[test]
    fn history_is_sorted_by_date_descending() {
        let results = vec![
            TestResult { date: Some("2024-01-01".into()), ..Default::default() },
            TestResult { date: Some("2024-03-01".into()), ..Default::default() },
            TestResult { date: None, ..Default::default() },
        ];
        let dates: Vec<_> = history_newest_first(&results)
            .iter()
            .map(|r| r.date.clone())
            .collect();
        assert_eq!(dates, vec![Some("2024-03-01".into()), Some("2024-01-01".into()), None]);
    }
}
