// src/quiz.rs

use crate::model::Question;

/// Estado de un test en curso. Vive solo en memoria: se crea al empezar
/// el test y se descarta al salir.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    submitted: Vec<usize>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            submitted: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Ordinal 0-based de la pregunta visible
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn submitted(&self) -> &[usize] {
        &self.submitted
    }

    pub fn is_completed(&self) -> bool {
        self.submitted.len() == self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Guarda la elección pendiente. No se valida contra el número de
    /// opciones: un índice fuera de rango simplemente no puntúa.
    pub fn select_answer(&mut self, index: usize) {
        if self.is_completed() {
            return;
        }
        self.selected = Some(index);
    }

    /// Confirma la elección pendiente. Devuelve `false` si no había nada
    /// que confirmar.
    pub fn advance(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        let Some(choice) = self.selected.take() else {
            return false;
        };

        self.submitted.push(choice);
        if !self.is_completed() {
            self.current += 1;
        }
        true
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = None;
        self.submitted.clear();
    }

    pub fn correct_count(&self) -> usize {
        self.submitted
            .iter()
            .zip(&self.questions)
            .filter(|(answer, q)| **answer == q.correct)
            .count()
    }

    /// Porcentaje de aciertos redondeado al entero más cercano.
    pub fn score(&self) -> u32 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        (self.correct_count() as f64 / total as f64 * 100.0).round() as u32
    }

    /// Fracción para la barra de progreso: la pregunta visible cuenta como hecha.
    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f32 / self.questions.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(correct: usize) -> Question {
        Question {
            prompt: format!("p{correct}"),
            answers: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            topic: "t".into(),
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(vec![q(0), q(0), q(1)])
    }

    fn answer_all(s: &mut QuizSession, answers: &[usize]) {
        for &a in answers {
            s.select_answer(a);
            assert!(s.advance());
        }
    }

    #[test]
    fn advance_without_selection_is_noop() {
        let mut s = session();
        assert!(!s.advance());
        assert_eq!(s.position(), 0);
        assert!(s.submitted().is_empty());
    }

    #[test]
    fn selection_is_overwritten_and_cleared_on_advance() {
        let mut s = session();
        s.select_answer(2);
        s.select_answer(0);
        assert_eq!(s.selected(), Some(0));
        assert!(s.advance());
        assert_eq!(s.selected(), None);
        assert_eq!(s.position(), 1);
        assert_eq!(s.submitted(), &[0]);
    }

    #[test]
    fn completes_on_last_answer_and_stays_on_last_question() {
        let mut s = session();
        answer_all(&mut s, &[0, 0, 1]);
        assert!(s.is_completed());
        assert_eq!(s.position(), 2);

        s.select_answer(3);
        assert!(!s.advance());
        assert_eq!(s.submitted().len(), 3);
    }

    #[test]
    fn submitted_never_exceeds_question_count() {
        let mut s = session();
        for i in 0..10 {
            s.select_answer(i);
            s.advance();
            assert!(s.submitted().len() <= s.total());
        }
    }

    #[test]
    fn score_all_correct_all_wrong_and_partial() {
        let mut s = session();
        answer_all(&mut s, &[0, 0, 1]);
        assert_eq!(s.score(), 100);

        s.restart();
        answer_all(&mut s, &[3, 2, 0]);
        assert_eq!(s.score(), 0);

        s.restart();
        answer_all(&mut s, &[0, 0, 3]);
        assert_eq!(s.correct_count(), 2);
        assert_eq!(s.score(), 67);
    }

    #[test]
    fn out_of_range_selection_counts_as_wrong() {
        let mut s = QuizSession::new(vec![q(1)]);
        s.select_answer(99);
        assert!(s.advance());
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn restart_resets_everything() {
        let mut s = session();
        answer_all(&mut s, &[0, 1]);
        s.select_answer(2);
        s.restart();
        assert_eq!(s.position(), 0);
        assert!(s.submitted().is_empty());
        assert_eq!(s.selected(), None);
        assert!(!s.is_completed());
    }

    #[test]
    fn empty_bank_scores_zero() {
        let s = QuizSession::new(Vec::new());
        assert!(s.is_completed());
        assert_eq!(s.score(), 0);
        assert_eq!(s.progress_fraction(), 0.0);
    }

    #[test]
    fn progress_counts_visible_question() {
        let mut s = session();
        assert!((s.progress_fraction() - 1.0 / 3.0).abs() < f32::EPSILON);
        answer_all(&mut s, &[0]);
        assert!((s.progress_fraction() - 2.0 / 3.0).abs() < f32::EPSILON);
    }
}
