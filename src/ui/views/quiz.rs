use crate::EduApp;
use crate::app::ReportStatus;
use crate::roster::ScoreBand;
use crate::ui::helpers::{badge, band_color, error_banner};
use egui::{Button, ProgressBar, RichText, Ui};

/// Pestaña "Tests" del estudiante.
pub fn ui_quiz_tab(app: &mut EduApp, ui: &mut Ui) {
    if app.student.quiz.is_none() {
        ui_quiz_intro(app, ui);
        return;
    }
    let Some(quiz) = &app.student.quiz else {
        return;
    };

    if quiz.is_completed() {
        ui_quiz_result(app, ui);
        return;
    }

    let Some(question) = quiz.current_question().cloned() else {
        ui.label("El test no tiene preguntas.");
        return;
    };
    let position = quiz.position();
    let total = quiz.total();
    let selected = quiz.selected();
    let is_last = quiz.is_last_question();
    let fraction = quiz.progress_fraction();

    let topic_color = ui.visuals().hyperlink_color;
    ui.horizontal(|ui| {
        ui.heading(format!("Pregunta {} de {}", position + 1, total));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            badge(ui, &question.topic, topic_color);
        });
    });
    ui.add(ProgressBar::new(fraction).desired_width(ui.available_width()));
    ui.add_space(12.0);

    ui.label(RichText::new(&question.prompt).size(18.0).strong());
    ui.add_space(8.0);

    let width = ui.available_width();
    for (i, answer) in question.answers.iter().enumerate() {
        let chosen = selected == Some(i);
        if ui.selectable_label(chosen, format!("{}. {answer}", i + 1)).clicked() {
            app.select_quiz_answer(i);
        }
        ui.add_space(4.0);
    }

    ui.add_space(10.0);
    let next = if is_last { "Finalizar test" } else { "Siguiente pregunta" };
    if ui
        .add_enabled(selected.is_some(), Button::new(next).min_size([width, 36.0].into()))
        .clicked()
    {
        app.advance_quiz();
    }
}

fn ui_quiz_intro(app: &mut EduApp, ui: &mut Ui) {
    let Some(bank) = &app.student.bank else {
        error_banner(ui, "No se pudo cargar el banco de preguntas.");
        return;
    };
    ui.heading(format!("📝 {}", bank.title));
    ui.label(format!("{} preguntas de opción múltiple", bank.questions.len()));
    ui.add_space(12.0);
    if ui.add(Button::new("▶ Empezar test").min_size([200.0, 36.0].into())).clicked() {
        app.start_quiz();
    }
}

fn ui_quiz_result(app: &mut EduApp, ui: &mut Ui) {
    let Some(quiz) = &app.student.quiz else {
        return;
    };
    let score = quiz.score();
    let band = ScoreBand::from_score(score as f64);

    ui.vertical_centered(|ui| {
        ui.heading("🏁 ¡Test completado!");
        ui.add_space(8.0);
        ui.label(RichText::new(format!("{score}%")).size(40.0).strong().color(band_color(band)));
        ui.label(format!("{} de {} respuestas correctas", quiz.correct_count(), quiz.total()));
        ui.add_space(6.0);
        badge(ui, band.badge(), band_color(band));
    });

    ui.add_space(10.0);
    match &app.student.report {
        ReportStatus::Sending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Guardando resultado...");
            });
        }
        ReportStatus::Saved => {
            ui.label("✅ Resultado guardado en tu perfil");
        }
        ReportStatus::Failed(reason) => {
            error_banner(ui, &format!("No se guardó el resultado: {reason}"));
        }
        ReportStatus::Idle => {}
    }

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        if ui.add(Button::new("⟲ Repetir test").min_size([200.0, 36.0].into())).clicked() {
            app.restart_quiz();
        }
    });
}
