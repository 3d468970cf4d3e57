use crate::EduApp;
use crate::app::student::history_newest_first;
use crate::model::AppState;
use crate::roster::{format_date, initials, profile_progress};
use crate::ui::helpers::{avatar, badge, band_color, error_banner, stat_card};
use crate::ui::layout::scroll_panel;
use crate::view_models::HistoryRow;
use egui::{Context, ProgressBar, RichText};

pub fn ui_profile(app: &mut EduApp, ctx: &Context) {
    scroll_panel(ctx, 820.0, |ui| {
        ui.add_space(8.0);
        if ui.button("← Volver al inicio").clicked() {
            app.navigate(AppState::Home);
            return;
        }
        ui.add_space(8.0);

        if let Some(error) = &app.profile.error {
            error_banner(ui, error);
            ui.add_space(8.0);
        }
        let Some(profile) = app.profile.profile.clone() else {
            if app.profile.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Cargando perfil...");
                });
            }
            return;
        };

        ui.horizontal(|ui| {
            avatar(ui, &initials(&profile.full_name));
            ui.vertical(|ui| {
                ui.heading(&profile.full_name);
                ui.label(RichText::new(&profile.email).weak());
                if let Some(created) = &profile.created_at {
                    let since = format!("Miembro desde {}", format_date(created));
                    ui.label(RichText::new(since).small().weak());
                }
            });
        });
        ui.add_space(12.0);

        let tests = profile.test_results.len();
        let card_w = (ui.available_width() - 24.0) / 3.0;
        ui.horizontal(|ui| {
            stat_card(ui, card_w, "Tests realizados", &tests.to_string());
            stat_card(ui, card_w, "Temas completados", &profile.completed_topics.len().to_string());
            stat_card(ui, card_w, "Mensajes sin leer", &app.profile.unread.to_string());
        });
        ui.add_space(8.0);
        let pct = profile_progress(tests);
        ui.label(format!("Progreso general: {pct}%"));
        ui.add(ProgressBar::new(pct as f32 / 100.0).desired_width(ui.available_width()));
        if let Some(last) = &profile.last_activity {
            let last = format!("Última actividad: {}", format_date(last));
            ui.label(RichText::new(last).small().weak());
        }

        ui.add_space(16.0);
        ui.strong("👩‍🏫 Mis profesores");
        if app.profile.teachers.is_empty() {
            ui.label(RichText::new("Aún no tienes profesores asignados").weak());
        }
        let teachers = app.profile.teachers.clone();
        for teacher in teachers {
            ui.horizontal(|ui| {
                avatar(ui, &initials(&teacher.full_name));
                ui.vertical(|ui| {
                    ui.label(&teacher.full_name);
                    ui.label(RichText::new(&teacher.email).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("💬 Chat").clicked() {
                        app.open_chat(teacher.id, &teacher.full_name);
                    }
                });
            });
            ui.add_space(4.0);
        }

        ui.add_space(16.0);
        ui.strong("🧾 Historial de tests");
        if profile.test_results.is_empty() {
            ui.label(RichText::new("Todavía no has hecho ningún test").weak());
            return;
        }
        egui::Grid::new("test_history_grid")
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Tema");
                ui.label("Nota");
                ui.label("Aciertos");
                ui.label("Fecha");
                ui.end_row();
                for result in history_newest_first(&profile.test_results) {
                    let row = HistoryRow::from(result);
                    ui.label(&row.topic);
                    badge(ui, &format!("{}%", row.score), band_color(row.band));
                    ui.label(&row.answers);
                    ui.label(&row.date);
                    ui.end_row();
                }
            });
    });
}
