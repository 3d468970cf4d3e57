use crate::EduApp;
use crate::app::HomeTab;
use crate::data::{HomeContent, Priority, Trend};
use crate::roster::ScoreBand;
use crate::ui::helpers::{badge, band_color, error_banner, labeled_bar, stat_card};
use crate::ui::layout::scroll_panel;
use crate::ui::views::quiz::ui_quiz_tab;
use crate::view_models::MaterialRow;
use egui::{Color32, Context, RichText, Ui};

pub fn ui_home(app: &mut EduApp, ctx: &Context) {
    scroll_panel(ctx, 900.0, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for tab in HomeTab::ALL {
                if ui.selectable_label(app.student.tab == tab, tab.label()).clicked() {
                    app.student.tab = tab;
                    if tab == HomeTab::Materials {
                        app.load_student_materials();
                    }
                }
            }
        });
        ui.separator();
        ui.add_space(8.0);

        match app.student.tab {
            HomeTab::Overview => match &app.student.home {
                Some(home) => ui_overview(ui, home, app.user_name()),
                None => error_banner(ui, "Contenido de inicio no disponible"),
            },
            HomeTab::Tests => ui_quiz_tab(app, ui),
            HomeTab::Profile => match &app.student.home {
                Some(home) => ui_profile_tab(ui, home),
                None => error_banner(ui, "Contenido de perfil no disponible"),
            },
            HomeTab::Analytics => match &app.student.home {
                Some(home) => ui_analytics(ui, home),
                None => error_banner(ui, "Analítica no disponible"),
            },
            HomeTab::Materials => ui_materials(app, ui),
        }
    });
}

fn trend_icon(trend: Trend) -> (&'static str, Color32) {
    match trend {
        Trend::Up => ("⬆", Color32::from_rgb(34, 139, 34)),
        Trend::Down => ("⬇", Color32::from_rgb(200, 40, 40)),
        Trend::Stable => ("➡", Color32::GRAY),
    }
}

fn priority_color(priority: Priority) -> Color32 {
    match priority {
        Priority::High => Color32::from_rgb(200, 40, 40),
        Priority::Medium => Color32::from_rgb(200, 150, 0),
        Priority::Low => Color32::from_rgb(34, 139, 34),
    }
}

fn ui_overview(ui: &mut Ui, home: &HomeContent, user_name: &str) {
    let stats = &home.student;
    // El nombre de la sesión manda sobre el de ejemplo
    let first_name = user_name
        .split_whitespace()
        .next()
        .unwrap_or_else(|| stats.first_name());
    ui.heading(format!("¡Hola, {first_name}! 👋"));
    ui.label(
        RichText::new(format!(
            "Tu progreso ha crecido un {}% este mes. ¡Sigue así!",
            stats.monthly_growth
        ))
        .weak(),
    );
    ui.add_space(12.0);

    let card_w = (ui.available_width() - 36.0) / 4.0;
    ui.horizontal(|ui| {
        stat_card(ui, card_w, "Tests completados", &stats.tests_completed.to_string());
        stat_card(ui, card_w, "Nota media", &format!("{}%", stats.average_score));
        stat_card(ui, card_w, "Horas de estudio", &stats.study_hours.to_string());
        stat_card(ui, card_w, "Logros", &stats.achievements_count.to_string());
    });

    ui.add_space(16.0);
    ui.label(RichText::new("🤖 Recomendaciones").heading());
    for rec in &home.recommendations {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(&rec.subject);
                badge(ui, rec.priority.label(), priority_color(rec.priority));
            });
            ui.label(&rec.suggestion);
        });
    }
}

fn ui_profile_tab(ui: &mut Ui, home: &HomeContent) {
    let stats = &home.student;
    ui.heading(&stats.name);
    ui.label(RichText::new(&stats.grade).weak());
    ui.add_space(12.0);

    ui.columns(2, |cols| {
        cols[0].strong("💪 Puntos fuertes");
        for subject in &stats.strong_subjects {
            badge(&mut cols[0], subject, Color32::from_rgb(34, 139, 34));
        }
        cols[1].strong("🎯 A mejorar");
        for subject in &stats.weak_subjects {
            badge(&mut cols[1], subject, Color32::from_rgb(200, 150, 0));
        }
    });

    ui.add_space(12.0);
    ui.strong("Estadística");
    egui::Grid::new("student_stats_grid")
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label("Tests completados");
            ui.label(stats.tests_completed.to_string());
            ui.end_row();
            ui.label("Nota media");
            ui.label(format!("{}%", stats.average_score));
            ui.end_row();
            ui.label("Horas de estudio");
            ui.label(stats.study_hours.to_string());
            ui.end_row();
            ui.label("Crecimiento mensual");
            ui.label(format!("+{}%", stats.monthly_growth));
            ui.end_row();
        });
}

fn ui_analytics(ui: &mut Ui, home: &HomeContent) {
    ui.heading("📈 Progreso por asignatura");
    ui.add_space(8.0);
    for subject in &home.subjects {
        let (icon, color) = trend_icon(subject.trend);
        let band = ScoreBand::from_score(subject.score as f64);
        labeled_bar(
            ui,
            &subject.subject,
            subject.score as f32 / 100.0,
            &format!("{}% ", subject.score),
            band_color(band),
        );
        ui.horizontal(|ui| {
            ui.add_space(184.0);
            ui.label(RichText::new(icon).color(color));
        });
    }

    ui.add_space(16.0);
    ui.strong("📅 Actividad semanal");
    let fill = ui.visuals().selection.bg_fill;
    for day in &home.weekly_activity {
        labeled_bar(ui, &day.day, day.level, &format!("{:.0}%", day.level * 100.0), fill);
    }

    ui.add_space(16.0);
    ui.strong("🏆 Logros");
    for achievement in &home.achievements {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&achievement.icon).size(20.0));
            ui.vertical(|ui| {
                ui.strong(&achievement.title);
                ui.label(RichText::new(&achievement.detail).weak());
            });
        });
    }
}

fn ui_materials(app: &mut EduApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.heading("📚 Materiales de tus profesores");
        if ui.button("⟳").on_hover_text("Recargar").clicked() {
            app.load_student_materials();
        }
    });
    ui.add_space(8.0);

    if let Some(error) = &app.student.materials_error {
        error_banner(ui, error);
        return;
    }
    if app.student.materials_loading && app.student.materials.is_empty() {
        ui.spinner();
        return;
    }
    if app.student.materials.is_empty() {
        ui.label("Todavía no hay materiales.");
        return;
    }

    let rows: Vec<MaterialRow> = app.student.materials.iter().map(MaterialRow::from).collect();
    let link = ui.visuals().hyperlink_color;
    for row in rows {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(row.icon).size(22.0));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(&row.title);
                        badge(ui, &row.category, link);
                    });
                    if let Some(description) = &row.description {
                        ui.label(description);
                    }
                    ui.label(RichText::new(row.meta_label()).small().weak());
                    if let Some(url) = &row.file_url {
                        ui.hyperlink_to("⬇ Abrir archivo", url);
                    }
                });
            });

            if let Some(content) = &row.content {
                let open = app.student.open_material == Some(row.id);
                let toggle = if open { "Ocultar contenido" } else { "Ver contenido" };
                if ui.small_button(toggle).clicked() {
                    app.student.open_material = if open { None } else { Some(row.id) };
                }
                if open {
                    ui.separator();
                    ui.label(content);
                }
            }
        });
        ui.add_space(6.0);
    }
}
