use crate::EduApp;
use crate::model::{AppState, Role};
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

/// Barra superior con navegación y cierre de sesión.
pub fn top_panel(app: &mut EduApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("🎓 EduAI");
            ui.separator();

            if ui
                .selectable_label(app.state == AppState::Home, "🏠 Inicio")
                .clicked()
            {
                app.navigate(AppState::Home);
            }
            if ui
                .selectable_label(app.state == AppState::Profile, "👤 Perfil")
                .clicked()
            {
                app.navigate(AppState::Profile);
            }
            if app.role() == Some(Role::Teacher)
                && ui
                    .selectable_label(app.state == AppState::Teacher, "📋 Panel del profesor")
                    .clicked()
            {
                app.navigate(AppState::Teacher);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🚪 Cerrar sesión").clicked() {
                    app.logout();
                }
                ui.label(app.user_name().to_owned());
            });
        });
    });
}

pub fn bottom_panel(app: &mut EduApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
                app.prefs.dark_mode = true;
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
                app.prefs.dark_mode = false;
            }
            if !app.message.is_empty() {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    ui.label(&app.message);
                    if ui.small_button("✖").clicked() {
                        app.message.clear();
                    }
                });
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .corner_radius(8.0)
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel central con scroll para las pantallas largas (inicio, perfil, profesor).
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), inner);
            });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 32.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 32.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
