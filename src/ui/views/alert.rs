use crate::EduApp;
use egui::Context;

/// Aviso modal; se cierra con "Aceptar".
pub fn ui_alert(app: &mut EduApp, ctx: &Context) {
    let Some(text) = app.alert.clone() else {
        return;
    };
    let mut close = false;
    egui::Window::new("Aviso")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.label(text);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Aceptar").clicked() {
                    close = true;
                }
            });
        });
    if close {
        app.alert = None;
    }
}
