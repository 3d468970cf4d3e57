use crate::EduApp;
use crate::model::AppState;
use crate::ui::helpers::error_banner;
use egui::{Button, Context, RichText, TextEdit};

pub fn ui_login(app: &mut EduApp, ctx: &Context) {
    crate::ui::layout::centered_panel(ctx, 360.0, 380.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 EduAI");
            ui.label(RichText::new("Inicia sesión en tu cuenta").weak());
        });
        ui.add_space(16.0);

        if let Some(error) = &app.login.error {
            error_banner(ui, error);
            ui.add_space(8.0);
        }

        let width = ui.available_width();
        ui.label("Email");
        ui.add(
            TextEdit::singleline(&mut app.login.email)
                .hint_text("tu@email.com")
                .desired_width(width),
        );
        ui.add_space(6.0);
        ui.label("Contraseña");
        let password = ui.add(
            TextEdit::singleline(&mut app.login.password)
                .password(true)
                .desired_width(width),
        );
        let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(12.0);
        let label = if app.login.loading { "Entrando..." } else { "Entrar" };
        let clicked = ui
            .add_enabled(!app.login.loading, Button::new(label).min_size([width, 32.0].into()))
            .clicked();
        if clicked || enter {
            app.submit_login();
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label("¿No tienes cuenta?");
                if ui.link("Regístrate").clicked() {
                    app.login.error = None;
                    app.navigate(AppState::Register);
                }
            });
        });
    });
}
