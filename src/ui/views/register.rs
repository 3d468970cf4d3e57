use crate::EduApp;
use crate::model::AppState;
use crate::ui::helpers::error_banner;
use egui::{Button, Context, RichText, TextEdit};

pub fn ui_register(app: &mut EduApp, ctx: &Context) {
    crate::ui::layout::centered_panel(ctx, 480.0, 380.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 Crear cuenta");
            ui.label(RichText::new("Regístrate para empezar a estudiar").weak());
        });
        ui.add_space(16.0);

        if let Some(error) = &app.register.error {
            error_banner(ui, error);
            ui.add_space(8.0);
        }

        let width = ui.available_width();
        let form = &mut app.register;
        ui.label("Nombre completo");
        ui.add(TextEdit::singleline(&mut form.full_name).desired_width(width));
        ui.add_space(6.0);
        ui.label("Email");
        ui.add(
            TextEdit::singleline(&mut form.email)
                .hint_text("tu@email.com")
                .desired_width(width),
        );
        ui.add_space(6.0);
        ui.label("Contraseña");
        ui.add(
            TextEdit::singleline(&mut form.password)
                .password(true)
                .hint_text("Mínimo 6 caracteres")
                .desired_width(width),
        );
        ui.add_space(6.0);
        ui.label("Confirmar contraseña");
        ui.add(
            TextEdit::singleline(&mut form.confirm)
                .password(true)
                .desired_width(width),
        );

        ui.add_space(12.0);
        let loading = form.loading;
        let label = if loading { "Registrando..." } else { "Crear cuenta" };
        if ui
            .add_enabled(!loading, Button::new(label).min_size([width, 32.0].into()))
            .clicked()
        {
            app.submit_register();
        }

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label("¿Ya tienes cuenta?");
                if ui.link("Inicia sesión").clicked() {
                    app.register.error = None;
                    app.navigate(AppState::Login);
                }
            });
        });
    });
}
