mod helpers;
pub mod layout;
pub mod views;

use crate::app::EduApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for EduApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuestas de red pendientes antes de pintar
        self.poll_events();

        let now = ctx.input(|i| i.time);
        self.tick_chat(now);
        let uploading = self
            .teacher
            .material_dialog
            .as_ref()
            .is_some_and(|d| d.upload_started.is_some());
        // El sondeo del chat y la barra de subida necesitan frames aunque no haya input
        if self.chat.is_some() || uploading {
            ctx.request_repaint_after(Duration::from_millis(500));
        }

        if matches!(
            self.state,
            AppState::Home | AppState::Profile | AppState::Teacher
        ) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.state {
            AppState::Login => views::login::ui_login(self, ctx),
            AppState::Register => views::register::ui_register(self, ctx),
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Profile => views::profile::ui_profile(self, ctx),
            AppState::Teacher => views::teacher::ui_teacher(self, ctx),
        }

        views::chat::ui_chat_window(self, ctx);
        views::alert::ui_alert(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
