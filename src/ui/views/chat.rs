use crate::EduApp;
use crate::chat::{day_label, time_label};
use egui::{Button, Context, Frame, RichText, ScrollArea, TextEdit};

/// Ventana flotante de chat; se muestra sobre cualquier pantalla.
pub fn ui_chat_window(app: &mut EduApp, ctx: &Context) {
    let Some(title) = app.chat.as_ref().map(|c| format!("💬 {}", c.other_name)) else {
        return;
    };
    let my_id = app.user_id();
    let today = chrono::Local::now().date_naive();
    let mut open = true;
    let mut send = false;

    egui::Window::new(title)
        .id(egui::Id::new("chat_window"))
        .collapsible(false)
        .resizable(true)
        .default_size([380.0, 460.0])
        .open(&mut open)
        .show(ctx, |ui| {
            let Some(chat) = app.chat.as_mut() else {
                return;
            };
            let own_fill = ui.visuals().selection.bg_fill;
            let other_fill = ui.visuals().faint_bg_color;

            ScrollArea::vertical()
                .max_height(340.0)
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if !chat.is_loaded() {
                        ui.spinner();
                    } else if chat.messages().is_empty() {
                        let empty = "Todavía no hay mensajes. ¡Escribe el primero!";
                        ui.label(RichText::new(empty).weak());
                    }
                    for group in chat.groups() {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(day_label(group.day, today)).small().weak());
                        });
                        for message in group.messages {
                            let own = Some(message.sender_id) == my_id;
                            let align = if own { egui::Align::Max } else { egui::Align::Min };
                            ui.with_layout(egui::Layout::top_down(align), |ui| {
                                Frame::default()
                                    .fill(if own { own_fill } else { other_fill })
                                    .corner_radius(8.0)
                                    .inner_margin(egui::Margin::symmetric(8, 4))
                                    .show(ui, |ui| {
                                        ui.set_max_width(260.0);
                                        if !own {
                                            let sender = RichText::new(&message.sender_name);
                                            ui.label(sender.small().strong());
                                        }
                                        ui.label(&message.message);
                                        ui.label(RichText::new(time_label(message)).small().weak());
                                    });
                            });
                            ui.add_space(2.0);
                        }
                    }
                });

            ui.separator();
            let sending = chat.is_sending();
            ui.horizontal(|ui| {
                let width = ui.available_width() - 80.0;
                let response = ui.add(
                    TextEdit::singleline(&mut chat.draft)
                        .hint_text("Escribe un mensaje...")
                        .desired_width(width),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let label = if sending { "..." } else { "Enviar" };
                let clicked = ui.add_enabled(!sending, Button::new(label)).clicked();
                send = clicked || enter;
            });
        });

    if send {
        app.send_chat();
    }
    if !open {
        app.close_chat();
    }
}
