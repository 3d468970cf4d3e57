// src/ui/helpers.rs
use crate::roster::{Activity, ScoreBand};
use egui::{Color32, Frame, ProgressBar, RichText, Ui, Vec2};

pub fn band_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::Excellent => Color32::from_rgb(34, 139, 34),
        ScoreBand::Good => Color32::from_rgb(30, 110, 200),
        ScoreBand::Fair => Color32::from_rgb(200, 150, 0),
        ScoreBand::Poor => Color32::from_rgb(200, 40, 40),
    }
}

pub fn activity_color(bucket: Activity) -> Color32 {
    match bucket {
        Activity::Active => Color32::from_rgb(34, 139, 34),
        Activity::Inactive => Color32::from_rgb(200, 150, 0),
        Activity::NeedsReminder => Color32::from_rgb(200, 40, 40),
    }
}

/// Etiqueta coloreada tipo "badge".
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame::default()
        .fill(color.gamma_multiply(0.15))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).small().strong());
        });
}

/// Tarjeta con un número grande; se usa en los resúmenes.
pub fn stat_card(ui: &mut Ui, width: f32, title: &str, value: &str) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small().weak());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}

pub fn error_banner(ui: &mut Ui, text: &str) {
    Frame::default()
        .fill(Color32::from_rgb(200, 40, 40).gamma_multiply(0.15))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("⚠ {text}")).color(Color32::from_rgb(200, 40, 40)));
        });
}

/// Barra horizontal con etiqueta a la izquierda y texto a la derecha.
pub fn labeled_bar(ui: &mut Ui, label: &str, fraction: f32, right: &str, color: Color32) {
    ui.horizontal(|ui| {
        ui.add_sized(Vec2::new(180.0, 18.0), egui::Label::new(label));
        ui.add(
            ProgressBar::new(fraction.clamp(0.0, 1.0))
                .desired_width(ui.available_width() - 60.0)
                .fill(color),
        );
        ui.label(right);
    });
}

/// Círculo con iniciales, como avatar.
pub fn avatar(ui: &mut Ui, initials: &str) {
    let size = 32.0;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, ui.visuals().selection.bg_fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(13.0),
        ui.visuals().strong_text_color(),
    );
}
