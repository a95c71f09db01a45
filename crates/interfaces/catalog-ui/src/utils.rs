use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .family(egui::FontFamily::Monospace)
            .strong(),
    );
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_BG_DARK),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        _ => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let text =
        egui::RichText::new(label)
            .size(10.0)
            .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(64.0, 22.0))
        .fill(if enabled && variant == "primary" {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    let col = category_color(text);
    egui::Frame::new()
        .fill(col.linear_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, col))
        .corner_radius(3.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text.to_uppercase())
                    .size(10.0)
                    .color(col)
                    .monospace(),
            );
        });
}
