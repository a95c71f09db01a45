use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

pub const COL_BG: Color32 = Color32::from_rgb(5, 5, 5);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(10, 10, 10);
pub const COL_BORDER: Color32 = Color32::from_rgb(32, 32, 32);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(160, 160, 160);
pub const COL_ACCENT: Color32 = Color32::from_rgb(125, 211, 252); // Sky blue
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_DANGER: Color32 = Color32::from_rgb(225, 29, 72);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.1);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(16.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(12.0, FontFamily::Monospace)),
        (
            TextStyle::Monospace,
            FontId::new(11.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(10.0, FontFamily::Monospace)),
        (TextStyle::Small, FontId::new(9.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}

/// Badge colour for a category name. Unknown categories fall back to the accent colour.
pub fn category_color(name: &str) -> Color32 {
    match name {
        "fire" => Color32::from_rgb(249, 115, 22),
        "water" => Color32::from_rgb(59, 130, 246),
        "grass" => Color32::from_rgb(34, 197, 94),
        "electric" => COL_WARN,
        "poison" => Color32::from_rgb(168, 85, 247),
        "ground" => Color32::from_rgb(180, 140, 80),
        "rock" => Color32::from_rgb(150, 130, 100),
        "psychic" => Color32::from_rgb(236, 72, 153),
        "ice" => Color32::from_rgb(103, 232, 249),
        "bug" => Color32::from_rgb(132, 204, 22),
        "ghost" => Color32::from_rgb(99, 102, 241),
        "fighting" => COL_DANGER,
        "dragon" => Color32::from_rgb(79, 70, 229),
        "normal" | "flying" | "fairy" | "steel" | "dark" => COL_TEXT_DIM,
        _ => COL_ACCENT,
    }
}
