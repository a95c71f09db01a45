use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Search input. Returns `true` when the term was edited this frame.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, term: &mut String, count_label: &str) -> bool {
    let mut changed = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        flex_shrink: 0.0,
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            tui.ui(|ui| section_label(ui, "SEARCH"));
            tui.label(
                egui::RichText::new(count_label)
                    .size(10.0)
                    .color(COL_TEXT_DIM),
            );
        });

        changed = tui
            .ui_add(
                egui::TextEdit::singleline(term)
                    .hint_text("Filter by name…")
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::monospace(12.0)),
            )
            .changed();
    });

    changed
}
