use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub apply_batch_clicked: bool,
    pub reload_clicked: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    is_busy: bool,
    batch_size_draft: &mut usize,
    current_batch_size: usize,
) -> HeaderResponse {
    let mut resp = HeaderResponse {
        apply_batch_clicked: false,
        reload_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new("CATALOG")
                    .family(egui::FontFamily::Monospace)
                    .size(12.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_TEXT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("BATCH")
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
                tui.ui_add(egui::DragValue::new(batch_size_draft).range(
                    catalog_config::MIN_BATCH_SIZE..=catalog_config::MAX_BATCH_SIZE,
                ));

                let dirty = *batch_size_draft != current_batch_size;
                resp.apply_batch_clicked = tui
                    .ui(|ui| cmd_button(ui, "APPLY", "primary", dirty && !is_busy))
                    .clicked();
                resp.reload_clicked = tui
                    .ui(|ui| cmd_button(ui, "RELOAD", "outline", !is_busy))
                    .clicked();

                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                    tui.label(
                        egui::RichText::new("STATUS: LOADING")
                            .color(COL_WARN)
                            .size(10.0),
                    );
                } else {
                    tui.label(
                        egui::RichText::new("STATUS: IDLE")
                            .color(COL_ACCENT)
                            .size(10.0),
                    );
                }
            });
        },
    );

    resp
}
