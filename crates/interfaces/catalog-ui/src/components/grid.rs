use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use catalog_app_core::viewmodel::CardVm;

const CARD_WIDTH: f32 = 128.0;
const CARD_HEIGHT: f32 = 136.0;
const SPRITE_SIZE: f32 = 96.0;

/// Responsive card grid. Returns the filtered position of the clicked card, if any.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, cards: &[CardVm]) -> Option<usize> {
    let mut clicked = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        flex_wrap: taffy::FlexWrap::Wrap,
        align_content: Some(taffy::AlignContent::FlexStart),
        flex_grow: 1.0,
        flex_basis: length(0.0),
        gap: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        for card in cards {
            let response = tui
                .id(egui_taffy::tid(("entry", card.position, card.id)))
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    align_items: Some(taffy::AlignItems::Center),
                    justify_content: Some(taffy::JustifyContent::Center),
                    size: taffy::Size {
                        width: length(CARD_WIDTH),
                        height: length(CARD_HEIGHT),
                    },
                    flex_shrink: 0.0,
                    padding: length(6.0),
                    gap: length(4.0),
                    ..Default::default()
                })
                .bg_clickable(
                    TuiBackground::new()
                        .with_background_color(if card.is_selected {
                            COL_ACCENT.linear_multiply(0.1)
                        } else {
                            COL_BG_DARK
                        })
                        .with_border_color(if card.is_selected {
                            COL_ACCENT
                        } else {
                            COL_BORDER
                        })
                        .with_border_width(1.0),
                    |tui| {
                        if card.image_url.is_empty() {
                            tui.label(egui::RichText::new("?").size(32.0).color(COL_TEXT_DIM));
                        } else {
                            tui.ui_add(
                                egui::Image::new(card.image_url.as_str())
                                    .fit_to_exact_size(egui::vec2(SPRITE_SIZE, SPRITE_SIZE)),
                            );
                        }

                        tui.label(
                            egui::RichText::new(&card.name)
                                .size(11.0)
                                .color(COL_TEXT)
                                .monospace(),
                        );
                    },
                );

            if response.clicked() {
                clicked = Some(card.position);
            }
        }
    });

    clicked
}
