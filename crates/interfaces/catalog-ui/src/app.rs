use std::num::NonZeroUsize;

use crate::components::{grid, header, overlay, search};
use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use catalog_app_core::viewmodel::CatalogVm;
use catalog_app_core::{AppCommand, CatalogApplication};

pub struct CatalogUiApp {
    core: CatalogApplication,
    search_term: String,
    batch_size_draft: usize,
}

impl CatalogUiApp {
    pub fn new(core: CatalogApplication) -> Self {
        let batch_size_draft = core.state.settings.batch_size.get();
        Self {
            core,
            search_term: String::new(),
            batch_size_draft,
        }
    }

    fn dispatch(&mut self, cmd: AppCommand) {
        if let Err(e) = self.core.dispatch(cmd) {
            tracing::error!("Command failed: {e}");
        }
    }
}

impl eframe::App for CatalogUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_load_events();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN);
        });
        ctx.style_mut(|style| {
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let vm = self.core.view();
        let mut commands: Vec<AppCommand> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(32.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = header::draw(
                            tui,
                            self.core.is_loading(),
                            &mut self.batch_size_draft,
                            self.core.state.settings.batch_size.get(),
                        );
                        if resp.apply_batch_clicked {
                            let size = catalog_config::clamp_batch_size(self.batch_size_draft);
                            if let Some(n) = NonZeroUsize::new(size) {
                                commands.push(AppCommand::SetBatchSize(n));
                            }
                        }
                        if resp.reload_clicked {
                            commands.push(AppCommand::Reload);
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: percent(1.),
                        },
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(12.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| match &vm {
                        CatalogVm::Loading { label } => {
                            tui.style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Column,
                                flex_grow: 1.0,
                                gap: length(8.0),
                                justify_content: Some(taffy::JustifyContent::Center),
                                align_items: Some(taffy::AlignItems::Center),
                                ..Default::default()
                            })
                            .add(|tui| {
                                tui.ui_add(egui::Spinner::new().size(24.0));
                                tui.colored_label(COL_TEXT_DIM, label.as_str());
                            });
                        }
                        CatalogVm::Error { message } => {
                            tui.style(taffy::Style {
                                flex_direction: taffy::FlexDirection::Column,
                                flex_grow: 1.0,
                                gap: length(8.0),
                                justify_content: Some(taffy::JustifyContent::Center),
                                align_items: Some(taffy::AlignItems::Center),
                                ..Default::default()
                            })
                            .add(|tui| {
                                tui.colored_label(COL_DANGER, message.as_str());
                                if tui
                                    .ui(|ui| cmd_button(ui, "RETRY", "danger", true))
                                    .clicked()
                                {
                                    commands.push(AppCommand::Reload);
                                }
                            });
                        }
                        CatalogVm::Ready(ready) => {
                            if search::draw(
                                &mut *tui,
                                &mut self.search_term,
                                &ready.result_count_label,
                            ) {
                                commands.push(AppCommand::SetFilter(self.search_term.clone()));
                            }

                            if let Some(msg) = &ready.empty_message {
                                tui.style(taffy::Style {
                                    flex_grow: 1.0,
                                    justify_content: Some(taffy::JustifyContent::Center),
                                    align_items: Some(taffy::AlignItems::Center),
                                    ..Default::default()
                                })
                                .add(|tui| {
                                    tui.colored_label(COL_TEXT_DIM, msg.as_str());
                                });
                            } else if let Some(pos) = grid::draw(&mut *tui, &ready.cards) {
                                commands.push(AppCommand::Select(pos));
                            }
                        }
                    });
                });
        });

        if let CatalogVm::Ready(ready) = &vm {
            if let Some(detail) = &ready.overlay {
                let resp = overlay::draw(ctx, detail);
                if resp.next {
                    commands.push(AppCommand::Next);
                } else if resp.previous {
                    commands.push(AppCommand::Previous);
                }
                if resp.close {
                    commands.push(AppCommand::Close);
                }
            }
        }

        let had_commands = !commands.is_empty();
        for cmd in commands {
            self.dispatch(cmd);
        }

        if had_commands {
            ctx.request_repaint();
        }
        if self.core.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
