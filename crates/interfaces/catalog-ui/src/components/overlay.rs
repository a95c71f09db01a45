use crate::theme::*;
use crate::utils::{badge, cmd_button, section_label};
use catalog_app_core::viewmodel::DetailVm;
use eframe::egui;

#[derive(Default)]
pub struct OverlayResponse {
    pub close: bool,
    pub next: bool,
    pub previous: bool,
}

/// Modal detail view for the selected entry.
pub fn draw(ctx: &egui::Context, vm: &DetailVm) -> OverlayResponse {
    let mut resp = OverlayResponse::default();

    let modal = egui::Modal::new(egui::Id::new("catalog-entry-detail")).show(ctx, |ui| {
        ui.set_width(320.0);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&vm.id_label)
                    .size(12.0)
                    .color(COL_TEXT_DIM)
                    .monospace(),
            );
            ui.label(
                egui::RichText::new(vm.name.to_uppercase())
                    .size(16.0)
                    .strong()
                    .color(COL_TEXT),
            );
        });

        if !vm.image_url.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Image::new(vm.image_url.as_str())
                        .fit_to_exact_size(egui::vec2(160.0, 160.0)),
                );
            });
        }

        section_label(ui, "TYPES");
        ui.horizontal_wrapped(|ui| {
            for category in &vm.categories {
                badge(ui, category);
            }
        });

        ui.separator();

        egui::Grid::new("catalog-entry-stats")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                section_label(ui, "WEIGHT");
                ui.label(egui::RichText::new(&vm.weight_label).color(COL_ACCENT));
                ui.end_row();

                section_label(ui, "BASE EXP");
                ui.label(egui::RichText::new(&vm.base_experience_label).color(COL_ACCENT));
                ui.end_row();
            });

        ui.separator();

        ui.horizontal(|ui| {
            if vm.show_navigation {
                resp.previous = cmd_button(ui, "< PREV", "outline", true).clicked();
                ui.label(
                    egui::RichText::new(&vm.position_label)
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
                resp.next = cmd_button(ui, "NEXT >", "outline", true).clicked();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                resp.close = cmd_button(ui, "CLOSE", "primary", true).clicked();
            });
        });

        if vm.show_navigation {
            ui.input(|i| {
                resp.next |= i.key_pressed(egui::Key::ArrowRight);
                resp.previous |= i.key_pressed(egui::Key::ArrowLeft);
            });
        }
    });

    // Escape and clicks outside the modal close it as well.
    if modal.should_close() {
        resp.close = true;
    }

    resp
}
