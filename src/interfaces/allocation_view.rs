//! Results pane: chart, table, and textual summary for one allocation

use crate::domain::allocation::AllocationBreakdown;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::render_allocation_chart;
use crate::interfaces::components::metrics::render_mini_metric;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_allocation_view(ui: &mut egui::Ui, breakdown: &AllocationBreakdown) {
    Card::new().title("Recommended Allocation").show(ui, |ui| {
        render_allocation_chart(ui, breakdown);
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        egui::Grid::new("allocation_table")
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Category");
                ui.strong("Share");
                ui.end_row();

                for (category, value) in breakdown.entries() {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui
                            .allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().rect_filled(
                            rect,
                            2.0,
                            DesignSystem::category_color(category),
                        );
                        ui.label(category.label());
                    });
                    ui.label(format!("{:.2}%", value));
                    ui.end_row();
                }
            });

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.separator();
        ui.add_space(DesignSystem::SPACING_SMALL);

        // The summary restates the six values and their observed sum; no
        // renormalization happens anywhere between model output and display.
        ui.label(
            egui::RichText::new(breakdown.summary_text())
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );

        ui.add_space(DesignSystem::SPACING_SMALL);
        render_mini_metric(
            ui,
            "Reported total",
            &format!("{:.2}%", breakdown.total()),
            DesignSystem::ACCENT_PRIMARY,
        );
    });
}
