use eframe::egui;

/// Small label-over-value tile used for the model metadata strip and totals.
pub fn render_mini_metric(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label.to_uppercase())
                .size(9.0)
                .color(egui::Color32::from_gray(120)),
        );
        ui.label(egui::RichText::new(value).size(16.0).strong().color(color));
    });
}
