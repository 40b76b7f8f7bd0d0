use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// One-time style setup, called from the eframe creation closure.
pub fn configure_style(ctx: &egui::Context) {
    ctx.set_visuals(DesignSystem::theme());
}
