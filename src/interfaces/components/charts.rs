use crate::domain::allocation::AllocationBreakdown;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Renders the six-way allocation as a bar chart, one bar per category.
pub fn render_allocation_chart(ui: &mut egui::Ui, breakdown: &AllocationBreakdown) {
    let bars: Vec<Bar> = breakdown
        .entries()
        .enumerate()
        .map(|(idx, (category, value))| {
            Bar::new(idx as f64, value)
                .name(category.label())
                .width(0.6)
                .fill(DesignSystem::category_color(category))
        })
        .collect();

    let chart = BarChart::new("Allocation", bars);

    Plot::new("allocation_plot")
        .height(240.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_axes([false, true])
        .show_grid([false, true])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
