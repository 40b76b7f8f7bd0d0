use crate::application::ml::fund_model::FundModel;
use crate::application::provisioner::ModelProvisioner;
use crate::config::{Config, InputBounds};
use crate::domain::allocation::AllocationBreakdown;
use crate::interfaces::allocation_view::render_allocation_view;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::render_mini_metric;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::profile_form::{render_profile_form, ProfileForm};
use chrono::Utc;
use eframe::egui;
use std::sync::Arc;
use tracing::{error, warn};

/// The advisor dashboard. Owns the form state, the provisioner, and the
/// outcome of the latest prediction.
pub struct AdvisorApp {
    bounds: InputBounds,
    provisioner: ModelProvisioner,
    form: ProfileForm,
    model: Option<Arc<FundModel>>,
    result: Option<AllocationBreakdown>,
    inference_error: Option<String>,
    // A retrieval failure is terminal for the session.
    fatal_error: Option<String>,
}

impl AdvisorApp {
    pub fn new(config: &Config, provisioner: ModelProvisioner) -> Self {
        Self {
            form: ProfileForm::new(&config.bounds),
            bounds: config.bounds.clone(),
            provisioner,
            model: None,
            result: None,
            inference_error: None,
            fatal_error: None,
        }
    }

    /// One button press: provision (first time only), then one inference.
    fn run_prediction(&mut self) {
        self.inference_error = None;

        let model = match self.provisioner.predictor() {
            Ok(model) => model,
            Err(e) => {
                error!("Model provisioning failed: {}", e);
                self.fatal_error = Some(e.to_string());
                return;
            }
        };
        self.model = Some(Arc::clone(&model));

        match model.predict(&self.form.profile()) {
            Ok(breakdown) => {
                self.result = Some(breakdown);
            }
            Err(e) => {
                warn!("Prediction rejected: {}", e);
                self.result = None;
                self.inference_error = Some(e.to_string());
            }
        }
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("💰 Fundsage Advisor");
                ui.separator();
                ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (text, color) = if self.fatal_error.is_some() {
                        ("● MODEL UNAVAILABLE", DesignSystem::DANGER)
                    } else if self.provisioner.is_loaded() {
                        ("● MODEL READY", DesignSystem::SUCCESS)
                    } else {
                        ("● MODEL NOT LOADED", DesignSystem::TEXT_MUTED)
                    };
                    ui.label(egui::RichText::new(text).color(color).small());
                });
            });
        });
    }

    fn render_fatal(&self, ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    Card::new().title("Model Unavailable").show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(message)
                                .size(14.0)
                                .color(DesignSystem::DANGER),
                        );
                        ui.add_space(DesignSystem::SPACING_SMALL);
                        ui.label(
                            egui::RichText::new(
                                "The allocation model could not be obtained. \
                                 Restart the application to try again.",
                            )
                            .size(12.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                        );
                    });
                });
            });
    }

    fn render_model_info(&self, ui: &mut egui::Ui) {
        let Some(model) = &self.model else {
            return;
        };

        Card::new().title("Loaded Model").show(ui, |ui| {
            ui.horizontal(|ui| {
                render_mini_metric(
                    ui,
                    "Input features",
                    &model.feature_columns().len().to_string(),
                    DesignSystem::TEXT_PRIMARY,
                );
                ui.add_space(DesignSystem::SPACING_LARGE);
                render_mini_metric(
                    ui,
                    "Risk levels",
                    &model.risk_levels().join(", "),
                    DesignSystem::TEXT_PRIMARY,
                );
            });
        });
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        if let Some(message) = &self.inference_error {
            ui.label(
                egui::RichText::new(format!("Prediction failed: {}", message))
                    .color(DesignSystem::DANGER)
                    .size(13.0),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);
        }

        match &self.result {
            Some(breakdown) => {
                render_allocation_view(ui, breakdown);
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                self.render_model_info(ui);
            }
            None => {
                if self.inference_error.is_none() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(
                                "Fill in the profile and build an allocation plan. \
                                 The model is fetched on first use and may take a moment.",
                            )
                            .italics()
                            .color(DesignSystem::TEXT_MUTED),
                        );
                    });
                }
            }
        }
    }
}

impl eframe::App for AdvisorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_status_bar(ctx);

        if let Some(message) = self.fatal_error.clone() {
            self.render_fatal(ctx, &message);
            return;
        }

        let mut submitted = false;
        egui::SidePanel::left("profile_panel")
            .default_width(340.0)
            .min_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("profile_scroll")
                    .show(ui, |ui| {
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        submitted = render_profile_form(ui, &mut self.form, &self.bounds);
                    });
            });

        if submitted {
            self.run_prediction();
        }

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("results_scroll")
                    .show(ui, |ui| {
                        self.render_results(ui);
                    });
            });
    }
}
