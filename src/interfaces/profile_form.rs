//! Financial profile form (the seven model inputs)

use crate::config::InputBounds;
use crate::domain::profile::FinancialProfile;
use crate::domain::risk_appetite::RiskAppetite;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Mutable state backing the seven profile inputs.
pub struct ProfileForm {
    pub income: f64,
    pub age: u8,
    pub net_worth: f64,
    pub risk_appetite: RiskAppetite,
    pub investment_horizon_years: u8,
    pub expected_return_pct: f64,
    pub portfolio_volatility_pct: f64,
}

impl ProfileForm {
    pub fn new(bounds: &InputBounds) -> Self {
        Self {
            income: 100_000.0_f64.clamp(bounds.income_min, bounds.income_max),
            age: 30.clamp(bounds.age_min, bounds.age_max),
            net_worth: 500_000.0_f64.clamp(bounds.net_worth_min, bounds.net_worth_max),
            risk_appetite: RiskAppetite::Medium,
            investment_horizon_years: 10.clamp(bounds.horizon_min_years, bounds.horizon_max_years),
            expected_return_pct: 7.0,
            portfolio_volatility_pct: 10.0,
        }
    }

    /// Snapshot of the current form state, consumed by one prediction.
    pub fn profile(&self) -> FinancialProfile {
        FinancialProfile {
            income: self.income,
            age: self.age,
            net_worth: self.net_worth,
            risk_appetite: self.risk_appetite,
            investment_horizon_years: self.investment_horizon_years,
            expected_return_pct: self.expected_return_pct,
            portfolio_volatility_pct: self.portfolio_volatility_pct,
        }
    }
}

/// Renders the profile form. Returns true when the action button was clicked.
pub fn render_profile_form(
    ui: &mut egui::Ui,
    form: &mut ProfileForm,
    bounds: &InputBounds,
) -> bool {
    let mut submitted = false;

    Card::new().title("Financial Profile").show(ui, |ui| {
        ui.label(
            egui::RichText::new("All seven fields feed the allocation model.")
                .color(DesignSystem::TEXT_SECONDARY)
                .size(12.0),
        );
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.label("Annual income");
        ui.add(
            egui::DragValue::new(&mut form.income)
                .range(bounds.income_min..=bounds.income_max)
                .speed(1_000.0)
                .prefix("$"),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Net worth");
        ui.add(
            egui::DragValue::new(&mut form.net_worth)
                .range(bounds.net_worth_min..=bounds.net_worth_max)
                .speed(10_000.0)
                .prefix("$"),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Age");
        ui.add(egui::Slider::new(
            &mut form.age,
            bounds.age_min..=bounds.age_max,
        ));
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Risk appetite");
        egui::ComboBox::from_id_salt("risk_appetite")
            .selected_text(form.risk_appetite.as_str())
            .show_ui(ui, |ui| {
                for appetite in RiskAppetite::ALL {
                    ui.selectable_value(&mut form.risk_appetite, appetite, appetite.as_str());
                }
            });
        render_appetite_badge(ui, form.risk_appetite);
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Investment horizon");
        ui.add(
            egui::Slider::new(
                &mut form.investment_horizon_years,
                bounds.horizon_min_years..=bounds.horizon_max_years,
            )
            .suffix(" yrs"),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Expected return");
        ui.add(
            egui::Slider::new(
                &mut form.expected_return_pct,
                bounds.expected_return_min_pct..=bounds.expected_return_max_pct,
            )
            .suffix("%"),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.label("Acceptable volatility");
        ui.add(
            egui::Slider::new(
                &mut form.portfolio_volatility_pct,
                bounds.volatility_min_pct..=bounds.volatility_max_pct,
            )
            .suffix("%"),
        );
        ui.add_space(DesignSystem::SPACING_LARGE);

        let button = egui::Button::new(
            egui::RichText::new("Build Allocation Plan")
                .size(14.0)
                .color(DesignSystem::TEXT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY);

        if ui.add(button).clicked() {
            submitted = true;
        }
    });

    submitted
}

/// Color-coded badge restating the selected appetite.
fn render_appetite_badge(ui: &mut egui::Ui, appetite: RiskAppetite) {
    let color = match appetite {
        RiskAppetite::Low => DesignSystem::SUCCESS,
        RiskAppetite::Medium => DesignSystem::WARNING,
        RiskAppetite::High => DesignSystem::DANGER,
    };

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(appetite.as_str())
                .strong()
                .size(13.0)
                .color(color),
        );
        ui.label(
            egui::RichText::new(appetite.hint())
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );
    });
}
