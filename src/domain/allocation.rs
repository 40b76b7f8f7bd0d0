use serde::{Deserialize, Serialize};

/// The six fund categories the model allocates across, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationCategory {
    Stock,
    Bond,
    FixedDeposit,
    Etf,
    Cash,
    Other,
}

impl AllocationCategory {
    /// All categories in the model's output-column order.
    pub const ALL: [AllocationCategory; 6] = [
        AllocationCategory::Stock,
        AllocationCategory::Bond,
        AllocationCategory::FixedDeposit,
        AllocationCategory::Etf,
        AllocationCategory::Cash,
        AllocationCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AllocationCategory::Stock => "Stock",
            AllocationCategory::Bond => "Bond",
            AllocationCategory::FixedDeposit => "Fixed Deposit",
            AllocationCategory::Etf => "ETF",
            AllocationCategory::Cash => "Cash",
            AllocationCategory::Other => "Other",
        }
    }
}

/// One inference result: six percentages, one per category.
///
/// Display-only and ephemeral. The values are not renormalized anywhere; the
/// reported total is whatever the six values sum to.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationBreakdown {
    values: [f64; 6],
}

impl AllocationBreakdown {
    pub fn new(values: [f64; 6]) -> Self {
        Self { values }
    }

    pub fn value(&self, category: AllocationCategory) -> f64 {
        let idx = AllocationCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        self.values[idx]
    }

    /// Category/value pairs in output order.
    pub fn entries(&self) -> impl Iterator<Item = (AllocationCategory, f64)> + '_ {
        AllocationCategory::ALL
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Arithmetic sum of the six values, as observed.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Textual summary restating each percentage and the observed total,
    /// everything at two decimals.
    pub fn summary_text(&self) -> String {
        let mut lines: Vec<String> = self
            .entries()
            .map(|(category, value)| format!("{}: {:.2}%", category.label(), value))
            .collect();
        lines.push(format!("Reported total: {:.2}%", self.total()));
        lines.join("\n")
    }
}
