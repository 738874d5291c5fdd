use serde::{Deserialize, Serialize};

use super::baseline::BaselineSelection;

// ---------------------------------------------------------------------------
// PaybackPeriod — Months until savings cover the AI spend
// ---------------------------------------------------------------------------

/// Payback period in months, or `NotApplicable` when the scenario never
/// saves money.
///
/// Serialized as a plain JSON number, with `null` for `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum PaybackPeriod {
    Finite(f64),
    NotApplicable,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Finite(months) => Some(*months),
            PaybackPeriod::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, PaybackPeriod::Finite(_))
    }
}

impl From<Option<f64>> for PaybackPeriod {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(months) if months.is_finite() => PaybackPeriod::Finite(months),
            _ => PaybackPeriod::NotApplicable,
        }
    }
}

impl From<PaybackPeriod> for Option<f64> {
    fn from(value: PaybackPeriod) -> Self {
        value.months()
    }
}

// ---------------------------------------------------------------------------
// RoiResult — Traditional vs. AI-assisted monthly cost comparison
// ---------------------------------------------------------------------------

/// Output of the ROI model. All money values are USD per month unless the
/// field name says otherwise; percentages are plain numbers (`47.3` = 47.3%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoiResult {
    // -- Traditional (human-staffed) --
    pub traditional_labor_cost: f64,
    pub traditional_technology_cost: f64,
    pub traditional_infrastructure_cost: f64,
    pub traditional_total_cost: f64,

    // -- AI-assisted --
    pub ai_voice_cost: f64,
    pub ai_processing_cost: f64,
    pub ai_platform_fee: f64,
    pub ai_total_cost: f64,

    // -- Savings --
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub cost_reduction_percentage: f64,
    pub roi_percentage: f64,
    pub payback_period_months: PaybackPeriod,

    // -- Per call --
    pub traditional_cost_per_call: f64,
    pub ai_cost_per_call: f64,

    // -- Volume --
    pub call_volume_processed: u64,
    pub automated_calls: u64,
    pub human_assisted_calls: u64,
    /// Fraction of volume automated (`0.7`, not `70`).
    pub automation_rate: f64,
}

// ---------------------------------------------------------------------------
// Estimate — A result together with the baseline that produced it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Estimate {
    pub baseline: BaselineSelection,
    pub result: RoiResult,
}

// ---------------------------------------------------------------------------
// CountryComparison — One scenario priced under a single country baseline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CountryComparison {
    pub country: String,
    pub agent_cost: f64,
    pub result: RoiResult,
}
