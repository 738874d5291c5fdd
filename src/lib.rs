//! Call-center ROI calculator.
//!
//! Compares the monthly cost of a human-staffed support team against an
//! AI-assisted one and derives savings, cost reduction, ROI, payback period
//! and per-call cost. The model is a pure function of a staffing scenario
//! ([`RoiInput`]) and a set of business [`Assumptions`].
//!
//! # Quick start
//!
//! ```
//! use roi_calculator::{RoiCalculator, RoiInput};
//!
//! let calculator = RoiCalculator::builder().build().unwrap();
//!
//! let input = RoiInput::new(50, 300, 10_000).with_country("Bangladesh");
//! let result = calculator.compute(&input);
//!
//! assert_eq!(result.traditional_total_cost, 19_000.0);
//! assert_eq!(result.ai_total_cost, 10_000.0);
//! assert_eq!(result.automated_calls, 7_000);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;

pub use config::Assumptions;
pub use error::{Result, RoiError};
pub use models::{
    BaselineSelection, BaselineSource, CountryComparison, Estimate, PaybackPeriod, RoiInput,
    RoiResult,
};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// RoiCalculatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`RoiCalculator`].
///
/// Starts from [`Assumptions::default()`]. An assumptions file, when given,
/// is loaded first and individual overrides are applied on top of it, in
/// whatever order the methods were chained.
#[derive(Default)]
pub struct RoiCalculatorBuilder {
    assumptions: Option<Assumptions>,
    assumptions_file: Option<PathBuf>,
    overrides: Vec<Override>,
}

enum Override {
    AutomationRate(f64),
    AiCostPerAgent(f64),
    CountryBaseline(String, f64),
    PaybackCapMonths(f64),
}

impl RoiCalculatorBuilder {
    /// Replace the base assumptions entirely.
    pub fn assumptions(mut self, assumptions: Assumptions) -> Self {
        self.assumptions = Some(assumptions);
        self
    }

    /// Load the base assumptions from a JSON file at build time.
    ///
    /// Takes precedence over [`assumptions()`](Self::assumptions).
    pub fn assumptions_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.assumptions_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the share of call volume handled without a human.
    pub fn automation_rate(mut self, rate: f64) -> Self {
        self.overrides.push(Override::AutomationRate(rate));
        self
    }

    /// Override the monthly AI-assisted cost per agent seat.
    pub fn ai_cost_per_agent(mut self, cost: f64) -> Self {
        self.overrides.push(Override::AiCostPerAgent(cost));
        self
    }

    /// Add or replace a country's baseline cost per agent.
    pub fn country_baseline(mut self, country: impl Into<String>, cost: f64) -> Self {
        self.overrides
            .push(Override::CountryBaseline(country.into(), cost));
        self
    }

    /// Override the upper bound on a finite payback period.
    pub fn payback_cap_months(mut self, months: f64) -> Self {
        self.overrides.push(Override::PaybackCapMonths(months));
        self
    }

    /// Resolve and validate the assumptions, then build the calculator.
    pub fn build(self) -> Result<RoiCalculator> {
        let mut assumptions = match &self.assumptions_file {
            Some(path) => {
                let loaded = Assumptions::from_file(path)?;
                tracing::info!(path = %path.display(), "loaded ROI assumptions");
                loaded
            }
            None => self.assumptions.unwrap_or_default(),
        };

        for o in self.overrides {
            match o {
                Override::AutomationRate(rate) => assumptions.automation_rate = rate,
                Override::AiCostPerAgent(cost) => assumptions.ai_cost_per_agent = cost,
                Override::CountryBaseline(country, cost) => {
                    assumptions.country_baselines.insert(country, cost);
                }
                Override::PaybackCapMonths(months) => assumptions.payback_cap_months = months,
            }
        }

        assumptions.validate()?;
        Ok(RoiCalculator { assumptions })
    }
}

// ---------------------------------------------------------------------------
// RoiCalculator
// ---------------------------------------------------------------------------

/// Entry point for running the ROI model against a fixed set of assumptions.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone)]
pub struct RoiCalculator {
    assumptions: Assumptions,
}

impl RoiCalculator {
    /// Create a new builder for configuring the calculator.
    pub fn builder() -> RoiCalculatorBuilder {
        RoiCalculatorBuilder::default()
    }

    /// The validated assumptions this calculator runs with.
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the ROI model for a scenario.
    pub fn compute(&self, input: &RoiInput) -> RoiResult {
        self.estimate(input).result
    }

    /// Run the ROI model and also report which cost baseline was used.
    ///
    /// Logs a warning when a recognized country overrides a different
    /// explicit `cost_per_agent`.
    pub fn estimate(&self, input: &RoiInput) -> Estimate {
        let baseline = calculator::resolve_baseline(input, &self.assumptions);
        if let (Some(overridden), BaselineSource::Country(country)) =
            (baseline.overridden_cost, &baseline.source)
        {
            tracing::warn!(
                country = %country,
                cost_per_agent = overridden,
                baseline = baseline.agent_cost,
                "country baseline overrides explicit cost_per_agent"
            );
        }

        let result =
            calculator::compute_with_agent_cost(input, baseline.agent_cost, &self.assumptions);
        tracing::debug!(
            agents = input.agent_count,
            calls = input.monthly_call_volume,
            source = ?baseline.source,
            monthly_savings = result.monthly_savings,
            "computed ROI estimate"
        );

        Estimate { baseline, result }
    }

    /// Price the scenario under every configured country baseline.
    pub fn compare_countries(&self, input: &RoiInput) -> Vec<CountryComparison> {
        calculator::compare_countries(input, &self.assumptions)
    }

    /// Evaluate a JSON request body and return the JSON response body.
    ///
    /// Only the shape of the request is checked; value ranges are not
    /// validated here.
    pub fn evaluate_json(&self, body: &str) -> Result<String> {
        let input: RoiInput = serde_json::from_str(body)?;
        let result = self.compute(&input);
        Ok(serde_json::to_string(&result)?)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for RoiCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.assumptions;
        let countries: Vec<&str> = a.country_baselines.keys().map(String::as_str).collect();
        write!(
            f,
            "RoiCalculator(automation_rate={}, ai_cost_per_agent={}, countries=[{}])",
            a.automation_rate,
            a.ai_cost_per_agent,
            countries.join(", ")
        )
    }
}
