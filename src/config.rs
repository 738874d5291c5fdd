//! Business assumptions behind the ROI model.
//!
//! Every constant the calculator relies on lives in [`Assumptions`], so the
//! model is a pure function of `(input, assumptions)`. [`Assumptions::default()`]
//! reproduces the published marketing-site figures; a JSON file can override
//! any subset of them.

use crate::error::{Result, RoiError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Share of monthly call volume resolved without a human agent.
pub const DEFAULT_AUTOMATION_RATE: f64 = 0.70;

/// Base monthly infrastructure cost of one AI-assisted seat, before margin.
pub const AI_BASE_INFRASTRUCTURE_COST: f64 = 154.0;

/// Margin applied on top of [`AI_BASE_INFRASTRUCTURE_COST`].
pub const AI_MARGIN: f64 = 1.3;

/// Monthly AI-assisted cost per agent seat (`154 × 1.3`, rounded to 200).
pub const DEFAULT_AI_COST_PER_AGENT: f64 = 200.0;

pub const DEFAULT_TECHNOLOGY_COST_PER_AGENT: f64 = 50.0;
pub const DEFAULT_INFRASTRUCTURE_COST_PER_AGENT: f64 = 30.0;

/// Upper bound applied to a finite payback period (20 years).
pub const DEFAULT_PAYBACK_CAP_MONTHS: f64 = 240.0;

/// Country whose baseline is used when neither a country nor an explicit
/// cost per agent is supplied.
pub const FALLBACK_COUNTRY: &str = "India";

/// Cost per agent used when the fallback country is missing from the table.
/// Only reachable with assumptions that skipped [`Assumptions::validate`].
pub const FALLBACK_AGENT_COST: f64 = 500.0;

const SPLIT_TOLERANCE: f64 = 1e-9;

/// Default monthly cost per human agent in USD, keyed by country name.
pub fn country_baselines() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("Bangladesh".to_string(), 300.0),
        ("India".to_string(), 500.0),
        ("Philippines".to_string(), 600.0),
        ("Vietnam".to_string(), 550.0),
    ])
}

// ---------------------------------------------------------------------------
// AiCostSplit
// ---------------------------------------------------------------------------

/// Proportional breakdown of the AI-assisted total into reporting lines.
///
/// The split has no meaning of its own; the three fractions must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiCostSplit {
    pub platform_fee: f64,
    pub processing: f64,
    pub voice: f64,
}

impl Default for AiCostSplit {
    fn default() -> Self {
        Self {
            platform_fee: 0.30,
            processing: 0.50,
            voice: 0.20,
        }
    }
}

impl AiCostSplit {
    fn total(&self) -> f64 {
        self.platform_fee + self.processing + self.voice
    }
}

// ---------------------------------------------------------------------------
// Assumptions
// ---------------------------------------------------------------------------

/// The full set of business assumptions consumed by the calculator.
///
/// Missing fields in a JSON document take their default value, so an
/// override file only needs to name what it changes:
///
/// ```json
/// {
///   "automation_rate": 0.6,
///   "country_baselines": { "Kenya": 450, "Egypt": 400 },
///   "fallback_country": "Kenya"
/// }
/// ```
///
/// Note that `country_baselines` replaces the default table wholesale when
/// present, so it must still contain `fallback_country`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub automation_rate: f64,
    pub ai_cost_per_agent: f64,
    pub technology_cost_per_agent: f64,
    pub infrastructure_cost_per_agent: f64,
    pub ai_cost_split: AiCostSplit,
    pub country_baselines: BTreeMap<String, f64>,
    /// Country whose baseline applies when no country matches and no
    /// explicit cost is given. Must be a key of `country_baselines`.
    pub fallback_country: String,
    pub payback_cap_months: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            automation_rate: DEFAULT_AUTOMATION_RATE,
            ai_cost_per_agent: DEFAULT_AI_COST_PER_AGENT,
            technology_cost_per_agent: DEFAULT_TECHNOLOGY_COST_PER_AGENT,
            infrastructure_cost_per_agent: DEFAULT_INFRASTRUCTURE_COST_PER_AGENT,
            ai_cost_split: AiCostSplit::default(),
            country_baselines: country_baselines(),
            fallback_country: FALLBACK_COUNTRY.to_string(),
            payback_cap_months: DEFAULT_PAYBACK_CAP_MONTHS,
        }
    }
}

impl Assumptions {
    /// Load assumptions from a JSON file and validate them.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Parse assumptions from a JSON document and validate them.
    pub fn from_json(text: &str) -> Result<Self> {
        let assumptions: Assumptions = serde_json::from_str(text)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Look up the baseline cost for a country name (exact match).
    pub fn country_baseline(&self, country: &str) -> Option<f64> {
        self.country_baselines.get(country).copied()
    }

    /// The fallback country's current baseline.
    ///
    /// Looked up on every call, so edits to the table carry through.
    pub fn fallback_agent_cost(&self) -> f64 {
        self.country_baseline(&self.fallback_country)
            .unwrap_or(FALLBACK_AGENT_COST)
    }

    /// Check that the assumptions describe a usable model.
    ///
    /// The calculator itself never fails, so anything that would let it
    /// produce NaN or a nonsensical split is rejected here instead.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.automation_rate) {
            return Err(RoiError::InvalidAssumption(format!(
                "automation_rate must be within [0, 1], got {}",
                self.automation_rate
            )));
        }

        non_negative("ai_cost_per_agent", self.ai_cost_per_agent)?;
        non_negative("technology_cost_per_agent", self.technology_cost_per_agent)?;
        non_negative(
            "infrastructure_cost_per_agent",
            self.infrastructure_cost_per_agent,
        )?;

        let split = &self.ai_cost_split;
        non_negative("ai_cost_split.platform_fee", split.platform_fee)?;
        non_negative("ai_cost_split.processing", split.processing)?;
        non_negative("ai_cost_split.voice", split.voice)?;
        if (split.total() - 1.0).abs() > SPLIT_TOLERANCE {
            return Err(RoiError::InvalidAssumption(format!(
                "ai_cost_split fractions must sum to 1, got {}",
                split.total()
            )));
        }

        if self.country_baselines.is_empty() {
            return Err(RoiError::InvalidAssumption(
                "country_baselines must contain at least one country".to_string(),
            ));
        }
        for (country, cost) in &self.country_baselines {
            if country.trim().is_empty() {
                return Err(RoiError::InvalidAssumption(
                    "country_baselines contains an empty country name".to_string(),
                ));
            }
            positive(&format!("country_baselines.{}", country), *cost)?;
        }

        if !self.country_baselines.contains_key(&self.fallback_country) {
            return Err(RoiError::InvalidAssumption(format!(
                "fallback_country {:?} is not in country_baselines",
                self.fallback_country
            )));
        }
        positive("payback_cap_months", self.payback_cap_months)?;

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RoiError::InvalidAssumption(format!(
            "{} must be a finite non-negative number, got {}",
            field, value
        )))
    }
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RoiError::InvalidAssumption(format!(
            "{} must be a finite positive number, got {}",
            field, value
        )))
    }
}
