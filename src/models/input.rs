use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RoiInput — Staffing scenario submitted by the caller
// ---------------------------------------------------------------------------

/// A call-center staffing scenario.
///
/// Range constraints (1..=1000 agents, handle time in (60, 1800] seconds,
/// cost per agent within [200, 10000]) are the caller's responsibility; the
/// calculator accepts any value and only guards its own divisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoiInput {
    pub agent_count: u32,
    /// Average handle time per call, in seconds.
    pub average_handle_time: u32,
    pub monthly_call_volume: u64,
    /// Monthly cost per human agent in USD. Ignored when `country` names a
    /// known baseline.
    #[serde(default)]
    pub cost_per_agent: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
}

impl RoiInput {
    pub fn new(agent_count: u32, average_handle_time: u32, monthly_call_volume: u64) -> Self {
        Self {
            agent_count,
            average_handle_time,
            monthly_call_volume,
            cost_per_agent: None,
            country: None,
        }
    }

    pub fn with_cost_per_agent(mut self, cost: f64) -> Self {
        self.cost_per_agent = Some(cost);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}
