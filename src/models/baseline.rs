use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BaselineSource — Where the per-agent labor cost came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "country", rename_all = "snake_case")]
pub enum BaselineSource {
    /// A recognized country's baseline.
    Country(String),
    /// The caller's `cost_per_agent`.
    Explicit,
    /// Neither was usable; the configured fallback baseline applies.
    Fallback,
}

// ---------------------------------------------------------------------------
// BaselineSelection — Resolved monthly cost per human agent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BaselineSelection {
    pub agent_cost: f64,
    pub source: BaselineSource,
    /// The explicit `cost_per_agent` that a country baseline took precedence over.
    pub overridden_cost: Option<f64>,
}

impl BaselineSelection {
    /// True when the caller supplied a `cost_per_agent` that was not used.
    pub fn overrode_explicit_cost(&self) -> bool {
        self.overridden_cost.is_some()
    }
}
