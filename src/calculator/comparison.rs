//! The same scenario priced under every configured country baseline.

use crate::config::Assumptions;
use crate::models::{CountryComparison, RoiInput};

use super::compute_with_agent_cost;

/// Evaluate `input` once per country in `assumptions.country_baselines`.
///
/// The scenario's own `country` and `cost_per_agent` are ignored; each entry
/// uses that country's baseline. Results are ordered by baseline cost
/// (cheapest first), ties broken by country name.
pub fn compare_countries(input: &RoiInput, assumptions: &Assumptions) -> Vec<CountryComparison> {
    let mut comparisons: Vec<CountryComparison> = assumptions
        .country_baselines
        .iter()
        .map(|(country, agent_cost)| CountryComparison {
            country: country.clone(),
            agent_cost: *agent_cost,
            result: compute_with_agent_cost(input, *agent_cost, assumptions),
        })
        .collect();

    comparisons.sort_by(|a, b| {
        a.agent_cost
            .total_cmp(&b.agent_cost)
            .then_with(|| a.country.cmp(&b.country))
    });

    comparisons
}
