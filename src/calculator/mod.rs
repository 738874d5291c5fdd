//! The ROI model.
//!
//! [`compute`] maps a staffing scenario to a comparison of human-staffed and
//! AI-assisted monthly operating cost. It performs no I/O, holds no state and
//! never fails: every division has an explicit fallback and the payback cap
//! is applied without panicking, even for assumptions that skipped
//! validation. For inputs within the documented ranges and validated
//! assumptions the result never contains NaN or infinity; inputs far outside
//! those ranges (e.g. a `cost_per_agent` near `f64::MAX`) can overflow.

pub mod comparison;

pub use comparison::compare_countries;

use crate::config::Assumptions;
use crate::models::{BaselineSelection, BaselineSource, PaybackPeriod, RoiInput, RoiResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Run the ROI model for `input` under `assumptions`.
pub fn compute(input: &RoiInput, assumptions: &Assumptions) -> RoiResult {
    let baseline = resolve_baseline(input, assumptions);
    compute_with_agent_cost(input, baseline.agent_cost, assumptions)
}

/// Pick the monthly cost per human agent for a scenario.
///
/// Precedence: a recognized country's baseline, then the explicit
/// `cost_per_agent`, then the configured fallback. A non-finite explicit cost
/// counts as absent.
pub fn resolve_baseline(input: &RoiInput, assumptions: &Assumptions) -> BaselineSelection {
    let explicit = input.cost_per_agent.filter(|cost| cost.is_finite());

    if let Some(country) = input.country.as_deref() {
        if let Some(agent_cost) = assumptions.country_baseline(country) {
            return BaselineSelection {
                agent_cost,
                source: BaselineSource::Country(country.to_string()),
                overridden_cost: explicit.filter(|cost| *cost != agent_cost),
            };
        }
    }

    match explicit {
        Some(agent_cost) => BaselineSelection {
            agent_cost,
            source: BaselineSource::Explicit,
            overridden_cost: None,
        },
        None => BaselineSelection {
            agent_cost: assumptions.fallback_agent_cost(),
            source: BaselineSource::Fallback,
            overridden_cost: None,
        },
    }
}

/// Run the model with an already-resolved cost per human agent.
pub(crate) fn compute_with_agent_cost(
    input: &RoiInput,
    agent_cost: f64,
    assumptions: &Assumptions,
) -> RoiResult {
    let agents = f64::from(input.agent_count);
    let volume = input.monthly_call_volume;

    // Traditional
    let traditional_labor_cost = agents * agent_cost;
    let traditional_technology_cost = agents * assumptions.technology_cost_per_agent;
    let traditional_infrastructure_cost = agents * assumptions.infrastructure_cost_per_agent;
    let traditional_total_cost =
        traditional_labor_cost + traditional_technology_cost + traditional_infrastructure_cost;

    // AI-assisted
    let ai_total_cost = agents * assumptions.ai_cost_per_agent;
    let split = &assumptions.ai_cost_split;
    let ai_platform_fee = ai_total_cost * split.platform_fee;
    let ai_processing_cost = ai_total_cost * split.processing;
    let ai_voice_cost = ai_total_cost * split.voice;

    // Volume
    let automated_calls = automated_calls(volume, assumptions.automation_rate);
    let human_assisted_calls = volume - automated_calls;

    // Savings
    let monthly_savings = traditional_total_cost - ai_total_cost;
    let annual_savings = monthly_savings * MONTHS_PER_YEAR;
    let annual_ai_cost = ai_total_cost * MONTHS_PER_YEAR;

    // Floored for display only; monthly_savings keeps its sign.
    let cost_reduction_percentage = if traditional_total_cost > 0.0 {
        (monthly_savings / traditional_total_cost * 100.0).max(0.0)
    } else {
        0.0
    };

    let roi_percentage = if ai_total_cost > 0.0 && monthly_savings > 0.0 {
        annual_savings / annual_ai_cost * 100.0
    } else {
        0.0
    };

    let payback_period_months = if monthly_savings > 0.0 {
        PaybackPeriod::Finite(cap_payback(
            annual_ai_cost / monthly_savings,
            assumptions.payback_cap_months,
        ))
    } else {
        PaybackPeriod::NotApplicable
    };

    // Per call
    let (traditional_cost_per_call, ai_cost_per_call) = if volume > 0 {
        let calls = volume as f64;
        (traditional_total_cost / calls, ai_total_cost / calls)
    } else {
        (0.0, 0.0)
    };

    RoiResult {
        traditional_labor_cost,
        traditional_technology_cost,
        traditional_infrastructure_cost,
        traditional_total_cost,
        ai_voice_cost,
        ai_processing_cost,
        ai_platform_fee,
        ai_total_cost,
        monthly_savings,
        annual_savings,
        cost_reduction_percentage,
        roi_percentage,
        payback_period_months,
        traditional_cost_per_call,
        ai_cost_per_call,
        call_volume_processed: volume,
        automated_calls,
        human_assisted_calls,
        automation_rate: assumptions.automation_rate,
    }
}

/// Bound `months` to `[0, cap]`. A NaN or negative cap is ignored.
fn cap_payback(months: f64, cap: f64) -> f64 {
    let months = months.max(0.0);
    if cap >= 0.0 {
        months.min(cap)
    } else {
        months
    }
}

/// `floor(volume × rate)`, never more than `volume`.
fn automated_calls(volume: u64, rate: f64) -> u64 {
    let automated = (volume as f64 * rate).floor();
    if automated <= 0.0 {
        0
    } else {
        (automated as u64).min(volume)
    }
}
