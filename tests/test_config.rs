//! Assumptions: defaults, JSON loading, validation and builder overrides.

mod common;

use roi_calculator::config::{
    self, AiCostSplit, AI_BASE_INFRASTRUCTURE_COST, AI_MARGIN, DEFAULT_AI_COST_PER_AGENT,
};
use roi_calculator::{Assumptions, RoiCalculator, RoiError, RoiInput};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn defaults_match_published_constants() {
    let a = Assumptions::default();
    assert_eq!(a.automation_rate, 0.70);
    assert_eq!(a.ai_cost_per_agent, 200.0);
    assert_eq!(a.technology_cost_per_agent, 50.0);
    assert_eq!(a.infrastructure_cost_per_agent, 30.0);
    assert_eq!(a.fallback_country, "India");
    assert_eq!(a.fallback_agent_cost(), 500.0);
    assert_eq!(a.payback_cap_months, 240.0);
    assert_eq!(a.ai_cost_split, AiCostSplit::default());
    assert_eq!(a.country_baselines, config::country_baselines());
    assert!(a.validate().is_ok());
}

#[test]
fn ai_cost_is_base_plus_margin_rounded() {
    let derived = AI_BASE_INFRASTRUCTURE_COST * AI_MARGIN;
    assert!((derived - DEFAULT_AI_COST_PER_AGENT).abs() < 1.0);
}

#[test]
fn default_split_sums_to_one() {
    let s = AiCostSplit::default();
    assert!((s.platform_fee + s.processing + s.voice - 1.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// JSON loading
// ---------------------------------------------------------------------------

#[test]
fn partial_json_keeps_remaining_defaults() {
    let a = Assumptions::from_json(r#"{"automation_rate": 0.6}"#).unwrap();
    assert_eq!(a.automation_rate, 0.6);
    assert_eq!(a.ai_cost_per_agent, 200.0);
    assert_eq!(a.country_baselines.len(), 4);
}

#[test]
fn country_table_in_json_replaces_default_table() {
    let a = Assumptions::from_json(
        r#"{"country_baselines": {"Kenya": 450}, "fallback_country": "Kenya"}"#,
    )
    .unwrap();
    assert_eq!(a.country_baselines.len(), 1);
    assert_eq!(a.fallback_agent_cost(), 450.0);
    assert_eq!(a.country_baseline("Kenya"), Some(450.0));
    assert_eq!(a.country_baseline("India"), None);
}

#[test]
fn from_file_reads_json() {
    let file = common::write_temp_json(r#"{"ai_cost_per_agent": 250, "payback_cap_months": 120}"#);
    let a = Assumptions::from_file(file.path()).unwrap();
    assert_eq!(a.ai_cost_per_agent, 250.0);
    assert_eq!(a.payback_cap_months, 120.0);
}

#[test]
fn from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Assumptions::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, RoiError::Io(_)));
}

#[test]
fn malformed_json_is_json_error() {
    let err = Assumptions::from_json("{ not json").unwrap_err();
    assert!(matches!(err, RoiError::Json(_)));
}

#[test]
fn invalid_values_in_json_are_rejected() {
    let err = Assumptions::from_json(r#"{"automation_rate": 1.5}"#).unwrap_err();
    assert!(matches!(err, RoiError::InvalidAssumption(_)));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn rejects(a: Assumptions, needle: &str) {
    match a.validate() {
        Err(RoiError::InvalidAssumption(msg)) => {
            assert!(msg.contains(needle), "message {:?} lacks {:?}", msg, needle)
        }
        other => panic!("expected InvalidAssumption, got {:?}", other),
    }
}

#[test]
fn validate_rejects_automation_rate_out_of_range() {
    rejects(
        Assumptions {
            automation_rate: -0.1,
            ..Assumptions::default()
        },
        "automation_rate",
    );
    rejects(
        Assumptions {
            automation_rate: f64::NAN,
            ..Assumptions::default()
        },
        "automation_rate",
    );
}

#[test]
fn validate_accepts_automation_rate_bounds() {
    for rate in [0.0, 1.0] {
        let a = Assumptions {
            automation_rate: rate,
            ..Assumptions::default()
        };
        assert!(a.validate().is_ok());
    }
}

#[test]
fn validate_rejects_negative_costs() {
    rejects(
        Assumptions {
            technology_cost_per_agent: -1.0,
            ..Assumptions::default()
        },
        "technology_cost_per_agent",
    );
    rejects(
        Assumptions {
            ai_cost_per_agent: f64::INFINITY,
            ..Assumptions::default()
        },
        "ai_cost_per_agent",
    );
}

#[test]
fn validate_rejects_split_not_summing_to_one() {
    rejects(
        Assumptions {
            ai_cost_split: AiCostSplit {
                platform_fee: 0.3,
                processing: 0.3,
                voice: 0.3,
            },
            ..Assumptions::default()
        },
        "sum to 1",
    );
}

#[test]
fn validate_rejects_empty_or_bad_country_table() {
    let mut a = Assumptions::default();
    a.country_baselines.clear();
    rejects(a, "at least one country");

    let mut a = Assumptions::default();
    a.country_baselines.insert("Kenya".to_string(), 0.0);
    rejects(a, "country_baselines.Kenya");

    let mut a = Assumptions::default();
    a.country_baselines.insert("  ".to_string(), 100.0);
    rejects(a, "empty country name");
}

#[test]
fn validate_rejects_non_positive_cap() {
    rejects(
        Assumptions {
            payback_cap_months: 0.0,
            ..Assumptions::default()
        },
        "payback_cap_months",
    );
}

#[test]
fn validate_rejects_fallback_country_missing_from_table() {
    rejects(
        Assumptions {
            fallback_country: "Atlantis".to_string(),
            ..Assumptions::default()
        },
        "fallback_country",
    );
}

#[test]
fn json_table_without_fallback_country_is_rejected() {
    let err = Assumptions::from_json(r#"{"country_baselines": {"Kenya": 450}}"#).unwrap_err();
    match err {
        RoiError::InvalidAssumption(msg) => assert!(msg.contains("fallback_country")),
        other => panic!("expected InvalidAssumption, got {:?}", other),
    }
}

#[test]
fn fallback_cost_follows_table_edits() {
    let mut a = Assumptions::default();
    a.country_baselines.insert("India".to_string(), 650.0);
    assert_eq!(a.fallback_agent_cost(), 650.0);
}

#[test]
fn unvalidated_missing_fallback_country_uses_constant() {
    let a = Assumptions {
        fallback_country: "Atlantis".to_string(),
        ..Assumptions::default()
    };
    assert_eq!(a.fallback_agent_cost(), config::FALLBACK_AGENT_COST);
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_defaults() {
    let calc = RoiCalculator::builder().build().unwrap();
    assert_eq!(calc.assumptions(), &Assumptions::default());
}

#[test]
fn builder_overrides_apply() {
    let calc = RoiCalculator::builder()
        .automation_rate(0.8)
        .ai_cost_per_agent(150.0)
        .country_baseline("Kenya", 450.0)
        .payback_cap_months(60.0)
        .build()
        .unwrap();

    let a = calc.assumptions();
    assert_eq!(a.automation_rate, 0.8);
    assert_eq!(a.ai_cost_per_agent, 150.0);
    assert_eq!(a.country_baseline("Kenya"), Some(450.0));
    assert_eq!(a.country_baseline("India"), Some(500.0));
    assert_eq!(a.payback_cap_months, 60.0);
}

#[test]
fn builder_overrides_apply_on_top_of_file() {
    let file = common::write_temp_json(r#"{"automation_rate": 0.5, "ai_cost_per_agent": 300}"#);
    let calc = RoiCalculator::builder()
        .assumptions_file(file.path())
        .automation_rate(0.9)
        .build()
        .unwrap();

    assert_eq!(calc.assumptions().automation_rate, 0.9);
    assert_eq!(calc.assumptions().ai_cost_per_agent, 300.0);
}

#[test]
fn builder_file_takes_precedence_over_assumptions() {
    let file = common::write_temp_json(r#"{"ai_cost_per_agent": 300}"#);
    let calc = RoiCalculator::builder()
        .assumptions(common::expensive_ai())
        .assumptions_file(file.path())
        .build()
        .unwrap();
    assert_eq!(calc.assumptions().ai_cost_per_agent, 300.0);
}

#[test]
fn builder_rejects_invalid_override() {
    let err = RoiCalculator::builder()
        .automation_rate(2.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, RoiError::InvalidAssumption(_)));
}

#[test]
fn builder_assumptions_drive_compute() {
    let calc = RoiCalculator::builder()
        .assumptions(common::expensive_ai())
        .build()
        .unwrap();
    let r = calc.compute(&RoiInput::new(1, 300, 100));
    assert_eq!(r.ai_total_cost, 1_000.0);
}

#[test]
fn assumptions_round_trip_through_json() {
    let a = Assumptions::default();
    let text = serde_json::to_string(&a).unwrap();
    assert_eq!(Assumptions::from_json(&text).unwrap(), a);
}
