// tests/policy.rs
use std::fs;
use std::path::PathBuf;

mod common;

use common::{BARE_HTML, YEAR};
use visibility_audit::error::PolicyError;
use visibility_audit::{Evaluator, ScoringPolicy, Verdict};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("visibility_audit_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn default_policy_is_valid() {
    ScoringPolicy::default().validate().unwrap();
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let p = ScoringPolicy::from_json(r#"{"thresholds":{"partially_visible":55,"ai_ready":81}}"#).unwrap();
    assert_eq!(p.thresholds.partially_visible, 55);
    assert_eq!(p.thresholds.ai_ready, 81);
    assert_eq!(p.weights, ScoringPolicy::default().weights);
    assert_eq!(p.fallback_score, 35);

    // 81 is ready under this table, not under the default one
    assert_eq!(Verdict::from_score(81, &p.thresholds), Verdict::AiReady);
    assert_eq!(
        Verdict::from_score(81, &ScoringPolicy::default().thresholds),
        Verdict::PartiallyVisible
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ScoringPolicy::from_json(r#"{"weight":{"ssl":5}}"#).unwrap_err();
    assert!(matches!(err, PolicyError::Parse(_)), "{err}");
}

#[test]
fn partial_credit_above_full_credit_is_invalid() {
    let err = ScoringPolicy::from_json(r#"{"weights":{"schema_partial":40}}"#).unwrap_err();
    assert!(matches!(err, PolicyError::Invalid(_)), "{err}");
}

#[test]
fn thresholds_must_be_ordered() {
    let err =
        ScoringPolicy::from_json(r#"{"thresholds":{"partially_visible":90,"ai_ready":85}}"#)
            .unwrap_err();
    assert!(matches!(err, PolicyError::Invalid(_)), "{err}");
}

#[test]
fn loads_policy_from_file() {
    let dir = tmp_dir("policy_load");
    let path = dir.join("policy.json");
    fs::write(&path, r#"{"fallback_score": 40, "voice_keywords": ["book"]}"#).unwrap();

    let p = ScoringPolicy::load(&path).unwrap();
    assert_eq!(p.fallback_score, 40);
    assert_eq!(p.voice_keywords, vec!["book".to_string()]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tmp_dir("policy_missing");
    let err = ScoringPolicy::load(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, PolicyError::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn verdicts_are_monotonic_in_score() {
    let t = ScoringPolicy::default().thresholds;
    let rank = |v: Verdict| match v {
        Verdict::InvisibleToAi => 0,
        Verdict::PartiallyVisible => 1,
        Verdict::AiReady => 2,
        Verdict::Restricted => unreachable!(),
    };
    let mut last = 0;
    for score in 0..=100u8 {
        let r = rank(Verdict::from_score(score, &t));
        assert!(r >= last, "verdict went down at {score}");
        last = r;
    }

    assert_eq!(Verdict::from_score(59, &t), Verdict::InvisibleToAi);
    assert_eq!(Verdict::from_score(60, &t), Verdict::PartiallyVisible);
    assert_eq!(Verdict::from_score(84, &t), Verdict::PartiallyVisible);
    assert_eq!(Verdict::from_score(85, &t), Verdict::AiReady);
}

#[test]
fn weights_flow_into_scores() {
    let mut policy = ScoringPolicy::default();
    policy.weights.accessibility = 5;
    let report = Evaluator::new(policy).with_year(YEAR).evaluate(BARE_HTML, "https://example.com");
    assert_eq!(report.signal("accessibility").unwrap().max(), 5);
    assert_eq!(report.score(), 35);
}
