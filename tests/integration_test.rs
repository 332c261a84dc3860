//! Integration tests for netmerge
//!
//! These tests drive the public API the same way the binary does.

use netmerge::input::{read_tokens, split_tokens};
use netmerge::output::{render_json, render_text};
use netmerge::{
    merge_cidrs, merge_cidrs_detailed, merge_cidrs_with, AddressInterval, DistanceMetric,
    MergeError, MergeOptions, ParseError,
};

#[test]
fn test_adjacent_networks() {
    let out = merge_cidrs(&["10.0.0.0/24", "10.0.1.0/24"], 1).expect("merge failed");
    assert!(out.contains(&"10.0.0.0/23".to_string()));
}

#[test]
fn test_literal_passthrough() {
    let out = merge_cidrs(&["8.8.8.8/32", "8.8.8.9/32", "not-a-cidr"], 1).expect("merge failed");
    assert!(out.contains(&"not-a-cidr".to_string()));
    assert!(out.contains(&"8.8.8.8/31".to_string()));
    assert_eq!(out[0], "not-a-cidr");
}

#[test]
fn test_far_apart_networks() {
    let input = ["192.168.0.0/24", "10.0.0.0/24"];
    for metric in [DistanceMetric::Widened, DistanceMetric::Legacy] {
        let options = MergeOptions {
            metric,
            ..MergeOptions::default()
        };
        let outcome = merge_cidrs_detailed(&input, &options).expect("merge failed");
        assert!(outcome.merged.prefix_len <= 7);
        for cidr in input {
            let original = AddressInterval::parse(cidr).unwrap();
            assert!(outcome.merged.covers(&original));
        }
        assert_eq!(outcome.output, vec!["0.0.0.0/0"]);
    }
}

#[test]
fn test_parse_failure() {
    let result = merge_cidrs(&["10.0.0.0/33"], 1);
    assert_eq!(
        result,
        Err(MergeError::Parse(ParseError::InvalidPrefixLength(
            "10.0.0.0/33".to_string()
        )))
    );
}

#[test]
fn test_arity_guard() {
    assert_eq!(
        merge_cidrs(&["only", "literals"], 1),
        Err(MergeError::InsufficientVectors { found: 0 })
    );
    assert_eq!(
        merge_cidrs(&["10.0.0.0/8"], 1),
        Err(MergeError::InsufficientVectors { found: 1 })
    );
}

#[test]
fn test_legacy_metric_pinned() {
    // Under the legacy metric the two /1 halves are 0 apart after wraparound.
    let input = ["0.0.0.0/1", "10.0.0.0/24", "128.0.0.0/1", "10.0.1.0/24"];
    let legacy = MergeOptions {
        metric: DistanceMetric::Legacy,
        ..MergeOptions::default()
    };
    assert_eq!(
        merge_cidrs_with(&input, &legacy).unwrap(),
        vec!["10.0.0.0/24", "10.0.1.0/24", "0.0.0.0/0"]
    );
    assert_eq!(
        merge_cidrs_with(&input, &MergeOptions::default()).unwrap(),
        vec!["0.0.0.0/1", "128.0.0.0/1", "10.0.0.0/23"]
    );
}

#[test]
fn test_full_workflow_with_file() {
    let tokens = read_tokens(&["tests/test_data/allow_list_01.txt"]).expect("read failed");
    assert_eq!(tokens.len(), 6);

    let outcome = merge_cidrs_detailed(&tokens, &MergeOptions::default()).expect("merge failed");
    assert_eq!(outcome.literals, vec!["any"]);
    assert_eq!(outcome.merged.to_string(), "10.0.0.0/23");
    assert_eq!(
        outcome.output,
        vec!["any", "192.168.10.0/24", "172.16.0.0/16", "8.8.8.8/32", "10.0.0.0/23"]
    );

    let text = render_text(&outcome, false);
    assert_eq!(text.lines().count(), 5);

    let json = render_json(&outcome).expect("json failed");
    assert!(json.contains("\"merged\": \"10.0.0.0/23\""));
}

#[test]
fn test_bad_file_aborts() {
    let tokens = read_tokens(&["tests/test_data/allow_list_bad.txt"]).expect("read failed");
    let err = merge_cidrs(&tokens, 1).unwrap_err();
    assert!(matches!(err, MergeError::Parse(_)));
    assert!(err.to_string().contains("10.0.1.0/33"));
}

#[test]
fn test_round_trip_through_text() {
    let out = merge_cidrs(&split_tokens("10.1.0.0/16 10.2.0.0/16\nfoo"), 0).expect("merge failed");
    assert_eq!(out, vec!["foo", "10.0.0.0/14"]);
}
