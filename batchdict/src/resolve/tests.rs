//! Unit tests for group resolution and the cartesian product.

use std::sync::Arc;

use rstest::rstest;
use serde_json::json;

use super::{Combination, GroupId, Resolution, combination_count, resolve};
use test_helpers::to_anyhow;

use crate::{BatchError, BatchOptions, Keypath, Value, enumerate};

fn resolve_json(tree: serde_json::Value, mut options: BatchOptions) -> Result<Resolution, Arc<BatchError>> {
    let value = Value::from(tree);
    resolve(&enumerate(&value), &mut options)
}

fn picked(combination: &Combination, path: &str) -> Option<i64> {
    match combination.get(&Keypath::parse(path))? {
        Value::Scalar(crate::Scalar::Integer(i)) => Some(*i),
        _ => None,
    }
}

#[rstest]
fn no_markers_yield_one_empty_combination() -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(
        json!({"a": 1, "b": {"c": [1, 2]}}),
        BatchOptions::default(),
    ))?;
    anyhow::ensure!(resolution.groups().is_empty());
    anyhow::ensure!(resolution.combinations() == [Combination::default()]);
    Ok(())
}

#[rstest]
fn shared_identifier_zips_members() -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(
        json!({"a": {"@x": [1, 2, 3]}, "b": {"deep": {"@x": [4, 5, 6]}}}),
        BatchOptions::default(),
    ))?;
    let pairs: Vec<_> = resolution
        .combinations()
        .iter()
        .map(|c| (picked(c, "/a"), picked(c, "/b/deep")))
        .collect();
    anyhow::ensure!(
        pairs == [(Some(1), Some(4)), (Some(2), Some(5)), (Some(3), Some(6))],
        "unexpected pairs {pairs:?}"
    );
    Ok(())
}

#[rstest]
fn first_group_varies_slowest() -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(
        json!({"a": {"@2": [0, 1]}, "b": {"@1": [2, 3]}}),
        BatchOptions::default(),
    ))?;
    let order: Vec<_> = resolution
        .combinations()
        .iter()
        .map(|c| (picked(c, "/b"), picked(c, "/a")))
        .collect();
    anyhow::ensure!(
        order
            == [
                (Some(2), Some(0)),
                (Some(2), Some(1)),
                (Some(3), Some(0)),
                (Some(3), Some(1)),
            ],
        "unexpected order {order:?}"
    );
    Ok(())
}

#[rstest]
#[case(json!({"a": {"@": [1, 2]}, "b": {"@": [1, 2, 3]}}), 6, 2)]
#[case(json!({"a": {"@": [1]}, "b": {"@": [1]}, "c": {"@": [1, 2]}}), 2, 3)]
#[case(json!({"a": {"@k": [1, 2]}, "b": {"@k": [3, 4]}, "c": {"@": [5, 6, 7]}}), 6, 2)]
fn counts_multiply_across_groups(
    #[case] tree: serde_json::Value,
    #[case] combinations: usize,
    #[case] groups: usize,
) -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(tree, BatchOptions::default()))?;
    anyhow::ensure!(resolution.combinations().len() == combinations);
    anyhow::ensure!(resolution.groups().len() == groups);
    anyhow::ensure!(combination_count(resolution.groups()) == combinations);
    Ok(())
}

#[rstest]
fn anonymous_markers_never_share_a_group() -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(
        json!({"a": {"@": [1, 2]}, "b": {"@": [3, 4]}}),
        BatchOptions::default(),
    ))?;
    let ids: Vec<&str> = resolution.groups().keys().map(GroupId::as_str).collect();
    anyhow::ensure!(ids == ["~0", "~1"], "unexpected ids {ids:?}");
    Ok(())
}

#[rstest]
fn colliding_candidates_are_retried() -> anyhow::Result<()> {
    let mut candidates = vec!["1", "x", "x", "y"].into_iter();
    let source = move || candidates.next().unwrap_or("z").to_owned();
    let resolution = to_anyhow(resolve_json(
        json!({"a": {"@1": [1, 2]}, "b": {"@": [3, 4]}, "c": {"@": [5, 6]}}),
        BatchOptions::new().with_identifiers(source),
    ))?;
    let ids: Vec<&str> = resolution.groups().keys().map(GroupId::as_str).collect();
    anyhow::ensure!(ids == ["1", "x", "y"], "unexpected ids {ids:?}");
    anyhow::ensure!(resolution.combinations().len() == 8);
    Ok(())
}

#[rstest]
fn stuck_identifier_source_is_reported() {
    let err = resolve_json(
        json!({"a": {"@": [1]}, "b": {"@": [2]}}),
        BatchOptions::new().with_identifiers(|| String::from("same")),
    )
    .expect_err("repeating source must fail");
    assert!(matches!(&*err, BatchError::IdentifierExhausted { .. }));
}

#[rstest]
fn length_mismatch_names_group_and_lengths() {
    let err = resolve_json(
        json!({"a": {"@1": [1, 2, 3]}, "b": {"@1": [4, 5]}}),
        BatchOptions::default(),
    )
    .expect_err("mismatched lengths must fail");
    match &*err {
        BatchError::GroupLengthMismatch {
            group,
            expected,
            found,
            path,
        } => {
            assert_eq!(group.as_str(), "1");
            assert_eq!((*expected, *found), (3, 2));
            assert_eq!(*path, Keypath::parse("/b"));
        }
        other => panic!("expected length mismatch, got {other:?}"),
    }
}

#[rstest]
fn every_malformed_marker_is_reported_together() {
    let err = resolve_json(
        json!({
            "a": {"@1": [1, 2]},
            "b": {"@1": [1]},
            "c": {"@": 5},
            "d": {"@2": []}
        }),
        BatchOptions::default(),
    )
    .expect_err("malformed markers must fail");
    let BatchError::Aggregate(agg) = &*err else {
        panic!("expected aggregate, got {err:?}");
    };
    assert_eq!(agg.len(), 3);
    assert!(agg.iter().any(|e| matches!(e, BatchError::NotASequence { .. })));
    assert!(agg.iter().any(|e| matches!(e, BatchError::EmptySequence { .. })));
    assert!(agg.iter().any(|e| matches!(e, BatchError::GroupLengthMismatch { .. })));
}

#[rstest]
#[case(json!({"a": {"@1": {"x": 1}}, "b": 2}))]
#[case(json!({"a": {"@1": {}}, "b": 2}))]
#[case(json!({"a": {"@1": {"@2": [1]}}}))]
fn markers_holding_mappings_are_rejected(#[case] tree: serde_json::Value) {
    let err = resolve_json(tree, BatchOptions::default()).expect_err("mapping marker must fail");
    let BatchError::NotASequence { path } = &*err else {
        panic!("expected NotASequence, got {err:?}");
    };
    assert_eq!(path, &Keypath::parse("/a/@1"));
}

#[rstest]
fn markers_inside_marked_sequences_stay_literal() -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(
        json!({"a": {"@1": [{"@2": [5, 6]}, 7]}}),
        BatchOptions::default(),
    ))?;
    anyhow::ensure!(resolution.groups().len() == 1);
    anyhow::ensure!(resolution.combinations().len() == 2);
    Ok(())
}

#[rstest]
#[case(json!({"@": [1, 2]}))]
#[case(json!({"@top": [1, 2]}))]
fn root_markers_are_rejected(#[case] tree: serde_json::Value) {
    let err = resolve_json(tree, BatchOptions::default()).expect_err("root marker must fail");
    assert!(matches!(&*err, BatchError::RootMarker { .. }));
}

#[rstest]
#[case(json!({"a": {"@1": [1, 2], "@2": [3, 4]}}))]
#[case(json!({"a": {"@1": [1, 2], "b": {"@": [3, 4]}}}))]
fn overlapping_markers_are_rejected(#[case] tree: serde_json::Value) {
    let err = resolve_json(tree, BatchOptions::default()).expect_err("overlap must fail");
    assert!(matches!(&*err, BatchError::OverlappingMarkers { .. }));
}

#[rstest]
fn combination_limit_is_enforced() {
    let err = resolve_json(
        json!({"a": {"@": [1, 2, 3]}, "b": {"@": [1, 2, 3]}}),
        BatchOptions::new().with_combination_limit(8),
    )
    .expect_err("limit must fail");
    assert!(matches!(
        &*err,
        BatchError::TooManyCombinations { count: 9, limit: 8 }
    ));
}

#[rstest]
fn sequences_without_markers_stay_literal() -> anyhow::Result<()> {
    let resolution = to_anyhow(resolve_json(
        json!({"layers": [64, 32], "lr": {"@": [[0.1, 0.2], [0.3, 0.4]]}}),
        BatchOptions::default(),
    ))?;
    anyhow::ensure!(resolution.combinations().len() == 2);
    anyhow::ensure!(
        resolution.combinations().iter().all(|c| c.len() == 1),
        "only the marked path varies"
    );
    Ok(())
}
