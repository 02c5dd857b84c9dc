use rstest::rstest;
use serde_json::json;

use super::{Scalar, Value};

#[rstest]
#[case(Scalar::Integer(4), "4")]
#[case(Scalar::Float(0.5), "0.5")]
#[case(Scalar::Float(2.0), "2.0")]
#[case(Scalar::Float(1e20), "1e20")]
#[case(Scalar::Float(-2.5e17), "-2.5e17")]
#[case(Scalar::Float(f64::INFINITY), "inf")]
#[case(Scalar::Bool(true), "true")]
#[case(Scalar::Null, "null")]
#[case(Scalar::String("adam".into()), "adam")]
fn scalars_render_in_plain_form(#[case] scalar: Scalar, #[case] expected: &str) {
    assert_eq!(scalar.to_string(), expected);
}

#[rstest]
fn json_conversion_preserves_shape() {
    let source = json!({"a": {"i": 0, "ii": {"@1": [1, 2.5, "x"]}}, "d": null});
    let value = Value::from(source.clone());
    let Some(a) = value.as_node().and_then(|root| root.get("a")) else {
        panic!("expected node 'a' in {value}");
    };
    assert!(a.is_node());
    assert_eq!(serde_json::Value::from(value), source);
}

#[rstest]
fn deserialises_through_serde() -> anyhow::Result<()> {
    let value: Value = serde_json::from_str(r#"{"b": {"@1": [4, 5, 6]}, "flag": false}"#)?;
    let expected = Value::from(json!({"b": {"@1": [4, 5, 6]}, "flag": false}));
    anyhow::ensure!(value == expected, "unexpected tree {value}");
    Ok(())
}

#[rstest]
fn large_unsigned_integers_fall_back_to_floats() -> anyhow::Result<()> {
    let value: Value = serde_json::from_str("18446744073709551615")?;
    anyhow::ensure!(
        matches!(value, Value::Scalar(Scalar::Float(_))),
        "expected float, got {value:?}"
    );
    Ok(())
}

#[rstest]
fn clones_do_not_share_structure() {
    let original = Value::from(json!({"a": {"b": [1, 2]}}));
    let mut copy = original.clone();
    if let Some(node) = copy.as_node_mut() {
        node.insert("a".into(), Value::from(9));
    }
    assert_ne!(copy, original);
    assert_eq!(original, Value::from(json!({"a": {"b": [1, 2]}})));
}
