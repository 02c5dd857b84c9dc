//! Deserialising expanded configurations into caller types.

use anyhow::{Result, ensure};
use batchdict::{Batch, BatchError, Value};
use rstest::rstest;
use serde::Deserialize;
use serde_json::json;
use test_helpers::to_anyhow;

#[derive(Debug, Deserialize, PartialEq)]
struct Trial {
    lr: f64,
    optimiser: Optimiser,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Optimiser {
    name: String,
    momentum: f64,
}

#[rstest]
fn configurations_deserialise_into_structs() -> Result<()> {
    let tree = Value::from(json!({
        "lr": {"@": [0.1, 0.01]},
        "optimiser": {"name": {"@opt": ["sgd", "adam"]}, "momentum": {"@opt": [0.9, 0.0]}}
    }));
    let trials: Vec<Trial> = to_anyhow(to_anyhow(Batch::new(tree))?.deserialize())?;
    ensure!(trials.len() == 4);
    ensure!(
        trials.first()
            == Some(&Trial {
                lr: 0.1,
                optimiser: Optimiser {
                    name: "sgd".into(),
                    momentum: 0.9,
                },
            }),
        "unexpected first trial {:?}",
        trials.first()
    );
    ensure!(trials.iter().all(|t| (t.optimiser.name == "sgd") == (t.optimiser.momentum > 0.5)));
    Ok(())
}

#[rstest]
fn shape_mismatches_surface_as_deserialise_errors() -> Result<()> {
    let batch = to_anyhow(Batch::new(Value::from(json!({"lr": "fast", "optimiser": {}}))))?;
    let err = batch
        .deserialize::<Trial>()
        .expect_err("string lr must not deserialise");
    ensure!(matches!(&*err, BatchError::Deserialize(_)), "unexpected error {err:?}");
    Ok(())
}
