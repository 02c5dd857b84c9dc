//! Reference batch trees shared by the behavioural suites.

use serde_json::{Value, json};

/// Group `1` zipped across `a/ii` and `b`, crossed with an anonymous group
/// at `c`; `a/i` and `d` never vary.
#[must_use]
pub fn zipped_with_anonymous() -> Value {
    json!({
        "a": {"i": 0, "ii": {"@1": [1, 2, 3]}},
        "b": {"@1": [4, 5, 6]},
        "c": {"@": [7, 8]},
        "d": 9
    })
}

/// Two named groups whose identifiers sort opposite to their keys.
#[must_use]
pub fn reverse_named_groups() -> Value {
    json!({"a": {"@2": [0, 1]}, "b": {"@1": [2, 3]}, "c": 4})
}

/// A tree without iteration markers.
#[must_use]
pub fn plain() -> Value {
    json!({"model": {"layers": [64, 32], "dropout": 0.1}, "seed": 7})
}

/// `count` independent anonymous groups where group `n` has `n + 1`
/// values.
#[must_use]
pub fn anonymous_ladder(count: usize) -> Value {
    let entries = (0..count).map(|n| {
        let values: Vec<usize> = (0..=n).collect();
        (format!("k{n}"), json!({"@": values}))
    });
    Value::Object(entries.collect())
}

/// The TOML form of [`zipped_with_anonymous`].
pub const ZIPPED_TOML: &str = r#"d = 9

[a]
i = 0

[a.ii]
"@1" = [1, 2, 3]

[b]
"@1" = [4, 5, 6]

[c]
"@" = [7, 8]
"#;
