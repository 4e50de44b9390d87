//! Partial updates for data store entries.
//!
//! Entries are written back whole: the write endpoint replaces the complete
//! value, so changing a single field means re-submitting everything else
//! unchanged. [`merge`] builds that full value from the last-fetched
//! snapshot and a sparse patch describing just the fields to change.

use serde_json::{Map, Value};

/// Merge a sparse patch into a previously fetched entry value, producing the
/// full value to re-submit.
///
/// Keys present in the patch override the base — recursively for nested
/// objects, wholesale for arrays and scalars. Keys absent from the patch are
/// left untouched, and keys new to the base are added. An explicit `null` in
/// the patch is a real override, not a no-op.
///
/// Arrays are never merged element by element: a patch array replaces the
/// base array outright unless the two are deep-equal, in which case the base
/// is kept as-is. Deep equality is structural, so key order inside array
/// elements does not make otherwise-identical arrays "different".
///
/// Neither input is mutated; the same base and patch always produce the same
/// result.
///
/// ```
/// use serde_json::json;
///
/// let base = json!({"coins": 10, "profile": {"color": "red", "level": 3}});
/// let patch = json!({"profile": {"level": 4}});
/// assert_eq!(
///     cairn::merge(&base, &patch),
///     json!({"coins": 10, "profile": {"color": "red", "level": 4}})
/// );
/// ```
pub fn merge(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => Value::Object(merge_objects(base, patch)),
        _ => patch.clone(),
    }
}

fn merge_objects(base: &Map<String, Value>, patch: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();

    for (key, new_value) in patch {
        let replacement = match (merged.get(key), new_value) {
            (Some(Value::Object(old)), Value::Object(new)) => {
                Some(Value::Object(merge_objects(old, new)))
            }
            // Deep-equal values are left alone; in particular an identical
            // array keeps the base's copy. Everything else — scalars,
            // changed arrays, type mismatches — replaces wholesale.
            (Some(old), new) if old == new => None,
            _ => Some(new_value.clone()),
        };
        if let Some(value) = replacement {
            merged.insert(key.clone(), value);
        }
    }

    merged
}
