//! Helpers for partial updates.
//!
//! Patch fields are `Option<Option<T>>`: `None` when the key is absent (keep the
//! stored value), `Some(None)` for an explicit `null` (clear it), `Some(Some(v))`
//! to set it.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key into `Some(..)`, so `null` becomes `Some(None)`.
/// Use together with `#[serde(default)]` so that absent keys stay `None`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

impl From<FlagRepr> for i64 {
    fn from(repr: FlagRepr) -> Self {
        match repr {
            FlagRepr::Bool(true) => 1,
            FlagRepr::Bool(false) => 0,
            FlagRepr::Int(n) => n,
        }
    }
}

/// Like [`deserialize_some`] for 0/1 flag fields, also accepting `true`/`false`.
pub fn deserialize_some_flag<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr: Option<FlagRepr> = Deserialize::deserialize(deserializer)?;
    Ok(Some(repr.map(i64::from)))
}

/// Copy every present patch field onto the target.
macro_rules! merge_fields {
    ($target:expr, $patch:ident, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
}

pub(crate) use merge_fields;
