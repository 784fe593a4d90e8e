use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` the same as an absent field.
///
/// Pair with `#[serde(default, deserialize_with = "...")]`.
///
/// # Errors
/// Fails only when a present, non-null value has the wrong shape.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
