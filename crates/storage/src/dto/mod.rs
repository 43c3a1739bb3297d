use serde::{Deserialize, Deserializer};

pub mod plan;
pub mod preferences;
pub mod profile;

/// Keeps an explicit JSON `null` (`Some(None)`) apart from an absent field
/// (`None`) on partial updates.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
