use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Identifier of a catalog entry as issued by the upstream catalog.
///
/// The canonical string form is the plain decimal rendering; route matching
/// compares against that form, so `Display` must never add padding or signs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct CatalogItemId(pub u64);

impl CatalogItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CatalogItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CatalogItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatalogItemId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ModelError::InvalidId(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}
