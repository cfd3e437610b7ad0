use serde::{Deserialize, Serialize};

/// Represents a product identifier assigned by the catalog store.
/// Never supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The identifier handed out to the first product of an empty catalog.
    pub const FIRST: ProductId = ProductId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` past `u64::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}
