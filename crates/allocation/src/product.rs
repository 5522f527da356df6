use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Sku, ValueObject};

/// Product value object: identified by its SKU and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    sku: Sku,
}

impl Product {
    pub fn new(sku: Sku) -> Self {
        Self { sku }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.sku, f)
    }
}

impl From<Sku> for Product {
    fn from(sku: Sku) -> Self {
        Self::new(sku)
    }
}

impl TryFrom<&str> for Product {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self::new(Sku::new(value)?))
    }
}

impl core::str::FromStr for Product {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
