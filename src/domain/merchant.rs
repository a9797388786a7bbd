use serde::{Deserialize, Serialize};

use crate::money::DiscountRate;

/// A merchant that accepts payments at a discount. Mutable: rate changes
/// overwrite in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Merchant {
    pub name: String,
    pub email: String,
    pub discount_rate: DiscountRate,
}

impl Merchant {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        discount_rate: DiscountRate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            discount_rate,
        }
    }
}
