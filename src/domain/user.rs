use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A credit-line holder. Mutable: credit-limit and dues changes overwrite in
/// place, last write wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub credit_limit: Money,
    pub dues: Money,
}

impl User {
    /// Creates a user with zero outstanding dues.
    pub fn new(name: impl Into<String>, email: impl Into<String>, credit_limit: Money) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            credit_limit,
            dues: Money::ZERO,
        }
    }

    /// True when a purchase of `amount` keeps dues within the credit limit.
    pub fn allows(&self, amount: Money) -> bool {
        self.dues + amount <= self.credit_limit
    }
}
