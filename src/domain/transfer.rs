use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// A user → merchant purchase. Append-only. Owns exactly two child
/// transactions by `transfer_id`: `gross_amount - discount_amount` from user
/// to merchant, and `discount_amount` from merchant to the clearing account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseTransfer {
    pub id: Uuid,
    pub user_name: String,
    pub merchant_name: String,
    pub gross_amount: Money,
    pub discount_amount: Money,
}

impl PurchaseTransfer {
    pub fn new(
        user_name: impl Into<String>,
        merchant_name: impl Into<String>,
        gross_amount: Money,
        discount_amount: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            merchant_name: merchant_name.into(),
            gross_amount,
            discount_amount,
        }
    }
}

/// An external → user repayment. Append-only. Owns one child transaction from
/// the external payback account to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaybackTransfer {
    pub id: Uuid,
    pub user_name: String,
    pub amount: Money,
}

impl PaybackTransfer {
    pub fn new(user_name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            amount,
        }
    }
}
