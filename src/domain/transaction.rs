use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// Synthetic account that receives merchant discount credits.
pub const CLEARING_ACCOUNT: &str = "clearing-account";

/// Synthetic account money enters the system from on a payback.
pub const EXTERNAL_PAYBACK_ACCOUNT: &str = "external-account";

/// Classifies the business meaning of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    UserMerchantTransfer,
    UserPayback,
    MerchantDiscountCredit,
}

/// An immutable ledger entry. Written exactly once, never updated or removed.
///
/// `transfer_id` points back at the owning transfer; source and destination
/// are free-form account names, including the synthetic accounts above.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub transfer_id: Uuid,
    pub kind: TransactionType,
    pub source: String,
    pub destination: String,
    pub amount: Money,
}

impl Transaction {
    pub fn new(
        transfer_id: Uuid,
        kind: TransactionType,
        source: impl Into<String>,
        destination: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            transfer_id,
            kind,
            source: source.into(),
            destination: destination.into(),
            amount,
        }
    }
}
