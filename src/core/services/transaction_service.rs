//! Append-only ledger entries and the read-side discount aggregation.

use crate::domain::{Transaction, TransactionType, CLEARING_ACCOUNT};
use crate::errors::LedgerError;
use crate::money::Money;
use crate::store::Store;

/// Records immutable transactions and aggregates over them.
pub struct TransactionService;

impl TransactionService {
    /// Appends a ledger entry. Amounts are never negative; the store rejects
    /// id reuse.
    pub fn record(store: &mut Store, transaction: Transaction) -> Result<Transaction, LedgerError> {
        if transaction.amount.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "transaction amount cannot be negative".into(),
            ));
        }
        store.upsert(transaction)
    }

    /// Sum of all discount credits routed from `merchant_name` to the
    /// clearing account.
    pub fn total_discount_for_merchant(store: &Store, merchant_name: &str) -> Money {
        store
            .list::<Transaction>()
            .into_iter()
            .filter(|txn| {
                txn.kind == TransactionType::MerchantDiscountCredit
                    && txn.source == merchant_name
                    && txn.destination == CLEARING_ACCOUNT
            })
            .fold(Money::ZERO, |total, txn| total + txn.amount)
    }
}
