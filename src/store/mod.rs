//! Generic keyed entity store with a per-kind mutability policy.
//!
//! Each entity kind declares its table name, primary key, and write policy
//! through the [`Record`] trait; dispatch is resolved at compile time via a
//! typed table projection per kind. The store itself is a plain value with an
//! explicit lifecycle: construct it once, pass it by reference everywhere.

use std::collections::BTreeMap;

use crate::domain::{Merchant, PaybackTransfer, PurchaseTransfer, Transaction, User};
use crate::errors::LedgerError;

/// Write policy for a stored entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// Insert-or-replace keyed by primary key, last write wins.
    Mutable,
    /// Written once per key; a second write under the same key is rejected.
    AppendOnly,
}

/// Implemented by every entity kind the store can hold.
pub trait Record: Clone {
    const TABLE: &'static str;
    const MUTABILITY: Mutability;

    fn key(&self) -> String;
    fn table(store: &Store) -> &BTreeMap<String, Self>;
    fn table_mut(store: &mut Store) -> &mut BTreeMap<String, Self>;
}

macro_rules! impl_record {
    ($type:ty, $table:literal, $mutability:expr, $field:ident, $key:ident) => {
        impl Record for $type {
            const TABLE: &'static str = $table;
            const MUTABILITY: Mutability = $mutability;

            fn key(&self) -> String {
                self.$key.to_string()
            }

            fn table(store: &Store) -> &BTreeMap<String, Self> {
                &store.$field
            }

            fn table_mut(store: &mut Store) -> &mut BTreeMap<String, Self> {
                &mut store.$field
            }
        }
    };
}

impl_record!(User, "user", Mutability::Mutable, users, name);
impl_record!(Merchant, "merchant", Mutability::Mutable, merchants, name);
impl_record!(
    Transaction,
    "transaction",
    Mutability::AppendOnly,
    transactions,
    id
);
impl_record!(
    PurchaseTransfer,
    "purchase-transfer",
    Mutability::AppendOnly,
    purchase_transfers,
    id
);
impl_record!(
    PaybackTransfer,
    "payback-transfer",
    Mutability::AppendOnly,
    payback_transfers,
    id
);

/// In-memory database: one typed table per entity kind.
#[derive(Debug, Default)]
pub struct Store {
    users: BTreeMap<String, User>,
    merchants: BTreeMap<String, Merchant>,
    transactions: BTreeMap<String, Transaction>,
    purchase_transfers: BTreeMap<String, PurchaseTransfer>,
    payback_transfers: BTreeMap<String, PaybackTransfer>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `record` keyed by its primary key. Append-only
    /// kinds reject a write to an existing key with `AlreadyExists`.
    ///
    /// Transfer and transaction ids are generated per call, so for those
    /// kinds the existence check is a weak guard against id collision, not a
    /// deduplication mechanism for retried requests.
    pub fn upsert<T: Record>(&mut self, record: T) -> Result<T, LedgerError> {
        let key = record.key();
        if T::MUTABILITY == Mutability::AppendOnly && T::table(self).contains_key(&key) {
            tracing::warn!(table = T::TABLE, %key, "rejected write to existing append-only record");
            return Err(LedgerError::AlreadyExists {
                kind: T::TABLE,
                key,
            });
        }
        T::table_mut(self).insert(key, record.clone());
        Ok(record)
    }

    /// Looks up a record by primary key; absent is `None`, not an error.
    pub fn get<T: Record>(&self, key: &str) -> Option<T> {
        T::table(self).get(key).cloned()
    }

    pub fn contains<T: Record>(&self, key: &str) -> bool {
        T::table(self).contains_key(key)
    }

    /// Returns every record of the kind in ascending primary-key order.
    pub fn list<T: Record>(&self) -> Vec<T> {
        T::table(self).values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;
    use crate::money::Money;
    use uuid::Uuid;

    fn user(name: &str, limit: i64) -> User {
        User::new(name, "u@example.com", Money::from_minor_units(limit))
    }

    #[test]
    fn mutable_kinds_take_the_last_write() {
        let mut store = Store::new();
        store.upsert(user("u1", 100)).unwrap();
        store.upsert(user("u1", 999)).unwrap();

        let stored: User = store.get("u1").unwrap();
        assert_eq!(stored.credit_limit, Money::from_minor_units(999));
        assert_eq!(store.list::<User>().len(), 1);
    }

    #[test]
    fn append_only_kinds_reject_a_second_write() {
        let mut store = Store::new();
        let txn = Transaction::new(
            Uuid::new_v4(),
            TransactionType::UserPayback,
            "external-account",
            "u1",
            Money::from_minor_units(100),
        );
        store.upsert(txn.clone()).unwrap();

        let err = store.upsert(txn.clone()).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AlreadyExists {
                kind: "transaction",
                key: txn.id.to_string(),
            }
        );
    }

    #[test]
    fn absent_key_is_none_not_an_error() {
        let store = Store::new();
        assert!(store.get::<User>("missing").is_none());
        assert!(!store.contains::<Merchant>("missing"));
    }

    #[test]
    fn list_is_ordered_by_primary_key() {
        let mut store = Store::new();
        for name in ["charlie", "alice", "bob"] {
            store.upsert(user(name, 100)).unwrap();
        }
        let names: Vec<String> = store.list::<User>().into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["alice", "bob", "charlie"]);
    }

    #[test]
    fn reads_do_not_mutate_the_store() {
        let mut store = Store::new();
        store.upsert(user("u1", 100)).unwrap();

        let before = store.list::<User>();
        let _ = store.get::<User>("u1");
        let _ = store.get::<User>("missing");
        let _ = store.list::<User>();
        assert_eq!(store.list::<User>(), before);
    }
}
