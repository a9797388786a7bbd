//! Account operations for users: creation, credit-limit changes, dues
//! updates, and the reporting lookups built on top of them.

use crate::domain::User;
use crate::email;
use crate::errors::LedgerError;
use crate::money::Money;
use crate::store::{Record, Store};

/// Validated operations over user accounts.
pub struct UserService;

impl UserService {
    /// Creates a user with zero dues. Fails on a bad email, a negative
    /// credit limit, or an existing user of the same name.
    pub fn create(
        store: &mut Store,
        name: &str,
        email_addr: &str,
        credit_limit: Money,
    ) -> Result<User, LedgerError> {
        if !email::is_valid(email_addr) {
            return Err(LedgerError::InvalidEmail(email_addr.to_string()));
        }
        if credit_limit.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "credit limit cannot be negative".into(),
            ));
        }
        if store.contains::<User>(name) {
            return Err(LedgerError::AlreadyExists {
                kind: User::TABLE,
                key: name.to_string(),
            });
        }
        store.upsert(User::new(name, email_addr, credit_limit))
    }

    pub fn get(store: &Store, name: &str) -> Result<User, LedgerError> {
        store.get::<User>(name).ok_or_else(|| LedgerError::NotFound {
            kind: User::TABLE,
            key: name.to_string(),
        })
    }

    /// Replaces the credit limit. Existing dues are not re-validated against
    /// the new limit; the invariant is enforced on the next dues change.
    pub fn set_credit_limit(
        store: &mut Store,
        name: &str,
        limit: Money,
    ) -> Result<User, LedgerError> {
        if limit.is_negative() {
            return Err(LedgerError::InvalidAmount(
                "credit limit cannot be negative".into(),
            ));
        }
        let mut user = Self::get(store, name)?;
        user.credit_limit = limit;
        store.upsert(user)
    }

    /// Replaces the user's dues. Single enforcement point for the core
    /// safety invariant `0 <= dues <= credit_limit`.
    pub fn update_dues(store: &mut Store, name: &str, new_dues: Money) -> Result<User, LedgerError> {
        if new_dues.is_negative() {
            return Err(LedgerError::InvalidAmount("dues cannot be negative".into()));
        }
        let mut user = Self::get(store, name)?;
        if new_dues > user.credit_limit {
            tracing::debug!(user = %user.name, dues = %new_dues, limit = %user.credit_limit,
                "rejected dues update over credit limit");
            return Err(LedgerError::CreditLimitExceeded { user: user.name });
        }
        user.dues = new_dues;
        store.upsert(user)
    }

    /// Users whose dues have reached or passed their credit limit.
    pub fn at_credit_limit(store: &Store) -> Vec<User> {
        store
            .list::<User>()
            .into_iter()
            .filter(|user| user.dues >= user.credit_limit)
            .collect()
    }

    /// Every user, in ascending name order.
    pub fn all(store: &Store) -> Vec<User> {
        store.list::<User>()
    }
}
