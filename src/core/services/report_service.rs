//! Read-only reporting over the store. Output ordering is deterministic:
//! users come back in ascending name order.

use crate::errors::LedgerError;
use crate::money::Money;
use crate::store::Store;

use super::{TransactionService, UserService};

/// Formats read-side aggregations for the command surface.
pub struct ReportService;

impl ReportService {
    /// Total discount collected for a merchant, two decimal places.
    /// A merchant with no discount credits reports `0.00`.
    pub fn total_discount(store: &Store, merchant_name: &str) -> String {
        TransactionService::total_discount_for_merchant(store, merchant_name).to_string()
    }

    /// Current dues for a user, two decimal places.
    pub fn dues_for_user(store: &Store, name: &str) -> Result<String, LedgerError> {
        Ok(UserService::get(store, name)?.dues.to_string())
    }

    /// Names of users whose dues have reached their credit limit.
    pub fn users_at_credit_limit(store: &Store) -> Vec<String> {
        UserService::at_credit_limit(store)
            .into_iter()
            .map(|user| user.name)
            .collect()
    }

    /// One `name: dues` line per user plus a grand total.
    pub fn total_dues(store: &Store) -> String {
        let mut lines = Vec::new();
        let mut total = Money::ZERO;
        for user in UserService::all(store) {
            total = total + user.dues;
            lines.push(format!("{}: {}", user.name, user.dues));
        }
        lines.push(format!("total: {}", total));
        lines.join("\n")
    }
}
