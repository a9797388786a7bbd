//! Account operations for merchants: creation and discount-rate changes.

use crate::domain::Merchant;
use crate::email;
use crate::errors::LedgerError;
use crate::money::DiscountRate;
use crate::store::{Record, Store};

/// Validated operations over merchant accounts.
pub struct MerchantService;

impl MerchantService {
    /// Creates a merchant. The rate is already range-checked by
    /// [`DiscountRate`] construction at the boundary.
    pub fn create(
        store: &mut Store,
        name: &str,
        email_addr: &str,
        discount_rate: DiscountRate,
    ) -> Result<Merchant, LedgerError> {
        if !email::is_valid(email_addr) {
            return Err(LedgerError::InvalidEmail(email_addr.to_string()));
        }
        if store.contains::<Merchant>(name) {
            return Err(LedgerError::AlreadyExists {
                kind: Merchant::TABLE,
                key: name.to_string(),
            });
        }
        store.upsert(Merchant::new(name, email_addr, discount_rate))
    }

    pub fn get(store: &Store, name: &str) -> Result<Merchant, LedgerError> {
        store
            .get::<Merchant>(name)
            .ok_or_else(|| LedgerError::NotFound {
                kind: Merchant::TABLE,
                key: name.to_string(),
            })
    }

    pub fn set_discount_rate(
        store: &mut Store,
        name: &str,
        discount_rate: DiscountRate,
    ) -> Result<Merchant, LedgerError> {
        let mut merchant = Self::get(store, name)?;
        merchant.discount_rate = discount_rate;
        store.upsert(merchant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(percent: &str) -> DiscountRate {
        DiscountRate::from_percent(percent).unwrap()
    }

    #[test]
    fn create_and_update_rate() {
        let mut store = Store::new();
        let merchant =
            MerchantService::create(&mut store, "m1", "m1@merchants.com", rate("0.5")).unwrap();
        assert_eq!(merchant.discount_rate.basis_points(), 50);

        let merchant = MerchantService::set_discount_rate(&mut store, "m1", rate("1.5")).unwrap();
        assert_eq!(merchant.discount_rate.basis_points(), 150);
    }

    #[test]
    fn duplicate_and_missing_merchants_are_rejected() {
        let mut store = Store::new();
        MerchantService::create(&mut store, "m1", "m1@merchants.com", rate("1")).unwrap();

        let err =
            MerchantService::create(&mut store, "m1", "m1@merchants.com", rate("1")).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyExists { .. }));

        let err = MerchantService::set_discount_rate(&mut store, "ghost", rate("1")).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { .. }));
    }
}
