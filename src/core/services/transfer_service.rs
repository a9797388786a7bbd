//! Multi-record transfer orchestration: a purchase or a payback becomes one
//! transfer record, its child transactions, and an updated balance.

use crate::domain::{
    PaybackTransfer, PurchaseTransfer, Transaction, TransactionType, CLEARING_ACCOUNT,
    EXTERNAL_PAYBACK_ACCOUNT,
};
use crate::errors::LedgerError;
use crate::money::Money;
use crate::store::Store;

use super::{MerchantService, TransactionService, UserService};

/// Executes purchases and paybacks as short linear pipelines. Every
/// business-rule validation runs before the first store write, so a rejected
/// operation leaves the store untouched. The only failure path left after the
/// first write is a generated-id collision.
pub struct TransferService;

impl TransferService {
    /// User → merchant purchase. Splits the gross amount into a user leg
    /// (`gross - discount`) and a clearing-account discount leg, then raises
    /// the user's dues by the gross amount.
    pub fn purchase(
        store: &mut Store,
        user_name: &str,
        merchant_name: &str,
        amount: Money,
    ) -> Result<PurchaseTransfer, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "purchase amount must be positive".into(),
            ));
        }
        let user = UserService::get(store, user_name)?;
        if !user.allows(amount) {
            return Err(LedgerError::CreditLimitExceeded { user: user.name });
        }
        let merchant = MerchantService::get(store, merchant_name)?;
        let discount = merchant.discount_rate.discount_on(amount);

        let transfer = store.upsert(PurchaseTransfer::new(
            &user.name,
            &merchant.name,
            amount,
            discount,
        ))?;
        UserService::update_dues(store, &user.name, user.dues + amount)?;
        TransactionService::record(
            store,
            Transaction::new(
                transfer.id,
                TransactionType::UserMerchantTransfer,
                &user.name,
                &merchant.name,
                amount - discount,
            ),
        )?;
        TransactionService::record(
            store,
            Transaction::new(
                transfer.id,
                TransactionType::MerchantDiscountCredit,
                &merchant.name,
                CLEARING_ACCOUNT,
                discount,
            ),
        )?;
        tracing::debug!(user = %user.name, merchant = %merchant.name,
            gross = %amount, discount = %discount, "purchase committed");
        Ok(transfer)
    }

    /// External → user repayment, lowering the user's dues by `amount`.
    pub fn payback(
        store: &mut Store,
        user_name: &str,
        amount: Money,
    ) -> Result<PaybackTransfer, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "payback amount must be positive".into(),
            ));
        }
        let user = UserService::get(store, user_name)?;
        if !user.dues.is_positive() {
            return Err(LedgerError::NoDues { user: user.name });
        }
        if amount > user.dues {
            return Err(LedgerError::ExcessPayback { user: user.name });
        }

        let updated = UserService::update_dues(store, &user.name, user.dues - amount)?;
        let transfer = store.upsert(PaybackTransfer::new(&updated.name, amount))?;
        TransactionService::record(
            store,
            Transaction::new(
                transfer.id,
                TransactionType::UserPayback,
                EXTERNAL_PAYBACK_ACCOUNT,
                &updated.name,
                amount,
            ),
        )?;
        tracing::debug!(user = %updated.name, amount = %amount, "payback committed");
        Ok(transfer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::money::DiscountRate;

    fn money(units: i64) -> Money {
        Money::from_minor_units(units)
    }

    fn seeded_store(limit: i64, percent: &str) -> Store {
        let mut store = Store::new();
        UserService::create(&mut store, "u1", "u1@users.com", money(limit)).unwrap();
        MerchantService::create(
            &mut store,
            "m1",
            "m1@merchants.com",
            DiscountRate::from_percent(percent).unwrap(),
        )
        .unwrap();
        store
    }

    #[test]
    fn purchase_writes_two_legs_that_sum_to_gross() {
        let mut store = seeded_store(30_000, "0.5");
        let transfer = TransferService::purchase(&mut store, "u1", "m1", money(10_000)).unwrap();

        assert_eq!(transfer.gross_amount, money(10_000));
        assert_eq!(transfer.discount_amount, money(50));

        let legs: Vec<Transaction> = store
            .list::<Transaction>()
            .into_iter()
            .filter(|txn| txn.transfer_id == transfer.id)
            .collect();
        assert_eq!(legs.len(), 2);
        let total = legs
            .iter()
            .fold(Money::ZERO, |total, txn| total + txn.amount);
        assert_eq!(total, transfer.gross_amount);

        let user = UserService::get(&store, "u1").unwrap();
        assert_eq!(user.dues, money(10_000));
    }

    #[test]
    fn rejected_purchase_leaves_no_trace() {
        let mut store = seeded_store(5_000, "0.5");
        let err = TransferService::purchase(&mut store, "u1", "m1", money(5_001)).unwrap_err();
        assert!(matches!(err, LedgerError::CreditLimitExceeded { .. }));

        assert!(store.list::<Transaction>().is_empty());
        assert!(store.list::<PurchaseTransfer>().is_empty());
        assert_eq!(UserService::get(&store, "u1").unwrap().dues, Money::ZERO);

        // Unknown merchant: checked before any write as well.
        let err = TransferService::purchase(&mut store, "u1", "ghost", money(100)).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound { .. }));
        assert!(store.list::<PurchaseTransfer>().is_empty());
    }

    #[test]
    fn purchase_exactly_at_the_limit_succeeds() {
        let mut store = seeded_store(50_000, "0");
        TransferService::purchase(&mut store, "u1", "m1", money(49_999)).unwrap();
        TransferService::purchase(&mut store, "u1", "m1", money(1)).unwrap();

        let user = UserService::get(&store, "u1").unwrap();
        assert_eq!(user.dues, money(50_000));

        let err = TransferService::purchase(&mut store, "u1", "m1", money(1)).unwrap_err();
        assert!(matches!(err, LedgerError::CreditLimitExceeded { .. }));
    }

    #[test]
    fn payback_requires_dues_and_caps_at_dues() {
        let mut store = seeded_store(30_000, "0.5");

        let err = TransferService::payback(&mut store, "u1", money(100)).unwrap_err();
        assert!(matches!(err, LedgerError::NoDues { .. }));

        TransferService::purchase(&mut store, "u1", "m1", money(10_000)).unwrap();

        let err = TransferService::payback(&mut store, "u1", money(10_001)).unwrap_err();
        assert!(matches!(err, LedgerError::ExcessPayback { .. }));

        let transfer = TransferService::payback(&mut store, "u1", money(4_000)).unwrap();
        assert_eq!(transfer.amount, money(4_000));
        assert_eq!(UserService::get(&store, "u1").unwrap().dues, money(6_000));

        let leg: Vec<Transaction> = store
            .list::<Transaction>()
            .into_iter()
            .filter(|txn| txn.transfer_id == transfer.id)
            .collect();
        assert_eq!(leg.len(), 1);
        assert_eq!(leg[0].kind, TransactionType::UserPayback);
        assert_eq!(leg[0].source, EXTERNAL_PAYBACK_ACCOUNT);
        assert_eq!(leg[0].destination, "u1");
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut store = seeded_store(30_000, "0.5");
        for amount in [money(0), money(-100)] {
            let err = TransferService::purchase(&mut store, "u1", "m1", amount).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)));
            let err = TransferService::payback(&mut store, "u1", amount).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)));
        }
        let unchanged: Vec<User> = store.list();
        assert_eq!(unchanged[0].dues, Money::ZERO);
    }
}
