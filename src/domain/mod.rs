pub mod merchant;
pub mod transaction;
pub mod transfer;
pub mod user;

pub use merchant::Merchant;
pub use transaction::{Transaction, TransactionType, CLEARING_ACCOUNT, EXTERNAL_PAYBACK_ACCOUNT};
pub use transfer::{PaybackTransfer, PurchaseTransfer};
pub use user::User;
