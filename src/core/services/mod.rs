//! Stateless service layer: every operation takes the store by reference and
//! returns a typed result.

pub mod merchant_service;
pub mod report_service;
pub mod transaction_service;
pub mod transfer_service;
pub mod user_service;

pub use merchant_service::MerchantService;
pub use report_service::ReportService;
pub use transaction_service::TransactionService;
pub use transfer_service::TransferService;
pub use user_service::UserService;
