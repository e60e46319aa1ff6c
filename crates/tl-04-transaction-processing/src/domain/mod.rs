pub mod applier;
pub mod errors;
pub mod transaction;
pub mod validator;

pub use applier::apply;
pub use errors::TxError;
pub use transaction::{Action, DeliveryData, DeliveryRequest};
pub use validator::{TransactionValidator, ValidatedDelivery};
