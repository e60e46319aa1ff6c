//! # tl-04-transaction-processing
//!
//! Validates signed [`DeliveryRequest`]s and applies their effect to the
//! working ledger.
//!
//! ## Pipeline
//!
//! ```text
//! raw bytes ─decode─→ Received ─→ amount > 0 ─→ SignatureChecked
//!           ─→ AuthorizationChecked ─→ BusinessRuleChecked ─→ Applied
//!                         (any failure) ─→ Rejected, ledger untouched
//! ```
//!
//! A transaction's balance writes are staged as one unit, so no reader ever
//! sees the sender debited without the recipient and tax receiver credited.

pub mod domain;
pub mod service;

pub use domain::{
    apply, Action, DeliveryData, DeliveryRequest, TransactionValidator, TxError,
    ValidatedDelivery,
};
pub use service::TransactionProcessor;
