//! Record models shared with the Safe transaction views

pub mod incoming_transaction;

pub use incoming_transaction::{
    IncomingTransaction, IncomingTransactionBuilder, IncomingTxType, IncomingTransactionError,
};
