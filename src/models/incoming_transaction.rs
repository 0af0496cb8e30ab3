//! Incoming transaction record
//!
//! An immutable value describing a transfer received by a Safe. Fields that
//! only apply to outgoing multisig transactions are always `None` here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest `decimals` a token can report and still fit a 256 bit amount.
pub const MAX_TOKEN_DECIMALS: u8 = 77;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IncomingTransactionError {
    #[error("Token decimals {0} exceed the maximum of {MAX_TOKEN_DECIMALS}")]
    DecimalsOutOfRange(u8),

    #[error("Invalid {field}: {value:?} is not a 0x-prefixed hex string")]
    InvalidHash { field: &'static str, value: String },
}

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomingTxType {
    #[default]
    Incoming,
    Erc721Transfer,
    Erc20Transfer,
    EtherTransfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IncomingTransactionBuilder")]
pub struct IncomingTransaction {
    block_number: u64,
    execution_tx_hash: String,
    safe_tx_hash: String,
    to: String,
    value: u128,
    token_address: String,
    from: String,
    symbol: String,
    decimals: u8,
    fee: String,
    execution_date: String,
    #[serde(rename = "type")]
    tx_type: IncomingTxType,
    status: String,
    nonce: Option<u64>,
    confirmations: Option<Vec<String>>,
    recipient: Option<String>,
    data: Option<String>,
    operation: Option<u8>,
    safe_tx_gas: Option<String>,
    base_gas: Option<String>,
    gas_price: Option<String>,
    gas_token: Option<String>,
    refund_receiver: Option<String>,
    is_executed: Option<bool>,
    submission_date: Option<String>,
    executor: Option<String>,
    cancelled: Option<bool>,
    modify_settings_tx: Option<bool>,
    cancellation_tx: Option<bool>,
    custom_tx: Option<bool>,
    creation_tx: Option<bool>,
    is_token_transfer: Option<bool>,
    decoded_params: Option<serde_json::Value>,
    refund_params: Option<serde_json::Value>,
}

/// Builder for [`IncomingTransaction`]. Unset fields keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomingTransactionBuilder {
    block_number: u64,
    execution_tx_hash: String,
    safe_tx_hash: String,
    to: String,
    value: u128,
    token_address: String,
    from: String,
    symbol: String,
    decimals: u8,
    fee: String,
    execution_date: String,
    #[serde(rename = "type")]
    tx_type: IncomingTxType,
    status: String,
    nonce: Option<u64>,
    confirmations: Option<Vec<String>>,
    recipient: Option<String>,
    data: Option<String>,
    operation: Option<u8>,
    safe_tx_gas: Option<String>,
    base_gas: Option<String>,
    gas_price: Option<String>,
    gas_token: Option<String>,
    refund_receiver: Option<String>,
    is_executed: Option<bool>,
    submission_date: Option<String>,
    executor: Option<String>,
    cancelled: Option<bool>,
    modify_settings_tx: Option<bool>,
    cancellation_tx: Option<bool>,
    custom_tx: Option<bool>,
    creation_tx: Option<bool>,
    is_token_transfer: Option<bool>,
    decoded_params: Option<serde_json::Value>,
    refund_params: Option<serde_json::Value>,
}

impl Default for IncomingTransactionBuilder {
    fn default() -> Self {
        Self {
            block_number: 0,
            execution_tx_hash: String::new(),
            safe_tx_hash: String::new(),
            to: String::new(),
            value: 0,
            token_address: String::new(),
            from: String::new(),
            symbol: String::new(),
            decimals: 18,
            fee: String::new(),
            execution_date: String::new(),
            tx_type: IncomingTxType::Incoming,
            status: "success".to_string(),
            nonce: None,
            confirmations: None,
            recipient: None,
            data: None,
            operation: None,
            safe_tx_gas: None,
            base_gas: None,
            gas_price: None,
            gas_token: None,
            refund_receiver: None,
            is_executed: None,
            submission_date: None,
            executor: None,
            cancelled: None,
            modify_settings_tx: None,
            cancellation_tx: None,
            custom_tx: None,
            creation_tx: None,
            is_token_transfer: None,
            decoded_params: None,
            refund_params: None,
        }
    }
}

fn check_hash(field: &'static str, value: &str) -> Result<(), IncomingTransactionError> {
    if value.is_empty() {
        return Ok(());
    }
    let valid = value
        .strip_prefix("0x")
        .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(IncomingTransactionError::InvalidHash {
            field,
            value: value.to_string(),
        })
    }
}

impl IncomingTransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_number(mut self, block_number: u64) -> Self {
        self.block_number = block_number;
        self
    }

    pub fn execution_tx_hash(mut self, hash: impl Into<String>) -> Self {
        self.execution_tx_hash = hash.into();
        self
    }

    pub fn safe_tx_hash(mut self, hash: impl Into<String>) -> Self {
        self.safe_tx_hash = hash.into();
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn value(mut self, value: u128) -> Self {
        self.value = value;
        self
    }

    pub fn token_address(mut self, token_address: impl Into<String>) -> Self {
        self.token_address = token_address.into();
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn fee(mut self, fee: impl Into<String>) -> Self {
        self.fee = fee.into();
        self
    }

    pub fn execution_date(mut self, execution_date: impl Into<String>) -> Self {
        self.execution_date = execution_date.into();
        self
    }

    pub fn tx_type(mut self, tx_type: IncomingTxType) -> Self {
        self.tx_type = tx_type;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn build(self) -> Result<IncomingTransaction, IncomingTransactionError> {
        if self.decimals > MAX_TOKEN_DECIMALS {
            return Err(IncomingTransactionError::DecimalsOutOfRange(self.decimals));
        }
        check_hash("executionTxHash", &self.execution_tx_hash)?;
        check_hash("safeTxHash", &self.safe_tx_hash)?;
        Ok(self.assemble())
    }

    fn assemble(self) -> IncomingTransaction {
        IncomingTransaction {
            block_number: self.block_number,
            execution_tx_hash: self.execution_tx_hash,
            safe_tx_hash: self.safe_tx_hash,
            to: self.to,
            value: self.value,
            token_address: self.token_address,
            from: self.from,
            symbol: self.symbol,
            decimals: self.decimals,
            fee: self.fee,
            execution_date: self.execution_date,
            tx_type: self.tx_type,
            status: self.status,
            nonce: self.nonce,
            confirmations: self.confirmations,
            recipient: self.recipient,
            data: self.data,
            operation: self.operation,
            safe_tx_gas: self.safe_tx_gas,
            base_gas: self.base_gas,
            gas_price: self.gas_price,
            gas_token: self.gas_token,
            refund_receiver: self.refund_receiver,
            is_executed: self.is_executed,
            submission_date: self.submission_date,
            executor: self.executor,
            cancelled: self.cancelled,
            modify_settings_tx: self.modify_settings_tx,
            cancellation_tx: self.cancellation_tx,
            custom_tx: self.custom_tx,
            creation_tx: self.creation_tx,
            is_token_transfer: self.is_token_transfer,
            decoded_params: self.decoded_params,
            refund_params: self.refund_params,
        }
    }
}

impl TryFrom<IncomingTransactionBuilder> for IncomingTransaction {
    type Error = IncomingTransactionError;

    fn try_from(builder: IncomingTransactionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<IncomingTransaction> for IncomingTransactionBuilder {
    fn from(tx: IncomingTransaction) -> Self {
        Self {
            block_number: tx.block_number,
            execution_tx_hash: tx.execution_tx_hash,
            safe_tx_hash: tx.safe_tx_hash,
            to: tx.to,
            value: tx.value,
            token_address: tx.token_address,
            from: tx.from,
            symbol: tx.symbol,
            decimals: tx.decimals,
            fee: tx.fee,
            execution_date: tx.execution_date,
            tx_type: tx.tx_type,
            status: tx.status,
            nonce: tx.nonce,
            confirmations: tx.confirmations,
            recipient: tx.recipient,
            data: tx.data,
            operation: tx.operation,
            safe_tx_gas: tx.safe_tx_gas,
            base_gas: tx.base_gas,
            gas_price: tx.gas_price,
            gas_token: tx.gas_token,
            refund_receiver: tx.refund_receiver,
            is_executed: tx.is_executed,
            submission_date: tx.submission_date,
            executor: tx.executor,
            cancelled: tx.cancelled,
            modify_settings_tx: tx.modify_settings_tx,
            cancellation_tx: tx.cancellation_tx,
            custom_tx: tx.custom_tx,
            creation_tx: tx.creation_tx,
            is_token_transfer: tx.is_token_transfer,
            decoded_params: tx.decoded_params,
            refund_params: tx.refund_params,
        }
    }
}

impl Default for IncomingTransaction {
    fn default() -> Self {
        IncomingTransactionBuilder::default().assemble()
    }
}

impl IncomingTransaction {
    pub fn builder() -> IncomingTransactionBuilder {
        IncomingTransactionBuilder::new()
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn execution_tx_hash(&self) -> &str {
        &self.execution_tx_hash
    }

    pub fn safe_tx_hash(&self) -> &str {
        &self.safe_tx_hash
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn token_address(&self) -> &str {
        &self.token_address
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn fee(&self) -> &str {
        &self.fee
    }

    pub fn execution_date(&self) -> &str {
        &self.execution_date
    }

    pub fn tx_type(&self) -> IncomingTxType {
        self.tx_type
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn nonce(&self) -> Option<u64> {
        self.nonce
    }

    pub fn is_executed(&self) -> Option<bool> {
        self.is_executed
    }

    pub fn is_token_transfer(&self) -> Option<bool> {
        self.is_token_transfer
    }

    pub fn decoded_params(&self) -> Option<&serde_json::Value> {
        self.decoded_params.as_ref()
    }

    /// Returns a copy with `value` and `decimals` replaced, validated again.
    pub fn with_amount(self, value: u128, decimals: u8) -> Result<Self, IncomingTransactionError> {
        let builder: IncomingTransactionBuilder = self.into();
        builder
            .value(value)
            .decimals(decimals)
            .build()
    }

    pub fn with_execution_tx_hash(self, hash: impl Into<String>) -> Result<Self, IncomingTransactionError> {
        let builder: IncomingTransactionBuilder = self.into();
        builder
            .execution_tx_hash(hash)
            .build()
    }

    pub fn with_tx_type(self, tx_type: IncomingTxType) -> Self {
        Self { tx_type, ..self }
    }

    pub fn with_status(self, status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..self
        }
    }

    pub fn with_symbol(self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..self
        }
    }

    pub fn with_block_number(self, block_number: u64) -> Self {
        Self {
            block_number,
            ..self
        }
    }
}
