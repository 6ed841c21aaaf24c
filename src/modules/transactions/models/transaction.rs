use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// Direction of a ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Credit
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "credit"),
            TransactionType::Debit => write!(f, "debit"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit" => Ok(TransactionType::Credit),
            "debit" => Ok(TransactionType::Debit),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

/// Stored advertiser ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: String,
    pub advertiser_id: String,
    pub app_id: Option<String>,
    pub app_name: Option<String>,
    pub amount: Decimal,
    /// `credit` or `debit`
    pub transaction_type: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub const DEFAULT_TRANSACTION_STATUS: &str = "pending";

/// Admin request to record a transaction; nothing is trusted until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTransaction {
    #[serde(default)]
    pub advertiser_id: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A [`NewTransaction`] that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    pub advertiser_id: String,
    pub app_id: Option<String>,
    pub app_name: Option<String>,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub status: String,
    pub description: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl NewTransaction {
    /// # Errors
    /// `Validation` when the advertiser id or amount is missing, the amount is
    /// not positive, or the transaction type is unknown.
    pub fn validate(self) -> Result<ValidTransaction> {
        let advertiser_id = trimmed(self.advertiser_id)
            .ok_or_else(|| AppError::validation("advertiser_id is required"))?;

        let amount = self
            .amount
            .ok_or_else(|| AppError::validation("amount is required"))?;
        if amount <= Decimal::ZERO {
            return Err(AppError::validation("amount must be greater than 0"));
        }

        let transaction_type = match trimmed(self.transaction_type) {
            Some(raw) => raw.parse().map_err(AppError::Validation)?,
            None => TransactionType::default(),
        };

        Ok(ValidTransaction {
            advertiser_id,
            app_id: trimmed(self.app_id),
            app_name: trimmed(self.app_name),
            amount,
            transaction_type,
            status: trimmed(self.status).unwrap_or_else(|| DEFAULT_TRANSACTION_STATUS.to_string()),
            description: trimmed(self.description),
        })
    }
}
