use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Currency, DeviceId, Location, Transaction, TransactionId};

/// Request for a transaction authorization.
///
/// Required-field presence is enforced by deserialization; amount
/// positivity by [`AuthorizeRequest::validate`]. The engine re-checks the
/// amount defensively, but a bad request should be rejected here, at the
/// boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    /// Originating user/account
    pub user_id: String,

    /// Destination merchant
    pub merchant_id: String,

    /// Transaction amount (decimal string or number)
    pub amount: Decimal,

    /// When the transaction occurred
    pub timestamp: DateTime<Utc>,

    /// Currency code; defaults to INR
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Device that initiated the transaction
    #[serde(default)]
    pub device_id: Option<String>,

    /// Where the transaction was initiated
    #[serde(default)]
    pub location: Option<String>,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl AuthorizeRequest {
    /// Check the constraints deserialization cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.amount <= Decimal::ZERO {
            return Err("Transaction amount must be positive".to_string());
        }
        if self.user_id.is_empty() {
            return Err("user_id must not be empty".to_string());
        }
        if self.merchant_id.is_empty() {
            return Err("merchant_id must not be empty".to_string());
        }
        Ok(())
    }

    /// Convert to a Transaction snapshot under the given id.
    pub fn to_transaction(&self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            currency: Currency::new(&self.currency),
            origin: AccountId::new(&self.user_id),
            destination: AccountId::new(&self.merchant_id),
            location: self.location.as_ref().map(Location::new),
            device: self.device_id.as_ref().map(DeviceId::new),
            occurred_at: self.timestamp,
        }
    }
}
