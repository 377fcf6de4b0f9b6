use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pull_request::PullRequest;
use crate::fields::{Model, Value};

/// Invoice lifecycle as reported by the invoicing provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    New,
    Paid,
    Confirmed,
    Complete,
    Expired,
    Invalid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::New => "new",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Confirmed => "confirmed",
            InvoiceStatus::Complete => "complete",
            InvoiceStatus::Expired => "expired",
            InvoiceStatus::Invalid => "invalid",
        }
    }

    /// Paid and complete invoices count as settled; everything else is pending
    pub fn is_settled(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Complete)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice issued to pay out (part of) a bounty
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Invoice {
    pub id: String,
    pub bounty_id: String,
    pub status: InvoiceStatus,
    pub amount: Option<i64>,
    pub recipient_user_id: Option<String>,
    pub payer_user_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A pledge of satoshis towards a pull request
///
/// `recipient_user_id` and `payer_user_id` are plain identifiers. Users are
/// resolved through the store's user directory, never owned by the bounty.
#[derive(Debug, Clone)]
pub struct Bounty {
    pub id: String,
    pub amount: Option<i64>,
    pub published_at: DateTime<Utc>,
    pub pull_request: Arc<PullRequest>,
    pub recipient_user_id: Option<String>,
    pub payer_user_id: Option<String>,
    /// Invoices raised against this bounty, in creation order
    pub invoices: Vec<Invoice>,
}

impl Model for Bounty {
    const ENTITY: &'static str = "bounty";

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "published_at",
        "amount",
        "pull_request.number",
        "pull_request.title",
        "payer",
        "recipient",
        "invoices",
        "pay",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column: &str) -> Option<Value<'_>> {
        let value = match column {
            "id" => Value::Text(&self.id),
            "published_at" => Value::Timestamp(self.published_at),
            "amount" => Value::from_opt_int(self.amount),
            "pull_request.number" => Value::Int(self.pull_request.number),
            "pull_request.title" => Value::Text(&self.pull_request.title),
            "payer" => Value::from_opt_text(self.payer_user_id.as_deref()),
            "recipient" => Value::from_opt_text(self.recipient_user_id.as_deref()),
            "invoices" | "pay" => Value::Null,
            _ => return None,
        };
        Some(value)
    }
}

impl Model for Invoice {
    const ENTITY: &'static str = "invoice";

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "bounty_id",
        "status",
        "amount",
        "recipient",
        "payer",
        "created_at",
    ];

    fn key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column: &str) -> Option<Value<'_>> {
        let value = match column {
            "id" => Value::Text(&self.id),
            "bounty_id" => Value::Text(&self.bounty_id),
            "status" => Value::Text(self.status.as_str()),
            "amount" => Value::from_opt_int(self.amount),
            "recipient" => Value::from_opt_text(self.recipient_user_id.as_deref()),
            "payer" => Value::from_opt_text(self.payer_user_id.as_deref()),
            "created_at" => Value::from_opt_timestamp(self.created_at),
            _ => return None,
        };
        Some(value)
    }
}
