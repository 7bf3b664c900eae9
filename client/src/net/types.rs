//! DTOs exchanged with the managed backend.
//!
//! DESIGN
//! ======
//! These mirror the JSON the document store and identity provider return.
//! They describe response shapes only; storage layout is owned upstream.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Present for wallet sign-ins.
    #[serde(default)]
    pub wallet_address: Option<String>,
}

impl User {
    /// Short label for the nav bar: name, else email, else shortened wallet.
    #[must_use]
    pub fn display_label(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.trim().to_owned();
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            return email.to_owned();
        }
        match self.wallet_address.as_deref() {
            Some(addr) => short_address(addr),
            None => "Account".to_owned(),
        }
    }
}

/// Abbreviate a wallet address as `0x1234…abcd`.
#[must_use]
pub fn short_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 10 {
        return addr.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Application profile stored for an identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub organization: String,
    pub address: String,
    pub email: String,
}

/// Registration form payload for `POST /api/profiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub organization: String,
    pub address: String,
    pub email: String,
}

/// Lifecycle of a contract from draft to payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Sent,
    Signed,
    Paid,
    Void,
}

impl ContractStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Awaiting signature",
            Self::Signed => "Awaiting payment",
            Self::Paid => "Paid",
            Self::Void => "Void",
        }
    }

    /// Sent or signed but not yet paid.
    #[must_use]
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Sent | Self::Signed)
    }
}

/// Contract row for lists and the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSummary {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: ContractStatus,
}

/// Payload for `POST /api/contracts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDraft {
    pub title: String,
    pub client_id: String,
    pub amount_cents: i64,
    pub currency: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Client (customer) row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organization: Option<String>,
}

/// Payload for `POST /api/clients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organization: Option<String>,
}

/// Token-addressed read-only contract shown to the freelancer's client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicContract {
    pub title: String,
    pub freelancer_name: String,
    pub client_name: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: ContractStatus,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Render integer minor units as `USD 1,250.00`.
#[must_use]
pub fn format_amount(amount_cents: i64, currency: &str) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let abs = amount_cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{currency} {sign}{grouped}.{:02}", abs % 100)
}
