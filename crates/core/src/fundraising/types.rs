//! Fundraising data types.

use chrono::{DateTime, Utc};
use jamii_shared::types::{DonationId, EventId, FundraisingId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle of a fundraising campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundraisingStatus {
    /// Accepting donations.
    Active,
    /// Target reached. Never reverts to active.
    Completed,
    /// Stopped before reaching the target.
    Cancelled,
}

/// Channel a donation arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationMethod {
    /// Card or online payment.
    Online,
    /// Cash collected in person.
    Cash,
    /// Mobile money transfer.
    MobileMoney,
    /// Direct bank transfer.
    BankTransfer,
    /// Corporate or partner sponsorship.
    Sponsorship,
}

impl DonationMethod {
    /// Every method a new campaign is seeded with, in display order.
    pub const ALL: [Self; 5] = [
        Self::Online,
        Self::Cash,
        Self::MobileMoney,
        Self::BankTransfer,
        Self::Sponsorship,
    ];

    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Cash => "cash",
            Self::MobileMoney => "mobile_money",
            Self::BankTransfer => "bank_transfer",
            Self::Sponsorship => "sponsorship",
        }
    }

    /// Parses a wire name with an exact, case-sensitive match.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

impl std::fmt::Display for DonationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running total for one donation method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationMethodTotal {
    /// Donation method.
    #[serde(rename = "type")]
    pub method: DonationMethod,
    /// Amount received through this method.
    pub amount: Decimal,
    /// Share of the campaign's current amount, in percent.
    pub percentage: Decimal,
}

/// A single recorded donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Donation ID.
    pub id: DonationId,
    /// Donor display name.
    pub donor_name: String,
    /// Donated amount.
    pub amount: Decimal,
    /// Method as submitted; may name a method outside [`DonationMethod`].
    pub method: String,
    /// When the donation was recorded.
    pub timestamp: DateTime<Utc>,
    /// Optional message from the donor.
    pub message: Option<String>,
    /// Whether the donor asked to stay anonymous.
    pub is_anonymous: bool,
}

/// A fundraising campaign for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundraising {
    /// Campaign ID.
    pub id: FundraisingId,
    /// Owning event.
    pub event_id: EventId,
    /// Amount the campaign aims to raise.
    pub target_amount: Decimal,
    /// Amount raised so far.
    pub current_amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Campaign start.
    pub start_date: DateTime<Utc>,
    /// Campaign end.
    pub end_date: DateTime<Utc>,
    /// Campaign status.
    pub status: FundraisingStatus,
    /// Per-method running totals.
    pub donation_methods: Vec<DonationMethodTotal>,
    /// Donation log in arrival order.
    pub donations: Vec<Donation>,
    /// Money received through methods with no bucket.
    pub unattributed_amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for recording a donation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInput {
    /// Donor display name.
    pub donor_name: String,
    /// Donated amount.
    pub amount: Decimal,
    /// Method wire name.
    pub method: String,
    /// Whether the donor asked to stay anonymous.
    #[serde(default)]
    pub is_anonymous: bool,
    /// Optional message from the donor.
    #[serde(default)]
    pub message: Option<String>,
}
