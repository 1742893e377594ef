//! Fundraising service for campaign creation and donation bookkeeping.

use chrono::{DateTime, Duration, Utc};
use jamii_shared::FinancePolicy;
use jamii_shared::types::{DonationId, EventId, FundraisingId};
use rust_decimal::Decimal;

use super::types::{
    Donation, DonationInput, DonationMethod, DonationMethodTotal, Fundraising, FundraisingStatus,
};
use crate::amount::check_amount;
use crate::error::FinanceError;
use crate::ratio::percent_of;

/// Result of applying a donation to a campaign.
#[derive(Debug, Clone)]
pub struct AppliedDonation {
    /// The donation as recorded.
    pub donation: Donation,
    /// The matching method bucket, if the method was recognised.
    pub method: Option<DonationMethod>,
    /// True when this donation moved the campaign to `completed`.
    pub completed_campaign: bool,
}

/// Stateless service for fundraising calculations.
pub struct FundraisingService;

impl FundraisingService {
    /// Builds a fresh campaign with every method bucket seeded at zero.
    #[must_use]
    pub fn create(
        event_id: EventId,
        target_amount: Decimal,
        currency: impl Into<String>,
        policy: &FinancePolicy,
        now: DateTime<Utc>,
    ) -> Fundraising {
        let donation_methods = DonationMethod::ALL
            .into_iter()
            .map(|method| DonationMethodTotal {
                method,
                amount: Decimal::ZERO,
                percentage: Decimal::ZERO,
            })
            .collect();

        Fundraising {
            id: FundraisingId::new(),
            event_id,
            target_amount,
            current_amount: Decimal::ZERO,
            currency: currency.into(),
            start_date: now,
            end_date: now + Duration::days(policy.campaign_days),
            status: FundraisingStatus::Active,
            donation_methods,
            donations: Vec::new(),
            unattributed_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a donation and updates every running total.
    ///
    /// A method outside the seeded buckets still raises `current_amount`; the
    /// money is tracked in `unattributed_amount` instead of a bucket.
    ///
    /// Only an active campaign moves to `Completed` when the target is met. A
    /// cancelled campaign keeps accepting money but stays cancelled.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::NonPositiveDonation` if the amount is zero or
    /// negative, and `FinanceError::AmountOutOfRange` if the amount or a
    /// resulting total exceeds [`MAX_AMOUNT`](crate::amount::MAX_AMOUNT).
    /// The campaign is left untouched in either case.
    pub fn apply_donation(
        campaign: &mut Fundraising,
        input: DonationInput,
        now: DateTime<Utc>,
    ) -> Result<AppliedDonation, FinanceError> {
        if input.amount <= Decimal::ZERO {
            return Err(FinanceError::NonPositiveDonation(input.amount));
        }
        check_amount(input.amount)?;

        let method = DonationMethod::parse(&input.method)
            .filter(|m| campaign.donation_methods.iter().any(|t| t.method == *m));
        let current_amount = add_within_limit(campaign.current_amount, input.amount)?;
        let bucket_amount = match method {
            Some(m) => campaign
                .donation_methods
                .iter()
                .find(|t| t.method == m)
                .map_or(Ok(Decimal::ZERO), |t| add_within_limit(t.amount, input.amount))?,
            None => add_within_limit(campaign.unattributed_amount, input.amount)?,
        };

        let donation = Donation {
            id: DonationId::new(),
            donor_name: input.donor_name,
            amount: input.amount,
            method: input.method,
            timestamp: now,
            message: input.message,
            is_anonymous: input.is_anonymous,
        };

        campaign.current_amount = current_amount;
        match method.and_then(|m| campaign.donation_methods.iter_mut().find(|t| t.method == m)) {
            Some(bucket) => bucket.amount = bucket_amount,
            None => campaign.unattributed_amount = bucket_amount,
        }

        Self::recompute_percentages(campaign);

        let completed_campaign = campaign.status == FundraisingStatus::Active
            && campaign.current_amount >= campaign.target_amount;
        if completed_campaign {
            campaign.status = FundraisingStatus::Completed;
        }

        campaign.donations.push(donation.clone());
        campaign.updated_at = now;

        Ok(AppliedDonation {
            donation,
            method,
            completed_campaign,
        })
    }

    /// Recomputes each method's share of the current amount.
    pub fn recompute_percentages(campaign: &mut Fundraising) {
        let current = campaign.current_amount;
        for bucket in &mut campaign.donation_methods {
            bucket.percentage = percent_of(bucket.amount, current);
        }
    }

    /// Percentage of the target raised so far, 0 when the target is 0.
    #[must_use]
    pub fn completion_percentage(campaign: &Fundraising) -> Decimal {
        percent_of(campaign.current_amount, campaign.target_amount)
    }
}

fn add_within_limit(total: Decimal, amount: Decimal) -> Result<Decimal, FinanceError> {
    total
        .checked_add(amount)
        .ok_or(FinanceError::AmountOutOfRange(amount))
        .and_then(check_amount)
}
