//! Concurrent access stress tests for event finance records.
//!
//! These tests verify that:
//! - Concurrent donations to one campaign are all counted
//! - Method buckets stay consistent with the running total under contention
//! - Concurrent expenditures on one event are all stored

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_wrap)]

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use jamii_core::expenditure::{ExpenditureStatus, NewExpenditure};
use jamii_core::fundraising::{DonationInput, DonationMethod, FundraisingStatus};
use jamii_shared::FinancePolicy;
use jamii_shared::types::EventId;
use jamii_store::{FinanceRepository, FinanceStore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::Barrier;

fn repository() -> FinanceRepository {
    FinanceRepository::new(Arc::new(FinanceStore::new()), FinancePolicy::default())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_donations_no_lost_updates() {
    const NUM_DONATIONS: usize = 200;

    let repo = repository();
    let event_id = EventId::from("harambee-2026");
    let target = dec!(1000);
    repo.create_fundraising(&event_id, target, None).unwrap();

    let amount = Decimal::new(1000, 2); // 10.00 per donation
    let barrier = Arc::new(Barrier::new(NUM_DONATIONS));
    let mut handles = Vec::with_capacity(NUM_DONATIONS);

    for i in 0..NUM_DONATIONS {
        let repo = repo.clone();
        let event_id = event_id.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(tokio::spawn(async move {
            barrier.wait().await;

            let method = DonationMethod::ALL[i % DonationMethod::ALL.len()];
            repo.add_donation(
                &event_id,
                DonationInput {
                    donor_name: format!("Donor {}", i),
                    amount,
                    method: method.as_str().to_string(),
                    is_anonymous: i % 3 == 0,
                    message: None,
                },
            )
        }));
    }

    let results = join_all(handles).await;
    for result in results {
        assert!(matches!(result, Ok(Ok(_))), "donation failed: {:?}", result);
    }

    let campaign = repo
        .get_event_financial_data(&event_id)
        .fundraising
        .expect("campaign should exist");

    let expected = amount * Decimal::from(NUM_DONATIONS as i64);
    assert_eq!(
        campaign.current_amount, expected,
        "current amount drifted under contention"
    );
    assert_eq!(campaign.donations.len(), NUM_DONATIONS);

    let bucketed: Decimal = campaign.donation_methods.iter().map(|m| m.amount).sum();
    assert_eq!(bucketed, expected);
    assert_eq!(campaign.status, FundraisingStatus::Completed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_expenditures_all_stored() {
    const NUM_EXPENDITURES: usize = 100;

    let repo = repository();
    let event_id = EventId::from("cleanup-day");
    let barrier = Arc::new(Barrier::new(NUM_EXPENDITURES));
    let mut handles = Vec::with_capacity(NUM_EXPENDITURES);

    for i in 0..NUM_EXPENDITURES {
        let repo = repo.clone();
        let event_id = event_id.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(tokio::spawn(async move {
            barrier.wait().await;

            repo.add_expenditure(NewExpenditure {
                event_id,
                category_id: None,
                description: format!("Supplies batch {}", i),
                amount: dec!(5),
                vendor: Some("Mama Mboga".to_string()),
                date: None,
                status: ExpenditureStatus::Paid,
            })
        }));
    }

    let results = join_all(handles).await;
    let mut ids = HashSet::with_capacity(NUM_EXPENDITURES);
    for result in results {
        match result {
            Ok(Ok(expenditure)) => {
                ids.insert(expenditure.id);
            }
            other => panic!("expenditure failed: {:?}", other),
        }
    }
    assert_eq!(ids.len(), NUM_EXPENDITURES, "expenditure IDs must be unique");

    let data = repo.get_event_financial_data(&event_id);
    assert_eq!(data.expenditures.len(), NUM_EXPENDITURES);
    let total: Decimal = data.expenditures.iter().map(|e| e.amount).sum();
    assert_eq!(total, dec!(500));
}
