//! Fundraising campaigns and donation tracking.

pub mod service;
pub mod types;


pub use service::{AppliedDonation, FundraisingService};
pub use types::{
    Donation, DonationInput, DonationMethod, DonationMethodTotal, Fundraising, FundraisingStatus,
};
