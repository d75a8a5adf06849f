//! Data models module
//!
//! Wire shapes of the KidsDiary API: requests, listings, accounts, and the
//! draft diary entry.

pub mod draft;
pub mod remote;

pub use draft::{DraftPayload, FoodRecord, HealthRecord, SleepRecord};
pub use remote::{
    Account, ChildRequest, DraftSummary, Listing, LoginRequest, Photo, RemoteId, TokenRequest,
};
