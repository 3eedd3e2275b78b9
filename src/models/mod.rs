// ABOUTME: Core data models for the business directory and listing drafts

pub mod business;
pub mod listing;

pub use business::{Business, Category};
pub use listing::{DraftStatus, ListingDraft};
