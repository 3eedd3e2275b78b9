// ABOUTME: Draft listing model produced when the wizard completes

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::business::Category;

/// Review status of a submitted draft. Submission cannot fail in the current
/// mocked flow, so a draft is either awaiting review or skipped verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStatus {
    /// Submitted with verification documents; pending (mocked) review
    PendingReview,
    /// Submitted with "Skip for Now"; listing is live but unverified
    Unverified,
}

impl DraftStatus {
    pub fn indicator(&self) -> &'static str {
        match self {
            DraftStatus::PendingReview => "◉",
            DraftStatus::Unverified => "○",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftStatus::PendingReview => "Pending review",
            DraftStatus::Unverified => "Unverified",
        }
    }
}

/// A completed wizard run, captured at submission time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDraft {
    pub id: Uuid,
    pub business_name: String,
    pub category: Category,
    pub whatsapp_number: String,
    pub vibe_tags: Vec<String>,
    pub status: DraftStatus,
    pub created_at: DateTime<Utc>,
}

impl ListingDraft {
    pub fn new(
        business_name: String,
        category: Category,
        whatsapp_number: String,
        vibe_tags: Vec<String>,
        verification_skipped: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            business_name,
            category,
            whatsapp_number,
            vibe_tags,
            status: if verification_skipped {
                DraftStatus::Unverified
            } else {
                DraftStatus::PendingReview
            },
            created_at: Utc::now(),
        }
    }
}
