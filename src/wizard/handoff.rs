// ABOUTME: Completion handoff for the listing wizard
// Serializes the confirmation subset of wizard fields to a query string and
// back, so the confirmation view has no access to wizard internals

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::fields::ListingFields;
use crate::models::Category;

/// Only the first three selected tags travel to the confirmation view; the
/// remainder are silently dropped.
pub const MAX_HANDOFF_TAGS: usize = 3;

/// The flat subset of wizard fields the confirmation view renders. File
/// references never cross this boundary; only has-file booleans do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionPayload {
    pub business_name: String,
    pub category: Option<Category>,
    pub whatsapp_number: String,
    /// First three tags in original selection order
    pub vibe_tags: Vec<String>,
    pub verification_skipped: bool,
    pub has_photos: bool,
    pub has_id_document: bool,
}

impl CompletionPayload {
    /// Build the payload from the field store at completion time
    pub fn from_fields(fields: &ListingFields, verification_skipped: bool) -> Self {
        Self {
            business_name: fields.business_name.clone(),
            category: fields.category,
            whatsapp_number: fields.whatsapp_number.clone(),
            vibe_tags: fields
                .vibe_tags
                .iter()
                .take(MAX_HANDOFF_TAGS)
                .cloned()
                .collect(),
            verification_skipped,
            has_photos: fields.interior_photo.is_some()
                || fields.exterior_photo.is_some()
                || fields.professional_photo.is_some(),
            has_id_document: fields.id_document.is_some(),
        }
    }

    /// Encode as a percent-encoded query string. Tags are repeated entries;
    /// the skipped flag is carried as "true" or omitted entirely.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        serializer.append_pair("businessName", &self.business_name);
        if let Some(category) = self.category {
            serializer.append_pair("category", category.slug());
        }
        serializer.append_pair("whatsappNumber", &self.whatsapp_number);
        for tag in &self.vibe_tags {
            serializer.append_pair("vibeTags", tag);
        }
        if self.verification_skipped {
            serializer.append_pair("verificationSkipped", "true");
        }
        if self.has_photos {
            serializer.append_pair("hasPhotos", "true");
        }
        if self.has_id_document {
            serializer.append_pair("hasIdDocument", "true");
        }

        serializer.finish()
    }

    /// Decode a query string produced by `encode`. Unknown keys are ignored;
    /// absent boolean flags read as false.
    pub fn decode(query: &str) -> Self {
        let mut payload = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "businessName" => payload.business_name = value.into_owned(),
                "category" => payload.category = Category::from_slug(&value),
                "whatsappNumber" => payload.whatsapp_number = value.into_owned(),
                "vibeTags" => payload.vibe_tags.push(value.into_owned()),
                "verificationSkipped" => payload.verification_skipped = value == "true",
                "hasPhotos" => payload.has_photos = value == "true",
                "hasIdDocument" => payload.has_id_document = value == "true",
                _ => {}
            }
        }

        payload
    }
}
