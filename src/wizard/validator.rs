// ABOUTME: Pure step validation for the listing wizard
// Produces an ordered field-name -> message map for a given step

#![allow(dead_code)]

use lazy_static::lazy_static;
use regex::Regex;

use super::controller::WizardStep;
use super::fields::{ErrorMap, FieldName, ListingFields};

lazy_static! {
    // Lenient on purpose: accepts with or without the + prefix and with or
    // without the 234 country code, and only pins the leading digit class
    // plus a nine-digit suffix. Do not tighten to carrier prefixes; pre-fill
    // data elsewhere relies on loosely formatted numbers.
    static ref NG_PHONE: Regex = Regex::new(r"^(\+?234|0)?[789]\d{9}$").unwrap();
}

/// Strip the separators users commonly type into phone numbers before
/// matching: whitespace, parentheses, hyphens.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')' && *c != '-')
        .collect()
}

/// True if the number matches the lenient Nigerian mobile pattern after
/// normalization.
pub fn is_valid_ng_phone(raw: &str) -> bool {
    NG_PHONE.is_match(&normalize_phone(raw))
}

/// Validate the given step against the current field values. Pure and
/// deterministic; never touches I/O. Steps with no mandatory fields return
/// an empty map, so the controller can never be blocked there.
pub fn validate_step(step: WizardStep, fields: &ListingFields) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        WizardStep::Identity => {
            if fields.business_name.trim().is_empty() {
                errors.push(FieldName::BusinessName, "Business name is required");
            }
            if fields.category.is_none() {
                errors.push(FieldName::Category, "Select a category for your business");
            }
            if !is_valid_ng_phone(&fields.whatsapp_number) {
                errors.push(
                    FieldName::WhatsappNumber,
                    "Enter a valid Nigerian phone number (e.g. 0801 234 5678)",
                );
            }
        }
        // Vibe tags are optional; verification can always be skipped.
        WizardStep::Vibes | WizardStep::Verification => {}
        // Terminal step is never validated.
        WizardStep::Done => {}
    }

    errors
}
