// ABOUTME: Form field store for the listing wizard
// Holds accumulated input values and the per-field error map

#![allow(dead_code)]

use std::path::PathBuf;

use crate::models::Category;

/// Field identifiers, in declaration order per step. Error reporting and
/// focus targeting follow this order, never alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    BusinessName,
    Category,
    WhatsappNumber,
    CacNumber,
    VibeTags,
    InteriorPhoto,
    ExteriorPhoto,
    ProfessionalPhoto,
    IdDocumentType,
    IdDocument,
}

impl FieldName {
    /// Stable key used in error maps and the completion handoff
    pub fn key(&self) -> &'static str {
        match self {
            Self::BusinessName => "businessName",
            Self::Category => "category",
            Self::WhatsappNumber => "whatsappNumber",
            Self::CacNumber => "cacNumber",
            Self::VibeTags => "vibeTags",
            Self::InteriorPhoto => "interiorPhoto",
            Self::ExteriorPhoto => "exteriorPhoto",
            Self::ProfessionalPhoto => "professionalPhoto",
            Self::IdDocumentType => "idDocumentType",
            Self::IdDocument => "idDocument",
        }
    }
}

/// Accepted identity document types on the verification step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdDocumentType {
    NationalId,
    DriversLicense,
    InternationalPassport,
    VotersCard,
}

impl IdDocumentType {
    pub fn all() -> &'static [IdDocumentType] {
        &[
            Self::NationalId,
            Self::DriversLicense,
            Self::InternationalPassport,
            Self::VotersCard,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NationalId => "National ID (NIN)",
            Self::DriversLicense => "Driver's License",
            Self::InternationalPassport => "International Passport",
            Self::VotersCard => "Voter's Card",
        }
    }
}

/// File slots the wizard can attach. Only path references are held; no file
/// bytes ever enter wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    InteriorPhoto,
    ExteriorPhoto,
    ProfessionalPhoto,
    IdDocument,
}

impl FileSlot {
    pub fn field(&self) -> FieldName {
        match self {
            Self::InteriorPhoto => FieldName::InteriorPhoto,
            Self::ExteriorPhoto => FieldName::ExteriorPhoto,
            Self::ProfessionalPhoto => FieldName::ProfessionalPhoto,
            Self::IdDocument => FieldName::IdDocument,
        }
    }
}

/// One validation error attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

/// Ordered error map. Order follows field declaration order on the step the
/// errors were produced for; the first entry is the focus target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FieldName, message: impl Into<String>) {
        // One message per field; later pushes for the same field replace
        if let Some(existing) = self.entries.iter_mut().find(|e| e.field == field) {
            existing.message = message.into();
        } else {
            self.entries.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.iter().any(|e| e.field == field)
    }

    /// First failing field in declaration order, the focus/scroll target
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.entries.first().map(|e| e.field)
    }

    pub fn remove(&mut self, field: FieldName) {
        self.entries.retain(|e| e.field != field);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }
}

/// The wizard's accumulated input values plus the current error map.
/// Created fresh when the wizard opens and discarded on exit or completion;
/// nothing here is persisted across runs.
#[derive(Debug, Clone, Default)]
pub struct ListingFields {
    pub business_name: String,
    pub category: Option<Category>,
    pub whatsapp_number: String,
    pub cac_number: String,
    /// Selection order preserved for display and for the handoff cap
    pub vibe_tags: Vec<String>,
    pub interior_photo: Option<PathBuf>,
    pub exterior_photo: Option<PathBuf>,
    pub professional_photo: Option<PathBuf>,
    pub id_document_type: Option<IdDocumentType>,
    pub id_document: Option<PathBuf>,
    pub errors: ErrorMap,
}

impl ListingFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setters overwrite unconditionally and clear any error recorded
    /// against the edited field (optimistic-clear-on-edit).
    pub fn set_business_name(&mut self, value: impl Into<String>) {
        self.business_name = value.into();
        self.errors.remove(FieldName::BusinessName);
    }

    pub fn set_category(&mut self, value: Option<Category>) {
        self.category = value;
        self.errors.remove(FieldName::Category);
    }

    pub fn set_whatsapp_number(&mut self, value: impl Into<String>) {
        self.whatsapp_number = value.into();
        self.errors.remove(FieldName::WhatsappNumber);
    }

    pub fn set_cac_number(&mut self, value: impl Into<String>) {
        self.cac_number = value.into();
        self.errors.remove(FieldName::CacNumber);
    }

    pub fn set_id_document_type(&mut self, value: Option<IdDocumentType>) {
        self.id_document_type = value;
        self.errors.remove(FieldName::IdDocumentType);
    }

    /// Toggle a vibe tag: add if absent, remove if present. Returns whether
    /// the tag is a member after the toggle. Insertion order is preserved.
    pub fn toggle_vibe_tag(&mut self, tag: &str) -> bool {
        self.errors.remove(FieldName::VibeTags);
        if let Some(pos) = self.vibe_tags.iter().position(|t| t == tag) {
            self.vibe_tags.remove(pos);
            false
        } else {
            self.vibe_tags.push(tag.to_string());
            true
        }
    }

    /// Attach or replace a file reference. Passing `None` is the only way to
    /// remove a file (the UI's "Remove" control).
    pub fn set_file(&mut self, slot: FileSlot, path: Option<PathBuf>) {
        self.errors.remove(slot.field());
        match slot {
            FileSlot::InteriorPhoto => self.interior_photo = path,
            FileSlot::ExteriorPhoto => self.exterior_photo = path,
            FileSlot::ProfessionalPhoto => self.professional_photo = path,
            FileSlot::IdDocument => self.id_document = path,
        }
    }

    pub fn file(&self, slot: FileSlot) -> Option<&PathBuf> {
        match slot {
            FileSlot::InteriorPhoto => self.interior_photo.as_ref(),
            FileSlot::ExteriorPhoto => self.exterior_photo.as_ref(),
            FileSlot::ProfessionalPhoto => self.professional_photo.as_ref(),
            FileSlot::IdDocument => self.id_document.as_ref(),
        }
    }

    pub fn has_any_verification_material(&self) -> bool {
        self.id_document.is_some() || !self.cac_number.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_clears_field_error_only() {
        let mut fields = ListingFields::new();
        fields.errors.push(FieldName::BusinessName, "Business name is required");
        fields.errors.push(FieldName::WhatsappNumber, "Enter a valid number");

        fields.set_business_name("Ada's Kitchen");

        assert!(!fields.errors.contains(FieldName::BusinessName));
        assert!(fields.errors.contains(FieldName::WhatsappNumber));
    }

    #[test]
    fn test_toggle_vibe_tag_add_then_remove() {
        let mut fields = ListingFields::new();

        assert!(fields.toggle_vibe_tag("#OwambeReady"));
        assert_eq!(fields.vibe_tags, vec!["#OwambeReady"]);

        assert!(!fields.toggle_vibe_tag("#OwambeReady"));
        assert!(fields.vibe_tags.is_empty());
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut fields = ListingFields::new();
        fields.toggle_vibe_tag("#LateNight");
        fields.toggle_vibe_tag("#BudgetFriendly");
        fields.toggle_vibe_tag("#FamilyOwned");
        fields.toggle_vibe_tag("#BudgetFriendly"); // remove middle
        fields.toggle_vibe_tag("#Delivery");

        assert_eq!(
            fields.vibe_tags,
            vec!["#LateNight", "#FamilyOwned", "#Delivery"]
        );
    }

    #[test]
    fn test_file_removal_is_overwrite_with_none() {
        let mut fields = ListingFields::new();
        fields.set_file(FileSlot::InteriorPhoto, Some(PathBuf::from("/tmp/a.jpg")));
        assert!(fields.file(FileSlot::InteriorPhoto).is_some());

        fields.set_file(FileSlot::InteriorPhoto, None);
        assert!(fields.file(FileSlot::InteriorPhoto).is_none());
    }

    #[test]
    fn test_error_map_order_and_first_invalid() {
        let mut errors = ErrorMap::new();
        errors.push(FieldName::BusinessName, "required");
        errors.push(FieldName::Category, "required");
        errors.push(FieldName::WhatsappNumber, "invalid");

        assert_eq!(errors.first_invalid(), Some(FieldName::BusinessName));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_error_map_replaces_same_field() {
        let mut errors = ErrorMap::new();
        errors.push(FieldName::BusinessName, "first");
        errors.push(FieldName::BusinessName, "second");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::BusinessName), Some("second"));
    }
}
