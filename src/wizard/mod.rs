// ABOUTME: The four-step business-listing wizard
// Field store, pure step validation, the controller state machine, and the
// completion handoff to the confirmation view

pub mod controller;
pub mod fields;
pub mod handoff;
pub mod validator;

pub use controller::{Transition, WizardController, WizardStep, SUBMIT_DELAY};
pub use fields::{ErrorMap, FieldName, FileSlot, IdDocumentType, ListingFields};
pub use handoff::{CompletionPayload, MAX_HANDOFF_TAGS};
pub use validator::{is_valid_ng_phone, normalize_phone, validate_step};
