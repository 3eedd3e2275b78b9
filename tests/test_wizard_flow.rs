// ABOUTME: End-to-end tests for the listing wizard - the full journey from
// empty form to completion handoff, exercised through the public API

use std::path::PathBuf;
use std::time::Duration;

use pretty_assertions::assert_eq;

use bizlist::models::Category;
use bizlist::wizard::{
    CompletionPayload, FieldName, FileSlot, Transition, WizardController, WizardStep,
    MAX_HANDOFF_TAGS,
};

fn filled_identity() -> WizardController {
    let mut wizard = WizardController::new();
    wizard.fields.set_business_name("Ada's Kitchen & Grill");
    wizard.fields.set_category(Some(Category::FoodAndCatering));
    wizard.fields.set_whatsapp_number("0801 234 5678");
    wizard
}

#[tokio::test]
async fn test_happy_path_submit_journey() {
    let mut wizard = filled_identity();

    assert_eq!(wizard.next(), Transition::Moved(WizardStep::Vibes));

    wizard.fields.toggle_vibe_tag("#OwambeReady");
    wizard.fields.toggle_vibe_tag("#LateNight");
    wizard
        .fields
        .set_file(FileSlot::InteriorPhoto, Some(PathBuf::from("interior.jpg")));

    assert_eq!(wizard.next(), Transition::Moved(WizardStep::Verification));

    wizard.fields.set_cac_number("RC-1234567");
    wizard
        .fields
        .set_file(FileSlot::IdDocument, Some(PathBuf::from("nin.pdf")));

    let result = wizard.submit_with_delay(Duration::ZERO).await;
    assert_eq!(result, Transition::Moved(WizardStep::Done));
    assert!(wizard.is_done());

    let payload = wizard.completion_payload().unwrap();
    assert_eq!(payload.business_name, "Ada's Kitchen & Grill");
    assert_eq!(payload.vibe_tags, vec!["#OwambeReady", "#LateNight"]);
    assert!(!payload.verification_skipped);
    assert!(payload.has_photos);
    assert!(payload.has_id_document);
}

#[test]
fn test_skip_journey_marks_unverified() {
    let mut wizard = filled_identity();
    wizard.next();
    wizard.next();

    assert_eq!(
        wizard.skip_verification(),
        Transition::Moved(WizardStep::Done)
    );

    let payload = wizard.completion_payload().unwrap();
    assert!(payload.verification_skipped);
    assert!(!payload.has_id_document);
}

#[test]
fn test_errors_reported_in_declaration_order() {
    let mut wizard = WizardController::new();
    wizard.fields.set_whatsapp_number("not a number");

    let result = wizard.next();

    // businessName comes before whatsappNumber even though both fail
    assert_eq!(
        result,
        Transition::Blocked {
            first_invalid: FieldName::BusinessName
        }
    );
    let fields: Vec<FieldName> = wizard.fields.errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            FieldName::BusinessName,
            FieldName::Category,
            FieldName::WhatsappNumber
        ]
    );
}

#[test]
fn test_fixing_a_field_clears_only_its_error() {
    let mut wizard = WizardController::new();
    wizard.next();
    assert_eq!(wizard.fields.errors.len(), 3);

    wizard.fields.set_business_name("Ada's Kitchen");

    assert_eq!(wizard.fields.errors.len(), 2);
    assert!(!wizard.fields.errors.contains(FieldName::BusinessName));
    assert!(wizard.fields.errors.contains(FieldName::Category));
}

#[test]
fn test_back_keeps_entered_data() {
    let mut wizard = filled_identity();
    wizard.next();
    wizard.fields.toggle_vibe_tag("#Delivery");

    wizard.back();
    assert_eq!(wizard.step(), WizardStep::Identity);

    wizard.next();
    assert_eq!(wizard.fields.vibe_tags, vec!["#Delivery"]);
}

#[test]
fn test_forward_jump_skips_intermediate_validation() {
    let mut wizard = filled_identity();

    // Vibes has no required fields, but the jump doesn't even look at it:
    // only the current (Identity) step gates the move
    assert_eq!(
        wizard.jump_to(WizardStep::Verification),
        Transition::Moved(WizardStep::Verification)
    );
}

#[test]
fn test_handoff_caps_tags_in_selection_order() {
    let mut wizard = filled_identity();
    wizard.next();
    for tag in ["#LateNight", "#BudgetFriendly", "#FamilyOwned", "#Delivery", "#LuxuryFeel"] {
        wizard.fields.toggle_vibe_tag(tag);
    }
    wizard.next();
    wizard.skip_verification();

    let payload = wizard.completion_payload().unwrap();
    assert_eq!(payload.vibe_tags.len(), MAX_HANDOFF_TAGS);
    assert_eq!(
        payload.vibe_tags,
        vec!["#LateNight", "#BudgetFriendly", "#FamilyOwned"]
    );
}

#[test]
fn test_handoff_never_contains_file_paths() {
    let mut wizard = filled_identity();
    wizard.next();
    wizard.fields.set_file(
        FileSlot::ExteriorPhoto,
        Some(PathBuf::from("/home/ada/secret-location/shopfront.jpg")),
    );
    wizard.next();
    wizard
        .fields
        .set_file(FileSlot::IdDocument, Some(PathBuf::from("/home/ada/nin.pdf")));
    wizard.skip_verification();

    let encoded = wizard.completion_payload().unwrap().encode();

    assert!(!encoded.contains("secret-location"));
    assert!(!encoded.contains("nin.pdf"));
    assert!(encoded.contains("hasPhotos=true"));
    assert!(encoded.contains("hasIdDocument=true"));
}

#[test]
fn test_handoff_round_trips_through_query_string() {
    let mut wizard = filled_identity();
    wizard.next();
    wizard.fields.toggle_vibe_tag("#OwambeReady");
    wizard.next();
    wizard.skip_verification();

    let payload = wizard.completion_payload().unwrap();
    let decoded = CompletionPayload::decode(&payload.encode());

    assert_eq!(decoded, payload);
}

#[tokio::test]
async fn test_submission_is_not_repeatable() {
    let mut wizard = filled_identity();
    wizard.jump_to(WizardStep::Verification);

    wizard.submit_with_delay(Duration::ZERO).await;
    let again = wizard.submit_with_delay(Duration::ZERO).await;

    assert_eq!(again, Transition::Ignored);
}
