// ABOUTME: Listing wizard state machine
// Tracks the current step, gates forward transitions on validation, and
// drives the simulated submission

#![allow(dead_code)]

use std::time::Duration;

use tracing::{debug, info};

use super::fields::{FieldName, ListingFields};
use super::handoff::CompletionPayload;
use super::validator::validate_step;

/// Artificial delay for the mocked submission. There is no backend; the
/// delay exists so the UI's pending state is observable.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(900);

/// Steps of the listing wizard, in order. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Identity,
    Vibes,
    Verification,
    Done,
}

impl WizardStep {
    /// All steps in order
    pub fn all() -> &'static [WizardStep] {
        &[Self::Identity, Self::Vibes, Self::Verification, Self::Done]
    }

    /// 1-indexed step number for display
    pub fn number(&self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Vibes => 2,
            Self::Verification => 3,
            Self::Done => 4,
        }
    }

    pub fn total() -> usize {
        4
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Business Details",
            Self::Vibes => "Vibes & Photos",
            Self::Verification => "Verification",
            Self::Done => "All Done",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Identity => "Tell customers who you are",
            Self::Vibes => "Pick tags and photos that match your vibe",
            Self::Verification => "Optional documents to get verified",
            Self::Done => "Your listing is on its way",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::Vibes),
            Self::Vibes => Some(Self::Verification),
            Self::Verification => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::Vibes => Some(Self::Identity),
            Self::Verification => Some(Self::Vibes),
            Self::Done => Some(Self::Verification),
        }
    }
}

/// Result of a requested transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the given step
    Moved(WizardStep),
    /// Stayed put; errors are populated and the first invalid field should
    /// receive focus
    Blocked { first_invalid: FieldName },
    /// Request made no sense in the current state (already terminal,
    /// back from the first step, submit outside Verification)
    Ignored,
}

/// The wizard controller. Owns the field store for the lifetime of one
/// wizard run; both are discarded together on exit or completion.
#[derive(Debug, Default)]
pub struct WizardController {
    step: WizardStep,
    pub fields: ListingFields,
    verification_skipped: bool,
    submitting: bool,
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Identity
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == WizardStep::Done
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn verification_skipped(&self) -> bool {
        self.verification_skipped
    }

    /// Attempt to advance one step. Runs the validator for the current step;
    /// on failure the error map is replaced wholesale and the caller is told
    /// which field to focus.
    pub fn next(&mut self) -> Transition {
        if self.submitting || self.step == WizardStep::Done {
            return Transition::Ignored;
        }

        let errors = validate_step(self.step, &self.fields);
        if let Some(first_invalid) = errors.first_invalid() {
            debug!(step = self.step.number(), count = errors.len(), "step blocked by validation");
            self.fields.errors = errors;
            return Transition::Blocked { first_invalid };
        }

        match self.step.next() {
            Some(next) => {
                info!(from = self.step.number(), to = next.number(), "wizard advanced");
                self.step = next;
                self.fields.errors.clear();
                Transition::Moved(next)
            }
            None => Transition::Ignored,
        }
    }

    /// Move back one step. Always allowed below Done's predecessor chain;
    /// never re-validates earlier steps.
    pub fn back(&mut self) -> Transition {
        if self.submitting || self.step == WizardStep::Done {
            return Transition::Ignored;
        }
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                self.fields.errors.clear();
                Transition::Moved(prev)
            }
            None => Transition::Ignored,
        }
    }

    /// Jump to an arbitrary step. Backward and same-step jumps are
    /// unconditional; a forward jump gates on the *current* step's validity
    /// only, then lands directly on the target. The terminal step is only
    /// reachable through `skip_verification` or `submit`.
    pub fn jump_to(&mut self, target: WizardStep) -> Transition {
        if self.submitting || self.step == WizardStep::Done || target == WizardStep::Done {
            return Transition::Ignored;
        }

        if target <= self.step {
            self.step = target;
            self.fields.errors.clear();
            return Transition::Moved(target);
        }

        let errors = validate_step(self.step, &self.fields);
        if let Some(first_invalid) = errors.first_invalid() {
            self.fields.errors = errors;
            return Transition::Blocked { first_invalid };
        }

        self.step = target;
        self.fields.errors.clear();
        Transition::Moved(target)
    }

    /// "Skip for Now" on the verification step: unconditionally completes
    /// the wizard with the skipped flag set.
    pub fn skip_verification(&mut self) -> Transition {
        if self.submitting || self.step != WizardStep::Verification {
            return Transition::Ignored;
        }
        info!("verification skipped");
        self.verification_skipped = true;
        self.step = WizardStep::Done;
        self.fields.errors.clear();
        Transition::Moved(WizardStep::Done)
    }

    /// The main Continue action on the verification step. Simulates an
    /// asynchronous submission with a fixed delay, then completes with the
    /// skipped flag unset. The simulated submission cannot fail; there is no
    /// backend and no reachable error branch. Not cancellable once begun.
    pub async fn submit(&mut self) -> Transition {
        self.submit_with_delay(SUBMIT_DELAY).await
    }

    /// Same as `submit`, with the delay injectable so tests do not wait.
    pub async fn submit_with_delay(&mut self, delay: Duration) -> Transition {
        if self.submitting || self.step != WizardStep::Verification {
            return Transition::Ignored;
        }

        self.submitting = true;
        info!("submitting listing (simulated)");
        tokio::time::sleep(delay).await;
        self.submitting = false;

        self.verification_skipped = false;
        self.step = WizardStep::Done;
        self.fields.errors.clear();
        info!("listing submitted");
        Transition::Moved(WizardStep::Done)
    }

    /// Serialize the completion subset once the terminal step is reached
    pub fn completion_payload(&self) -> Option<CompletionPayload> {
        if self.step != WizardStep::Done {
            return None;
        }
        Some(CompletionPayload::from_fields(
            &self.fields,
            self.verification_skipped,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn controller_with_valid_identity() -> WizardController {
        let mut controller = WizardController::new();
        controller.fields.set_business_name("Ada's Kitchen");
        controller.fields.set_category(Some(Category::FoodAndCatering));
        controller.fields.set_whatsapp_number("+234 802 345 6789");
        controller
    }

    #[test]
    fn test_next_blocked_on_empty_identity() {
        let mut controller = WizardController::new();

        let result = controller.next();

        assert_eq!(
            result,
            Transition::Blocked {
                first_invalid: FieldName::BusinessName
            }
        );
        assert_eq!(controller.step(), WizardStep::Identity);
        assert_eq!(controller.fields.errors.len(), 3);
    }

    #[test]
    fn test_next_advances_with_valid_identity() {
        let mut controller = controller_with_valid_identity();

        let result = controller.next();

        assert_eq!(result, Transition::Moved(WizardStep::Vibes));
        assert!(controller.fields.errors.is_empty());
    }

    #[test]
    fn test_back_is_unconditional_and_clears_errors() {
        let mut controller = controller_with_valid_identity();
        controller.next();
        // Wreck a previously valid field; back must not re-validate
        controller.fields.set_business_name("");

        assert_eq!(controller.back(), Transition::Moved(WizardStep::Identity));
        assert!(controller.fields.errors.is_empty());
    }

    #[test]
    fn test_back_from_first_step_is_ignored() {
        let mut controller = WizardController::new();
        assert_eq!(controller.back(), Transition::Ignored);
    }

    #[test]
    fn test_back_then_next_round_trip_without_new_errors() {
        let mut controller = controller_with_valid_identity();
        controller.next();
        controller.back();

        let result = controller.next();

        assert_eq!(result, Transition::Moved(WizardStep::Vibes));
        assert!(controller.fields.errors.is_empty());
    }

    #[test]
    fn test_jump_backward_is_unconditional() {
        let mut controller = controller_with_valid_identity();
        controller.next();
        controller.next();
        assert_eq!(controller.step(), WizardStep::Verification);

        controller.fields.set_whatsapp_number("garbage");
        let result = controller.jump_to(WizardStep::Identity);

        assert_eq!(result, Transition::Moved(WizardStep::Identity));
    }

    #[test]
    fn test_jump_forward_gates_on_current_step_only() {
        let mut controller = controller_with_valid_identity();

        // Identity valid: jump straight to Verification without visiting Vibes
        let result = controller.jump_to(WizardStep::Verification);
        assert_eq!(result, Transition::Moved(WizardStep::Verification));
    }

    #[test]
    fn test_jump_forward_blocked_by_current_step() {
        let mut controller = WizardController::new();

        let result = controller.jump_to(WizardStep::Verification);

        assert!(matches!(result, Transition::Blocked { .. }));
        assert_eq!(controller.step(), WizardStep::Identity);
    }

    #[test]
    fn test_terminal_step_not_reachable_by_jump() {
        let mut controller = controller_with_valid_identity();
        assert_eq!(controller.jump_to(WizardStep::Done), Transition::Ignored);
    }

    #[test]
    fn test_skip_verification_only_from_verification_step() {
        let mut controller = controller_with_valid_identity();
        assert_eq!(controller.skip_verification(), Transition::Ignored);

        controller.jump_to(WizardStep::Verification);
        assert_eq!(
            controller.skip_verification(),
            Transition::Moved(WizardStep::Done)
        );
        assert!(controller.verification_skipped());
    }

    #[tokio::test]
    async fn test_submit_completes_without_skip_flag() {
        let mut controller = controller_with_valid_identity();
        controller.jump_to(WizardStep::Verification);

        let result = controller.submit_with_delay(Duration::ZERO).await;

        assert_eq!(result, Transition::Moved(WizardStep::Done));
        assert!(!controller.verification_skipped());
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_outside_verification_is_ignored() {
        let mut controller = controller_with_valid_identity();
        let result = controller.submit_with_delay(Duration::ZERO).await;
        assert_eq!(result, Transition::Ignored);
    }

    #[test]
    fn test_done_accepts_no_further_transitions() {
        let mut controller = controller_with_valid_identity();
        controller.jump_to(WizardStep::Verification);
        controller.skip_verification();

        assert_eq!(controller.next(), Transition::Ignored);
        assert_eq!(controller.back(), Transition::Ignored);
        assert_eq!(controller.jump_to(WizardStep::Identity), Transition::Ignored);
    }

    #[test]
    fn test_completion_payload_only_when_done() {
        let mut controller = controller_with_valid_identity();
        assert!(controller.completion_payload().is_none());

        controller.jump_to(WizardStep::Verification);
        controller.skip_verification();

        let payload = controller.completion_payload().unwrap();
        assert!(payload.verification_skipped);
        assert_eq!(payload.business_name, "Ada's Kitchen");
    }

    #[test]
    fn test_step_numbers_and_titles() {
        assert_eq!(WizardStep::Identity.number(), 1);
        assert_eq!(WizardStep::Done.number(), 4);
        assert_eq!(WizardStep::total(), 4);
        assert_eq!(WizardStep::Vibes.next(), Some(WizardStep::Verification));
        assert_eq!(WizardStep::Identity.previous(), None);
    }
}
