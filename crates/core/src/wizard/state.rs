//! Wizard state container.
//!
//! Owns the three step payloads and the current step. All mutation goes
//! through [`WizardState::update`]; forward moves are gated by the current
//! step's validator, backward moves are not.

use serde::Serialize;

use super::payload::{
    BusinessDetails, MarketplaceConfig, MarketplacePayload, StepPatch, TokenSetup,
};
use super::validation::{
    validate_business_details, validate_marketplace_config, validate_payload,
    validate_token_setup, FieldErrors,
};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BusinessDetails,
    TokenSetup,
    MarketplaceConfig,
    Review,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Index of the first step (0-based).
pub const FIRST_STEP: u8 = 0;

/// Index of the last step (0-based).
pub const LAST_STEP: u8 = TOTAL_STEPS - 1;

impl WizardStep {
    pub fn from_index(n: u8) -> Result<Self, CoreError> {
        match n {
            0 => Ok(Self::BusinessDetails),
            1 => Ok(Self::TokenSetup),
            2 => Ok(Self::MarketplaceConfig),
            3 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step index {n}. Must be between {FIRST_STEP} and {LAST_STEP}"
            ))),
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::BusinessDetails => 0,
            Self::TokenSetup => 1,
            Self::MarketplaceConfig => 2,
            Self::Review => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessDetails => "Business Details",
            Self::TokenSetup => "Token Setup",
            Self::MarketplaceConfig => "Marketplace Config",
            Self::Review => "Review & Submit",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BusinessDetails => "business_details",
            Self::TokenSetup => "token_setup",
            Self::MarketplaceConfig => "marketplace_config",
            Self::Review => "review",
        }
    }

    fn following(self) -> Option<Self> {
        Self::from_index(self.index() + 1).ok()
    }

    fn preceding(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::from_index(i).ok())
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    current_step: WizardStep,
    #[serde(flatten)]
    payload: MarketplacePayload,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// A fresh wizard on the first step with an empty form.
    pub fn new() -> Self {
        Self {
            current_step: WizardStep::BusinessDetails,
            payload: MarketplacePayload::default(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn payload(&self) -> &MarketplacePayload {
        &self.payload
    }

    pub fn business_details(&self) -> &BusinessDetails {
        &self.payload.business_details
    }

    pub fn token_setup(&self) -> &TokenSetup {
        &self.payload.token_setup
    }

    pub fn marketplace_config(&self) -> &MarketplaceConfig {
        &self.payload.marketplace_config
    }

    /// Merge a partial update into the current step's payload.
    ///
    /// Does not validate. A patch addressed to any other step is rejected.
    pub fn update(&mut self, patch: StepPatch) -> Result<(), CoreError> {
        match (self.current_step, patch) {
            (WizardStep::BusinessDetails, StepPatch::BusinessDetails(p)) => {
                p.apply(&mut self.payload.business_details);
            }
            (WizardStep::TokenSetup, StepPatch::TokenSetup(p)) => {
                p.apply(&mut self.payload.token_setup);
            }
            (WizardStep::MarketplaceConfig, StepPatch::MarketplaceConfig(p)) => {
                p.apply(&mut self.payload.marketplace_config);
            }
            (current, patch) => {
                return Err(CoreError::Validation(format!(
                    "Cannot edit {} while on step {current}",
                    patch_target(&patch)
                )));
            }
        }
        Ok(())
    }

    /// Field errors for the current step. The review step has no fields.
    pub fn validate_current(&self) -> FieldErrors {
        match self.current_step {
            WizardStep::BusinessDetails => {
                validate_business_details(&self.payload.business_details)
            }
            WizardStep::TokenSetup => validate_token_setup(&self.payload.token_setup),
            WizardStep::MarketplaceConfig => {
                validate_marketplace_config(&self.payload.marketplace_config)
            }
            WizardStep::Review => FieldErrors::new(),
        }
    }

    /// Advance one step if the current step validates.
    ///
    /// On field errors the state is left untouched and the errors are
    /// returned as [`CoreError::InvalidFields`].
    pub fn next(&mut self) -> Result<WizardStep, CoreError> {
        let errors = self.validate_current();
        if !errors.is_empty() {
            return Err(CoreError::InvalidFields(errors));
        }
        let next = self.current_step.following().ok_or_else(|| {
            CoreError::Validation("Already on the review step; submit instead".to_string())
        })?;
        self.current_step = next;
        Ok(next)
    }

    /// Go back one step without validating. Stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.current_step.preceding() {
            self.current_step = prev;
        }
        self.current_step
    }

    /// The assembled payload, ready for submission.
    ///
    /// Only available on the review step, and only when every step validates.
    pub fn submission(&self) -> Result<MarketplacePayload, CoreError> {
        if self.current_step != WizardStep::Review {
            return Err(CoreError::Validation(format!(
                "Cannot submit from step {}; finish the wizard first",
                self.current_step
            )));
        }
        let errors = validate_payload(&self.payload);
        if !errors.is_empty() {
            return Err(CoreError::InvalidFields(errors));
        }
        Ok(self.payload.clone())
    }

    /// Back to the initial empty form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn patch_target(patch: &StepPatch) -> &'static str {
    match patch {
        StepPatch::BusinessDetails(_) => WizardStep::BusinessDetails.as_str(),
        StepPatch::TokenSetup(_) => WizardStep::TokenSetup.as_str(),
        StepPatch::MarketplaceConfig(_) => WizardStep::MarketplaceConfig.as_str(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::payload::{
        BusinessDetailsPatch, Feature, MarketplaceConfigPatch, MarketplaceTheme, TokenSetupPatch,
    };
    use assert_matches::assert_matches;

    fn fill_business(state: &mut WizardState) {
        state
            .update(StepPatch::BusinessDetails(BusinessDetailsPatch {
                name: Some("Acme Corp".to_string()),
                description: Some("Collectibles for the Acme community".to_string()),
                website: Some("https://acme.example".to_string()),
                logo: None,
            }))
            .unwrap();
    }

    fn fill_token(state: &mut WizardState) {
        state
            .update(StepPatch::TokenSetup(TokenSetupPatch {
                token_name: Some("Acme Token".to_string()),
                unit_name: Some("ACME".to_string()),
                total_supply: Some("10000".to_string()),
                ..Default::default()
            }))
            .unwrap();
    }

    fn fill_config(state: &mut WizardState) {
        state
            .update(StepPatch::MarketplaceConfig(MarketplaceConfigPatch {
                royalty_percentage: Some("2.5".to_string()),
                marketplace_theme: Some(MarketplaceTheme::Dark),
                features: Some(vec![Feature::Collection, Feature::Buy]),
                ..Default::default()
            }))
            .unwrap();
    }

    fn at_review() -> WizardState {
        let mut state = WizardState::new();
        fill_business(&mut state);
        state.next().unwrap();
        fill_token(&mut state);
        state.next().unwrap();
        fill_config(&mut state);
        state.next().unwrap();
        state
    }

    // -- steps --

    #[test]
    fn step_index_roundtrip() {
        for n in FIRST_STEP..=LAST_STEP {
            assert_eq!(WizardStep::from_index(n).unwrap().index(), n);
        }
        assert!(WizardStep::from_index(TOTAL_STEPS).is_err());
    }

    // -- transitions --

    #[test]
    fn starts_on_business_details_with_empty_form() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), WizardStep::BusinessDetails);
        assert_eq!(state.payload(), &MarketplacePayload::default());
    }

    #[test]
    fn next_with_short_description_is_refused_without_change() {
        let mut state = WizardState::new();
        fill_business(&mut state);
        state
            .update(StepPatch::BusinessDetails(BusinessDetailsPatch {
                description: Some("hi".to_string()),
                ..Default::default()
            }))
            .unwrap();
        let before = state.clone();

        let err = state.next().unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains_key("description"));
        });
        assert_eq!(state, before);
    }

    #[test]
    fn next_walks_through_all_steps() {
        let state = at_review();
        assert_eq!(state.current_step(), WizardStep::Review);
    }

    #[test]
    fn next_on_review_is_refused() {
        let mut state = at_review();
        assert_matches!(state.next(), Err(CoreError::Validation(_)));
        assert_eq!(state.current_step(), WizardStep::Review);
    }

    #[test]
    fn back_does_not_validate_and_keeps_data() {
        let mut state = WizardState::new();
        fill_business(&mut state);
        state.next().unwrap();
        // Token step left empty and invalid.
        assert_eq!(state.back(), WizardStep::BusinessDetails);
        assert_eq!(state.business_details().name, "Acme Corp");
    }

    #[test]
    fn back_on_first_step_stays_put() {
        let mut state = WizardState::new();
        assert_eq!(state.back(), WizardStep::BusinessDetails);
    }

    #[test]
    fn back_then_next_is_idempotent() {
        let mut state = WizardState::new();
        fill_business(&mut state);
        state.next().unwrap();
        fill_token(&mut state);
        let snapshot = state.clone();

        state.back();
        state.next().unwrap();
        assert_eq!(state, snapshot);

        // Same for a refused transition.
        let mut state = WizardState::new();
        state.next().unwrap_err();
        let errors_before = state.validate_current();
        state.back();
        let err = state.next().unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(errors) => {
            assert_eq!(errors, errors_before);
        });
    }

    // -- update --

    #[test]
    fn update_for_other_step_is_rejected() {
        let mut state = WizardState::new();
        let result = state.update(StepPatch::TokenSetup(TokenSetupPatch::default()));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_on_review_is_rejected() {
        let mut state = at_review();
        let result = state.update(StepPatch::MarketplaceConfig(MarketplaceConfigPatch {
            royalty_percentage: Some("99".to_string()),
            ..Default::default()
        }));
        assert!(result.is_err());
        assert_eq!(state.marketplace_config().royalty_percentage, "2.5");
    }

    #[test]
    fn update_does_not_validate() {
        let mut state = WizardState::new();
        let result = state.update(StepPatch::BusinessDetails(BusinessDetailsPatch {
            website: Some("not a url".to_string()),
            ..Default::default()
        }));
        assert!(result.is_ok());
        assert_eq!(state.business_details().website, "not a url");
    }

    // -- submission --

    #[test]
    fn submission_requires_review_step() {
        let mut state = WizardState::new();
        fill_business(&mut state);
        assert_matches!(state.submission(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn submission_returns_full_payload() {
        let state = at_review();
        let payload = state.submission().unwrap();
        assert_eq!(payload.business_details.name, "Acme Corp");
        assert_eq!(payload.token_setup.unit_name, "ACME");
        assert_eq!(
            payload.marketplace_config.features,
            vec![Feature::Collection, Feature::Buy]
        );
    }

    #[test]
    fn reset_returns_to_initial_form() {
        let mut state = at_review();
        state.reset();
        assert_eq!(state, WizardState::new());
    }

    #[test]
    fn serializes_flat_camel_case() {
        let value = serde_json::to_value(WizardState::new()).unwrap();
        assert_eq!(value["currentStep"], "business_details");
        assert!(value["businessDetails"].is_object());
        assert!(value["tokenSetup"].is_object());
        assert!(value["marketplaceConfig"].is_object());
    }
}
