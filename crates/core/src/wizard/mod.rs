//! Create-marketplace wizard.
//!
//! Four linear steps: business details, token setup, marketplace config,
//! review. Each data step has a pure validator; the state container only
//! advances when the current step validates.

pub mod payload;
pub mod review;
pub mod state;
pub mod validation;

pub use payload::{
    BusinessDetails, Feature, MarketplaceConfig, MarketplacePayload, MarketplaceTheme,
    StepPatch, TokenSetup, TokenType,
};
pub use review::ReviewSummary;
pub use state::{WizardState, WizardStep};
pub use validation::FieldErrors;
