use std::sync::Arc;

use nftfy_core::credentials::{CredentialVerifier, DemoCredentials};
use nftfy_core::submit::{SimulatedSubmitter, SubmitCollaborator};

use crate::auth::sessions::SessionRegistry;
use crate::config::ServerConfig;
use crate::wizards::WizardRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Identity provider used by login.
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Per-client session storage, addressed by session token.
    pub sessions: Arc<SessionRegistry>,
    /// Create-marketplace wizards, one per signed-in client.
    pub wizards: Arc<WizardRegistry>,
    /// Service that accepts finished marketplace configurations.
    pub submitter: Arc<dyn SubmitCollaborator>,
}

impl AppState {
    /// State wired with the demo credential table and the simulated submitter.
    pub fn new(config: ServerConfig) -> Self {
        let submitter = SimulatedSubmitter::new(config.submit_delay());
        Self {
            config: Arc::new(config),
            credentials: Arc::new(DemoCredentials),
            sessions: Arc::new(SessionRegistry::new()),
            wizards: Arc::new(WizardRegistry::new()),
            submitter: Arc::new(submitter),
        }
    }

    /// Replace the submit collaborator.
    pub fn with_submitter(mut self, submitter: Arc<dyn SubmitCollaborator>) -> Self {
        self.submitter = submitter;
        self
    }
}
