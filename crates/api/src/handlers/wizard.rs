//! Handlers for the create-marketplace wizard.
//!
//! Every endpoint is behind [`RequireStartup`]. Each signed-in client has one
//! wizard, created on first access.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use nftfy_core::error::CoreError;
use nftfy_core::submit::{submit_with_timeout, SubmissionReceipt};
use nftfy_core::wizard::state::TOTAL_STEPS;
use nftfy_core::wizard::{ReviewSummary, StepPatch, WizardState, WizardStep};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::RequireStartup;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::wizards::WizardSlot;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Everything the wizard page needs to render the current step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step_index: u8,
    pub step_label: &'static str,
    pub total_steps: u8,
    #[serde(flatten)]
    pub state: WizardState,
    /// True while a submission is pending; the submit control is disabled.
    pub submitting: bool,
    /// Present on the review step only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewSummary>,
}

impl WizardView {
    fn new(state: &WizardState, submitting: bool) -> Self {
        let step = state.current_step();
        Self {
            step_index: step.index(),
            step_label: step.label(),
            total_steps: TOTAL_STEPS,
            state: state.clone(),
            submitting,
            review: (step == WizardStep::Review)
                .then(|| ReviewSummary::from_payload(state.payload())),
        }
    }
}

type ViewResponse = Json<DataResponse<WizardView>>;

fn view_response(state: &WizardState, slot: &WizardSlot) -> ViewResponse {
    Json(DataResponse {
        data: WizardView::new(state, slot.gate.is_in_flight()),
    })
}

/// Refuse edits and navigation while a submission is pending.
///
/// Call with the state lock held, so a submit cannot start between the
/// check and the change.
fn ensure_idle(slot: &WizardSlot) -> AppResult<()> {
    if slot.gate.is_in_flight() {
        return Err(AppError::Core(CoreError::Conflict(
            "A submission is in progress; wait for it to finish".to_string(),
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /dashboard/startup/create
// ---------------------------------------------------------------------------

/// The caller's wizard, created empty on first access.
pub async fn get_wizard(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
) -> AppResult<ViewResponse> {
    let slot = state.wizards.get_or_create(&auth.token_hash).await;
    let wizard = slot.state.lock().await;
    Ok(view_response(&wizard, &slot))
}

// ---------------------------------------------------------------------------
// PATCH /dashboard/startup/create
// ---------------------------------------------------------------------------

/// Merge a partial update into the current step. Does not validate.
pub async fn update_wizard(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
    Json(patch): Json<StepPatch>,
) -> AppResult<ViewResponse> {
    let slot = state.wizards.get_or_create(&auth.token_hash).await;
    let mut wizard = slot.state.lock().await;
    ensure_idle(&slot)?;
    wizard.update(patch)?;

    tracing::debug!(
        email = %auth.session.email,
        step = %wizard.current_step(),
        "Wizard step data updated"
    );

    Ok(view_response(&wizard, &slot))
}

// ---------------------------------------------------------------------------
// POST /dashboard/startup/create/next
// ---------------------------------------------------------------------------

/// Advance one step if the current step validates.
///
/// Field errors come back as 400 with a `fields` map; the wizard is unchanged.
pub async fn next_step(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
) -> AppResult<ViewResponse> {
    let slot = state.wizards.get_or_create(&auth.token_hash).await;
    let mut wizard = slot.state.lock().await;
    ensure_idle(&slot)?;
    let from = wizard.current_step();
    let to = wizard.next()?;

    tracing::info!(
        email = %auth.session.email,
        from_step = %from,
        to_step = %to,
        "Wizard advanced"
    );

    Ok(view_response(&wizard, &slot))
}

// ---------------------------------------------------------------------------
// POST /dashboard/startup/create/back
// ---------------------------------------------------------------------------

/// Go back one step without validating.
pub async fn previous_step(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
) -> AppResult<ViewResponse> {
    let slot = state.wizards.get_or_create(&auth.token_hash).await;
    let mut wizard = slot.state.lock().await;
    ensure_idle(&slot)?;
    let from = wizard.current_step();
    let to = wizard.back();

    tracing::info!(
        email = %auth.session.email,
        from_step = %from,
        to_step = %to,
        "Wizard went back"
    );

    Ok(view_response(&wizard, &slot))
}

// ---------------------------------------------------------------------------
// POST /dashboard/startup/create/submit
// ---------------------------------------------------------------------------

/// Hand the assembled payload to the submit collaborator.
///
/// At most one submission per wizard is in flight; a concurrent call gets
/// 409. On success the wizard resets to an empty form. On failure or
/// timeout the entered data is kept.
pub async fn submit_wizard(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
) -> AppResult<(StatusCode, Json<DataResponse<SubmissionReceipt>>)> {
    let slot = state.wizards.get_or_create(&auth.token_hash).await;
    let timeout = state.config.submit_timeout();

    let outcome = slot
        .gate
        .run(async {
            let payload = slot.state.lock().await.submission()?;
            tracing::info!(
                email = %auth.session.email,
                marketplace = %payload.business_details.name,
                "Submitting marketplace"
            );

            let result = submit_with_timeout(state.submitter.as_ref(), &payload, timeout).await;
            if result.is_ok() {
                slot.state.lock().await.reset();
            }
            Ok::<_, AppError>(result)
        })
        .await??;

    match outcome {
        Ok(receipt) => {
            tracing::info!(
                email = %auth.session.email,
                submission_id = %receipt.id,
                domain = %receipt.domain,
                "Marketplace submitted"
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
        }
        Err(err) => {
            tracing::warn!(email = %auth.session.email, error = %err, "Marketplace submission failed");
            Err(err.into())
        }
    }
}

// ---------------------------------------------------------------------------
// DELETE /dashboard/startup/create
// ---------------------------------------------------------------------------

/// Throw the wizard away. The next access starts a fresh one.
pub async fn discard_wizard(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
) -> AppResult<StatusCode> {
    if let Some(slot) = state.wizards.get(&auth.token_hash).await {
        let _wizard = slot.state.lock().await;
        ensure_idle(&slot)?;
        state.wizards.discard(&auth.token_hash).await;
    }

    tracing::info!(email = %auth.session.email, "Wizard discarded");

    Ok(StatusCode::NO_CONTENT)
}
