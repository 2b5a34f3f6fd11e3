// New-bill submission workflow
//
// Validates the selected proof, builds the draft from the form and pushes
// it through the store: upload first, then the record rewrite, then the
// navigation back to the listing. Store failures are logged and the user
// stays on the form.

use std::sync::Arc;

use crate::core::{AppError, Navigator, Result, Route, Session};
use crate::modules::bills::models::BillRecord;
use crate::modules::new_bill::models::{NewBillForm, SubmitState};
use crate::modules::store::{BillsStore, CreateBillPayload, ProofFile, UpdateBillPayload};

/// Warning raised when the selected file is not an accepted image format
pub const PROOF_TYPE_WARNING: &str = "Seuls les justificatifs jpg, jpeg, png ou gif sont acceptés.";

/// Warning raised when submit fires with no validated proof pending
pub const MISSING_PROOF_WARNING: &str = "Aucun justificatif sélectionné.";

/// Employee-facing new-bill submission workflow
pub struct NewBillService {
    store: Arc<dyn BillsStore>,
    navigator: Arc<dyn Navigator>,
    session: Session,
    pending_proof: Option<ProofFile>,
    state: SubmitState,
}

impl NewBillService {
    pub fn new(
        store: Arc<dyn BillsStore>,
        navigator: Arc<dyn Navigator>,
        session: Session,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            pending_proof: None,
            state: SubmitState::default(),
        }
    }

    /// Validate a newly selected proof file.
    ///
    /// An accepted file replaces any previous candidate. A refused file
    /// clears the candidate and the returned warning is shown to the
    /// user; nothing is uploaded either way.
    pub fn select_proof(&mut self, file: ProofFile) -> Result<()> {
        if !file.has_allowed_media_type() {
            tracing::warn!(
                file_name = %file.file_name,
                media_type = %file.media_type,
                "proof refused"
            );
            self.pending_proof = None;
            return Err(AppError::validation(PROOF_TYPE_WARNING));
        }

        tracing::debug!(file_name = %file.file_name, "proof retained");
        self.pending_proof = Some(file);
        Ok(())
    }

    pub fn pending_proof(&self) -> Option<&ProofFile> {
        self.pending_proof.as_ref()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Whether the submit action should be enabled
    pub fn can_submit(&self) -> bool {
        self.state.can_begin()
    }

    /// Run the submission pipeline.
    ///
    /// Uploads the proof, completes the record through the store and only
    /// then navigates to the listing. A failed run leaves the user on the
    /// form with the error logged, not surfaced; the returned state says
    /// what happened.
    pub async fn submit(&mut self, form: &NewBillForm) -> SubmitState {
        if !self.state.can_begin() {
            tracing::debug!(state = ?self.state, "submit ignored");
            return self.state;
        }

        self.state = SubmitState::Submitting;

        match self.push_bill(form).await {
            Ok(bill) => {
                tracing::info!(bill_id = %bill.id, "bill submitted");
                self.pending_proof = None;
                self.state = SubmitState::Succeeded;
                self.navigator.navigate(Route::Bills);
            }
            Err(err) => {
                tracing::error!(store = self.store.name(), error = %err, "bill submission failed");
                self.state = SubmitState::Failed(err.kind());
            }
        }

        self.state
    }

    async fn push_bill(&self, form: &NewBillForm) -> Result<BillRecord> {
        let proof = self
            .pending_proof
            .clone()
            .ok_or_else(|| AppError::validation(MISSING_PROOF_WARNING))?;

        let receipt = self
            .store
            .create(CreateBillPayload {
                file: proof,
                email: self.session.email().to_string(),
            })
            .await?;

        let mut draft = form.build_draft(self.session.email());
        draft.attach_proof(receipt.file_url, receipt.file_name);

        let saved = self
            .store
            .update(UpdateBillPayload {
                data: draft,
                selector: receipt.key,
            })
            .await?;

        Ok(saved)
    }
}
