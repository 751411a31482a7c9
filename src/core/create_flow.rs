use crate::core::draft::ItineraryDraft;
use crate::domain::model::Itinerary;
use crate::domain::ports::ItineraryService;
use crate::utils::error::{PlannerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Submitting,
    Submitted { itinerary_id: i64 },
}

/// Controller of the create page: owns one draft and its submission state.
///
/// `submit` borrows the flow mutably for the whole request, so a second
/// submission cannot start while one is in flight.
#[derive(Debug)]
pub struct CreateFlow {
    draft: Option<ItineraryDraft>,
    state: FlowState,
    last_error: Option<String>,
}

impl Default for CreateFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateFlow {
    pub fn new() -> Self {
        Self::with_draft(ItineraryDraft::new())
    }

    pub fn with_draft(draft: ItineraryDraft) -> Self {
        Self {
            draft: Some(draft),
            state: FlowState::Editing,
            last_error: None,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// `None` once the itinerary has been submitted.
    pub fn draft(&self) -> Option<&ItineraryDraft> {
        self.draft.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn ensure_editing(&self) -> Result<()> {
        if self.state != FlowState::Editing {
            return Err(PlannerError::InvalidState {
                message: format!("draft cannot be changed in state {:?}", self.state),
            });
        }
        Ok(())
    }

    /// Apply one draft operation, e.g. `flow.edit(|d| d.add_day())`.
    pub fn edit<F>(&mut self, op: F) -> Result<()>
    where
        F: FnOnce(ItineraryDraft) -> ItineraryDraft,
    {
        self.ensure_editing()?;
        if let Some(draft) = self.draft.take() {
            self.draft = Some(op(draft));
        }
        Ok(())
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<Itinerary>
    where
        S: ItineraryService + ?Sized,
    {
        self.ensure_editing()?;
        let draft = self.draft.as_ref().ok_or_else(|| PlannerError::InvalidState {
            message: "no draft to submit".to_string(),
        })?;

        // 驗證失敗時不發出任何請求，留在編輯狀態
        let request = match draft.to_create_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("⚠️ Draft rejected before submission: {}", e);
                self.last_error = Some(e.user_friendly_message());
                return Err(e);
            }
        };

        let mut in_flight = InFlight::enter(self);
        tracing::info!(
            "📤 Submitting itinerary '{}' with {} day(s)",
            request.name,
            request.days.len()
        );

        match service.create(&request).await {
            Ok(itinerary) => {
                tracing::info!("✅ Itinerary created with id {}", itinerary.id);
                let flow = &mut *in_flight.flow;
                flow.state = FlowState::Submitted {
                    itinerary_id: itinerary.id,
                };
                flow.draft = None;
                flow.last_error = None;
                Ok(itinerary)
            }
            Err(e) => {
                tracing::error!("❌ Itinerary submission failed: {}", e);
                let flow = &mut *in_flight.flow;
                flow.state = FlowState::Editing;
                flow.last_error = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }
}

/// Holds the flow in `Submitting` while a create request is pending.
/// If the submit future is dropped before the service answers, the flow
/// goes back to `Editing` with its draft intact.
struct InFlight<'a> {
    flow: &'a mut CreateFlow,
}

impl<'a> InFlight<'a> {
    fn enter(flow: &'a mut CreateFlow) -> Self {
        flow.state = FlowState::Submitting;
        Self { flow }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.flow.state == FlowState::Submitting {
            tracing::warn!("⚠️ Itinerary submission cancelled before completion");
            self.flow.state = FlowState::Editing;
            self.flow.last_error = Some("Submission was cancelled".to_string());
        }
    }
}
