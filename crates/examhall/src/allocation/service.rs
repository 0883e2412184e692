use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::controller::{FormController, SubmitError};
use super::domain::{AllocationResult, FormData, FormField};
use super::lookup::AllocationSource;
use super::validation::validate_field;

/// Request-scoped front for the allocation form: one controller per lookup.
pub struct AllocationDesk<S: ?Sized> {
    source: Arc<S>,
    delay: Duration,
}

impl<S> AllocationDesk<S>
where
    S: AllocationSource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>, delay: Duration) -> Self {
        Self { source, delay }
    }

    /// Fresh controller for rendering an empty form.
    pub fn blank_form(&self) -> FormController {
        FormController::new(self.delay)
    }

    /// Run a full submission and return the controller in its final state.
    pub async fn submit(&self, data: FormData) -> FormController {
        let mut controller = FormController::from_submission(data, self.delay);
        match controller.submit(self.source.as_ref()).await {
            Ok(result) => {
                info!(hall = %result.hall, seat = %result.seat_number, "hall allocation served");
            }
            Err(SubmitError::Invalid(errors)) => {
                debug!(failed_fields = errors.len(), "allocation lookup rejected");
            }
            Err(SubmitError::Busy) => {}
        }
        controller
    }

    pub async fn lookup(&self, data: FormData) -> Result<AllocationResult, SubmitError> {
        let controller = self.submit(data).await;
        match controller.result() {
            Some(result) => Ok(result.clone()),
            None => Err(SubmitError::Invalid(controller.errors().clone())),
        }
    }

    /// Blur-time check for a single field.
    pub fn check_field(&self, field: FormField, value: &str) -> Option<&'static str> {
        validate_field(field, value).err().map(|err| err.message())
    }
}

impl<S: ?Sized> Clone for AllocationDesk<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            delay: self.delay,
        }
    }
}
