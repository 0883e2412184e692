use std::time::Duration;

use super::domain::{AllocationResult, FormData, FormErrors, FormField, TouchedFields};
use super::lookup::AllocationSource;
use super::validation::{validate_field, validate_form, FieldError};

/// Delay applied to every simulated lookup unless configured otherwise.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(2000);

/// Where the form currently is in its editing/lookup cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    ResultShown(AllocationResult),
}

/// Display state of one input, used to style it and decide whether to show its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Neutral,
    Invalid(&'static str),
    Valid,
}

/// Reasons a submit attempt did not start a lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FormErrors),
    #[error("a lookup is already in progress or displayed")]
    Busy,
}

/// Form state for one allocation lookup session.
#[derive(Debug, Clone)]
pub struct FormController {
    data: FormData,
    errors: FormErrors,
    touched: TouchedFields,
    phase: FormPhase,
    focused: Option<FormField>,
    delay: Duration,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_DELAY)
    }
}

impl FormController {
    pub fn new(delay: Duration) -> Self {
        Self {
            data: FormData::default(),
            errors: FormErrors::default(),
            touched: TouchedFields::default(),
            phase: FormPhase::Editing,
            focused: Some(FormField::FIRST),
            delay,
        }
    }

    /// Controller holding a complete set of values, as received from a posted form.
    pub fn from_submission(data: FormData, delay: Duration) -> Self {
        Self {
            data,
            ..Self::new(delay)
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(field)
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    pub fn result(&self) -> Option<&AllocationResult> {
        match &self.phase {
            FormPhase::ResultShown(result) => Some(result),
            _ => None,
        }
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a keystroke. Errors are only recomputed once the field has been touched.
    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value);
        self.focused = Some(field);
        if self.touched.contains(field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: FormField) {
        self.touched.mark(field);
        if self.focused == Some(field) {
            self.focused = None;
        }
        self.revalidate(field);
    }

    /// Validate every field and mark them all touched so every message is shown.
    pub fn validate_form(&mut self) -> bool {
        self.errors = validate_form(&self.data);
        self.touched = TouchedFields::all();
        self.errors.is_empty()
    }

    pub fn field_status(&self, field: FormField) -> FieldStatus {
        if !self.touched.contains(field) {
            return FieldStatus::Neutral;
        }
        match self.errors.get(field) {
            Some(message) => FieldStatus::Invalid(message),
            None if !self.data.get(field).is_empty() => FieldStatus::Valid,
            None => FieldStatus::Neutral,
        }
    }

    /// Start a submission. On success the controller is `Submitting` until
    /// [`FormController::complete`] is called with the resolved slip.
    pub fn begin_submit(&mut self) -> Result<PendingLookup, SubmitError> {
        if self.phase != FormPhase::Editing {
            return Err(SubmitError::Busy);
        }
        if !self.validate_form() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.phase = FormPhase::Submitting;
        Ok(PendingLookup {
            request: self.data.clone(),
            delay: self.delay,
        })
    }

    pub fn complete(&mut self, result: AllocationResult) {
        self.phase = FormPhase::ResultShown(result);
    }

    /// Validate, wait out the simulated delay, and show the allocated slip.
    pub async fn submit<S>(&mut self, source: &S) -> Result<&AllocationResult, SubmitError>
    where
        S: AllocationSource + ?Sized,
    {
        let pending = self.begin_submit()?;
        let result = pending.resolve(source).await;
        self.complete(result);
        self.result().ok_or(SubmitError::Busy)
    }

    /// Clear values, touched flags, and errors and return focus to the first field.
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors = FormErrors::default();
        self.touched = TouchedFields::default();
        self.phase = FormPhase::Editing;
        self.focused = Some(FormField::FIRST);
    }

    fn revalidate(&mut self, field: FormField) {
        let message = validate_field(field, self.data.get(field))
            .err()
            .map(FieldError::message);
        self.errors.set(field, message);
    }
}

/// A validated request waiting on the simulated lookup delay.
#[derive(Debug, Clone)]
pub struct PendingLookup {
    request: FormData,
    delay: Duration,
}

impl PendingLookup {
    pub fn request(&self) -> &FormData {
        &self.request
    }

    pub async fn resolve<S>(self, source: &S) -> AllocationResult
    where
        S: AllocationSource + ?Sized,
    {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        source.allocate(&self.request)
    }
}
