//! Examination hall allocation lookup.
//!
//! The form controller owns field values, touched tracking, and validation, and
//! drives the simulated lookup against an [`AllocationSource`]. The presenter
//! renders the resulting slip and resets the controller for a new search.

pub mod controller;
pub mod domain;
pub mod lookup;
pub mod presenter;
pub mod router;
pub mod service;
pub mod validation;

pub use controller::{
    FieldStatus, FormController, FormPhase, PendingLookup, SubmitError, DEFAULT_LOOKUP_DELAY,
};
pub use domain::{AllocationResult, FormData, FormErrors, FormField, TouchedFields};
pub use lookup::{format_exam_date, AllocationSource, MockAllocationSource};
pub use presenter::{ResultCardView, ResultPresenter, ResultRow};
pub use router::{allocation_router, FieldCheckRequest, FieldCheckResponse};
pub use service::AllocationDesk;
pub use validation::{validate_field, validate_form, FieldError};
