use std::sync::LazyLock;

use regex::Regex;

use super::domain::{FormData, FormErrors, FormField};

static ACADEMIC_SESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}/[0-9]{4}$").expect("academic session pattern compiles"));
static LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9]{3}\s*level$").expect("level pattern compiles"));
static MATRIC_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("matric number pattern compiles"));

const MIN_DEPARTMENT_LEN: usize = 3;
const MIN_COLLEGE_LEN: usize = 5;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", missing_message(.0))]
    Missing(FormField),
    #[error("{}", malformed_message(.0))]
    Malformed(FormField),
}

impl FieldError {
    pub fn field(self) -> FormField {
        match self {
            Self::Missing(field) | Self::Malformed(field) => field,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Missing(field) => missing_message(&field),
            Self::Malformed(field) => malformed_message(&field),
        }
    }
}

const fn missing_message(field: &FormField) -> &'static str {
    match field {
        FormField::AcademicSession => "Academic session is required",
        FormField::Level => "Level is required",
        FormField::Department => "Department is required",
        FormField::College => "College is required",
        FormField::MatricNumber => "Matriculation number is required",
    }
}

const fn malformed_message(field: &FormField) -> &'static str {
    match field {
        FormField::AcademicSession => "Use format: 2024/2025",
        FormField::Level => "Use format: 200 Level",
        FormField::Department => "Enter a valid department name",
        FormField::College => "Enter a valid college name",
        FormField::MatricNumber => "Must be 12 digits",
    }
}

/// Check one field in isolation. Values are not trimmed.
pub fn validate_field(field: FormField, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Missing(field));
    }

    let well_formed = match field {
        FormField::AcademicSession => ACADEMIC_SESSION.is_match(value),
        FormField::Level => LEVEL.is_match(value),
        FormField::Department => input_length(value) >= MIN_DEPARTMENT_LEN,
        FormField::College => input_length(value) >= MIN_COLLEGE_LEN,
        FormField::MatricNumber => MATRIC_NUMBER.is_match(value),
    };

    if well_formed {
        Ok(())
    } else {
        Err(FieldError::Malformed(field))
    }
}

/// Length as a browser input reports it, in UTF-16 code units.
fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_form(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in FormField::ALL {
        if let Err(err) = validate_field(field, data.get(field)) {
            errors.set(err.field(), Some(err.message()));
        }
    }
    errors
}
