use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Fields collected by the allocation form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    AcademicSession,
    Level,
    Department,
    College,
    MatricNumber,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::AcademicSession,
        FormField::Level,
        FormField::Department,
        FormField::College,
        FormField::MatricNumber,
    ];

    /// Field that receives focus on mount and after a reset.
    pub const FIRST: FormField = FormField::AcademicSession;

    /// Name used for HTML inputs and JSON payloads.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::AcademicSession => "academicSession",
            Self::Level => "level",
            Self::Department => "department",
            Self::College => "college",
            Self::MatricNumber => "matricNumber",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AcademicSession => "Academic Session",
            Self::Level => "Level",
            Self::Department => "Department",
            Self::College => "College",
            Self::MatricNumber => "Matriculation Number",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::AcademicSession => "e.g., 2024/2025",
            Self::Level => "e.g., 200 Level",
            Self::Department => "e.g., Computer Science",
            Self::College => "e.g., College of Basic Science",
            Self::MatricNumber => "e.g., 240303010071",
        }
    }

    /// Input length cap mirrored onto the rendered `<input>`.
    pub const fn max_length(self) -> Option<usize> {
        match self {
            Self::MatricNumber => Some(12),
            _ => None,
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }
}

/// Raw values typed into the allocation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default)]
    pub academic_session: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub matric_number: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::AcademicSession => &self.academic_session,
            FormField::Level => &self.level,
            FormField::Department => &self.department,
            FormField::College => &self.college,
            FormField::MatricNumber => &self.matric_number,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::AcademicSession => &mut self.academic_session,
            FormField::Level => &mut self.level,
            FormField::Department => &mut self.department,
            FormField::College => &mut self.college,
            FormField::MatricNumber => &mut self.matric_number,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Per-field validation messages. A field without an entry is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    messages: BTreeMap<FormField, &'static str>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn set(&mut self, field: FormField, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.messages.insert(field, message);
            }
            None => {
                self.messages.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.messages.iter().map(|(field, message)| (*field, *message))
    }

    /// Wire-name keyed map for JSON responses.
    pub fn to_wire_map(&self) -> BTreeMap<&'static str, &'static str> {
        self.iter()
            .map(|(field, message)| (field.wire_name(), message))
            .collect()
    }
}

/// Fields blurred at least once, or all of them after a submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields(BTreeSet<FormField>);

impl TouchedFields {
    pub fn all() -> Self {
        Self(FormField::ALL.into_iter().collect())
    }

    pub fn mark(&mut self, field: FormField) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Allocation slip shown after a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub matric_number: String,
    pub student_name: String,
    pub department: String,
    pub level: String,
    pub hall: String,
    pub seat_number: String,
    pub date: String,
    pub time: String,
    pub course: String,
}
