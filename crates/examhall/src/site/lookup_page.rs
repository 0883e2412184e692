use std::fmt::Write as _;

use super::escape_html;
use super::layout::{render_document, ALLOCATION_PAGE};
use crate::allocation::{FieldStatus, FormController, FormField, ResultPresenter};

/// Disables the submit button and shows the loading label while the lookup request is in flight.
const SUBMIT_BUSY_SCRIPT: &str = "var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Searching...';";

const HELP: [(&str, &str); 3] = [
    (
        "Where do I find my matriculation number?",
        "Your 12-digit matriculation number can be found on your student ID card or admission letter.",
    ),
    (
        "What if I can't find my hall?",
        "If your hall allocation is not found, please visit the Examination Office during working hours or contact support at support@examhall.edu.",
    ),
    (
        "Can I change my allocated hall?",
        "Hall allocations are final. If you have a valid reason for a change, please submit a request to the Examination Office at least 48 hours before your exam.",
    ),
];

/// Lookup page showing the form in whatever state the controller holds.
pub fn render_lookup_form(controller: &FormController) -> String {
    render_lookup_page(&form_markup(controller))
}

/// Lookup page with the allocation slip in place of the form.
pub fn render_lookup_result(presenter: &ResultPresenter) -> String {
    render_lookup_page(&presenter.render_html())
}

fn render_lookup_page(content: &str) -> String {
    let mut help = String::new();
    for (question, answer) in HELP {
        let _ = write!(
            help,
            "<div><h4>{}</h4><p>{}</p></div>",
            escape_html(question),
            escape_html(answer)
        );
    }

    let body = format!(
        r#"<div class="container"><header class="page-header"><span class="badge">Hall Allocation</span><h1>Find Your Examination Hall</h1><p>Enter your student information below to locate your assigned examination venue. All fields are required for accurate results.</p></header>{content}<section class="glass-card help"><h3>Need Help?</h3>{help}</section></div>"#
    );
    render_document(&ALLOCATION_PAGE, &body)
}

fn form_markup(controller: &FormController) -> String {
    let mut html = format!(
        r#"<form method="post" action="/allocation" class="glass-card allocation-form" novalidate onsubmit="{SUBMIT_BUSY_SCRIPT}"><h2>Search for Your Hall</h2><p>Enter your details below to find your examination hall allocation</p>"#,
    );

    for field in FormField::ALL {
        html.push_str(&field_markup(controller, field));
    }

    let (disabled, label) = if controller.is_loading() {
        (" disabled", "Searching...")
    } else {
        ("", "Search for Hall")
    };
    let _ = write!(
        html,
        r#"<button type="submit" class="btn-hero"{disabled}>{label}</button></form>"#
    );
    html
}

fn field_markup(controller: &FormController, field: FormField) -> String {
    let name = field.wire_name();
    let status = controller.field_status(field);
    let state_class = match status {
        FieldStatus::Neutral => "",
        FieldStatus::Invalid(_) => " invalid",
        FieldStatus::Valid => " valid",
    };

    let mut attrs = String::new();
    if controller.focused() == Some(field) {
        attrs.push_str(" autofocus");
    }
    if let Some(max) = field.max_length() {
        let _ = write!(attrs, r#" maxlength="{max}""#);
    }
    if matches!(status, FieldStatus::Invalid(_)) {
        attrs.push_str(r#" aria-invalid="true""#);
    }

    let message = match status {
        FieldStatus::Invalid(message) => format!(
            r#"<p id="{name}-error" class="field-error" role="alert">{}</p>"#,
            escape_html(message)
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="field{state_class}"><label for="{name}">{label} <span class="required">*</span></label><input type="text" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}" aria-describedby="{name}-error"{attrs}>{message}</div>"#,
        label = field.label(),
        value = escape_html(controller.data().get(field)),
        placeholder = escape_html(field.placeholder()),
    )
}
