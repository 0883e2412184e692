use std::fmt::Write as _;

use serde::Serialize;

use super::controller::FormController;
use super::domain::AllocationResult;
use crate::site::escape_html;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

/// Label/value rows of an allocation slip, independent of output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCardView {
    pub heading: &'static str,
    pub hall: String,
    pub seat_number: String,
    pub rows: Vec<ResultRow>,
    pub notice: &'static str,
}

const HEADING: &str = "Hall Allocation Found";
const NOTICE: &str =
    "Arrive at least 30 minutes before your exam with your student ID card and this slip.";

/// Renders one allocation slip and hands control back to the form on "new search".
#[derive(Debug, Clone)]
pub struct ResultPresenter {
    result: AllocationResult,
}

impl ResultPresenter {
    pub fn new(result: AllocationResult) -> Self {
        Self { result }
    }

    /// Presenter for the slip the controller is currently showing, if any.
    pub fn from_controller(controller: &FormController) -> Option<Self> {
        controller.result().cloned().map(Self::new)
    }

    pub fn result(&self) -> &AllocationResult {
        &self.result
    }

    pub fn view(&self) -> ResultCardView {
        let result = &self.result;
        let rows = vec![
            row("Student Name", &result.student_name),
            row("Matriculation Number", &result.matric_number),
            row("Department", &result.department),
            row("Level", &result.level),
            row("Course", &result.course),
            row("Examination Hall", &result.hall),
            row("Seat Number", &result.seat_number),
            row("Date", &result.date),
            row("Time", &result.time),
        ];

        ResultCardView {
            heading: HEADING,
            hall: result.hall.clone(),
            seat_number: result.seat_number.clone(),
            rows,
            notice: NOTICE,
        }
    }

    pub fn render_html(&self) -> String {
        let view = self.view();
        let mut html = String::new();
        html.push_str(r#"<section class="result-card" aria-live="polite">"#);
        let _ = write!(
            html,
            r#"<header><h2>{}</h2><p class="result-hall">{} &middot; Seat {}</p></header><dl>"#,
            view.heading,
            escape_html(&view.hall),
            escape_html(&view.seat_number),
        );
        for ResultRow { label, value } in &view.rows {
            let _ = write!(html, "<dt>{label}</dt><dd>{}</dd>", escape_html(value));
        }
        let _ = write!(
            html,
            r#"</dl><p class="result-notice">{}</p><div class="result-actions"><button type="button" class="btn-print" onclick="window.print()">Print Slip</button><form method="get" action="/allocation"><button type="submit" class="btn-hero">New Search</button></form></div></section>"#,
            view.notice,
        );
        html
    }

    pub fn render_text(&self) -> String {
        let view = self.view();
        let width = view
            .rows
            .iter()
            .map(|row| row.label.len())
            .max()
            .unwrap_or(0);

        let mut text = format!("{}\n", view.heading);
        for ResultRow { label, value } in &view.rows {
            let _ = writeln!(text, "  {label:<width$}  {value}");
        }
        let _ = writeln!(text, "\n{}", view.notice);
        text
    }

    /// Discard the slip and return the form to a clean editing state.
    pub fn new_search(self, controller: &mut FormController) {
        controller.reset();
    }
}

fn row(label: &'static str, value: &str) -> ResultRow {
    ResultRow {
        label,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::controller::FormPhase;
    use crate::allocation::domain::FormField;

    fn result() -> AllocationResult {
        AllocationResult {
            matric_number: "240303010071".to_string(),
            student_name: "Student Name".to_string(),
            department: "Computer <Science>".to_string(),
            level: "200 Level".to_string(),
            hall: "TE 245".to_string(),
            seat_number: "C17".to_string(),
            date: "December 15, 2024".to_string(),
            time: "9:00 AM - 12:00 PM".to_string(),
            course: "CSC 201".to_string(),
        }
    }

    #[test]
    fn view_lists_every_slip_field() {
        let view = ResultPresenter::new(result()).view();
        assert_eq!(view.rows.len(), 9);
        assert_eq!(view.hall, "TE 245");
        assert!(view
            .rows
            .iter()
            .any(|row| row.label == "Seat Number" && row.value == "C17"));
    }

    #[test]
    fn html_escapes_echoed_values_and_offers_new_search() {
        let html = ResultPresenter::new(result()).render_html();
        assert!(html.contains("Computer &lt;Science&gt;"));
        assert!(!html.contains("<Science>"));
        assert!(html.contains(r#"action="/allocation""#));
        assert!(html.contains("New Search"));
    }

    #[test]
    fn text_slip_aligns_labels() {
        let text = ResultPresenter::new(result()).render_text();
        assert!(text.starts_with("Hall Allocation Found\n"));
        assert!(text.contains("  Examination Hall      TE 245\n"));
    }

    #[test]
    fn new_search_resets_the_controller() {
        let mut controller = FormController::default();
        controller.change(FormField::MatricNumber, "240303010071");
        controller.blur(FormField::MatricNumber);
        controller.complete(result());

        let presenter = ResultPresenter::from_controller(&controller).expect("slip shown");
        presenter.new_search(&mut controller);

        assert_eq!(controller.phase(), &FormPhase::Editing);
        assert!(controller.data().is_empty());
        assert!(controller.touched().is_empty());
    }

    #[test]
    fn no_presenter_without_a_result() {
        assert!(ResultPresenter::from_controller(&FormController::default()).is_none());
    }
}
