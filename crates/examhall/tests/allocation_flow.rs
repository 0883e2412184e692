//! Full editing → submitting → result → new search cycle through the public API.

use std::time::Duration;

use chrono::NaiveDate;

use examhall::allocation::lookup::{SEATS_PER_ROW, SEAT_ROWS};
use examhall::allocation::{
    FieldStatus, FormController, FormField, FormPhase, MockAllocationSource, ResultPresenter,
    SubmitError,
};

fn source() -> MockAllocationSource {
    MockAllocationSource::with_seed(
        NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid date"),
        17,
    )
}

fn type_into(controller: &mut FormController, field: FormField, value: &str) {
    controller.change(field, value);
    controller.blur(field);
}

#[tokio::test(start_paused = true)]
async fn student_corrects_mistakes_then_finds_hall_and_starts_over() {
    let source = source();
    let mut controller = FormController::new(Duration::from_millis(2000));

    type_into(&mut controller, FormField::AcademicSession, "2024-2025");
    assert_eq!(
        controller.field_status(FormField::AcademicSession),
        FieldStatus::Invalid("Use format: 2024/2025")
    );
    controller.change(FormField::AcademicSession, "2024/2025");
    assert_eq!(
        controller.field_status(FormField::AcademicSession),
        FieldStatus::Valid
    );

    let err = controller.submit(&source).await.expect_err("fields missing");
    assert!(matches!(err, SubmitError::Invalid(ref errors) if errors.len() == 4));
    for field in FormField::ALL {
        assert!(controller.is_touched(field));
    }

    type_into(&mut controller, FormField::Level, "200 Level");
    type_into(&mut controller, FormField::Department, "Computer Science");
    type_into(&mut controller, FormField::College, "College of Basic Science");
    type_into(&mut controller, FormField::MatricNumber, "240303010071");
    assert!(controller.errors().is_empty());

    let result = controller.submit(&source).await.expect("form valid").clone();
    assert_eq!(result.matric_number, "240303010071");
    assert_eq!(result.department, "Computer Science");
    assert_eq!(result.level, "200 Level");

    let (row, seat) = result.seat_number.split_at(1);
    assert!(SEAT_ROWS.contains(&row.chars().next().expect("row")));
    let seat: u8 = seat.parse().expect("numeric seat");
    assert!((1..=SEATS_PER_ROW).contains(&seat));

    let presenter = ResultPresenter::from_controller(&controller).expect("slip shown");
    assert_eq!(presenter.result(), &result);
    presenter.new_search(&mut controller);

    assert_eq!(controller.phase(), &FormPhase::Editing);
    assert!(controller.data().is_empty());
    assert!(controller.errors().is_empty());
    assert_eq!(controller.focused(), Some(FormField::AcademicSession));
}

#[tokio::test(start_paused = true)]
async fn result_is_not_produced_before_the_delay_elapses() {
    let source = source();
    let mut controller = FormController::new(Duration::from_secs(2));
    for (field, value) in [
        (FormField::AcademicSession, "2024/2025"),
        (FormField::Level, "300level"),
        (FormField::Department, "Physics"),
        (FormField::College, "College of Physical Sciences"),
        (FormField::MatricNumber, "230101010001"),
    ] {
        controller.change(field, value);
    }

    let pending = controller.begin_submit().expect("form valid");
    assert!(controller.is_loading());
    assert!(controller.result().is_none());

    let lookup = tokio::spawn(async move { pending.resolve(&source).await });
    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(!lookup.is_finished());

    let result = lookup.await.expect("lookup task completes");
    controller.complete(result);
    assert_eq!(
        controller.result().map(|result| result.level.as_str()),
        Some("300level")
    );
}
