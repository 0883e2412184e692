use std::sync::Mutex;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::domain::{AllocationResult, FormData};

pub const HALLS: [&str; 10] = [
    "TE 220", "TE 225", "TE 230", "TE 245", "TE 250", "TE 260", "TE 275", "TE 290", "TE 305",
    "TE 310",
];

pub const TIME_SLOTS: [&str; 4] = [
    "9:00 AM - 12:00 PM",
    "10:00 AM - 1:00 PM",
    "2:00 PM - 5:00 PM",
    "3:00 PM - 6:00 PM",
];

pub const COURSES: [&str; 6] = [
    "CSC 201", "MTH 201", "PHY 201", "CHM 201", "BIO 201", "GST 201",
];

pub const SEAT_ROWS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
pub const SEATS_PER_ROW: u8 = 30;

pub const PLACEHOLDER_STUDENT_NAME: &str = "Student Name";

/// Backing store for hall allocations.
///
/// Lookups cannot fail: the only implementation fabricates a slip from fixed
/// candidate pools. A records-backed implementation would slot in here.
pub trait AllocationSource: Send + Sync {
    fn allocate(&self, request: &FormData) -> AllocationResult;
}

/// Samples hall, time slot, course, and seat uniformly from the candidate pools.
#[derive(Debug)]
pub struct MockAllocationSource {
    rng: Mutex<StdRng>,
    exam_date: NaiveDate,
}

impl MockAllocationSource {
    pub fn new(exam_date: NaiveDate) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            exam_date,
        }
    }

    /// Reproducible source for demos and tests.
    pub fn with_seed(exam_date: NaiveDate, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            exam_date,
        }
    }
}

impl AllocationSource for MockAllocationSource {
    fn allocate(&self, request: &FormData) -> AllocationResult {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let hall = pick(&mut *rng, &HALLS);
        let time = pick(&mut *rng, &TIME_SLOTS);
        let course = pick(&mut *rng, &COURSES);
        let seat_number = seat_code(&mut *rng);

        AllocationResult {
            matric_number: request.matric_number.clone(),
            student_name: PLACEHOLDER_STUDENT_NAME.to_string(),
            department: request.department.clone(),
            level: request.level.clone(),
            hall: hall.to_string(),
            seat_number,
            date: format_exam_date(self.exam_date),
            time: time.to_string(),
            course: course.to_string(),
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Row letter followed by a seat number in `1..=SEATS_PER_ROW`, e.g. `C17`.
fn seat_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let row = SEAT_ROWS.choose(rng).copied().unwrap_or('A');
    let seat = rng.gen_range(1..=SEATS_PER_ROW);
    format!("{row}{seat}")
}

/// Long-form date as printed on allocation slips, e.g. "December 15, 2024".
pub fn format_exam_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
