//! ExamHall: marketing site and examination hall allocation lookup.

pub mod allocation;
pub mod config;
pub mod error;
pub mod site;
pub mod telemetry;
