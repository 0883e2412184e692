use crate::infra::{allocation_source, parse_date};
use chrono::NaiveDate;
use clap::Args;
use examhall::allocation::{FormController, FormData, FormField, ResultPresenter};
use examhall::config::AppConfig;
use examhall::error::AppError;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct LookupArgs {
    /// Academic session (e.g. 2024/2025)
    #[arg(long, default_value = "")]
    pub(crate) session: String,
    /// Level (e.g. "200 Level")
    #[arg(long, default_value = "")]
    pub(crate) level: String,
    /// Department name
    #[arg(long, default_value = "")]
    pub(crate) department: String,
    /// College name
    #[arg(long, default_value = "")]
    pub(crate) college: String,
    /// 12-digit matriculation number
    #[arg(long, default_value = "")]
    pub(crate) matric: String,
    /// Seed the allocation sampler for a reproducible slip
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Override the configured exam date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) exam_date: Option<NaiveDate>,
    /// Skip the simulated lookup delay
    #[arg(long)]
    pub(crate) no_delay: bool,
}

impl LookupArgs {
    fn form_data(&self) -> FormData {
        FormData {
            academic_session: self.session.clone(),
            level: self.level.clone(),
            department: self.department.clone(),
            college: self.college.clone(),
            matric_number: self.matric.clone(),
        }
    }
}

pub(crate) async fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?.allocation;
    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        config.lookup_delay
    };
    let exam_date = args.exam_date.unwrap_or(config.exam_date);
    let source = allocation_source(exam_date, args.seed);

    let mut controller = FormController::from_submission(args.form_data(), delay);
    let pending = match controller.begin_submit() {
        Ok(pending) => pending,
        Err(err) => {
            render_rejection(&controller);
            return Err(err.into());
        }
    };

    println!(
        "Searching for the examination hall of {}...",
        pending.request().matric_number
    );
    let result = pending.resolve(&source).await;
    let presenter = ResultPresenter::new(result.clone());
    controller.complete(result);
    print!("{}", presenter.render_text());
    Ok(())
}

fn render_rejection(controller: &FormController) {
    eprintln!("Please correct the following fields:");
    for field in FormField::ALL {
        if let Some(message) = controller.error(field) {
            eprintln!("  - {}: {message}", field.label());
        }
    }
}
