use super::common::CommonArgs;
use chrono::Local;
use clap::Args;
use contrib_calendar::Result;
use contrib_calendar::calendar::Collector;
use contrib_calendar::request::{parse_requested_date, resolve_developer_list};
use contrib_calendar::server::DataResult;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Any date in the month to fetch, as YYYY-MM-DD or `today`
    #[arg(long, value_name = "DATE", default_value = "today")]
    pub date: String,

    /// Comma-separated developers; `*` stands for the roster
    #[arg(long, value_name = "DEVS", default_value = "*")]
    pub devs: String,

    /// Ignore cached data
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Collect one month and print the same JSON body the server would return.
pub async fn fetch(args: &FetchArgs) -> Result<()> {
    let settings = args.common.init();

    let date = parse_requested_date(&args.date, Local::now().date_naive());
    let developers = resolve_developer_list(&args.devs, &settings.roster);

    let collector = Collector::from_settings(&settings)?;
    let report = collector.month_report(date, &developers, args.force).await?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &DataResult::data(report)).into_app_err("unable to write report")?;
    writeln!(stdout).into_app_err("unable to write report")?;

    Ok(())
}
