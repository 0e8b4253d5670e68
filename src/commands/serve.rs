use super::common::CommonArgs;
use clap::Args;
use contrib_calendar::Result;
use contrib_calendar::calendar::Collector;
use contrib_calendar::server::{self, AppState};
use core::net::SocketAddr;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, value_name = "ADDR", env = "BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn serve(args: &ServeArgs) -> Result<()> {
    let settings = args.common.init();

    let collector = Collector::from_settings(&settings)?;
    log::info!(
        "Serving up to {} developer(s) per request, cache TTL {} min, roster of {}",
        settings.dev_limit,
        settings.cache_ttl.as_secs() / 60,
        settings.roster.len()
    );

    let state = AppState {
        collector,
        roster: settings.roster,
    };

    server::serve(state, args.bind).await
}
