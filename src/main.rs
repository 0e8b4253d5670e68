//! A small service reporting a team's GitHub contributions, day by day, for one month.
//!
//! # Overview
//!
//! GitHub does not expose the contribution calendar through its API, so `contrib-calendar`
//! scrapes the calendar page each developer's profile renders. Months are cached in memory
//! for a short time so that dashboards polling the service do not hammer GitHub.
//!
//! # Usage
//!
//! **Run the HTTP service:**
//! ```bash
//! DEVS=alice,bob contrib-calendar serve --bind 0.0.0.0:8000
//! ```
//!
//! **Query it:**
//! ```bash
//! curl 'http://localhost:8000/2024-03-01?devs=alice,bob'
//! curl 'http://localhost:8000/today?devs=*&force=true'
//! ```
//!
//! **One-off fetch to stdout:**
//! ```bash
//! contrib-calendar fetch --date 2024-03-01 --devs alice,bob
//! ```
//!
//! # Response
//!
//! ```json
//! {
//!   "data": {
//!     "date": "2024-03-01",
//!     "contribs": {
//!       "alice": { "1": [3, 2], "2": [0, 0] }
//!     }
//!   },
//!   "message": "OK"
//! }
//! ```
//!
//! Each day maps to `[count, level]`, where `level` is GitHub's 0-4 shading bucket. If any
//! developer cannot be fetched the whole request fails: `data` is `null` and `message`
//! says why.
//!
//! # Configuration
//!
//! | Flag                | Environment         | Default              |
//! |---------------------|---------------------|----------------------|
//! | `--devs-roster`     | `DEVS`              | empty                |
//! | `--dev-limit`       | `DEV_LIMIT`         | 10                   |
//! | `--cache-ttl`       | `CACHE_TTL_MINUTES` | 60 (minimum 1)       |
//! | `--request-timeout` | `REQUEST_TIMEOUT`   | 10 seconds           |
//! | `--base-url`        | `GITHUB_BASE_URL`   | `https://github.com` |
//! | `--bind`            | `BIND`              | `127.0.0.1:8000`     |

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use contrib_calendar::Result;

mod commands;

use crate::commands::{FetchArgs, ServeArgs, fetch, serve};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "contrib-calendar", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve(Box<ServeArgs>),
    /// Fetch one month for a list of developers and print it as JSON
    Fetch(Box<FetchArgs>),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Serve(serve_args) => serve(serve_args).await,
        Command::Fetch(fetch_args) => fetch(fetch_args).await,
    }
}
