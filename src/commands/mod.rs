mod common;
mod fetch;
mod serve;

pub use fetch::{FetchArgs, fetch};
pub use serve::{ServeArgs, serve};
