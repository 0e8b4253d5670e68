//! Runtime configuration.

mod settings;

pub use settings::{
    DEFAULT_CACHE_TTL_MINUTES, DEFAULT_DEV_LIMIT, MIN_CACHE_TTL_MINUTES, Settings, cache_ttl_from_minutes,
};
