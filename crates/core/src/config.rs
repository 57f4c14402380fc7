//! Start-up configuration shared by the front ends
//!
//! Settings come from the command line first, then the environment,
//! then built-in defaults.

use crate::error::ListResult;
use crate::models::Filter;

/// Environment variable holding the initial filter
pub const TBX_FILTER_ENV: &str = "TBX_FILTER";

/// Resolve the filter a new session starts with.
///
/// Priority:
/// 1. Command line `--filter` argument
/// 2. `TBX_FILTER` environment variable (if non-empty)
/// 3. `Filter::All`
///
/// # Errors
///
/// Returns `ListError::UnknownFilter` if the environment variable holds an
/// unknown filter name.
pub fn resolve_filter(cli_filter: Option<Filter>) -> ListResult<Filter> {
    if let Some(filter) = cli_filter {
        return Ok(filter);
    }

    if let Ok(env_filter) = std::env::var(TBX_FILTER_ENV)
        && !env_filter.trim().is_empty()
    {
        return env_filter.parse();
    }

    Ok(Filter::default())
}
