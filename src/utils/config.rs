/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error};

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    parse_or_default(env_var, env::var(env_var).ok(), default)
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// Empty values are treated as unset.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().ok(),
        _ => None,
    }
}

/// Parses a raw value, logging and falling back to `default` when it is invalid
///
/// Split out of [`get_env_or_default`] so the parsing rules can be tested
/// without touching the process environment.
pub fn parse_or_default<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match raw {
        Some(val) if !val.trim().is_empty() => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", name, val);
            default
        }),
        _ => default,
    }
}

/// Loads a `.env` file from the working directory or its parents
///
/// Must run before [`crate::utils::logger::setup_logger`] so `LOGLEVEL` and
/// `RUST_LOG` from the file are honoured. Variables already present in the
/// process environment are left untouched.
///
/// # Returns
/// `true` when a file was found and loaded
pub fn load_dotenv() -> bool {
    match dotenv::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) => {
            debug!("Failed to load .env file: {e}");
            false
        }
    }
}

/// Loads environment variables from a specific file
///
/// # Returns
/// `true` when the file exists and could be parsed
pub fn load_dotenv_from(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match dotenv::from_path(path) {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to load {}: {e}", path.display());
            false
        }
    }
}
