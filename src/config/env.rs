//! Configuration from environment variables.
//!
//! The bot reads exactly three variables:
//! - `MATRIX_HOMESERVER` - homeserver base URL
//! - `MATRIX_USER` - account to log in as
//! - `MATRIX_PASSWORD` - account password
//!
//! Unset variables become empty strings. They are reported so the operator
//! sees why login fails, but they are not rejected here.

use std::env;

use crate::common::ConfigError;
use crate::config::types::Config;

pub const HOMESERVER_VAR: &str = "MATRIX_HOMESERVER";
pub const USER_VAR: &str = "MATRIX_USER";
pub const PASSWORD_VAR: &str = "MATRIX_PASSWORD";

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).unwrap_or_default();

        Self {
            homeserver: get(HOMESERVER_VAR),
            user: get(USER_VAR),
            password: get(PASSWORD_VAR),
        }
    }

    /// List the variables that were unset or empty.
    pub fn missing_vars(&self) -> Vec<ConfigError> {
        [
            (HOMESERVER_VAR, &self.homeserver),
            (USER_VAR, &self.user),
            (PASSWORD_VAR, &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(var, _)| ConfigError::MissingVar { var })
        .collect()
    }
}
