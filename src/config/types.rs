//! Configuration type definitions.

use std::fmt;

/// Root configuration structure.
///
/// Built once at startup and passed by reference to the session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Homeserver base URL, e.g. `https://mtrx.mil.intl`.
    pub homeserver: String,
    /// Account to log in as (localpart or full MXID).
    pub user: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("homeserver", &self.homeserver)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
