//! Config-backed implementation of the `SessionProvider` port.
//!
//! The token is issued by the external identity provider and stored in the
//! config file by `stackdock config set auth.token <token>`; this type only
//! reads it. There is no global session singleton — whoever needs
//! credentials takes a `SessionProvider` by injection.

use crate::application::ports::SessionProvider;
use crate::domain::config::StackdockConfig;

/// Session backed by the loaded configuration.
pub struct ConfigSession {
    token: Option<String>,
}

impl ConfigSession {
    /// Capture the credentials present in `config`.
    #[must_use]
    pub fn from_config(config: &StackdockConfig) -> Self {
        Self {
            token: config.auth.token.clone(),
        }
    }
}

impl SessionProvider for ConfigSession {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
