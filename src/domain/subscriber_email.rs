use serde::Serialize;
use std::fmt::{self, Display};

/// Address a submission asks to subscribe, as entered. The list API owns the
/// format rules and rejects addresses it does not accept.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn new(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
