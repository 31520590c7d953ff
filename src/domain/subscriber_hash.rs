use super::SubscriberEmail;
use md5::{Digest, Md5};
use std::fmt::{self, Display};

/// Addresses a member resource of a list. MD5 is what the list API expects here; the
/// digest carries no security weight.
#[derive(Clone, Debug, PartialEq)]
pub struct SubscriberHash(String);

impl SubscriberHash {
    pub fn of(email: &SubscriberEmail) -> Self {
        let digest = Md5::digest(email.as_ref().to_lowercase().as_bytes());
        Self(format!("{digest:x}"))
    }
}

impl AsRef<str> for SubscriberHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SubscriberHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
