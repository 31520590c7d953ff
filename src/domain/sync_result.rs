#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncResult {
    Subscribed,
    NotSubscribed,
}

impl SyncResult {
    pub fn from_success(success: bool) -> Self {
        if success {
            SyncResult::Subscribed
        } else {
            SyncResult::NotSubscribed
        }
    }
}

impl SyncResult {
    /// Value recorded for the signup field in the submission.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncResult::Subscribed => "Subscribed",
            SyncResult::NotSubscribed => "Not subscribed",
        }
    }
}

impl AsRef<str> for SyncResult {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// The signup field was left empty or no list is configured; nothing was sent.
    Skipped,
    Finished(SyncResult),
}
