#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("No form field is mapped to the subscriber's email address")]
    UnmappedEmailField,
    #[error("Field `{0}` is mapped but was not submitted with the form")]
    MissingField(String),
}
