use super::SyncError;
use serde::Deserialize;
use std::collections::HashMap;

/// Field name to submitted value, as posted by the form for a single submission.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SubmittedRecord(HashMap<String, String>);

impl SubmittedRecord {
    pub fn value(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// `true` when the field was submitted with a non-empty value.
    pub fn has_value(&self, field: &str) -> bool {
        self.value(field).is_some_and(|v| !v.is_empty())
    }

    /// Looks up a field named by the admin configuration. The field may have been
    /// removed from the form since the mapping was saved, so absence is an error.
    pub fn require(&self, field: &str) -> Result<&str, SyncError> {
        self.value(field)
            .ok_or_else(|| SyncError::MissingField(field.to_string()))
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }
}

impl<K, V> FromIterator<(K, V)> for SubmittedRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
