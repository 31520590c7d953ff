use super::{FieldMappingConfig, SubmittedRecord, SubscriberEmail, SyncError};
use serde::Serialize;
use std::collections::BTreeMap;

pub type MergeFields = BTreeMap<String, String>;

const FIRST_NAME_TAG: &str = "FNAME";
const LAST_NAME_TAG: &str = "LNAME";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Subscribed,
}

/// Body of a create-member call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubscriberPayload {
    pub email_address: SubscriberEmail,
    pub status: MemberStatus,
    pub tags: Vec<String>,
    pub merge_fields: MergeFields,
}

/// Body of an update-member call. The address and status of an existing member are
/// left alone.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MemberUpdate {
    pub merge_fields: MergeFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SubscriberPayload {
    pub fn build(record: &SubmittedRecord, config: &FieldMappingConfig) -> Result<Self, SyncError> {
        let email_field = config.email_field().ok_or(SyncError::UnmappedEmailField)?;
        let email_address = SubscriberEmail::new(record.require(email_field)?);

        let mut merge_fields = MergeFields::new();
        if let Some(field) = config.first_name_field() {
            merge_fields.insert(FIRST_NAME_TAG.into(), record.require(field)?.into());
        }
        if let Some(field) = config.last_name_field() {
            merge_fields.insert(LAST_NAME_TAG.into(), record.require(field)?.into());
        }
        for mapping in &config.merge_fields {
            if let Some(value) = record.value(&mapping.field) {
                merge_fields.insert(mapping.merge_tag.clone(), value.into());
            }
        }

        Ok(Self {
            email_address,
            status: MemberStatus::Subscribed,
            tags: config.tags(),
            merge_fields,
        })
    }

    pub fn to_update(&self) -> MemberUpdate {
        MemberUpdate {
            merge_fields: self.merge_fields.clone(),
            tags: self.tags.clone(),
        }
    }
}
