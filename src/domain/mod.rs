mod field_mapping;
mod mailing_list;
mod submitted_record;
mod subscriber_email;
mod subscriber_hash;
mod subscriber_payload;
mod sync_error;
mod sync_result;

pub use field_mapping::{parse_tags, FieldMappingConfig, MergeFieldMapping, SignupField};
pub use mailing_list::MailingList;
pub use submitted_record::SubmittedRecord;
pub use subscriber_email::SubscriberEmail;
pub use subscriber_hash::SubscriberHash;
pub use subscriber_payload::{MemberStatus, MemberUpdate, MergeFields, SubscriberPayload};
pub use sync_error::SyncError;
pub use sync_result::{SyncOutcome, SyncResult};
