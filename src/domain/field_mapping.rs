use serde::Deserialize;

/// How a signup field turns a submission into a list member.
///
/// Field names refer to other fields on the same form. They are only checked when a
/// submission is evaluated, since the form can change after the mapping was saved.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FieldMappingConfig {
    pub list_id: Option<String>,
    pub tags_to_assign: Option<String>,
    pub email_field: Option<String>,
    pub first_name_field: Option<String>,
    pub last_name_field: Option<String>,
    #[serde(default)]
    pub update_contact: bool,
    #[serde(default)]
    pub merge_fields: Vec<MergeFieldMapping>,
}

impl FieldMappingConfig {
    pub fn list_id(&self) -> Option<&str> {
        non_blank(&self.list_id)
    }

    pub fn email_field(&self) -> Option<&str> {
        non_blank(&self.email_field)
    }

    pub fn first_name_field(&self) -> Option<&str> {
        non_blank(&self.first_name_field)
    }

    pub fn last_name_field(&self) -> Option<&str> {
        non_blank(&self.last_name_field)
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags_to_assign
            .as_deref()
            .map(parse_tags)
            .unwrap_or_default()
    }
}

/// Copies the value of form field `field` into the member's `merge_tag` merge field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MergeFieldMapping {
    pub field: String,
    pub merge_tag: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SignupField {
    /// Name of the signup field itself on the form.
    pub name: String,
    #[serde(default)]
    pub mapping: FieldMappingConfig,
}

pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
