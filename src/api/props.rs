use serde::Serialize;
use serde_with::skip_serializing_none;

pub const APP_SLUG: &str = "paytrace";

/// Inputs the PayTrace app defines once and actions reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropName {
    StartDate,
    EndDate,
}

impl PropName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropName::StartDate => "startDate",
            PropName::EndDate => "endDate",
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropDefinition {
    #[serde(rename = "type")]
    pub prop_type: String,
    pub app: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub optional: Option<bool>,
}

impl PropDefinition {
    /// The prop that binds an action to its app.
    pub fn app(slug: &str) -> Self {
        Self {
            prop_type: "app".to_string(),
            app: Some(slug.to_string()),
            label: None,
            description: None,
            optional: None,
        }
    }

    pub fn string(label: &str, description: &str) -> Self {
        Self {
            prop_type: "string".to_string(),
            app: None,
            label: Some(label.to_string()),
            description: Some(description.to_string()),
            optional: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedProp {
    pub name: String,
    #[serde(flatten)]
    pub definition: PropDefinition,
}

impl NamedProp {
    pub fn new(name: impl Into<String>, definition: PropDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }
}

pub fn paytrace_prop_definition(prop: PropName) -> PropDefinition {
    match prop {
        PropName::StartDate => PropDefinition::string(
            "Start Date",
            "The start date of the range to export batches for.",
        ),
        PropName::EndDate => PropDefinition::string(
            "End Date",
            "The end date of the range to export batches for.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn given_named_string_prop__when_serialized__should_flatten_and_skip_empty_fields() {
        let prop = NamedProp::new(
            PropName::StartDate.as_str(),
            paytrace_prop_definition(PropName::StartDate),
        );

        let value = serde_json::to_value(&prop).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "startDate",
                "type": "string",
                "label": "Start Date",
                "description": "The start date of the range to export batches for."
            })
        );
    }

    #[test]
    fn given_app_prop__when_serialized__should_reference_app_slug() {
        let prop = NamedProp::new(APP_SLUG, PropDefinition::app(APP_SLUG));

        let value = serde_json::to_value(&prop).unwrap();

        assert_eq!(
            value,
            json!({ "name": "paytrace", "type": "app", "app": "paytrace" })
        );
    }
}
