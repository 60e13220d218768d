use serde::{Deserialize, Serialize};

use crate::domain::{Category, CategoryTag, ProjectId, ProjectStatus, SubmissionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryTag,
    pub label: String,
}

/// Summary view of one project as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub status: ProjectStatus,
    pub status_label: String,
    pub technologies: Vec<String>,
    pub key_features: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: String,
}

/// The four named inputs of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.title.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.title.is_empty()
            && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: SubmissionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_every_field() {
        let mut fields = ContactFields::new("Ada", "ada@example.com", "Hello", "Hi there");
        assert!(!fields.is_empty());
        fields.clear();
        assert!(fields.is_empty());
        assert_eq!(fields, ContactFields::default());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let fields: ContactFields =
            serde_json::from_str(r#"{"name":"Ada","message":"hi"}"#).expect("json");
        assert_eq!(fields.name, "Ada");
        assert!(fields.email.is_empty());
        assert!(fields.title.is_empty());
    }
}
