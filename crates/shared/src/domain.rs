use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);
    };
}

id_newtype!(ProjectId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DataAnalytics,
    Fullstack,
    Frontend,
    Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    DataAnalytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

/// Filter key selecting the visible project subset.
///
/// `All` is not a [`Category`]; the other four tags mirror the categories one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryTag {
    #[default]
    All,
    DataAnalytics,
    Fullstack,
    Frontend,
    Backend,
}

impl CategoryTag {
    /// Tab order. Fixed, never derived from the project data.
    pub const ORDERED: [CategoryTag; 5] = [
        CategoryTag::All,
        CategoryTag::DataAnalytics,
        CategoryTag::Fullstack,
        CategoryTag::Frontend,
        CategoryTag::Backend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::DataAnalytics => "data-analytics",
            Self::Fullstack => "fullstack",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::DataAnalytics => "Data Analytics",
            Self::Fullstack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category tag `{0}`")]
pub struct UnknownCategoryTag(pub String);

impl FromStr for CategoryTag {
    type Err = UnknownCategoryTag;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ORDERED
            .into_iter()
            .find(|tag| tag.as_str() == raw)
            .ok_or_else(|| UnknownCategoryTag(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}
