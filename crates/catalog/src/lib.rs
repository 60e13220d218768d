use std::collections::HashSet;

use shared::{
    domain::{Category, CategoryTag, ProjectId, ProjectStatus, Subcategory},
    protocol::{CategorySummary, ProjectCard},
};
use thiserror::Error;

pub mod profile;
mod projects;

pub use projects::showcase;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const EMPTY_STATE_MESSAGE: &str = "No projects found for the selected category.";
/// Number of features shown on a summary card.
pub const SUMMARY_FEATURE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: Option<String>,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: String,
    pub status: ProjectStatus,
}

impl Project {
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn key_features(&self) -> &[String] {
        let end = self.features.len().min(SUMMARY_FEATURE_COUNT);
        &self.features[..end]
    }

    pub fn card(&self) -> ProjectCard {
        ProjectCard {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image_or_placeholder().to_string(),
            category: self.category,
            status: self.status,
            status_label: self.status.label().to_string(),
            technologies: self.technologies.clone(),
            key_features: self.key_features().to_vec(),
            live_url: self.live_url.clone(),
            github_url: self.github_url.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
}

pub fn list_categories() -> Vec<CategorySummary> {
    CategoryTag::ORDERED
        .into_iter()
        .map(|id| CategorySummary {
            id,
            label: id.label().to_string(),
        })
        .collect()
}

/// Whether `project` belongs to the tab `selected`.
///
/// `DataAnalytics` matches on `subcategory`, every other real tag on `category`.
pub fn matches(selected: CategoryTag, project: &Project) -> bool {
    match selected {
        CategoryTag::All => true,
        CategoryTag::DataAnalytics => project.subcategory == Some(Subcategory::DataAnalytics),
        CategoryTag::Fullstack => project.category == Category::Fullstack,
        CategoryTag::Frontend => project.category == Category::Frontend,
        CategoryTag::Backend => project.category == Category::Backend,
    }
}

/// Ordered subsequence of `projects` visible under `selected`.
pub fn filter(selected: CategoryTag, projects: &[Project]) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| matches(selected, project))
        .collect()
}

/// Result of applying one tag to a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub selected: CategoryTag,
    pub projects: Vec<&'a Project>,
}

impl CatalogView<'_> {
    /// True when the page must show [`EMPTY_STATE_MESSAGE`] instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.projects.iter().map(|project| project.card()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateProjectId(project.id.0));
            }
        }
        Ok(Self { projects })
    }

    pub fn showcase() -> Result<Self, CatalogError> {
        Self::new(showcase())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn view(&self, tag: CategoryTag) -> CatalogView<'_> {
        CatalogView {
            selected: tag,
            projects: filter(tag, &self.projects),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
