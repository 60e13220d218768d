use super::*;

fn project(id: u32, category: Category, subcategory: Option<Subcategory>) -> Project {
    Project {
        id: ProjectId(id),
        title: format!("project {id}"),
        description: "desc".into(),
        long_description: "long desc".into(),
        image: None,
        category,
        subcategory,
        technologies: vec!["Rust".into(), "Rust".into()],
        features: vec!["one".into(), "two".into(), "three".into(), "four".into()],
        live_url: None,
        github_url: format!("https://github.com/example/{id}"),
        status: ProjectStatus::Completed,
    }
}

fn ids(projects: &[&Project]) -> Vec<u32> {
    projects.iter().map(|p| p.id.0).collect()
}

#[test]
fn categories_are_listed_in_tab_order() {
    let categories = list_categories();
    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        ["all", "data-analytics", "fullstack", "frontend", "backend"]
    );
    assert_eq!(categories[0].label, "All Projects");
    assert_eq!(categories[2].label, "Full Stack");
}

#[test]
fn all_returns_every_project_in_order() {
    let projects = showcase();
    let visible = filter(CategoryTag::All, &projects);
    let expected: Vec<&Project> = projects.iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn every_tag_matches_a_naive_pass() {
    let projects = showcase();
    for tag in CategoryTag::ORDERED {
        let mut naive = Vec::new();
        for project in &projects {
            let keep = match tag {
                CategoryTag::All => true,
                CategoryTag::DataAnalytics => {
                    project.subcategory == Some(Subcategory::DataAnalytics)
                }
                CategoryTag::Fullstack => project.category == Category::Fullstack,
                CategoryTag::Frontend => project.category == Category::Frontend,
                CategoryTag::Backend => project.category == Category::Backend,
            };
            if keep {
                naive.push(project);
            }
        }
        assert_eq!(filter(tag, &projects), naive, "tag {tag}");
    }
}

#[test]
fn showcase_tabs_select_expected_projects() {
    let projects = showcase();
    assert_eq!(ids(&filter(CategoryTag::DataAnalytics, &projects)), [1, 2]);
    assert_eq!(ids(&filter(CategoryTag::Fullstack, &projects)), [3, 8]);
    assert_eq!(ids(&filter(CategoryTag::Frontend, &projects)), [4, 5, 7]);
    assert_eq!(ids(&filter(CategoryTag::Backend, &projects)), [6]);
}

#[test]
fn data_analytics_tab_follows_subcategory_not_category() {
    let projects = vec![
        project(1, Category::DataAnalytics, None),
        project(2, Category::Frontend, Some(Subcategory::DataAnalytics)),
        project(3, Category::DataAnalytics, Some(Subcategory::DataAnalytics)),
    ];

    let by_subcategory = ids(&filter(CategoryTag::DataAnalytics, &projects));
    let by_category: Vec<u32> = projects
        .iter()
        .filter(|p| p.category == Category::DataAnalytics)
        .map(|p| p.id.0)
        .collect();

    assert_eq!(by_subcategory, [2, 3]);
    assert_ne!(by_subcategory, by_category);
    assert_eq!(ids(&filter(CategoryTag::Frontend, &projects)), [2]);
}

#[test]
fn missing_category_yields_empty_view() {
    let catalog = ProjectCatalog::new(vec![
        project(1, Category::Frontend, None),
        project(2, Category::Fullstack, None),
    ])
    .expect("catalog");

    let view = catalog.view(CategoryTag::Backend);
    assert!(view.is_empty());
    assert!(view.cards().is_empty());
    assert!(!catalog.view(CategoryTag::All).is_empty());
}

#[test]
fn default_view_shows_every_project() {
    let catalog = ProjectCatalog::showcase().expect("catalog");
    let view = catalog.view(CategoryTag::default());
    assert_eq!(view.selected, CategoryTag::All);
    assert_eq!(view.projects.len(), catalog.projects().len());

    let view = catalog.view(CategoryTag::Backend);
    assert_eq!(view.selected, CategoryTag::Backend);
    assert_eq!(ids(&view.projects), [6]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = ProjectCatalog::new(vec![
        project(4, Category::Frontend, None),
        project(4, Category::Backend, None),
    ])
    .expect_err("should fail");
    assert_eq!(err, CatalogError::DuplicateProjectId(4));
}

#[test]
fn showcase_ids_are_unique_and_positive() {
    let catalog = ProjectCatalog::showcase().expect("catalog");
    assert!(catalog.projects().iter().all(|p| p.id.0 > 0));
}

#[test]
fn card_trims_features_and_falls_back_to_placeholder() {
    let card = project(9, Category::Backend, None).card();
    assert_eq!(card.image, PLACEHOLDER_IMAGE);
    assert_eq!(card.key_features, ["one", "two", "three"]);
    assert_eq!(card.technologies, ["Rust", "Rust"]);
    assert_eq!(card.status_label, "Completed");
    assert!(card.live_url.is_none());
}

#[test]
fn card_keeps_short_feature_lists_and_explicit_images() {
    let mut short = project(10, Category::Frontend, None);
    short.features.truncate(1);
    short.image = Some("/shots/ten.png".into());
    short.status = ProjectStatus::InProgress;

    let card = short.card();
    assert_eq!(card.key_features, ["one"]);
    assert_eq!(card.image, "/shots/ten.png");
    assert_eq!(card.status_label, "In Progress");
}

#[test]
fn card_serializes_with_kebab_case_enums() {
    let projects = showcase();
    let value = serde_json::to_value(projects[7].card()).expect("json");
    assert_eq!(value["status"], "in-progress");
    assert_eq!(value["category"], "fullstack");
    assert!(value["live_url"].is_null());
}
