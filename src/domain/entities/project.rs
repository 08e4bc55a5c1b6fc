use serde::{Deserialize, Serialize};
use validator::Validate;

/// Columns of the `projects` table, in declaration order.
pub const COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "tech_stack",
    "demo_url",
    "repo_url",
    "image_url",
];

// ───── Database Models ───────────────────────────────────────────────

/// `tech_stack` is stored as a JSON array of strings.
#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub image_url: String,
}

// ───── API Models ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub tech_stack: Vec<String>,

    #[serde(default)]
    #[validate(url(message = "Demo URL must be a valid URL"))]
    pub demo_url: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Repository URL must be a valid URL"))]
    pub repo_url: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = serde_json::Error;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: row.id,
            title: row.title,
            description: row.description,
            tech_stack: serde_json::from_str(&row.tech_stack)?,
            demo_url: row.demo_url,
            repo_url: row.repo_url,
            image_url: row.image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationFailure;

    fn project() -> Project {
        Project {
            id: 1,
            title: "E-Commerce Dashboard".into(),
            description: "Store management".into(),
            tech_stack: vec!["React".into(), "TypeScript".into()],
            demo_url: Some("https://example.com/demo1".into()),
            repo_url: None,
            image_url: "https://images.unsplash.com/photo.jpg".into(),
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(project()).unwrap();

        assert_eq!(json["techStack"][1], "TypeScript");
        assert_eq!(json["demoUrl"], "https://example.com/demo1");
        assert!(json["repoUrl"].is_null());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn rejects_empty_title_and_bad_image() {
        let mut p = project();
        p.title.clear();
        p.image_url = "not a url".into();

        let errors = p.validate().unwrap_err();
        let failure = ValidationFailure::from_errors(&errors, COLUMNS);

        assert_eq!(failure.fields(), vec!["title", "imageUrl"]);
    }

    #[test]
    fn decodes_tech_stack_column() {
        let row = ProjectRow {
            id: 7,
            title: "t".into(),
            description: "d".into(),
            tech_stack: r#"["Rust","SQLite"]"#.into(),
            demo_url: None,
            repo_url: None,
            image_url: "https://example.com/i.png".into(),
        };

        let p = Project::try_from(row).unwrap();
        assert_eq!(p.tech_stack, vec!["Rust", "SQLite"]);
    }

    #[test]
    fn corrupt_tech_stack_is_an_error() {
        let row = ProjectRow {
            id: 7,
            title: "t".into(),
            description: "d".into(),
            tech_stack: "React, Node".into(),
            demo_url: None,
            repo_url: None,
            image_url: "https://example.com/i.png".into(),
        };

        assert!(Project::try_from(row).is_err());
    }
}
