use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, Transaction};

use crate::{
    entities::{
        experience::Experience,
        message::{Message, ValidatedMessage},
        project::{Project, ProjectRow},
        skill::Skill,
    },
    errors::AppError,
    fixtures,
    repositories::sqlx_repo::SqlxPortfolioRepo,
};

/// Rows written by a call to [`PortfolioRepository::seed`], per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: usize,
    pub skills: usize,
    pub experiences: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.projects == 0 && self.skills == 0 && self.experiences == 0
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Lists every project in insertion order
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;

    /// Persists a contact message, assigning its id and creation time
    async fn create_message(&self, msg: &ValidatedMessage) -> Result<Message, AppError>;

    /// Inserts fixture rows into each read-only table that is empty
    async fn seed(&self) -> Result<SeedReport, AppError>;

    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxPortfolioRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxPortfolioRepo { pool }
    }

    async fn is_empty(tx: &mut Transaction<'_, Sqlite>, table: &'static str) -> Result<bool, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&mut **tx)
            .await?;

        Ok(count == 0)
    }

    async fn seed_projects(&self) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        if !Self::is_empty(&mut tx, "projects").await? {
            return Ok(0);
        }

        for project in fixtures::PROJECTS {
            let tech_stack = serde_json::to_string(project.tech_stack)
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO projects (title, description, tech_stack, demo_url, repo_url, image_url)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(project.title)
            .bind(project.description)
            .bind(tech_stack)
            .bind(project.demo_url)
            .bind(project.repo_url)
            .bind(project.image_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(fixtures::PROJECTS.len())
    }

    async fn seed_skills(&self) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        if !Self::is_empty(&mut tx, "skills").await? {
            return Ok(0);
        }

        for skill in fixtures::SKILLS {
            sqlx::query("INSERT INTO skills (name, category) VALUES (?, ?)")
                .bind(skill.name)
                .bind(skill.category.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(fixtures::SKILLS.len())
    }

    async fn seed_experiences(&self) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        if !Self::is_empty(&mut tx, "experiences").await? {
            return Ok(0);
        }

        for experience in fixtures::EXPERIENCES {
            sqlx::query(
                r#"
                INSERT INTO experiences (role, company, duration, description)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(experience.role)
            .bind(experience.company)
            .bind(experience.duration)
            .bind(experience.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(fixtures::EXPERIENCES.len())
    }
}

#[async_trait]
impl PortfolioRepository for SqlxPortfolioRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, tech_stack, demo_url, repo_url, image_url
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let id = row.id;
                Project::try_from(row).map_err(|e| {
                    AppError::PersistenceError(format!("Corrupt tech_stack for project {id}: {e}"))
                })
            })
            .collect()
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT id, name, category FROM skills ORDER BY id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let experiences = sqlx::query_as::<_, Experience>(
            r#"SELECT id, role, company, duration, description FROM experiences ORDER BY id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(experiences)
    }

    async fn create_message(&self, msg: &ValidatedMessage) -> Result<Message, AppError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (name, email, message, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(msg.name())
        .bind(msg.email())
        .bind(msg.message())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn seed(&self) -> Result<SeedReport, AppError> {
        Ok(SeedReport {
            projects: self.seed_projects().await?,
            skills: self.seed_skills().await?,
            experiences: self.seed_experiences().await?,
        })
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        contract::ResponseSchema,
        db::sqlite::create_pool,
        entities::{
            experience::{self, Experience},
            message::{self, NewMessage},
            project::{self, Project},
            skill::{self, Skill, SkillCategory},
        },
        validation::{camel_case, ValidationFailure},
    };
    use serde::Serialize;
    use validator::Validate;

    async fn repo() -> SqlxPortfolioRepo {
        let pool = create_pool("sqlite::memory:").await.expect("in-memory pool");
        SqlxPortfolioRepo::new(pool)
    }

    async fn count(repo: &SqlxPortfolioRepo, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }

    async fn columns(repo: &SqlxPortfolioRepo, table: &str) -> Vec<String> {
        sqlx::query_scalar(&format!("SELECT name FROM pragma_table_info('{table}') ORDER BY cid"))
            .fetch_all(&repo.pool)
            .await
            .unwrap()
    }

    fn valid_message(n: usize) -> ValidatedMessage {
        NewMessage::new(format!("Visitor {n}"), format!("visitor{n}@example.com"), "Hello there, interested!")
            .into_validated()
            .unwrap()
    }

    #[actix_rt::test]
    async fn tables_match_entity_columns() {
        let repo = repo().await;

        assert_eq!(columns(&repo, "projects").await, project::COLUMNS);
        assert_eq!(columns(&repo, "skills").await, skill::COLUMNS);
        assert_eq!(columns(&repo, "experiences").await, experience::COLUMNS);
        assert_eq!(columns(&repo, "messages").await, message::COLUMNS);
    }

    /// JSON keys of `value` must be exactly the camelCased table columns.
    fn assert_fields_cover_columns<T: Serialize>(value: &T, columns: &[&str]) {
        let json = serde_json::to_value(value).unwrap();
        let keys: HashSet<String> = json.as_object().unwrap().keys().cloned().collect();
        let expected: HashSet<String> = columns.iter().map(|c| camel_case(c)).collect();

        assert_eq!(keys, expected);
    }

    fn failing_fields<T: Validate>(value: &T, columns: &[&str]) -> Vec<String> {
        let errors = value.validate().unwrap_err();
        ValidationFailure::from_errors(&errors, columns)
            .fields()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn every_project_column_is_a_validated_field() {
        let fixture = &fixtures::PROJECTS[0];
        let mut project = Project {
            id: 1,
            title: fixture.title.into(),
            description: fixture.description.into(),
            tech_stack: fixture.tech_stack.iter().map(|t| t.to_string()).collect(),
            demo_url: fixture.demo_url.map(String::from),
            repo_url: fixture.repo_url.map(String::from),
            image_url: fixture.image_url.into(),
        };
        assert_fields_cover_columns(&project, project::COLUMNS);
        assert!(project.validate().is_ok());

        project.id = 0;
        project.title.clear();
        project.description.clear();
        project.image_url.clear();
        assert_eq!(
            failing_fields(&project, project::COLUMNS),
            ["id", "title", "description", "imageUrl"]
        );
    }

    #[test]
    fn every_skill_column_is_a_validated_field() {
        let fixture = &fixtures::SKILLS[0];
        let mut skill = Skill { id: 1, name: fixture.name.into(), category: fixture.category };
        assert_fields_cover_columns(&skill, skill::COLUMNS);
        assert!(skill.validate().is_ok());

        skill.id = 0;
        skill.name.clear();
        assert_eq!(failing_fields(&skill, skill::COLUMNS), ["id", "name"]);
    }

    #[test]
    fn every_experience_column_is_a_validated_field() {
        let fixture = &fixtures::EXPERIENCES[0];
        let mut experience = Experience {
            id: 1,
            role: fixture.role.into(),
            company: fixture.company.into(),
            duration: fixture.duration.into(),
            description: fixture.description.into(),
        };
        assert_fields_cover_columns(&experience, experience::COLUMNS);
        assert!(experience.validate().is_ok());

        experience.id = 0;
        experience.role.clear();
        experience.company.clear();
        experience.duration.clear();
        experience.description.clear();
        assert_eq!(
            failing_fields(&experience, experience::COLUMNS),
            ["id", "role", "company", "duration", "description"]
        );
    }

    #[test]
    fn every_message_column_is_a_field() {
        let message = Message {
            id: 1,
            name: "Jo".into(),
            email: "jo@x.com".into(),
            message: "Hello there, interested!".into(),
            created_at: chrono::Utc::now(),
        };
        assert_fields_cover_columns(&message, message::COLUMNS);
    }

    #[test]
    fn every_message_input_column_is_validated() {
        let input_columns: Vec<&str> = message::COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "id" && *c != "created_at")
            .collect();

        assert_eq!(input_columns, message::INPUT_FIELDS);

        let failure = NewMessage::default().into_validated().unwrap_err();
        assert_eq!(failure.fields(), message::INPUT_FIELDS);
    }

    #[actix_rt::test]
    async fn seed_is_idempotent() {
        let repo = repo().await;

        let first = repo.seed().await.unwrap();
        assert_eq!(first, SeedReport {
            projects: fixtures::PROJECTS.len(),
            skills: fixtures::SKILLS.len(),
            experiences: fixtures::EXPERIENCES.len(),
        });
        let counts = (
            count(&repo, "projects").await,
            count(&repo, "skills").await,
            count(&repo, "experiences").await,
        );

        let second = repo.seed().await.unwrap();
        assert!(second.is_empty());
        assert_eq!(counts, (
            count(&repo, "projects").await,
            count(&repo, "skills").await,
            count(&repo, "experiences").await,
        ));
    }

    #[actix_rt::test]
    async fn seed_skips_only_populated_tables() {
        let repo = repo().await;
        sqlx::query("INSERT INTO skills (name, category) VALUES ('Rust', 'backend')")
            .execute(&repo.pool)
            .await
            .unwrap();

        let report = repo.seed().await.unwrap();

        assert_eq!(report.skills, 0);
        assert_eq!(report.projects, fixtures::PROJECTS.len());
        assert_eq!(count(&repo, "skills").await, 1);
    }

    #[actix_rt::test]
    async fn listed_projects_revalidate() {
        let repo = repo().await;
        repo.seed().await.unwrap();

        let projects = repo.list_projects().await.unwrap();

        assert_eq!(projects.len(), fixtures::PROJECTS.len());
        assert!(projects.check().is_ok());
        assert_eq!(projects[0].tech_stack, fixtures::PROJECTS[0].tech_stack);
        assert_eq!(projects[2].title, "AI Content Generator");
    }

    #[actix_rt::test]
    async fn skills_keep_their_category() {
        let repo = repo().await;
        repo.seed().await.unwrap();

        let skills = repo.list_skills().await.unwrap();

        for category in SkillCategory::ALL {
            let names: Vec<&str> = skills
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(names, fixtures::skill_names(category));
        }
    }

    #[actix_rt::test]
    async fn create_message_assigns_unique_ids() {
        let repo = repo().await;

        let mut ids = HashSet::new();
        for n in 0..5 {
            let stored = repo.create_message(&valid_message(n)).await.unwrap();
            assert_eq!(stored.name, format!("Visitor {n}"));
            assert!(stored.id > 0);
            assert!(ids.insert(stored.id));
        }
        assert_eq!(count(&repo, "messages").await, 5);
    }

    #[actix_rt::test]
    async fn create_message_fails_on_closed_store() {
        let repo = repo().await;
        repo.pool.close().await;

        let err = repo.create_message(&valid_message(1)).await.unwrap_err();
        assert!(matches!(err, AppError::PersistenceError(_)));
        assert!(repo.check_connection().await.is_err());
    }
}
