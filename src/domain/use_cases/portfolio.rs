use tracing::{debug, error, info};

use crate::{
    entities::{
        experience::Experience,
        message::{Message, NewMessage},
        project::Project,
        skill::Skill,
    },
    errors::AppError,
    repositories::portfolio::{PortfolioRepository, SeedReport},
};

pub struct PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub repo: R,
}

impl<R> PortfolioHandler<R>
where
    R: PortfolioRepository,
{
    pub fn new(repo: R) -> Self {
        PortfolioHandler { repo }
    }

    pub async fn projects(&self) -> Result<Vec<Project>, AppError> {
        self.repo.list_projects().await.inspect_err(|e| error!("Failed to list projects: {}", e))
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, AppError> {
        self.repo.list_skills().await.inspect_err(|e| error!("Failed to list skills: {}", e))
    }

    pub async fn experiences(&self) -> Result<Vec<Experience>, AppError> {
        self.repo.list_experiences().await.inspect_err(|e| error!("Failed to list experiences: {}", e))
    }

    /// Validates a contact form submission and stores it.
    ///
    /// The server re-runs the same rules the client applies before sending,
    /// so a request that bypasses the client is still rejected.
    pub async fn send_message(&self, request: NewMessage) -> Result<Message, AppError> {
        let validated = request.into_validated().map_err(|failure| {
            debug!(fields = ?failure.fields(), "Rejected contact message");
            AppError::from(failure)
        })?;

        let message = self
            .repo
            .create_message(&validated)
            .await
            .inspect_err(|e| error!("Failed to store contact message: {}", e))?;

        info!(id = message.id, "Stored contact message");
        Ok(message)
    }

    /// Fills empty read-only tables with the fixture rows.
    pub async fn seed(&self) -> Result<SeedReport, AppError> {
        let report = self.repo.seed().await?;

        if report.is_empty() {
            info!("Seed skipped: all tables already populated");
        } else {
            info!(
                projects = report.projects,
                skills = report.skills,
                experiences = report.experiences,
                "Seeded fixture rows"
            );
        }
        Ok(report)
    }
}
