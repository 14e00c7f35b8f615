use std::sync::Arc;

use crate::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::language::application::ports::outgoing::{LanguageRepository, LanguageRepositoryError};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::site::application::default_content;
use crate::site::application::ports::outgoing::{SeedMarkerError, SeedMarkerStore};
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

// ============================================================================
// Seed Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SeedContentError {
    #[error("Seeding skills failed: {0}")]
    Skills(#[from] SkillRepositoryError),

    #[error("Seeding languages failed: {0}")]
    Languages(#[from] LanguageRepositoryError),

    #[error("Seeding experiences failed: {0}")]
    Experiences(#[from] ExperienceRepositoryError),

    #[error("Seeding projects failed: {0}")]
    Projects(#[from] ProjectRepositoryError),

    #[error("Seeding about me failed: {0}")]
    About(#[from] AboutRepositoryError),

    #[error("Seed marker unavailable: {0}")]
    Marker(#[from] SeedMarkerError),
}

/// Marker recorded once the starter content has been written.
pub const DEFAULT_CONTENT_SEED: &str = "default_content";

/// Which collections were empty and received the starter content.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub skills: bool,
    pub languages: bool,
    pub experiences: bool,
    pub projects: bool,
    pub about: bool,
}

// ============================================================================
// Content Seeder
// ============================================================================

#[derive(Clone)]
pub struct ContentSeeder {
    skills: Arc<dyn SkillRepository + Send + Sync>,
    languages: Arc<dyn LanguageRepository + Send + Sync>,
    experiences: Arc<dyn ExperienceRepository + Send + Sync>,
    projects: Arc<dyn ProjectRepository + Send + Sync>,
    about: Arc<dyn AboutRepository + Send + Sync>,
    markers: Arc<dyn SeedMarkerStore + Send + Sync>,
}

impl ContentSeeder {
    pub fn new(
        skills: Arc<dyn SkillRepository + Send + Sync>,
        languages: Arc<dyn LanguageRepository + Send + Sync>,
        experiences: Arc<dyn ExperienceRepository + Send + Sync>,
        projects: Arc<dyn ProjectRepository + Send + Sync>,
        about: Arc<dyn AboutRepository + Send + Sync>,
        markers: Arc<dyn SeedMarkerStore + Send + Sync>,
    ) -> Self {
        Self {
            skills,
            languages,
            experiences,
            projects,
            about,
            markers,
        }
    }

    /// Writes the starter content on the very first start only. Once the
    /// marker is recorded nothing is seeded again, even into collections
    /// the admin has emptied. On that first run, collections that already
    /// hold rows are left alone.
    pub async fn seed_once(&self) -> Result<SeedReport, SeedContentError> {
        if self.markers.is_applied(DEFAULT_CONTENT_SEED).await? {
            return Ok(SeedReport::default());
        }

        let report = self.seed_empty_collections().await?;
        self.markers.mark_applied(DEFAULT_CONTENT_SEED).await?;
        Ok(report)
    }

    async fn seed_empty_collections(&self) -> Result<SeedReport, SeedContentError> {
        let mut report = SeedReport::default();

        if self.skills.list_categories().await?.is_empty() {
            for category in default_content::skills() {
                self.skills
                    .extend_category(&category.name, category.skills)
                    .await?;
            }
            report.skills = true;
        }

        if self.languages.list().await?.is_empty() {
            for name in default_content::languages() {
                self.languages.add(name).await?;
            }
            report.languages = true;
        }

        if self.experiences.list().await?.is_empty() {
            for experience in default_content::experiences() {
                self.experiences.upsert(experience).await?;
            }
            report.experiences = true;
        }

        if self.projects.list().await?.is_empty() {
            for project in default_content::projects() {
                self.projects.upsert(project).await?;
            }
            report.projects = true;
        }

        if self.about.get().await?.is_none() {
            self.about.save(default_content::about_me()).await?;
            report.about = true;
        }

        Ok(report)
    }
}
