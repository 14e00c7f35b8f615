//! In-memory adapters for the outgoing ports. Each fake is `Clone` and
//! shares its state, so a test keeps one handle for assertions and gives
//! another to the service under test.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::about::application::domain::entities::AboutMe;
use crate::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};
use crate::auth::application::domain::entities::{AdminSession, UserId};
use crate::auth::application::ports::outgoing::{
    HashError, NewUser, PasswordHasher, SessionStore, SessionStoreError, UserQuery,
    UserQueryError, UserQueryResult, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::hash_token;
use crate::experience::application::domain::entities::Experience;
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::language::application::domain::entities::{Language, LanguageRef};
use crate::language::application::ports::outgoing::{LanguageRepository, LanguageRepositoryError};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::site::application::default_content;
use crate::site::application::ports::outgoing::{SeedMarkerError, SeedMarkerStore};
use crate::skill::application::domain::entities::SkillCategory;
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

const OFFLINE: &str = "database offline";

// ============================================================================
// Fixtures
// ============================================================================

pub fn experience(title: &str) -> Experience {
    Experience {
        title: title.to_string(),
        company_name: "Company 1".to_string(),
        position: "Software Engineer".to_string(),
        dates: "Jan 2019 - Present".to_string(),
        description: "This is a job description.".to_string(),
    }
}

pub fn project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        description: "This is a project description.".to_string(),
        technologies: vec!["Python".into(), "Flask".into(), "MySQL".into()],
        link: Some("#".to_string()),
    }
}

pub fn about_me() -> AboutMe {
    default_content::about_me()
}

pub fn admin_session() -> AdminSession {
    AdminSession {
        user_id: UserId::from(Uuid::nil()),
        username: "admin".to_string(),
    }
}

// ============================================================================
// Languages
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryLanguageRepository {
    languages: Arc<Mutex<Vec<Language>>>,
    failing: bool,
}

impl InMemoryLanguageRepository {
    pub fn with_names(names: &[&str]) -> Self {
        let languages = names
            .iter()
            .map(|name| Language {
                id: Uuid::new_v4(),
                name: name.to_string(),
            })
            .collect();
        Self {
            languages: Arc::new(Mutex::new(languages)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Language> {
        self.languages.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|l| l.name).collect()
    }

    fn check(&self) -> Result<(), LanguageRepositoryError> {
        if self.failing {
            return Err(LanguageRepositoryError::DatabaseError(OFFLINE.into()));
        }
        Ok(())
    }

    fn position(languages: &[Language], target: LanguageRef) -> Option<usize> {
        match target {
            LanguageRef::Id(id) => languages.iter().position(|l| l.id == id),
            LanguageRef::Index(index) => (index < languages.len()).then_some(index),
        }
    }
}

#[async_trait]
impl LanguageRepository for InMemoryLanguageRepository {
    async fn list(&self) -> Result<Vec<Language>, LanguageRepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn add(&self, name: String) -> Result<Language, LanguageRepositoryError> {
        self.check()?;
        let language = Language {
            id: Uuid::new_v4(),
            name,
        };
        self.languages.lock().unwrap().push(language.clone());
        Ok(language)
    }

    async fn rename(
        &self,
        target: LanguageRef,
        name: String,
    ) -> Result<(), LanguageRepositoryError> {
        self.check()?;
        let mut languages = self.languages.lock().unwrap();
        let index =
            Self::position(&languages, target).ok_or(LanguageRepositoryError::NotFound)?;
        languages[index].name = name;
        Ok(())
    }

    async fn delete(&self, target: LanguageRef) -> Result<(), LanguageRepositoryError> {
        self.check()?;
        let mut languages = self.languages.lock().unwrap();
        let index =
            Self::position(&languages, target).ok_or(LanguageRepositoryError::NotFound)?;
        languages.remove(index);
        Ok(())
    }
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemorySkillRepository {
    categories: Arc<Mutex<Vec<SkillCategory>>>,
    failing: bool,
}

impl InMemorySkillRepository {
    pub fn with_categories(categories: &[(&str, &[&str])]) -> Self {
        let categories = categories
            .iter()
            .map(|(name, skills)| {
                SkillCategory::new(*name, skills.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        Self {
            categories: Arc::new(Mutex::new(categories)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<SkillCategory> {
        self.categories.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), SkillRepositoryError> {
        if self.failing {
            return Err(SkillRepositoryError::DatabaseError(OFFLINE.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn list_categories(&self) -> Result<Vec<SkillCategory>, SkillRepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn extend_category(
        &self,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), SkillRepositoryError> {
        self.check()?;
        let mut categories = self.categories.lock().unwrap();
        match categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.skills.extend(skills),
            None => categories.push(SkillCategory::new(category, skills)),
        }
        Ok(())
    }

    async fn replace_category(
        &self,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), SkillRepositoryError> {
        self.check()?;
        let mut categories = self.categories.lock().unwrap();
        match categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.skills = skills,
            None => categories.push(SkillCategory::new(category, skills)),
        }
        Ok(())
    }

    async fn delete_category(&self, category: &str) -> Result<(), SkillRepositoryError> {
        self.check()?;
        self.categories
            .lock()
            .unwrap()
            .retain(|c| c.name != category);
        Ok(())
    }
}

// ============================================================================
// Experiences
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryExperienceRepository {
    entries: Arc<Mutex<Vec<Experience>>>,
    failing: bool,
}

impl InMemoryExperienceRepository {
    pub fn with_entries(entries: Vec<Experience>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Experience> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ExperienceRepositoryError> {
        if self.failing {
            return Err(ExperienceRepositoryError::DatabaseError(OFFLINE.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn upsert(&self, experience: Experience) -> Result<(), ExperienceRepositoryError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| e.title == experience.title) {
            Some(existing) => *existing = experience,
            None => entries.push(experience),
        }
        Ok(())
    }

    async fn delete(&self, title: &str) -> Result<(), ExperienceRepositoryError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        let index = entries
            .iter()
            .position(|e| e.title == title)
            .ok_or(ExperienceRepositoryError::NotFound)?;
        entries.remove(index);
        Ok(())
    }

    async fn rename(
        &self,
        old_title: &str,
        experience: Experience,
    ) -> Result<(), ExperienceRepositoryError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        let old = entries
            .iter()
            .position(|e| e.title == old_title)
            .ok_or(ExperienceRepositoryError::NotFound)?;
        let new_title = experience.title.clone();
        entries[old] = experience;
        let mut index = 0;
        entries.retain(|e| {
            let keep = index == old || e.title != new_title;
            index += 1;
            keep
        });
        Ok(())
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<Mutex<Vec<Project>>>,
    failing: bool,
}

impl InMemoryProjectRepository {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(Mutex::new(projects)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ProjectRepositoryError> {
        if self.failing {
            return Err(ProjectRepositoryError::DatabaseError(OFFLINE.into()));
        }
        Ok(())
    }

    fn upsert_locked(projects: &mut Vec<Project>, project: Project) {
        match projects.iter_mut().find(|p| p.name == project.name) {
            Some(existing) => *existing = project,
            None => projects.push(project),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn upsert(&self, project: Project) -> Result<(), ProjectRepositoryError> {
        self.check()?;
        Self::upsert_locked(&mut self.projects.lock().unwrap(), project);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), ProjectRepositoryError> {
        self.check()?;
        self.projects.lock().unwrap().retain(|p| p.name != name);
        Ok(())
    }

    async fn replace(
        &self,
        old_name: Option<&str>,
        project: Project,
    ) -> Result<(), ProjectRepositoryError> {
        self.check()?;
        let mut projects = self.projects.lock().unwrap();
        let old = old_name.and_then(|name| projects.iter().position(|p| p.name == name));

        let Some(old) = old else {
            Self::upsert_locked(&mut projects, project);
            return Ok(());
        };

        let new_name = project.name.clone();
        projects[old] = project;
        let mut index = 0;
        projects.retain(|p| {
            let keep = index == old || p.name != new_name;
            index += 1;
            keep
        });
        Ok(())
    }
}

// ============================================================================
// About me
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryAboutRepository {
    profile: Arc<Mutex<Option<AboutMe>>>,
    failing: bool,
}

impl InMemoryAboutRepository {
    pub fn with_profile(about: AboutMe) -> Self {
        Self {
            profile: Arc::new(Mutex::new(Some(about))),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<AboutMe> {
        self.profile.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AboutRepositoryError> {
        if self.failing {
            return Err(AboutRepositoryError::DatabaseError(OFFLINE.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AboutRepository for InMemoryAboutRepository {
    async fn get(&self) -> Result<Option<AboutMe>, AboutRepositoryError> {
        self.check()?;
        Ok(self.current())
    }

    async fn save(&self, about: AboutMe) -> Result<(), AboutRepositoryError> {
        self.check()?;
        *self.profile.lock().unwrap() = Some(about);
        Ok(())
    }
}

// ============================================================================
// Seed markers
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemorySeedMarkers {
    applied: Arc<Mutex<Vec<String>>>,
}

impl InMemorySeedMarkers {
    pub fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl SeedMarkerStore for InMemorySeedMarkers {
    async fn is_applied(&self, name: &str) -> Result<bool, SeedMarkerError> {
        Ok(self.applied.lock().unwrap().iter().any(|n| n == name))
    }

    async fn mark_applied(&self, name: &str) -> Result<(), SeedMarkerError> {
        let mut applied = self.applied.lock().unwrap();
        if !applied.iter().any(|n| n == name) {
            applied.push(name.to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Sessions keyed by token hash, like the Redis store.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, AdminSession>>>,
}

impl InMemorySessionStore {
    pub fn with_session(token: &str, session: AdminSession) -> Self {
        let store = Self::default();
        store
            .sessions
            .lock()
            .unwrap()
            .insert(hash_token(token), session);
        store
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(
        &self,
        token_hash: &str,
        session: &AdminSession,
        _ttl_seconds: u64,
    ) -> Result<(), SessionStoreError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), session.clone());
        Ok(())
    }

    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, SessionStoreError> {
        Ok(self.sessions.lock().unwrap().get(token_hash).cloned())
    }

    async fn remove(&self, token_hash: &str) -> Result<(), SessionStoreError> {
        self.sessions.lock().unwrap().remove(token_hash);
        Ok(())
    }
}

/// Reversible stand-in for argon2 so tests stay fast.
#[derive(Clone, Default)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Accounts table keyed by username.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<HashMap<String, UserQueryResult>>>,
}

impl InMemoryUsers {
    /// The seeded `admin` / `admin` account, hashed with `StubPasswordHasher`.
    pub fn with_admin() -> Self {
        let users = Self::default();
        users.insert("admin", "hashed:admin");
        users
    }

    pub fn insert(&self, username: &str, password_hash: &str) -> UserId {
        let id = UserId::from(Uuid::new_v4());
        self.users.lock().unwrap().insert(
            username.to_string(),
            UserQueryResult {
                id,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
        id
    }

    pub fn password_hash(&self, username: &str) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .get(username)
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<UserId, UserRepositoryError> {
        if self.password_hash(&user.username).is_some() {
            return Err(UserRepositoryError::UsernameTaken);
        }
        Ok(self.insert(&user.username, &user.password_hash))
    }
}
