use actix_web::web;
use std::sync::Arc;

use crate::about::application::services::AboutService;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::LogoutAdminUseCase,
    resolve_session::ResolveSessionUseCase,
};
use crate::config::SessionCookieConfig;
use crate::experience::application::services::ExperienceService;
use crate::language::application::services::LanguageService;
use crate::project::application::services::ProjectService;
use crate::shared::web::PageRenderer;
use crate::skill::application::services::SkillService;
use crate::tests::support::fakes::{
    admin_session, InMemoryAboutRepository, InMemoryExperienceRepository,
    InMemoryLanguageRepository, InMemoryProjectRepository, InMemorySessionStore,
    InMemorySkillRepository, InMemoryUsers, StubPasswordHasher,
};
use crate::AppState;

/// Raw cookie value of the admin session every default builder starts with.
pub const TEST_SESSION_TOKEN: &str = "test-session-token";

const TEST_SESSION_TTL_SECONDS: u64 = 3600;

/// Builds an `AppState` over in-memory adapters. Every collection starts
/// empty; the session store already knows `TEST_SESSION_TOKEN`.
pub struct TestAppStateBuilder {
    login: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    users: InMemoryUsers,
    sessions: InMemorySessionStore,
    skills: InMemorySkillRepository,
    languages: InMemoryLanguageRepository,
    experiences: InMemoryExperienceRepository,
    projects: InMemoryProjectRepository,
    about: InMemoryAboutRepository,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login: None,
            users: InMemoryUsers::with_admin(),
            sessions: InMemorySessionStore::with_session(TEST_SESSION_TOKEN, admin_session()),
            skills: InMemorySkillRepository::default(),
            languages: InMemoryLanguageRepository::default(),
            experiences: InMemoryExperienceRepository::default(),
            projects: InMemoryProjectRepository::default(),
            about: InMemoryAboutRepository::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_sessions(mut self, sessions: InMemorySessionStore) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_skills(mut self, repo: InMemorySkillRepository) -> Self {
        self.skills = repo;
        self
    }

    pub fn with_languages(mut self, repo: InMemoryLanguageRepository) -> Self {
        self.languages = repo;
        self
    }

    pub fn with_experiences(mut self, repo: InMemoryExperienceRepository) -> Self {
        self.experiences = repo;
        self
    }

    pub fn with_projects(mut self, repo: InMemoryProjectRepository) -> Self {
        self.projects = repo;
        self
    }

    pub fn with_about(mut self, repo: InMemoryAboutRepository) -> Self {
        self.about = repo;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let login = self.login.unwrap_or_else(|| {
            Arc::new(LoginAdminUseCase::new(
                self.users.clone(),
                self.sessions.clone(),
                Arc::new(StubPasswordHasher),
                TEST_SESSION_TTL_SECONDS,
            ))
        });

        let auth = AuthUseCases {
            login,
            logout: Arc::new(LogoutAdminUseCase::new(self.sessions.clone())),
            resolve_session: Arc::new(ResolveSessionUseCase::new(self.sessions)),
        };

        web::Data::new(AppState {
            auth,
            skills: SkillService::new(self.skills).into_use_cases(),
            languages: LanguageService::new(self.languages).into_use_cases(),
            experiences: ExperienceService::new(self.experiences).into_use_cases(),
            projects: ProjectService::new(self.projects).into_use_cases(),
            about: AboutService::new(self.about).into_use_cases(),
            pages: Arc::new(PageRenderer::new().expect("templates compile")),
            session_cookie: SessionCookieConfig::default(),
        })
    }
}
