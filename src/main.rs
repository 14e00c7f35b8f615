pub mod modules;
pub use modules::{about, auth, experience, language, project, site, skill};
pub mod config;
pub mod health;
pub mod shared;

use crate::about::{
    adapter::outgoing::AboutRepositoryPostgres,
    application::{about_use_cases::AboutUseCases, services::AboutService},
};
use crate::auth::adapter::outgoing::{
    Argon2Hasher, RedisSessionStore, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::{
    auth_use_cases::AuthUseCases,
    ports::outgoing::PasswordHasher,
    use_cases::{
        login_admin::LoginAdminUseCase,
        logout_admin::LogoutAdminUseCase,
        resolve_session::ResolveSessionUseCase,
        seed_admin::{ISeedAdminUseCase, SeedAdminUseCase, SeedOutcome},
    },
};
use crate::config::{AppConfig, SessionCookieConfig};
use crate::experience::{
    adapter::outgoing::ExperienceRepositoryPostgres,
    application::{experience_use_cases::ExperienceUseCases, services::ExperienceService},
};
use crate::language::{
    adapter::outgoing::LanguageRepositoryPostgres,
    application::{language_use_cases::LanguageUseCases, services::LanguageService},
};
use crate::project::{
    adapter::outgoing::ProjectRepositoryPostgres,
    application::{project_use_cases::ProjectUseCases, services::ProjectService},
};
use crate::shared::web::PageRenderer;
use crate::site::{
    adapter::outgoing::SeedMarkerStorePostgres, application::services::ContentSeeder,
};
use crate::skill::{
    adapter::outgoing::SkillRepositoryPostgres,
    application::{services::SkillService, skill_use_cases::SkillUseCases},
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub skills: SkillUseCases,
    pub languages: LanguageUseCases,
    pub experiences: ExperienceUseCases,
    pub projects: ProjectUseCases,
    pub about: AboutUseCases,
    pub pages: Arc<PageRenderer>,
    pub session_cookie: SessionCookieConfig,
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| startup_error("Failed to apply migrations", e))?;

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error("Failed to create Redis pool", e))?;

    let redis_arc = Arc::new(redis_pool);

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env().unwrap_or_else(|e| {
            warn!("Invalid Argon2 parameters ({}), using defaults", e);
            Argon2Hasher::default()
        }));

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    // Administrator account
    let seed_admin =
        SeedAdminUseCase::new(user_query.clone(), user_repo, Arc::clone(&password_hasher));
    match seed_admin
        .execute(&config.admin_username, &config.admin_password)
        .await
        .map_err(|e| startup_error("Failed to seed administrator", e))?
    {
        SeedOutcome::Created => info!("Administrator '{}' created", config.admin_username),
        SeedOutcome::AlreadyPresent => info!("Administrator '{}' present", config.admin_username),
    }

    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let language_repo = LanguageRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let about_repo = AboutRepositoryPostgres::new(Arc::clone(&db_arc));

    // Starter content, written on the first start only
    if config.seed_default_content {
        let seeder = ContentSeeder::new(
            Arc::new(skill_repo.clone()),
            Arc::new(language_repo.clone()),
            Arc::new(experience_repo.clone()),
            Arc::new(project_repo.clone()),
            Arc::new(about_repo.clone()),
            Arc::new(SeedMarkerStorePostgres::new(Arc::clone(&db_arc))),
        );
        let report = seeder
            .seed_once()
            .await
            .map_err(|e| startup_error("Failed to seed default content", e))?;
        info!("Default content seeded: {:?}", report);
    }

    let sessions = RedisSessionStore::new(Arc::clone(&redis_arc));

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminUseCase::new(
            user_query,
            sessions.clone(),
            password_hasher,
            config.session.ttl_seconds,
        )),
        logout: Arc::new(LogoutAdminUseCase::new(sessions.clone())),
        resolve_session: Arc::new(ResolveSessionUseCase::new(sessions)),
    };

    let pages = PageRenderer::new().map_err(|e| startup_error("Failed to load templates", e))?;

    let state = AppState {
        auth,
        skills: SkillService::new(skill_repo).into_use_cases(),
        languages: LanguageService::new(language_repo).into_use_cases(),
        experiences: ExperienceService::new(experience_repo).into_use_cases(),
        projects: ProjectService::new(project_repo).into_use_cases(),
        about: AboutService::new(about_repo).into_use_cases(),
        pages: Arc::new(pages),
        session_cookie: config.session.clone(),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public site
    cfg.service(crate::site::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::projects_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::about_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::contact_page_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::submit_contact_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_page_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::admin_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::add_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Languages
    cfg.service(crate::language::adapter::incoming::web::routes::admin_languages_handler);
    cfg.service(crate::language::adapter::incoming::web::routes::add_language_handler);
    cfg.service(crate::language::adapter::incoming::web::routes::update_language_handler);
    cfg.service(crate::language::adapter::incoming::web::routes::delete_language_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::admin_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::add_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::admin_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::add_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // About me
    cfg.service(crate::about::adapter::incoming::web::routes::admin_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::update_about_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
