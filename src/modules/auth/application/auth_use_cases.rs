use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_admin::ILoginAdminUseCase, logout_admin::ILogoutAdminUseCase,
    resolve_session::IResolveSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub resolve_session: Arc<dyn IResolveSessionUseCase + Send + Sync>,
}
