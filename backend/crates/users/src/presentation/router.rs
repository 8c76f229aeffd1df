//! Users Router

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::config::UserConfig;
use crate::application::service::UserService;
use crate::application::user_service::UserServiceImpl;
use crate::infra::google::GoogleOauth;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UserAppState};
use crate::presentation::middleware::{BearerAuthState, require_bearer_auth};

/// Create the users router backed by PostgreSQL and Google OAuth.
pub fn users_router(pool: PgPool, config: UserConfig) -> Router {
    let config = Arc::new(config);
    let repo = PgUserRepository::new(pool);
    let oauth = GoogleOauth::new(&config);
    let service = UserServiceImpl::new(repo, oauth, Arc::clone(&config));

    users_router_generic(Arc::new(service), config)
}

/// Create a users router over any `UserService` implementation.
pub fn users_router_generic<S>(service: Arc<S>, config: Arc<UserConfig>) -> Router
where
    S: UserService + Send + Sync + 'static,
{
    let state = UserAppState { service };
    let auth_state = BearerAuthState { config };

    Router::new()
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .route(
            "/profile",
            get(handlers::profile::<S>).layer(axum::middleware::from_fn_with_state(
                auth_state,
                require_bearer_auth,
            )),
        )
        .route("/oauth/google/url", get(handlers::oauth_google_url::<S>))
        .with_state(state)
}
