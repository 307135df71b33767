use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::middleware::auth::TokenVerifier;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub verifier: Arc<dyn TokenVerifier>,
}
