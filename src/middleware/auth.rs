use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entity::users,
    error::{AppError, AppResult},
    services::user_service,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// External identity of the caller, matched against `users.external_id`.
    pub sub: String,
    pub exp: usize,
}

/// Checks a bearer token and returns the subject it was issued for.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> AppResult<String>;
}

/// HS256 tokens signed with the shared `JWT_SECRET`.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> AppResult<String> {
        let decoded = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;
        Ok(decoded.claims.sub)
    }
}

/// Optional `Authorization: Bearer` credential. A missing header yields `None`;
/// a header that is present but malformed is rejected.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(BearerToken(None));
        };

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".into()))?;

        Ok(BearerToken(Some(token.to_string())))
    }
}

/// Verifies the token and loads the user whose `external_id` is its subject.
pub async fn resolve_user<C: ConnectionTrait>(
    db: &C,
    verifier: &dyn TokenVerifier,
    token: &str,
) -> AppResult<users::Model> {
    let subject = verifier.verify(token)?;
    user_service::find_by_external_id(db, &subject)
        .await?
        .ok_or_else(|| {
            tracing::debug!(%subject, "token subject has no user");
            AppError::Unauthorized("Unknown identity".into())
        })
}

/// Owner of a new role record: the token's user when a token is sent,
/// otherwise whatever the payload asked for.
pub async fn creation_owner<C: ConnectionTrait>(
    db: &C,
    verifier: &dyn TokenVerifier,
    token: Option<&str>,
    requested: Option<Uuid>,
) -> AppResult<Option<Uuid>> {
    match token {
        Some(token) => Ok(Some(resolve_user(db, verifier, token).await?.id)),
        None => Ok(requested),
    }
}

/// Records without an owner are open; owned records need the owner's token.
pub async fn ensure_owner<C: ConnectionTrait>(
    db: &C,
    verifier: &dyn TokenVerifier,
    token: Option<&str>,
    owner: Option<Uuid>,
) -> AppResult<()> {
    let Some(owner) = owner else {
        return Ok(());
    };
    let token = token.ok_or_else(|| AppError::Unauthorized("Missing bearer token".into()))?;
    let caller = resolve_user(db, verifier, token).await?;
    if caller.id != owner {
        tracing::debug!(caller = %caller.id, %owner, "ownership check failed");
        return Err(AppError::Forbidden);
    }
    Ok(())
}
