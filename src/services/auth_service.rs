//! Authentication service - Registration, login and bearer tokens.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, DUMMY_PASSWORD_HASH};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: i32,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after registration or login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account and issue a token for it
    async fn register(&self, name: String, email: String, password: String) -> AppResult<TokenResponse>;

    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Sign a token for the user
    fn issue_token(&self, user_id: i32) -> AppResult<String>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn token_response(&self, user_id: i32) -> AppResult<TokenResponse> {
        Ok(TokenResponse {
            access_token: self.issue_token(user_id)?,
        })
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<TokenResponse> {
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.uow.users().create(name, email, password_hash).await?;
        tracing::info!(user_id = user.id, "User registered");

        self.token_response(user.id)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.uow.users().find_by_email(&email).await?;

        // Verify against a dummy hash for unknown emails so timing does not reveal them
        let stored = Password::from_hash(
            user.as_ref()
                .map_or(DUMMY_PASSWORD_HASH, |u| u.password_hash.as_str()),
        );
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => self.token_response(user.id),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn issue_token(&self, user_id: i32) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        // Signing only fails on a broken key, which is a configuration fault
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::{MockUserRepository, MockVideoRepository, UserRepository, VideoRepository};
    use mockall::predicate::eq;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn videos(&self) -> Arc<dyn VideoRepository> {
            Arc::new(MockVideoRepository::new())
        }
    }

    fn service(users: MockUserRepository) -> Authenticator<TestUnitOfWork> {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();
        Authenticator::new(
            Arc::new(TestUnitOfWork {
                users: Arc::new(users),
            }),
            config,
        )
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 42,
            name: "Testuser".to_string(),
            email: "test@test.ru".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    #[test]
    fn test_issued_token_verifies_to_same_user() {
        let auth = service(MockUserRepository::new());

        let token = auth.issue_token(42).unwrap();
        let claims = auth.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = service(MockUserRepository::new());
        let past = Utc::now().timestamp() - 7200;
        let claims = Claims {
            sub: 1,
            exp: past,
            iat: past - 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(auth.verify_token(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let auth = service(MockUserRepository::new());
        let other = Authenticator::new(
            Arc::new(TestUnitOfWork {
                users: Arc::new(MockUserRepository::new()),
            }),
            Config::new("sqlite::memory:", "another-secret-key-that-is-32-chars-long").unwrap(),
        );

        let token = other.issue_token(1).unwrap();
        assert!(auth.verify_token(&token).is_err());
        assert!(auth.verify_token("not.a.token").is_err());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("test@test.ru"))
            .returning(|_| Ok(Some(stored_user("password"))));
        users.expect_create().never();

        let result = service(users)
            .register("Other".into(), "test@test.ru".into(), "password".into())
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_issues_token() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|name, email, hash| {
                name == "Testuser" && email == "test@test.ru" && Password::from_hash(hash.as_str()).verify("password")
            })
            .returning(|name, email, password_hash| {
                Ok(User {
                    id: 5,
                    name,
                    email,
                    password_hash,
                })
            });

        let auth = service(users);
        let token = auth
            .register("Testuser".into(), "test@test.ru".into(), "password".into())
            .await
            .unwrap();

        assert_eq!(auth.verify_token(&token.access_token).unwrap().sub, 5);
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("password"))));

        let auth = service(users);
        let token = auth
            .login("test@test.ru".into(), "password".into())
            .await
            .unwrap();

        assert_eq!(auth.verify_token(&token.access_token).unwrap().sub, 42);
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_alike() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("test@test.ru"))
            .returning(|_| Ok(Some(stored_user("password"))));
        users
            .expect_find_by_email()
            .with(eq("nobody@test.ru"))
            .returning(|_| Ok(None));

        let auth = service(users);
        let wrong = auth.login("test@test.ru".into(), "wrong".into()).await;
        let unknown = auth.login("nobody@test.ru".into(), "password".into()).await;

        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
    }
}
