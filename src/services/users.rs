//! Registration, login and identity lookup

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{AuthResponse, LoginInput, RegisterInput, User, UserClaims, UserInfo},
    repository::Repository,
    validation::{validate_user_login, validate_user_registration},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Validate the registration payload, create the identity and issue a token
    pub async fn register(&self, input: &RegisterInput) -> AppResult<AuthResponse> {
        let registration = validate_user_registration(input)?;

        let user = self
            .create_user(&registration.email, &registration.password)
            .await?;
        tracing::info!(user_id = user.id, "Registered new user");

        self.auth_response(&user)
    }

    /// Validate the login payload and exchange credentials for a token
    pub async fn login(&self, input: &LoginInput) -> AppResult<AuthResponse> {
        let credentials = validate_user_login(input)?;

        let user = self
            .validate_credentials(&credentials.email, &credentials.password)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;
        tracing::info!(user_id = user.id, "User logged in");

        self.auth_response(&user)
    }

    /// Identity behind a verified token
    pub async fn me(&self, claims: &UserClaims) -> AppResult<UserInfo> {
        self.repository
            .users
            .get_by_id(claims.id)
            .await?
            .map(UserInfo::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Create an identity; fails with `Conflict` when the email is taken
    pub async fn create_user(&self, email: &str, password: &str) -> AppResult<User> {
        if self.find_by_email(email).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = self.hash_password(password)?;
        self.repository.users.create(email, &password_hash).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repository.users.find_by_email(email).await
    }

    /// The user matching `email` and `password`, if any
    pub async fn validate_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.verify_password(&user, password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Verify user password (constant-time comparison inside argon2)
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    fn auth_response(&self, user: &User) -> AppResult<AuthResponse> {
        let token = UserClaims::for_user(user.id, &user.email, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(AuthResponse {
            id: user.id,
            email: user.email.clone(),
            token,
        })
    }
}
