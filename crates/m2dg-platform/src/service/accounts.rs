//! Account registration, password login and profile updates.

use crate::{
    errors::*,
    types::*,
    validation::{normalize_email, require_text, validate_email, validate_password},
};
use m2dg_crypto::{generate_salt, hash_password, verify_password, DUMMY_PASSWORD_HASH};
use m2dg_storage::{BatchExt, Storage, StorageError, CF_CREDENTIALS, CF_USERS};
use tracing::{info, warn};

use super::{new_id, settle, PlatformService};

impl<S: Storage> PlatformService<S> {
    /// Create a user together with its password credential.
    ///
    /// The credential is keyed by the lowercased email and written in the same
    /// batch as the user, conditional on that key being absent, so two racing
    /// registrations for one email cannot both succeed.
    pub(super) async fn register_internal(&self, request: UserCreate) -> Result<User> {
        validate_email(request.email.trim())?;
        require_text("username", &request.username)?;
        require_text("full_name", &request.full_name)?;
        validate_password(&request.password)?;

        let email = normalize_email(&request.email);

        // Cheap early rejection; the batch precondition below is authoritative
        if self.storage.exists(CF_CREDENTIALS, &email).await? {
            return Err(email_taken());
        }

        let salt = generate_salt();
        let password_hash = hash_password(request.password.as_bytes(), &salt)?;

        let now = self.clock.now();
        let user = User {
            id: new_id(),
            username: request.username.trim().to_string(),
            email: email.clone(),
            full_name: request.full_name.trim().to_string(),
            phone: request.phone,
            profile_picture: None,
            position: None,
            height: None,
            weight: None,
            experience_level: None,
            bio: None,
            stats: Stats::new(),
            achievements: Vec::new(),
            is_coach: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let credential = PasswordCredential {
            user_id: user.id.clone(),
            email: email.clone(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let mut batch = self.storage.batch();
        batch.require_absent(CF_CREDENTIALS, &email)?;
        batch.put(CF_USERS, &user.id, &user)?;
        batch.put(CF_CREDENTIALS, &email, &credential)?;
        batch.commit().await.map_err(|e| match e {
            StorageError::AlreadyExists { .. } => email_taken(),
            other => other.into(),
        })?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Verify an email/password pair.
    ///
    /// Unknown emails still pay for one Argon2 verification against a dummy
    /// hash. Every failure is `InvalidCredentials`.
    pub(super) async fn authenticate_internal(&self, email: &str, password: &str) -> Result<User> {
        let email = normalize_email(email);

        let credential: Option<PasswordCredential> =
            self.storage.get(CF_CREDENTIALS, &email).await?;

        let Some(credential) = credential else {
            let _ = verify_password(password.as_bytes(), DUMMY_PASSWORD_HASH);
            warn!("Login rejected: no credential for email");
            return Err(PlatformError::InvalidCredentials);
        };

        if !verify_password(password.as_bytes(), &credential.password_hash)? {
            warn!(user_id = %credential.user_id, "Login rejected: wrong password");
            return Err(PlatformError::InvalidCredentials);
        }

        let user: Option<User> = self.storage.get(CF_USERS, &credential.user_id).await?;
        let Some(user) = user else {
            warn!(user_id = %credential.user_id, "Login rejected: credential without user");
            return Err(PlatformError::InvalidCredentials);
        };

        info!(user_id = %user.id, "User authenticated");

        Ok(user)
    }

    pub(super) async fn find_user_internal(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.storage.get(CF_USERS, user_id).await?)
    }

    pub(super) async fn update_profile_internal(
        &self,
        user_id: &str,
        update: UserUpdate,
    ) -> Result<User> {
        if let Some(full_name) = &update.full_name {
            require_text("full_name", full_name)?;
        }

        let now = self.clock.now();
        let outcome = self
            .storage
            .update_with(CF_USERS, user_id, |user: &mut User| {
                update.apply_to(user, now);
                Ok::<_, PlatformError>(user.clone())
            })
            .await?;
        let user = settle(outcome, "User")?;

        info!(user_id = %user.id, "Profile updated");

        Ok(user)
    }
}

fn email_taken() -> PlatformError {
    PlatformError::AlreadyExists("Email already registered".to_string())
}
