//! Login and registration.

use super::client::{require, ConsoleClient};
use super::envelope::UserProfile;
use crate::error::{ConsoleError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Body of the registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "sous_role", skip_serializing_if = "Option::is_none")]
    pub sous_role: Option<String>,
    pub nom: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
}

impl Registration {
    pub fn validate(&self) -> Result<()> {
        for (value, field) in [
            (&self.username, "username"),
            (&self.password, "password"),
            (&self.email, "email"),
            (&self.role, "role"),
        ] {
            require(value, &format!("Champ manquant: {}", field))?;
        }
        if !self.email.contains('@') {
            return Err(ConsoleError::validation(format!("Adresse email invalide: {}", self.email)));
        }
        Ok(())
    }
}

impl ConsoleClient {
    /// Checks credentials and returns the matching user.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile> {
        if username.is_empty() || password.is_empty() {
            return Err(ConsoleError::validation("Username et password requis"));
        }
        let envelope = self.post_json("/api/auth/login/", &Credentials { username, password }).await?;
        envelope
            .user
            .ok_or_else(|| ConsoleError::backend(200, "Réponse de connexion sans utilisateur"))
    }

    /// Creates an account and returns the new user id.
    pub async fn register(&self, registration: &Registration) -> Result<String> {
        registration.validate()?;
        let envelope = self.post_json("/api/auth/register/", registration).await?;
        envelope
            .user_id
            .ok_or_else(|| ConsoleError::backend(200, "Réponse d'inscription sans identifiant"))
    }
}
