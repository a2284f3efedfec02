//! Authenticated user model extracted from the identity cookie.
//!
//! The sign-in service issues a JWT which is stored through `actix-identity`.
//! Handlers take [`AuthenticatedUser`] as an extractor; a missing or invalid
//! token yields `401 Unauthorized`, which
//! [`crate::middleware::RedirectUnauthorized`] turns into a redirect to the
//! sign-in page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// JWT claims describing the signed-in back-office user.
pub struct AuthenticatedUser {
    /// Subject (user identifier).
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Service roles, e.g. `sac` plus one of the screen roles.
    pub roles: Vec<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Whether the user carries the given service role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(feature = "server")]
mod extract {
    use std::future::{Ready, ready};

    use actix_identity::Identity;
    use actix_web::dev::Payload;
    use actix_web::{Error, FromRequest, HttpRequest, error::ErrorUnauthorized, web};
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use super::AuthenticatedUser;
    use crate::models::config::ServerConfig;

    impl AuthenticatedUser {
        /// Decode and validate a token using the shared server secret.
        pub fn from_token(
            token: &str,
            secret: &str,
        ) -> Result<Self, jsonwebtoken::errors::Error> {
            let decoded = decode::<AuthenticatedUser>(
                token,
                &DecodingKey::from_secret(secret.as_bytes()),
                &Validation::default(),
            )?;
            Ok(decoded.claims)
        }
    }

    impl FromRequest for AuthenticatedUser {
        type Error = Error;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
            let identity = Identity::from_request(req, payload).into_inner();

            let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
                return ready(Err(ErrorUnauthorized("Server configuration missing")));
            };

            let result = identity
                .and_then(|identity| identity.id().map_err(Error::from))
                .and_then(|token| {
                    AuthenticatedUser::from_token(&token, &config.secret)
                        .map_err(|_| ErrorUnauthorized("Invalid token"))
                });

            ready(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_check_is_exact_match() {
        let user = AuthenticatedUser {
            sub: "1".to_string(),
            email: "uw@example.com".to_string(),
            name: "U. Writer".to_string(),
            roles: vec!["sac".to_string(), "Underwriter".to_string()],
            exp: 0,
        };
        assert!(user.has_role("sac"));
        assert!(user.has_role("Underwriter"));
        assert!(!user.has_role("sac_admin"));
        assert!(!user.has_role("under"));
    }
}
