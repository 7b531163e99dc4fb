//! Sensitive-value channel for plugin secrets.
//!
//! Secrets never travel inside the general configuration object. Once a
//! plugin's `prepare` hook has moved a secret here, the configuration only
//! ever holds [`SECRET_MASK`], and every read path that reaches a caller
//! (serialization, `Debug`, echoed descriptions) sees the mask as well.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

/// Placeholder shown wherever a stored secret would otherwise be echoed.
pub const SECRET_MASK: &str = "********";

/// Environment variable prefix for secret values.
pub const SECRET_ENV_PREFIX: &str = "CATALOG_SECRET";

/// Secrets held on behalf of a catalog plugin.
#[derive(Debug, Default)]
pub struct CatalogSecrets {
    /// Opaque secret supplied by the catalog owner.
    secret_field: Option<SecretString>,
}

impl CatalogSecrets {
    /// Create a secrets holder. Empty strings count as "no secret".
    pub fn new(secret_field: Option<String>) -> Self {
        Self {
            secret_field: secret_field
                .filter(|value| !value.is_empty())
                .map(SecretString::from),
        }
    }

    /// Load secrets from `CATALOG_SECRET__*` environment variables.
    pub fn load() -> Result<Self, AppError> {
        let raw: RawSecrets = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(SECRET_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(false),
            )
            .build()?
            .try_deserialize()?;

        let secrets = Self::new(raw.secret_field);
        tracing::debug!(secret_field_set = secrets.is_set(), "Loaded catalog secrets");
        Ok(secrets)
    }

    /// Whether a secret is stored.
    pub fn is_set(&self) -> bool {
        self.secret_field.is_some()
    }

    /// Replace the stored secret. Empty strings clear it.
    pub fn set_secret_field(&mut self, value: Option<String>) {
        *self = Self::new(value);
    }

    /// The plain secret, for code that must authenticate with it.
    pub fn expose_secret_field(&self) -> Option<&str> {
        self.secret_field.as_ref().map(|s| s.expose_secret())
    }

    /// The caller-facing rendering of the secret: the mask when set.
    pub fn masked_secret_field(&self) -> Option<&'static str> {
        self.secret_field.as_ref().map(|_| SECRET_MASK)
    }
}

impl Clone for CatalogSecrets {
    fn clone(&self) -> Self {
        Self::new(self.expose_secret_field().map(str::to_owned))
    }
}

impl Serialize for CatalogSecrets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MaskedSecrets {
            secret_field: self.masked_secret_field(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CatalogSecrets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawSecrets::deserialize(deserializer).map(|raw| Self::new(raw.secret_field))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaskedSecrets {
    secret_field: Option<&'static str>,
}

#[derive(Deserialize)]
struct RawSecrets {
    #[serde(default, alias = "secretField")]
    secret_field: Option<String>,
}
