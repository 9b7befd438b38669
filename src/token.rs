//! Client-side reading of bearer tokens.
//!
//! The payload segment is decoded without any signature or expiry check. It
//! is only used to pick a landing page; every API call still presents the
//! token to the backend, which is the one that decides.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Storage key the token lives under.
pub const TOKEN_KEY: &str = "token";

const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Value,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn is_admin(&self) -> bool {
        matches!(&self.role, Value::String(role) if role == "admin")
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_str()
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, ClientError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ClientError::MalformedToken("missing payload segment".into()))?;
    let bytes = PAYLOAD
        .decode(payload)
        .map_err(|e| ClientError::MalformedToken(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::MalformedToken(e.to_string()))
}
