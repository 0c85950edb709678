//! Request and response bodies of the passwordless API.
//!
//! Request members are sent in the PascalCase form the API documents (`Token`,
//! `Username`, `CredentialId`, ...). The hosted service answers in camelCase while
//! older and self-hosted deployments answer in PascalCase, so every response member
//! accepts both spellings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Body of `signin/verify`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyTokenRequest<'a> {
    pub token: &'a str,
}

/// Body of `credentials/delete`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCredentialRequest<'a> {
    pub credential_id: &'a str,
}

/// Attestation the relying party wants from the authenticator.
///
/// <https://w3c.github.io/webauthn/#enumdef-attestationconveyancepreference>
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum AttestationConveyance {
    #[default]
    None,
    Indirect,
    Direct,
    Enterprise,
}

/// <https://w3c.github.io/webauthn/#enumdef-userverificationrequirement>
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum UserVerification {
    Required,
    #[default]
    Preferred,
    Discouraged,
}

/// Restricts registration to a platform or a roaming authenticator.
///
/// <https://w3c.github.io/webauthn/#enumdef-authenticatorattachment>
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AuthenticatorAttachment {
    Platform,
    CrossPlatform,
}

/// Body of `register/token`: which user a new credential will be bound to and
/// how the browser should create it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterTokenRequest {
    pub username: String,
    pub displayname: String,
    pub att_type: AttestationConveyance,
    pub auth_type: Option<AuthenticatorAttachment>,
    pub require_resident_key: bool,
    pub user_verification: UserVerification,
}

impl RegisterTokenRequest {
    pub const DEFAULT_DISPLAY_NAME: &'static str = "Test";

    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            displayname: Self::DEFAULT_DISPLAY_NAME.to_string(),
            att_type: AttestationConveyance::default(),
            auth_type: None,
            require_resident_key: false,
            user_verification: UserVerification::default(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, displayname: impl Into<String>) -> Self {
        self.displayname = displayname.into();
        self
    }

    #[must_use]
    pub fn with_attestation(mut self, att_type: AttestationConveyance) -> Self {
        self.att_type = att_type;
        self
    }

    #[must_use]
    pub fn with_authenticator_attachment(mut self, auth_type: AuthenticatorAttachment) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    #[must_use]
    pub fn with_resident_key(mut self, require_resident_key: bool) -> Self {
        self.require_resident_key = require_resident_key;
        self
    }

    #[must_use]
    pub fn with_user_verification(mut self, user_verification: UserVerification) -> Self {
        self.user_verification = user_verification;
        self
    }
}

/// Outcome of `signin/verify`. `success == false` means the token was rejected,
/// which is an answer, not a failed request. `Success` is the one required member,
/// so any other JSON object fails to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SignInTokenVerification {
    #[serde(alias = "expiresAt", default, with = "timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(alias = "username", default)]
    pub username: Option<String>,
    #[serde(alias = "timestamp", default, with = "timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "RPID", alias = "rpid", alias = "rpId", default)]
    pub rp_id: Option<String>,
    #[serde(alias = "origin", default)]
    pub origin: Option<String>,
    #[serde(alias = "success")]
    pub success: bool,
    #[serde(alias = "device", default)]
    pub device: Option<String>,
    #[serde(alias = "country", default)]
    pub country: Option<String>,
    #[serde(alias = "nickname", default)]
    pub nickname: Option<String>,
}

/// One authenticator registered to a user, as stored by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StoredCredential {
    /// Provider-defined credential descriptor, typically `{"type": ..., "id": ...}`.
    #[serde(alias = "descriptor", default)]
    pub descriptor: Option<Map<String, Value>>,
    #[serde(alias = "userId", default, with = "base64_bytes")]
    pub user_id: Vec<u8>,
    #[serde(alias = "publicKey", default, with = "base64_bytes")]
    pub public_key: Vec<u8>,
    #[serde(alias = "userHandle", default, with = "base64_bytes")]
    pub user_handle: Vec<u8>,
    #[serde(alias = "signatureCounter")]
    pub signature_counter: u32,
    #[serde(alias = "credType", default)]
    pub cred_type: Option<String>,
    #[serde(alias = "createdAt", default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(alias = "aaGuid", default)]
    pub aa_guid: Option<Uuid>,
    #[serde(alias = "lastUsedAt", default, with = "timestamp")]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(rename = "RPID", alias = "rpid", alias = "rpId", default)]
    pub rp_id: Option<String>,
    #[serde(alias = "origin", default)]
    pub origin: Option<String>,
    #[serde(alias = "country", default)]
    pub country: Option<String>,
    #[serde(alias = "device", default)]
    pub device: Option<String>,
    #[serde(alias = "nickname", default)]
    pub nickname: Option<String>,
}

impl StoredCredential {
    /// The `id` member of the descriptor, which is what `credentials/delete` expects.
    #[must_use]
    pub fn credential_id(&self) -> Option<&str> {
        self.descriptor
            .as_ref()
            .and_then(|d| d.get("id").or_else(|| d.get("Id")))
            .and_then(Value::as_str)
    }
}

// Binary members travel as base64 strings; .NET backends emit the padded
// standard alphabet, newer ones unpadded base64url.
mod base64_bytes {
    use base64ct::{Base64, Base64UrlUnpadded, Encoding};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Base64::encode_string(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };

        Base64::decode_vec(&encoded)
            .or_else(|_| Base64UrlUnpadded::decode_vec(encoded.trim_end_matches('=')))
            .map_err(|e| D::Error::custom(format!("invalid base64: {e}")))
    }
}

// RFC 3339 with an offset, or a naive ISO-8601 date-time which is taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        parse(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|ts| ts.and_utc())
            })
    }
}
