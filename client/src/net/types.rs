//! Wire DTOs for the remote storefront REST API.
//!
//! DESIGN
//! ======
//! Shapes mirror the JSON the inventory service emits (camelCase keys,
//! numeric ids, uppercase roles) and normalize them on the way in so views
//! never deal with raw server quirks.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Quantity at or below which an item is flagged as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Opaque, server-assigned item identifier.
///
/// The server currently hands out integers; the client only ever compares and
/// echoes ids, so both numeric and string forms are accepted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SweetId(String);

impl SweetId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SweetId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl<'de> Deserialize<'de> for SweetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// A purchasable catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweet {
    pub id: SweetId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub image_url: Option<String>,
}

/// Coarse stock bucket used for badges and card labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    Plenty,
}

impl Sweet {
    /// Whether the item can still be purchased.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    pub fn stock_level(&self) -> StockLevel {
        match self.quantity {
            0 => StockLevel::Out,
            q if q < LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::Plenty,
        }
    }

    /// Case-insensitive substring match over name and description.
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.description.to_lowercase().contains(&needle)
    }

    /// Overwrite editable fields with a submitted draft, keeping the id.
    pub fn apply_draft(&mut self, draft: &SweetDraft) {
        self.name.clone_from(&draft.name);
        self.description.clone_from(&draft.description);
        self.price = draft.price;
        self.quantity = draft.quantity;
        self.image_url.clone_from(&draft.image_url);
    }
}

/// Item fields minus the id, as sent on create and update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweetDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: Option<String>,
}

/// User role. The server stores roles uppercase; comparisons are
/// case-insensitive and anything that is not `admin` is a regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Role::parse).unwrap_or_default())
    }
}

/// The identity half of a session, persisted as `{username, role}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Username/password pair for login and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
struct LoginResponseWire {
    token: String,
    #[serde(default)]
    user: Option<User>,
}

/// Login success payload.
///
/// The server may or may not echo the user record next to the token, so the
/// two shapes are kept apart instead of being papered over with a fallback.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "LoginResponseWire")]
pub enum LoginResponse {
    WithUser { token: String, user: User },
    TokenOnly { token: String },
}

impl From<LoginResponseWire> for LoginResponse {
    fn from(wire: LoginResponseWire) -> Self {
        match wire.user {
            Some(user) => Self::WithUser { token: wire.token, user },
            None => Self::TokenOnly { token: wire.token },
        }
    }
}

impl LoginResponse {
    pub fn token(&self) -> &str {
        match self {
            Self::WithUser { token, .. } | Self::TokenOnly { token } => token,
        }
    }

    /// Resolve the session identity. A token-only response gets a locally
    /// synthesized default-role user named after the submitted username.
    pub fn into_session(self, username: &str) -> (String, User) {
        match self {
            Self::WithUser { token, user } => (token, user),
            Self::TokenOnly { token } => (
                token,
                User {
                    username: username.to_owned(),
                    role: Role::User,
                },
            ),
        }
    }
}

/// Register success payload. The body is informational only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure of a remote call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided error text, when the failing response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message or the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract `error` (preferred) or `message` from a failure body.
pub fn parse_error_message(body: &str) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_str(body).ok()?;
    payload
        .error
        .or(payload.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

fn deserialize_null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
