//! Generated user record types.
//!
//! These are transient value objects: built fresh on every call, never
//! mutated afterwards, and compared by value only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A generated numeric identifier, kept as a number or rendered as text.
///
/// Serializes untagged, so JSON output is either `"1234567"` or `1234567`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedId {
    /// Decimal string form.
    Text(String),
    /// Numeric form.
    Numeric(u64),
}

impl GeneratedId {
    /// Returns the identifier as an integer.
    ///
    /// Returns `None` only for a text identifier that is not a decimal
    /// number, which generation never produces.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Text(text) => text.parse().ok(),
            Self::Numeric(value) => Some(*value),
        }
    }
}

impl fmt::Display for GeneratedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Numeric(value) => write!(f, "{value}"),
        }
    }
}

/// Profile image URLs at three sizes.
///
/// Any size the caller leaves unset is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileIcon {
    /// Small image URL.
    pub small: String,
    /// Medium image URL.
    pub medium: String,
    /// Large image URL.
    pub large: String,
}

/// A generated user record.
///
/// # Example
///
/// ```
/// use user_fixtures::{GeneratedId, ProfileIcon, UserRecord};
///
/// let user = UserRecord {
///     id: GeneratedId::Text("1234567".to_owned()),
///     username: "ProudEmma042".to_owned(),
///     email: "proudlush@gmail.com".to_owned(),
///     profile_icon: ProfileIcon::default(),
/// };
///
/// assert_eq!(user.id.as_u64(), Some(1_234_567));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Generated identifier.
    pub id: GeneratedId,
    /// Generated username.
    pub username: String,
    /// Generated email address.
    pub email: String,
    /// Profile image URLs passed through from the rules.
    pub profile_icon: ProfileIcon,
}
