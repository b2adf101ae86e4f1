//! Composite user record generation.
//!
//! Each record combines one identifier, one username and one email with the
//! caller's profile images. Records are independent of one another, so
//! duplicate identifiers, usernames or emails across records are possible.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::email::{EmailRules, compose_email};
use crate::error::GenerationError;
use crate::identifier::{IdRules, compose_id};
use crate::record::{ProfileIcon, UserRecord};
use crate::username::{UsernameRules, compose_username};

/// Rules for every part of a generated user record.
///
/// # Example
///
/// ```
/// use user_fixtures::UserRules;
///
/// let rules: UserRules = serde_json::from_str(
///     r#"{"idRules": {"length": 7}, "profileImages": {"small": "s.png"}}"#,
/// )
/// .expect("valid rules");
///
/// assert_eq!(rules.id_rules.length, 7);
/// assert!(rules.id_rules.parse_string);
/// assert_eq!(rules.profile_images.small, "s.png");
/// assert_eq!(rules.profile_images.large, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRules {
    /// Rules for the identifier.
    pub id_rules: IdRules,
    /// Rules for the username.
    pub username_rules: UsernameRules,
    /// Rules for the email address.
    pub email_rules: EmailRules,
    /// Profile images copied into every record.
    pub profile_images: ProfileIcon,
}

impl UserRules {
    /// Rules for the bundled demo: symbols `_ - .`, numbers, usernames of
    /// 4 to 12 characters, three email domains and seven-digit text ids.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            id_rules: IdRules {
                length: 7,
                parse_string: true,
            },
            username_rules: UsernameRules {
                symbols: true,
                allowed_symbols: Some(vec!["_".to_owned(), "-".to_owned(), ".".to_owned()]),
                numbers: true,
                minimum_length: 4,
                maximum_length: 12,
            },
            email_rules: EmailRules {
                domains: vec!["gmail".to_owned(), "yahoo".to_owned(), "example".to_owned()],
            },
            profile_images: ProfileIcon::default(),
        }
    }

    /// Checks the configuration of every part.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error from the identifier or username
    /// rules.
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.id_rules.validate()?;
        self.username_rules.validate()
    }
}

/// Generates one user record.
///
/// # Errors
///
/// Returns [`GenerationError`] if the rules are invalid or a configured pool
/// is empty.
///
/// # Example
///
/// ```
/// use user_fixtures::{UserRules, generate_user, seeded_rng};
///
/// let mut rng = seeded_rng(2026);
/// let user = generate_user(&mut rng, &UserRules::default()).expect("default rules");
///
/// assert!(!user.username.is_empty());
/// assert!(user.email.contains('@'));
/// assert_eq!(user.profile_icon.small, "");
/// ```
pub fn generate_user<R>(rng: &mut R, rules: &UserRules) -> Result<UserRecord, GenerationError>
where
    R: Rng + ?Sized,
{
    rules.validate()?;
    compose_user(rng, rules)
}

/// Generates `amount` user records.
///
/// Validation happens once, before any record is drawn.
///
/// # Errors
///
/// As for [`generate_user`].
///
/// # Example
///
/// ```
/// use user_fixtures::{UserRules, generate_users, seeded_rng};
///
/// let rules = UserRules::demo();
/// let users = generate_users(&mut seeded_rng(1), 3, &rules).expect("demo rules");
/// let again = generate_users(&mut seeded_rng(1), 3, &rules).expect("demo rules");
///
/// assert_eq!(users.len(), 3);
/// assert_eq!(users, again);
/// ```
pub fn generate_users<R>(
    rng: &mut R,
    amount: usize,
    rules: &UserRules,
) -> Result<Vec<UserRecord>, GenerationError>
where
    R: Rng + ?Sized,
{
    rules.validate()?;
    debug!(amount, "generating user records");
    let mut users = Vec::with_capacity(amount);
    for _ in 0..amount {
        users.push(compose_user(rng, rules)?);
    }
    Ok(users)
}

fn compose_user<R>(rng: &mut R, rules: &UserRules) -> Result<UserRecord, GenerationError>
where
    R: Rng + ?Sized,
{
    let id = compose_id(rng, &rules.id_rules);
    let username = compose_username(rng, &rules.username_rules)?;
    let email = compose_email(rng, &rules.email_rules)?;

    Ok(UserRecord {
        id,
        username,
        email,
        profile_icon: rules.profile_images.clone(),
    })
}
