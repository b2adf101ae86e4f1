//! Email address generation.
//!
//! Addresses take the form `<adjective><adjective>@<domain>.com`; nothing
//! beyond that construction is validated.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use crate::lexicon::{ADJECTIVES, EMAIL_DOMAINS};
use crate::select::{choose_one, draw_joined};

/// Adjectives joined into the local part.
const LOCAL_PART_WORDS: usize = 2;

/// Rules confining generated email addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailRules {
    /// Domain labels to draw from, without the `.com` suffix.
    pub domains: Vec<String>,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self {
            domains: EMAIL_DOMAINS.iter().map(|&domain| domain.to_owned()).collect(),
        }
    }
}

/// Generates one email address.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if `rules.domains` is empty.
///
/// # Example
///
/// ```
/// use user_fixtures::{EmailRules, random_email, seeded_rng};
///
/// let mut rng = seeded_rng(11);
/// let rules = EmailRules { domains: vec!["example".to_owned()] };
/// let email = random_email(&mut rng, &rules).expect("domains are set");
///
/// assert!(email.ends_with("@example.com"));
/// ```
pub fn random_email<R>(rng: &mut R, rules: &EmailRules) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    compose_email(rng, rules)
}

/// Generates `amount` email addresses. Duplicates are possible.
///
/// # Errors
///
/// As for [`random_email`].
pub fn random_emails<R>(
    rng: &mut R,
    amount: usize,
    rules: &EmailRules,
) -> Result<Vec<String>, GenerationError>
where
    R: Rng + ?Sized,
{
    debug!(amount, domains = rules.domains.len(), "generating emails");
    (0..amount)
        .map(|_| compose_email(&mut *rng, rules))
        .collect()
}

pub(crate) fn compose_email<R>(rng: &mut R, rules: &EmailRules) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    let local = draw_joined(rng, ADJECTIVES, LOCAL_PART_WORDS, "adjective")?;
    let domain = choose_one(rng, &rules.domains, "domain")?;
    Ok(format!("{local}@{domain}.com"))
}
