//! Username generation.
//!
//! A username is a capitalized adjective, an optional underscore, a
//! capitalized name, an optional symbol and an optional three-digit suffix,
//! then padded with random letters or truncated to fit the length bounds.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use crate::lexicon::{ADJECTIVES, DIGITS, LETTERS, NAMES, SYMBOLS};
use crate::select::{capitalize, choose_one, draw_joined};

/// Default minimum username length.
pub const DEFAULT_MINIMUM_LENGTH: usize = 6;

/// Default maximum username length.
pub const DEFAULT_MAXIMUM_LENGTH: usize = 16;

/// Number of digits in the numeric suffix.
const NUMBER_SUFFIX_DIGITS: usize = 3;

/// Chance of an underscore after the adjective (30%).
const UNDERSCORE_NUMERATOR: u32 = 3;

/// Denominator for the underscore chance.
const UNDERSCORE_DENOMINATOR: u32 = 10;

/// Rules confining generated usernames.
///
/// Fields left out of a deserialized object keep their defaults, so
/// `{"symbols": true}` only switches symbols on.
///
/// # Example
///
/// ```
/// use user_fixtures::UsernameRules;
///
/// let rules = UsernameRules {
///     symbols: true,
///     ..UsernameRules::default()
/// };
/// assert!(rules.numbers);
/// assert_eq!(rules.maximum_length, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsernameRules {
    /// Splice symbols into the username.
    pub symbols: bool,
    /// Symbols to draw from; `None` uses the default `_ . @ -` pool.
    pub allowed_symbols: Option<Vec<String>>,
    /// Append a three-digit numeric suffix.
    pub numbers: bool,
    /// Shortest allowed username, in characters.
    pub minimum_length: usize,
    /// Longest allowed username, in characters.
    pub maximum_length: usize,
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self {
            symbols: false,
            allowed_symbols: None,
            numbers: true,
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
        }
    }
}

impl UsernameRules {
    /// Checks that the length bounds are ordered.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLengthBounds`] when
    /// `maximum_length < minimum_length`.
    pub const fn validate(&self) -> Result<(), GenerationError> {
        if self.maximum_length < self.minimum_length {
            return Err(GenerationError::InvalidLengthBounds {
                minimum: self.minimum_length,
                maximum: self.maximum_length,
            });
        }
        Ok(())
    }
}

/// Generates one username.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidLengthBounds`] before drawing anything
/// if the bounds are inverted, or [`GenerationError::EmptyPool`] if symbols
/// are enabled with an empty `allowed_symbols` list.
///
/// # Example
///
/// ```
/// use user_fixtures::{UsernameRules, random_username, seeded_rng};
///
/// let mut rng = seeded_rng(42);
/// let rules = UsernameRules::default();
/// let username = random_username(&mut rng, &rules).expect("valid rules");
///
/// let length = username.chars().count();
/// assert!((6..=16).contains(&length));
/// ```
pub fn random_username<R>(rng: &mut R, rules: &UsernameRules) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    rules.validate()?;
    compose_username(rng, rules)
}

/// Generates `amount` usernames.
///
/// Usernames are drawn independently; duplicates are possible.
///
/// # Errors
///
/// As for [`random_username`]. The bounds check runs even when `amount` is
/// zero.
pub fn random_usernames<R>(
    rng: &mut R,
    amount: usize,
    rules: &UsernameRules,
) -> Result<Vec<String>, GenerationError>
where
    R: Rng + ?Sized,
{
    rules.validate()?;
    debug!(
        amount,
        symbols = rules.symbols,
        numbers = rules.numbers,
        minimum_length = rules.minimum_length,
        maximum_length = rules.maximum_length,
        "generating usernames"
    );
    (0..amount)
        .map(|_| compose_username(&mut *rng, rules))
        .collect()
}

/// Builds one username from already validated rules.
pub(crate) fn compose_username<R>(
    rng: &mut R,
    rules: &UsernameRules,
) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    let mut username = capitalize(choose_one(rng, ADJECTIVES, "adjective")?)?;

    if rules.symbols && rng.random_ratio(UNDERSCORE_NUMERATOR, UNDERSCORE_DENOMINATOR) {
        username.push('_');
    }

    username.push_str(&capitalize(choose_one(rng, NAMES, "name")?)?);

    if rules.symbols {
        username.push_str(draw_symbol(rng, rules.allowed_symbols.as_deref())?);
    }

    if rules.numbers {
        username.push_str(&draw_joined(rng, DIGITS, NUMBER_SUFFIX_DIGITS, "digit")?);
    }

    fit_length(rng, username, rules.minimum_length, rules.maximum_length)
}

fn draw_symbol<'a, R>(
    rng: &mut R,
    allowed: Option<&'a [String]>,
) -> Result<&'a str, GenerationError>
where
    R: Rng + ?Sized,
{
    match allowed {
        Some(pool) => choose_one(rng, pool, "symbol").map(String::as_str),
        None => choose_one(rng, SYMBOLS, "symbol").copied(),
    }
}

/// Pads with random letters up to `minimum` or truncates down to `maximum`.
///
/// Lengths count characters, and truncation keeps whole characters.
fn fit_length<R>(
    rng: &mut R,
    mut username: String,
    minimum: usize,
    maximum: usize,
) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    let length = username.chars().count();
    if length < minimum {
        username.push_str(&draw_joined(rng, LETTERS, minimum - length, "letter")?);
        Ok(username)
    } else if length > maximum {
        Ok(username.chars().take(maximum).collect())
    } else {
        Ok(username)
    }
}
