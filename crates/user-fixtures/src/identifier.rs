//! Numeric identifier generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use crate::record::GeneratedId;

/// Default number of decimal digits in an identifier.
pub const DEFAULT_ID_LENGTH: u32 = 9;

/// Largest digit count whose whole range fits exactly in a `u64`.
pub const MAX_ID_LENGTH: u32 = 19;

/// Rules confining generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdRules {
    /// Number of decimal digits, in `1..=19`.
    pub length: u32,
    /// Render the identifier as a decimal string instead of a number.
    pub parse_string: bool,
}

impl Default for IdRules {
    fn default() -> Self {
        Self {
            length: DEFAULT_ID_LENGTH,
            parse_string: true,
        }
    }
}

impl IdRules {
    /// Checks that the length can be represented exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::IdLengthOutOfRange`] for a length of zero
    /// or above [`MAX_ID_LENGTH`].
    pub const fn validate(&self) -> Result<(), GenerationError> {
        if self.length == 0 || self.length > MAX_ID_LENGTH {
            return Err(GenerationError::IdLengthOutOfRange {
                length: self.length,
                max: MAX_ID_LENGTH,
            });
        }
        Ok(())
    }

    /// Inclusive bounds `[10^(length-1), 10^length - 1]` for validated rules.
    const fn bounds(&self) -> (u64, u64) {
        let lower = 10_u64.pow(self.length - 1);
        let upper = 10_u64.pow(self.length) - 1;
        (lower, upper)
    }
}

/// Generates one identifier with exactly `rules.length` digits.
///
/// # Errors
///
/// Returns [`GenerationError::IdLengthOutOfRange`] if the length is outside
/// `1..=19`.
///
/// # Example
///
/// ```
/// use user_fixtures::{GeneratedId, IdRules, random_id, seeded_rng};
///
/// let mut rng = seeded_rng(3);
/// let rules = IdRules { length: 7, parse_string: true };
/// let GeneratedId::Text(id) = random_id(&mut rng, &rules).expect("valid length") else {
///     panic!("expected a text identifier");
/// };
/// assert_eq!(id.len(), 7);
/// ```
pub fn random_id<R>(rng: &mut R, rules: &IdRules) -> Result<GeneratedId, GenerationError>
where
    R: Rng + ?Sized,
{
    rules.validate()?;
    Ok(compose_id(rng, rules))
}

/// Generates `amount` identifiers. Duplicates are possible.
///
/// # Errors
///
/// As for [`random_id`], checked even when `amount` is zero.
pub fn random_ids<R>(
    rng: &mut R,
    amount: usize,
    rules: &IdRules,
) -> Result<Vec<GeneratedId>, GenerationError>
where
    R: Rng + ?Sized,
{
    rules.validate()?;
    debug!(amount, length = rules.length, "generating identifiers");
    Ok((0..amount).map(|_| compose_id(&mut *rng, rules)).collect())
}

/// Draws one identifier from already validated rules.
pub(crate) fn compose_id<R>(rng: &mut R, rules: &IdRules) -> GeneratedId
where
    R: Rng + ?Sized,
{
    let (lower, upper) = rules.bounds();
    let value = rng.random_range(lower..=upper);
    if rules.parse_string {
        GeneratedId::Text(value.to_string())
    } else {
        GeneratedId::Numeric(value)
    }
}
