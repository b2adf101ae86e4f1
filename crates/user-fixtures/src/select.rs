//! Uniform selection from pools and token casing.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::GenerationError;

/// Draws one element from `pool`, uniformly at random.
///
/// `pool_name` identifies the pool in the error returned when it is empty.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if `pool` has no elements.
///
/// # Example
///
/// ```
/// use user_fixtures::{choose_one, seeded_rng};
///
/// let mut rng = seeded_rng(7);
/// let drawn = choose_one(&mut rng, &["only"], "example").expect("pool is non-empty");
/// assert_eq!(*drawn, "only");
/// ```
pub fn choose_one<'a, T, R>(
    rng: &mut R,
    pool: &'a [T],
    pool_name: &'static str,
) -> Result<&'a T, GenerationError>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
        .ok_or(GenerationError::EmptyPool { pool: pool_name })
}

/// Draws `count` elements from `pool` independently, with replacement.
///
/// The returned vector preserves draw order and may contain repeats. A
/// `count` of zero draws nothing and succeeds even for an empty pool.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if `pool` is empty and `count` is
/// non-zero.
///
/// # Example
///
/// ```
/// use user_fixtures::{choose_random, seeded_rng};
///
/// let mut rng = seeded_rng(7);
/// let drawn = choose_random(&mut rng, &["a"], 5, "example").expect("pool is non-empty");
/// assert_eq!(drawn, vec![&"a"; 5]);
/// ```
pub fn choose_random<'a, T, R>(
    rng: &mut R,
    pool: &'a [T],
    count: usize,
    pool_name: &'static str,
) -> Result<Vec<&'a T>, GenerationError>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| choose_one(&mut *rng, pool, pool_name))
        .collect()
}

/// Draws `count` string tokens and joins them without a separator.
pub(crate) fn draw_joined<R, S>(
    rng: &mut R,
    pool: &[S],
    count: usize,
    pool_name: &'static str,
) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for token in choose_random(rng, pool, count, pool_name)? {
        joined.push_str(token.as_ref());
    }
    Ok(joined)
}

/// Uppercases the first character of `token`, leaving the rest unchanged.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyToken`] if `token` is empty.
///
/// # Examples
///
/// ```
/// use user_fixtures::capitalize;
///
/// assert_eq!(capitalize("abc").as_deref(), Ok("Abc"));
/// assert_eq!(capitalize("Z").as_deref(), Ok("Z"));
/// assert!(capitalize("").is_err());
/// ```
pub fn capitalize(token: &str) -> Result<String, GenerationError> {
    let mut chars = token.chars();
    let first = chars.next().ok_or(GenerationError::EmptyToken)?;
    Ok(first.to_uppercase().chain(chars).collect())
}
