//! Random synthetic user profile data for seeding demos, tests and fixtures.
//!
//! This crate draws usernames, email addresses, numeric identifiers and
//! composite user records from static word pools and numeric ranges. It is
//! stateless: every generator takes the random source as an argument, so a
//! seeded source gives reproducible fixtures.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Uniform selection with replacement from word pools
//! - Usernames confined by symbol, number and length rules
//! - Email addresses over configurable domains
//! - Identifiers with an exact number of decimal digits
//! - User records assembled from all of the above
//!
//! Each generator comes as a singular form returning one value and a plural
//! form returning a `Vec` of exactly the requested amount. Nothing is
//! de-duplicated across calls.
//!
//! # Example
//!
//! ```
//! use user_fixtures::{UserRules, generate_users, seeded_rng};
//!
//! let mut rng = seeded_rng(42);
//! let users = generate_users(&mut rng, 3, &UserRules::default()).expect("default rules");
//!
//! assert_eq!(users.len(), 3);
//! ```

pub mod cli;
mod email;
mod error;
mod identifier;
pub mod lexicon;
mod record;
mod rng;
mod select;
mod user;
mod username;

pub use email::{EmailRules, random_email, random_emails};
pub use error::GenerationError;
pub use identifier::{DEFAULT_ID_LENGTH, IdRules, MAX_ID_LENGTH, random_id, random_ids};
pub use record::{GeneratedId, ProfileIcon, UserRecord};
pub use rng::{seeded_rng, unseeded_rng};
pub use select::{capitalize, choose_one, choose_random};
pub use user::{UserRules, generate_user, generate_users};
pub use username::{
    DEFAULT_MAXIMUM_LENGTH, DEFAULT_MINIMUM_LENGTH, UsernameRules, random_username,
    random_usernames,
};
