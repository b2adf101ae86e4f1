//! CLI support for generating fixture records.
//!
//! The `user-fixtures` binary delegates to these functions so the flow can be
//! exercised in tests without spawning a subprocess.

mod error;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use tracing::info;

use crate::email::EmailRules;
use crate::identifier::{DEFAULT_ID_LENGTH, IdRules};
use crate::record::{ProfileIcon, UserRecord};
use crate::rng::{seeded_rng, unseeded_rng};
use crate::user::{UserRules, generate_users};
use crate::username::{DEFAULT_MAXIMUM_LENGTH, DEFAULT_MINIMUM_LENGTH, UsernameRules};

pub use error::CliError;

/// Number of records generated when `--count` is not given.
pub const DEFAULT_COUNT: usize = 3;

/// Rule options that `--demo` replaces.
const DEMO_EXCLUSIVE: [&str; 8] = [
    "id_length",
    "numeric_ids",
    "symbols",
    "allowed_symbols",
    "no_numbers",
    "min_length",
    "max_length",
    "domains",
];

/// Parsed options for the fixture CLI.
///
/// Every value option except `--allowed-symbols` can also be set through a
/// `USER_FIXTURES_*` environment variable.
///
/// # Example
///
/// ```
/// use user_fixtures::cli::parse_args;
///
/// let options = parse_args(["user-fixtures", "--count", "5", "--seed", "7"]).expect("parse");
///
/// assert_eq!(options.count, 5);
/// assert_eq!(options.seed, Some(7));
/// ```
#[derive(Debug, Clone, Parser)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag maps to a distinct CLI switch"
)]
#[command(
    name = "user-fixtures",
    about = "Generate random user fixture records as JSON",
    version
)]
pub struct Options {
    /// Number of user records to generate.
    #[arg(short = 'n', long, env = "USER_FIXTURES_COUNT", default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for reproducible output; random when omitted.
    #[arg(long, env = "USER_FIXTURES_SEED")]
    pub seed: Option<u64>,

    /// Use the bundled demo rules instead of the individual rule flags.
    ///
    /// Rule values picked up from the environment are ignored.
    #[arg(long)]
    pub demo: bool,

    /// Number of decimal digits in each identifier.
    #[arg(long, env = "USER_FIXTURES_ID_LENGTH", default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: u32,

    /// Emit identifiers as JSON numbers instead of strings.
    #[arg(long)]
    pub numeric_ids: bool,

    /// Splice symbols into usernames.
    #[arg(long)]
    pub symbols: bool,

    /// Comma-separated symbols to draw from when `--symbols` is set.
    #[arg(long, value_delimiter = ',', requires = "symbols")]
    pub allowed_symbols: Option<Vec<String>>,

    /// Leave the three-digit suffix off usernames.
    #[arg(long)]
    pub no_numbers: bool,

    /// Shortest allowed username.
    #[arg(long, env = "USER_FIXTURES_MIN_LENGTH", default_value_t = DEFAULT_MINIMUM_LENGTH)]
    pub min_length: usize,

    /// Longest allowed username.
    #[arg(long, env = "USER_FIXTURES_MAX_LENGTH", default_value_t = DEFAULT_MAXIMUM_LENGTH)]
    pub max_length: usize,

    /// Comma-separated email domain labels, without `.com`.
    #[arg(
        long,
        env = "USER_FIXTURES_DOMAINS",
        value_delimiter = ',',
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub domains: Option<Vec<String>>,

    /// Small profile image URL.
    #[arg(long, env = "USER_FIXTURES_SMALL_ICON")]
    pub small_icon: Option<String>,

    /// Medium profile image URL.
    #[arg(long, env = "USER_FIXTURES_MEDIUM_ICON")]
    pub medium_icon: Option<String>,

    /// Large profile image URL.
    #[arg(long, env = "USER_FIXTURES_LARGE_ICON")]
    pub large_icon: Option<String>,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Parses CLI arguments, including the binary name, into [`Options`].
///
/// `--demo` conflicts with rule options given on the command line; rule
/// values from the environment or defaults are ignored under `--demo`.
///
/// # Errors
///
/// Returns a [`clap::Error`] for invalid arguments or a demo conflict.
pub fn parse_args<I, T>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Options::command();
    let matches = command.try_get_matches_from_mut(args)?;
    if let Some(conflict) = demo_conflict(&matches) {
        return Err(command.error(
            ErrorKind::ArgumentConflict,
            format!(
                "the argument '--demo' cannot be used with '--{}'",
                conflict.replace('_', "-")
            ),
        ));
    }
    Options::from_arg_matches(&matches)
}

fn demo_conflict(matches: &ArgMatches) -> Option<&'static str> {
    if !matches.get_flag("demo") {
        return None;
    }
    DEMO_EXCLUSIVE
        .into_iter()
        .find(|id| matches.value_source(id) == Some(ValueSource::CommandLine))
}

impl Options {
    /// Builds the generation rules described by these options.
    ///
    /// Profile icons apply to demo rules as well.
    #[must_use]
    pub fn rules(&self) -> UserRules {
        let profile_images = ProfileIcon {
            small: self.small_icon.clone().unwrap_or_default(),
            medium: self.medium_icon.clone().unwrap_or_default(),
            large: self.large_icon.clone().unwrap_or_default(),
        };
        if self.demo {
            return UserRules {
                profile_images,
                ..UserRules::demo()
            };
        }

        UserRules {
            id_rules: IdRules {
                length: self.id_length,
                parse_string: !self.numeric_ids,
            },
            username_rules: UsernameRules {
                symbols: self.symbols,
                allowed_symbols: self.allowed_symbols.clone(),
                numbers: !self.no_numbers,
                minimum_length: self.min_length,
                maximum_length: self.max_length,
            },
            email_rules: self
                .domains
                .clone()
                .map_or_else(EmailRules::default, |domains| EmailRules { domains }),
            profile_images,
        }
    }
}

/// Generates records for `options` and renders them as a JSON array.
///
/// # Errors
///
/// Returns [`CliError`] when the rules are invalid or serialization fails.
///
/// # Example
///
/// ```
/// use user_fixtures::cli::{execute, parse_args};
///
/// let options = parse_args(["user-fixtures", "--seed", "1", "--compact"]).expect("parse");
/// let json = execute(&options).expect("execute");
///
/// assert!(json.starts_with('['));
/// ```
pub fn execute(options: &Options) -> Result<String, CliError> {
    let rules = options.rules();
    let mut rng = options.seed.map_or_else(unseeded_rng, seeded_rng);
    let users = generate_users(&mut rng, options.count, &rules)?;
    info!(count = users.len(), demo = options.demo, "user fixtures generated");
    render_json(&users, options.compact)
}

/// Serializes records as a JSON array.
///
/// # Errors
///
/// Returns [`CliError::Serialize`] if serialization fails.
pub fn render_json(users: &[UserRecord], compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(users)
    } else {
        serde_json::to_string_pretty(users)
    };
    rendered.map_err(|err| CliError::Serialize {
        message: err.to_string(),
    })
}

/// Writes `text` and a trailing newline to stdout.
///
/// # Errors
///
/// Returns [`CliError::Stdout`] if stdout cannot be written.
pub fn write_stdout(text: &str) -> Result<(), CliError> {
    writeln!(io::stdout().lock(), "{text}").map_err(|err| CliError::Stdout {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
