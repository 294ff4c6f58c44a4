//! Command-line argument parsing for the cinematch CLI.

use std::fmt;

use crate::config::ClientConfig;
use crate::models::{RecommendFilters, RecommendRequest};

/// Options for a recommendation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendArgs {
    pub query: String,
    pub url: Option<String>,
    pub session_id: Option<String>,
    pub max_results: Option<u8>,
    pub language: Option<String>,
    pub min_year: Option<i32>,
    pub min_rating: Option<f64>,
    /// Use the buffered endpoint instead of the event stream
    pub no_stream: bool,
}

impl RecommendArgs {
    /// Apply the command-line overrides to `config`.
    pub fn apply_to(&self, config: ClientConfig) -> ClientConfig {
        let mut config = config;
        if let Some(url) = &self.url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(n) = self.max_results {
            config = config.with_max_results(n);
        }
        if let Some(language) = &self.language {
            config = config.with_language(language.as_str());
        }
        config
    }

    /// Build the request, starting from `config`'s defaults.
    pub fn to_request(&self, config: &ClientConfig) -> RecommendRequest {
        config
            .request(self.query.as_str())
            .with_session(self.session_id.clone())
            .with_filters(RecommendFilters {
                min_year: self.min_year,
                min_rating: self.min_rating,
            })
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Query the service's health endpoint
    Health { url: Option<String> },
    /// Ask for recommendations
    Recommend(RecommendArgs),
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    /// A flag that needs a value was last
    MissingValue(String),
    /// A flag value could not be parsed
    InvalidValue { flag: String, value: String },
    /// Unrecognised flag
    UnknownFlag(String),
    /// No query words given
    MissingQuery,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue(flag) => write!(f, "{} requires a value", flag),
            ArgsError::InvalidValue { flag, value } => {
                write!(f, "invalid value '{}' for {}", value, flag)
            }
            ArgsError::UnknownFlag(flag) => write!(f, "unknown flag: {}", flag),
            ArgsError::MissingQuery => write!(f, "no query given"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
usage: cinematch [OPTIONS] <query...>

options:
  --url URL          API base URL (default: $CINEMATCH_API_URL or http://localhost:8000)
  --session ID       continue a previous conversation
  --max N            number of results, 1-10
  --lang L           narration language (es, en, ...)
  --min-year Y       only films released in Y or later
  --min-rating R     only films rated R or higher
  --no-stream        wait for the full answer instead of streaming
  --health           check the service and exit
  -V, --version      print version
  -h, --help         print this help";

fn value<I>(flag: &str, args: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parsed<T, I>(flag: &str, args: &mut I) -> Result<T, ArgsError>
where
    T: std::str::FromStr,
    I: Iterator<Item = String>,
{
    let raw = value(flag, args)?;
    raw.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}

/// Parse command-line arguments and return the command to execute.
///
/// # Examples
///
/// ```
/// use cinematch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["cinematch".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    let mut opts = RecommendArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut health = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--health" => health = true,
            "--no-stream" => opts.no_stream = true,
            "--url" => opts.url = Some(value(&arg, &mut args)?),
            "--session" => opts.session_id = Some(value(&arg, &mut args)?),
            "--lang" => opts.language = Some(value(&arg, &mut args)?),
            "--max" => opts.max_results = Some(parsed(&arg, &mut args)?),
            "--min-year" => opts.min_year = Some(parsed(&arg, &mut args)?),
            "--min-rating" => opts.min_rating = Some(parsed(&arg, &mut args)?),
            "--" => words.extend(args.by_ref()),
            flag if flag.starts_with("--") => return Err(ArgsError::UnknownFlag(flag.to_string())),
            _ => words.push(arg),
        }
    }

    if health {
        return Ok(CliCommand::Health { url: opts.url });
    }

    opts.query = words.join(" ");
    if opts.query.trim().is_empty() {
        return Err(ArgsError::MissingQuery);
    }
    Ok(CliCommand::Recommend(opts))
}
