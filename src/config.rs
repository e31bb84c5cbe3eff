use crate::tools::env_args::retrieve_arg_value;
use crate::tools::log_message_and_return;
use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use derive_getters::Getters;
use std::fmt::Write;

const ALLOWED_DURATIONS_ARG: [&str; 2] = ["-d", "--allowed-durations"];
const SEED_ARG: [&str; 2] = ["-s", "--seed"];
const DATE_FORMAT_ARG: &str = "--date-format";
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Settings read from the command line. Every arg is optional.
#[derive(Debug, Getters, PartialEq)]
pub struct AppConfig {
    /// Durations (in months) offered when adding a member. Empty means any.
    allowed_durations: Vec<i32>,
    /// Seed for membership ids generation, for reproducible runs.
    seed: Option<u64>,
    date_format: String,
}

impl AppConfig {
    pub fn new(allowed_durations: Vec<i32>, seed: Option<u64>, date_format: String) -> Self {
        Self {
            allowed_durations,
            seed,
            date_format,
        }
    }

    pub fn from_args() -> Self {
        Self {
            allowed_durations: retrieve_allowed_durations(),
            seed: retrieve_seed(),
            date_format: retrieve_date_format(),
        }
    }

    pub fn is_duration_allowed(&self, duration_months: i32) -> bool {
        self.allowed_durations.is_empty() || self.allowed_durations.contains(&duration_months)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(vec![], None, DEFAULT_DATE_FORMAT.to_owned())
    }
}

// region Retrieve args
fn retrieve_allowed_durations() -> Vec<i32> {
    let Some(durations) = retrieve_arg_value(Vec::from(ALLOWED_DURATIONS_ARG)) else {
        return vec![];
    };

    durations
        .split(',')
        .map(str::trim)
        .filter(|duration| !duration.is_empty())
        .filter_map(|duration| {
            duration
                .parse::<i32>()
                .map_err(log_message_and_return(
                    &format!("Ignoring allowed duration [duration: {duration}]"),
                    (),
                ))
                .ok()
        })
        .collect()
}

fn retrieve_seed() -> Option<u64> {
    retrieve_arg_value(Vec::from(SEED_ARG)).and_then(|seed| {
        seed.parse::<u64>()
            .map_err(log_message_and_return(
                &format!("Ignoring seed, it should be a positive integer [seed: {seed}]"),
                (),
            ))
            .ok()
    })
}

fn retrieve_date_format() -> String {
    match retrieve_arg_value(DATE_FORMAT_ARG) {
        Some(date_format) if is_valid_date_format(&date_format) => date_format,
        Some(date_format) => {
            warn!("Invalid date format, using default one [format: {date_format}]");
            DEFAULT_DATE_FORMAT.to_owned()
        }
        None => DEFAULT_DATE_FORMAT.to_owned(),
    }
}
// endregion

/// Expiration dates carry no time zone: a format is valid only if a naive date-time
/// can be rendered with it (`%z` or `%Z` can't).
fn is_valid_date_format(date_format: &str) -> bool {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return false;
    }

    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDateTime::MIN.format(date_format)).is_ok()
}
