use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::{
    Error,
    consts::{DEBUG, DEFAULT_NOTICE_HOLD_TIME, SEARCH, SHOW_TWEETS_EVERY, TITLE},
    duration::parse_duration,
};

/// The process-wide settings record.
pub static CONFIG: Settings = Settings::new();

/// Returns the process-wide settings record.
pub fn config() -> &'static Settings {
    &CONFIG
}

/// Tweet wall settings
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Enables developer-only behavior in consumers
    pub debug: bool,
    /// Display title of the wall
    pub title: &'static str,
    /// Search query handed to the tweet fetcher
    pub search: &'static str,
    /// Display timings
    pub timings: Timings,
}

/// Display timings, kept as `<integer><unit>` strings
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a notice stays on screen
    pub default_notice_hold_time: &'static str,
    /// Interval between two displayed tweets
    pub show_tweets_every: &'static str,
}

impl Settings {
    /// Build the settings record. Every call returns a value equal to [`CONFIG`].
    pub const fn new() -> Self {
        Self {
            debug: DEBUG,
            title: TITLE,
            search: SEARCH,
            timings: Timings {
                default_notice_hold_time: DEFAULT_NOTICE_HOLD_TIME,
                show_tweets_every: SHOW_TWEETS_EVERY,
            },
        }
    }

    /// Whether consumers should enable developer-only behavior
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Build a search request URL by appending the query as the `q` parameter.
    ///
    /// Existing query parameters on `endpoint` are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid absolute URL.
    pub fn search_url(&self, endpoint: &str) -> Result<Url, Error> {
        let url = Url::parse_with_params(endpoint, &[("q", self.search)])?;
        debug!("Search URL: {}", url);
        Ok(url)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Timings {
    /// Parsed form of `default_notice_hold_time`
    pub fn notice_hold_time(&self) -> Result<Duration, Error> {
        parse_duration(self.default_notice_hold_time)
    }

    /// Parsed form of `show_tweets_every`
    pub fn tweet_interval(&self) -> Result<Duration, Error> {
        parse_duration(self.show_tweets_every)
    }
}
