// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

use serde_json::Value as JSValue;

/// The position of a contributor, exactly as the leaderboard reported it.
///
/// Leaderboards are inconsistent on this field: some send `"1"`, some send `1`.
/// Both are carried through untouched.
#[derive(PartialEq, Debug, Clone)]
pub enum Rank {
    Text(String),
    Number(serde_json::Number),
    /// No rank or a rank that is neither a string nor a number.
    Missing,
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Text(s) => write!(f, "{}", s),
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Missing => Ok(()),
        }
    }
}

/// One entry of `top_100_yappers`, read leniently.
///
/// Nothing is rejected at this level: missing counters are `None`,
/// an unreadable mindshare is NaN.
#[derive(PartialEq, Debug, Clone)]
pub struct RawContributor {
    pub rank: Rank,
    pub username: Option<String>,
    pub mindshare: f64,
    pub tweet_counts: Option<i64>,
    pub total_impressions: Option<i64>,
    pub engagements: EngagementCounters,
}

/// The engagement sub-counters. Absent counters are zero.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct EngagementCounters {
    pub total_retweets: i64,
    pub total_quote_tweets: i64,
    pub total_likes: i64,
    pub total_bookmarks: i64,
    pub total_smart_engagements: i64,
    pub total_community_engagements: i64,
}

impl EngagementCounters {
    /// The exact sum of the six counters. Six `i64` values always fit in an `i128`.
    pub fn total(&self) -> i128 {
        [
            self.total_retweets,
            self.total_quote_tweets,
            self.total_likes,
            self.total_bookmarks,
            self.total_smart_engagements,
            self.total_community_engagements,
        ]
        .iter()
        .map(|&c| i128::from(c))
        .sum()
    }
}

/// The optional headline numbers next to the leaderboard.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct LeaderboardSummary {
    pub total_unique_yappers: Option<i64>,
    pub total_unique_tweets: Option<i64>,
}

// ******** Output data structures *********

/// A contributor, ready to be displayed or exported.
///
/// Rows are never mutated: a new ingest builds a new set of rows.
#[derive(PartialEq, Debug, Clone)]
pub struct ContributorRow {
    pub rank: Rank,
    pub username: String,
    pub mindshare_fraction: f64,
    pub mindshare_percent_text: String,
    pub tweet_count: Option<i64>,
    pub impressions: Option<i64>,
    pub impressions_text: String,
    pub engagements_total: i128,
    pub engagements_text: String,
}

/// The document does not have the `community_mindshare.top_100_yappers` shape.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum FormatError {
    /// No `community_mindshare` object at the top level.
    MissingCommunityMindshare,
    /// `community_mindshare` exists but has no `top_100_yappers` array.
    MissingTopYappers,
}

impl FormatError {
    pub const MESSAGE: &'static str = "Invalid data format: expected an object with a 'community_mindshare' object containing a 'top_100_yappers' array";
}

impl Error for FormatError {}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", FormatError::MESSAGE)
    }
}

pub(crate) fn field<'a>(obj: &'a JSValue, name: &str) -> Option<&'a JSValue> {
    obj.get(name).filter(|v| !v.is_null())
}
