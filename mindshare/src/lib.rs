mod config;
pub mod format;
pub mod manual;

use log::{debug, warn};
use serde_json::Value as JSValue;

pub use crate::config::*;
use crate::config::field;
use crate::format::{group_digits, grouped_count_text, percent_text};

// **** Shape validation ****

/// Returns the `community_mindshare.top_100_yappers` array of a document.
///
/// This is the only structural check of the whole pipeline. The elements
/// of the array are returned as they are: malformed entries are dealt with
/// by [`normalize`].
///
/// ```
/// use serde_json::json;
/// use mindshare::{extract_contributors, FormatError};
///
/// let doc = json!({"community_mindshare": {"top_100_yappers": []}});
/// assert!(extract_contributors(&doc)?.is_empty());
///
/// let bad = json!({"community_mindshare": {}});
/// assert_eq!(extract_contributors(&bad), Err(FormatError::MissingTopYappers));
/// # Ok::<(), FormatError>(())
/// ```
pub fn extract_contributors(document: &JSValue) -> Result<&[JSValue], FormatError> {
    let community = document
        .get("community_mindshare")
        .filter(|v| v.is_object())
        .ok_or(FormatError::MissingCommunityMindshare)?;
    let yappers = community
        .get("top_100_yappers")
        .and_then(|v| v.as_array())
        .ok_or(FormatError::MissingTopYappers)?;
    debug!("extract_contributors: {} entries", yappers.len());
    Ok(yappers.as_slice())
}

/// Reads the optional headline numbers. Never fails.
pub fn read_summary(document: &JSValue) -> LeaderboardSummary {
    let community = document.get("community_mindshare");
    let get = |name: &str| community.and_then(|c| field(c, name)).and_then(read_js_int);
    LeaderboardSummary {
        total_unique_yappers: get("total_unique_yappers"),
        total_unique_tweets: get("total_unique_tweets"),
    }
}

// **** Reading the raw entries ****

fn read_js_int(x: &JSValue) -> Option<i64> {
    match x {
        JSValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        JSValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn read_js_fraction(x: Option<&JSValue>) -> f64 {
    match x {
        Some(JSValue::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(JSValue::String(s)) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn read_rank(x: Option<&JSValue>) -> Rank {
    match x {
        Some(JSValue::String(s)) => Rank::Text(s.clone()),
        Some(JSValue::Number(n)) => Rank::Number(n.clone()),
        _ => Rank::Missing,
    }
}

fn read_engagements(entry: &JSValue) -> EngagementCounters {
    let get = |name: &str| -> i64 {
        match field(entry, name) {
            None => 0,
            Some(v) => read_js_int(v).unwrap_or_else(|| {
                warn!("counting {} as 0: not an integer: {}", name, v);
                0
            }),
        }
    };
    EngagementCounters {
        total_retweets: get("total_retweets"),
        total_quote_tweets: get("total_quote_tweets"),
        total_likes: get("total_likes"),
        total_bookmarks: get("total_bookmarks"),
        total_smart_engagements: get("total_smart_engagements"),
        total_community_engagements: get("total_community_engagements"),
    }
}

/// Reads one leaderboard entry. Any JSON value is accepted.
pub fn read_contributor(entry: &JSValue) -> RawContributor {
    RawContributor {
        rank: read_rank(field(entry, "rank")),
        username: field(entry, "username").map(|v| match v {
            JSValue::String(s) => s.clone(),
            other => other.to_string(),
        }),
        mindshare: read_js_fraction(field(entry, "mindshare")),
        tweet_counts: field(entry, "tweet_counts").and_then(read_js_int),
        total_impressions: field(entry, "total_impressions").and_then(read_js_int),
        engagements: read_engagements(entry),
    }
}

// **** Normalization ****

impl From<RawContributor> for ContributorRow {
    fn from(raw: RawContributor) -> ContributorRow {
        let engagements_total = raw.engagements.total();
        ContributorRow {
            rank: raw.rank,
            username: raw.username.unwrap_or_default(),
            mindshare_fraction: raw.mindshare,
            mindshare_percent_text: percent_text(raw.mindshare),
            tweet_count: raw.tweet_counts,
            impressions: raw.total_impressions,
            impressions_text: grouped_count_text(raw.total_impressions),
            engagements_total,
            engagements_text: group_digits(engagements_total),
        }
    }
}

/// Turns the raw leaderboard entries into display rows.
///
/// The output has the same length and order as the input. Nothing is
/// sorted, filtered or deduplicated.
pub fn normalize(entries: &[JSValue]) -> Vec<ContributorRow> {
    let rows: Vec<ContributorRow> = entries
        .iter()
        .map(|e| ContributorRow::from(read_contributor(e)))
        .collect();
    debug!("normalize: {} rows", rows.len());
    rows
}

/// Validates the document and normalizes its leaderboard in one step.
pub fn normalize_document(document: &JSValue) -> Result<Vec<ContributorRow>, FormatError> {
    extract_contributors(document).map(normalize)
}

// **** Magnitude bars ****

/// The largest mindshare fraction. NaN if any fraction is NaN.
pub fn max_mindshare(rows: &[ContributorRow]) -> Option<f64> {
    rows.iter().map(|r| r.mindshare_fraction).reduce(|acc, x| {
        if acc.is_nan() || x.is_nan() {
            f64::NAN
        } else {
            acc.max(x)
        }
    })
}

/// The width of the bar of each row, in percent of the largest mindshare.
///
/// The row(s) holding the maximum get exactly 100. There is no width for an
/// empty leaderboard, so `None` is returned.
pub fn bar_widths(rows: &[ContributorRow]) -> Option<Vec<f64>> {
    let max = max_mindshare(rows)?;
    Some(
        rows.iter()
            .map(|r| (r.mindshare_fraction / max) * 100.0)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn demo() -> JSValue {
        json!({
            "community_mindshare": {
                "total_unique_yappers": 1361,
                "total_unique_tweets": 5205,
                "top_100_yappers": [
                    {
                        "user_id": "1739107604931166208",
                        "rank": "1",
                        "username": "Crypto_Zh0u",
                        "mindshare": 0.07295892783565214,
                        "tweet_counts": 79,
                        "total_impressions": 52400,
                        "total_retweets": 139,
                        "total_quote_tweets": 36,
                        "total_likes": 1337,
                        "total_bookmarks": 40,
                        "total_community_engagements": 194
                    },
                    {
                        "rank": 2,
                        "username": "CryptoUser",
                        "mindshare": "0.05295892783565214",
                        "tweet_counts": 45,
                        "total_impressions": 35400,
                        "total_likes": 937
                    },
                    {
                        "rank": "3",
                        "username": "TokenTrader",
                        "mindshare": 0.02295892783565214,
                        "tweet_counts": 30,
                        "total_impressions": 15400,
                        "total_retweets": 49,
                        "total_smart_engagements": 7
                    }
                ]
            }
        })
    }

    fn row_with(fraction: f64) -> ContributorRow {
        ContributorRow::from(read_contributor(&json!({ "mindshare": fraction })))
    }

    #[test]
    fn shape_rejects_missing_paths() {
        init();
        assert_eq!(
            extract_contributors(&json!({})),
            Err(FormatError::MissingCommunityMindshare)
        );
        assert_eq!(
            extract_contributors(&json!({"community_mindshare": {}})),
            Err(FormatError::MissingTopYappers)
        );
        assert_eq!(
            extract_contributors(&json!({"community_mindshare": {"top_100_yappers": {}}})),
            Err(FormatError::MissingTopYappers)
        );
        assert_eq!(
            extract_contributors(&json!({"community_mindshare": []})),
            Err(FormatError::MissingCommunityMindshare)
        );
        assert_eq!(
            extract_contributors(&json!([1, 2])),
            Err(FormatError::MissingCommunityMindshare)
        );
    }

    #[test]
    fn format_error_names_both_segments() {
        let msg = FormatError::MissingTopYappers.to_string();
        assert!(msg.contains("community_mindshare"));
        assert!(msg.contains("top_100_yappers"));
        assert_eq!(msg, FormatError::MissingCommunityMindshare.to_string());
    }

    #[test]
    fn empty_leaderboard() {
        let doc = json!({"community_mindshare": {"top_100_yappers": []}});
        let rows = normalize_document(&doc).unwrap();
        assert!(rows.is_empty());
        assert_eq!(bar_widths(&rows), None);
    }

    #[test]
    fn normalize_keeps_length_and_order() {
        init();
        let rows = normalize_document(&demo()).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["Crypto_Zh0u", "CryptoUser", "TokenTrader"]);
        assert_eq!(rows[1].rank, Rank::Number(2u64.into()));
        assert_eq!(rows[0].rank.to_string(), "1");
        assert_eq!(rows[1].rank.to_string(), "2");
    }

    #[test]
    fn normalize_does_not_sort() {
        let entries = vec![
            json!({"rank": "3", "username": "third", "mindshare": 0.01}),
            json!({"rank": "1", "username": "first", "mindshare": 0.5}),
            json!({"rank": "2", "username": "second", "mindshare": 0.2}),
        ];
        let rows = normalize(&entries);
        let ranks: Vec<String> = rows.iter().map(|r| r.rank.to_string()).collect();
        assert_eq!(ranks, vec!["3", "1", "2"]);
        let names: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
        let fractions: Vec<f64> = rows.iter().map(|r| r.mindshare_fraction).collect();
        assert_eq!(fractions, vec![0.01, 0.5, 0.2]);
    }

    #[test]
    fn duplicates_pass_through() {
        let entries = vec![
            json!({"rank": "1", "username": "same", "mindshare": 0.1}),
            json!({"rank": "1", "username": "same", "mindshare": 0.1}),
        ];
        let rows = normalize(&entries);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn first_row_fields() {
        let rows = normalize_document(&demo()).unwrap();
        let r = &rows[0];
        assert_eq!(r.mindshare_percent_text, "7.2959%");
        assert_eq!(r.mindshare_fraction, 0.07295892783565214);
        assert_eq!(r.tweet_count, Some(79));
        assert_eq!(r.impressions, Some(52400));
        assert_eq!(r.impressions_text, "52,400");
        assert_eq!(r.engagements_total, 1746);
        assert_eq!(r.engagements_text, "1,746");
    }

    #[test]
    fn engagements_default_to_zero() {
        let rows = normalize_document(&demo()).unwrap();
        assert_eq!(rows[1].engagements_total, 937);
        assert_eq!(rows[2].engagements_total, 56);
        let bare = normalize(&[json!({"username": "nobody"})]);
        assert_eq!(bare[0].engagements_total, 0);
        assert_eq!(bare[0].engagements_text, "0");
    }

    #[test]
    fn engagement_counters_ignore_garbage() {
        init();
        let rows = normalize(&[json!({
            "total_likes": "12",
            "total_retweets": null,
            "total_bookmarks": "many",
            "total_quote_tweets": 3.0
        })]);
        assert_eq!(rows[0].engagements_total, 15);
    }

    #[test]
    fn huge_engagement_counters_add_up() {
        let rows = normalize(&[json!({
            "total_likes": i64::MAX,
            "total_retweets": 1
        })]);
        assert_eq!(rows[0].engagements_total, i128::from(i64::MAX) + 1);
        assert_eq!(rows[0].engagements_text, "9,223,372,036,854,775,808");

        let all_max = normalize(&[json!({
            "total_retweets": i64::MAX,
            "total_quote_tweets": i64::MAX,
            "total_likes": i64::MAX,
            "total_bookmarks": i64::MAX,
            "total_smart_engagements": i64::MAX,
            "total_community_engagements": i64::MAX
        })]);
        assert_eq!(all_max[0].engagements_total, 6 * i128::from(i64::MAX));
    }

    #[test]
    fn mindshare_from_string() {
        let rows = normalize_document(&demo()).unwrap();
        assert_eq!(rows[1].mindshare_percent_text, "5.2959%");
        assert_eq!(rows[1].mindshare_fraction, 0.05295892783565214);
    }

    #[test]
    fn bad_mindshare_is_nan() {
        let rows = normalize(&[
            json!({"mindshare": "lots"}),
            json!({}),
            json!({"mindshare": null}),
        ]);
        for r in rows.iter() {
            assert!(r.mindshare_fraction.is_nan());
            assert_eq!(r.mindshare_percent_text, "NaN%");
        }
    }

    #[test]
    fn missing_fields_render_empty_or_nan() {
        let rows = normalize(&[json!("not an object")]);
        let r = &rows[0];
        assert_eq!(r.rank, Rank::Missing);
        assert_eq!(r.rank.to_string(), "");
        assert_eq!(r.username, "");
        assert_eq!(r.tweet_count, None);
        assert_eq!(r.impressions, None);
        assert_eq!(r.impressions_text, "NaN");
    }

    #[test]
    fn normalize_is_idempotent() {
        let doc = demo();
        let entries = extract_contributors(&doc).unwrap();
        assert_eq!(normalize(entries), normalize(entries));
    }

    #[test]
    fn bars_scale_to_max() {
        let rows: Vec<ContributorRow> = [0.0730, 0.0530, 0.0230]
            .iter()
            .map(|f| row_with(*f))
            .collect();
        let widths = bar_widths(&rows).unwrap();
        assert_eq!(widths[0], 100.0);
        assert!((widths[1] - 72.60).abs() < 0.01, "{}", widths[1]);
        assert!((widths[2] - 31.51).abs() < 0.01, "{}", widths[2]);
    }

    #[test]
    fn bars_are_order_independent() {
        let rows: Vec<ContributorRow> = [0.0230, 0.0730, 0.0730]
            .iter()
            .map(|f| row_with(*f))
            .collect();
        let widths = bar_widths(&rows).unwrap();
        assert_eq!(widths[1], 100.0);
        assert_eq!(widths[2], 100.0);
        assert!(widths[0] < 100.0);
    }

    #[test]
    fn nan_poisons_bars() {
        let rows = vec![row_with(0.5), ContributorRow::from(read_contributor(&json!({})))];
        assert!(max_mindshare(&rows).unwrap().is_nan());
        assert!(bar_widths(&rows).unwrap().iter().all(|w| w.is_nan()));
    }

    #[test]
    fn summary_counts() {
        assert_eq!(
            read_summary(&demo()),
            LeaderboardSummary {
                total_unique_yappers: Some(1361),
                total_unique_tweets: Some(5205),
            }
        );
        assert_eq!(read_summary(&json!({})), LeaderboardSummary::default());
    }
}
