// Built-in leaderboards, for trying the tool without an endpoint at hand.

use crate::export::*;

/// Three contributors, loaded by `--demo`.
pub const DEMO_DOCUMENT: &str = r#"{
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
        "user_id": "951213360045023232",
        "rank": "2",
        "username": "CryptoUser",
        "mindshare": 0.05295892783565214,
        "tweet_counts": 45,
        "total_impressions": 35400,
        "total_retweets": 89,
        "total_quote_tweets": 26,
        "total_likes": 937,
        "total_bookmarks": 30,
        "total_community_engagements": 144
      },
      {
        "user_id": "951213360045023233",
        "rank": "3",
        "username": "TokenTrader",
        "mindshare": 0.02295892783565214,
        "tweet_counts": 30,
        "total_impressions": 15400,
        "total_retweets": 49,
        "total_quote_tweets": 16,
        "total_likes": 537,
        "total_bookmarks": 20,
        "total_community_engagements": 84
      }
    ]
  }
}"#;

/// Printed by `--print-example`, to show what an endpoint response looks like.
pub const EXAMPLE_DOCUMENT: &str = r#"{
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
        "user_id": "951213360045023232",
        "rank": "2",
        "username": "CryptoUser",
        "mindshare": 0.05295892783565214,
        "tweet_counts": 45,
        "total_impressions": 35400,
        "total_retweets": 89,
        "total_quote_tweets": 26,
        "total_likes": 937,
        "total_bookmarks": 30,
        "total_community_engagements": 144
      }
    ]
  }
}"#;

pub fn demo_document() -> ExportResult<JSValue> {
    serde_json::from_str(DEMO_DOCUMENT).context(ParsingJsonSnafu {})
}

#[cfg(test)]
pub fn demo_rows() -> Vec<ContributorRow> {
    let js = demo_document().unwrap();
    normalize_document(&js).unwrap()
}
