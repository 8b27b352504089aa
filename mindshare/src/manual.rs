/*!

This is the long-form manual for `mindshare` and `mindshare-export`.

## Input format

The input is the JSON document returned by community leaderboard endpoints:

```json
{
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
      }
    ]
  }
}
```

Only the path `community_mindshare.top_100_yappers` is checked. Anything else
about the entries is read leniently:

| field | missing or unreadable |
|-------|-----------------------|
| `rank` | empty |
| `username` | empty |
| `mindshare` | `NaN`, shown as `NaN%` |
| `tweet_counts`, `total_impressions` | `NaN` |
| `total_retweets`, `total_quote_tweets`, `total_likes`, `total_bookmarks`, `total_smart_engagements`, `total_community_engagements` | 0 |

The engagements of a contributor are the sum of the six `total_*` counters
listed in the last row.

## Outputs

### CSV

```text
Rank,Username,Mindshare,Tweet Count,Impressions,Engagements
1,@Crypto_Zh0u,7.2959%,79,52400,1746
```

Fields are not quoted by default. A username containing a comma will shift the
columns of its row. Pass `--quote-csv` to quote such fields.

The default file name is `community-mindshare-YYYY-MM-DDTHH-MM-SS.csv` (UTC).

### HTML

A standalone page with one table. The mindshare cell carries a bar whose width
is the mindshare of the row relative to the largest mindshare of the table.

## Configuration

```json
{
  "outputSettings": {
    "outputDirectory": "out",
    "htmlFile": "out/mindshare.html",
    "generateCsv": true,
    "quoteCsvFields": false
  },
  "sources": ["leaderboard.json"]
}
```

Relative paths are resolved against the directory of the configuration file.
Command line flags take precedence.

*/
