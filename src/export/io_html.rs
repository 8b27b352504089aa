// Renders the leaderboard as a standalone HTML page.

use std::fmt::Write;

use crate::export::*;

use html_escape::encode_text;

const STYLE: &str = "body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: 6px 10px; text-align: left; }
th { background: #f5f5f5; }
.percentage-bar { background: #eee; height: 6px; border-radius: 3px; margin-top: 4px; }
.percentage-fill { background: #4a7dff; height: 100%; border-radius: 3px; }";

/// One `<tr>` of the table. A bar is drawn only when a width is given.
pub fn render_row(row: &ContributorRow, bar_width: Option<f64>) -> String {
    let mut out = String::new();
    let bar = match bar_width {
        Some(w) => format!(
            "\n      <div class=\"percentage-bar\"><div class=\"percentage-fill\" style=\"width: {}%\"></div></div>",
            w
        ),
        None => String::new(),
    };
    let _ = write!(
        out,
        "  <tr>
    <td>{}</td>
    <td>@{}</td>
    <td>
      <div>{}</div>{}
    </td>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
  </tr>
",
        encode_text(&row.rank.to_string()),
        encode_text(&row.username),
        encode_text(&row.mindshare_percent_text),
        bar,
        encode_text(&mindshare::format::raw_count_text(row.tweet_count)),
        encode_text(&row.impressions_text),
        encode_text(&row.engagements_text),
    );
    out
}

/// The whole page. Bars are only computed for a non-empty leaderboard.
pub fn render_page(
    rows: &[ContributorRow],
    summary: &LeaderboardSummary,
    generated_at: DateTime<Utc>,
) -> String {
    let widths: Vec<Option<f64>> = match bar_widths(rows) {
        Some(ws) => ws.into_iter().map(Some).collect(),
        None => vec![],
    };

    let mut page = String::new();
    let _ = write!(
        page,
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>Community mindshare</title>
<style>
{}
</style>
</head>
<body>
<h1>Community mindshare</h1>
",
        STYLE
    );

    let mut headline: Vec<String> = Vec::new();
    if let Some(n) = summary.total_unique_yappers {
        headline.push(format!("{} unique yappers", mindshare::format::group_digits(n)));
    }
    if let Some(n) = summary.total_unique_tweets {
        headline.push(format!("{} unique tweets", mindshare::format::group_digits(n)));
    }
    if !headline.is_empty() {
        let _ = writeln!(page, "<p>{}</p>", headline.join(" · "));
    }

    page.push_str(
        "<table>
<thead>
  <tr><th>Rank</th><th>Username</th><th>Mindshare</th><th>Tweet Count</th><th>Impressions</th><th>Engagements</th></tr>
</thead>
<tbody>
",
    );
    for (idx, row) in rows.iter().enumerate() {
        page.push_str(&render_row(row, widths.get(idx).copied().flatten()));
    }
    let _ = write!(
        page,
        "</tbody>
</table>
<p><small>Generated {}</small></p>
</body>
</html>
",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    page
}
