// Primitives for writing the CSV export.

use crate::export::*;

use chrono::SecondsFormat;
use mindshare::format::raw_count_text;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

pub const CSV_HEADER: [&str; 6] = [
    "Rank",
    "Username",
    "Mindshare",
    "Tweet Count",
    "Impressions",
    "Engagements",
];

/// How fields are protected in the CSV export.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum CsvQuoting {
    /// Fields are written as they are, joined with commas.
    /// A username containing a comma or a newline breaks the row.
    #[default]
    Never,
    /// Fields containing commas, quotes or newlines are quoted.
    Necessary,
}

/// The CSV fields of a row. Counts are raw, not grouped.
pub fn csv_record(row: &ContributorRow) -> [String; 6] {
    [
        row.rank.to_string(),
        format!("@{}", row.username),
        row.mindshare_percent_text.clone(),
        raw_count_text(row.tweet_count),
        raw_count_text(row.impressions),
        row.engagements_total.to_string(),
    ]
}

/// Serializes the rows, header first. Rows are separated by `\n`, with no
/// newline after the last one.
pub fn write_csv(rows: &[ContributorRow], quoting: CsvQuoting) -> ExportResult<String> {
    let quote_style = match quoting {
        CsvQuoting::Never => csv::QuoteStyle::Never,
        CsvQuoting::Necessary => csv::QuoteStyle::Necessary,
    };
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    wtr.write_record(CSV_HEADER).context(WritingCsvSnafu {})?;
    for row in rows.iter() {
        wtr.write_record(&csv_record(row))
            .context(WritingCsvSnafu {})?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
        .context(WritingCsvSnafu {})?;
    let mut text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => whatever!("CSV output is not valid UTF-8: {}", e),
    };
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// `community-mindshare-YYYY-MM-DDTHH-MM-SS.csv`
pub fn csv_file_name(now: DateTime<Utc>) -> String {
    let iso = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let stamp: String = iso
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .take(19)
        .collect();
    format!("community-mindshare-{}.csv", stamp)
}
