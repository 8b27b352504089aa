use clap::Parser;

/// Turns a community mindshare leaderboard into a CSV export and an HTML table.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (JSON text, '-', URL or file path, repeatable) The leaderboard to read. Text starting with '{' is
    /// read as JSON directly, '-' reads from the standard input, http(s) URLs are fetched once, anything
    /// else is a file path. When repeated, the last input that could be read wins.
    #[clap(short, long, value_parser)]
    pub input: Vec<String>,

    /// If passed as an argument, loads the built-in demo leaderboard (after the other inputs).
    #[clap(long, takes_value = false)]
    pub demo: bool,

    /// If passed as an argument, prints an example leaderboard document and exits.
    #[clap(long, takes_value = false)]
    pub print_example: bool,

    /// (file path, optional) A JSON configuration file. See the manual for the format.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, directory or 'stdout') Where to write the CSV export. With a directory, the file is
    /// named community-mindshare-<timestamp>.csv. Setting this option overrides the configuration file.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or 'stdout') If specified, an HTML page with the table is written to the given location.
    #[clap(long, value_parser)]
    pub html: Option<String>,

    /// If passed as an argument, no CSV export is written.
    #[clap(long, takes_value = false)]
    pub no_csv: bool,

    /// If passed as an argument, CSV fields containing commas, quotes or newlines are quoted.
    /// By default fields are written as they are.
    #[clap(long, takes_value = false)]
    pub quote_csv: bool,

    /// (file path) A reference CSV export. If provided, the generated CSV must match it.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
