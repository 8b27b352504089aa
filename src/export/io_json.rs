// Reading leaderboard documents.

use std::fmt::Display;

use crate::export::*;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum InputSource {
    /// JSON text given directly.
    Inline(String),
    Stdin,
    Url(String),
    File(PathBuf),
    Demo,
}

impl InputSource {
    pub fn parse(s: &str) -> InputSource {
        InputSource::parse_relative(s, None)
    }

    /// Like `parse`, with relative file paths resolved against `base`.
    pub fn parse_relative(s: &str, base: Option<&Path>) -> InputSource {
        let t = s.trim();
        if t.starts_with('{') {
            InputSource::Inline(t.to_string())
        } else if t == "-" {
            InputSource::Stdin
        } else if t.starts_with("http://") || t.starts_with("https://") {
            InputSource::Url(t.to_string())
        } else {
            InputSource::File(resolve(base, t))
        }
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Inline(s) => write!(f, "inline JSON ({} bytes)", s.len()),
            InputSource::Stdin => write!(f, "standard input"),
            InputSource::Url(u) => write!(f, "{}", u),
            InputSource::File(p) => write!(f, "{}", p.display()),
            InputSource::Demo => write!(f, "demo data"),
        }
    }
}

pub fn parse_document(text: &str) -> ExportResult<JSValue> {
    serde_json::from_str(text).context(ParsingJsonSnafu {})
}

pub fn read_document(src: &InputSource) -> ExportResult<JSValue> {
    match src {
        InputSource::Inline(s) => parse_document(s),
        InputSource::Stdin => {
            let contents =
                std::io::read_to_string(std::io::stdin()).context(ReadingInputSnafu {
                    path: "stdin",
                })?;
            parse_document(&contents)
        }
        InputSource::Url(u) => fetch_document(u),
        InputSource::File(p) => {
            let contents = fs::read_to_string(p).context(ReadingInputSnafu {
                path: p.display().to_string(),
            })?;
            debug!("read_document: {} bytes from {}", contents.len(), p.display());
            parse_document(&contents)
        }
        InputSource::Demo => demo::demo_document(),
    }
}

/// What to do when a URL cannot be read directly.
pub fn fetch_guidance(url: &str) -> String {
    format!(
        "Unable to fetch data directly from {}. The endpoint may refuse direct requests \
or answer with something other than JSON, so you may need to copy the response yourself.

To do this:
1. Open the URL in a browser
2. Copy the entire JSON response
3. Save it to a file and pass it with --input <file>, or pass the JSON itself with --input '<json>'
4. Run the export again",
        url
    )
}

/// Fetches a document with a single GET request. There is no retry: any
/// failure turns into the manual copy guidance.
pub fn fetch_document(url: &str) -> ExportResult<JSValue> {
    info!("Fetching {}", url);
    let response = match reqwest::blocking::get(url) {
        Ok(r) => r,
        Err(e) => {
            warn!("Direct fetch of {} failed: {}", url, e);
            return FetchUnavailableSnafu { url }.fail();
        }
    };
    let status = response.status();
    if !status.is_success() {
        warn!("Direct fetch of {} returned {}", url, status);
        return FetchUnavailableSnafu { url }.fail();
    }
    let body = match response.text() {
        Ok(b) => b,
        Err(e) => {
            warn!("Could not read the response of {}: {}", url, e);
            return FetchUnavailableSnafu { url }.fail();
        }
    };
    match serde_json::from_str(&body) {
        Ok(js) => Ok(js),
        Err(e) => {
            warn!("The response of {} is not JSON: {}", url, e);
            FetchUnavailableSnafu { url }.fail()
        }
    }
}
