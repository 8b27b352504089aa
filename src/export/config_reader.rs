use crate::export::*;

use serde::Deserialize;

#[derive(Eq, PartialEq, Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
    #[serde(rename = "csvFileName")]
    pub csv_file_name: Option<String>,
    #[serde(rename = "htmlFile")]
    pub html_file: Option<String>,
    #[serde(rename = "generateCsv")]
    pub generate_csv: Option<bool>,
    #[serde(rename = "quoteCsvFields")]
    pub quote_csv_fields: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    // Same syntax as --input. Relative file paths are relative to the configuration file.
    #[serde(default)]
    pub sources: Vec<String>,
}

pub fn read_config(path: &str) -> ExportResult<ExportConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    let config: ExportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })?;
    Ok(config)
}
