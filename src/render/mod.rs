//! Rendering of a [`DocumentConfiguration`] as a SWORD conf section or JSON.

use std::str::FromStr;

use crate::conf::DocumentConfiguration;
use crate::error::Result;

/// Output format of the generated configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// SWORD `.conf` section
    #[default]
    Conf,
    /// The assembled configuration record as pretty JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Conf => "conf",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conf" | "ini" => Ok(OutputFormat::Conf),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected conf or json)", other)),
        }
    }
}

pub fn render(conf: &DocumentConfiguration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Conf => Ok(render_conf(conf)),
        OutputFormat::Json => render_json(conf),
    }
}

/// Render the conf section. Key names and their order are what SWORD
/// tooling downstream expects.
pub fn render_conf(conf: &DocumentConfiguration) -> String {
    let mut lines = vec![
        format!("[{}]", conf.name),
        format!("ModDrv={}", conf.module_driver),
        format!("DataPath={}", conf.data_path),
        "CompressType=ZIP".to_string(),
        "BlockType=BOOK".to_string(),
        "Encoding=UTF-8".to_string(),
        "SourceType=OSIS".to_string(),
        format!("SwordVersionDate={}", conf.version_date),
        format!("Lang={}", conf.lang.code),
    ];

    lines.extend(
        conf.option_filters
            .iter()
            .map(|filter| format!("GlobalOptionFilter={}", filter)),
    );
    lines.extend(
        conf.raw_features
            .iter()
            .map(|feature| format!("Feature={}", feature)),
    );

    lines.push(format!("LCSH={}. {}.", conf.work_type, conf.lang.name));
    lines.extend(conf.metadata.iter().map(ToString::to_string));

    lines.push(format!("Versification={}", conf.versification));
    if !conf.makefile {
        lines.push(format!("MinimumVersion={}", conf.minimum_version));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_json(conf: &DocumentConfiguration) -> Result<String> {
    let mut json = serde_json::to_string_pretty(conf)?;
    json.push('\n');
    Ok(json)
}
