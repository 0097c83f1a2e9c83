use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Result;
use osis_confmaker::{derive_configuration, render, ConfOptions, MetadataOverrides, OsisDocument, OutputFormat};

#[derive(Parser)]
#[command(name = "osis-confmaker")]
#[command(about = "Provides an initial SWORD conf file for a new module by analysing an OSIS XML file")]
#[command(long_about = "Provides an initial SWORD conf file for a new module by analysing an OSIS XML file.\n\
The document is searched for relevant tags to create the GlobalOptionFilter entries and other conf entries.")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Print the conf for a Bible to stdout
    osis-confmaker kjv.osis.xml

    # Write it to a file, checking the language and versification
    osis-confmaker kjv.osis.xml -l en -v KJV -o kjv.conf

    # Conf without distribution metadata, for use from a makefile
    osis-confmaker -m kjv.osis.xml

    # Reuse license and description from an existing conf
    osis-confmaker -i old/kjv.conf kjv.osis.xml

    # Inspect the detected features
    osis-confmaker --format json kjv.osis.xml
"#)]
pub struct Cli {
    /// OSIS XML file
    pub osis: PathBuf,

    /// Output file name [default: stdout]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input conf file whose metadata (license, description, history) is kept
    #[arg(short, long, conflicts_with = "makefile")]
    pub input: Option<PathBuf>,

    /// Language code; must agree with the document language if it has one
    #[arg(short, long)]
    pub language: Option<String>,

    /// Versification; must agree with the document refSystem if it has one
    #[arg(short, long)]
    pub versification: Option<String>,

    /// Omit distribution and version metadata, expecting it to be added by
    /// other means (e.g. a makefile)
    #[arg(short, long)]
    pub makefile: bool,

    /// Output format (conf or json)
    #[arg(short, long, default_value = "conf")]
    pub format: OutputFormat,

    /// Enable debug logs
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(short = 'n', long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "error"
        }
    }
}

/// Derives the conf for the given OSIS file and writes it out.
///
/// Nothing is written unless every validation step passed.
pub fn generate(cli: &Cli) -> Result<()> {
    let document = OsisDocument::from_path(&cli.osis)?;

    let overrides = match &cli.input {
        Some(path) => {
            tracing::info!("Reading metadata from {}", path.display());
            MetadataOverrides::from_path(path)?
        }
        None => MetadataOverrides::default(),
    };

    let options = ConfOptions {
        language: cli.language.clone(),
        versification: cli.versification.clone(),
        makefile: cli.makefile,
        overrides,
        version_date: None,
    };

    let conf = derive_configuration(document, &options)?;
    let rendered = render(&conf, cli.format)?;

    write_output(&rendered, cli.output.as_deref())
}

fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text)?;
            tracing::info!("Wrote configuration to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
