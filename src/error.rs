use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element not found: <{0}>")]
    MissingElement(String),

    #[error("The language is undefined and no language was given on the commandline")]
    UndefinedLanguage,

    #[error(
        "The language ({cli}) given on the commandline and the language of the document ({document}) do not agree"
    )]
    LanguageConflict { cli: String, document: String },

    #[error(
        "The versification ({cli}) given on the commandline and the versification of the document ({document}) do not agree"
    )]
    VersificationConflict { cli: String, document: String },

    #[error("This versification does not exist (yet): {0}")]
    UnknownVersification(String),
}

pub type Result<T> = std::result::Result<T, ConfError>;
