use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::DateWindow;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Could not read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed Turtle document: {0}")]
    Turtle(String),
}

// Never escapes the extractor; the offending statement is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot decode packed timestamp {literal:?}: {reason}")]
pub struct DecodeError {
    pub literal: String,
    pub reason: String,
}

impl DecodeError {
    pub fn new(literal: &str, reason: impl Into<String>) -> DecodeError {
        DecodeError {
            literal: literal.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Failures of a city + date query. The `Display` text is the message shown
/// to the user.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Date {date} hors de la période disponible (du {} au {}).", .window.first, .window.last)]
    DateOutOfRange { date: NaiveDate, window: DateWindow },
    #[error("Station non trouvée pour cette ville.")]
    StationNotFound { city: String },
    #[error("Aucune donnée météo trouvée pour cette ville et cette date. Les données météo sont disponibles entre Août 2024 et Novembre 2024.")]
    NoData { city: String, date: NaiveDate },
    #[error("Une erreur est survenue lors de la recherche des données météo.")]
    Dataset(#[from] DatasetError),
}
