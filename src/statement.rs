//! Flattening of a Turtle document into `(subject, predicate, object)` strings.
//!
//! The Turtle grammar itself is handled by `oxttl`; this module only turns its
//! triples into plain strings and knows how the weather vocabulary encodes the
//! station id (last path segment of the subject) and the field name (fragment
//! of the predicate).

use std::{fmt, str::FromStr};

use log::{debug, info};
use oxrdf::{NamedOrBlankNode, Term, Triple};
use oxttl::TurtleParser;
use strum_macros::EnumString;

use crate::DatasetError;

/// Base IRI relative references in the dataset are resolved against.
pub const DATASET_BASE_IRI: &str = "http://example.com/weather/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Statement {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: impl Into<String>) -> Statement {
        Statement {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Trailing path segment of the subject.
    pub fn station_id(&self) -> &str {
        self.subject.rsplit('/').next().unwrap_or(&self.subject)
    }

    /// Local name of the predicate, the part after the last `#`.
    pub fn local_name(&self) -> &str {
        self.predicate.rsplit('#').next().unwrap_or(&self.predicate)
    }

    pub fn key(&self) -> Key {
        Key::from_str(self.local_name()).unwrap_or_else(|_| Key::Other(self.local_name().to_owned()))
    }
}

impl From<Triple> for Statement {
    fn from(triple: Triple) -> Self {
        let subject = match triple.subject {
            NamedOrBlankNode::NamedNode(node) => node.into_string(),
            NamedOrBlankNode::BlankNode(node) => node.as_str().to_owned(),
        };

        let object = match triple.object {
            Term::NamedNode(node) => node.into_string(),
            Term::BlankNode(node) => node.as_str().to_owned(),
            Term::Literal(literal) => literal.value().to_owned(),
            #[allow(unreachable_patterns)]
            other => other.to_string(),
        };

        Statement {
            subject,
            predicate: triple.predicate.into_string(),
            object,
        }
    }
}

/// The weather vocabulary. Anything else is kept as `Other` so new fields in
/// the dataset pass through instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum Key {
    #[strum(serialize = "ville")]
    Ville,
    #[strum(serialize = "dateTime")]
    DateTime,
    #[strum(serialize = "temperature")]
    Temperature,
    #[strum(serialize = "humidity")]
    Humidity,
    #[strum(serialize = "max")]
    Max,
    #[strum(serialize = "min")]
    Min,
    #[strum(serialize = "pressure")]
    Pressure,
    #[strum(serialize = "visibility")]
    Visibility,
    #[strum(serialize = "wind")]
    Wind,
    #[strum(serialize = "dewPoint")]
    DewPoint,
    #[strum(default)]
    Other(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Ville => "ville",
            Key::DateTime => "dateTime",
            Key::Temperature => "temperature",
            Key::Humidity => "humidity",
            Key::Max => "max",
            Key::Min => "min",
            Key::Pressure => "pressure",
            Key::Visibility => "visibility",
            Key::Wind => "wind",
            Key::DewPoint => "dewPoint",
            Key::Other(name) => name.as_str(),
        };
        write!(f, "{name}")
    }
}

/// Parses a whole Turtle document into statements, in document order.
///
/// Any syntax error aborts the load; a partially parsed dataset is never
/// returned.
pub fn parse_statements(raw: &str) -> Result<Vec<Statement>, DatasetError> {
    let parser = TurtleParser::new()
        .with_base_iri(DATASET_BASE_IRI)
        .map_err(|e| DatasetError::Turtle(format!("invalid base IRI {DATASET_BASE_IRI}: {e}")))?;

    let mut statements = Vec::new();

    for result in parser.for_reader(raw.as_bytes()) {
        let triple = result.map_err(|e| DatasetError::Turtle(e.to_string()))?;
        statements.push(Statement::from(triple));
    }

    info!("Parsed {} statements from dataset", statements.len());
    if statements.is_empty() {
        debug!("Dataset contained no statements");
    }

    Ok(statements)
}
