use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Naming or declaration style applied to each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    Pascal,
    Camel,
    Lower,
    Upper,
    Property,
}

impl ConversionMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pascal" | "pascalcase" => Some(Self::Pascal),
            "camel" | "camelcase" => Some(Self::Camel),
            "lower" | "lowercase" => Some(Self::Lower),
            "upper" | "uppercase" => Some(Self::Upper),
            "property" | "prop" => Some(Self::Property),
            _ => None,
        }
    }

    pub fn is_case(self) -> bool {
        !matches!(self, Self::Property)
    }
}

/// What a single input line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceShape {
    NameOnly,
    DefinitionRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    String,
    Int,
    DateTime,
    Unsupported,
}

impl DataType {
    /// Case-insensitive lookup of a column type token.
    pub fn resolve(token: &str) -> Self {
        let t = token.trim().to_lowercase();
        if t.contains("char") || t.contains("text") {
            Self::String
        } else if t == "int" {
            Self::Int
        } else if t == "date" || t == "datetime" {
            Self::DateTime
        } else {
            Self::Unsupported
        }
    }
}

/// One field of an entity, derived from a definition row and rendered
/// immediately into a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub logical_name: String,
    pub physical_name: String,
    pub data_type: DataType,
    pub required: bool,
}

impl PropertySpec {
    /// Strings are never nullable; everything else is nullable unless required.
    pub fn nullable(&self) -> bool {
        !self.required && self.data_type != DataType::String
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub source_code: String,
}

impl OutputRow {
    pub fn new(source_code: impl Into<String>) -> Self {
        Self { source_code: source_code.into() }
    }
}

/// Why an item produced no output. Skips are expected outcomes, not errors:
/// the caller omits the item and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Skip {
    #[error("row has fewer than 4 fields")]
    ShortRow,

    #[error("unsupported data type '{0}'")]
    UnsupportedType(String),

    #[error("malformed value")]
    Malformed,

    #[error("conversion produced nothing")]
    EmptyResult,

    #[error("nothing to convert")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line (or sheet row) number
    pub line_no: usize,
    pub reason: Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub rows: Vec<OutputRow>,
    pub skipped: Vec<SkippedLine>,
}
