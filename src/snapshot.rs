//! Directus schema snapshot: the subset of the document the generator consumes.
//!
//! Only `collections[].collection` and `fields[].{collection, field, type, schema.is_nullable}`
//! are read. Every other key (`version`, `directus`, `relations`, `meta`, ...) is ignored.
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::path_de::PathError;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub collections: Vec<SnapshotCollection>,
    pub fields: Vec<SnapshotField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotCollection {
    pub collection: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotField {
    pub collection: String,
    pub field: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub schema: Option<FieldSchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSchema {
    pub is_nullable: Option<bool>,
}

/// Declared Directus field type.
///
/// The input is an open string; anything outside the known set lands in
/// `Other` with its raw text preserved for error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    Boolean,
    Date,
    DateTime,
    Time,
    Timestamp,
    Decimal,
    Float,
    Integer,
    BigInteger,
    Hash,
    String,
    Text,
    Uuid,
    Unknown,
    Csv,
    Json,
    Alias,
    Binary,
    /// `geometry` or one of its `geometry.<Kind>` variants.
    Geometry(std::string::String),
    Other(std::string::String),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SnapshotField {
    pub fn is_nullable(&self) -> bool {
        self.schema
            .as_ref()
            .and_then(|schema| schema.is_nullable)
            .unwrap_or(false)
    }
}

impl FieldType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "dateTime" => Self::DateTime,
            "time" => Self::Time,
            "timestamp" => Self::Timestamp,
            "decimal" => Self::Decimal,
            "float" => Self::Float,
            "integer" => Self::Integer,
            "bigInteger" => Self::BigInteger,
            "hash" => Self::Hash,
            "string" => Self::String,
            "text" => Self::Text,
            "uuid" => Self::Uuid,
            "unknown" => Self::Unknown,
            "csv" => Self::Csv,
            "json" => Self::Json,
            "alias" => Self::Alias,
            "binary" => Self::Binary,
            "geometry" => Self::Geometry(raw.to_string()),
            other if other.starts_with("geometry.") => Self::Geometry(other.to_string()),
            other => Self::Other(other.to_string()),
        }
    }

    /// The type string as written in the snapshot.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::BigInteger => "bigInteger",
            Self::Hash => "hash",
            Self::String => "string",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Unknown => "unknown",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Alias => "alias",
            Self::Binary => "binary",
            Self::Geometry(raw) | Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<std::string::String> for FieldType {
    fn from(raw: std::string::String) -> Self {
        Self::parse(&raw)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized form of a snapshot, resolved from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

impl Snapshot {
    pub fn parse(src: &str, format: Format) -> Result<Self, PathError> {
        match format {
            Format::Json => crate::path_de::from_json_str_with_path(src),
            Format::Yaml => crate::path_de::from_yaml_str_with_path(src),
        }
    }
}

/// Read and decode a snapshot file. The extension is checked before the file is touched.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let format = Format::from_path(path)?;
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = Snapshot::parse(&source, format).map_err(|PathError { at, message }| {
        Error::Parse {
            path: path.to_path_buf(),
            at,
            message,
        }
    })?;
    log::info!(
        "loaded {} ({format:?}): {} collections, {} fields",
        path.display(),
        snapshot.collections.len(),
        snapshot.fields.len(),
    );
    Ok(snapshot)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
