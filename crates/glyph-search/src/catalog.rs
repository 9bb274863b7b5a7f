//! The load-once icon table.

use std::collections::HashSet;
use std::fmt;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::codepoint::{Codepoint, InvalidCodepoint};

/// One glyph of the icon font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    label: String,
    codepoint: Codepoint,
}

impl Icon {
    pub fn new(label: impl Into<String>, codepoint: Codepoint) -> Self {
        Self {
            label: label.into(),
            codepoint,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn codepoint(&self) -> Codepoint {
        self.codepoint
    }
}

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read icon data {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed icon data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("icon record {index} ({label:?}) has an invalid value: {source}")]
    Codepoint {
        index: usize,
        label: String,
        #[source]
        source: InvalidCodepoint,
    },
}

/// Immutable, ordered set of icons.
///
/// Order is the order of the source data and is preserved in query results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
    icons: Vec<Icon>,
}

impl IconCatalog {
    pub fn from_icons(icons: Vec<Icon>) -> Self {
        warn_on_duplicate_labels(&icons);
        Self { icons }
    }

    /// Load a JSON array of `{"Label": string, "Value": integer}` records.
    ///
    /// Field names are matched case-insensitively and unknown fields are ignored.
    /// A record that repeats `Label` or `Value` (in any casing) is rejected rather
    /// than resolved last-one-wins. Any bad record fails the whole load.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::load_from_reader(BufReader::new(file))?;
        tracing::info!(
            target: "glyph.catalog",
            path = %path.display(),
            icons = catalog.len(),
            "loaded icon catalog"
        );
        Ok(catalog)
    }

    pub fn load_from_reader(reader: impl Read) -> Result<Self, DataLoadError> {
        let records: Vec<RawRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn from_json_str(text: &str) -> Result<Self, DataLoadError> {
        let records: Vec<RawRecord> = serde_json::from_str(text)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<RawRecord>) -> Result<Self, DataLoadError> {
        let icons = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| match Codepoint::try_from(record.value) {
                Ok(codepoint) => Ok(Icon::new(record.label, codepoint)),
                Err(source) => Err(DataLoadError::Codepoint {
                    index,
                    label: record.label,
                    source,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_icons(icons))
    }

    pub fn all(&self) -> &[Icon] {
        &self.icons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
        self.icons.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Icon> {
        self.icons.get(index)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl<'a> IntoIterator for &'a IconCatalog {
    type Item = &'a Icon;
    type IntoIter = std::slice::Iter<'a, Icon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

fn warn_on_duplicate_labels(icons: &[Icon]) {
    let mut seen = HashSet::with_capacity(icons.len());
    for icon in icons {
        if !seen.insert(icon.label()) {
            tracing::warn!(
                target: "glyph.catalog",
                label = icon.label(),
                codepoint = %icon.codepoint(),
                "duplicate icon label"
            );
        }
    }
}

/// One source record before codepoint validation.
struct RawRecord {
    label: String,
    value: u64,
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawRecordVisitor)
    }
}

struct RawRecordVisitor;

impl<'de> Visitor<'de> for RawRecordVisitor {
    type Value = RawRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an icon record with `Label` and `Value` fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut label: Option<String> = None;
        let mut value: Option<u64> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("label") {
                if label.is_some() {
                    return Err(de::Error::duplicate_field("Label"));
                }
                label = Some(map.next_value()?);
            } else if key.eq_ignore_ascii_case("value") {
                if value.is_some() {
                    return Err(de::Error::duplicate_field("Value"));
                }
                value = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(RawRecord {
            label: label.ok_or_else(|| de::Error::missing_field("Label"))?,
            value: value.ok_or_else(|| de::Error::missing_field("Value"))?,
        })
    }
}
