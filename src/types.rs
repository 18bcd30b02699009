//! Core types of the propcodec crate.
//! The parser decodes into these; the writer and the upload side consume them.

use std::collections::HashMap;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The update input of the merge engine: key to replacement value.
pub type UpdateSet = HashMap<String, String>;

/// A single key/value resource with its source-order metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceEntry {
    /// Resource key, unique within a [`Bundle`].
    pub key: String,

    /// Resource value; any Unicode content.
    pub value: String,

    /// 1-based position assigned in parse order. Meaningful for freshly
    /// parsed bundles only.
    pub sequence_number: u32,

    /// Comment lines that immediately preceded this entry, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub notes: Vec<String>,
}

/// A complete parsed properties resource: ordered entries plus the leading
/// comment block that is not attached to any key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bundle {
    /// The file's leading comment block, terminated by the first blank line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub global_notes: Vec<String>,

    /// All entries, in first-seen source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub entries: Vec<ResourceEntry>,
}

impl Bundle {
    pub fn new() -> Self {
        Bundle::default()
    }

    pub(crate) fn add_entry(&mut self, entry: ResourceEntry) {
        self.entries.push(entry);
    }

    pub fn find_entry(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn find_entry_mut(&mut self, key: &str) -> Option<&mut ResourceEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceEntry> {
        self.entries.iter()
    }

    /// Reads a bundle back from its JSON form.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Json)
    }

    /// Writes the bundle as JSON. This is the hand-off format for workflows
    /// that consume the parsed bundle without speaking the properties format.
    pub fn to_json_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer(&mut writer, self).map_err(Error::Json)
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = &'a ResourceEntry;
    type IntoIter = std::slice::Iter<'a, ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
