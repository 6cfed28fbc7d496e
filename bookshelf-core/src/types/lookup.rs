//! Id to display-name mappings for authors and genres

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label shown for ids missing from a lookup
pub const UNKNOWN: &str = "Unknown";

/// Ordered id -> name table
///
/// Entries keep the order they were inserted in (or appeared in the dataset
/// file), which is the order dropdown options are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    entries: Vec<(String, String)>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing the name if the id is already present
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = name,
            None => self.entries.push((id, name)),
        }
    }

    /// Builder form of [`Lookup::insert`]
    pub fn with(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(id, name);
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, name)| name.as_str())
    }

    /// Display name for an id, or [`UNKNOWN`] when absent
    pub fn name_or_unknown(&self, id: &str) -> &str {
        self.get(id).unwrap_or(UNKNOWN)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Lookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, name) in &self.entries {
            map.serialize_entry(id, name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Lookup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LookupVisitor;

        impl<'de> Visitor<'de> for LookupVisitor {
            type Value = Lookup;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of ids to display names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Lookup, A::Error> {
                let mut lookup = Lookup::new();
                while let Some((id, name)) = access.next_entry::<String, String>()? {
                    lookup.insert(id, name);
                }
                Ok(lookup)
            }
        }

        deserializer.deserialize_map(LookupVisitor)
    }
}
