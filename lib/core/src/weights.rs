//! Weight catalog
//!
//! Static base weights per record kind and transitive weight tables per
//! declared parent→child relationship. The built-in catalog is compiled
//! in; changing a weight means shipping a new build.

use crate::error::{Error, Result};
use crate::kind::RecordKind;

/// Multiplier applied to a field's base weight on an exact match
pub const FULL_MATCH_COEFFICIENT: u32 = 10;

/// Field name → base weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTable(pub &'static [(&'static str, u32)]);

impl WeightTable {
    #[inline]
    pub fn get(&self, field: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, weight)| *weight)
    }

    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }
}

/// A declared parent→child link along which relevance propagates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    /// Name of the transitive weight table, e.g. `BuildingLock`
    pub name: &'static str,
    pub parent: RecordKind,
    pub child: RecordKind,
    /// Field on the child holding the parent's identifier
    pub foreign_key: &'static str,
}

/// Complete scoring configuration
#[derive(Debug, Clone, Copy)]
pub struct WeightCatalog {
    pub full_match_coefficient: u32,
    pub records: &'static [(RecordKind, WeightTable)],
    pub relationships: &'static [(Relationship, WeightTable)],
}

impl WeightCatalog {
    pub const BUILTIN: WeightCatalog = WeightCatalog {
        full_match_coefficient: FULL_MATCH_COEFFICIENT,
        records: &[
            (
                RecordKind::Building,
                WeightTable(&[("ShortCut", 7), ("Name", 9), ("Description", 5)]),
            ),
            (
                RecordKind::Lock,
                WeightTable(&[
                    ("Type", 3),
                    ("Name", 10),
                    ("SerialNumber", 8),
                    ("Floor", 6),
                    ("RoomNumber", 6),
                    ("Description", 6),
                ]),
            ),
            (
                RecordKind::Group,
                WeightTable(&[("Name", 9), ("Description", 5)]),
            ),
            (
                RecordKind::Medium,
                WeightTable(&[
                    ("Type", 3),
                    ("Owner", 10),
                    ("SerialNumber", 8),
                    ("Description", 6),
                ]),
            ),
        ],
        relationships: &[
            (
                Relationship {
                    name: "BuildingLock",
                    parent: RecordKind::Building,
                    child: RecordKind::Lock,
                    foreign_key: "BuildingId",
                },
                WeightTable(&[("ShortCut", 5), ("Name", 8)]),
            ),
            (
                Relationship {
                    name: "GroupMedia",
                    parent: RecordKind::Group,
                    child: RecordKind::Medium,
                    foreign_key: "GroupId",
                },
                WeightTable(&[("Name", 8)]),
            ),
        ],
    };

    /// Base weight table for a record kind
    pub fn record_table(&self, kind: RecordKind) -> Result<WeightTable> {
        self.records
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, table)| *table)
            .ok_or_else(|| Error::UnknownRecordKind(kind.collection_name().to_string()))
    }

    /// Base weight of one field; a field without a weight is a configuration error
    pub fn base_weight(&self, kind: RecordKind, field: &str) -> Result<u32> {
        self.record_table(kind)?
            .get(field)
            .ok_or_else(|| Error::UnweightedField {
                kind: kind.collection_name().to_string(),
                field: field.to_string(),
            })
    }

    /// Transitive table of a relationship, looked up by name
    pub fn relationship_table(&self, name: &str) -> Result<WeightTable> {
        self.relationships
            .iter()
            .find(|(rel, _)| rel.name == name)
            .map(|(_, table)| *table)
            .ok_or_else(|| Error::UnknownRelationship(name.to_string()))
    }

    /// Declared relationships, in propagation order
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> + '_ {
        self.relationships.iter().map(|(rel, _)| rel)
    }
}

impl Default for WeightCatalog {
    fn default() -> Self {
        Self::BUILTIN
    }
}
