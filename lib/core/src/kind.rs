//! Record kinds known to the catalog.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of record categories in a locking-system dataset.
///
/// Declaration order is catalog iteration order and therefore also the
/// insertion order of direct matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    /// Top-level physical asset
    Building,
    /// Lock installed in a building
    Lock,
    /// Logical grouping of access media
    Group,
    /// Issued access medium (card, transponder), tagged `Media`
    #[serde(rename = "Media")]
    Medium,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Building,
        RecordKind::Lock,
        RecordKind::Group,
        RecordKind::Medium,
    ];

    /// Tag reported in search results
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Building => "Building",
            RecordKind::Lock => "Lock",
            RecordKind::Group => "Group",
            RecordKind::Medium => "Media",
        }
    }

    /// Name of the dataset collection holding records of this kind
    #[inline]
    pub fn collection_name(self) -> &'static str {
        match self {
            RecordKind::Building => "Buildings",
            RecordKind::Lock => "Locks",
            RecordKind::Group => "Groups",
            RecordKind::Medium => "Media",
        }
    }

    /// Conventional foreign key name children use to reference this kind
    #[inline]
    pub fn foreign_key(self) -> &'static str {
        match self {
            RecordKind::Building => "BuildingId",
            RecordKind::Lock => "LockId",
            RecordKind::Group => "GroupId",
            RecordKind::Medium => "MediaId",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    /// Accepts either the result tag (`Lock`) or the collection name (`Locks`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.collection_name() == s)
            .ok_or_else(|| Error::UnknownRecordKind(s.to_string()))
    }
}
