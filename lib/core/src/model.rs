//! Record catalog: the typed collections of a locking-system dataset
//!
//! Every record kind declares its matchable fields through an explicit
//! accessor table ([`FieldSpec`]) instead of enumerating properties at
//! runtime. Identifiers and foreign keys are never part of those tables.

use crate::error::Result;
use crate::kind::RecordKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Name of the identifier field on every record
pub const ID_FIELD: &str = "Id";

/// Suffix shared by all foreign key fields (`BuildingId`, `GroupId`, ...)
pub const FOREIGN_KEY_SUFFIX: &str = "Id";

/// Returns true for identifier and foreign key field names
#[inline]
pub fn is_key_field(name: &str) -> bool {
    name == ID_FIELD || name.ends_with(FOREIGN_KEY_SUFFIX)
}

/// Field label paired with the record's current value for it
pub type FieldValues<'a> = SmallVec<[(&'static str, Option<&'a str>); 8]>;

/// A matchable field: its label and how to read it from a record
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub get: fn(&T) -> Option<&str>,
}

impl<T> FieldSpec<T> {
    /// Read every field of `record` listed in `specs`, in table order
    pub fn read_all<'a>(specs: &[FieldSpec<T>], record: &'a T) -> FieldValues<'a> {
        specs.iter().map(|spec| (spec.name, (spec.get)(record))).collect()
    }
}

/// A member of the record catalog
pub trait Record {
    fn kind(&self) -> RecordKind;

    /// Stable identifier, unique within the record's kind
    fn id(&self) -> &str;

    /// Value of a foreign key field such as `BuildingId`
    fn foreign_key(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Matchable fields with their current values
    fn fields(&self) -> FieldValues<'_>;

    /// JSON rendering of the full record, returned alongside search results
    fn payload(&self) -> Result<Value>;
}

/// Lock hardware variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockType {
    Cylinder,
    SmartHandle,
}

impl LockType {
    pub fn as_str(self) -> &'static str {
        match self {
            LockType::Cylinder => "Cylinder",
            LockType::SmartHandle => "SmartHandle",
        }
    }
}

/// Access medium variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Card,
    TransponderWithCardInlay,
    Transponder,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Card => "Card",
            MediaType::TransponderWithCardInlay => "TransponderWithCardInlay",
            MediaType::Transponder => "Transponder",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub short_cut: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Building {
    pub const FIELDS: &'static [FieldSpec<Building>] = &[
        FieldSpec { name: "ShortCut", get: |b| b.short_cut.as_deref() },
        FieldSpec { name: "Name", get: |b| b.name.as_deref() },
        FieldSpec { name: "Description", get: |b| b.description.as_deref() },
    ];
}

impl Record for Building {
    fn kind(&self) -> RecordKind {
        RecordKind::Building
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> FieldValues<'_> {
        FieldSpec::read_all(Self::FIELDS, self)
    }

    fn payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lock {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub building_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_enum")]
    pub lock_type: Option<LockType>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub floor: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub room_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Lock {
    pub const FIELDS: &'static [FieldSpec<Lock>] = &[
        FieldSpec { name: "Type", get: |l| l.lock_type.map(LockType::as_str) },
        FieldSpec { name: "Name", get: |l| l.name.as_deref() },
        FieldSpec { name: "SerialNumber", get: |l| l.serial_number.as_deref() },
        FieldSpec { name: "Floor", get: |l| l.floor.as_deref() },
        FieldSpec { name: "RoomNumber", get: |l| l.room_number.as_deref() },
        FieldSpec { name: "Description", get: |l| l.description.as_deref() },
    ];
}

impl Record for Lock {
    fn kind(&self) -> RecordKind {
        RecordKind::Lock
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn foreign_key(&self, name: &str) -> Option<&str> {
        match name {
            "BuildingId" => self.building_id.as_deref(),
            _ => None,
        }
    }

    fn fields(&self) -> FieldValues<'_> {
        FieldSpec::read_all(Self::FIELDS, self)
    }

    fn payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Group {
    pub const FIELDS: &'static [FieldSpec<Group>] = &[
        FieldSpec { name: "Name", get: |g| g.name.as_deref() },
        FieldSpec { name: "Description", get: |g| g.description.as_deref() },
    ];
}

impl Record for Group {
    fn kind(&self) -> RecordKind {
        RecordKind::Group
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> FieldValues<'_> {
        FieldSpec::read_all(Self::FIELDS, self)
    }

    fn payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// An issued access medium (card or transponder)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medium {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub group_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_enum")]
    pub media_type: Option<MediaType>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Medium {
    pub const FIELDS: &'static [FieldSpec<Medium>] = &[
        FieldSpec { name: "Type", get: |m| m.media_type.map(MediaType::as_str) },
        FieldSpec { name: "Owner", get: |m| m.owner.as_deref() },
        FieldSpec { name: "SerialNumber", get: |m| m.serial_number.as_deref() },
        FieldSpec { name: "Description", get: |m| m.description.as_deref() },
    ];
}

impl Record for Medium {
    fn kind(&self) -> RecordKind {
        RecordKind::Medium
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn foreign_key(&self, name: &str) -> Option<&str> {
        match name {
            "GroupId" => self.group_id.as_deref(),
            _ => None,
        }
    }

    fn fields(&self) -> FieldValues<'_> {
        FieldSpec::read_all(Self::FIELDS, self)
    }

    fn payload(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// The whole dataset: one collection per record kind.
///
/// Absent or `null` collections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub buildings: Vec<Building>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locks: Vec<Lock>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groups: Vec<Group>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media: Vec<Medium>,
}

impl DataFile {
    /// All records of one kind, in dataset order
    pub fn records(&self, kind: RecordKind) -> Vec<&dyn Record> {
        fn erase<T: Record>(items: &[T]) -> Vec<&dyn Record> {
            items.iter().map(|r| r as &dyn Record).collect()
        }

        match kind {
            RecordKind::Building => erase(&self.buildings),
            RecordKind::Lock => erase(&self.locks),
            RecordKind::Group => erase(&self.groups),
            RecordKind::Medium => erase(&self.media),
        }
    }

    #[inline]
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Building => self.buildings.len(),
            RecordKind::Lock => self.locks.len(),
            RecordKind::Group => self.groups.len(),
            RecordKind::Medium => self.media.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        RecordKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}

// Non-text values are treated as absent rather than failing the whole dataset.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_enum<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
