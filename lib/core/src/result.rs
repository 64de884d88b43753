//! Search results with per-field weight breakdown

use crate::kind::RecordKind;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// How a contribution was earned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Field text contains the query
    PartialMatch,
    /// Field text equals the query
    FullMatch,
    /// Derived from a matched parent record
    TransitiveMatch,
}

/// One weighted contribution to a result's total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedProperty {
    /// Raw field name, or `<ParentKind>_<field>` for transitive matches
    pub property_name: String,
    pub calculated_weight: u32,
    pub search_match_type: MatchType,
}

impl MatchedProperty {
    pub fn new(property_name: impl Into<String>, calculated_weight: u32, search_match_type: MatchType) -> Self {
        Self {
            property_name: property_name.into(),
            calculated_weight,
            search_match_type,
        }
    }

    #[inline]
    pub fn is_direct(&self) -> bool {
        self.search_match_type != MatchType::TransitiveMatch
    }
}

/// A record that matched the query, directly or through a parent.
///
/// The total weight is always derived from the contributions.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub entity_type: RecordKind,
    /// JSON rendering of the matched record
    pub entity: Value,
    pub matched_properties: SmallVec<[MatchedProperty; 4]>,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, entity_type: RecordKind, entity: Value) -> Self {
        Self {
            id: id.into(),
            entity_type,
            entity,
            matched_properties: SmallVec::new(),
        }
    }

    #[inline]
    pub fn total_weight(&self) -> u32 {
        self.matched_properties
            .iter()
            .map(|p| p.calculated_weight)
            .sum()
    }

    pub fn property(&self, name: &str) -> Option<&MatchedProperty> {
        self.matched_properties.iter().find(|p| p.property_name == name)
    }

    /// Append a contribution unless one with the same label is already present.
    /// Returns whether it was added.
    pub fn push_unique(&mut self, property: MatchedProperty) -> bool {
        if self.property(&property.property_name).is_some() {
            return false;
        }
        self.matched_properties.push(property);
        true
    }

    /// Contributions earned by the record's own fields
    pub fn direct_properties(&self) -> impl Iterator<Item = &MatchedProperty> {
        self.matched_properties.iter().filter(|p| p.is_direct())
    }
}

/// Insertion-ordered result accumulator with a (kind, id) index
#[derive(Debug, Default)]
pub struct ResultSet {
    entries: Vec<SearchResult>,
    index: AHashMap<(RecordKind, String), usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, or return the existing one for the same record untouched
    pub fn insert(&mut self, result: SearchResult) -> &mut SearchResult {
        let key = (result.entity_type, result.id.clone());
        let position = match self.index.get(&key).copied() {
            Some(pos) => pos,
            None => {
                self.entries.push(result);
                let pos = self.entries.len() - 1;
                self.index.insert(key, pos);
                pos
            }
        };
        &mut self.entries[position]
    }

    #[inline]
    pub fn get(&self, kind: RecordKind, id: &str) -> Option<&SearchResult> {
        self.position(kind, id).map(|pos| &self.entries[pos])
    }

    #[inline]
    pub fn get_mut(&mut self, kind: RecordKind, id: &str) -> Option<&mut SearchResult> {
        self.position(kind, id).map(move |pos| &mut self.entries[pos])
    }

    #[inline]
    fn position(&self, kind: RecordKind, id: &str) -> Option<usize> {
        self.index.get(&(kind, id.to_string())).copied()
    }

    #[inline]
    pub fn contains(&self, kind: RecordKind, id: &str) -> bool {
        self.position(kind, id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.entries.iter()
    }

    /// Results of one kind, in insertion order
    pub fn of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &SearchResult> {
        self.entries.iter().filter(move |r| r.entity_type == kind)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<SearchResult> {
        self.entries
    }
}
