//! Field matcher
//!
//! Classifies every eligible field of a record against the query and
//! weights it from the record kind's table.

use crate::error::Result;
use crate::model::{is_key_field, Record};
use crate::result::{MatchType, MatchedProperty, SearchResult};
use crate::weights::WeightCatalog;

/// A query prepared for case-insensitive comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Classify one field value; `None` means no match
    pub fn classify(&self, value: &str) -> Option<MatchType> {
        let value = value.to_lowercase();
        if value == self.folded {
            Some(MatchType::FullMatch)
        } else if value.contains(&self.folded) {
            Some(MatchType::PartialMatch)
        } else {
            None
        }
    }
}

/// Match one record against the query.
///
/// Returns `None` when no field contributed.
pub fn match_record(
    record: &dyn Record,
    query: &Query,
    catalog: &WeightCatalog,
) -> Result<Option<SearchResult>> {
    let kind = record.kind();
    let mut matched = Vec::new();

    for (field, value) in record.fields() {
        if is_key_field(field) {
            continue;
        }
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };
        let Some(match_type) = query.classify(value) else {
            continue;
        };

        let base = catalog.base_weight(kind, field)?;
        let weight = match match_type {
            MatchType::FullMatch => base * catalog.full_match_coefficient,
            _ => base,
        };
        matched.push(MatchedProperty::new(field, weight, match_type));
    }

    if matched.is_empty() {
        return Ok(None);
    }

    let mut result = SearchResult::new(record.id(), kind, record.payload()?);
    result.matched_properties.extend(matched);
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kind::RecordKind;
    use crate::model::{Building, Lock, LockType, Medium};
    use crate::weights::WeightTable;

    fn head_office() -> Building {
        Building {
            id: "b1".to_string(),
            short_cut: Some("HOF".to_string()),
            name: Some("Head Office".to_string()),
            description: Some("HQ and Head Office Annex".to_string()),
        }
    }

    #[test]
    fn test_full_and_partial_matches() {
        let result = match_record(&head_office(), &Query::new("Head Office"), &WeightCatalog::BUILTIN)
            .unwrap()
            .unwrap();

        assert_eq!(result.id, "b1");
        assert_eq!(result.entity_type, RecordKind::Building);
        assert_eq!(result.matched_properties.len(), 2);

        let name = result.property("Name").unwrap();
        assert_eq!(name.calculated_weight, 90);
        assert_eq!(name.search_match_type, MatchType::FullMatch);

        let description = result.property("Description").unwrap();
        assert_eq!(description.calculated_weight, 5);
        assert_eq!(description.search_match_type, MatchType::PartialMatch);

        assert_eq!(result.total_weight(), 95);
        assert_eq!(result.entity["name"], "Head Office");
    }

    #[test]
    fn test_no_match_yields_none() {
        let result = match_record(&head_office(), &Query::new("Warehouse"), &WeightCatalog::BUILTIN).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_case_insensitive() {
        for input in ["HEAD OFFICE", "head office", "HeAd OfFiCe"] {
            let result = match_record(&head_office(), &Query::new(input), &WeightCatalog::BUILTIN)
                .unwrap()
                .unwrap();
            assert_eq!(result.property("Name").unwrap().search_match_type, MatchType::FullMatch);
            assert_eq!(result.total_weight(), 95);
        }
    }

    #[test]
    fn test_partial_weights_on_lock() {
        let lock = Lock {
            id: "l1".to_string(),
            building_id: Some("b1".to_string()),
            name: Some("1.OG Office".to_string()),
            floor: Some("1.OG".to_string()),
            serial_number: Some("UID-0042".to_string()),
            ..Default::default()
        };

        let result = match_record(&lock, &Query::new(".OG"), &WeightCatalog::BUILTIN)
            .unwrap()
            .unwrap();
        assert_eq!(result.total_weight(), 16);

        let result = match_record(&lock, &Query::new("UID-"), &WeightCatalog::BUILTIN)
            .unwrap()
            .unwrap();
        assert_eq!(result.total_weight(), 8);
    }

    #[test]
    fn test_enum_field_matches_by_name() {
        let lock = Lock {
            id: "l1".to_string(),
            lock_type: Some(LockType::SmartHandle),
            ..Default::default()
        };

        let result = match_record(&lock, &Query::new("smarthandle"), &WeightCatalog::BUILTIN)
            .unwrap()
            .unwrap();
        let property = result.property("Type").unwrap();
        assert_eq!(property.search_match_type, MatchType::FullMatch);
        assert_eq!(property.calculated_weight, 30);
    }

    #[test]
    fn test_identifier_and_foreign_key_never_match() {
        let medium = Medium {
            id: "3f2a-7781".to_string(),
            group_id: Some("9c1d-5520".to_string()),
            owner: Some("Ann".to_string()),
            ..Default::default()
        };

        for input in ["3f2a", "9c1d", "3f2a-7781", "9c1d-5520"] {
            let result = match_record(&medium, &Query::new(input), &WeightCatalog::BUILTIN).unwrap();
            assert!(result.is_none(), "matched key field with {}", input);
        }
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let building = Building {
            id: "b1".to_string(),
            short_cut: Some(String::new()),
            name: None,
            description: Some("Annex".to_string()),
        };

        let result = match_record(&building, &Query::new("Annex"), &WeightCatalog::BUILTIN)
            .unwrap()
            .unwrap();
        assert_eq!(result.matched_properties.len(), 1);
    }

    #[test]
    fn test_full_match_is_ten_times_partial() {
        let catalog = WeightCatalog::BUILTIN;
        let building = Building {
            id: "b1".to_string(),
            short_cut: Some("Annex".to_string()),
            name: Some("Annex".to_string()),
            description: Some("Annex".to_string()),
        };

        let full = match_record(&building, &Query::new("annex"), &catalog).unwrap().unwrap();
        let partial = match_record(&building, &Query::new("nne"), &catalog).unwrap().unwrap();

        for field in ["ShortCut", "Name", "Description"] {
            let base = catalog.base_weight(RecordKind::Building, field).unwrap();
            assert_eq!(full.property(field).unwrap().calculated_weight, base * 10);
            assert_eq!(partial.property(field).unwrap().calculated_weight, base);
        }
    }

    #[test]
    fn test_unweighted_field_is_an_error() {
        const NAME_ONLY: WeightCatalog = WeightCatalog {
            full_match_coefficient: 10,
            records: &[(RecordKind::Building, WeightTable(&[("Name", 9)]))],
            relationships: &[],
        };

        let err = match_record(&head_office(), &Query::new("HQ"), &NAME_ONLY).unwrap_err();
        assert!(matches!(err, Error::UnweightedField { ref field, .. } if field == "Description"));
    }

    #[test]
    fn test_classify() {
        let query = Query::new("Office");
        assert_eq!(query.classify("office"), Some(MatchType::FullMatch));
        assert_eq!(query.classify("Head Office"), Some(MatchType::PartialMatch));
        assert_eq!(query.classify("Offi"), None);
    }
}
