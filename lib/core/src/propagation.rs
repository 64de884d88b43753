//! Relationship propagation
//!
//! A parent's direct field matches contribute discounted, transitive weight
//! to every child that references it. Children without a direct match are
//! synthesized into the result set when they receive at least one
//! transitive contribution.

use crate::error::Result;
use crate::model::Record;
use crate::result::{MatchType, MatchedProperty, ResultSet, SearchResult};
use crate::weights::{Relationship, WeightCatalog, WeightTable};
use ahash::AHashMap;

/// Apply one relationship to the accumulated results.
///
/// `children` are the records of the relationship's child kind, in catalog
/// order. Running this twice over the same result set changes nothing:
/// transitive labels already present on a child are not added again.
///
/// Returns the number of contributions added.
pub fn propagate(
    relationship: &Relationship,
    children: &[&dyn Record],
    results: &mut ResultSet,
    catalog: &WeightCatalog,
) -> Result<usize> {
    let table = catalog.relationship_table(relationship.name)?;

    let mut by_parent: AHashMap<&str, Vec<&dyn Record>> = AHashMap::new();
    for child in children {
        // Records without the foreign key have no parent for this relationship
        match child.foreign_key(relationship.foreign_key) {
            Some(parent_id) if !parent_id.is_empty() => {
                by_parent.entry(parent_id).or_default().push(*child)
            }
            _ => {}
        }
    }

    // Derive every parent's contributions before touching children
    let parents: Vec<(String, Vec<MatchedProperty>)> = results
        .of_kind(relationship.parent)
        .map(|parent| {
            (
                parent.id.clone(),
                derive(relationship, table, catalog, parent),
            )
        })
        .filter(|(_, derived)| !derived.is_empty())
        .collect();

    let mut added = 0;
    for (parent_id, derived) in parents {
        let Some(linked) = by_parent.get(parent_id.as_str()) else {
            continue;
        };

        for child in linked {
            match results.get_mut(child.kind(), child.id()) {
                Some(existing) => {
                    for property in &derived {
                        if existing.push_unique(property.clone()) {
                            added += 1;
                        }
                    }
                }
                None => {
                    let mut synthesized =
                        SearchResult::new(child.id(), child.kind(), child.payload()?);
                    for property in &derived {
                        if synthesized.push_unique(property.clone()) {
                            added += 1;
                        }
                    }
                    results.insert(synthesized);
                }
            }
        }
    }

    Ok(added)
}

/// Transitive contributions a parent passes to each of its children
fn derive(
    relationship: &Relationship,
    table: WeightTable,
    catalog: &WeightCatalog,
    parent: &SearchResult,
) -> Vec<MatchedProperty> {
    parent
        .direct_properties()
        .filter_map(|property| {
            let weight = table.get(&property.property_name)?;
            let multiplier = match property.search_match_type {
                MatchType::FullMatch => catalog.full_match_coefficient,
                _ => 1,
            };
            Some(MatchedProperty::new(
                format!("{}_{}", relationship.parent.as_str(), property.property_name),
                weight * multiplier,
                MatchType::TransitiveMatch,
            ))
        })
        .collect()
}
