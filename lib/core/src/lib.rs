//! # LSMSearch Core
//!
//! Scoring and ranking engine for a locking-system catalog.
//!
//! This crate provides:
//!
//! - [`DataFile`] - The record catalog (buildings, locks, groups, media)
//! - [`WeightCatalog`] - Base weights per record kind and transitive weights per relationship
//! - [`match_record`] - Per-field full / partial match classification
//! - [`propagate`] - Parent→child transitive weight propagation
//! - [`rank`] - Stable ordering by total weight
//! - [`SearchEngine`] - The whole pipeline over a [`DatasetSource`]
//!
//! ## Example
//!
//! ```rust
//! use lsmsearch_core::{Building, DataFile, InMemoryDataset, SearchEngine};
//!
//! let data = DataFile {
//!     buildings: vec![Building {
//!         id: "b1".to_string(),
//!         short_cut: Some("HOF".to_string()),
//!         name: Some("Head Office".to_string()),
//!         description: Some("HQ and Head Office Annex".to_string()),
//!     }],
//!     ..Default::default()
//! };
//!
//! let engine = SearchEngine::new(InMemoryDataset::new(data));
//! let results = engine.search("head office").unwrap();
//! assert_eq!(results[0].total_weight(), 95);
//! ```

pub mod error;
pub mod kind;
pub mod model;
pub mod weights;
pub mod result;
pub mod matcher;
pub mod propagation;
pub mod ranker;
pub mod engine;

pub use error::{Error, Result};
pub use kind::RecordKind;
pub use model::{Building, DataFile, FieldSpec, Group, Lock, LockType, MediaType, Medium, Record};
pub use weights::{Relationship, WeightCatalog, WeightTable, FULL_MATCH_COEFFICIENT};
pub use result::{MatchType, MatchedProperty, ResultSet, SearchResult};
pub use matcher::{match_record, Query};
pub use propagation::propagate;
pub use ranker::rank;
pub use engine::{search_dataset, DatasetSource, InMemoryDataset, SearchEngine};
