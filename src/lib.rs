//! # LSMSearch
//!
//! Ranked free-text search over a locking-system dataset: buildings, the
//! locks installed in them, access groups and the media issued to them.
//!
//! Every result explains its score. Each matched field contributes a
//! weight (full match = 10 × base weight, partial match = base weight), and
//! matches on a building or group flow down to its locks or media as
//! transitive contributions.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! lsmsearch --data-file sv_lsm_data.json --http-port 5000
//! curl 'http://localhost:5000/api/lsm/search?input=Head%20Office'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use lsmsearch::prelude::*;
//! use std::sync::Arc;
//!
//! let storage = Arc::new(StorageManager::new("sv_lsm_data.json"));
//! let engine = SearchEngine::new(storage);
//!
//! for result in engine.search("Head Office").unwrap() {
//!     println!("{} {} {}", result.entity_type, result.id, result.total_weight());
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `lsmsearch-core` - Record catalog, weight tables, matching, propagation, ranking
//! - `lsmsearch-storage` - JSON dataset loading and snapshot cache
//! - `lsmsearch-api` - REST API

// Re-export core types
pub use lsmsearch_core::{
    Building, Lock, Group, Medium, LockType, MediaType, DataFile, Record, RecordKind,
    WeightCatalog, WeightTable, Relationship,
    MatchType, MatchedProperty, SearchResult, ResultSet,
    SearchEngine, DatasetSource, InMemoryDataset,
    Error, Result,
};

// Re-export storage
pub use lsmsearch_storage::{StorageManager, StorageStatus};

// Re-export API
pub use lsmsearch_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DataFile, RecordKind,
        MatchType, MatchedProperty, SearchResult,
        SearchEngine, DatasetSource, InMemoryDataset,
        Error, Result,
        StorageManager,
        RestApi,
    };
}
