//! Search orchestration: match → propagate → rank

use crate::error::{Error, Result};
use crate::kind::RecordKind;
use crate::matcher::{match_record, Query};
use crate::model::DataFile;
use crate::propagation::propagate;
use crate::ranker::rank;
use crate::result::{ResultSet, SearchResult};
use crate::weights::WeightCatalog;
use std::sync::Arc;
use tracing::debug;

/// Supplies a read-only snapshot of the dataset for one search
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Arc<DataFile>>;
}

/// A dataset held in memory, handed out as-is on every load
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset(Arc<DataFile>);

impl InMemoryDataset {
    pub fn new(data: DataFile) -> Self {
        Self(Arc::new(data))
    }
}

impl DatasetSource for InMemoryDataset {
    fn load(&self) -> Result<Arc<DataFile>> {
        Ok(self.0.clone())
    }
}

impl<S: DatasetSource + ?Sized> DatasetSource for Arc<S> {
    fn load(&self) -> Result<Arc<DataFile>> {
        (**self).load()
    }
}

/// Ranks the whole catalog against a free-text query
pub struct SearchEngine<S> {
    source: S,
    catalog: &'static WeightCatalog,
}

impl<S: DatasetSource> SearchEngine<S> {
    /// Engine scoring with the built-in weight catalog
    pub fn new(source: S) -> Self {
        Self::with_catalog(source, &WeightCatalog::BUILTIN)
    }

    pub fn with_catalog(source: S, catalog: &'static WeightCatalog) -> Self {
        Self { source, catalog }
    }

    #[inline]
    pub fn catalog(&self) -> &WeightCatalog {
        self.catalog
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search the current dataset snapshot.
    ///
    /// An empty query is rejected; any failure fails the whole call.
    pub fn search(&self, input: &str) -> Result<Vec<SearchResult>> {
        let query = Query::new(input);
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let data = self.source.load()?;
        search_dataset(&data, &query, self.catalog)
    }
}

/// Run the full pipeline over one dataset snapshot
pub fn search_dataset(
    data: &DataFile,
    query: &Query,
    catalog: &WeightCatalog,
) -> Result<Vec<SearchResult>> {
    let mut results = ResultSet::new();

    for kind in RecordKind::ALL {
        for record in data.records(kind) {
            if let Some(result) = match_record(record, query, catalog)? {
                results.insert(result);
            }
        }
    }
    debug!(query = query.as_str(), direct = results.len(), "matched records");

    for relationship in catalog.relationships() {
        let children = data.records(relationship.child);
        let added = propagate(relationship, &children, &mut results, catalog)?;
        debug!(
            relationship = relationship.name,
            added,
            total = results.len(),
            "propagated transitive weights"
        );
    }

    Ok(rank(results))
}
