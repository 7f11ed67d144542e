//! In-process resolver pipeline.
//!
//! The reference [`ResolverHost`]: an ordered resolver list consulted on
//! every lookup, with the load step delegated to a [`SourceLoader`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::error::LoadError;
use crate::host::{Resolve, ResolverHost, ResolverId};
use crate::source::{LoadedSource, SourceLoader};

/// Ordered list of subscribed resolvers.
#[derive(Default)]
pub struct Pipeline {
    resolvers: Vec<(ResolverId, Arc<dyn Resolve>)>,
    next_id: u64,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Subscribed ids, in consultation order.
    pub fn ids(&self) -> Vec<ResolverId> {
        self.resolvers.iter().map(|(id, _)| *id).collect()
    }

    /// Ask each resolver in order; the first path wins.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.resolvers
            .iter()
            .find_map(|(_, resolver)| resolver.resolve(name))
    }

    /// Locate `name` and load it through `source`.
    ///
    /// `Ok(None)` when no resolver claims the name.
    pub fn load(
        &self,
        name: &str,
        source: &dyn SourceLoader,
    ) -> Result<Option<LoadedSource>, LoadError> {
        let Some(path) = self.locate(name) else {
            return Ok(None);
        };
        source.load(name, &path).map(Some)
    }
}

impl ResolverHost for Pipeline {
    fn add_resolver(&mut self, resolver: Arc<dyn Resolve>, prepend: bool) -> ResolverId {
        let id = ResolverId::from_raw(self.next_id);
        self.next_id += 1;
        if prepend {
            self.resolvers.insert(0, (id, resolver));
        } else {
            self.resolvers.push((id, resolver));
        }
        debug!(id = id.raw(), prepend, resolvers = self.resolvers.len(), "resolver added");
        id
    }

    fn remove_resolver(&mut self, id: ResolverId) -> bool {
        let Some(pos) = self.resolvers.iter().position(|(known, _)| *known == id) else {
            return false;
        };
        self.resolvers.remove(pos);
        debug!(id = id.raw(), resolvers = self.resolvers.len(), "resolver removed");
        true
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("resolvers", &self.ids())
            .field("next_id", &self.next_id)
            .finish()
    }
}
