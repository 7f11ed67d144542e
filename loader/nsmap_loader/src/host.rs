//! The narrow interface between a resolver and the pipeline hosting it.
//!
//! A host keeps an ordered list of resolvers and asks them, in order, to
//! locate a symbolic name it could not resolve. Activation subscribes a
//! resolver; the returned [`Activation`] unsubscribes it again.

use std::path::PathBuf;
use std::sync::Arc;

/// Something that can locate the source file of a symbolic name.
pub trait Resolve: Send + Sync {
    /// The file for `name`, or `None` if it is not this resolver's to load.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<F> Resolve for F
where
    F: Fn(&str) -> Option<PathBuf> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Handle identifying one subscription within a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolverId(u64);

impl ResolverId {
    pub const fn from_raw(raw: u64) -> Self {
        ResolverId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A module-loading pipeline that accepts resolvers.
pub trait ResolverHost {
    /// Subscribe `resolver`, at the front of the list if `prepend`.
    fn add_resolver(&mut self, resolver: Arc<dyn Resolve>, prepend: bool) -> ResolverId;

    /// Unsubscribe. Returns false if `id` is not subscribed.
    fn remove_resolver(&mut self, id: ResolverId) -> bool;
}

/// A live subscription of a resolver with a host.
#[must_use = "dropping an Activation leaves the resolver subscribed with no way to remove it"]
#[derive(Debug, PartialEq, Eq)]
pub struct Activation {
    id: ResolverId,
}

impl Activation {
    /// Subscribe `resolver` with `host`.
    pub fn new<H>(resolver: Arc<dyn Resolve>, host: &mut H, prepend: bool) -> Self
    where
        H: ResolverHost + ?Sized,
    {
        Activation {
            id: host.add_resolver(resolver, prepend),
        }
    }

    pub fn id(&self) -> ResolverId {
        self.id
    }

    /// Unsubscribe from `host`. Returns false if the host no longer knew it.
    pub fn deactivate<H>(self, host: &mut H) -> bool
    where
        H: ResolverHost + ?Sized,
    {
        host.remove_resolver(self.id)
    }
}
