//! Per-request context carrier.
//!
//! The RPC framework creates one [`RequestContext`] per inbound request and
//! threads it through the lifecycle hooks by value. Entries are keyed by
//! type, so the framework's own entries and the reserved timer entry cannot
//! collide.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::operation::{OperationIdentity, OutcomeStatus};

/// Owned, per-request key-value carrier (one entry per type).
#[derive(Default)]
pub struct RequestContext {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Entries are type-erased; only the count is printable.
        f.debug_struct("RequestContext")
            .field("entries", &self.values.len())
            .finish()
    }
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a value, replacing any previous entry of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Read back the entry of the given type, if one was attached.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
    }

    /// Attach the operation identity. Called by the framework once routing
    /// has resolved the target.
    pub fn set_identity(&mut self, identity: OperationIdentity) {
        self.insert(identity);
    }

    /// Operation identity, absent until routing succeeds.
    pub fn identity(&self) -> Option<&OperationIdentity> {
        self.get::<OperationIdentity>()
    }

    /// Attach the outcome status. Called by the framework once a response or
    /// error has been produced.
    pub fn set_status(&mut self, status: OutcomeStatus) {
        self.insert(status);
    }

    /// Outcome status, absent until completion.
    pub fn status(&self) -> Option<OutcomeStatus> {
        self.get::<OutcomeStatus>().copied()
    }
}
