//! Identifier allocation with bounded collision retry.

use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{CreateOutcome, LinkStore};
use crate::error::AllocateError;
use crate::utils::id_generator::{AlphanumericGenerator, IdGenerator};
use tracing::{debug, error, warn};

/// Identifier length and retry budget used for every allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub id_length: usize,
    pub max_attempts: u32,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            id_length: 7,
            max_attempts: 10,
        }
    }
}

/// Allocates fresh identifiers for URLs.
///
/// Each attempt generates a candidate and tries a conditional insert. A
/// collision moves on to the next attempt; a store failure aborts at once.
pub struct LinkAllocator<S: LinkStore + ?Sized, G: IdGenerator = AlphanumericGenerator> {
    store: Arc<S>,
    generator: G,
    policy: AllocationPolicy,
}

impl<S: LinkStore + ?Sized> LinkAllocator<S> {
    /// Creates an allocator drawing random alphanumeric identifiers.
    pub fn new(store: Arc<S>, policy: AllocationPolicy) -> Self {
        Self::with_generator(store, AlphanumericGenerator, policy)
    }
}

impl<S: LinkStore + ?Sized, G: IdGenerator> LinkAllocator<S, G> {
    /// Creates an allocator with a custom candidate source.
    pub fn with_generator(store: Arc<S>, generator: G, policy: AllocationPolicy) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    pub fn policy(&self) -> AllocationPolicy {
        self.policy
    }

    /// Stores `url` under a newly generated identifier and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AllocateError::Exhausted`] if every one of `max_attempts`
    /// candidates collided; nothing is written in that case.
    ///
    /// Returns [`AllocateError::Store`] on the first store failure.
    pub async fn allocate(&self, url: &str) -> Result<String, AllocateError> {
        let AllocationPolicy {
            id_length,
            max_attempts,
        } = self.policy;

        for attempt in 1..=max_attempts {
            let record = LinkRecord::new(self.generator.generate(id_length), url);

            match self.store.create_if_absent(&record).await {
                Ok(CreateOutcome::Created) => {
                    debug!(id = %record.id, attempt, "Allocated link id");
                    return Ok(record.id);
                }
                Ok(CreateOutcome::AlreadyExists) => {
                    metrics::counter!("short_link_collisions_total").increment(1);
                    warn!(id = %record.id, attempt, max_attempts, "Link id collision");
                }
                Err(e) => {
                    metrics::counter!("short_link_store_errors_total").increment(1);
                    return Err(e.into());
                }
            }
        }

        metrics::counter!("short_link_allocation_exhausted_total").increment(1);
        error!(max_attempts, "Link id allocation exhausted");

        Err(AllocateError::Exhausted {
            attempts: max_attempts,
        })
    }
}
