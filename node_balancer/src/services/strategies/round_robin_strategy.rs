use std::sync::atomic::{AtomicUsize, Ordering};
use crate::domain::{LoadBalancerError, LoadBalancingStrategy};

/// Cycles through the candidate list in order.
///
/// `position` counts every node served so far and is only reduced modulo the
/// length of the list handed to each call, so the list may grow or shrink
/// between calls. On overflow the counter wraps to zero.
#[derive(Debug, Default)]
pub struct RoundRobinStrategy {
    position: AtomicUsize
}

impl RoundRobinStrategy {
    pub fn new() -> Self {
        RoundRobinStrategy {
            position: AtomicUsize::new(0)
        }
    }

    /// Starts the rotation at `position` instead of zero.
    pub fn with_position(position: usize) -> Self {
        RoundRobinStrategy {
            position: AtomicUsize::new(position)
        }
    }

    pub fn position(&self) -> usize {
        self.position.load(Ordering::Relaxed)
    }
}

impl LoadBalancingStrategy for RoundRobinStrategy {
    #[tracing::instrument(name = "Select node via Round Robin Strategy", skip_all, level = "trace")]
    fn select_node<'a, N>(&self, nodes: &'a [N]) -> Result<&'a N, LoadBalancerError> {
        if nodes.is_empty() {
            return Err(LoadBalancerError::EmptyCandidateSet);
        }

        let position = self.position.fetch_add(1, Ordering::Relaxed);
        let index = position % nodes.len();
        tracing::trace!(position, index, candidates = nodes.len(), "round robin pick");

        Ok(&nodes[index])
    }

    fn current_strategy(&self) -> &'static str {
        "round_robin"
    }
}
