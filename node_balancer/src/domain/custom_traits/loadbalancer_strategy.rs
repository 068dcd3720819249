use crate::domain::LoadBalancerError;

/// A policy for picking one node out of a caller-supplied candidate list.
///
/// The list is passed fresh on every call and is never retained, so callers
/// are free to change it between selections.
pub trait LoadBalancingStrategy: Send + Sync {
    /// Picks the node the next request should be routed to.
    ///
    /// Fails with [`LoadBalancerError::EmptyCandidateSet`] when `nodes` is empty.
    fn select_node<'a, N>(&self, nodes: &'a [N]) -> Result<&'a N, LoadBalancerError>;

    fn current_strategy(&self) -> &'static str;
}
