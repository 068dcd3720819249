use rand::Rng;
use crate::domain::{LoadBalancerError, LoadBalancingStrategy};

/// Picks a uniformly random candidate on every call.
#[derive(Debug, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy
    }
}

impl LoadBalancingStrategy for RandomStrategy {
    #[tracing::instrument(name = "Select node via Random Strategy", skip_all, level = "trace")]
    fn select_node<'a, N>(&self, nodes: &'a [N]) -> Result<&'a N, LoadBalancerError> {
        if nodes.is_empty() {
            return Err(LoadBalancerError::EmptyCandidateSet);
        }

        let index = rand::thread_rng().gen_range(0..nodes.len());
        tracing::trace!(index, candidates = nodes.len(), "random pick");

        Ok(&nodes[index])
    }

    fn current_strategy(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_nodes_error() {
        let empty: Vec<String> = Vec::new();
        let result = RandomStrategy::new().select_node(&empty);
        assert!(matches!(result, Err(LoadBalancerError::EmptyCandidateSet)));
    }

    #[test]
    fn test_single_node() {
        let strategy = RandomStrategy::new();
        for _ in 0..10 {
            assert_eq!(*strategy.select_node(&["only-node"]).unwrap(), "only-node");
        }
    }

    #[test]
    fn test_picks_come_from_list() {
        let strategy = RandomStrategy::new();
        let nodes = ["a", "b", "c"];

        for _ in 0..100 {
            let picked = strategy.select_node(&nodes).unwrap();
            assert!(nodes.iter().any(|node| std::ptr::eq(node, picked)));
        }
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(RandomStrategy.current_strategy(), "random");
    }
}
