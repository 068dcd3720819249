mod random_strategy;
mod round_robin_strategy;

pub use random_strategy::RandomStrategy;
pub use round_robin_strategy::RoundRobinStrategy;

use crate::domain::{LoadBalancerError, LoadBalancingStrategy, StrategyKind};

/// Every selection policy a [`LoadBalancer`](super::LoadBalancer) can be configured with.
#[derive(Debug)]
pub enum Strategy {
    RoundRobin(RoundRobinStrategy),
    Random(RandomStrategy)
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::RoundRobin => Strategy::RoundRobin(RoundRobinStrategy::new()),
            StrategyKind::Random => Strategy::Random(RandomStrategy::new()),
        }
    }
}

impl LoadBalancingStrategy for Strategy {
    fn select_node<'a, N>(&self, nodes: &'a [N]) -> Result<&'a N, LoadBalancerError> {
        match self {
            Strategy::RoundRobin(strategy) => strategy.select_node(nodes),
            Strategy::Random(strategy) => strategy.select_node(nodes),
        }
    }

    fn current_strategy(&self) -> &'static str {
        match self {
            Strategy::RoundRobin(strategy) => strategy.current_strategy(),
            Strategy::Random(strategy) => strategy.current_strategy(),
        }
    }
}
