use crate::domain::{BalancerConfig, LoadBalancerError, LoadBalancingStrategy, StrategyKind};
use crate::services::Strategy;

/// Routes each outgoing request to one of the candidate nodes using the
/// configured strategy.
///
/// Shared between request call sites as a
/// [`LoadBalancerType`](crate::utils::LoadBalancerType); every method takes `&self`.
#[derive(Debug)]
pub struct LoadBalancer {
    strategy: Strategy
}


impl LoadBalancer {
    pub fn new(kind: StrategyKind) -> Self {
        tracing::debug!(strategy = %kind, "building load balancer");
        LoadBalancer {
            strategy: Strategy::from(kind)
        }
    }

    pub fn from_config(config: &BalancerConfig) -> Self {
        Self::new(config.strategy)
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        LoadBalancer { strategy }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }
}

impl Default for LoadBalancer {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

impl LoadBalancingStrategy for LoadBalancer {
    #[tracing::instrument(
        name = "Select node",
        skip_all,
        fields(strategy = self.strategy.current_strategy(), candidates = nodes.len())
    )]
    fn select_node<'a, N>(&self, nodes: &'a [N]) -> Result<&'a N, LoadBalancerError> {
        self.strategy.select_node(nodes).map_err(|err| {
            tracing::warn!(error = %err, "no node selected");
            err
        })
    }

    fn current_strategy(&self) -> &'static str {
        self.strategy.current_strategy()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use crate::domain::ServerType;
    use crate::services::RoundRobinStrategy;
    use super::*;

    fn make_test_nodes(count: usize) -> Vec<Arc<ServerType>> {
        (0..count)
            .map(|i| ServerType::new(format!("Server {}", i), format!("http://localhost:{}", 3000 + i)))
            .collect()
    }

    #[test]
    fn test_default_is_round_robin() {
        let load_balancer = LoadBalancer::default();
        assert_eq!(load_balancer.current_strategy(), "round_robin");
        assert!(matches!(load_balancer.strategy(), Strategy::RoundRobin(_)));
    }

    #[test]
    fn test_from_config() {
        let config = BalancerConfig { strategy: StrategyKind::Random };
        let load_balancer = LoadBalancer::from_config(&config);
        assert_eq!(load_balancer.current_strategy(), "random");
    }

    #[test]
    fn test_round_robin_over_servers() {
        let nodes = make_test_nodes(3);
        let load_balancer = LoadBalancer::new(StrategyKind::RoundRobin);

        let picked: Vec<&str> = (0..4)
            .map(|_| load_balancer.select_node(&nodes).unwrap().name.as_str())
            .collect();
        assert_eq!(picked, vec!["Server 0", "Server 1", "Server 2", "Server 0"]);
    }

    #[test]
    fn test_empty_candidates_surface_error() {
        let nodes: Vec<Arc<ServerType>> = Vec::new();
        for kind in [StrategyKind::RoundRobin, StrategyKind::Random] {
            let result = LoadBalancer::new(kind).select_node(&nodes);
            assert!(matches!(result, Err(LoadBalancerError::EmptyCandidateSet)));
        }
    }

    #[test]
    fn test_with_strategy_resumes_rotation() {
        let nodes = make_test_nodes(4);
        let load_balancer = LoadBalancer::with_strategy(Strategy::RoundRobin(RoundRobinStrategy::with_position(6)));
        assert_eq!(load_balancer.select_node(&nodes).unwrap().name, "Server 2");
    }

    #[tokio::test]
    async fn test_node_list_changes_between_dispatches() {
        let load_balancer = Arc::new(LoadBalancer::default());
        let worker_hosts = Arc::new(RwLock::new(make_test_nodes(3)));

        for _ in 0..3 {
            let hosts = worker_hosts.read().await;
            load_balancer.select_node(hosts.as_slice()).unwrap();
        }

        worker_hosts.write().await.truncate(2);

        let hosts = worker_hosts.read().await;
        // 3 mod 2
        assert_eq!(load_balancer.select_node(hosts.as_slice()).unwrap().name, "Server 1");
    }
}
