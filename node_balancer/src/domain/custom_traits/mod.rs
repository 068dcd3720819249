mod loadbalancer_strategy;

pub use loadbalancer_strategy::LoadBalancingStrategy;
