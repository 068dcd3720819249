mod load_balancer;
mod strategies;

pub use load_balancer::LoadBalancer;
pub use strategies::{RandomStrategy, RoundRobinStrategy, Strategy};
