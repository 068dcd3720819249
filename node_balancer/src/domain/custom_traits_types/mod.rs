mod balancer_config;
mod server_type;

pub use balancer_config::{BalancerConfig, StrategyKind};
pub use server_type::ServerType;
