mod custom_traits;
mod custom_traits_types;
mod error;

pub use custom_traits::LoadBalancingStrategy;
pub use custom_traits_types::{BalancerConfig, ServerType, StrategyKind};
pub use error::LoadBalancerError;
