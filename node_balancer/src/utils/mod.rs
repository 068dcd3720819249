mod local_types;
mod telemetry;

pub use local_types::{LoadBalancerType, WorkerHostType, WorkerHostsType};
pub use telemetry::init_tracing;
