use std::sync::Arc;
use crate::{domain::ServerType, services::LoadBalancer};
use tokio::sync::RwLock;

pub type LoadBalancerType = Arc<LoadBalancer>;
pub type WorkerHostType = Arc<ServerType>;
pub type WorkerHostsType = Arc<RwLock<Vec<WorkerHostType>>>;
