use node_balancer::{domain::{BalancerConfig, LoadBalancerError, LoadBalancingStrategy, ServerType}, services::LoadBalancer, utils::{init_tracing, LoadBalancerType, WorkerHostsType}};
use tokio::sync::RwLock;
use std::sync::Arc;

const REQUESTS: usize = 8;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    init_tracing()?;

    let worker_hosts: WorkerHostsType = Arc::new(RwLock::new(vec![
        ServerType::new("Server 0".to_string(), "http://localhost:3000".to_string()),
        ServerType::new("Server 1".to_string(), "http://localhost:3001".to_string()),
        ServerType::new("Server 2".to_string(), "http://localhost:3002".to_string()),
        ServerType::new("Server 3".to_string(), "http://localhost:3003".to_string()),
    ]));

    let app_load_balancer: LoadBalancerType = Arc::new(LoadBalancer::from_config(&BalancerConfig::default()));
    tracing::info!(strategy = app_load_balancer.current_strategy(), "dispatching {} requests", REQUESTS);

    dispatch_all(&app_load_balancer, &worker_hosts).await?;

    // Simulate a node dropping out of the topology between rounds.
    if let Some(removed) = worker_hosts.write().await.pop() {
        tracing::info!(server = %removed, "node removed from candidate list");
    }

    dispatch_all(&app_load_balancer, &worker_hosts).await?;

    Ok(())
}

async fn dispatch_all(load_balancer: &LoadBalancerType, worker_hosts: &WorkerHostsType) -> color_eyre::Result<()> {
    let handles = (0..REQUESTS).map(|request_id| {
        let load_balancer = load_balancer.clone();
        let worker_hosts = worker_hosts.clone();
        tokio::spawn(async move { dispatch(request_id, load_balancer, worker_hosts).await })
    });

    for result in futures::future::join_all(handles).await {
        result??;
    }
    Ok(())
}

#[tracing::instrument(name = "Dispatch request", skip(load_balancer, worker_hosts), err(Debug))]
async fn dispatch(request_id: usize, load_balancer: LoadBalancerType, worker_hosts: WorkerHostsType) -> Result<(), LoadBalancerError> {
    let hosts = worker_hosts.read().await;
    let server = load_balancer.select_node(hosts.as_slice())?;

    tracing::info!(server = %server.name, address = %server.address_ip, "request routed");
    Ok(())
}
