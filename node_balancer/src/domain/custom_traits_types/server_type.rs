use std::{fmt, sync::Arc};
use crate::utils::WorkerHostType;


/// A server a request can be routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerType {
    pub name: String,
    pub address_ip: String
}

impl ServerType {
    pub fn new(name: String, address_ip: String) -> WorkerHostType {
        Arc::new(ServerType {
            name,
            address_ip
        })
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address_ip)
    }
}
