//! Client-side node selection.
//!
//! A [`LoadBalancer`](services::LoadBalancer) is handed the current list of
//! candidate nodes on every request and picks one according to its configured
//! [`LoadBalancingStrategy`](domain::LoadBalancingStrategy). Round robin is the
//! default; its cursor is a single atomic counter, so one balancer can be shared
//! by every request call site.

pub mod services;
pub mod domain;
pub mod utils;
