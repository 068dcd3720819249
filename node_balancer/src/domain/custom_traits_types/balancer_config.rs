use std::{fmt, str::FromStr};
use serde::Deserialize;
use crate::domain::LoadBalancerError;

/// Names one of the available selection policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    RoundRobin,
    Random
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::RoundRobin => "round_robin",
            StrategyKind::Random => "random",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = LoadBalancerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "round_robin" => Ok(StrategyKind::RoundRobin),
            "random" => Ok(StrategyKind::Random),
            other => Err(LoadBalancerError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings used to build a [`LoadBalancer`](crate::services::LoadBalancer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BalancerConfig {
    #[serde(default)]
    pub strategy: StrategyKind
}
