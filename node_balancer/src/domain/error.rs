use thiserror::Error;


#[derive(Error, Debug)]
pub enum LoadBalancerError {
    #[error("Found no candidate nodes to select from")]
    EmptyCandidateSet,
    #[error("Unknown load balancing strategy '{0}', supported: round_robin, random")]
    UnknownStrategy(String)
}
