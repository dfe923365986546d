mod error_classification;
mod gateway;
mod upstream;

pub use error_classification::TransportFailure;
pub use gateway::LambdaGateway;
pub use upstream::apply_outbound;
