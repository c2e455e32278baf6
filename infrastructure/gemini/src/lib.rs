pub mod client;
pub mod recommendation_generator;
