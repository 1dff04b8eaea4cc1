// Data model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::*;
pub use requests::EvaluateFitRequest;
pub use responses::EvaluateFitResponse;
