//! Pure response building: raw items to a group, and a group to a reply.

pub mod aggregate;
pub mod response_builder;

pub use aggregate::aggregate;
pub use response_builder::{GroupResponse, error_response, to_response};
