//! Lambda handler and event parsing

pub mod handler;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{AppState, function_handler as handler, handle_group_query};
