//! Configuration and the data model shared by the storage and builder layers.

pub mod config;
pub mod models;
