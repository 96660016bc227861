//! Shared plumbing for Holonet services: health probes, request-id and
//! tracing layers, and subscriber setup.

pub mod health;
pub mod middleware;
pub mod tracing;
