//! Infrastructure layer: cache backends and the upstream provider client.

pub mod cache;
pub mod upstream;
