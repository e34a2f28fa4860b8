//! Guild structure replication engine.
//!
//! Replicates the roles, channel hierarchy and permission overwrites of one guild
//! onto another, and wipes a guild's structure. The engine is split into:
//!
//! - [`remap`] - source to destination ID translation table for one run
//! - [`overwrite`] - rewrites overwrite targets through the remapper
//! - [`plan`] - phase order, entity selection and create parameters
//! - [`call`] - sequential pacing and rate-limit retries of remote calls
//! - [`clone`] / [`reset`] - the two entry points
//!
//! All Discord access goes through the traits in [`remote`], so the engine can run
//! against Serenity or an in-memory fake.

pub mod call;
pub mod clone;
mod driver;
pub mod overwrite;
pub mod plan;
pub mod progress;
pub mod remap;
pub mod remote;
pub mod reset;

#[cfg(test)]
pub(crate) mod test;

pub use call::CallPolicy;
pub use clone::CloneService;
pub use progress::LogProgress;
pub use remap::IdRemapper;
pub use reset::ResetService;
