//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, so
//! entity models never leak into the service or controller layers.

pub mod template;

#[cfg(test)]
mod test;
