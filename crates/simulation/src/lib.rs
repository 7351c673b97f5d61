//! Multi-day price-limit compounding simulator.
//!
//! Projects, day by day, how far a price can travel under repeated daily
//! limit moves in each direction, and what a held position gains or loses at
//! each step. All computation here is pure and synchronous: no shared state,
//! no I/O, and a horizon bounded small enough that every call terminates in
//! constant time.

/// Prelude module for convenient imports.
pub mod prelude;

/// Simulator facade over both directions.
pub mod simulator;
/// Per-direction trajectory engine.
pub mod trajectory;

pub use simulator::{SimulationRequest, Simulator};
pub use trajectory::{PRICE_FLOOR, project};
