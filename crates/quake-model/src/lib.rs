//! Sismos Quake Model
//!
//! Defines the data contracts for earthquake records:
//! - **Earthquake:** One record of the public feed (date, depth, magnitude, reference)
//! - **Measure:** A numeric feed value that may arrive as a number or as text with a unit
//! - **LocationRecord:** Anything that carries a free-text geographic reference
//!
//! Field names on the wire follow the feed (`Fecha`, `Profundidad`,
//! `Magnitud`, `RefGeografica`, `FechaUpdate`).

pub mod earthquake;
pub mod location;
pub mod measure;

pub use earthquake::*;
pub use location::*;
pub use measure::*;
