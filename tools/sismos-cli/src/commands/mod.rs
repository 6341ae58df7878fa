pub mod classify;
pub mod config;
pub mod directions;
pub mod fetch;
pub mod magnitudes;
pub mod report;
pub mod source;
pub mod table;
