//! Carbon footprint estimation and eco-score engine.
//!
//! [`footprint`] holds the static location/product tables and the per-purchase
//! impact formula. [`session`] keeps a session's purchase history and derives
//! the eco score, badges, mascot mood, and suggestions from it.

pub mod config;
pub mod error;
pub mod footprint;
pub mod session;
pub mod telemetry;
