//! Business logic layer for daka
//!
//! Calendar arithmetic, the earnings projection and punch registration.

pub mod calendar;
pub mod projection;
pub mod punch;

pub use projection::Projection;
pub use punch::PunchService;
