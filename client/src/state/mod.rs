//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain synchronous model driven by explicit time values,
//! so components only supply clocks and signals.

pub mod contact;
pub mod hero;
