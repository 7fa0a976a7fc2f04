//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes `components` in reading order; the site has one route.

pub mod home;
