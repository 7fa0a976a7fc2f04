//! Static site content.
//!
//! DESIGN
//! ======
//! Every catalog here is immutable `'static` data fixed at build time.
//! Components borrow from these tables directly; nothing mutates them.

pub mod about;
pub mod contact;
pub mod nav;
pub mod profile;
pub mod projects;
pub mod status;
