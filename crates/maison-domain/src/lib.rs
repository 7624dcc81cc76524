//! maison-domain
//!
//! Pure booking models (room catalog, draft, wizard steps, confirmation).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod booking;
pub mod catalog;
pub mod confirmation;
pub mod contact;

pub use booking::*;
pub use catalog::*;
pub use confirmation::*;
pub use contact::*;
