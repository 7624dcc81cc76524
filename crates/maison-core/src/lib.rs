//! maison-core
//!
//! Booking wizard logic: step gating, night and guest arithmetic, submission.
//! Depends on maison-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod catalog_service;
pub mod deep_link;
pub mod dispatch;
pub mod error;
pub mod guest_counter;
pub mod night_calculator;
pub mod pricing;
pub mod session;
pub mod step_controller;
pub mod submission_handler;
pub mod validation;

pub use catalog_service::*;
pub use deep_link::*;
pub use dispatch::*;
pub use error::CoreError;
pub use guest_counter::*;
pub use night_calculator::*;
pub use pricing::*;
pub use session::*;
pub use step_controller::*;
pub use submission_handler::*;
pub use validation::*;
