#![doc(test(attr(deny(warnings))))]

//! Maison drives the hotel's multi-step booking form: dates and guests, room
//! choice, guest details and the final confirmation. The wizard logic lives in
//! the `maison-*` crates; this crate adds logging, locale tables and the
//! command shell that stands in for the web form.

pub mod cli;
pub mod i18n;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Maison tracing initialized.");
    });
}
