pub mod booking;
pub mod catalog;
pub mod config;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let definitions = system::definitions()
        .into_iter()
        .chain(booking::definitions())
        .chain(catalog::definitions())
        .chain(config::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}
