mod gis_command_plugin;
mod identity_plugin;

pub use gis_command_plugin::GisCommandPlugin;
pub use identity_plugin::IdentityPlugin;
