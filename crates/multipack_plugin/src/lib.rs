mod plugin;
mod plugin_driver;

pub use crate::{
  plugin::{HookUsage, Plugin, SharedPlugin},
  plugin_driver::PluginDriver,
};
