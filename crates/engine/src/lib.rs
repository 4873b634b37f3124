// Docker Engine access for the chatops bot.

// Core infrastructure
pub mod client;
pub mod ops;
pub mod fake;

// Domain modules
pub mod container;
pub mod image;
pub mod system;
pub mod format;
