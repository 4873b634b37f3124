// Domain-driven module structure for the chatops bot.

// Core infrastructure
pub mod auth;
pub mod conf;
pub mod state;

// Domain modules
pub mod dispatch;
pub mod flow;
pub mod runtime;
