// ABOUTME: Actor module - the producer and consumer loops over a shared account.
// ABOUTME: Provides the Actor trait, configuration, reports, and the shutdown signal.

mod actor;
mod config;
mod consumer;
mod producer;
mod shutdown;

pub use actor::{Actor, ActorReport};
pub use config::ActorConfig;
pub use consumer::Consumer;
pub use producer::Producer;
pub use shutdown::Shutdown;

#[cfg(test)]
mod actor_test;
