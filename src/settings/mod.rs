//! Configuration loading and resolution.
//!
//! Files and environment variables are layered with the `config` crate into a
//! raw mirror, CLI flags are applied on top, and the result is validated into
//! a [`ResolvedConfig`]. `load` is the entry point.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
