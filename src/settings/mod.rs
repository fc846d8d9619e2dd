//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point. It layers the config file, extra
//! `--config` files, `THEMELINK__*` environment variables and CLI flags, and
//! returns a [`ResolvedConfig`] whose [`ThemeLayout`](themelink::ThemeLayout)
//! drives the rest of the program.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
