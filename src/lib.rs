//! Core crate exports for discovering GTK 4 themes and linking them into the
//! user's GTK configuration directory.
//!
//! The binary is a thin shell over [`session::run`] and [`activation`]; every
//! filesystem location flows through a [`ThemeLayout`] so the whole pipeline
//! can be pointed at temporary directories.

pub mod activation;
pub mod app_dirs;
pub mod catalog;
pub mod error;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod selection;
pub mod session;

pub use activation::{InstallReport, ResetReport, install, reset};
pub use catalog::{CatalogEntry, Scope, ThemeCatalog, ThemeEntry, discover};
pub use error::{DiscoveryError, SelectionError};
pub use layout::{LinkPair, ThemeLayout};
pub use selection::{Choice, Selection};
pub use session::{SessionOutcome, run};
