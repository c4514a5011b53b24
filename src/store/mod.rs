//! Shortcut Record Store
//!
//! Persistence layer for shortcut entities, backed by an embedded SQLite
//! database. The store enforces the two write-time invariants: every
//! display field is present (after trimming) and `id` is unique.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchpad::store::{NewShortcut, ShortcutStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = ShortcutStore::open(StoreConfig::new("launchpad_data"))?;
//!
//!     store
//!         .insert(
//!             NewShortcut::new(
//!                 "calculator",
//!                 "Calculator",
//!                 "Launch Windows Calculator",
//!                 "🧮",
//!                 "andrejlauncher://calculator",
//!                 "bg-blue-500 hover:bg-blue-600",
//!             )
//!             .sort_order(1),
//!         )
//!         .await?;
//!
//!     let active = store.list_active().await?;
//!     println!("{} active shortcuts", active.len());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod engine;
pub mod error;
pub mod types;

pub use defaults::default_shortcuts;
pub use engine::{ShortcutStore, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use types::{validate, NewShortcut, Shortcut, ValidationError};
