//! Server Module
//!
//! Configuration, application state, and initialization.
//!
//! - **`config`** - Startup configuration loaded from the environment
//! - **`state`** - `AppState` and its `FromRef` projections
//! - **`init`** - Pool creation, migrations, router assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
