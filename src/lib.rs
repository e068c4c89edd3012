pub mod config;
pub mod error;
pub mod hardening;
pub mod import;
pub mod models;
pub mod util;

// Convenient re-exports (so call sites can do `adventurelib::Location`, etc.)
pub use error::{AppResult, DomainError};
pub use import::{load_world_dir, load_world_str, parse_locations_yaml};
pub use models::{action::Action, location::Location, types::LocationId, world::World};
