pub mod action;
pub mod definition;
pub mod location;
pub mod types;
pub mod world;
