use crate::error::{AppResult, DomainError};
use crate::models::definition::Definition;
use crate::models::location::Location;
use crate::models::world::World;
use crate::util::{io_at, list_yaml_files_guarded, resolve_content_dir};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

// ====== Entry points ======

/// Loads every YAML file of `content_base` (or of its `subdir`) into one world.
/// Files are read in sorted order and the first failure aborts the load.
pub fn load_world_dir(content_base: &Path, subdir: Option<&str>) -> AppResult<World> {
    let dir = resolve_content_dir(content_base, subdir)?;
    let files = list_yaml_files_guarded(&dir)?;
    tracing::info!(dir = %dir.display(), files = files.len(), "loading content");

    let mut world = World::new();
    for (idx, path) in files.iter().enumerate() {
        tracing::debug!(file = %path.display(), "[{}/{}] parsing", idx + 1, files.len());

        let text = fs::read_to_string(path)
            .map_err(io_at("reading", path))
            .inspect_err(|e| tracing::error!(file = %path.display(), error = %e, "content file unreadable"))?;
        let locations = parse_locations_yaml(&text).inspect_err(|e| {
            tracing::error!(file = %path.display(), error = %e, "content file rejected");
        })?;

        let count = locations.len();
        for location in locations {
            let id = location.id().clone();
            world.insert(location).inspect_err(|e| {
                tracing::error!(file = %path.display(), location = %id, error = %e, "location rejected");
            })?;
        }
        tracing::info!(file = %path.display(), locations = count, "content file loaded");
    }

    tracing::info!(
        locations = world.len(),
        actions = world.action_count(),
        "content load complete"
    );
    Ok(world)
}

/// Builds a world from a single YAML document.
pub fn load_world_str(text: &str) -> AppResult<World> {
    let mut world = World::new();
    for location in parse_locations_yaml(text)? {
        world.insert(location)?;
    }
    Ok(world)
}

/// Parses a document of the form `{ <location id>: <location definition>, ... }`.
/// An empty document holds no locations.
pub fn parse_locations_yaml(text: &str) -> AppResult<Vec<Location>> {
    let mut doc: Value = serde_yaml::from_str(text)?;
    // `<<: *anchor` merge keys are left as literal keys by the parser
    doc.apply_merge()?;

    let map = match doc {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(map) => map,
        _ => {
            return Err(DomainError::Validation {
                field: "document",
                message: "expected a mapping of location id to location definition".into(),
            });
        }
    };

    let mut locations = Vec::with_capacity(map.len());
    for (key, value) in &map {
        let id = key.as_str().ok_or_else(|| DomainError::Validation {
            field: "location",
            message: format!("location id must be a string, got {key:?}"),
        })?;

        let location = Definition::from_value(value, "location")
            .and_then(|def| Location::from_definition(id, def.mapping()))
            .inspect_err(|e| tracing::error!(location = id, error = %e, "invalid location definition"))?;

        tracing::debug!(
            location = %location,
            actions = location.actions().len(),
            "parsed location"
        );
        locations.push(location);
    }

    Ok(locations)
}
