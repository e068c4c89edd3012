use crate::error::AppResult;
use crate::models::action::Action;
use crate::models::definition::Definition;
use crate::models::types::LocationId;
use serde::Serialize;
use serde_yaml::Mapping;
use std::fmt;

pub const REQUIRED_FIELDS: [&str; 2] = ["name", "actions"];

/// A single place in the game world.
///
/// Content files key each location by its id:
///
/// ```yaml
/// hall:
///   name: Great Hall
///   type: indoors          # optional
///   image: images/hall.png # optional
///   actions:
///     - action: look
///       type: exposition
///       content: A vaulted hall.
/// ```
///
/// The location owns its actions, in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    id: LocationId,
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    image: Option<String>,
    actions: Vec<Action>,
}

impl Location {
    /// `id` is taken as given; a failing action entry surfaces its own error unchanged.
    pub fn from_definition(id: impl Into<LocationId>, definition: &Mapping) -> AppResult<Self> {
        let id = id.into();
        let def = Definition::new(definition);
        def.require(&REQUIRED_FIELDS)?;

        let name = def.str("name")?.to_string();
        let kind = def.opt_str("type")?.map(str::to_string);
        let image = def.opt_str("image")?.map(str::to_string);

        let actions = def
            .seq("actions")?
            .iter()
            .map(|entry| -> AppResult<Action> {
                let entry = Definition::from_value(entry, "actions")?;
                let action = Action::from_definition(entry.mapping())?;
                tracing::debug!(location = %id, %action, "parsed action");
                Ok(action)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            id,
            name,
            kind,
            image,
            actions,
        })
    }

    pub fn id(&self) -> &LocationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// First action, in definition order, that answers to `verb`.
    pub fn find_action(&self, verb: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.answers_to(verb))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
