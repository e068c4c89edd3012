use crate::error::AppResult;
use crate::models::definition::Definition;
use serde::Serialize;
use serde_yaml::Mapping;
use std::fmt;

pub const REQUIRED_FIELDS: [&str; 2] = ["action", "type"];

/// A command available at a location, as written in a content file:
///
/// ```yaml
/// - action: look
///   aliases: [l]
///   type: exposition
///   content: >
///     Some information shown when the player looks.
/// ```
///
/// `type` tells the game engine how to interpret `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    action: String,
    aliases: Vec<String>,
    #[serde(rename = "type")]
    kind: String,
    content: String,
}

impl Action {
    pub fn from_definition(definition: &Mapping) -> AppResult<Self> {
        let def = Definition::new(definition);
        def.require(&REQUIRED_FIELDS)?;

        Ok(Self {
            action: def.str("action")?.to_string(),
            aliases: def.str_list("aliases")?,
            kind: def.str("type")?.to_string(),
            content: def.opt_str("content")?.unwrap_or_default().to_string(),
        })
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when `verb` names this action or one of its aliases (case-insensitive).
    pub fn answers_to(&self, verb: &str) -> bool {
        let verb = verb.trim();
        !verb.is_empty()
            && std::iter::once(&self.action)
                .chain(&self.aliases)
                .any(|name| name.eq_ignore_ascii_case(verb))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({})", self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn build(yaml: &str) -> AppResult<Action> {
        let m: Mapping = serde_yaml::from_str(yaml).unwrap();
        Action::from_definition(&m)
    }

    #[test]
    fn full_definition() {
        let a = build("action: look\ntype: exposition\ncontent: You see a room.").unwrap();
        assert_eq!(a.action(), "look");
        assert_eq!(a.kind(), "exposition");
        assert!(a.aliases().is_empty());
        assert_eq!(a.content(), "You see a room.");
    }

    #[test]
    fn optional_fields_default() {
        let a = build("action: wait\ntype: exposition").unwrap();
        assert!(a.aliases().is_empty());
        assert_eq!(a.content(), "");
    }

    #[test]
    fn aliases_keep_order() {
        let a = build("action: look\ntype: exposition\naliases: [l, examine, peer]").unwrap();
        assert_eq!(a.aliases(), ["l", "examine", "peer"]);
    }

    #[test]
    fn missing_type_only() {
        let err = build("action: look").unwrap_err();
        assert_eq!(err.missing_fields(), Some(&["type"][..]));
    }

    #[test]
    fn missing_action_only() {
        let err = build("type: exposition").unwrap_err();
        assert_eq!(err.missing_fields(), Some(&["action"][..]));
    }

    #[test]
    fn missing_both() {
        let err = build("{}").unwrap_err();
        assert_eq!(err.missing_fields(), Some(&["action", "type"][..]));
    }

    #[test]
    fn falsy_values_are_present() {
        let a = build("action: ''\ntype: ''\naliases: []\ncontent: ''").unwrap();
        assert_eq!(a.action(), "");
        assert_eq!(a.kind(), "");
        assert!(a.aliases().is_empty());
        assert_eq!(a.content(), "");
    }

    #[test]
    fn wrong_shape_is_not_missing() {
        let err = build("action: [look]\ntype: exposition").unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "action", .. }));

        let err = build("action: look\ntype: ~").unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "type", .. }));

        let err = build("action: look\ntype: exposition\ncontent: 3").unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { field: "content", .. }));
    }

    #[test]
    fn answers_to_name_and_aliases() {
        let a = build("action: look\ntype: exposition\naliases: [l, Examine]").unwrap();
        assert!(a.answers_to("look"));
        assert!(a.answers_to(" LOOK "));
        assert!(a.answers_to("l"));
        assert!(a.answers_to("examine"));
        assert!(!a.answers_to("lo"));
        assert!(!a.answers_to(""));
    }

    #[test]
    fn display_names_the_action() {
        let a = build("action: look\ntype: exposition").unwrap();
        assert_eq!(a.to_string(), "Action(look)");
    }
}
