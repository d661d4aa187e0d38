//! Search configuration.

use serde::{Deserialize, Serialize};
use crate::model::Direction;
use crate::{Error, Result};

/// Relationship type traversed when none is configured.
pub const DEFAULT_REL_TYPE: &str = "KNOWS";

/// What to do when a candidate node has no value for an attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAttributePolicy {
    /// The candidate fails that attribute index; the search goes on.
    #[default]
    NoMatch,
    /// Surface `Error::AttributeNotFound` and stop the search.
    Fail,
}

/// What to do when enumerating a node's relations fails mid-search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationErrorPolicy {
    /// Drop the branch rooted at that node, record a warning, keep siblings.
    #[default]
    SkipBranch,
    /// Surface the error as a hard failure.
    Abort,
}

/// Knobs for one search. Depth is passed per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The acquaintance relationship type.
    pub rel_type: String,
    pub direction: Direction,
    pub missing_attribute: MissingAttributePolicy,
    pub on_relation_error: RelationErrorPolicy,
    /// Stop once this many paths are recorded.
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rel_type: DEFAULT_REL_TYPE.to_string(),
            direction: Direction::Both,
            missing_attribute: MissingAttributePolicy::default(),
            on_relation_error: RelationErrorPolicy::default(),
            max_results: None,
        }
    }
}

impl SearchConfig {
    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = rel_type.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_missing_attribute(mut self, policy: MissingAttributePolicy) -> Self {
        self.missing_attribute = policy;
        self
    }

    pub fn with_relation_error(mut self, policy: RelationErrorPolicy) -> Self {
        self.on_relation_error = policy;
        self
    }

    pub fn with_max_results(mut self, limit: usize) -> Self {
        self.max_results = Some(limit);
        self
    }

    /// Check the configuration against a requested depth.
    pub fn validate(&self, max_depth: usize) -> Result<()> {
        if max_depth == 0 {
            return Err(Error::InvalidConfig("max_depth must be at least 1".into()));
        }
        if self.rel_type.is_empty() {
            return Err(Error::InvalidConfig("rel_type must not be empty".into()));
        }
        if self.max_results == Some(0) {
            return Err(Error::InvalidConfig("max_results must be positive when set".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.rel_type, "KNOWS");
        assert_eq!(config.direction, Direction::Both);
        assert_eq!(config.missing_attribute, MissingAttributePolicy::NoMatch);
        assert_eq!(config.on_relation_error, RelationErrorPolicy::SkipBranch);
        assert_eq!(config.max_results, None);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SearchConfig::from_json_str(
            r#"{"rel_type": "FRIEND_OF", "on_relation_error": "abort", "max_results": 10}"#,
        )
        .unwrap();

        assert_eq!(config.rel_type, "FRIEND_OF");
        assert_eq!(config.on_relation_error, RelationErrorPolicy::Abort);
        assert_eq!(config.max_results, Some(10));
        assert_eq!(config.direction, Direction::Both);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        let err = SearchConfig::from_json_str(r#"{"missing_attribute": "guess"}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_validate() {
        let config = SearchConfig::default();
        assert!(config.validate(1).is_ok());
        assert!(matches!(config.validate(0), Err(Error::InvalidConfig(_))));
        assert!(config.clone().with_rel_type("").validate(2).is_err());
        assert!(config.with_max_results(0).validate(2).is_err());
    }
}
