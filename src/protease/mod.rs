pub mod cleavage_rule;
pub mod registry;

pub use cleavage_rule::{
    CleavageRule,
    CutDirection,
};

use crate::errors::Result;
use serde::{
    Deserialize,
    Serialize,
};
use std::path::Path;

/// A named, ordered list of cleavage rules.
///
/// Rules are tried in order for every residue and the first one that matches
/// decides the cut, so multi-rule proteases must list the more specific
/// chemistry first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protease {
    pub name: String,
    pub rules: Vec<CleavageRule>,
}

impl Protease {
    pub fn new(name: impl Into<String>, rules: Vec<CleavageRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[CleavageRule] {
        &self.rules
    }

    /// Cut position produced by the first rule matching the residue at `position` (1-based).
    pub fn cut_position_at(&self, residues: &[u8], position: usize) -> Option<usize> {
        self.rules
            .iter()
            .find_map(|rule| rule.matches(residues, position))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        // Both rules can cut at D; the first one cuts after it, the second before.
        let protease = Protease::new(
            "two-rules",
            vec![
                CleavageRule::cut_after(['D']).with_required_c_term(["G"]),
                CleavageRule::cut_before(['D', 'E']),
            ],
        );
        let seq = b"ADGADE";
        assert_eq!(protease.cut_position_at(seq, 2), Some(2));
        // First rule fails its flank at position 5, so the second one applies.
        assert_eq!(protease.cut_position_at(seq, 5), Some(4));
        assert_eq!(protease.cut_position_at(seq, 6), Some(5));
        assert_eq!(protease.cut_position_at(seq, 3), None);
    }

    #[test]
    fn test_protease_json() {
        let json = r#"{
            "name": "lys-c",
            "rules": [
                {"cut_residues": ["K"], "direction": "after"}
            ]
        }"#;
        let protease = Protease::from_json(json).unwrap();
        assert_eq!(protease.name(), "lys-c");
        assert_eq!(protease.rules().len(), 1);
        assert_eq!(protease.rules()[0].direction, CutDirection::After);

        let back = serde_json::to_string(&protease).unwrap();
        assert_eq!(Protease::from_json(&back).unwrap(), protease);
    }

    #[test]
    fn test_bad_protease_json() {
        let out = Protease::from_json(r#"{"name": "broken"}"#);
        assert!(out.is_err(), "Missing rules should not parse: {:?}", out);
    }
}
