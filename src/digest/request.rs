use super::digestion::{
    Digester,
    DigestionParameters,
    SiteConstraints,
};
use crate::errors::{
    ProtDigestError,
    Result,
};
use crate::mass::{
    PeptideMass,
    RustymsMass,
};
use crate::models::DigestionProduct;
use crate::protease::Protease;
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashSet;
use std::path::Path;

/// A protease given either by registry name or as a full definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProteaseSelection {
    Named(String),
    Custom(Protease),
}

impl ProteaseSelection {
    pub fn resolve(&self) -> Result<Protease> {
        match self {
            ProteaseSelection::Named(name) => Protease::from_name(name)
                .ok_or_else(|| ProtDigestError::UnknownProtease(name.clone())),
            ProteaseSelection::Custom(protease) => Ok(protease.clone()),
        }
    }
}

/// One digestion job, as read from JSON.
///
/// ```json
/// {"sequence": "PEPTIDEK", "protease": "trypsin",
///  "parameters": {"max_missed_cleavages": 1}, "excluded_sites": [3]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestionRequest {
    #[serde(default)]
    pub sequence: Option<String>,
    pub protease: ProteaseSelection,
    #[serde(default)]
    pub parameters: DigestionParameters,
    #[serde(flatten)]
    pub sites: SiteConstraints,
}

impl DigestionRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// One request per line; blank lines are ignored and malformed lines are
    /// logged and skipped.
    pub fn from_ndjson(ndjson: &str) -> Vec<Self> {
        let mut out = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(request) => out.push(request),
                Err(e) => {
                    log::warn!(
                        "Skipping digestion request on line {}: {}",
                        line_num + 1,
                        e
                    );
                }
            }
        }
        out
    }

    pub fn from_ndjson_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let ndjson = std::fs::read_to_string(path)?;
        Ok(Self::from_ndjson(&ndjson))
    }

    pub fn run(&self) -> Result<HashSet<DigestionProduct>> {
        self.run_with_mass(RustymsMass::default())
    }

    /// Fails with [`ProtDigestError::InvalidInput`] before doing anything if
    /// the request has no sequence; an empty sequence is fine.
    pub fn run_with_mass<M: PeptideMass>(&self, mass: M) -> Result<HashSet<DigestionProduct>> {
        let sequence = self.sequence.as_deref().ok_or_else(|| {
            ProtDigestError::InvalidInput("Digestion request has no sequence".to_string())
        })?;
        let protease = self.protease.resolve()?;

        Digester::new(protease, self.parameters.clone())
            .with_mass(mass)
            .digest_with_constraints(sequence, &self.sites)
    }
}
