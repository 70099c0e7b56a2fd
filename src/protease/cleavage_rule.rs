use serde::{
    Deserialize,
    Serialize,
};
use std::collections::BTreeSet;

/// Which side of the matched residue the protease cuts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutDirection {
    /// Cut on the C-terminal side of the residue (trypsin after K/R).
    After,
    /// Cut on the N-terminal side of the residue (thermolysin before L/I/...).
    Before,
}

/// One cleavage chemistry of a protease.
///
/// A rule matches a residue when the residue is one of `cut_residues` and the
/// flanking subsequences satisfy the optional constraints. `None` for a
/// required flank means "no constraint"; `Some` with an empty list can never be
/// satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleavageRule {
    pub cut_residues: BTreeSet<char>,
    pub direction: CutDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_n_term: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibited_n_term: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_c_term: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibited_c_term: Option<Vec<String>>,
}

fn to_flanks<I, S>(flanks: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Some(flanks.into_iter().map(Into::into).collect())
}

impl CleavageRule {
    pub fn new(cut_residues: impl IntoIterator<Item = char>, direction: CutDirection) -> Self {
        Self {
            cut_residues: cut_residues.into_iter().collect(),
            direction,
            required_n_term: None,
            prohibited_n_term: None,
            required_c_term: None,
            prohibited_c_term: None,
        }
    }

    pub fn cut_after(cut_residues: impl IntoIterator<Item = char>) -> Self {
        Self::new(cut_residues, CutDirection::After)
    }

    pub fn cut_before(cut_residues: impl IntoIterator<Item = char>) -> Self {
        Self::new(cut_residues, CutDirection::Before)
    }

    pub fn with_required_n_term<I, S>(mut self, flanks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_n_term = to_flanks(flanks);
        self
    }

    pub fn with_prohibited_n_term<I, S>(mut self, flanks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prohibited_n_term = to_flanks(flanks);
        self
    }

    pub fn with_required_c_term<I, S>(mut self, flanks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_c_term = to_flanks(flanks);
        self
    }

    pub fn with_prohibited_c_term<I, S>(mut self, flanks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prohibited_c_term = to_flanks(flanks);
        self
    }

    pub fn cuts_residue(&self, residue: u8) -> bool {
        self.cut_residues.contains(&char::from(residue))
    }

    /// Checks the flank constraints around the residue at `position` (1-based).
    ///
    /// The first and last residue of the sequence always pass, there is
    /// nothing on the outer side to test.
    pub(crate) fn passes_flanks(&self, residues: &[u8], position: usize) -> bool {
        if position == 1 || position == residues.len() {
            return true;
        }

        let n_term_ok = passes(
            &self.required_n_term,
            &self.prohibited_n_term,
            |flank| has_n_term_flank(residues, position, flank),
        );
        n_term_ok
            && passes(
                &self.required_c_term,
                &self.prohibited_c_term,
                |flank| has_c_term_flank(residues, position, flank),
            )
    }

    /// Canonical cut position for a match at `position`: the residue left of the cut.
    pub(crate) fn cut_position(&self, position: usize) -> usize {
        match self.direction {
            CutDirection::After => position,
            CutDirection::Before => position - 1,
        }
    }

    /// The cut position this rule produces for the residue at `position`
    /// (1-based), if it matches. Positions outside `1..=residues.len()` never match.
    pub fn matches(&self, residues: &[u8], position: usize) -> Option<usize> {
        let residue = *residues.get(position.checked_sub(1)?)?;
        if !self.cuts_residue(residue) {
            return None;
        }
        if !self.passes_flanks(residues, position) {
            return None;
        }
        Some(self.cut_position(position))
    }
}

fn passes(
    required: &Option<Vec<String>>,
    prohibited: &Option<Vec<String>>,
    present: impl Fn(&str) -> bool,
) -> bool {
    let has_required = match required {
        Some(flanks) => flanks.iter().any(|f| present(f.as_str())),
        None => true,
    };
    let has_prohibited = match prohibited {
        Some(flanks) => flanks.iter().any(|f| present(f.as_str())),
        None => false,
    };
    has_required && !has_prohibited
}

/// True if `flank` sits immediately before the residue at `position`.
fn has_n_term_flank(residues: &[u8], position: usize, flank: &str) -> bool {
    let flank = flank.as_bytes();
    // Only position - 1 residues precede the one at `position`.
    if flank.len() >= position {
        return false;
    }
    let start = position - 1 - flank.len();
    &residues[start..position - 1] == flank
}

/// True if `flank` sits immediately after the residue at `position`.
fn has_c_term_flank(residues: &[u8], position: usize, flank: &str) -> bool {
    let flank = flank.as_bytes();
    if position + flank.len() > residues.len() {
        return false;
    }
    &residues[position..position + flank.len()] == flank
}
