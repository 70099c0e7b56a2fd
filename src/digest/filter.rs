use super::digestion::DigestionParameters;
use crate::errors::Result;
use crate::mass::PeptideMass;
use std::collections::BTreeSet;

/// Decides whether a candidate peptide `[start, end]` (1-based, inclusive) is kept.
///
/// Checks are independent and any failing one rejects the candidate. Inverted
/// bounds (min > max) are not an error, they simply reject everything.
#[derive(Debug)]
pub struct ProductFilter<'a, M: ?Sized> {
    pub parameters: &'a DigestionParameters,
    pub required_positions: &'a BTreeSet<usize>,
    pub mass: &'a M,
}

impl<'a, M: PeptideMass + ?Sized> ProductFilter<'a, M> {
    pub fn new(
        parameters: &'a DigestionParameters,
        required_positions: &'a BTreeSet<usize>,
        mass: &'a M,
    ) -> Self {
        Self {
            parameters,
            required_positions,
            mass,
        }
    }

    pub fn accepts(&self, protein: &str, start: usize, end: usize) -> Result<bool> {
        let length = end - start + 1;

        if !self.required_positions.is_empty()
            && self.required_positions.range(start..=end).next().is_none()
        {
            return Ok(false);
        }

        if let Some(max) = self.parameters.max_peptide_length {
            if length > max {
                return Ok(false);
            }
        }
        if let Some(min) = self.parameters.min_peptide_length {
            if length < min {
                return Ok(false);
            }
        }

        let max_mass = self.parameters.max_peptide_mass;
        let min_mass = self.parameters.min_peptide_mass;
        if max_mass.is_some() || min_mass.is_some() {
            let peptide = &protein[(start - 1)..end];
            let mass = self
                .mass
                .peptide_mass(peptide, self.parameters.mass_type)?;

            if max_mass.is_some_and(|max| mass > max) {
                return Ok(false);
            }
            if min_mass.is_some_and(|min| mass < min) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
