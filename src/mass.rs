use crate::errors::{
    ProtDigestError,
    Result,
};
use regex::Regex;
use rustyms::error::{
    Context,
    CustomError,
};
use rustyms::LinearPeptide;
use rustyms::MultiChemical;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassType {
    #[default]
    Monoisotopic,
    Average,
}

impl From<MassType> for rustyms::MassMode {
    fn from(x: MassType) -> Self {
        match x {
            MassType::Monoisotopic => rustyms::MassMode::Monoisotopic,
            MassType::Average => rustyms::MassMode::Average,
        }
    }
}

/// Anything that can turn a peptide sequence into a neutral mass in daltons.
///
/// Only consulted by the digestion filter when a mass bound is set. Errors are
/// propagated out of the digestion, they never count as a pass or a fail.
pub trait PeptideMass {
    fn peptide_mass(&self, sequence: &str, mass_type: MassType) -> Result<f64>;
}

impl<F> PeptideMass for F
where
    F: Fn(&str, MassType) -> Result<f64>,
{
    fn peptide_mass(&self, sequence: &str, mass_type: MassType) -> Result<f64> {
        self(sequence, mass_type)
    }
}

/// Unmodified peptide masses (residues plus water) computed with `rustyms`.
#[derive(Debug, Clone)]
pub struct RustymsMass {
    invalid_residue: Regex,
}

impl Default for RustymsMass {
    fn default() -> Self {
        Self {
            // The 20 standard amino acids plus selenocysteine (U) and pyrrolysine (O).
            invalid_residue: Regex::new("[^ACDEFGHIKLMNOPQRSTUVWY]").unwrap(),
        }
    }
}

impl PeptideMass for RustymsMass {
    fn peptide_mass(&self, sequence: &str, mass_type: MassType) -> Result<f64> {
        if let Some(mat) = self.invalid_residue.find(sequence) {
            return Err(ProtDigestError::InvalidResidue {
                residue: sequence[mat.start()..].chars().next().unwrap_or_default(),
                sequence: sequence.to_string(),
            });
        }
        if sequence.is_empty() {
            return Err(ProtDigestError::InvalidInput(
                "Cannot compute the mass of an empty peptide".to_string(),
            ));
        }

        let peptide = LinearPeptide::pro_forma(sequence)?;
        let formulas = peptide.formulas();
        if formulas.len() != 1 {
            return Err(CustomError::error(
                "Peptide does not have a single molecular formula",
                sequence,
                Context::none(),
            )
            .into());
        }
        Ok(formulas[0].mass(mass_type.into()).value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rustyms_mass() {
        let calc = RustymsMass::default();
        let mono = calc
            .peptide_mass("PEPTIDE", MassType::Monoisotopic)
            .unwrap();
        assert!((mono - 799.36).abs() < 0.01, "Got mass {}", mono);

        let avg = calc.peptide_mass("PEPTIDE", MassType::Average).unwrap();
        assert!(avg > mono, "Average {} should exceed monoisotopic {}", avg, mono);
        assert!((avg - mono) < 1.0);
    }

    #[test]
    fn test_invalid_residue() {
        let calc = RustymsMass::default();
        let out = calc.peptide_mass("PEPXIDE", MassType::Monoisotopic);
        match out {
            Err(ProtDigestError::InvalidResidue { residue, sequence }) => {
                assert_eq!(residue, 'X');
                assert_eq!(sequence, "PEPXIDE");
            }
            other => panic!("Expected an invalid residue error, got {:?}", other),
        }

        assert!(calc.peptide_mass("peptide", MassType::Monoisotopic).is_err());
    }

    #[test]
    fn test_closure_mass() {
        let per_residue = |seq: &str, _: MassType| -> Result<f64> { Ok(seq.len() as f64 * 100.0) };
        assert_eq!(
            per_residue.peptide_mass("PEPK", MassType::Average).unwrap(),
            400.0
        );
    }
}
