use super::{
    CleavageRule,
    Protease,
};

pub const TRYPSIN: &str = "trypsin";
pub const THERMOLYSIN: &str = "thermolysin";

const REGISTRY_NAMES: [&str; 2] = [TRYPSIN, THERMOLYSIN];

impl Protease {
    /// Trypsin: C-terminal side of K and R, not when the next residue is P.
    pub fn trypsin() -> Self {
        Protease::new(
            TRYPSIN,
            vec![CleavageRule::cut_after(['K', 'R']).with_prohibited_c_term(["P"])],
        )
    }

    /// Thermolysin: N-terminal side of A, F, I, L, M and V, not when preceded by D or E.
    ///
    /// Source: <https://web.expasy.org/peptide_mass/peptide-mass-doc.html#table1>
    pub fn thermolysin() -> Self {
        Protease::new(
            THERMOLYSIN,
            vec![CleavageRule::cut_before(['A', 'F', 'I', 'L', 'M', 'V'])
                .with_prohibited_n_term(["D", "E"])],
        )
    }

    /// Looks up one of the built in proteases, ignoring case.
    pub fn from_name(name: &str) -> Option<Protease> {
        match name.to_ascii_lowercase().as_str() {
            TRYPSIN => Some(Self::trypsin()),
            THERMOLYSIN => Some(Self::thermolysin()),
            _ => None,
        }
    }

    pub fn registry_names() -> &'static [&'static str] {
        &REGISTRY_NAMES
    }
}
