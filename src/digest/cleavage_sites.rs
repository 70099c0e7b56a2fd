use crate::protease::Protease;
use std::collections::BTreeSet;

impl Protease {
    /// Sorted, unique cut positions of this protease in `sequence`.
    ///
    /// A cut position `c` means "between residue `c` and `c + 1`" (1-based),
    /// e.g. PE|PTIDE has a cut position of 2, whether the rule cuts after E or
    /// before P. Positions in `excluded_sites` (for instance modified residues
    /// the protease cannot cleave at) are dropped, as are cuts that would land
    /// on either end of the sequence.
    pub fn cleavage_sites(&self, sequence: &str, excluded_sites: &BTreeSet<usize>) -> Vec<usize> {
        let residues = sequence.as_bytes();
        let len = residues.len();

        let mut sites: Vec<usize> = (1..=len)
            .filter_map(|position| self.cut_position_at(residues, position))
            .filter(|&cut| cut > 0 && cut < len && !excluded_sites.contains(&cut))
            .collect();

        // Cut-before and cut-after rules can land on the same boundary.
        sites.sort_unstable();
        sites.dedup();
        sites
    }
}
