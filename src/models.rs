use serde::Serialize;
use std::collections::HashSet;

/// A single peptide produced by digesting a protein.
///
/// Positions are 1-based and inclusive: the product covers residues
/// `start_position..=end_position()` of the protein it was cut from.
/// Equality and hashing use every field, so two products with the same
/// tuple collapse into one entry of a digestion result set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, std::hash::Hash, PartialOrd, Ord)]
pub struct DigestionProduct {
    start_position: usize,
    length: usize,
    missed_cleavages: usize,
    n_terminal: bool,
    c_terminal: bool,
}

impl DigestionProduct {
    pub(crate) fn new(
        start_position: usize,
        length: usize,
        missed_cleavages: usize,
        protein_length: usize,
    ) -> Self {
        debug_assert!(start_position >= 1);
        debug_assert!(length >= 1);
        debug_assert!(start_position + length - 1 <= protein_length);
        Self {
            start_position,
            length,
            missed_cleavages,
            n_terminal: start_position == 1,
            c_terminal: start_position + length - 1 == protein_length,
        }
    }

    pub fn start_position(&self) -> usize {
        self.start_position
    }

    /// Last residue (inclusive, 1-based) covered by this product.
    pub fn end_position(&self) -> usize {
        self.start_position + self.length - 1
    }

    /// Number of residues, always at least 1.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn missed_cleavages(&self) -> usize {
        self.missed_cleavages
    }

    pub fn is_n_terminal(&self) -> bool {
        self.n_terminal
    }

    pub fn is_c_terminal(&self) -> bool {
        self.c_terminal
    }

    /// `(start, length, missed, n_terminal, c_terminal)`
    pub fn as_tuple(&self) -> (usize, usize, usize, bool, bool) {
        (
            self.start_position,
            self.length,
            self.missed_cleavages,
            self.n_terminal,
            self.c_terminal,
        )
    }

    /// The amino acid string of this product within `protein`.
    ///
    /// `protein` must be the sequence the product was digested from.
    pub fn peptide<'a>(&self, protein: &'a str) -> &'a str {
        &protein[(self.start_position - 1)..self.end_position()]
    }
}

/// Collapses products that spell the same peptide, keeping the first one seen.
///
/// Repeated stretches in a protein give distinct products (different start
/// positions) with identical sequences; downstream mass lookups only need one.
pub fn unique_peptides<'a>(
    products: impl IntoIterator<Item = &'a DigestionProduct>,
    protein: &'a str,
) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for product in products {
        let peptide = product.peptide(protein);
        if seen.insert(peptide) {
            out.push(peptide);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_flags() {
        let whole = DigestionProduct::new(1, 4, 0, 4);
        assert!(whole.is_n_terminal());
        assert!(whole.is_c_terminal());

        let middle = DigestionProduct::new(2, 2, 1, 4);
        assert!(!middle.is_n_terminal());
        assert!(!middle.is_c_terminal());
        assert_eq!(middle.end_position(), 3);

        let last = DigestionProduct::new(4, 1, 0, 4);
        assert_eq!(last.as_tuple(), (4, 1, 0, false, true));
    }

    #[test]
    fn test_value_equality() {
        let mut set = HashSet::new();
        set.insert(DigestionProduct::new(3, 2, 1, 10));
        set.insert(DigestionProduct::new(3, 2, 1, 10));
        set.insert(DigestionProduct::new(3, 2, 0, 10));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_peptide() {
        let protein = "PEPTIKDEPINK";
        let product = DigestionProduct::new(7, 6, 0, protein.len());
        assert_eq!(product.peptide(protein), "DEPINK");
        assert!(product.is_c_terminal());
    }

    #[test]
    fn test_unique_peptides() {
        let protein = "PEPKPEPKPEPK";
        let products = vec![
            DigestionProduct::new(1, 4, 0, protein.len()),
            DigestionProduct::new(9, 4, 0, protein.len()),
            DigestionProduct::new(1, 8, 1, protein.len()),
        ];
        let unique = unique_peptides(&products, protein);
        assert_eq!(unique, vec!["PEPK", "PEPKPEPK"]);
    }
}
