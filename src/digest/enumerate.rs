use super::filter::ProductFilter;
use crate::errors::Result;
use crate::mass::PeptideMass;
use crate::models::DigestionProduct;

/// Every product starting at `start` (1-based) that passes `filter`.
///
/// Walks the sorted `cut_sites` at or after `start`, proposing the peptide that
/// ends at each site, then the peptide that runs to the C-terminus. The
/// peptide ending at a site is charged with the sites passed over before it;
/// once that count exceeds `max_missed_cleavages` no longer peptide can be
/// valid and the walk stops. Products come out with non-decreasing missed
/// cleavage counts.
pub fn products_for_start<M: PeptideMass + ?Sized>(
    protein: &str,
    cut_sites: &[usize],
    start: usize,
    filter: &ProductFilter<'_, M>,
) -> Result<Vec<DigestionProduct>> {
    let protein_length = protein.len();
    let max_missed = filter.parameters.max_missed_cleavages;
    let within_budget = |missed: usize| max_missed.map_or(true, |max| missed <= max);

    let mut products = Vec::new();
    let mut missed = 0;

    let first = cut_sites.partition_point(|&site| site < start);
    for &site in &cut_sites[first..] {
        if filter.accepts(protein, start, site)? {
            products.push(DigestionProduct::new(
                start,
                site - start + 1,
                missed,
                protein_length,
            ));
        }

        missed += 1;
        if !within_budget(missed) {
            break;
        }
    }

    if protein_length > 0
        && within_budget(missed)
        && filter.accepts(protein, start, protein_length)?
    {
        products.push(DigestionProduct::new(
            start,
            protein_length - start + 1,
            missed,
            protein_length,
        ));
    }

    log::trace!(
        "{} products from start position {} ({} cut sites)",
        products.len(),
        start,
        cut_sites.len() - first
    );
    Ok(products)
}
