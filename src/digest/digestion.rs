use super::enumerate::products_for_start;
use super::filter::ProductFilter;
use crate::errors::{
    ProtDigestError,
    Result,
};
use crate::mass::{
    MassType,
    PeptideMass,
    RustymsMass,
};
use crate::models::DigestionProduct;
use crate::protease::Protease;
use rayon::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::{
    BTreeSet,
    HashSet,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Filters applied to every candidate peptide. `None` means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestionParameters {
    pub max_missed_cleavages: Option<usize>,
    pub min_peptide_length: Option<usize>,
    pub max_peptide_length: Option<usize>,
    pub min_peptide_mass: Option<f64>,
    pub max_peptide_mass: Option<f64>,
    /// Mass mode used for the mass bounds.
    pub mass_type: MassType,
}

impl DigestionParameters {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Per-protein position constraints, all 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConstraints {
    /// Cut positions the protease may not cleave (e.g. modified residues).
    /// A site of 2 blocks the cut after K in PKPTIDE.
    pub excluded_sites: BTreeSet<usize>,
    /// When non-empty, every product must cover at least one of these residues.
    pub required_positions: BTreeSet<usize>,
}

/// Digests protein sequences with one protease and one set of parameters.
#[derive(Debug, Clone)]
pub struct Digester<M = RustymsMass> {
    pub protease: Protease,
    pub parameters: DigestionParameters,
    pub mass: M,
}

impl Digester {
    pub fn new(protease: Protease, parameters: DigestionParameters) -> Self {
        Self {
            protease,
            parameters,
            mass: RustymsMass::default(),
        }
    }
}

impl<M> Digester<M> {
    /// Swaps the mass calculator used by the mass bounds.
    pub fn with_mass<N: PeptideMass>(self, mass: N) -> Digester<N> {
        Digester {
            protease: self.protease,
            parameters: self.parameters,
            mass,
        }
    }
}

fn check_sequence(sequence: &str) -> Result<()> {
    if !sequence.is_ascii() {
        return Err(ProtDigestError::InvalidInput(format!(
            "Protein sequences must be one ASCII character per residue, got {:?}",
            sequence
        )));
    }
    Ok(())
}

/// The N-terminus plus the residue after every cut site.
fn start_positions(cut_sites: &[usize]) -> Vec<usize> {
    std::iter::once(1)
        .chain(cut_sites.iter().map(|site| site + 1))
        .collect()
}

impl<M: PeptideMass> Digester<M> {
    /// Cut positions of `sequence`, rejecting input the digest would reject.
    pub fn cleavage_sites(
        &self,
        sequence: &str,
        excluded_sites: &BTreeSet<usize>,
    ) -> Result<Vec<usize>> {
        check_sequence(sequence)?;
        Ok(self.protease.cleavage_sites(sequence, excluded_sites))
    }

    pub fn digest(&self, sequence: &str) -> Result<HashSet<DigestionProduct>> {
        self.digest_with_constraints(sequence, &SiteConstraints::default())
    }

    /// All distinct products of `sequence`.
    ///
    /// An empty sequence is valid and yields nothing.
    pub fn digest_with_constraints(
        &self,
        sequence: &str,
        constraints: &SiteConstraints,
    ) -> Result<HashSet<DigestionProduct>> {
        let cut_sites = self.cleavage_sites(sequence, &constraints.excluded_sites)?;
        let filter = ProductFilter::new(
            &self.parameters,
            &constraints.required_positions,
            &self.mass,
        );

        let mut products = HashSet::new();
        for start in start_positions(&cut_sites) {
            products.extend(products_for_start(sequence, &cut_sites, start, &filter)?);
        }

        log::debug!(
            "{}: {} cut sites, {} products for a sequence of length {}",
            self.protease.name(),
            cut_sites.len(),
            products.len(),
            sequence.len()
        );
        Ok(products)
    }

    /// Same as [`Digester::digest_with_constraints`], ordered by start, length and missed cleavages.
    pub fn digest_sorted(
        &self,
        sequence: &str,
        constraints: &SiteConstraints,
    ) -> Result<Vec<DigestionProduct>> {
        let mut out: Vec<DigestionProduct> = self
            .digest_with_constraints(sequence, constraints)?
            .into_iter()
            .collect();
        out.sort_unstable();
        Ok(out)
    }
}

impl<M: PeptideMass + Sync> Digester<M> {
    /// Parallel version of [`Digester::digest_with_constraints`]; start positions are
    /// enumerated independently on the rayon pool.
    pub fn par_digest(
        &self,
        sequence: &str,
        constraints: &SiteConstraints,
    ) -> Result<HashSet<DigestionProduct>> {
        let cut_sites = self.cleavage_sites(sequence, &constraints.excluded_sites)?;
        let filter = ProductFilter::new(
            &self.parameters,
            &constraints.required_positions,
            &self.mass,
        );

        let per_start: Vec<Vec<DigestionProduct>> = start_positions(&cut_sites)
            .into_par_iter()
            .map(|start| products_for_start(sequence, &cut_sites, start, &filter))
            .collect::<Result<_>>()?;

        Ok(per_start.into_iter().flatten().collect())
    }

    /// Digests every sequence, in parallel across sequences.
    pub fn digest_multiple(&self, sequences: &[Arc<str>]) -> Result<Vec<HashSet<DigestionProduct>>> {
        let start = Instant::now();
        let out: Vec<HashSet<DigestionProduct>> = sequences
            .par_iter()
            .map(|seq| self.digest(seq.as_ref()))
            .collect::<Result<_>>()?;

        let num_products: usize = out.iter().map(|x| x.len()).sum();
        log::info!(
            "Digested {} sequences into {} products in {:?}",
            sequences.len(),
            num_products,
            start.elapsed()
        );
        Ok(out)
    }
}
