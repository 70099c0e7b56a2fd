use crate::errors::Result;
use crate::models::DigestionProduct;
use csv::Writer;
use serde::Serialize;
use std::io;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ProductRecord<'a> {
    start: usize,
    end: usize,
    length: usize,
    missed_cleavages: usize,
    n_terminal: bool,
    c_terminal: bool,
    peptide: &'a str,
}

impl<'a> ProductRecord<'a> {
    fn new(product: &DigestionProduct, protein: &'a str) -> Self {
        Self {
            start: product.start_position(),
            end: product.end_position(),
            length: product.length(),
            missed_cleavages: product.missed_cleavages(),
            n_terminal: product.is_n_terminal(),
            c_terminal: product.is_c_terminal(),
            peptide: product.peptide(protein),
        }
    }
}

/// Writes `products` of `protein` as CSV, one row per product, sorted by position.
pub fn write_products<'a, W: io::Write>(
    products: impl IntoIterator<Item = &'a DigestionProduct>,
    protein: &str,
    out: W,
) -> Result<()> {
    let mut sorted: Vec<&DigestionProduct> = products.into_iter().collect();
    sorted.sort_unstable();

    let mut writer = Writer::from_writer(out);
    for product in sorted {
        writer.serialize(ProductRecord::new(product, protein))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_products_to_csv<'a, P: AsRef<Path>>(
    products: impl IntoIterator<Item = &'a DigestionProduct>,
    protein: &str,
    out_path: P,
) -> Result<()> {
    let start = Instant::now();
    let file = std::fs::File::create(out_path.as_ref())?;
    write_products(products, protein, file)?;
    log::info!(
        "Writing took {:?} -> {:?}",
        start.elapsed(),
        out_path.as_ref()
    );
    Ok(())
}
