//! Enzymatic digestion of protein sequences into candidate peptides.
//!
//! ```
//! use protdigest::digest::digestion::{Digester, DigestionParameters};
//! use protdigest::protease::Protease;
//!
//! let parameters = DigestionParameters {
//!     max_missed_cleavages: Some(1),
//!     ..Default::default()
//! };
//! let digester = Digester::new(Protease::trypsin(), parameters);
//! let products = digester.digest("PEPTIDEKPINK").unwrap();
//! // KP is not cleaved by trypsin, so only the whole sequence comes out.
//! assert_eq!(products.len(), 1);
//! ```
pub mod digest;
pub mod errors;
pub mod mass;
pub mod models;
pub mod protease;

pub use digest::digestion::{
    Digester,
    DigestionParameters,
    SiteConstraints,
};
pub use errors::{
    ProtDigestError,
    Result,
};
pub use models::DigestionProduct;
pub use protease::{
    CleavageRule,
    CutDirection,
    Protease,
};
