pub mod cleavage_sites;
pub mod digestion;
pub mod enumerate;
pub mod export;
pub mod filter;
pub mod request;
