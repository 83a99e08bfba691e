pub mod brand;
pub mod category;
pub mod filter;
pub mod product;
pub mod purpose;

#[cfg(test)]
pub(crate) mod fixtures;
