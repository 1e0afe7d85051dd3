pub mod export;
pub mod migrate;
