pub mod coordinate;
pub mod error;
pub mod loader;
pub mod record;
pub mod risk;
pub mod writer;
