pub mod curve;
pub mod helper;
pub mod migrate;
pub mod store;
pub mod ticker;
