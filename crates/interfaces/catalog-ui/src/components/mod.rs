pub mod grid;
pub mod header;
pub mod overlay;
pub mod search;
