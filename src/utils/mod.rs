pub mod filename;
pub mod read;
