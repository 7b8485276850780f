pub mod file;

pub use file::{file_exists, read_file};
