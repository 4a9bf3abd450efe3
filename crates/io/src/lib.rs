// File I/O operations

pub mod export;
pub mod read;

pub use export::{summary_json, write_list, write_result};
pub use read::{detect_format, load_list, read_file_as_utf8};
