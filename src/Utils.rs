pub mod logger;
pub mod plots;
pub mod save_to_file;
