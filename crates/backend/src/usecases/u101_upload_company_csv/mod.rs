pub mod csv_reader;
pub mod error;
pub mod executor;

pub use error::UploadError;
