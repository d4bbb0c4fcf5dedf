pub mod aggregate;

pub use aggregate::{Company, CompanyId};
