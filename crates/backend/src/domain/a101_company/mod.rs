pub mod partition;
pub mod repository;
pub mod service;
