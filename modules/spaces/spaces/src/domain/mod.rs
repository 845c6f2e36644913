pub mod error;
pub mod placement;
pub mod repos;
pub mod service;
