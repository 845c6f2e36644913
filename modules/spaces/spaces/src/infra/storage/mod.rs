//! `SeaORM` persistence for the spaces module.

pub mod entity;
pub mod migrations;

mod catalog_repo;
mod mapper;
mod spaces_repo;
mod users_repo;

pub use catalog_repo::OrmCatalogRepository;
pub use spaces_repo::OrmSpacesRepository;
pub use users_repo::OrmUsersRepository;
