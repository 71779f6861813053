// Library for tests to access modules

pub mod clock;
pub mod config;
pub mod load_repo;
pub mod logging;
pub mod models;
pub mod routes;
pub mod validation;
pub mod worker;
