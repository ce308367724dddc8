// Domain module: Business logic and models

pub mod formulation;
pub mod instance;
pub mod models;
pub mod solver_service;
pub mod value_objects;
pub mod verification;

pub use formulation::*;
pub use instance::*;
pub use models::*;
pub use solver_service::*;
pub use value_objects::*;
pub use verification::*;
