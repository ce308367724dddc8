// Domain layer: formulation, verification and the solver contract
pub mod domain;

// Instance source: seeded random problem generation
pub mod generator;

// Solver adapters: Concrete implementations of SolverService
#[cfg(feature = "solvers")]
pub mod solver;

// Re-export commonly used types
pub use domain::{
    build_model, verify, Assignment, CoverageReport, Instance, InstanceError, LinearConstraint,
    ModelDescription, ObjectiveFunction, OptimizationType, Solution, SolutionStatus, SolverBackend,
    SolverError, SolverService, SolverStatistics, Variable, VariableType, VerificationError,
};

pub use generator::{random_instance, GeneratorConfig};

#[cfg(feature = "solvers")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
