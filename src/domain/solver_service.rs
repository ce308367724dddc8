// Domain service interface for solving the assembled model
// Defines the contract that any solver implementation must follow, so the
// core stays solver-agnostic and testable with a stub backend.

use super::models::{ModelDescription, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract for an external MILP-solving capability.
///
/// Accepts a [`ModelDescription`] and returns a status, the achieved
/// objective and a value for every variable. Implementations may be slow;
/// any timeout or cancellation policy belongs to them, not to the core.
pub trait SolverService: Send + Sync {
    /// Solve an assembled model.
    fn solve(&self, model: &ModelDescription) -> Result<Solution>;

    /// Validate a model without solving it.
    fn validate(&self, model: &ModelDescription) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = model.num_variables();
        if num_vars == 0 {
            errors.push("Model must have at least one variable".to_string());
        }

        if model.objective.num_variables() != num_vars {
            errors.push(format!(
                "Objective has {} coefficients but model has {} variables",
                model.objective.num_variables(),
                num_vars
            ));
        }

        for (i, constraint) in model.constraints.iter().enumerate() {
            if constraint.lower > constraint.upper {
                errors.push(format!(
                    "Constraint {} '{}' has lower bound ({}) > upper bound ({})",
                    i, constraint.name, constraint.lower, constraint.upper
                ));
            }
            for &(col, _) in &constraint.coefficients {
                if col >= num_vars {
                    errors.push(format!(
                        "Constraint {} '{}' references variable {} but model has {}",
                        i, constraint.name, col, num_vars
                    ));
                }
            }
        }

        for (i, var) in model.variables.iter().enumerate() {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidModel(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::formulation::build_model;
    use crate::domain::instance::Instance;
    use crate::domain::models::LinearConstraint;

    struct NullSolver;

    impl SolverService for NullSolver {
        fn solve(&self, model: &ModelDescription) -> Result<Solution> {
            self.validate(model)?;
            Err(SolverError::SolverNotAvailable("null".to_string()))
        }

        fn name(&self) -> &str {
            "null"
        }

        fn supports_mip(&self) -> bool {
            false
        }
    }

    fn path_model() -> ModelDescription {
        let instance = Instance::new(
            vec![vec![0, 1], vec![0, 1, 2], vec![1, 2]],
            vec![vec![0], vec![1], vec![2]],
            vec![1.0, 1.0, 1.0],
        );
        build_model(&instance).unwrap()
    }

    #[test]
    fn built_model_passes_validation() {
        assert!(NullSolver.validate(&path_model()).is_ok());
    }

    #[test]
    fn out_of_range_coefficient_is_rejected() {
        let mut model = path_model();
        model
            .constraints
            .push(LinearConstraint::new(0.0, vec![(99, 1.0)], 1.0));
        assert!(matches!(
            NullSolver.validate(&model),
            Err(SolverError::InvalidModel(_))
        ));
    }

    #[test]
    fn inverted_constraint_bounds_are_rejected() {
        let mut model = path_model();
        model
            .constraints
            .push(LinearConstraint::new(2.0, vec![(0, 1.0)], 1.0));
        assert!(matches!(
            NullSolver.validate(&model),
            Err(SolverError::InvalidModel(_))
        ));
    }
}
