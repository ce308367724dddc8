// HiGHS Solver Adapter
// Implements the SolverService interface for HiGHS
// This is an adapter pattern - translates our domain models to HiGHS API

use crate::domain::{
    models::{ModelDescription, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{OptimizationType, SolutionStatus as DomainSolutionStatus, VariableType},
};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, model: &ModelDescription) -> Result<DomainSolution> {
        // Validate first
        self.validate(model)?;

        let start_time = Instant::now();
        let num_vars = model.num_variables();

        // Use HiGHS RowProblem (add variables first, then constraints)
        use highs::{HighsModelStatus, RowProblem, Sense};

        let mut pb = RowProblem::default();
        let mut vars = Vec::new();

        // Add variables
        for var_def in &model.variables {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let obj_coeff = model
                .objective
                .coefficients
                .get(vars.len())
                .copied()
                .unwrap_or(0.0);

            let col = match var_def.variable_type {
                VariableType::Integer | VariableType::Binary => {
                    pb.add_integer_column(obj_coeff, lower..=upper)
                }
                VariableType::Continuous => pb.add_column(obj_coeff, lower..=upper),
            };
            vars.push(col);
        }

        // Add constraints; HiGHS rows are ranged natively
        for constraint in &model.constraints {
            let mut terms = Vec::new();
            for &(i, coeff) in &constraint.coefficients {
                if coeff != 0.0 && i < vars.len() {
                    terms.push((vars[i], coeff));
                }
            }
            pb.add_row(constraint.lower..=constraint.upper, &terms);
        }

        // Solve the problem
        let sense = if model.objective.optimization_type == OptimizationType::Maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let solved = pb.optimise(sense).solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;

        // Build statistics
        let statistics = SolverStatistics {
            solve_time_ms: solve_time,
            num_variables: num_vars as u32,
            num_constraints: model.num_constraints() as u32,
            num_integer_vars: model.num_integer_variables() as u32,
        };

        // Process result
        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution_data = solved.get_solution();
                let variable_values = solution_data.columns().to_vec();

                // Calculate objective value
                let mut actual_obj = 0.0;
                for (i, &val) in variable_values.iter().enumerate() {
                    if let Some(&coeff) = model.objective.coefficients.get(i) {
                        actual_obj += coeff * val;
                    }
                }

                let mut solution = DomainSolution::optimal(actual_obj, variable_values);
                solution.statistics = statistics;
                solution.message = format!("Optimal solution found for '{}'", model.name);

                Ok(solution)
            }
            HighsModelStatus::Infeasible => {
                let mut solution = DomainSolution::new(
                    DomainSolutionStatus::Infeasible,
                    "Problem is infeasible: no solution satisfies all constraints",
                );
                solution.statistics = statistics;
                Ok(solution)
            }
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                let mut solution = DomainSolution::new(
                    DomainSolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                );
                solution.statistics = statistics;
                Ok(solution)
            }
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
