use super::value_objects::{OptimizationType, SolutionStatus, VariableType};

/// Decision variable in an optimization problem
#[derive(Debug, Clone)]
pub struct Variable {
    pub variable_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub name: String,
}

impl Variable {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Integer,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Binary,
            lower_bound: 0.0,
            upper_bound: Some(1.0),
            name: name.into(),
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self.variable_type,
            VariableType::Integer | VariableType::Binary
        )
    }
}

/// Objective function to minimize or maximize
#[derive(Debug, Clone)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
}

impl ObjectiveFunction {
    pub fn new(optimization_type: OptimizationType, coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type,
            coefficients,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Ranged linear constraint: `lower <= sum(coeff * var) <= upper`
///
/// Coefficients are sparse pairs of (variable index, coefficient).
/// An infinite bound leaves that side unconstrained.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub lower: f64,
    pub upper: f64,
    pub coefficients: Vec<(usize, f64)>,
    pub name: String,
}

impl LinearConstraint {
    pub fn new(lower: f64, coefficients: Vec<(usize, f64)>, upper: f64) -> Self {
        Self {
            lower,
            upper,
            coefficients,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Evaluate the left-hand side against a full variable value vector.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .map(|&(idx, coeff)| coeff * values[idx])
            .sum()
    }
}

/// Abstract MILP description: flat, immutable value data.
///
/// Variables are laid out as `x_0..x_{n-1}` (per-vertex selection) followed
/// by `y_0..y_{m-1}` (per-group selection); the accessors below encode that
/// layout so callers never index by hand.
#[derive(Debug, Clone)]
pub struct ModelDescription {
    pub name: String,
    pub num_vertices: usize,
    pub num_groups: usize,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<LinearConstraint>,
    pub variables: Vec<Variable>,
}

impl ModelDescription {
    /// Column index of the vertex selection variable `x_i`.
    pub fn vertex_var(&self, i: usize) -> usize {
        i
    }

    /// Column index of the group selection variable `y_k`.
    pub fn group_var(&self, k: usize) -> usize {
        self.num_vertices + k
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_integer_variables() > 0
    }
}

/// A 0/1 selection produced by a solver (or crafted by hand for tests).
///
/// `x[i]` marks vertex `i` as part of the dominating set, `y[k]` marks
/// group `k` as selected. Not retained by any core component beyond a
/// single verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}

impl Assignment {
    pub fn new(x: Vec<u8>, y: Vec<u8>) -> Self {
        Self { x, y }
    }

    /// Split a solver's raw value vector into the x/y selection vectors,
    /// rounding to the nearest integer to absorb solver tolerances.
    pub fn from_values(values: &[f64], num_vertices: usize) -> Self {
        let round = |v: &f64| if *v >= 0.5 { 1u8 } else { 0u8 };
        Self {
            x: values[..num_vertices].iter().map(round).collect(),
            y: values[num_vertices..].iter().map(round).collect(),
        }
    }

    /// Number of selected vertices.
    pub fn selected_vertices(&self) -> usize {
        self.x.iter().filter(|&&v| v == 1).count()
    }

    /// Number of selected groups.
    pub fn selected_groups(&self) -> usize {
        self.y.iter().filter(|&&v| v == 1).count()
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
    pub num_integer_vars: u32,
}

/// Solution to an optimization problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub objective_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            objective_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    pub fn is_feasible(&self) -> bool {
        matches!(
            self.status,
            SolutionStatus::Optimal | SolutionStatus::Feasible
        )
    }
}
