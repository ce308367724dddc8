// MILP formulation of the weighted group minimum dominating set problem
//
// Decision variables: binary x_i per vertex (1 = vertex is dominant),
// binary y_k per group (1 = group is selected). The objective minimizes
// the weighted sum of selected groups. Three constraint families tie the
// variables together:
//
//   A_i      : sum of x_j over j in adj[i] >= 1           (domination)
//   G_i_SUM  : x_i - sum of y_k over k in groups[i] >= 1 - |groups[i]|
//   G_i_k    : y_k - x_i >= 0 for each k in groups[i]
//
// G_i_SUM and G_i_k together are the linear encoding of the conjunction
// x_i = AND(y_k for k in groups[i]): G_i_SUM forces x_i up to 1 once every
// group of i is selected, G_i_k forces x_i down to 0 while any of them is
// not. Each direction is generated separately so it can be tested on its
// own.

use super::instance::{Instance, InstanceError};
use super::models::{LinearConstraint, ModelDescription, ObjectiveFunction, Variable};
use super::value_objects::OptimizationType;

/// Build the MILP description for a weighted group domination instance.
///
/// Pure function of its input: the feasible 0/1 assignments of the returned
/// model are exactly the valid solutions of the instance, and its
/// minimal-objective assignment is the optimum. Fails with
/// [`InstanceError`] on structurally invalid instances instead of handing
/// an infeasible or ill-formed model to a solver.
pub fn build_model(instance: &Instance) -> Result<ModelDescription, InstanceError> {
    instance.validate()?;

    let n = instance.num_vertices();
    let m = instance.num_groups();

    let mut variables = Vec::with_capacity(n + m);
    for i in 0..n {
        variables.push(Variable::binary(format!("x{}", i)));
    }
    for k in 0..m {
        variables.push(Variable::binary(format!("y{}", k)));
    }

    // Minimize sum of w_k * y_k; vertex variables carry no cost.
    let mut coefficients = vec![0.0; n + m];
    for k in 0..m {
        coefficients[n + k] = instance.weight(k);
    }
    let objective = ObjectiveFunction::new(OptimizationType::Minimize, coefficients);

    let mut constraints = Vec::new();
    for i in 0..n {
        constraints.push(coverage_constraint(instance, i));
        constraints.push(group_sum_constraint(instance, i));
        constraints.extend(group_link_constraints(instance, i));
    }

    Ok(ModelDescription {
        name: "mdg".to_string(),
        num_vertices: n,
        num_groups: m,
        objective,
        constraints,
        variables,
    })
}

/// `A_i`: at least one vertex in adj[i] is selected. adj[i] contains i
/// itself, so a selected vertex covers its own constraint. The upper bound
/// n is non-binding slack; only the lower bound of 1 carries meaning.
fn coverage_constraint(instance: &Instance, i: usize) -> LinearConstraint {
    let n = instance.num_vertices();
    let coefficients = instance
        .neighbors(i)
        .iter()
        .map(|&j| (j, 1.0))
        .collect();
    LinearConstraint::new(1.0, coefficients, n as f64).with_name(format!("A_{}", i))
}

/// `G_i_SUM`: x_i - sum(y_k) >= 1 - |groups[i]|, forcing x_i to 1 when
/// every group containing i is selected.
fn group_sum_constraint(instance: &Instance, i: usize) -> LinearConstraint {
    let memberships = instance.groups_of(i);
    let n = instance.num_vertices();
    let mut coefficients = vec![(i, 1.0)];
    coefficients.extend(memberships.iter().map(|&k| (n + k, -1.0)));
    LinearConstraint::new(1.0 - memberships.len() as f64, coefficients, 1.0)
        .with_name(format!("G_{}_SUM", i))
}

/// `G_i_k`: y_k - x_i >= 0 for each group k containing i, forcing x_i to 0
/// while any of its groups is unselected.
fn group_link_constraints(instance: &Instance, i: usize) -> Vec<LinearConstraint> {
    let n = instance.num_vertices();
    instance
        .groups_of(i)
        .iter()
        .map(|&k| {
            LinearConstraint::new(0.0, vec![(n + k, 1.0), (i, -1.0)], 1.0)
                .with_name(format!("G_{}_{}", i, k))
        })
        .collect()
}
