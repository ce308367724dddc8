// Generate a random weighted group domination instance, solve it to
// optimality and verify the returned selection.
//
// Run with: cargo run --example solve_random --features solvers

use groupdom::{build_model, random_instance, verify, Assignment, GeneratorConfig, SolverFactory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GeneratorConfig {
        vertices: 200,
        groups: 20,
        ratio: 1.2,
        seed: 0,
    };
    let instance = random_instance(&config);

    let model = build_model(&instance)?;
    println!(
        "Solving with {} vertices and {} groups",
        model.num_vertices, model.num_groups
    );
    println!("Number of constraints = {}", model.num_constraints());

    let solver = SolverFactory::default_solver();
    println!("Using solver {}", solver.name());

    let solution = solver.solve(&model)?;
    println!("Status    = {}", solution.status);
    if let Some(objective) = solution.objective_value {
        println!("Objective = {:.3}", objective);
    }

    if !solution.is_feasible() {
        return Err(format!("no solution: {}", solution.message).into());
    }

    let assignment = Assignment::from_values(&solution.variable_values, model.num_vertices);
    let report = verify(&instance, &assignment)?;
    println!("{}", report);

    println!(
        "{} vertices out of {} are part of the dominating vertices",
        assignment.selected_vertices(),
        model.num_vertices
    );
    println!(
        "{} groups out of {} are part of the dominating groups",
        assignment.selected_groups(),
        model.num_groups
    );

    Ok(())
}
