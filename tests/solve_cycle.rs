// End-to-end build -> solve -> verify cycle, using a stub solver and a
// brute-force reference in place of a real MILP backend.

use groupdom::{
    build_model, random_instance, verify, Assignment, GeneratorConfig, Instance, ModelDescription,
    Solution, SolutionStatus, SolverService, VerificationError,
};

/// Solver stub that replays a fixed assignment, so the pipeline can be
/// exercised without a MILP backend installed.
struct StubSolver {
    values: Vec<f64>,
    objective: f64,
}

impl SolverService for StubSolver {
    fn solve(&self, model: &ModelDescription) -> groupdom::domain::solver_service::Result<Solution> {
        self.validate(model)?;
        Ok(Solution::optimal(self.objective, self.values.clone()))
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}

/// Exhaustive reference solver: enumerate every group selection, derive the
/// vertex selection as the AND of each vertex's groups, and keep the
/// cheapest selection that dominates every vertex. Only usable for small
/// group counts, which is exactly what the tests need.
fn brute_force_optimum(instance: &Instance) -> Option<(f64, Assignment)> {
    let n = instance.num_vertices();
    let m = instance.num_groups();
    assert!(m <= 16, "brute force is exponential in the group count");

    let mut best: Option<(f64, Assignment)> = None;
    for mask in 0u32..(1 << m) {
        let y: Vec<u8> = (0..m).map(|k| ((mask >> k) & 1) as u8).collect();
        let x: Vec<u8> = (0..n)
            .map(|i| instance.groups_of(i).iter().all(|&k| y[k] == 1) as u8)
            .collect();

        let dominated = (0..n).all(|i| instance.neighbors(i).iter().any(|&j| x[j] == 1));
        if !dominated {
            continue;
        }

        let cost: f64 = (0..m)
            .filter(|&k| y[k] == 1)
            .map(|k| instance.weight(k))
            .sum();
        if best.as_ref().map_or(true, |(c, _)| cost < *c) {
            best = Some((cost, Assignment::new(x, y)));
        }
    }
    best
}

fn path_instance() -> Instance {
    Instance::new(
        vec![vec![0, 1], vec![0, 1, 2], vec![1, 2]],
        vec![vec![0], vec![1], vec![2]],
        vec![1.0, 1.0, 1.0],
    )
}

#[test]
fn path_graph_optimum_selects_the_center() {
    let instance = path_instance();
    let (cost, assignment) = brute_force_optimum(&instance).unwrap();
    assert_eq!(cost, 1.0);
    assert_eq!(assignment.x, vec![0, 1, 0]);
    assert_eq!(assignment.y, vec![0, 1, 0]);

    let report = verify(&instance, &assignment).unwrap();
    assert_eq!(report.selected_groups, 1);
    assert_eq!(report.selected_weight, 1.0);
}

#[test]
fn stub_solver_roundtrip_verifies() {
    let instance = path_instance();
    let model = build_model(&instance).unwrap();

    let solver = StubSolver {
        values: vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        objective: 1.0,
    };
    let solution = solver.solve(&model).unwrap();
    assert_eq!(solution.status, SolutionStatus::Optimal);

    let assignment = Assignment::from_values(&solution.variable_values, model.num_vertices);
    let report = verify(&instance, &assignment).unwrap();
    assert_eq!(report.selected_vertices, 1);
}

#[test]
fn nonconformant_solver_output_is_caught() {
    // A "solver" claiming x_0 = 1 while group 0 is unselected must be
    // rejected by verification, whatever its claimed status.
    let instance = path_instance();
    let assignment = Assignment::new(vec![1, 1, 0], vec![0, 1, 0]);
    assert_eq!(
        verify(&instance, &assignment),
        Err(VerificationError::GroupConsistency {
            vertex: 0,
            x: 1,
            expected: 0,
        })
    );
}

#[test]
fn all_groups_selected_is_always_feasible() {
    // Selecting everything turns every x_i on, and adj[i] contains i.
    for seed in 0..5 {
        let instance = random_instance(&GeneratorConfig {
            vertices: 25,
            groups: 6,
            ratio: 1.2,
            seed,
        });
        let n = instance.num_vertices();
        let m = instance.num_groups();
        let assignment = Assignment::new(vec![1; n], vec![1; m]);
        let report = verify(&instance, &assignment).unwrap();
        assert_eq!(report.selected_groups, m);
        assert!((report.weight_ratio() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn brute_force_optimum_verifies_on_random_instances() {
    for seed in 0..20 {
        let instance = random_instance(&GeneratorConfig {
            vertices: 18,
            groups: 7,
            ratio: 1.5,
            seed,
        });
        let (cost, assignment) = brute_force_optimum(&instance).unwrap();
        let report = verify(&instance, &assignment).unwrap();
        assert!((report.selected_weight - cost).abs() < 1e-9);
    }
}

#[test]
fn every_feasible_assignment_costs_at_least_the_optimum() {
    let instance = random_instance(&GeneratorConfig {
        vertices: 12,
        groups: 5,
        ratio: 1.5,
        seed: 11,
    });
    let (optimum, _) = brute_force_optimum(&instance).unwrap();

    let n = instance.num_vertices();
    let m = instance.num_groups();
    for mask in 0u32..(1 << m) {
        let y: Vec<u8> = (0..m).map(|k| ((mask >> k) & 1) as u8).collect();
        let x: Vec<u8> = (0..n)
            .map(|i| instance.groups_of(i).iter().all(|&k| y[k] == 1) as u8)
            .collect();
        let assignment = Assignment::new(x, y);
        if let Ok(report) = verify(&instance, &assignment) {
            assert!(report.selected_weight >= optimum - 1e-9);
        }
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn small_config() -> impl Strategy<Value = GeneratorConfig> {
        (1usize..30, 1usize..8, 0.0f64..2.5, any::<u64>()).prop_map(
            |(vertices, groups, ratio, seed)| GeneratorConfig {
                vertices,
                groups,
                ratio,
                seed,
            },
        )
    }

    proptest! {
        // Instances satisfying the structural invariants never trip the
        // builder's precondition checks.
        #[test]
        fn generated_instances_always_build(config in small_config()) {
            let instance = random_instance(&config);
            prop_assert!(instance.validate().is_ok());
            let model = build_model(&instance).unwrap();
            prop_assert_eq!(
                model.num_variables(),
                instance.num_vertices() + instance.num_groups()
            );
        }

        // The model's feasible assignments and the verifier's accepted
        // assignments agree: for every group selection, the derived
        // AND-consistent assignment is model-feasible iff it verifies.
        #[test]
        fn model_feasibility_matches_verifier(config in small_config().prop_filter(
            "keep the enumeration small",
            |c| c.groups <= 6,
        )) {
            let instance = random_instance(&config);
            let model = build_model(&instance).unwrap();
            let n = instance.num_vertices();
            let m = instance.num_groups();

            for mask in 0u32..(1 << m) {
                let y: Vec<u8> = (0..m).map(|k| ((mask >> k) & 1) as u8).collect();
                let x: Vec<u8> = (0..n)
                    .map(|i| instance.groups_of(i).iter().all(|&k| y[k] == 1) as u8)
                    .collect();

                let mut values: Vec<f64> = x.iter().map(|&v| v as f64).collect();
                values.extend(y.iter().map(|&v| v as f64));
                let model_feasible = model.constraints.iter().all(|c| {
                    let lhs = c.evaluate(&values);
                    c.lower <= lhs && lhs <= c.upper
                });

                let assignment = Assignment::new(x, y);
                prop_assert_eq!(model_feasible, verify(&instance, &assignment).is_ok());
            }
        }

        // The AND identity holds in both directions for any verified
        // assignment.
        #[test]
        fn verified_assignments_satisfy_the_and_identity(config in small_config()) {
            let instance = random_instance(&config);
            let (_, assignment) = brute_force_optimum(&instance).unwrap();
            prop_assert!(verify(&instance, &assignment).is_ok());

            for i in 0..instance.num_vertices() {
                let all_selected = instance
                    .groups_of(i)
                    .iter()
                    .all(|&k| assignment.y[k] == 1);
                prop_assert_eq!(assignment.x[i] == 1, all_selected);
            }
        }
    }
}
