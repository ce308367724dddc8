// Independent verification of candidate solutions
//
// Re-checks every combinatorial invariant directly from the instance and
// the assignment, without consulting the formulation code path. This is
// the safety net that catches formulation defects, non-conformant solver
// output, and hand-crafted garbage alike.

use std::fmt;

use super::instance::Instance;
use super::models::Assignment;

/// Error raised when an assignment violates a solution invariant.
///
/// Always a hard failure: a violated check signals a formulation defect, a
/// non-conformant solver, or a caller-supplied garbage assignment, and is
/// never downgraded to a warning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("assignment has {got} vertex values but the instance has {expected} vertices")]
    VertexCountMismatch { got: usize, expected: usize },

    #[error("assignment has {got} group values but the instance has {expected} groups")]
    GroupCountMismatch { got: usize, expected: usize },

    #[error("assignment value for {variable} is {value}, not 0 or 1")]
    NonBinaryValue { variable: String, value: u8 },

    #[error("vertex {0} is not selected and has no selected neighbor")]
    NotDominated(usize),

    #[error("vertex {vertex} has x = {x} but the AND of its group selections is {expected}")]
    GroupConsistency { vertex: usize, x: u8, expected: u8 },
}

/// Aggregate solution metrics, one ratio per resource.
///
/// Informational only; verification failures are reported through
/// [`VerificationError`], never through this report.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub selected_vertices: usize,
    pub total_vertices: usize,
    pub selected_groups: usize,
    pub total_groups: usize,
    pub selected_weight: f64,
    pub total_weight: f64,
}

impl CoverageReport {
    pub fn vertex_ratio(&self) -> f64 {
        self.selected_vertices as f64 / self.total_vertices as f64
    }

    pub fn group_ratio(&self) -> f64 {
        self.selected_groups as f64 / self.total_groups as f64
    }

    pub fn weight_ratio(&self) -> f64 {
        self.selected_weight / self.total_weight
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:>8.1}/{:>8.1} = {:.1}%",
            "Number of vertices",
            self.selected_vertices as f64,
            self.total_vertices as f64,
            100.0 * self.vertex_ratio()
        )?;
        writeln!(
            f,
            "{:<20} {:>8.1}/{:>8.1} = {:.1}%",
            "Number of groups",
            self.selected_groups as f64,
            self.total_groups as f64,
            100.0 * self.group_ratio()
        )?;
        write!(
            f,
            "{:<20} {:>8.1}/{:>8.1} = {:.1}%",
            "Weighted groups",
            self.selected_weight,
            self.total_weight,
            100.0 * self.weight_ratio()
        )
    }
}

/// Check that an assignment is a valid solution for the instance.
///
/// All checks must pass; the first violation is returned as a
/// [`VerificationError`]. On success the aggregate [`CoverageReport`] is
/// returned for reporting.
pub fn verify(
    instance: &Instance,
    assignment: &Assignment,
) -> Result<CoverageReport, VerificationError> {
    let n = instance.num_vertices();
    let m = instance.num_groups();

    if assignment.x.len() != n {
        return Err(VerificationError::VertexCountMismatch {
            got: assignment.x.len(),
            expected: n,
        });
    }
    if assignment.y.len() != m {
        return Err(VerificationError::GroupCountMismatch {
            got: assignment.y.len(),
            expected: m,
        });
    }
    for (i, &v) in assignment.x.iter().enumerate() {
        if v > 1 {
            return Err(VerificationError::NonBinaryValue {
                variable: format!("x{}", i),
                value: v,
            });
        }
    }
    for (k, &v) in assignment.y.iter().enumerate() {
        if v > 1 {
            return Err(VerificationError::NonBinaryValue {
                variable: format!("y{}", k),
                value: v,
            });
        }
    }

    // Every non-selected vertex must be dominated by a selected one.
    for i in 0..n {
        if assignment.x[i] == 0
            && !instance.neighbors(i).iter().any(|&j| assignment.x[j] == 1)
        {
            return Err(VerificationError::NotDominated(i));
        }
    }

    // x_i must equal the Boolean product of its group selections, in both
    // directions, recomputed from the assignment alone.
    for i in 0..n {
        let expected = instance
            .groups_of(i)
            .iter()
            .fold(1u8, |acc, &k| acc * assignment.y[k]);
        if assignment.x[i] != expected {
            return Err(VerificationError::GroupConsistency {
                vertex: i,
                x: assignment.x[i],
                expected,
            });
        }
    }

    let selected_weight = assignment
        .y
        .iter()
        .enumerate()
        .map(|(k, &v)| instance.weight(k) * v as f64)
        .sum();

    Ok(CoverageReport {
        selected_vertices: assignment.selected_vertices(),
        total_vertices: n,
        selected_groups: assignment.selected_groups(),
        total_groups: m,
        selected_weight,
        total_weight: instance.total_weight(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_instance() -> Instance {
        Instance::new(
            vec![vec![0, 1], vec![0, 1, 2], vec![1, 2]],
            vec![vec![0], vec![1], vec![2]],
            vec![1.0, 1.0, 1.0],
        )
    }

    #[test]
    fn center_solution_verifies_on_path() {
        let instance = path_instance();
        let assignment = Assignment::new(vec![0, 1, 0], vec![0, 1, 0]);
        let report = verify(&instance, &assignment).unwrap();
        assert_eq!(report.selected_vertices, 1);
        assert_eq!(report.selected_groups, 1);
        assert_eq!(report.selected_weight, 1.0);
        assert_eq!(report.total_weight, 3.0);
    }

    #[test]
    fn undominated_vertex_fails() {
        // Vertex 2 is unselected and only neighbors vertex 1, also unselected.
        let instance = path_instance();
        let assignment = Assignment::new(vec![1, 0, 0], vec![1, 0, 0]);
        assert_eq!(
            verify(&instance, &assignment),
            Err(VerificationError::NotDominated(2))
        );
    }

    #[test]
    fn selected_vertex_with_unselected_group_fails() {
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
    fn unselected_vertex_with_all_groups_selected_fails() {
        let instance = path_instance();
        let assignment = Assignment::new(vec![0, 1, 1], vec![1, 1, 1]);
        assert_eq!(
            verify(&instance, &assignment),
            Err(VerificationError::GroupConsistency {
                vertex: 0,
                x: 0,
                expected: 1,
            })
        );
    }

    #[test]
    fn multi_group_vertex_and_is_recomputed() {
        // Vertex 0 belongs to groups 0 and 1; only group 1 selected means
        // x_0 must be 0, and vertex 1 (group 1 alone) must be 1.
        let instance = Instance::new(
            vec![vec![0, 1], vec![0, 1]],
            vec![vec![0, 1], vec![1]],
            vec![1.0, 1.0],
        );
        let assignment = Assignment::new(vec![0, 1], vec![0, 1]);
        assert!(verify(&instance, &assignment).is_ok());
    }

    #[test]
    fn shape_mismatch_fails() {
        let instance = path_instance();
        let assignment = Assignment::new(vec![0, 1], vec![0, 1, 0]);
        assert_eq!(
            verify(&instance, &assignment),
            Err(VerificationError::VertexCountMismatch {
                got: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn non_binary_value_fails() {
        let instance = path_instance();
        let assignment = Assignment::new(vec![0, 2, 0], vec![0, 1, 0]);
        assert_eq!(
            verify(&instance, &assignment),
            Err(VerificationError::NonBinaryValue {
                variable: "x1".to_string(),
                value: 2,
            })
        );
    }

    #[test]
    fn report_renders_fixed_width_table() {
        let report = CoverageReport {
            selected_vertices: 1,
            total_vertices: 3,
            selected_groups: 1,
            total_groups: 3,
            selected_weight: 1.0,
            total_weight: 3.0,
        };
        let rendered = report.to_string();
        assert!(rendered.contains("Number of vertices"));
        assert!(rendered.contains("= 33.3%"));
    }
}
