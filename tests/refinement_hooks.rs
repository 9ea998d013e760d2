use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tri_refine::geometry::triangle::{longest_edge_squared, signed_area};
use tri_refine::prelude::*;

fn v(x: f64, y: f64) -> Vertex {
    Vertex::new(x, y)
}

fn midpoint(a: Vertex, b: Vertex) -> Vertex {
    v(0.5 * (a.x + b.x), 0.5 * (a.y + b.y))
}

/// Reference 1→4 split; corners keep their orientation.
fn subdivide([v0, v1, v2]: [Vertex; 3]) -> [[Vertex; 3]; 4] {
    let (m01, m12, m20) = (midpoint(v0, v1), midpoint(v1, v2), midpoint(v2, v0));
    [
        [v0, m01, m20],
        [v1, m12, m01],
        [v2, m20, m12],
        [m01, m12, m20],
    ]
}

/// Split unsuitable triangles until the hooks accept all of them.
fn refine_until_suitable(
    hooks: &RefinementHooks,
    mut triangles: Vec<[Vertex; 3]>,
    max_passes: usize,
) -> Option<Vec<[Vertex; 3]>> {
    for _ in 0..max_passes {
        let mut next = Vec::with_capacity(triangles.len());
        let mut split_any = false;
        for t in triangles {
            if hooks.is_unsuitable(t[0], t[1], t[2], signed_area(t[0], t[1], t[2])) {
                next.extend(subdivide(t));
                split_any = true;
            } else {
                next.push(t);
            }
        }
        triangles = next;
        if !split_any {
            return Some(triangles);
        }
    }
    None
}

fn square_domain(half: f64) -> Vec<[Vertex; 3]> {
    let (a, b, c, d) = (v(-half, -half), v(half, -half), v(half, half), v(-half, half));
    vec![[a, b, c], [a, c, d]]
}

#[test]
fn default_hooks_leave_the_mesh_alone() {
    let mesh = refine_until_suitable(&RefinementHooks::default(), square_domain(2.0), 1).unwrap();
    assert_eq!(mesh.len(), 2);
}

#[test]
fn graded_refinement_terminates_and_is_finer_near_origin() {
    let hooks = RefinementHooks::new(GradedBound::default());
    let mesh = refine_until_suitable(&hooks, square_domain(2.0), 16).expect("refinement terminates");

    assert!(mesh.len() > 2);
    for t in &mesh {
        assert!(!hooks.is_unsuitable(t[0], t[1], t[2], signed_area(t[0], t[1], t[2])));
        assert!(signed_area(t[0], t[1], t[2]) > 0.0);
    }

    let mean_edge = |pred: &dyn Fn(&Vertex) -> bool| {
        let selected: Vec<f64> = mesh
            .iter()
            .filter(|t| pred(&t[0]))
            .map(|t| longest_edge_squared(t[0], t[1], t[2]))
            .collect();
        assert!(!selected.is_empty());
        selected.iter().sum::<f64>() / selected.len() as f64
    };
    let near = mean_edge(&|o: &Vertex| o.norm_squared() < 0.25);
    let far = mean_edge(&|o: &Vertex| o.norm_squared() > 2.25);
    assert!(near < far, "near={near} far={far}");
}

#[test]
fn combined_policy_through_hooks() {
    let policy = AnyOf::new()
        .with(GradedBound::default())
        .with(MaxArea::new(0.1).unwrap());
    let hooks = RefinementHooks::new(policy);
    let set = TriangleSet::from_flat(
        &[
            10.0, 10.0, 11.0, 10.0, 10.0, 11.0, // area 0.5, passes graded bound
            0.0, 0.0, 1.0, 0.0, 0.0, 1.0, // fails graded bound
            20.0, 20.0, 20.1, 20.0, 20.0, 20.1, // passes both
        ],
        &[0, 1, 2, 3, 4, 5, 6, 7, 8],
    )
    .unwrap();
    let selection = hooks.select(&set);
    assert_eq!(selection.refine, vec![0, 1]);
    assert_eq!(selection.accept, vec![2]);
}

#[test]
fn closure_predicate_through_hooks() {
    // Refine only triangles that straddle the y axis.
    let hooks = RefinementHooks::new(FnSuitability::new(|o: Vertex, d: Vertex, a: Vertex, _area: f64| {
        let xs = [o.x, d.x, a.x];
        xs.iter().any(|&x| x < 0.0) && xs.iter().any(|&x| x > 0.0)
    }));
    assert!(hooks.is_unsuitable(v(-1.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), 1.0));
    assert!(!hooks.is_unsuitable(v(1.0, 0.0), v(2.0, 0.0), v(1.0, 1.0), 0.5));
}

#[test]
fn random_batches_match_direct_calls() {
    let mut rng = SmallRng::seed_from_u64(7);
    let n = 300;
    let points: Vec<f64> = (0..2 * n).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let triangles: Vec<usize> = (0..3 * n).map(|_| rng.gen_range(0..n)).collect();
    let set = TriangleSet::from_flat(&points, &triangles).unwrap();
    let g = GradedBound::default();

    let selection = select_triangles_for_refinement(&set, &g);
    assert_eq!(selection.total(), n);
    for (i, c) in set.candidates().enumerate() {
        let expected = g.assess(c.origin, c.destination, c.apex, c.area).needs_refinement();
        assert_eq!(selection.refine.contains(&i), expected);
        assert_eq!(selection.accept.contains(&i), !expected);
    }

    #[cfg(feature = "rayon")]
    assert_eq!(par_select_triangles_for_refinement(&set, &g), selection);
}
