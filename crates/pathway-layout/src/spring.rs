use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use pathway_graph::PathwayGraph;

// ─────────────────────────────────────────────
// Position
// ─────────────────────────────────────────────

/// 2-D coordinate assigned to a node by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─────────────────────────────────────────────
// LayoutConfig
// ─────────────────────────────────────────────

/// Parameters of the spring layout. All explicit — no global RNG state.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// RNG seed for the initial placement. Identical seed + graph yields
    /// bit-identical coordinates.
    pub seed: u64,

    /// Number of force iterations.
    pub iterations: usize,

    /// Maximum absolute coordinate after the final rescale.
    pub scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            iterations: 50,
            scale: 1.0,
        }
    }
}

// ─────────────────────────────────────────────
// Fruchterman–Reingold
// ─────────────────────────────────────────────

/// Force-directed placement of the event graph.
///
/// Classic Fruchterman–Reingold on the unit square: every node pair repels
/// with force `k²/d`, every edge attracts with force `d²/k`, and the
/// per-iteration displacement is capped by a temperature that cools
/// linearly to zero. The result is recentered on the origin and rescaled
/// so the largest absolute coordinate equals `config.scale`.
///
/// There is no guaranteed global optimum; the output is purely cosmetic,
/// which is acceptable for a visualization layout.
pub fn spring_layout(graph: &PathwayGraph, config: &LayoutConfig) -> HashMap<String, Position> {
    let n = graph.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();

    if n > 1 {
        // Optimal pairwise distance for a unit-area layout domain.
        let k = (1.0 / n as f64).sqrt();

        // Edge list as dense index pairs. Endpoints are validated at graph
        // construction, so the lookups cannot fail.
        let edge_idx: Vec<(usize, usize)> = graph
            .edges()
            .iter()
            .filter_map(|e| Some((graph.node_index(&e.from)?, graph.node_index(&e.to)?)))
            .collect();

        // Initial temperature 10% of the layout extent, linear cooling.
        let mut t = 0.1;
        let dt = t / (config.iterations as f64 + 1.0);
        const EPS: f64 = 1e-9;

        for _ in 0..config.iterations {
            let mut disp = vec![(0.0_f64, 0.0_f64); n];

            // Repulsion between all node pairs: k²/d.
            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let d = (dx * dx + dy * dy).sqrt().max(EPS);
                    let f = k * k / d;
                    let (ux, uy) = (dx / d, dy / d);
                    disp[i].0 += ux * f;
                    disp[i].1 += uy * f;
                    disp[j].0 -= ux * f;
                    disp[j].1 -= uy * f;
                }
            }

            // Attraction along edges: d²/k.
            for &(a, b) in &edge_idx {
                if a == b {
                    continue;
                }
                let dx = pos[a].0 - pos[b].0;
                let dy = pos[a].1 - pos[b].1;
                let d = (dx * dx + dy * dy).sqrt().max(EPS);
                let f = d * d / k;
                let (ux, uy) = (dx / d, dy / d);
                disp[a].0 -= ux * f;
                disp[a].1 -= uy * f;
                disp[b].0 += ux * f;
                disp[b].1 += uy * f;
            }

            // Move each node along its net force, capped by the temperature.
            for i in 0..n {
                let (dx, dy) = disp[i];
                let len = (dx * dx + dy * dy).sqrt().max(EPS);
                let step = len.min(t);
                pos[i].0 += dx / len * step;
                pos[i].1 += dy / len * step;
            }

            t -= dt;
        }
    }

    rescale(&mut pos, config.scale);

    graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (node.name.clone(), Position::new(pos[i].0, pos[i].1)))
        .collect()
}

/// Recenter on the origin and scale so the largest |coordinate| == `scale`.
fn rescale(pos: &mut [(f64, f64)], scale: f64) {
    let n = pos.len();
    if n == 0 {
        return;
    }
    let (mut cx, mut cy) = (0.0, 0.0);
    for &(x, y) in pos.iter() {
        cx += x;
        cy += y;
    }
    cx /= n as f64;
    cy /= n as f64;

    let mut max_abs = 0.0_f64;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        max_abs = max_abs.max(p.0.abs()).max(p.1.abs());
    }
    if max_abs > 0.0 {
        let s = scale / max_abs;
        for p in pos.iter_mut() {
            p.0 *= s;
            p.1 *= s;
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_graph::{CausalEdge, EventNode};

    fn path_graph(len: usize) -> PathwayGraph {
        let nodes: Vec<EventNode> = (0..len)
            .map(|i| EventNode::new(format!("n{i}"), if i % 2 == 0 { 1 } else { -1 }))
            .collect();
        let edges: Vec<CausalEdge> = (1..len)
            .map(|i| CausalEdge::new(format!("n{}", i - 1), format!("n{i}")))
            .collect();
        PathwayGraph::build(&nodes, &edges).unwrap()
    }

    #[test]
    fn layout_assigns_every_node_a_position() {
        let g = path_graph(5);
        let layout = spring_layout(&g, &LayoutConfig::default());
        assert_eq!(layout.len(), 5);
        for node in g.nodes() {
            assert!(layout.contains_key(&node.name));
        }
    }

    #[test]
    fn layout_is_deterministic_for_fixed_seed() {
        let g = path_graph(5);
        let cfg = LayoutConfig::default();
        let a = spring_layout(&g, &cfg);
        let b = spring_layout(&g, &cfg);
        for (name, pa) in &a {
            let pb = &b[name];
            // Exact equality: the entire pass is seeded, no ambient state.
            assert_eq!(pa.x, pb.x, "x differs for {name}");
            assert_eq!(pa.y, pb.y, "y differs for {name}");
        }
    }

    #[test]
    fn different_seeds_give_different_placements() {
        let g = path_graph(5);
        let a = spring_layout(&g, &LayoutConfig { seed: 42, ..Default::default() });
        let b = spring_layout(&g, &LayoutConfig { seed: 43, ..Default::default() });
        let moved = g
            .nodes()
            .iter()
            .any(|n| a[&n.name].x != b[&n.name].x || a[&n.name].y != b[&n.name].y);
        assert!(moved, "changing the seed should change the layout");
    }

    #[test]
    fn coordinates_are_finite_and_within_scale() {
        let g = path_graph(5);
        let cfg = LayoutConfig { scale: 1.0, ..Default::default() };
        let layout = spring_layout(&g, &cfg);
        for (name, p) in &layout {
            assert!(p.x.is_finite() && p.y.is_finite(), "non-finite position for {name}");
            assert!(p.x.abs() <= 1.0 + 1e-12);
            assert!(p.y.abs() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn empty_graph_yields_empty_layout() {
        let g = PathwayGraph::build(&[], &[]).unwrap();
        assert!(spring_layout(&g, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn single_node_sits_at_the_origin() {
        let g = PathwayGraph::build(&[EventNode::new("only", 1)], &[]).unwrap();
        let layout = spring_layout(&g, &LayoutConfig::default());
        let p = &layout["only"];
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn connected_nodes_end_up_closer_than_the_path_ends() {
        // On a path a-b-c-d-e, adjacent nodes should be nearer to each other
        // than the two extremes are.
        let g = path_graph(5);
        let layout = spring_layout(&g, &LayoutConfig::default());
        let d = |a: &str, b: &str| {
            let (pa, pb) = (&layout[a], &layout[b]);
            ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt()
        };
        assert!(d("n0", "n1") < d("n0", "n4"));
        assert!(d("n3", "n4") < d("n0", "n4"));
    }
}
