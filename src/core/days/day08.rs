//! Day 8: junction box circuits
//!
//! Junction boxes sit at integer 3D coordinates. Connecting the closest
//! pairs first, part 1 takes the product of the three largest circuit
//! sizes after a fixed number of connections; part 2 keeps connecting
//! until everything is one circuit and multiplies the x-coordinates of
//! the final pair.

use anyhow::Result;

use crate::core::solver::{Answers, PuzzleError};
use crate::utils::input::parse_number;

/// Connections made before reading off part 1. The full input wires
/// 1000 junction boxes; smaller (example) inputs connect 10 pairs.
fn connection_limit(junction_count: usize) -> usize {
    if junction_count == 1000 {
        1000
    } else {
        10
    }
}

#[derive(Debug, Clone, Copy)]
struct Junction {
    x: i64,
    y: i64,
    z: i64,
}

/// Candidate connection; `dist` leads so the derived ordering sorts by
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Edge {
    dist: i64,
    a: usize,
    b: usize,
}

/// Squared euclidean distance; ordering is all that matters, so the
/// square root is never taken.
fn squared_distance(p: Junction, q: Junction) -> i64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    let dz = p.z - q.z;
    dx * dx + dy * dy + dz * dz
}

fn parse(input: &str) -> Result<Vec<Junction>, PuzzleError> {
    let mut junctions = Vec::new();
    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split(',');
        let mut next = |field: &str| {
            parts
                .next()
                .ok_or_else(|| PuzzleError::token(line, format!("missing {field} coordinate")))
                .and_then(parse_number)
        };
        junctions.push(Junction {
            x: next("x")?,
            y: next("y")?,
            z: next("z")?,
        });
    }
    Ok(junctions)
}

/// Union-find with path compression and union by size.
struct Dsu {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Dsu {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    /// Join the sets holding `i` and `j`; returns the size of the
    /// resulting set (whether or not a merge happened).
    fn unite(&mut self, i: usize, j: usize) -> usize {
        let mut i = self.find(i);
        let mut j = self.find(j);
        if i != j {
            if self.size[i] < self.size[j] {
                std::mem::swap(&mut i, &mut j);
            }
            self.parent[j] = i;
            self.size[i] += self.size[j];
        }
        self.size[i]
    }
}

fn sorted_edges(junctions: &[Junction]) -> Vec<Edge> {
    let n = junctions.len();
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for a in 0..n {
        for b in a + 1..n {
            edges.push(Edge {
                dist: squared_distance(junctions[a], junctions[b]),
                a,
                b,
            });
        }
    }
    edges.sort_unstable();
    edges
}

fn solve_with_limit(junctions: &[Junction], limit: usize) -> Answers {
    let n = junctions.len();
    let edges = sorted_edges(junctions);
    let limit = limit.min(edges.len());

    let mut dsu = Dsu::new(n);
    for edge in &edges[..limit] {
        dsu.unite(edge.a, edge.b);
    }

    // Sizes are tracked at the roots only.
    let mut circuit_sizes: Vec<usize> = (0..n)
        .filter(|&i| dsu.parent[i] == i)
        .map(|i| dsu.size[i])
        .collect();
    circuit_sizes.sort_unstable_by(|a, b| b.cmp(a));
    let largest_product: i64 = circuit_sizes.iter().take(3).map(|&s| s as i64).product();

    let mut final_pair = None;
    for edge in &edges[limit..] {
        if dsu.unite(edge.a, edge.b) == n {
            final_pair = Some(junctions[edge.a].x * junctions[edge.b].x);
            break;
        }
    }

    Answers {
        part1: largest_product,
        part2: final_pair,
    }
}

pub fn solve(input: &str) -> Result<Answers> {
    let junctions = parse(input)?;
    if junctions.len() < 2 {
        return Err(PuzzleError::EmptyInput.into());
    }
    Ok(solve_with_limit(&junctions, connection_limit(junctions.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three groups with pairwise-distinct distances: a line of eight
    // boxes whose gaps form a Sidon-like set, and three distant boxes.
    static EXAMPLE: &str = "0,0,0\n1,0,0\n3,0,0\n7,0,0\n12,0,0\n20,0,0\n30,0,0\n44,0,0\n\
1000,0,0\n1000,50,0\n1000,0,60\n";

    #[test]
    fn test_dsu_union_by_size() {
        let mut dsu = Dsu::new(4);
        assert_eq!(dsu.unite(0, 1), 2);
        assert_eq!(dsu.unite(2, 3), 2);
        assert_eq!(dsu.unite(0, 3), 4);
        // Uniting an already-joined pair reports the full size.
        assert_eq!(dsu.unite(1, 2), 4);
        assert_eq!(dsu.find(3), dsu.find(0));
    }

    #[test]
    fn test_squared_distance() {
        let p = Junction { x: 1, y: 2, z: 3 };
        let q = Junction { x: 4, y: 6, z: 3 };
        assert_eq!(squared_distance(p, q), 25);
    }

    #[test]
    fn test_example_circuits() {
        // Ten connections join the seven nearest line boxes; the largest
        // circuits are then 7, 1 and 1. The run to a single circuit ends
        // with the 44,0,0 / 1000,0,0 pair.
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part1, 7);
        assert_eq!(answers.part2, Some(44000));
    }

    #[test]
    fn test_malformed_coordinates() {
        assert!(solve("1,2\n").is_err());
        assert!(solve("1,2,x\n").is_err());
    }

    #[test]
    fn test_too_few_junctions() {
        assert!(solve("1,2,3\n").is_err());
    }
}
