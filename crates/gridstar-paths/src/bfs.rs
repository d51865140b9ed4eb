use std::collections::VecDeque;

use gridstar_core::{GridGraph, Pos};

/// Sentinel for cells a breadth-first search did not reach.
pub const UNREACHABLE: u32 = u32::MAX;

/// Unweighted breadth-first distances from `from` to every cell.
///
/// Uses the same neighbour relation as the A* engine. Cells that cannot be
/// reached hold [`UNREACHABLE`]. An out-of-bounds `from` reaches nothing.
pub fn bfs_map(grid: &GridGraph, from: Pos) -> Vec<u32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(si) = grid.index(from) else {
        return dist;
    };
    dist[si] = 0;

    let mut queue = VecDeque::from([si]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let next = dist[ci] + 1;
        nbuf.clear();
        grid.neighbors_into(grid.pos(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = next;
            queue.push_back(ni);
        }
    }
    dist
}

/// Length in steps of the shortest path from `from` to `to`, if any.
pub fn bfs_distance(grid: &GridGraph, from: Pos, to: Pos) -> Option<u32> {
    let ti = grid.index(to)?;
    let d = bfs_map(grid, from)[ti];
    (d != UNREACHABLE).then_some(d)
}
