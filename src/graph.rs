use crate::{cell::Side, grid::CellGrid, MapError};

use fnv::FnvHashMap;
use petgraph::{algo::tarjan_scc, graph::NodeIndex, stable_graph::StableGraph, Undirected};

/// One node per cell (weighted by its local `(x, y)`), with an edge between orthogonal
/// neighbours whenever neither of them has a wall on the shared side.
pub fn passage_graph(
    grid: &impl CellGrid,
) -> Result<StableGraph<(i32, i32), (), Undirected>, MapError> {
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    let mut graph = StableGraph::default();
    let mut nodes = FnvHashMap::<(i32, i32), NodeIndex>::default();
    for y in 0..height {
        for x in 0..width {
            nodes.insert((x, y), graph.add_node((x, y)));
        }
    }

    let neighbours = [(Side::Right, (1, 0)), (Side::Bottom, (0, 1))];
    for y in 0..height {
        for x in 0..width {
            let cell = grid.get(x, y)?;
            for (side, (dx, dy)) in neighbours.iter() {
                let other_pos = (x + dx, y + dy);
                let other = match grid.get(other_pos.0, other_pos.1) {
                    Ok(c) => c,
                    Err(_) => continue,
                };
                if !cell.has_wall(*side) && !other.has_wall(side.opposite()) {
                    graph.add_edge(nodes[&(x, y)], nodes[&other_pos], ());
                }
            }
        }
    }

    Ok(graph)
}

/// Number of connected regions in `grid`. Every generated map has exactly one.
pub fn region_count(grid: &impl CellGrid) -> Result<usize, MapError> {
    Ok(tarjan_scc(&passage_graph(grid)?).len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell::Cell, grid::Grid};

    #[test]
    fn test_open_grid_is_one_region() {
        let grid = Grid::new(4, 3).unwrap();
        let graph = passage_graph(&grid).unwrap();

        assert_eq!(graph.node_count(), 12);
        // 3 rows of 3 horizontal links, 2 rows of 4 vertical links.
        assert_eq!(graph.edge_count(), 9 + 8);
        assert_eq!(region_count(&grid), Ok(1));
    }

    #[test]
    fn test_full_wall_splits_regions() {
        let mut grid = Grid::new(3, 2).unwrap();
        for x in 0..3 {
            grid.set(x, 0, Cell::default().with_wall(Side::Bottom)).unwrap();
        }

        assert_eq!(region_count(&grid), Ok(2));
    }

    #[test]
    fn test_wall_on_far_side_blocks() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(1, 0, Cell::default().with_wall(Side::Left)).unwrap();

        assert_eq!(region_count(&grid), Ok(2));
    }

    #[test]
    fn test_view_graph_uses_local_coordinates() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, Cell::default().with_wall(Side::Right)).unwrap();
        let view = grid.view().sub_view(1..4, 1..4).unwrap();
        let graph = passage_graph(&view).unwrap();

        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 12 - 1);
        assert!(graph.node_indices().any(|i| graph[i] == (2, 2)));
        assert!(!graph.node_indices().any(|i| graph[i] == (3, 3)));
    }
}
