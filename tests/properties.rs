use grid_procgen::{
    deserialize, generate, graph::region_count, sampling::small_rng, serialize, Cell, CellGrid,
    Grid, MapError, PartitionMapSpec,
};

use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = Cell> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, top, right, bottom)| Cell {
            left,
            top,
            right,
            bottom,
        },
    )
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1..12usize, 1..12usize).prop_flat_map(|(w, h)| {
        prop::collection::vec(arb_cell(), w * h).prop_map(move |cells| {
            let mut grid = Grid::new(w as i32, h as i32).unwrap();
            for (i, cell) in cells.into_iter().enumerate() {
                grid.set((i % w) as i32, (i / w) as i32, cell).unwrap();
            }
            grid
        })
    })
}

proptest! {
    #[test]
    fn generated_size_and_bounds(w in 1..40i32, h in 1..40i32, seed in any::<[u32; 4]>()) {
        let grid = generate(w, h, &mut small_rng(seed)).unwrap();

        prop_assert_eq!((grid.width(), grid.height()), (w as usize, h as usize));
        for y in 0..h {
            for x in 0..w {
                prop_assert!(grid.get(x, y).is_ok());
            }
        }
        for (x, y) in [(-1, 0), (0, -1), (w, 0), (0, h), (w, h)].iter() {
            let is_out_of_bounds = matches!(grid.get(*x, *y), Err(MapError::OutOfBounds { .. }));
            prop_assert!(is_out_of_bounds);
        }
    }

    #[test]
    fn each_carved_wall_has_one_door(w in 1..40i32, h in 1..40i32, seed in any::<[u32; 4]>()) {
        let (grid, report) = PartitionMapSpec::new(seed, w, h).generate().unwrap();

        for wall in report.walls.iter() {
            let side = wall.orientation.wall_side();
            let c = wall.cells;
            let open: Vec<(usize, usize)> = (c.row..c.row + c.height)
                .flat_map(|y| (c.col..c.col + c.width).map(move |x| (x, y)))
                .filter(|(x, y)| !grid.get(*x as i32, *y as i32).unwrap().has_wall(side))
                .collect();
            prop_assert_eq!(open, vec![wall.door_cell()]);
        }
    }

    #[test]
    fn generated_maps_have_no_sealed_rooms(
        w in 1..30i32,
        h in 1..30i32,
        seed in any::<[u32; 4]>(),
    ) {
        let (grid, _) = PartitionMapSpec::new(seed, w, h).generate().unwrap();

        prop_assert_eq!(region_count(&grid), Ok(1));
    }

    #[test]
    fn round_trip_preserves_flags(grid in arb_grid()) {
        let map = serialize(&grid).unwrap();

        prop_assert_eq!(map.cells.len(), grid.width() * grid.height());
        prop_assert_eq!(deserialize(&map).unwrap(), grid);
    }

    #[test]
    fn round_trip_of_view_preserves_window(
        mut grid in arb_grid(),
        r in (0..12i32, 1..12i32),
        c in (0..12i32, 1..12i32),
    ) {
        let rows = r.0.min(grid.height() as i32 - 1)..(r.0 + r.1).min(grid.height() as i32);
        let cols = c.0.min(grid.width() as i32 - 1)..(c.0 + c.1).min(grid.width() as i32);
        prop_assume!(!rows.is_empty() && !cols.is_empty());

        let view = grid.sub_view(rows, cols).unwrap();
        let copy = deserialize(&serialize(&view).unwrap()).unwrap();
        prop_assert_eq!((copy.width(), copy.height()), (view.width(), view.height()));
        for y in 0..view.height() as i32 {
            for x in 0..view.width() as i32 {
                prop_assert_eq!(copy.get(x, y), view.get(x, y));
            }
        }
    }

    #[test]
    fn view_writes_alias_parent(
        w in 2..20i32,
        h in 2..20i32,
        cell in arb_cell(),
        pick in any::<(u16, u16, u16, u16)>(),
    ) {
        let mut grid = Grid::new(w, h).unwrap();
        let row_start = pick.0 as i32 % (h - 1);
        let col_start = pick.1 as i32 % (w - 1);
        let rows = row_start..row_start + 1 + pick.2 as i32 % (h - row_start);
        let cols = col_start..col_start + 1 + pick.3 as i32 % (w - col_start);
        let (vx, vy) = (cols.end - cols.start - 1, rows.end - rows.start - 1);
        {
            let mut view = grid.sub_view(rows.clone(), cols.clone()).unwrap();
            view.set(vx, vy, cell).unwrap();
        }

        prop_assert_eq!(grid.get(cols.start + vx, rows.start + vy), Ok(cell));
    }
}
