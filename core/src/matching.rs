use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Smallest connected group that gets cleared.
pub const MIN_GROUP_SIZE: usize = 4;

/// Size of the gem group containing `coords`, or 0 for Empty and out-of-range cells.
pub fn gem_group_size(grid: &Grid, coords: Coord2) -> usize {
    match grid.shape_at(coords) {
        Some(shape) if !shape.is_empty() => grid.flood_fill(coords).len(),
        _ => 0,
    }
}

/// Union of every connected same-shape gem group with at least `min_size` members.
///
/// Each cell belongs to exactly one component, so one visited mask covers the whole scan. Groups
/// of Empty cells never qualify.
pub fn find_all_groups(grid: &Grid, min_size: usize) -> BTreeSet<Coord2> {
    let (width, height) = grid.size();
    let mut visited: Array2<bool> = Array2::default((width, height).to_nd_index());
    let mut matches = BTreeSet::new();
    let mut group = Vec::new();

    for (coords, cell) in grid.iter() {
        if visited[coords.to_nd_index()] {
            continue;
        }

        group.clear();
        grid.fill_from(coords, &mut visited, &mut group);

        if !cell.is_empty() && group.len() >= min_size {
            matches.extend(group.iter().copied());
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid(layout: &str) -> Grid {
        Grid::parse(layout).unwrap()
    }

    #[test]
    fn two_by_two_block_is_the_only_match() {
        let grid = grid(
            "
            TSTS
            SOOT
            TOOS
            STST
            ",
        );

        let matches = find_all_groups(&grid, MIN_GROUP_SIZE);

        assert_eq!(
            matches.into_iter().collect::<Vec<_>>(),
            [(1, 1), (1, 2), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn group_of_three_is_not_matched() {
        let grid = grid(
            "
            SSST
            TTHD
            ",
        );

        assert!(find_all_groups(&grid, MIN_GROUP_SIZE).is_empty());
        assert_eq!(gem_group_size(&grid, (1, 0)), 3);
    }

    #[test]
    fn horizontal_run_of_four_is_matched() {
        let grid = grid(
            "
            TTTTTT
            TSSSST
            TTTTTT
            ",
        );

        let matches = find_all_groups(&grid, MIN_GROUP_SIZE);

        // the surrounding triangles form one ring-shaped group of 14 as well
        assert_eq!(matches.len(), 18);
        for x in 1..=4 {
            assert!(matches.contains(&(x, 1)));
        }
    }

    #[test]
    fn separate_groups_are_unioned() {
        let grid = grid(
            "
            SSSSD
            HOTDP
            OOOOT
            ",
        );

        let matches = find_all_groups(&grid, MIN_GROUP_SIZE);

        let expected: BTreeSet<Coord2> = vec![
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (0, 2),
            (1, 2),
            (2, 2),
            (3, 2),
            (1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(matches, expected);
    }

    #[test]
    fn empty_regions_never_match() {
        let grid = grid(
            "
            ....
            ....
            TSOP
            ",
        );

        assert!(find_all_groups(&grid, MIN_GROUP_SIZE).is_empty());
        assert_eq!(gem_group_size(&grid, (0, 0)), 0);
    }

    #[test]
    fn bent_group_counts_as_connected() {
        let grid = grid(
            "
            DTT
            DTS
            DDS
            ",
        );

        let matches = find_all_groups(&grid, MIN_GROUP_SIZE);

        assert_eq!(matches.len(), 4);
        assert!(matches.contains(&(1, 2)));
        assert!(!matches.contains(&(1, 0)));
    }
}
