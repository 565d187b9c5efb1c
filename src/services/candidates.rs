use crate::models::{SeatGrid, SeatRange};

/// Все свободные блоки ровно из `seat_count` мест подряд в одном ряду.
///
/// Скользящее окно: на каждый ряд один проход со счётчиком длины текущей
/// свободной серии, итого O(rows × columns) на запрос. Порядок обнаружения:
/// по рядам, внутри ряда по возрастанию колонки.
pub fn find_all_ranges(grid: &SeatGrid, seat_count: usize) -> Vec<SeatRange> {
    let mut candidates = Vec::new();
    if seat_count == 0 || seat_count > grid.columns() {
        return candidates;
    }

    for row in 0..grid.rows() {
        // Ряд целиком занят или в нём меньше мест, чем нужно
        if grid.row_available(row) < seat_count {
            continue;
        }

        let mut run = 0;
        for (column, taken) in grid.row_occupancy(row).iter().enumerate() {
            if *taken {
                run = 0;
                continue;
            }
            run += 1;
            if run >= seat_count {
                candidates.push(SeatRange::in_row(row, column + 1 - seat_count, seat_count));
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatLocation;
    use proptest::prelude::*;

    fn labels(ranges: &[SeatRange]) -> Vec<String> {
        ranges.iter().map(|r| r.label()).collect()
    }

    #[test]
    fn windows_in_discovery_order() {
        let mut grid = SeatGrid::create(2, 4).unwrap();
        grid.reserve(SeatLocation::new(0, 1)).unwrap();

        let found = find_all_ranges(&grid, 2);
        assert_eq!(
            labels(&found),
            vec!["R1C3 - R1C4", "R2C1 - R2C2", "R2C2 - R2C3", "R2C3 - R2C4"]
        );
    }

    #[test]
    fn full_rows_are_skipped() {
        let mut grid = SeatGrid::create(2, 3).unwrap();
        grid.reserve_range(&SeatRange::in_row(0, 0, 3)).unwrap();

        let found = find_all_ranges(&grid, 1);
        assert!(found.iter().all(|r| r.row() == 1));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn oversized_and_zero_requests_yield_nothing() {
        let grid = SeatGrid::create(3, 4).unwrap();
        assert!(find_all_ranges(&grid, 5).is_empty());
        assert!(find_all_ranges(&grid, 0).is_empty());
    }

    #[test]
    fn fragmented_row_has_no_window() {
        let mut grid = SeatGrid::create(1, 5).unwrap();
        grid.reserve(SeatLocation::new(0, 2)).unwrap();
        assert!(find_all_ranges(&grid, 3).is_empty());
        assert_eq!(find_all_ranges(&grid, 2).len(), 2);
    }

    proptest! {
        #[test]
        fn candidates_are_free_contiguous_and_single_row(
            rows in 1usize..6,
            columns in 1usize..12,
            taken in proptest::collection::vec((0usize..6, 0usize..12), 0..30),
            seat_count in 1usize..6,
        ) {
            let mut grid = SeatGrid::create(rows, columns).unwrap();
            for (row, column) in taken {
                if row < rows && column < columns {
                    let _ = grid.reserve(SeatLocation::new(row, column));
                }
            }

            for range in find_all_ranges(&grid, seat_count) {
                prop_assert_eq!(range.start().row, range.end().row);
                prop_assert_eq!(range.len(), seat_count);
                for seat in range.seats() {
                    prop_assert!(grid.is_available(seat).unwrap());
                }
            }
        }
    }
}
