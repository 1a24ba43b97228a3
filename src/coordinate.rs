use crate::BOARD_LEN;

/// A tuple with two integer components for horizontal and vertical position on the board,
/// where x is the column growing to the right and y is the row growing downward.
///
/// A location that could not be found is [None] rather than a coordinate.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Direction::offset](crate::Direction::offset)
pub type Coordinate = (isize, isize);

/// The distance between a [coordinate](Coordinate) and a location that is not on the board.
pub const INFINITE_DISTANCE: usize = usize::MAX;

/// The Manhattan distance between two [coordinates](Coordinate).
///
/// # Arguments
///
/// * `a`: Some [coordinate](Coordinate) or [None] for a location that was not found.
/// * `b`: Some [coordinate](Coordinate) or [None] for a location that was not found.
///
/// # Returns
///
/// The sum of the absolute differences of both components, or [INFINITE_DISTANCE]
/// if either location was not found.
pub fn manhattan_distance(a: Option<Coordinate>, b: Option<Coordinate>) -> usize {
    let (Some((x1, y1)), Some((x2, y2))) = (a, b) else {
        return INFINITE_DISTANCE;
    };

    x1.abs_diff(x2) + y1.abs_diff(y2)
}

/// Whether both components lie inside `0..BOARD_LEN`.
#[inline]
pub fn is_valid((x, y): Coordinate) -> bool {
    let range = 0..BOARD_LEN as isize;
    range.contains(&x) && range.contains(&y)
}

/// Whether the [coordinate](Coordinate) is on the board and in its outer ring.
pub fn is_on_edge(coordinate @ (x, y): Coordinate) -> bool {
    let last = BOARD_LEN as isize - 1;
    is_valid(coordinate) && (x == 0 || y == 0 || x == last || y == last)
}

/// Whether the [coordinate](Coordinate) is one of the four corners of the board.
pub fn is_on_corner(coordinate @ (x, y): Coordinate) -> bool {
    let last = BOARD_LEN as isize - 1;
    is_valid(coordinate) && (x == 0 || x == last) && (y == 0 || y == last)
}

/// An [iterator](Iterator) of every [coordinate](Coordinate) on the board in row-major order.
pub fn board_coordinates() -> impl Iterator<Item = Coordinate> {
    let len = BOARD_LEN as isize;
    (0..len).flat_map(move |y| (0..len).map(move |x| (x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::Rng;

    #[test]
    fn manhattan_distance_not_found() {
        let coordinate = Some(rand::thread_rng().gen());

        assert_eq!(INFINITE_DISTANCE, manhattan_distance(None, coordinate));
        assert_eq!(INFINITE_DISTANCE, manhattan_distance(coordinate, None));
        assert_eq!(INFINITE_DISTANCE, manhattan_distance(None, None));
    }

    #[test]
    fn manhattan_distance_found() {
        let mut rng = rand::thread_rng();
        let (x, y) = (rng.gen_range(-100..100), rng.gen_range(-100..100));

        assert_eq!(0, manhattan_distance(Some((x, y)), Some((x, y))));
        assert_eq!(7, manhattan_distance(Some((x, y)), Some((x + 3, y - 4))));
        assert_eq!(7, manhattan_distance(Some((x + 3, y - 4)), Some((x, y))));
    }

    #[test]
    fn is_valid_bounds() {
        assert!(is_valid((0, 0)));
        assert!(is_valid((7, 7)));
        assert!(!is_valid((-1, 3)));
        assert!(!is_valid((3, 8)));
    }

    #[test]
    fn edges_and_corners() {
        let edges = board_coordinates().filter(|&coordinate| is_on_edge(coordinate)).count();
        let corners = board_coordinates()
            .filter(|&coordinate| is_on_corner(coordinate))
            .collect_vec();

        assert_eq!(4 * (BOARD_LEN - 1), edges);
        assert_eq!(vec![(0, 0), (7, 0), (0, 7), (7, 7)], corners);
        assert!(!is_on_edge((-1, 0)));
        assert!(!is_on_corner((8, 8)));
        assert!(!is_on_edge((3, 4)));
    }

    #[test]
    fn board_coordinates_row_major() {
        let coordinates = board_coordinates().collect_vec();

        assert_eq!(BOARD_LEN * BOARD_LEN, coordinates.len());
        assert_eq!((0, 0), coordinates[0]);
        assert_eq!((1, 0), coordinates[1]);
        assert_eq!((0, 1), coordinates[BOARD_LEN]);
    }
}
