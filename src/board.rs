use crate::{
    board_coordinates, is_on_corner, is_on_edge, is_valid, manhattan_distance, Color, Coordinate,
    Tile, TileKind, BOARD_LEN, INFINITE_DISTANCE,
};
use serde::{Deserialize, Serialize};

/// One participant's 8 by 8 grid of [tiles](Tile).
///
/// The outer ring starts as [grass](Tile::grass) where persons and houses are placed. The
/// interior starts [blank](Tile::blank) and is filled with path [tiles](Tile). Boards are
/// plain values, so [cloning](Clone) one is a deep copy.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: [[Tile; BOARD_LEN]; BOARD_LEN],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// A fresh board with a grass edge and a blank interior.
    pub fn new() -> Board {
        let mut board = Board {
            rows: [[Tile::blank(); BOARD_LEN]; BOARD_LEN],
        };
        for coordinate in board_coordinates().filter(|&coordinate| is_on_edge(coordinate)) {
            board.set(coordinate, Tile::grass());
        }

        board
    }

    /// # Returns
    ///
    /// The [tile](Tile) at `coordinate`, or a [blank tile](Tile::blank) off the board.
    pub fn get(&self, coordinate @ (x, y): Coordinate) -> Tile {
        if is_valid(coordinate) {
            self.rows[y as usize][x as usize]
        } else {
            Tile::blank()
        }
    }

    /// Replaces the [tile](Tile) at `coordinate`. Does nothing off the board.
    pub fn set(&mut self, coordinate @ (x, y): Coordinate, tile: Tile) {
        if is_valid(coordinate) {
            self.rows[y as usize][x as usize] = tile;
        }
    }

    /// An [iterator](Iterator) of every [coordinate](Coordinate) and its [tile](Tile)
    /// in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        board_coordinates().map(|coordinate| (coordinate, self.get(coordinate)))
    }

    /// The first [coordinate](Coordinate) in row-major order where a person of `color` stands.
    pub fn locate_person(&self, color: Color) -> Option<Coordinate> {
        self.cells()
            .find(|(_, tile)| tile.person_color() == Some(color))
            .map(|(coordinate, _)| coordinate)
    }

    /// The first [coordinate](Coordinate) in row-major order where a house of `color` stands.
    pub fn locate_house(&self, color: Color) -> Option<Coordinate> {
        self.cells()
            .find(|(_, tile)| tile.house_color() == Some(color))
            .map(|(coordinate, _)| coordinate)
    }

    /// Whether `coordinate` lies on the board.
    #[inline]
    pub fn is_valid(&self, coordinate: Coordinate) -> bool {
        is_valid(coordinate)
    }

    /// Whether `coordinate` lies in the outer ring of the board.
    #[inline]
    pub fn is_on_edge(&self, coordinate: Coordinate) -> bool {
        is_on_edge(coordinate)
    }

    /// Whether `coordinate` is a corner of the board.
    #[inline]
    pub fn is_on_corner(&self, coordinate: Coordinate) -> bool {
        is_on_corner(coordinate)
    }

    /// The Manhattan distance between two locations, or [INFINITE_DISTANCE] if either
    /// was not found.
    #[inline]
    pub fn distance(&self, a: Option<Coordinate>, b: Option<Coordinate>) -> usize {
        manhattan_distance(a, b)
    }

    /// The distance from `at` to the partner of a person or house figure, where the partner of
    /// a person is the house of the same [color](Color) and vice versa.
    ///
    /// # Returns
    ///
    /// [INFINITE_DISTANCE] if `figure` is not a pure person or house or if the partner
    /// has not been placed.
    pub fn distance_to_partner(&self, figure: Tile, at: Coordinate) -> usize {
        let partner = match figure.kind() {
            TileKind::Person(color) => self.locate_house(color),
            TileKind::House(color) => self.locate_person(color),
            _ => return INFINITE_DISTANCE,
        };

        self.distance(partner, Some(at))
    }

    /// Adds the single road a goal at `at` needs to lead into the board. A goal on the bottom
    /// edge leads up, on the top edge down, on the right edge left, and on the left edge right.
    pub fn with_goal_roads(tile: Tile, (x, y): Coordinate) -> Tile {
        let last = BOARD_LEN as isize - 1;
        tile.with_roads(y == last, y == 0, x == last, x == 0)
    }

    /// A [grass](Tile::grass) [tile](Tile) with the given figures and the road a goal
    /// at `at` has.
    pub fn goal_tile(house: Option<Color>, person: Option<Color>, at: Coordinate) -> Tile {
        Board::with_goal_roads(Tile::grass().with_house(house).with_person(person), at)
    }

    /// Whether a person can step from `from` to `to` along the roads of both [tiles](Tile).
    ///
    /// # See Also
    ///
    /// * [Tile::connects]
    pub fn connects(&self, from: Coordinate, to: Coordinate) -> bool {
        self.get(from).connects(from, self.get(to), to)
    }

    /// Whether every person has reached the house of the same [color](Color).
    pub fn is_winning_board(&self) -> bool {
        Color::colors().into_iter().all(|color| {
            let person = self.locate_person(color);
            person.is_some() && person == self.locate_house(color)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use itertools::Itertools;
    use rand::Rng;

    #[test]
    fn new_board_grass_edge_blank_interior() {
        let board = Board::new();

        for (coordinate, tile) in board.cells() {
            if is_on_edge(coordinate) {
                assert!(tile.is_grass());
            } else {
                assert!(tile.is_blank());
            }
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn get_and_set_off_board() {
        let mut board = Board::new();
        let tile = Tile::blank().into_lake();

        board.set((-1, 3), tile);
        board.set((3, 8), tile);

        assert_eq!(Board::new(), board);
        assert!(board.get((-1, 3)).is_blank());
        assert!(board.get((8, 8)).is_blank());
    }

    #[test]
    fn set_uses_column_and_row() {
        let mut board = Board::new();
        let tile = Tile::blank().into_lake();

        board.set((2, 5), tile);

        assert_eq!(tile, board.get((2, 5)));
        assert!(board.get((5, 2)).is_blank());
    }

    #[test]
    fn locate_nothing_on_fresh_board() {
        let board = Board::new();

        for color in Color::colors() {
            assert_eq!(None, board.locate_person(color));
            assert_eq!(None, board.locate_house(color));
        }
        assert!(!board.is_winning_board());
    }

    #[test]
    fn locate_first_in_row_major_order() {
        let mut board = Board::new();
        board.set((5, 0), Tile::grass().with_person(Some(Color::Red)));
        board.set((0, 3), Tile::grass().with_person(Some(Color::Red)));
        board.set((7, 4), Tile::grass().with_house(Some(Color::Red)));

        assert_eq!(Some((5, 0)), board.locate_person(Color::Red));
        assert_eq!(Some((7, 4)), board.locate_house(Color::Red));
        assert_eq!(None, board.locate_house(Color::Blue));
    }

    #[test]
    fn distance_to_partner() {
        let mut board = Board::new();
        board.set((0, 2), Tile::grass().with_house(Some(Color::Yellow)));

        assert_eq!(
            9,
            board.distance_to_partner(Tile::person(Color::Yellow), (7, 4))
        );
        assert_eq!(
            INFINITE_DISTANCE,
            board.distance_to_partner(Tile::house(Color::Yellow), (7, 4))
        );
        assert_eq!(
            INFINITE_DISTANCE,
            board.distance_to_partner(Tile::person(Color::Blue), (7, 4))
        );
        assert_eq!(
            INFINITE_DISTANCE,
            board.distance_to_partner(Tile::grass(), (7, 4))
        );
    }

    #[test]
    fn goal_roads_lead_inward() {
        let mut rng = rand::thread_rng();
        let middle = rng.gen_range(1..BOARD_LEN as isize - 1);

        let cases = [
            ((middle, 7), Direction::Up),
            ((middle, 0), Direction::Down),
            ((7, middle), Direction::Left),
            ((0, middle), Direction::Right),
        ];
        for (at, direction) in cases {
            let goal = Board::goal_tile(Some(Color::Purple), None, at);

            assert_eq!(vec![direction], goal.roads().collect_vec());
            assert_eq!(Some(Color::Purple), goal.house_color());
            assert_eq!(None, goal.person_color());
            assert_eq!(crate::GRASS_INDEX, goal.piece_index());
        }
    }

    #[test]
    fn goal_connects_to_interior() {
        let mut board = Board::new();
        board.set((3, 7), Board::goal_tile(Some(Color::Red), None, (3, 7)));
        board.set((3, 6), Tile::blank().with_roads(true, true, false, false));
        board.set((4, 6), Tile::blank().with_diagonals(false, false, true, false));

        assert!(board.connects((3, 6), (3, 7)));
        assert!(board.connects((3, 7), (3, 6)));
        assert!(!board.connects((4, 6), (3, 7)));
        assert!(!board.connects((3, 7), (3, 7)));
    }

    #[test]
    fn winning_board_needs_every_color_home() {
        let mut board = Board::new();
        let homes = [(1, 0), (0, 2), (7, 3), (4, 7)];

        for (color, at) in Color::colors().into_iter().zip(homes) {
            assert!(!board.is_winning_board());
            board.set(at, Board::goal_tile(Some(color), Some(color), at));
        }

        assert!(board.is_winning_board());
    }

    #[test]
    fn winning_board_apart() {
        let mut board = Board::new();
        let homes = [(1, 0), (0, 2), (7, 3), (4, 7)];
        for (color, at) in Color::colors().into_iter().zip(homes) {
            board.set(at, Board::goal_tile(Some(color), Some(color), at));
        }

        board.set((4, 7), Board::goal_tile(Some(Color::Purple), None, (4, 7)));
        board.set((4, 6), Tile::person(Color::Purple).combine(Tile::blank().into_lake()));

        assert!(!board.is_winning_board());
    }

    #[test]
    fn clone_is_deep() {
        let board = Board::new();
        let mut copy = board.clone();

        copy.set((3, 3), Tile::blank().into_lake());

        assert!(board.get((3, 3)).is_blank());
        assert_ne!(board, copy);
    }
}
