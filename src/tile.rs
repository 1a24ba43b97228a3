use crate::{Coordinate, END_OF_TURN_INDEX, FAILURE_INDEX, GRASS_INDEX, SUCCESS_INDEX};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

const GOLD_MASK: u32 = 1;
const SILVER_MASK: u32 = 1 << 1;
const COIN_MASK: u32 = SILVER_MASK | GOLD_MASK;
const ORTHOGONAL_MASK: u32 = 0b1111 << 2;
const DIAGONAL_MASK: u32 = 0b1111 << 18;
const ROAD_MASK: u32 = ORTHOGONAL_MASK | DIAGONAL_MASK;
const INDEX_SHIFT: u32 = 6;
const INDEX_FIELD: u32 = 0b11_1111;
const INDEX_MASK: u32 = INDEX_FIELD << INDEX_SHIFT;
const PERSON_SHIFT: u32 = 12;
const HOUSE_SHIFT: u32 = 15;
const COLOR_FIELD: u32 = 0b111;
const PERSON_MASK: u32 = COLOR_FIELD << PERSON_SHIFT;
const HOUSE_MASK: u32 = COLOR_FIELD << HOUSE_SHIFT;
const FIGURE_MASK: u32 = PERSON_MASK | HOUSE_MASK;
const BITS_MASK: u32 = (1 << 22) - 1;

/// Describes the color of a person or a house on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum Color {
    /// `1`.
    Red = 1,
    /// `2`.
    Yellow = 2,
    /// `3`.
    Blue = 3,
    /// `4`.
    Purple = 4,
}

impl Color {
    /// The number of [`Color`] variants. 4 person and house pairs.
    pub const COLORS_LEN: usize = 4;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [Color::Red, Color::Yellow, Color::Blue, Color::Purple]
    }

    /// The zero based position of the color in [`Color::colors`], used to index
    /// per color arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::colors()[rng.gen_range(0..Color::COLORS_LEN)]
    }
}

/// Describes one of the eight directions a road can leave a [`Tile`] in.
///
/// The discriminant is the position of the direction when walking clockwise around the tile
/// from the top left corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum Direction {
    /// `0`.
    NorthWest = 0,
    /// `1`.
    Up = 1,
    /// `2`.
    NorthEast = 2,
    /// `3`.
    Right = 3,
    /// `4`.
    SouthEast = 4,
    /// `5`.
    Down = 5,
    /// `6`.
    SouthWest = 6,
    /// `7`.
    Left = 7,
}

impl Direction {
    /// The number of [`Direction`] variants.
    pub const DIRECTIONS_LEN: usize = 8;

    /// # Returns
    ///
    /// An array of all [`Direction`] variants in clockwise order starting from
    /// [`Direction::NorthWest`].
    #[inline]
    pub fn directions() -> [Direction; Direction::DIRECTIONS_LEN] {
        [
            Direction::NorthWest,
            Direction::Up,
            Direction::NorthEast,
            Direction::Right,
            Direction::SouthEast,
            Direction::Down,
            Direction::SouthWest,
            Direction::Left,
        ]
    }

    /// The position of the direction in [`Direction::directions`].
    #[inline]
    pub fn position(self) -> usize {
        self as usize
    }

    /// The direction one eighth of a turn clockwise from this one.
    pub fn clockwise(self) -> Direction {
        Direction::from_usize((self.position() + 1) % Direction::DIRECTIONS_LEN)
            .unwrap_or_else(|| unreachable!("directions cover every position modulo 8."))
    }

    /// Whether the direction points at a corner of the tile.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.position() % 2 == 0
    }

    /// The change in [coordinate](Coordinate) when stepping once in this direction, where
    /// x grows to the right and y grows downward.
    pub fn offset(self) -> Coordinate {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::Up => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::Right => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::Down => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }

    fn mask(self) -> u32 {
        match self {
            Direction::NorthWest => 1 << 21,
            Direction::NorthEast => 1 << 20,
            Direction::SouthWest => 1 << 19,
            Direction::SouthEast => 1 << 18,
            Direction::Up => 1 << 5,
            Direction::Down => 1 << 4,
            Direction::Left => 1 << 3,
            Direction::Right => 1 << 2,
        }
    }
}

/// The single category of a [`Tile`], derived from its bits.
///
/// # See Also
///
/// * [Tile::kind]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TileKind {
    /// Nothing at all. Interior cells start blank.
    Blank,
    /// Roads in all eight directions and no coins.
    Lake,
    /// A house figure alone.
    House(Color),
    /// A person figure alone.
    Person(Color),
    /// A house figure and a person figure with nothing else.
    HouseAndPerson {
        /// The house color.
        house: Color,
        /// The person color.
        person: Color,
    },
    /// Any other tile: path tiles, grass, and the result markers.
    Path,
}

/// Explicit field values for [Tile::new].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TileFields {
    /// Road leaving through the top edge.
    pub up: bool,
    /// Road leaving through the bottom edge.
    pub down: bool,
    /// Road leaving through the left edge.
    pub left: bool,
    /// Road leaving through the right edge.
    pub right: bool,
    /// Road leaving through the top left corner.
    pub north_west: bool,
    /// Road leaving through the top right corner.
    pub north_east: bool,
    /// Road leaving through the bottom left corner.
    pub south_west: bool,
    /// Road leaving through the bottom right corner.
    pub south_east: bool,
    /// A silver coin lies on the tile.
    pub silver: bool,
    /// A gold coin lies on the tile.
    pub gold: bool,
    /// The piece index, truncated to 6 bits.
    pub piece_index: u32,
    /// The person standing on the tile.
    pub person: Option<Color>,
    /// The house standing on the tile.
    pub house: Option<Color>,
}

/// A board piece packed into the low 22 bits of a `u32`.
///
/// | Bits | Field |
/// |---|---|
/// | 21, 20, 19, 18 | north west, north east, south west, south east roads |
/// | 15..=17 | house [color](Color) or `0` |
/// | 12..=14 | person [color](Color) or `0` |
/// | 6..=11 | piece index, with `60..=63` reserved for grass and the result markers |
/// | 5, 4, 3, 2 | up, down, left, right roads |
/// | 1, 0 | silver coin, gold coin |
///
/// Tiles are values. Every method that changes a field returns a new tile.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(u32);

impl Tile {
    /// A tile from explicit field values.
    pub fn new(fields: TileFields) -> Tile {
        Tile::blank()
            .with_roads(fields.up, fields.down, fields.left, fields.right)
            .with_diagonals(
                fields.north_west,
                fields.north_east,
                fields.south_west,
                fields.south_east,
            )
            .with_coins(fields.silver, fields.gold)
            .with_piece_index(fields.piece_index)
            .with_person(fields.person)
            .with_house(fields.house)
    }

    /// A tile from its raw encoding. Bits above bit 21 are ignored.
    #[inline]
    pub fn from_bits(bits: u32) -> Tile {
        Tile(bits & BITS_MASK)
    }

    /// The raw encoding.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// The empty tile of an unplayed interior cell.
    #[inline]
    pub fn blank() -> Tile {
        Tile(0)
    }

    /// A plain grass tile of the board edge, where persons and houses are placed.
    #[inline]
    pub fn grass() -> Tile {
        Tile(GRASS_INDEX << INDEX_SHIFT)
    }

    /// The marker of an illegal move.
    #[inline]
    pub fn failure() -> Tile {
        Tile(FAILURE_INDEX << INDEX_SHIFT)
    }

    /// The marker of a legal move.
    #[inline]
    pub fn success() -> Tile {
        Tile(SUCCESS_INDEX << INDEX_SHIFT)
    }

    /// The marker shown in place of the next tile once a turn has nothing left to play.
    #[inline]
    pub fn end_of_turn() -> Tile {
        Tile(END_OF_TURN_INDEX << INDEX_SHIFT)
    }

    /// A house figure.
    #[inline]
    pub fn house(color: Color) -> Tile {
        Tile::blank().with_house(Some(color))
    }

    /// A person figure.
    #[inline]
    pub fn person(color: Color) -> Tile {
        Tile::blank().with_person(Some(color))
    }

    /// # Returns
    ///
    /// The single [category](TileKind) of the tile.
    pub fn kind(self) -> TileKind {
        if self.0 == 0 {
            return TileKind::Blank;
        }
        if self.0 & (ROAD_MASK | COIN_MASK) == ROAD_MASK {
            return TileKind::Lake;
        }
        if self.0 & !FIGURE_MASK != 0 {
            return TileKind::Path;
        }

        let house = (self.0 & HOUSE_MASK) >> HOUSE_SHIFT;
        let person = (self.0 & PERSON_MASK) >> PERSON_SHIFT;
        match (Color::from_u32(house), Color::from_u32(person)) {
            (Some(house), None) if person == 0 => TileKind::House(house),
            (None, Some(person)) if house == 0 => TileKind::Person(person),
            (Some(house), Some(person)) => TileKind::HouseAndPerson { house, person },
            // colors outside 1..=4 are not figures
            _ => TileKind::Path,
        }
    }

    /// Whether every bit is zero.
    #[inline]
    pub fn is_blank(self) -> bool {
        self.kind() == TileKind::Blank
    }

    /// Whether the tile is a lake: roads in all eight directions and no coins.
    #[inline]
    pub fn is_lake(self) -> bool {
        self.kind() == TileKind::Lake
    }

    /// Whether the tile is a house figure and nothing else.
    #[inline]
    pub fn is_house(self) -> bool {
        matches!(self.kind(), TileKind::House(_))
    }

    /// Whether the tile is a person figure and nothing else.
    #[inline]
    pub fn is_person(self) -> bool {
        matches!(self.kind(), TileKind::Person(_))
    }

    /// Whether the tile is a house figure and a person figure and nothing else.
    #[inline]
    pub fn is_house_and_person(self) -> bool {
        matches!(self.kind(), TileKind::HouseAndPerson { .. })
    }

    /// Whether the tile is a pure house or a pure person figure.
    #[inline]
    pub fn is_figure(self) -> bool {
        matches!(self.kind(), TileKind::House(_) | TileKind::Person(_))
    }

    /// Whether the tile falls in [TileKind::Path].
    #[inline]
    pub fn is_path(self) -> bool {
        self.kind() == TileKind::Path
    }

    /// Whether a figure can be [combined](Tile::combine) into the tile: anything except
    /// blank tiles and figures.
    #[inline]
    pub fn accepts_figure(self) -> bool {
        matches!(self.kind(), TileKind::Path | TileKind::Lake)
    }

    /// Whether the tile is exactly [Tile::grass].
    #[inline]
    pub fn is_grass(self) -> bool {
        self == Tile::grass()
    }

    /// Whether the tile is exactly [Tile::failure].
    #[inline]
    pub fn is_failure(self) -> bool {
        self == Tile::failure()
    }

    /// Whether the tile is exactly [Tile::success].
    #[inline]
    pub fn is_success(self) -> bool {
        self == Tile::success()
    }

    /// Whether the tile is exactly [Tile::end_of_turn].
    #[inline]
    pub fn is_end_of_turn(self) -> bool {
        self == Tile::end_of_turn()
    }

    /// Whether a road leaves the tile in `direction`.
    #[inline]
    pub fn has_road(self, direction: Direction) -> bool {
        self.0 & direction.mask() != 0
    }

    /// Whether a road leaves through the top edge.
    #[inline]
    pub fn up(self) -> bool {
        self.has_road(Direction::Up)
    }

    /// Whether a road leaves through the bottom edge.
    #[inline]
    pub fn down(self) -> bool {
        self.has_road(Direction::Down)
    }

    /// Whether a road leaves through the left edge.
    #[inline]
    pub fn left(self) -> bool {
        self.has_road(Direction::Left)
    }

    /// Whether a road leaves through the right edge.
    #[inline]
    pub fn right(self) -> bool {
        self.has_road(Direction::Right)
    }

    /// Whether a road leaves through the top left corner.
    #[inline]
    pub fn north_west(self) -> bool {
        self.has_road(Direction::NorthWest)
    }

    /// Whether a road leaves through the top right corner.
    #[inline]
    pub fn north_east(self) -> bool {
        self.has_road(Direction::NorthEast)
    }

    /// Whether a road leaves through the bottom left corner.
    #[inline]
    pub fn south_west(self) -> bool {
        self.has_road(Direction::SouthWest)
    }

    /// Whether a road leaves through the bottom right corner.
    #[inline]
    pub fn south_east(self) -> bool {
        self.has_road(Direction::SouthEast)
    }

    /// An [iterator](Iterator) of the directions with roads in clockwise order.
    pub fn roads(self) -> impl Iterator<Item = Direction> {
        Direction::directions()
            .into_iter()
            .filter(move |&direction| self.has_road(direction))
    }

    /// Whether a silver coin lies on the tile.
    #[inline]
    pub fn has_silver(self) -> bool {
        self.0 & SILVER_MASK != 0
    }

    /// Whether a gold coin lies on the tile.
    #[inline]
    pub fn has_gold(self) -> bool {
        self.0 & GOLD_MASK != 0
    }

    /// The piece index. Bag tiles are numbered from `0`, and `60..=63` mark grass and
    /// the result markers.
    #[inline]
    pub fn piece_index(self) -> u32 {
        (self.0 & INDEX_MASK) >> INDEX_SHIFT
    }

    /// The color of the house on the tile, if any.
    #[inline]
    pub fn house_color(self) -> Option<Color> {
        Color::from_u32((self.0 & HOUSE_MASK) >> HOUSE_SHIFT)
    }

    /// The color of the person on the tile, if any.
    #[inline]
    pub fn person_color(self) -> Option<Color> {
        Color::from_u32((self.0 & PERSON_MASK) >> PERSON_SHIFT)
    }

    /// The number of orthogonal roads.
    #[inline]
    pub fn orthogonal_moves(self) -> usize {
        (self.0 & ORTHOGONAL_MASK).count_ones() as usize
    }

    /// The number of diagonal roads.
    #[inline]
    pub fn diagonal_moves(self) -> usize {
        (self.0 & DIAGONAL_MASK).count_ones() as usize
    }

    /// The number of roads in all directions, which is also the number of steps a person may
    /// take when this tile is played on them.
    #[inline]
    pub fn moves(self) -> usize {
        (self.0 & ROAD_MASK).count_ones() as usize
    }

    /// A copy with the road in `direction` set or cleared.
    #[inline]
    pub fn with_road(self, direction: Direction, road: bool) -> Tile {
        if road {
            Tile(self.0 | direction.mask())
        } else {
            Tile(self.0 & !direction.mask())
        }
    }

    /// A copy with the four orthogonal roads replaced.
    pub fn with_roads(self, up: bool, down: bool, left: bool, right: bool) -> Tile {
        Tile(self.0 & !ORTHOGONAL_MASK)
            .with_road(Direction::Up, up)
            .with_road(Direction::Down, down)
            .with_road(Direction::Left, left)
            .with_road(Direction::Right, right)
    }

    /// A copy with the four diagonal roads replaced.
    pub fn with_diagonals(
        self,
        north_west: bool,
        north_east: bool,
        south_west: bool,
        south_east: bool,
    ) -> Tile {
        Tile(self.0 & !DIAGONAL_MASK)
            .with_road(Direction::NorthWest, north_west)
            .with_road(Direction::NorthEast, north_east)
            .with_road(Direction::SouthWest, south_west)
            .with_road(Direction::SouthEast, south_east)
    }

    /// A copy with the coins replaced.
    pub fn with_coins(self, silver: bool, gold: bool) -> Tile {
        let silver = if silver { SILVER_MASK } else { 0 };
        let gold = if gold { GOLD_MASK } else { 0 };
        Tile(self.without_coins().0 | silver | gold)
    }

    /// A copy with both coins taken.
    #[inline]
    pub fn without_coins(self) -> Tile {
        Tile(self.0 & !COIN_MASK)
    }

    /// A copy with the piece index replaced. The index is truncated to 6 bits.
    #[inline]
    pub fn with_piece_index(self, piece_index: u32) -> Tile {
        Tile((self.0 & !INDEX_MASK) | ((piece_index & INDEX_FIELD) << INDEX_SHIFT))
    }

    /// A copy with the person added, replaced, or removed.
    #[inline]
    pub fn with_person(self, person: Option<Color>) -> Tile {
        let field = person.map_or(0, |color| color as u32);
        Tile((self.0 & !PERSON_MASK) | (field << PERSON_SHIFT))
    }

    /// A copy with the house added, replaced, or removed.
    #[inline]
    pub fn with_house(self, house: Option<Color>) -> Tile {
        let field = house.map_or(0, |color| color as u32);
        Tile((self.0 & !HOUSE_MASK) | (field << HOUSE_SHIFT))
    }

    /// A copy turned into a lake. All the coins sink to the bottom.
    #[inline]
    pub fn into_lake(self) -> Tile {
        Tile(self.0 | ROAD_MASK).without_coins()
    }

    /// The person figure standing on the tile, or [Tile::failure] if nobody is.
    pub fn person_figure(self) -> Tile {
        self.person_color().map_or_else(Tile::failure, Tile::person)
    }

    /// The house figure standing on the tile, or [Tile::failure] if there is none.
    pub fn house_figure(self) -> Tile {
        self.house_color().map_or_else(Tile::failure, Tile::house)
    }

    /// Rotates every road one eighth of a turn clockwise, so a road to the top left now
    /// leads up and a road up now leads to the top right. Eight rotations restore the tile.
    pub fn rotate_clockwise(self) -> Tile {
        Direction::directions()
            .into_iter()
            .fold(Tile(self.0 & !ROAD_MASK), |tile, direction| {
                tile.with_road(direction.clockwise(), self.has_road(direction))
            })
    }

    /// Rotates every road a quarter turn clockwise. Two [eighth turns](Tile::rotate_clockwise).
    #[inline]
    pub fn rotate_quarter(self) -> Tile {
        self.rotate_clockwise().rotate_clockwise()
    }

    /// Combines a pure person or house figure with a tile that
    /// [accepts figures](Tile::accepts_figure). The order of the arguments does not matter.
    ///
    /// # Returns
    ///
    /// The accepting tile with the color of the figure copied in, or [Tile::failure]
    /// if neither or both tiles are figures or the other tile cannot hold a figure.
    pub fn combine(self, other: Tile) -> Tile {
        let (figure, target) = if self.accepts_figure() {
            (other, self)
        } else {
            (self, other)
        };
        if !target.accepts_figure() {
            return Tile::failure();
        }

        match figure.kind() {
            TileKind::Person(color) => target.with_person(Some(color)),
            TileKind::House(color) => target.with_house(Some(color)),
            _ => Tile::failure(),
        }
    }

    /// Whether a person can walk from this tile at `at` to `other` at `other_at`.
    ///
    /// Each road ends on the edge or corner it points at. Two neighbouring tiles connect when
    /// some road of one ends where some road of the other ends, so a right road meets a
    /// left road, a top right road meets a top left road along a shared top-bottom edge or
    /// a bottom left road across a shared corner, and so on.
    pub fn connects(self, at: Coordinate, other: Tile, other_at: Coordinate) -> bool {
        let (dx, dy) = (other_at.0 - at.0, other_at.1 - at.1);
        if (dx, dy) == (0, 0) || dx.abs() > 1 || dy.abs() > 1 {
            return false;
        }

        // endpoints on a lattice of half cells so shared edges and corners coincide
        fn endpoints(tile: Tile, (x, y): Coordinate) -> impl Iterator<Item = Coordinate> {
            tile.roads().map(move |direction| {
                let (offset_x, offset_y) = direction.offset();
                (2 * x + offset_x, 2 * y + offset_y)
            })
        }

        endpoints(self, at)
            .any(|endpoint| endpoints(other, other_at).any(|other| other == endpoint))
    }
}

/// Samples a bag candidate: uniform random bits for the eight roads and the two coins,
/// with no piece index and no figures.
impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile(rng.gen::<u32>() & (ROAD_MASK | COIN_MASK))
    }
}
