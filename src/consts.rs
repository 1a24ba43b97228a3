use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on every [board](crate::Board). `8` cells
/// on each side, where the outer ring of cells is the grass edge.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [MIN_PARTNER_DISTANCE]
pub const BOARD_LEN: usize = 8;
/// The maximum number of participants in a game. `4` participants.
///
/// # See Also
///
/// * [GameState::new](crate::GameState::new)
/// * [GameState::add_participant](crate::GameState::add_participant)
pub const MAX_PARTICIPANTS: usize = 4;
/// All small, dynamically allocated structs which store participant data will be stored on
/// the stack until the number of participants becomes greater than `PLAYER_CAPACITY`. If the
/// environment variable named `PLAYER_CAPACITY` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to [MAX_PARTICIPANTS].
///
/// # See Also
///
/// * [Participants](crate::Participants)
/// * [Winners](crate::Winners)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAX_PARTICIPANTS
);
/// The most [tiles](crate::Tile) a single turn can require: two person and house pairs
/// in a game of exactly two participants.
///
/// # See Also
///
/// * [TurnTiles](crate::TurnTiles)
/// * [GameState::begin_turn](crate::GameState::begin_turn)
pub const TURN_CAPACITY: usize = 2 * 2;
/// The default number of path [tiles](crate::Tile) in the bag. `40` tiles.
///
/// The proportions of lakes and of two, three, and four road tiles are tuned for this count.
///
/// # See Also
///
/// * [generate](crate::generate)
/// * [Rules::bag_len](crate::Rules::bag_len)
pub const DEFAULT_BAG_LEN: usize = 40;
/// The maximum number of path [tiles](crate::Tile) in the bag. `60` tiles, since piece
/// indexes `60..=63` are reserved for [grass](crate::Tile::grass) and the result markers.
///
/// # See Also
///
/// * [BagError::TooManyTiles](crate::BagError::TooManyTiles)
/// * [GRASS_INDEX]
pub const MAX_BAG_LEN: usize = GRASS_INDEX as usize;
/// The piece index of a [grass](crate::Tile::grass) tile.
pub const GRASS_INDEX: u32 = 60;
/// The piece index of the [failure](crate::Tile::failure) marker.
pub const FAILURE_INDEX: u32 = 61;
/// The piece index of the [success](crate::Tile::success) marker.
pub const SUCCESS_INDEX: u32 = 62;
/// The piece index of the [end of turn](crate::Tile::end_of_turn) marker.
pub const END_OF_TURN_INDEX: u32 = 63;
/// The default number of points for collecting a gold coin. `2` points.
pub const DEFAULT_GOLD_POINTS: usize = 2;
/// The default number of points for collecting a silver coin. `1` point.
pub const DEFAULT_SILVER_POINTS: usize = 1;
/// The default bonus for the first person of each [color](crate::Color) who reaches their house.
/// `5` points, decreasing by one for every later arrival of the same color.
pub const DEFAULT_MAX_GOAL_BONUS: usize = 5;
/// The default minimum distance between a person and the house of the same [color](crate::Color).
/// `5` cells.
pub const MIN_PARTNER_DISTANCE: usize = 5;
/// The default cost in coins of rotating the next [tile](crate::Tile). `0` coins.
pub const DEFAULT_ROTATION_PRICE: usize = 0;

const _: () = assert!(PLAYER_CAPACITY > 0);
// partners on opposite edges must be able to satisfy the distance rule
const _: () = assert!(MIN_PARTNER_DISTANCE < BOARD_LEN);
