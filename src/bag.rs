use crate::{Bag, Tile, DEFAULT_BAG_LEN, MAX_BAG_LEN};
use itertools::{Itertools, MinMaxResult};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, instrument};

/// The chance that the coins on a freshly sampled [tile](Tile) are buried.
const BURY_COINS_PROBABILITY: f64 = 0.3;
/// The chance that a [tile](Tile) with more than two roads but a single orthogonal or a single
/// diagonal road survives each check.
const LONE_ROAD_PROBABILITY: f64 = 0.75;

/// Describes the reason why a [bag](Bag) could not be generated.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum BagError {
    /// Requesting more [tiles](Tile) than there are ordinary piece indexes.
    #[error("a bag holds at most 60 tiles, not {count}")]
    TooManyTiles {
        /// The number of [tiles](Tile) requested.
        count: usize,
    },
}

/// The road requirement for the [tile](Tile) at some position of the bag before shuffling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Bucket {
    Lake,
    Moves(usize),
}

impl Bucket {
    /// The first `3/40` of the bag are lakes, up to `20/40` have two roads, up to `30/40`
    /// have three roads, and the rest have four. Boundaries round down.
    fn of(index: usize, count: usize) -> Bucket {
        if index < 3 * count / DEFAULT_BAG_LEN {
            Bucket::Lake
        } else if index < 20 * count / DEFAULT_BAG_LEN {
            Bucket::Moves(2)
        } else if index < 30 * count / DEFAULT_BAG_LEN {
            Bucket::Moves(3)
        } else {
            Bucket::Moves(4)
        }
    }
}

/// Generates a shuffled [bag](Bag) of path [tiles](Tile).
///
/// The [tile](Tile) generated at position `i` carries piece index `i`. Every [tile](Tile) is
/// resampled until it has two to four roads, matches the road count of its position, and
/// does not bend back on itself too tightly. A few [tiles](Tile) are lakes, and some
/// coins are buried along the way. Finally the [bag](Bag) is shuffled.
///
/// # Arguments
///
/// * `rng`: The source of randomness for sampling and shuffling.
/// * `count`: The number of [tiles](Tile), usually [DEFAULT_BAG_LEN].
///
/// # Errors
///
/// * [BagError::TooManyTiles] Requesting more than [MAX_BAG_LEN] [tiles](Tile).
///
/// # See Also
///
/// * [new_bag]
/// * [seeded_bag]
#[instrument(skip(rng))]
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Bag, BagError> {
    if count > MAX_BAG_LEN {
        return Err(BagError::TooManyTiles { count });
    }

    let mut bag: Bag = (0..count)
        .map(|index| generate_tile(rng, index, Bucket::of(index, count)))
        .collect();
    bag.shuffle(rng);

    debug!(
        lakes = bag.iter().filter(|tile| tile.is_lake()).count(),
        "generated bag"
    );
    Ok(bag)
}

/// Generates a [bag](Bag) with the thread local random number generator.
///
/// # Errors
///
/// * [BagError::TooManyTiles] Requesting more than [MAX_BAG_LEN] [tiles](Tile).
pub fn new_bag(count: usize) -> Result<Bag, BagError> {
    generate(&mut rand::thread_rng(), count)
}

/// Generates the same [bag](Bag) for the same `seed` and `count`.
///
/// # Errors
///
/// * [BagError::TooManyTiles] Requesting more than [MAX_BAG_LEN] [tiles](Tile).
pub fn seeded_bag(seed: u64, count: usize) -> Result<Bag, BagError> {
    generate(&mut ChaCha8Rng::seed_from_u64(seed), count)
}

fn generate_tile<R: Rng + ?Sized>(rng: &mut R, index: usize, bucket: Bucket) -> Tile {
    loop {
        let sample: Tile = rng.gen();
        let moves = sample.moves();
        if !(2..=4).contains(&moves) {
            continue;
        }

        let tile = match bucket {
            Bucket::Lake => sample.into_lake(),
            Bucket::Moves(required) if required == moves => sample,
            Bucket::Moves(_) => continue,
        };
        let tile = if rng.gen_bool(BURY_COINS_PROBABILITY) {
            tile.without_coins()
        } else {
            tile
        };

        if is_lopsided(tile, tile.orthogonal_moves(), || rng.gen()) {
            continue;
        }
        if is_lopsided(tile, tile.diagonal_moves(), || rng.gen()) {
            continue;
        }
        // judged by the sampled road count, so lakes sampled with two roads never survive
        if is_scrunched(tile, moves) {
            continue;
        }

        return tile.with_piece_index(index as u32);
    }
}

/// Whether a [tile](Tile) with more than two roads, only one of them among `roads`, is
/// rejected. `draw` is only called for such [tiles](Tile).
fn is_lopsided(tile: Tile, roads: usize, draw: impl FnOnce() -> f64) -> bool {
    roads == 1 && tile.moves() > 2 && draw() > LONE_ROAD_PROBABILITY
}

/// Whether the roads of the [tile](Tile) crowd into one side of it, judged by the spread of
/// their clockwise positions.
fn is_scrunched(tile: Tile, moves: usize) -> bool {
    let (min, max) = match tile.roads().map(|direction| direction.position()).minmax() {
        MinMaxResult::NoElements => return false,
        MinMaxResult::OneElement(position) => (position, position),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    match moves {
        2 => max - min < 2 || (min, max) == (0, 7),
        3 => max - min < 5,
        _ => false,
    }
}
