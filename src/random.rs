use crate::{Coordinate, ParticipantId, Tile, BOARD_LEN, MAX_PARTICIPANTS};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A random, small number of distinct participant ids, at least `2` and at most
/// [MAX_PARTICIPANTS].
pub fn random_participant_ids<R: Rng + ?Sized>(rng: &mut R) -> Vec<ParticipantId> {
    let participants = rng.gen_range(2..=MAX_PARTICIPANTS);
    (0..participants)
        .map(|participant| ParticipantId::from(format!("participant {participant}")))
        .collect::<Vec<_>>()
        .tap_mut(|ids| ids.shuffle(rng))
}

/// A random [coordinate](Coordinate) on the edge of the board that is not a corner.
pub fn random_edge_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let last = BOARD_LEN as isize - 1;
    let along = rng.gen_range(1..last);
    *[(along, 0), (along, last), (0, along), (last, along)]
        .choose(rng)
        .unwrap_or(&(along, 0))
}

/// A random [coordinate](Coordinate) off the edge of the board.
pub fn random_interior_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let possible_components = Uniform::from(1..BOARD_LEN as isize - 1);
    (
        possible_components.sample(rng),
        possible_components.sample(rng),
    )
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where some component lies off the
/// board.
pub fn random_invalid_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
) -> impl Iterator<Item = Coordinate> {
    let len = BOARD_LEN as isize;
    let possible_coordinates = Uniform::from(0..len);
    let possible_invalid_coordinates = Uniform::from(len..isize::MAX);
    [
        (
            possible_coordinates.sample(rng),
            -possible_invalid_coordinates.sample(rng),
        ),
        (
            -possible_invalid_coordinates.sample(rng),
            possible_coordinates.sample(rng),
        ),
        (
            possible_invalid_coordinates.sample(rng),
            possible_coordinates.sample(rng),
        ),
        (
            possible_coordinates.sample(rng),
            possible_invalid_coordinates.sample(rng),
        ),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

/// A random path [tile](Tile) with at least one road and the given piece index.
pub fn random_path_tile<R: Rng + ?Sized>(rng: &mut R, piece_index: u32) -> Tile {
    loop {
        let tile: Tile = rng.gen();
        if tile.moves() > 0 {
            return tile.with_piece_index(piece_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_on_corner, is_on_edge, is_valid};
    use itertools::Itertools;

    #[test]
    fn random_participant_ids_distinct() {
        let ids = random_participant_ids(&mut rand::thread_rng());

        assert!((2..=MAX_PARTICIPANTS).contains(&ids.len()));
        assert_eq!(ids.len(), ids.iter().unique().count());
    }

    #[test]
    fn random_edge_coordinate_not_corner() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let coordinate = random_edge_coordinate(&mut rng);

            assert!(is_on_edge(coordinate));
            assert!(!is_on_corner(coordinate));
        }
    }

    #[test]
    fn random_interior_coordinate_not_edge() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let coordinate = random_interior_coordinate(&mut rng);

            assert!(is_valid(coordinate));
            assert!(!is_on_edge(coordinate));
        }
    }

    #[test]
    fn random_invalid_coordinates_all_invalid() {
        for coordinate in random_invalid_coordinates(&mut rand::thread_rng()) {
            assert!(!is_valid(coordinate));
        }
    }

    #[test]
    fn random_path_tile_has_roads() {
        let tile = random_path_tile(&mut rand::thread_rng(), 12);

        assert!(tile.moves() > 0);
        assert_eq!(12, tile.piece_index());
        assert!(!tile.is_figure());
    }
}
