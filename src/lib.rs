//! Concrete structs to represent and protect the state of a tile laying game where persons
//! walk along roads to reach their houses, with methods to progress through each turn.
//!
//! ## Summary
//!
//! Every participant owns an 8 by 8 [board](Board) whose outer ring is grass and whose
//! interior starts blank. Persons and houses of [every color](Color::colors) are placed on
//! the grass and shared by all boards. Path [tiles](Tile) are drawn from a
//! [bag](generate) that every participant draws in the same order, and are laid on each
//! participant's own interior. Playing a path [tile](Tile) onto a person lets that person
//! walk along the roads, collecting coins and earning a bonus upon reaching the house of
//! the same [color](Color). The game ends when every person is home or every draw queue is
//! empty. The participants with the most points win.
//!
//! ## How is a tile represented?
//!
//! A [tile](Tile) packs its roads, coins, figures, and piece index into the bits of a
//! [u32]. Reserved piece indexes mark [grass](Tile::grass) and the
//! [failure](Tile::failure), [success](Tile::success), and [end of turn](Tile::end_of_turn)
//! sentinels. [Tile::kind] classifies every [tile](Tile) into exactly one [TileKind].
//!
//! ## How is the game created?
//!
//! [GameState::new], [GameState::seeded], and [GameState::with_rng] seat the participants
//! and [generate] the bag according to the [rules](Rules). Participants may also join
//! later with [GameState::add_participant] or by [beginning a turn](GameState::begin_turn).
//!
//! ## How is the game advanced?
//!
//! Each turn follows the same steps:
//!
//! 1. [Begin](GameState::begin_turn) the turn of some participant. The working board
//! becomes a copy of the participant's board and the [tiles](Tile) of the turn are dealt.
//! 2. [Play](GameState::play_piece_at), [discard](GameState::play_piece_discard), or
//! [rotate](GameState::rotate_next_piece) the [next piece](GameState::next_piece) until
//! nothing is left. A path [tile](Tile) played onto a person is spent on walking instead.
//! 3. [End](GameState::end_turn) the turn to commit the working board, or
//! [rewind](GameState::rewind_turn) it to start over.
//!
//! ## How are points earned?
//!
//! A person stepping onto a gold or silver coin collects it for
//! [gold_points](Rules::gold_points) or [silver_points](Rules::silver_points). The first
//! arrival of a person at the house of the same [color](Color) earns
//! [max_goal_bonus](Rules::max_goal_bonus), and every later arrival of that
//! [color](Color) earns one point less, but never less than `0`.
//!
//! ## How is the game viewed?
//!
//! [GameState::game_view] borrows everything a client draws for the current participant.
//! The queries on [GameState] answer the same questions one at a time.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to the private
//! properties of [GameState] and helper functions to generate random participants,
//! [coordinates](Coordinate), and [tiles](Tile).

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game_state::*;
pub use persistence::*;
#[cfg(test)]
pub use random::*;
pub use rules::*;
pub use tile::*;
pub use types::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod game_state;
mod persistence;
#[cfg(test)]
mod random;
mod rules;
mod tile;
mod types;
