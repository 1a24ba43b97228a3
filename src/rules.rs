use crate::{
    DEFAULT_BAG_LEN, DEFAULT_GOLD_POINTS, DEFAULT_MAX_GOAL_BONUS, DEFAULT_ROTATION_PRICE,
    DEFAULT_SILVER_POINTS, MIN_PARTNER_DISTANCE,
};
use serde::{Deserialize, Serialize};

/// The tunable parameters of a game, fixed when the game is created.
///
/// Missing fields take their [default](Rules::default) when deserialized.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// The number of path [tiles](crate::Tile) in the bag.
    pub bag_len: usize,
    /// The coins spent to [rotate](crate::GameState::rotate_next_piece) the next tile.
    pub rotation_price: usize,
    /// The points for collecting a gold coin.
    pub gold_points: usize,
    /// The points for collecting a silver coin.
    pub silver_points: usize,
    /// The points for the first arrival of each [color](crate::Color) at its house.
    pub max_goal_bonus: usize,
    /// The smallest distance allowed between a person and the house of the same
    /// [color](crate::Color) when either is placed.
    pub min_partner_distance: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            bag_len: DEFAULT_BAG_LEN,
            rotation_price: DEFAULT_ROTATION_PRICE,
            gold_points: DEFAULT_GOLD_POINTS,
            silver_points: DEFAULT_SILVER_POINTS,
            max_goal_bonus: DEFAULT_MAX_GOAL_BONUS,
            min_partner_distance: MIN_PARTNER_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rules = Rules::default();

        assert_eq!(40, rules.bag_len);
        assert_eq!(0, rules.rotation_price);
        assert_eq!(2, rules.gold_points);
        assert_eq!(1, rules.silver_points);
        assert_eq!(5, rules.max_goal_bonus);
        assert_eq!(5, rules.min_partner_distance);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let rules: Rules = serde_json::from_str(r#"{ "rotation_price": 3 }"#).unwrap();

        assert_eq!(
            Rules {
                rotation_price: 3,
                ..Rules::default()
            },
            rules
        );
    }
}
