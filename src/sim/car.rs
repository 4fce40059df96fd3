//! Player and enemy cars

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::cars_collide;
use super::speed::SpeedProvider;
use crate::consts::*;

/// Which way the car is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// Player car, driving up the screen
    Forward,
    /// Oncoming enemy car
    Reversed,
}

/// Steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

impl Steer {
    pub fn opposite(self) -> Self {
        match self {
            Steer::Left => Steer::Right,
            Steer::Right => Steer::Left,
        }
    }

    fn dx(self) -> i32 {
        match self {
            Steer::Left => -STEER_STEP,
            Steer::Right => STEER_STEP,
        }
    }
}

/// Body (primary) and roof (secondary) paint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarColours {
    pub primary: String,
    pub secondary: String,
}

impl CarColours {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn enemy() -> Self {
        Self::new(ENEMY_COLOUR_1, ENEMY_COLOUR_2)
    }
}

/// A car on the road
#[derive(Debug, Clone)]
pub struct Car {
    pub pos: IVec2,
    pub colours: CarColours,
    pub facing: Facing,
    /// Only the enemy scrolls with the road
    speed: Option<SpeedProvider>,
}

impl Car {
    pub fn player(pos: IVec2, colours: CarColours) -> Self {
        Self {
            pos,
            colours,
            facing: Facing::Forward,
            speed: None,
        }
    }

    pub fn enemy(pos: IVec2, speed: SpeedProvider) -> Self {
        Self {
            pos,
            colours: CarColours::enemy(),
            facing: Facing::Reversed,
            speed: Some(speed),
        }
    }

    /// Steer left. Returns false if the move was dropped at the road edge.
    pub fn move_left(&mut self, mirrored_controls: bool) -> bool {
        self.steer(Steer::Left, mirrored_controls, false)
    }

    /// Steer right. Returns false if the move was dropped at the road edge.
    pub fn move_right(&mut self, mirrored_controls: bool) -> bool {
        self.steer(Steer::Right, mirrored_controls, false)
    }

    fn steer(&mut self, dir: Steer, mirrored_controls: bool, redirected: bool) -> bool {
        if mirrored_controls && !redirected {
            return self.steer(dir.opposite(), mirrored_controls, true);
        }

        let x = self.pos.x + dir.dx();
        if !(PLAYER_MIN_X..=PLAYER_MAX_X).contains(&x) {
            return false;
        }
        self.pos.x = x;
        true
    }

    /// Scroll down with the road. Once past the bottom the car re-enters
    /// above the screen in a random lane. No-op for the player car.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let Some(speed) = &self.speed else {
            return;
        };

        self.pos.y += speed.get() as i32;
        if self.pos.y >= ENEMY_WRAP_Y {
            self.pos.y -= ENEMY_WRAP_SPAN;
            self.pos.x = rng.random_range(ENEMY_MIN_X..=ENEMY_MAX_X);
        }
    }

    pub fn overlaps(&self, other: &Car) -> bool {
        cars_collide(self.pos, other.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn player_at(x: i32) -> Car {
        Car::player(IVec2::new(x, 600), CarColours::new("Red", "Cyan"))
    }

    #[test]
    fn test_steering() {
        let mut car = player_at(350);
        assert!(car.move_left(false));
        assert_eq!(car.pos.x, 330);
        assert!(car.move_right(false));
        assert!(car.move_right(false));
        assert_eq!(car.pos.x, 370);
    }

    #[test]
    fn test_move_dropped_at_edges() {
        let mut car = player_at(80);
        // 60 would leave the road
        assert!(!car.move_left(false));
        assert_eq!(car.pos.x, 80);

        let mut car = player_at(90);
        assert!(car.move_left(false));
        assert_eq!(car.pos.x, PLAYER_MIN_X);
        assert!(!car.move_left(false));

        let mut car = player_at(920);
        assert!(!car.move_right(false));
        assert_eq!(car.pos.x, 920);
    }

    #[test]
    fn test_mirrored_controls_swap_direction() {
        let mut car = player_at(350);
        assert!(car.move_left(true));
        assert_eq!(car.pos.x, 370);
        assert!(car.move_right(true));
        assert_eq!(car.pos.x, 350);
    }

    #[test]
    fn test_enemy_scrolls_and_respawns() {
        let speed = SpeedProvider::new(30);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut enemy = Car::enemy(IVec2::new(650, 100), speed.clone());
        enemy.advance(&mut rng);
        assert_eq!(enemy.pos, IVec2::new(650, 130));

        enemy.pos.y = 790;
        enemy.advance(&mut rng);
        assert_eq!(enemy.pos.y, 820 - ENEMY_WRAP_SPAN);
        assert!((ENEMY_MIN_X..=ENEMY_MAX_X).contains(&enemy.pos.x));
    }

    #[test]
    fn test_player_does_not_scroll() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut car = player_at(350);
        car.advance(&mut rng);
        assert_eq!(car.pos, IVec2::new(350, 600));
    }

    #[test]
    fn test_enemy_respawn_is_seeded() {
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut enemy = Car::enemy(IVec2::new(650, 100), SpeedProvider::new(50));
            (0..100)
                .map(|_| {
                    enemy.advance(&mut rng);
                    enemy.pos
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_road(
            start in (PLAYER_MIN_X / 10)..=(PLAYER_MAX_X / 10),
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..300),
        ) {
            let mut car = player_at(start * 10);
            for (left, mirrored) in moves {
                let before = car.pos.x;
                let moved = if left { car.move_left(mirrored) } else { car.move_right(mirrored) };
                prop_assert!((PLAYER_MIN_X..=PLAYER_MAX_X).contains(&car.pos.x));
                if !moved {
                    prop_assert_eq!(car.pos.x, before);
                }
            }
        }

        #[test]
        fn prop_mirrored_left_equals_plain_right(start in PLAYER_MIN_X..=PLAYER_MAX_X) {
            let mut a = player_at(start);
            let mut b = player_at(start);
            a.move_left(true);
            b.move_right(false);
            prop_assert_eq!(a.pos, b.pos);

            let mut a = player_at(start);
            let mut b = player_at(start);
            a.move_right(true);
            b.move_left(false);
            prop_assert_eq!(a.pos, b.pos);
        }
    }
}
