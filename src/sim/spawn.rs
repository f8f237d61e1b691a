//! Entity factories

use super::direction::Direction;
use super::motion::step;
use super::state::{Bullet, Hero, Unit};
use crate::consts::HERO_SIZE;

/// Make a bullet leaving the hero toward `dir`
///
/// The bullet starts two hero sizes away so it never spawns on its shooter.
/// Next to a border that offset can put it outside the field; it stays there
/// until the next bullet advance clamps it back in.
pub fn fire(hero: &Hero, dir: Direction, id: u32) -> Bullet {
    Bullet {
        id,
        unit: Unit {
            pos: step(dir, hero.unit.pos, HERO_SIZE * 2),
            dir,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Point;

    fn hero_at(x: i32, y: i32) -> Hero {
        Hero {
            id: 0,
            unit: Unit::new(x, y, Direction::Up),
        }
    }

    #[test]
    fn test_fire_up() {
        let bullet = fire(&hero_at(100, 100), Direction::Up, 9);
        assert_eq!(bullet.id, 9);
        assert_eq!(bullet.unit.pos, Point::new(100, 100 - 2 * HERO_SIZE));
        assert_eq!(bullet.unit.dir, Direction::Up);
    }

    #[test]
    fn test_fire_offsets_every_direction() {
        let hero = hero_at(100, 100);
        assert_eq!(fire(&hero, Direction::Right, 1).unit.pos, Point::new(120, 100));
        assert_eq!(fire(&hero, Direction::Down, 1).unit.pos, Point::new(100, 120));
        assert_eq!(fire(&hero, Direction::Left, 1).unit.pos, Point::new(80, 100));
    }

    #[test]
    fn test_fire_at_border_starts_off_field() {
        let bullet = fire(&hero_at(1, 400), Direction::Left, 1);
        assert_eq!(bullet.unit.pos, Point::new(-19, 400));
        assert_eq!(bullet.unit.dir, Direction::Left);
    }
}
