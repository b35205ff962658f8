//! Platform generation, sub-stepped kinematics, and repositioning
//!
//! Platform speed is distance per tick, applied one cell at a time. The shove
//! rules run before every unit step, so a fast platform sweeps through each
//! intermediate cell instead of leaping over the player.

use glam::IVec2;

use crate::consts::PLATFORM_HEIGHT;
use crate::settings::Settings;

use super::collision::{horizontally_aligned, is_over_platform, is_under_platform, shove_player};
use super::rng::GameRng;
use super::state::{BoundingBox, Platform, Player};

/// Placement constraints for the initial platform layout.
#[derive(Debug, Clone, Copy)]
pub struct PlatformRules {
    pub bounds: BoundingBox,
    /// Rows kept clear of platforms at generation time (the spawn area)
    pub avoidance: BoundingBox,
    pub count: usize,
}

impl PlatformRules {
    pub fn new(bounds: BoundingBox, avoidance: BoundingBox, count: usize) -> Self {
        debug_assert!(avoidance.min_y >= bounds.min_y && avoidance.max_y <= bounds.max_y);
        Self {
            bounds,
            avoidance,
            count,
        }
    }
}

/// Pick a row for a new platform, preferring the emptiest rows.
///
/// Only rows currently at the minimum occupancy are candidates, so crowded
/// rows (and the avoidance band, pre-seeded to 1) are used last.
fn select_random_line_awarely(rng: &mut GameRng, density: &[u8]) -> usize {
    let minimum = density.iter().copied().min().unwrap_or(0);
    let candidates: Vec<usize> = density
        .iter()
        .enumerate()
        .filter(|&(_, &occupancy)| occupancy == minimum)
        .map(|(line, _)| line)
        .collect();
    let pick = rng.random_integer(0, candidates.len() as i32 - 1);
    candidates[pick as usize]
}

/// Build the initial platform list for a session.
///
/// The RNG draw order per platform is fixed (width, column, row, speed,
/// direction, rarity) so layouts are reproducible from the seed.
pub fn generate_platforms(
    rules: &PlatformRules,
    settings: &Settings,
    rng: &mut GameRng,
) -> Vec<Platform> {
    let lines = rules.bounds.height() as usize;
    let mut density = vec![0u8; lines];
    for y in rules.avoidance.min_y..=rules.avoidance.max_y {
        density[(y - rules.bounds.min_y) as usize] = 1;
    }
    let mut platforms = Vec::with_capacity(rules.count);
    for _ in 0..rules.count {
        let width = rng.random_integer(settings.platform_min_width, settings.platform_max_width);
        let x = rng.random_integer(rules.bounds.min_x, rules.bounds.max_x);
        let line = select_random_line_awarely(rng, &density);
        density[line] = density[line].saturating_add(1);
        let y = rules.bounds.min_y + line as i32;
        let speed = rng.random_integer(settings.platform_min_speed, settings.platform_max_speed);
        // About half the platforms go left and about half go right.
        let speed = if rng.coin_flip() { speed } else { -speed };
        let rarity = rng.random_integer(0, 4) as f32 / 4.0;
        platforms.push(Platform {
            position: IVec2::new(x, y),
            width,
            height: PLATFORM_HEIGHT,
            velocity: IVec2::new(speed, 0),
            rarity,
        });
    }
    platforms
}

/// Advance one platform by one tick: sub-stepped horizontal motion, then
/// sub-stepped vertical motion, then repositioning if the platform has left
/// the playfield entirely.
pub fn update_platform(
    player: &mut Player,
    platform: &mut Platform,
    bounds: &BoundingBox,
    rng: &mut GameRng,
) {
    move_platform_horizontally(player, platform);
    move_platform_vertically(player, platform);
    if is_out_of_bounds(platform, bounds) {
        reposition(player, platform, bounds, rng);
    }
}

/// One unit of horizontal motion, shoving the player first.
///
/// A player on the moving row anywhere past the trailing edge, up to one
/// cell beyond the leading edge, is pushed along; a player standing on top
/// rides along.
fn horizontal_substep(player: &mut Player, platform: &mut Platform, step: i32) {
    if player.position.y == platform.position.y {
        let pushed = if step > 0 {
            player.position.x > platform.position.x && player.position.x <= platform.right()
        } else {
            player.position.x >= platform.position.x - 1 && player.position.x < platform.right() - 1
        };
        if pushed {
            shove_player(player, IVec2::new(step, 0));
        }
    } else if is_over_platform(player.position, platform) {
        shove_player(player, IVec2::new(step, 0));
    }
    platform.position.x += step;
}

/// One unit of vertical motion, shoving the player first.
///
/// An ascending platform carries a player riding on top; a descending one
/// both carries its rider and pushes down a player in the row it is about
/// to occupy.
fn vertical_substep(player: &mut Player, platform: &mut Platform, step: i32) {
    if horizontally_aligned(player.position, platform) {
        let carried = if step < 0 {
            is_over_platform(player.position, platform)
        } else {
            is_over_platform(player.position, platform)
                || is_under_platform(player.position, platform)
        };
        if carried {
            shove_player(player, IVec2::new(0, step));
        }
    }
    platform.position.y += step;
}

fn move_platform_horizontally(player: &mut Player, platform: &mut Platform) {
    let step = platform.velocity.x.signum();
    for _ in 0..platform.velocity.x.abs() {
        horizontal_substep(player, platform, step);
    }
}

fn move_platform_vertically(player: &mut Player, platform: &mut Platform) {
    let step = platform.velocity.y.signum();
    for _ in 0..platform.velocity.y.abs() {
        vertical_substep(player, platform, step);
    }
}

/// Whether the platform's footprint no longer intersects the playfield.
pub(crate) fn is_out_of_bounds(platform: &Platform, bounds: &BoundingBox) -> bool {
    platform.right() < bounds.min_x
        || platform.position.x > bounds.max_x
        || platform.position.y < bounds.min_y
        || platform.position.y > bounds.max_y
}

/// Re-enter a platform that left the playfield.
///
/// Exits below the box are deliberately not handled; platforms never move
/// down out of the field.
fn reposition(
    player: &mut Player,
    platform: &mut Platform,
    bounds: &BoundingBox,
    rng: &mut GameRng,
) {
    if platform.position.x > bounds.max_x {
        // Exited right: come back in from the left edge.
        platform.position.x = 1 - platform.width;
        platform.position.y = rng.random_integer(bounds.min_y, bounds.max_y);
    } else if platform.right() < bounds.min_x {
        // Exited left: come back in from the right edge.
        platform.position.x = bounds.max_x;
        platform.position.y = rng.random_integer(bounds.min_y, bounds.max_y);
    } else if platform.position.y < bounds.min_y {
        // Exited above: drop in under the bottom edge and take one sub-step
        // so the platform is back inside the field this same tick.
        platform.position.x = rng.random_integer(bounds.min_x, bounds.max_x);
        platform.position.y = bounds.max_y + 1;
        vertical_substep(player, platform, platform.velocity.y.signum());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PhysicsState;

    fn bounds() -> BoundingBox {
        BoundingBox::new(0, 0, 20, 10)
    }

    fn platform(x: i32, y: i32, width: i32, vx: i32, vy: i32) -> Platform {
        Platform {
            position: IVec2::new(x, y),
            width,
            height: 1,
            velocity: IVec2::new(vx, vy),
            rarity: 0.0,
        }
    }

    fn player(x: i32, y: i32, physics: PhysicsState) -> Player {
        Player {
            position: IVec2::new(x, y),
            physics,
            lives: 3,
            score: 0,
        }
    }

    #[test]
    fn test_dormant_player_is_immune_to_sweep() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, 1, 0);
        let mut player = player(6, 5, PhysicsState::Dormant);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(player.position, IVec2::new(6, 5));
        assert_eq!(platform.position.x, 6);
    }

    #[test]
    fn test_active_player_is_swept_along() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, 1, 0);
        let mut player = player(6, 5, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(player.position, IVec2::new(7, 5));
        assert_eq!(platform.position.x, 6);
    }

    #[test]
    fn test_adjacent_player_is_pushed_by_leading_edge() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, 1, 0);
        // Just past the leading edge at x = 8.
        let mut player = player(8, 5, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(player.position, IVec2::new(9, 5));
    }

    #[test]
    fn test_fast_platform_does_not_tunnel() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        // Speed 3: without sub-stepping the leading edge would jump from 8
        // to 11, skipping the player at 9 entirely.
        let mut platform = platform(5, 5, 3, 3, 0);
        let mut player = player(9, 5, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(platform.position.x, 8);
        assert_eq!(player.position, IVec2::new(11, 5));
    }

    #[test]
    fn test_leftward_platform_pushes_left() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, -1, 0);
        let mut player = player(4, 5, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(player.position, IVec2::new(3, 5));
        assert_eq!(platform.position.x, 4);
    }

    #[test]
    fn test_rider_is_carried_horizontally() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, 2, 0);
        // Standing on top, one row above.
        let mut player = player(6, 4, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(player.position, IVec2::new(8, 4));
    }

    #[test]
    fn test_ascending_platform_carries_rider_up() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 8, 3, 0, -1);
        let mut player = player(6, 7, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(platform.position.y, 7);
        assert_eq!(player.position, IVec2::new(6, 6));
    }

    #[test]
    fn test_descending_platform_pushes_player_below_down() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, 0, 1);
        let mut player = player(6, 6, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(platform.position.y, 6);
        assert_eq!(player.position, IVec2::new(6, 7));
    }

    #[test]
    fn test_descending_platform_carries_rider_down() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 5, 3, 0, 2);
        let mut player = player(6, 4, PhysicsState::Active);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(platform.position.y, 7);
        assert_eq!(player.position, IVec2::new(6, 6));
    }

    #[test]
    fn test_reposition_after_exiting_right() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(20, 5, 3, 1, 0);
        let mut player = player(0, 0, PhysicsState::Dormant);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(platform.position.x, 1 - platform.width);
        assert!((bounds.min_y..=bounds.max_y).contains(&platform.position.y));
        assert!(!is_out_of_bounds(&platform, &bounds));
    }

    #[test]
    fn test_reposition_after_exiting_left() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(-3, 5, 2, -1, 0);
        let mut player = player(0, 0, PhysicsState::Dormant);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        assert_eq!(platform.position.x, bounds.max_x);
        assert!((bounds.min_y..=bounds.max_y).contains(&platform.position.y));
    }

    #[test]
    fn test_reposition_after_exiting_above_reenters_same_tick() {
        let bounds = bounds();
        let mut rng = GameRng::new(0);
        let mut platform = platform(5, 0, 3, 0, -1);
        let mut player = player(0, 0, PhysicsState::Dormant);
        update_platform(&mut player, &mut platform, &bounds, &mut rng);
        // Placed one row under the box, then moved one sub-step back in.
        assert_eq!(platform.position.y, bounds.max_y);
        assert!((bounds.min_x..=bounds.max_x).contains(&platform.position.x));
    }

    #[test]
    fn test_row_selection_prefers_minimum_occupancy() {
        let mut rng = GameRng::new(3);
        let density = [2u8, 0, 1, 0, 2];
        for _ in 0..50 {
            let line = select_random_line_awarely(&mut rng, &density);
            assert!(line == 1 || line == 3);
        }
    }

    #[test]
    fn test_generated_platforms_respect_settings() {
        let settings = Settings::default();
        let bounds = BoundingBox::new(0, 0, settings.columns - 1, settings.lines - 1);
        let avoidance = BoundingBox::new(0, 10, settings.columns - 1, 14);
        let rules = PlatformRules::new(bounds, avoidance, settings.platform_count);
        let mut rng = GameRng::new(99);
        let platforms = generate_platforms(&rules, &settings, &mut rng);
        assert_eq!(platforms.len(), settings.platform_count);
        for platform in &platforms {
            assert!(platform.width >= settings.platform_min_width);
            assert!(platform.width <= settings.platform_max_width);
            assert!(platform.velocity.x.abs() >= settings.platform_min_speed);
            assert!(platform.velocity.x.abs() <= settings.platform_max_speed);
            assert_eq!(platform.velocity.y, 0);
            assert!((0.0..=1.0).contains(&platform.rarity));
            assert!(bounds.contains(platform.position));
        }
    }

    #[test]
    fn test_generation_avoids_spawn_rows_while_empty_rows_remain() {
        let settings = Settings::default();
        let bounds = BoundingBox::new(0, 0, 79, 23);
        let avoidance = BoundingBox::new(0, 10, 79, 14);
        // Fewer platforms than free rows, so the spawn band stays clear.
        let rules = PlatformRules::new(bounds, avoidance, 10);
        let mut rng = GameRng::new(7);
        let platforms = generate_platforms(&rules, &settings, &mut rng);
        for platform in &platforms {
            assert!(
                platform.position.y < avoidance.min_y || platform.position.y > avoidance.max_y
            );
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let settings = Settings::default();
        let bounds = BoundingBox::new(0, 0, 79, 23);
        let avoidance = BoundingBox::new(0, 10, 79, 14);
        let rules = PlatformRules::new(bounds, avoidance, 16);
        let a = generate_platforms(&rules, &settings, &mut GameRng::new(5));
        let b = generate_platforms(&rules, &settings, &mut GameRng::new(5));
        assert_eq!(a, b);
    }
}
