//! Contact classification and the shove resolver
//!
//! All comparisons happen on integer rows and columns; fractional positions
//! never reach this module. A platform occupies the half-open column span
//! `[position.x, position.x + width)` on a single row.

use glam::IVec2;

use super::state::{BoundingBox, Platform, Player};

/// Whether `position` falls inside the platform's footprint.
pub fn is_within_platform(position: IVec2, platform: &Platform) -> bool {
    position.y == platform.position.y
        && position.x >= platform.position.x
        && position.x < platform.right()
}

/// Whether `position` is exactly one row above the platform, inside its span.
pub fn is_over_platform(position: IVec2, platform: &Platform) -> bool {
    is_within_platform(position + IVec2::new(0, 1), platform)
}

/// Whether `position` is exactly one row below the platform, inside its span.
pub fn is_under_platform(position: IVec2, platform: &Platform) -> bool {
    is_within_platform(position - IVec2::new(0, 1), platform)
}

/// Whether the column of `position` falls within the platform's span,
/// regardless of row.
pub fn horizontally_aligned(position: IVec2, platform: &Platform) -> bool {
    position.x >= platform.position.x && position.x < platform.right()
}

/// Force a displacement onto the player.
///
/// A dormant player is immune: platform contact never moves them.
pub fn shove_player(player: &mut Player, displacement: IVec2) {
    if player.physics.is_active() {
        player.position += displacement;
    }
}

/// A lateral step is valid when the destination is not inside any platform.
/// The first overlapping platform rejects the move.
pub fn is_valid_move(destination: IVec2, platforms: &[Platform]) -> bool {
    platforms
        .iter()
        .all(|platform| !is_within_platform(destination, platform))
}

/// Whether gravity applies this tick: an active player with no platform
/// directly underneath falls one row.
pub fn is_falling(player: &Player, platforms: &[Platform]) -> bool {
    if !player.physics.is_active() {
        return false;
    }
    platforms
        .iter()
        .all(|platform| !is_over_platform(player.position, platform))
}

/// Whether the player has ended up outside the playfield on any axis.
pub fn is_touching_a_wall(player: &Player, bounds: &BoundingBox) -> bool {
    !bounds.contains(player.position)
}
