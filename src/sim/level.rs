//! Platform and level geometry
//!
//! Levels are immutable once loaded; the sim only ever swaps which level is
//! active, never edits one.

use super::rect::Rect;

/// Behavior of a platform on collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Solid platform the player can stand on and be walled by.
    /// With `allow_bottom_hit`, a player rising into it from below is pushed
    /// back out under its underside; without it, the underside is permeable.
    Normal { allow_bottom_hit: bool },
    /// Touching it reverses the player's run direction
    Bounce,
}

impl PlatformKind {
    /// Map a wire-format type code to a kind. Codes outside the catalog
    /// format are rejected at load time.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PlatformKind::Normal {
                allow_bottom_hit: true,
            }),
            1 => Some(PlatformKind::Normal {
                allow_bottom_hit: false,
            }),
            2 => Some(PlatformKind::Bounce),
            _ => None,
        }
    }
}

/// A single immutable platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }
}

/// An ordered sequence of platforms. Collision resolution walks them in
/// catalog order; a later platform's resolution wins over an earlier one's.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Level {
    pub platforms: Vec<Platform>,
}

impl Level {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(
            PlatformKind::from_code(0),
            Some(PlatformKind::Normal {
                allow_bottom_hit: true
            })
        );
        assert_eq!(
            PlatformKind::from_code(1),
            Some(PlatformKind::Normal {
                allow_bottom_hit: false
            })
        );
        assert_eq!(PlatformKind::from_code(2), Some(PlatformKind::Bounce));
        assert_eq!(PlatformKind::from_code(3), None);
        assert_eq!(PlatformKind::from_code(-1), None);
    }
}
