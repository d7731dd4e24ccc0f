use crate::model::throws::{INNER_BULL, Multiplier, OUTER_BULL, ThrowCode};

/// Sector numbers in clockwise board order, starting from the wedge at the
/// top of the board.
pub const SECTOR_ORDER: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

pub const BOARD_SIZE: f64 = 600.0;
pub const CENTER: f64 = 300.0;

pub const BULL_INNER_RADIUS: f64 = 15.0;
pub const BULL_OUTER_RADIUS: f64 = 30.0;
pub const TRIPLE_INNER_RADIUS: f64 = 160.0;
pub const TRIPLE_OUTER_RADIUS: f64 = 175.0;
pub const DOUBLE_INNER_RADIUS: f64 = 255.0;
pub const DOUBLE_OUTER_RADIUS: f64 = 270.0;
pub const RIM_NUMBER_RADIUS: f64 = 290.0;

/// Leading edge of the first wedge (sector 20), in degrees clockwise from
/// the positive x axis, as in screen coordinates.
pub const START_ANGLE_DEG: f64 = -100.0;
pub const SECTOR_ANGLE_DEG: f64 = 18.0;

/// Concentric scoring rings of a wedge, innermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    InnerSingle,
    Triple,
    OuterSingle,
    Double,
}

impl Band {
    pub const ALL: [Band; 4] = [
        Band::InnerSingle,
        Band::Triple,
        Band::OuterSingle,
        Band::Double,
    ];

    #[must_use]
    pub fn multiplier(self) -> Multiplier {
        match self {
            Band::InnerSingle | Band::OuterSingle => Multiplier::Single,
            Band::Triple => Multiplier::Triple,
            Band::Double => Multiplier::Double,
        }
    }

    /// Inner and outer radius of the ring.
    #[must_use]
    pub fn radii(self) -> (f64, f64) {
        match self {
            Band::InnerSingle => (BULL_OUTER_RADIUS, TRIPLE_INNER_RADIUS),
            Band::Triple => (TRIPLE_INNER_RADIUS, TRIPLE_OUTER_RADIUS),
            Band::OuterSingle => (TRIPLE_OUTER_RADIUS, DOUBLE_INNER_RADIUS),
            Band::Double => (DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS),
        }
    }
}

#[must_use]
pub fn wedge_start_angle(index: usize) -> f64 {
    START_ANGLE_DEG + index as f64 * SECTOR_ANGLE_DEG
}

/// Index into [`SECTOR_ORDER`] for an angle in degrees.
#[must_use]
pub fn wedge_at(angle_deg: f64) -> usize {
    let offset = (angle_deg - START_ANGLE_DEG).rem_euclid(360.0);
    (offset / SECTOR_ANGLE_DEG) as usize % SECTOR_ORDER.len()
}

/// Point on the board at `radius` from the center, `angle_deg` clockwise
/// from the positive x axis.
#[must_use]
pub fn point_at(radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (CENTER + radius * rad.cos(), CENTER + radius * rad.sin())
}

/// Ring at distance `radius` from the center. Bull radii resolve to
/// [`Band::InnerSingle`] here; callers check the bulls first.
#[must_use]
pub fn band_at(radius: f64) -> Option<Band> {
    if radius <= TRIPLE_INNER_RADIUS {
        Some(Band::InnerSingle)
    } else if radius <= TRIPLE_OUTER_RADIUS {
        Some(Band::Triple)
    } else if radius <= DOUBLE_INNER_RADIUS {
        Some(Band::OuterSingle)
    } else if radius <= DOUBLE_OUTER_RADIUS {
        Some(Band::Double)
    } else {
        None
    }
}

/// Maps a point in board coordinates to the throw it scores. The bulls win
/// over the wedge rings, and anything outside the double ring misses.
#[must_use]
pub fn resolve(x: f64, y: f64) -> Option<ThrowCode> {
    let dx = x - CENTER;
    let dy = y - CENTER;
    let radius = (dx * dx + dy * dy).sqrt();
    if radius <= BULL_INNER_RADIUS {
        return Some(INNER_BULL);
    }
    if radius <= BULL_OUTER_RADIUS {
        return Some(OUTER_BULL);
    }
    let band = band_at(radius)?;
    let angle = dy.atan2(dx).to_degrees();
    let sector = SECTOR_ORDER[wedge_at(angle)];
    ThrowCode::from_target(band.multiplier(), sector).ok()
}
