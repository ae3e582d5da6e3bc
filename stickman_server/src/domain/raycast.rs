// One-axis nearest-obstacle scans used for movement clamping and ground checks.

use crate::domain::entity::{Body, Bounds, Obstacle};
use crate::domain::tuning::world::CONTACT_SKIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    pub fn reversed(self) -> Self {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Right => Horizontal::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
}

/// Distance from `body` to the nearest solid obstacle in `direction`, or to the
/// `boundary` x coordinate when nothing closer is in the way.
///
/// Only solids whose vertical extent overlaps the body by more than
/// [`CONTACT_SKIN`] and whose centre lies on the query side are considered.
/// The result is never negative: a body already touching or overlapping an
/// obstacle (or past the boundary) gets 0.
pub fn horizontal(body: &Body, direction: Horizontal, obstacles: &[Obstacle], boundary: f64) -> f64 {
    let me = &body.bounds;
    let boundary_gap = match direction {
        Horizontal::Left => me.left() - boundary,
        Horizontal::Right => boundary - me.right(),
    };

    candidates(body, obstacles, |other| shares_row(me, other))
        .filter_map(|other| match direction {
            Horizontal::Left if other.center_x() < me.center_x() => Some(me.left() - other.right()),
            Horizontal::Right if other.center_x() > me.center_x() => Some(other.left() - me.right()),
            _ => None,
        })
        .fold(boundary_gap, f64::min)
        .max(0.0)
}

/// Vertical counterpart of [`horizontal`]; `boundary` is a y coordinate (the
/// floor height when scanning down, the ceiling when scanning up).
pub fn vertical(body: &Body, direction: Vertical, obstacles: &[Obstacle], boundary: f64) -> f64 {
    let me = &body.bounds;
    let boundary_gap = match direction {
        Vertical::Up => me.top() - boundary,
        Vertical::Down => boundary - me.bottom(),
    };

    candidates(body, obstacles, |other| shares_column(me, other))
        .filter_map(|other| match direction {
            Vertical::Up if other.center_y() < me.center_y() => Some(me.top() - other.bottom()),
            Vertical::Down if other.center_y() > me.center_y() => Some(other.top() - me.bottom()),
            _ => None,
        })
        .fold(boundary_gap, f64::min)
        .max(0.0)
}

// Vertical extents overlap by more than the contact skin.
fn shares_row(a: &Bounds, b: &Bounds) -> bool {
    a.top() + CONTACT_SKIN < b.bottom() && b.top() + CONTACT_SKIN < a.bottom()
}

fn shares_column(a: &Bounds, b: &Bounds) -> bool {
    a.left() + CONTACT_SKIN < b.right() && b.left() + CONTACT_SKIN < a.right()
}

fn candidates<'a>(
    body: &'a Body,
    obstacles: &'a [Obstacle],
    in_lane: impl Fn(&Bounds) -> bool + 'a,
) -> impl Iterator<Item = &'a Bounds> + 'a {
    obstacles
        .iter()
        .filter(move |o| o.solid && o.id != body.id)
        .map(|o| &o.bounds)
        .filter(move |b| in_lane(b))
}
