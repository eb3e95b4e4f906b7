//! Clock-face geometry.
//!
//! Pure functions of the face size and the decimal time; the widgets only
//! turn these numbers into draw commands.

use decimal_engine::coords::Vec2;
use decimal_time::{hand_angles, DecimalTime};

/// Smallest face the responsive sizing will produce.
pub const MIN_CLOCK_SIZE: f32 = 220.0;
/// Largest face the responsive sizing will produce.
pub const MAX_CLOCK_SIZE: f32 = 400.0;

/// Face size for a viewport: fits the width minus padding, at most 42% of
/// the height, never below [`MIN_CLOCK_SIZE`].
pub fn responsive_clock_size(viewport: Vec2) -> f32 {
    let max_width = (viewport.x - 48.0).min(MAX_CLOCK_SIZE);
    let max_height = viewport.y * 0.42;
    max_width.min(max_height).max(MIN_CLOCK_SIZE)
}

/// Radii and hand lengths for a face of a given size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceLayout {
    pub size: f32,
    /// Radius of the day-progress ring.
    pub outer_radius: f32,
    /// Radius at which tick marks end.
    pub dial_radius: f32,
    /// Radius of the hour numerals.
    pub number_radius: f32,
    pub hour_length: f32,
    pub minute_length: f32,
    pub second_length: f32,
    /// Counterweight behind the second hand.
    pub second_tail_length: f32,
}

impl FaceLayout {
    pub fn new(size: f32) -> Self {
        let outer_radius = size / 2.0 - 4.0;
        let dial_radius = outer_radius - 20.0;
        Self {
            size,
            outer_radius,
            dial_radius,
            number_radius: dial_radius - 28.0,
            hour_length: dial_radius * 0.48,
            minute_length: dial_radius * 0.70,
            second_length: dial_radius * 0.82,
            second_tail_length: 25.0,
        }
    }

    /// Where the progress dot sits on the ring.
    #[inline]
    pub fn progress_dot(&self, center: Vec2, percent_of_day: f64) -> Vec2 {
        center.on_dial(percent_of_day as f32 * 3.6, self.outer_radius)
    }

    /// Endpoints of the three hands plus the second-hand tail and tip dot.
    pub fn hands(&self, center: Vec2, time: &DecimalTime) -> HandPositions {
        let angles = hand_angles(time);
        let second = angles.second as f32;
        HandPositions {
            hour: center.on_dial(angles.hour as f32, self.hour_length),
            minute: center.on_dial(angles.minute as f32, self.minute_length),
            second: center.on_dial(second, self.second_length),
            // Opposite direction.
            second_tail: center.on_dial(second + 180.0, self.second_tail_length),
            second_tip: center.on_dial(second, self.second_length - 15.0),
        }
    }

    /// The 100 minute ticks, starting at the top and running clockwise.
    pub fn ticks(&self, center: Vec2) -> impl Iterator<Item = TickMark> + '_ {
        (0..100u32).map(move |i| {
            let kind = TickKind::of(i);
            let angle = i as f32 * 3.6;
            TickMark {
                index: i,
                kind,
                inner: center.on_dial(angle, self.dial_radius - kind.length()),
                outer: center.on_dial(angle, self.dial_radius),
            }
        })
    }

    /// Numeral positions for the ten decimal hours.
    pub fn numerals(&self, center: Vec2) -> impl Iterator<Item = (u32, Vec2)> + '_ {
        (0..10u32).map(move |h| (h, center.on_dial(h as f32 * 36.0, self.number_radius)))
    }
}

/// Hand endpoints in face coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandPositions {
    pub hour: Vec2,
    pub minute: Vec2,
    pub second: Vec2,
    pub second_tail: Vec2,
    pub second_tip: Vec2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickKind {
    /// Every 10th tick: one decimal hour.
    Hour,
    /// Every 5th tick that is not an hour tick.
    FiveMinute,
    Minute,
}

impl TickKind {
    fn of(index: u32) -> Self {
        if index % 10 == 0 {
            TickKind::Hour
        } else if index % 5 == 0 {
            TickKind::FiveMinute
        } else {
            TickKind::Minute
        }
    }

    pub fn length(self) -> f32 {
        match self {
            TickKind::Hour => 16.0,
            TickKind::FiveMinute => 10.0,
            TickKind::Minute => 5.0,
        }
    }

    pub fn width(self) -> f32 {
        match self {
            TickKind::Hour => 2.5,
            TickKind::FiveMinute => 1.5,
            TickKind::Minute => 1.0,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            TickKind::Hour => 1.0,
            TickKind::FiveMinute => 0.5,
            TickKind::Minute => 0.25,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    pub index: u32,
    pub kind: TickKind,
    pub inner: Vec2,
    pub outer: Vec2,
}
