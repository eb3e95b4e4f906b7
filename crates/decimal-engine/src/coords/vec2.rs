use core::ops::{Add, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point `length` away from `self` along a dial angle.
    ///
    /// 0° points up, 90° right, 180° down, 270° left.
    #[inline]
    pub fn on_dial(self, angle_deg: f32, length: f32) -> Vec2 {
        let rad = (angle_deg - 90.0).to_radians();
        Vec2::new(self.x + length * rad.cos(), self.y + length * rad.sin())
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn dial_angles_follow_a_clock_face() {
        let c = Vec2::new(100.0, 100.0);
        assert!(near(c.on_dial(0.0, 10.0), Vec2::new(100.0, 90.0)));
        assert!(near(c.on_dial(90.0, 10.0), Vec2::new(110.0, 100.0)));
        assert!(near(c.on_dial(180.0, 10.0), Vec2::new(100.0, 110.0)));
        assert!(near(c.on_dial(270.0, 10.0), Vec2::new(90.0, 100.0)));
    }
}
