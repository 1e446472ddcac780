use core::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, rhs: Self) -> f32 {
        let d = self - rhs;
        d.dot(d)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            Self::default()
        } else {
            self * (1.0 / n)
        }
    }
}

impl Add<Vec2f> for Point2f {
    type Output = Point2f;

    fn add(self, rhs: Vec2f) -> Self::Output {
        Point2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Point2f> for Point2f {
    type Output = Vec2f;

    fn sub(self, rhs: Point2f) -> Self::Output {
        Vec2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vec2f {
    type Output = Vec2f;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2f {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
