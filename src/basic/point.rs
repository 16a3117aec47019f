use lyon_geom::euclid::default::{Point2D, Vector2D};
use std::marker::PhantomData;
use std::ops::{Div, Mul};

/// A pixel-space point.
#[derive(Copy, Clone, Debug, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point2D<f32>> for Point {
    fn from(Point2D { x, y, _unit }: Point2D<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2D { x, y, _unit: PhantomData }
    }
}

impl From<Point> for Vector2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2D { x, y, _unit: PhantomData }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}
