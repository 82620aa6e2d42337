
//! Simple math utilities: image extents and the rounding rules of the layout calculations.

use std::convert::TryFrom;
use std::fmt::Debug;


/// Simple two-dimensional vector of any numerical type.
/// Supports only few mathematical operations
/// as this is used mainly as data struct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> (pub T, pub T);

/// Simple three-dimensional vector of any numerical type.
/// Used for extents of volume images, skip offsets and compressed block sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3<T> (pub T, pub T, pub T);

impl<T> Vec2<T> {

    /// Maps all components of this vector to a new type, yielding a vector of that new type.
    pub fn map<B>(self, map: impl Fn(T) -> B) -> Vec2<B> {
        Vec2(map(self.0), map(self.1))
    }

    /// Try to convert all components of this vector to a new type,
    /// yielding either a vector of that new type, or an error.
    pub fn try_from<S>(value: Vec2<S>) -> std::result::Result<Self, T::Error> where T: TryFrom<S> {
        let x = T::try_from(value.0)?;
        let y = T::try_from(value.1)?;
        Ok(Vec2(x, y))
    }

    /// Seeing this vector as a dimension or size (width and height),
    /// this returns the area that this dimensions contains (`width * height`).
    pub fn area(self) -> T where T: std::ops::Mul<T, Output = T> {
        self.0 * self.1
    }

    /// The first component of this 2D vector.
    pub fn width(self) -> T { self.0 }

    /// The second component of this 2D vector.
    pub fn height(self) -> T { self.1 }
}

impl<T> Vec3<T> {

    /// Create a vector with all three components set to the same value.
    pub fn splat(value: T) -> Self where T: Copy {
        Vec3(value, value, value)
    }

    /// Maps all components of this vector to a new type, yielding a vector of that new type.
    pub fn map<B>(self, map: impl Fn(T) -> B) -> Vec3<B> {
        Vec3(map(self.0), map(self.1), map(self.2))
    }

    /// Seeing this vector as a size, this returns the number of elements it contains.
    pub fn volume(self) -> T where T: std::ops::Mul<T, Output = T> {
        self.0 * self.1 * self.2
    }

    /// The two first components.
    pub fn xy(self) -> Vec2<T> {
        Vec2(self.0, self.1)
    }
}


impl<T: std::ops::Add<T>> std::ops::Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 + other.0, self.1 + other.1)
    }
}

impl<T: std::ops::Mul<T>> std::ops::Mul<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn mul(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 * other.0, self.1 * other.1)
    }
}

impl<T: std::ops::Mul<T>> std::ops::Mul<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T::Output>;
    fn mul(self, other: Vec3<T>) -> Self::Output {
        Vec3(self.0 * other.0, self.1 * other.1, self.2 * other.2)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self { Vec2(x, y) }
}

impl<T> From<Vec2<T>> for (T, T) {
    fn from(vec2: Vec2<T>) -> Self { (vec2.0, vec2.1) }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self { Vec3(x, y, z) }
}

impl<T> From<Vec3<T>> for (T, T, T) {
    fn from(vec3: Vec3<T>) -> Self { (vec3.0, vec3.1, vec3.2) }
}


/// The extent of an image with one, two or three dimensions.
///
/// Layout calculations always happen in three dimensions,
/// the missing axes of smaller images count as one pixel.
pub trait Dimensions: Copy + Eq + Debug {

    /// Number of axes of this extent.
    const COUNT: usize;

    /// The extent of a placeholder image.
    const ZERO: Self;

    /// Width, height and depth, with missing axes set to `1`.
    fn to_vec3(self) -> Vec3<usize>;

    /// Whether all axes are zero. Does not consider an extent like `(0, 3)` to be zero.
    fn is_zero(self) -> bool { self == Self::ZERO }
}

impl Dimensions for usize {
    const COUNT: usize = 1;
    const ZERO: Self = 0;
    fn to_vec3(self) -> Vec3<usize> { Vec3(self, 1, 1) }
}

impl Dimensions for Vec2<usize> {
    const COUNT: usize = 2;
    const ZERO: Self = Vec2(0, 0);
    fn to_vec3(self) -> Vec3<usize> { Vec3(self.0, self.1, 1) }
}

impl Dimensions for Vec3<usize> {
    const COUNT: usize = 3;
    const ZERO: Self = Vec3(0, 0, 0);
    fn to_vec3(self) -> Vec3<usize> { self }
}


/// Round up or down in specific calculations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundingMode {

    /// Round down.
    Down,

    /// Round up.
    Up,
}

impl RoundingMode {

    /// Divide two positive numbers, rounding the quotient as specified.
    /// The divisor must not be zero.
    pub fn divide(self, dividend: usize, divisor: usize) -> usize {
        match self {
            RoundingMode::Up => dividend / divisor + usize::from(dividend % divisor != 0),
            RoundingMode::Down => dividend / divisor,
        }
    }
}

/// Round `value` up to the next multiple of `alignment`.
/// Values that already are a multiple stay unchanged.
/// Returns `None` if the rounded value does not fit into `usize`.
pub fn align_up(value: usize, alignment: usize) -> Option<usize> {
    RoundingMode::Up.divide(value, alignment).checked_mul(alignment)
}
