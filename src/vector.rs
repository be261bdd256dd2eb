use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseError(pub String);

impl<T: ToString> From<T> for ParseError {
    fn from(error: T) -> Self {
        ParseError(error.to_string())
    }
}

static AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> impl Iterator<Item = Axis> {
        AXES.iter().cloned()
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector(pub [i64; 3]);

impl Vector {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Vector([x, y, z])
    }

    pub fn zero() -> Self {
        Vector::new(0, 0, 0)
    }

    pub fn get(&self, axis: Axis) -> i64 {
        self.0[axis.index()]
    }

    /// Each component replaced by -1, 0 or 1 according to its sign.
    pub fn sign(self) -> Self {
        self.map(i64::signum)
    }

    pub fn abs_sum(&self) -> i64 {
        self.0.iter().cloned().map(i64::abs).sum()
    }

    fn map(self, f: impl Fn(i64) -> i64) -> Self {
        let [x, y, z] = self.0;
        Vector([f(x), f(y), f(z)])
    }

    fn zip_with(self, other: Vector, f: impl Fn(i64, i64) -> i64) -> Self {
        let mut result = self.0;
        for (value, other) in result.iter_mut().zip(other.0.iter()) {
            *value = f(*value, *other);
        }
        Vector(result)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        self.zip_with(other, |a, b| a + b)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        self.zip_with(other, |a, b| a - b)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "<x={}, y={}, z={}>", x, y, z)
    }
}

impl FromStr for Vector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(*c, '<' | '>'))
            .collect();

        let parts: Vec<&str> = stripped.split(',').collect();
        if parts.len() != 3 {
            return Err(ParseError(format!(
                "Expected 3 components in {:?}, found {}",
                s.trim(),
                parts.len()
            )));
        }

        let mut result = [0; 3];
        for (axis, part) in Axis::all().zip(parts) {
            let value = part
                .strip_prefix(axis.label())
                .and_then(|rest| rest.strip_prefix('='))
                .ok_or_else(|| ParseError(format!("Missing {}= in {:?}", axis, part)))?;
            result[axis.index()] = value.parse()?;
        }

        Ok(Vector(result))
    }
}
