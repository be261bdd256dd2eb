use std::fmt;

use crate::vector::Vector;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moon {
    pub position: Vector,
    pub velocity: Vector,
}

impl Moon {
    pub fn new(position: Vector) -> Self {
        Moon {
            position,
            velocity: Vector::zero(),
        }
    }

    pub fn potential_energy(&self) -> i64 {
        self.position.abs_sum()
    }

    pub fn kinetic_energy(&self) -> i64 {
        self.velocity.abs_sum()
    }

    pub fn total_energy(&self) -> i64 {
        self.potential_energy() * self.kinetic_energy()
    }

    pub fn move_by_velocity(&mut self) {
        self.position += self.velocity;
    }
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "pos={}, vel={}", self.position, self.velocity)
    }
}
