use std::collections::HashSet;

use gcd::Gcd;
use log::debug;

use crate::error::Error;
use crate::system::{AxisState, System};
use crate::vector::Axis;

pub fn lcm(a: u64, b: u64) -> u64 {
    a / a.gcd(b) * b
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Periods([usize; 3]);

impl Periods {
    pub fn get(&self, axis: Axis) -> usize {
        self.0[axis as usize]
    }

    /// Steps until the whole system repeats.
    pub fn combined(&self) -> u64 {
        self.0.iter().map(|period| *period as u64).fold(1, lcm)
    }
}

/// Runs `system` until the state on every axis has repeated, recording the step
/// at which each axis first sees a state it has seen before.
///
/// Gives up with `Error::NoPeriod` once the step counter reaches `limit`.
pub fn find_periods(system: &mut System, limit: Option<usize>) -> Result<Periods, Error> {
    let mut seen: Vec<Option<HashSet<AxisState>>> = Axis::all().map(|_| Some(HashSet::new())).collect();
    let mut periods: [Option<usize>; 3] = [None; 3];

    loop {
        let states = system.full_state();
        for (index, (axis, state)) in Axis::all().zip(states.iter()).enumerate() {
            if periods[index].is_some() {
                continue;
            }

            if let Some(history) = seen[index].as_mut() {
                if history.contains(state) {
                    debug!("Axis {} repeats after {} steps", axis, system.step());
                    periods[index] = Some(system.step());
                    seen[index] = None;
                } else {
                    history.insert(state.clone());
                }
            }
        }

        if let [Some(x), Some(y), Some(z)] = periods {
            return Ok(Periods([x, y, z]));
        }

        if let Some(limit) = limit {
            if system.step() >= limit {
                return Err(Error::NoPeriod { steps: system.step() });
            }
        }

        system.advance();
    }
}
