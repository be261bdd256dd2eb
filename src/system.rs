use std::fmt;

use itertools::Itertools;
use log::trace;

use crate::moon::Moon;
use crate::vector::Axis;

/// Position and velocity of every moon projected onto one axis, in system order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AxisState(pub Vec<(i64, i64)>);

#[derive(Clone, Debug)]
pub struct System {
    moons: Vec<Moon>,
    step: usize,
}

fn pair_mut(moons: &mut [Moon], i: usize, j: usize) -> (&mut Moon, &mut Moon) {
    let (left, right) = moons.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

impl System {
    pub fn new(moons: Vec<Moon>) -> Self {
        System { moons, step: 0 }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    #[cfg(test)]
    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    pub fn apply_gravity(&mut self) {
        for (i, j) in (0..self.moons.len()).tuple_combinations() {
            let (moon_a, moon_b) = pair_mut(&mut self.moons, i, j);
            let pull = (moon_a.position - moon_b.position).sign();
            moon_a.velocity -= pull;
            moon_b.velocity += pull;
        }
        trace!("Gravity applied\n{}", self);
    }

    pub fn tick(&mut self) {
        self.step += 1;
        for moon in self.moons.iter_mut() {
            moon.move_by_velocity();
        }
        trace!("Ticked\n{}", self);
    }

    pub fn advance(&mut self) {
        self.apply_gravity();
        self.tick();
    }

    pub fn total_energy(&self) -> i64 {
        self.moons.iter().map(Moon::total_energy).sum()
    }

    pub fn axis_state(&self, axis: Axis) -> AxisState {
        AxisState(
            self.moons
                .iter()
                .map(|moon| (moon.position.get(axis), moon.velocity.get(axis)))
                .collect(),
        )
    }

    pub fn full_state(&self) -> [AxisState; 3] {
        [
            self.axis_state(Axis::X),
            self.axis_state(Axis::Y),
            self.axis_state(Axis::Z),
        ]
    }
}

impl PartialEq for System {
    fn eq(&self, other: &Self) -> bool {
        self.moons == other.moons
    }
}

impl Eq for System {}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "After {} steps:", self.step)?;
        for moon in self.moons.iter() {
            write!(f, "\n{}", moon)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::vector::Vector;

    pub fn example_moons() -> Vec<Moon> {
        vec![
            Moon::new(Vector::new(-1, 0, 2)),
            Moon::new(Vector::new(2, -10, -7)),
            Moon::new(Vector::new(4, -8, 8)),
            Moon::new(Vector::new(3, 5, -1)),
        ]
    }

    pub fn larger_example_moons() -> Vec<Moon> {
        vec![
            Moon::new(Vector::new(-8, -10, 0)),
            Moon::new(Vector::new(5, 5, 10)),
            Moon::new(Vector::new(2, -7, 3)),
            Moon::new(Vector::new(9, -8, -3)),
        ]
    }

    fn total_velocity(system: &System) -> Vector {
        system
            .moons()
            .iter()
            .fold(Vector::zero(), |total, moon| total + moon.velocity)
    }

    fn positions(system: &System) -> Vec<[i64; 3]> {
        system.moons().iter().map(|moon| moon.position.0).collect()
    }

    #[test]
    fn test_step() {
        let mut system = System::new(example_moons());

        system.advance();

        assert_eq!(positions(&system), vec![[2, -1, 1], [3, -7, -4], [1, -7, 5], [2, 2, 0]]);

        system.advance();

        assert_eq!(positions(&system), vec![[5, -3, -1], [1, -2, 2], [1, -4, -1], [1, -4, 2]]);
        assert_eq!(system.step(), 2);
    }

    #[test]
    fn ten_steps() {
        let mut system = System::new(example_moons());
        for _ in 0..10 {
            system.advance();
        }

        let expected = vec![
            Moon { position: Vector::new(2, 1, -3), velocity: Vector::new(-3, -2, 1) },
            Moon { position: Vector::new(1, -8, 0), velocity: Vector::new(-1, 1, 3) },
            Moon { position: Vector::new(3, -6, 1), velocity: Vector::new(3, 2, -3) },
            Moon { position: Vector::new(2, 0, 4), velocity: Vector::new(1, -1, -1) },
        ];
        assert_eq!(system.moons(), &expected[..]);
        assert_eq!(system.total_energy(), 179);
    }

    #[test]
    fn two_moons() {
        let mut system = System::new(vec![
            Moon::new(Vector::new(3, 0, 0)),
            Moon::new(Vector::new(5, 0, 0)),
        ]);

        system.apply_gravity();
        assert_eq!(system.moons()[0].velocity, Vector::new(1, 0, 0));
        assert_eq!(system.moons()[1].velocity, Vector::new(-1, 0, 0));

        system.tick();
        assert_eq!(system.moons()[0].position, Vector::new(4, 0, 0));
        assert_eq!(system.moons()[1].position, Vector::new(4, 0, 0));
    }

    #[test]
    fn single_moon_is_still() {
        let mut system = System::new(vec![Moon::new(Vector::new(1, 0, 0))]);
        let before = system.clone();

        system.apply_gravity();
        assert_eq!(system, before);

        system.tick();
        assert_eq!(system.moons()[0].position, Vector::new(1, 0, 0));
        assert_eq!(system.total_energy(), 0);
        assert_eq!(system.step(), 1);
    }

    #[test]
    fn equality_ignores_step() {
        let start = System::new(example_moons());
        let mut later = start.clone();
        for _ in 0..2772 {
            later.advance();
        }

        assert_eq!(later.step(), 2772);
        assert_eq!(later, start);

        later.advance();
        assert_ne!(later, start);
    }

    #[test]
    fn gravity_conserves_momentum() {
        for count in 1..=4 {
            let mut system = System::new(larger_example_moons().into_iter().take(count).collect());
            for _ in 0..50 {
                let before = total_velocity(&system);
                system.apply_gravity();
                assert_eq!(total_velocity(&system), before);
                system.tick();
            }
        }
    }

    #[test]
    fn tick_only_moves() {
        let mut system = System::new(example_moons());
        system.apply_gravity();
        let velocities: Vec<_> = system.moons().iter().map(|moon| moon.velocity).collect();

        system.tick();

        assert_eq!(system.step(), 1);
        let after: Vec<_> = system.moons().iter().map(|moon| moon.velocity).collect();
        assert_eq!(after, velocities);
    }

    #[test]
    fn independent_runs_agree() {
        let moons = larger_example_moons();
        let mut first = System::new(moons.clone());
        let mut second = System::new(moons.clone());
        for _ in 0..1000 {
            first.advance();
        }
        for _ in 0..1000 {
            second.advance();
        }
        assert_eq!(first.total_energy(), second.total_energy());
        assert_eq!(moons, larger_example_moons());
    }

    #[test]
    fn larger_example_energy() {
        let mut system = System::new(larger_example_moons());
        for _ in 0..100 {
            system.advance();
        }
        assert_eq!(system.total_energy(), 1940);
    }

    #[test]
    fn axis_states() {
        let mut system = System::new(example_moons());
        system.advance();

        assert_eq!(
            system.axis_state(Axis::X),
            AxisState(vec![(2, 3), (3, 1), (1, -3), (2, -1)])
        );
        let [x, y, z] = system.full_state();
        assert_eq!(x, system.axis_state(Axis::X));
        assert_eq!(y, system.axis_state(Axis::Y));
        assert_eq!(z, system.axis_state(Axis::Z));
    }

    #[test]
    fn display() {
        let system = System::new(vec![Moon::new(Vector::new(-1, 0, 2))]);
        assert_eq!(
            system.to_string(),
            "After 0 steps:\npos=<x=-1, y=0, z=2>, vel=<x=0, y=0, z=0>"
        );
    }
}
