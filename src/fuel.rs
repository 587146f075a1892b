// SPDX-License-Identifier: 0BSD

//! Day 1: fuel requirements for module masses

/// Fuel required to launch a module of the given mass: divide by three, round
/// down, subtract two.
///
/// ```rust
/// use aoc2019::fuel::fuel_for_mass;
/// assert_eq!(fuel_for_mass(1969), 654);
/// ```
pub fn fuel_for_mass(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel required for a module of the given mass, plus the fuel required for
/// that fuel, and so on, until a step needs zero or negative fuel.
///
/// ```rust
/// use aoc2019::fuel::total_fuel_for_mass;
/// assert_eq!(total_fuel_for_mass(1969), 966);
/// ```
pub fn total_fuel_for_mass(mass: i64) -> i64 {
    let mut total = 0;
    let mut step = fuel_for_mass(mass);
    while step > 0 {
        total += step;
        step = fuel_for_mass(step);
    }
    total
}
