// SPDX-License-Identifier: 0BSD

//! Day 3: crossed wires on a grid
//!
//! Two wires leave the central port and bend their way across a grid, one
//! comma-separated instruction line per wire. Part 1 wants the crossing
//! closest to the port by Manhattan distance, part 2 the crossing with the
//! fewest combined steps along both wires.

use std::collections::HashSet;
use std::ops::AddAssign;

/// One of the four grid directions a wire can run in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards positive y
    Up,
    /// Towards negative y
    Down,
    /// Towards negative x
    Left,
    /// Towards positive x
    Right,
}

/// A single parsed wire instruction: a direction and how far to run in it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg {
    /// Which way the wire runs
    pub direction: Direction,
    /// How many grid cells it covers
    pub distance: u32,
}

/// Parse a comma-separated instruction line like `"U10,R2"` into its legs.
///
/// Tokens that don't start with one of `U`, `D`, `L`, `R`, or whose distance
/// isn't a number, are silently skipped.
pub fn parse_legs(instructions: &str) -> Vec<Leg> {
    instructions
        .split(',')
        .filter_map(|token| {
            let mut chars = token.trim().chars();
            let direction = match chars.next()? {
                'U' => Direction::Up,
                'D' => Direction::Down,
                'L' => Direction::Left,
                'R' => Direction::Right,
                _ => return None,
            };
            let distance = chars.as_str().parse().ok()?;
            Some(Leg {
                direction,
                distance,
            })
        })
        .collect()
}

/// A point on the wire grid; the central port is the origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal position, positive to the right of the central port
    pub x: i32,
    /// Vertical position, positive above the central port
    pub y: i32,
}

impl Point {
    /// Manhattan distance between two points
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl AddAssign<Direction> for Point {
    fn add_assign(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.y += 1,
            Direction::Down => self.y -= 1,
            Direction::Left => self.x -= 1,
            Direction::Right => self.x += 1,
        }
    }
}

/// Every grid point a wire visits, in order, starting at its origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<Point>);

impl Path {
    /// Walk `legs` one grid cell at a time, starting at `origin`
    pub fn trace(origin: Point, legs: &[Leg]) -> Self {
        let mut points = vec![origin];
        let mut head = origin;
        for leg in legs {
            for _ in 0..leg.distance {
                head += leg.direction;
                points.push(head);
            }
        }
        Self(points)
    }

    /// The visited points, in visiting order
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// The last point the wire reached
    pub fn head(&self) -> Point {
        *self.0.last().expect("a path always contains its origin")
    }

    /// Concatenate another path onto this one, dropping the joined duplicate
    /// (the other path's origin is this path's head)
    pub fn append(mut self, other: Path) -> Path {
        self.0.extend(other.0.into_iter().skip(1));
        self
    }

    /// All grid points both wires visit
    pub fn intersections(&self, other: &Path) -> HashSet<Point> {
        let mine: HashSet<Point> = self.0.iter().copied().collect();
        other
            .0
            .iter()
            .filter(|p| mine.contains(p))
            .copied()
            .collect()
    }

    /// Number of steps along the wire to the *first* visit of `point`.
    /// A re-visited cell keeps its first step count.
    pub fn steps_to(&self, point: Point) -> Option<usize> {
        self.0.iter().position(|p| *p == point)
    }
}

fn paths_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Path> {
    lines
        .into_iter()
        .map(|line| Path::trace(Point::default(), &parse_legs(line)))
        .collect()
}

/// Manhattan distance from the central port to the closest place two wires
/// cross. The port itself never counts, nor does a wire crossing itself.
/// `None` if the wires never cross.
pub fn closest_crossing_distance<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<i32> {
    let paths = paths_from_lines(lines);
    let origin = Point::default();
    let mut best = None;
    for (i, a) in paths.iter().enumerate() {
        for b in &paths[i + 1..] {
            for point in a.intersections(b) {
                if point == origin {
                    continue;
                }
                let distance = point.manhattan(origin);
                best = Some(best.map_or(distance, |b: i32| b.min(distance)));
            }
        }
    }
    best
}

/// Fewest combined steps both wires take to reach a shared crossing.
/// `None` if the wires never cross.
pub fn fewest_combined_steps<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<usize> {
    let paths = paths_from_lines(lines);
    let origin = Point::default();
    let mut best = None;
    for (i, a) in paths.iter().enumerate() {
        for b in &paths[i + 1..] {
            for point in a.intersections(b) {
                if point == origin {
                    continue;
                }
                if let (Some(sa), Some(sb)) = (a.steps_to(point), b.steps_to(point)) {
                    let steps = sa + sb;
                    best = Some(best.map_or(steps, |b: usize| b.min(steps)));
                }
            }
        }
    }
    best
}
