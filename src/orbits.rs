// SPDX-License-Identifier: 0BSD

//! Day 6: the orbit map
//!
//! The map is a list of `CENTER)ORBITER` lines. Every body orbits exactly one
//! center, and every chain of centers ends at the universal Center of Mass,
//! so the map is a child-to-parent tree.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

/// An orbit-map line without a `)` separator
#[derive(Debug, PartialEq)]
pub struct MalformedOrbit(String);

impl Display for MalformedOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed orbit entry {:?}: expected CENTER)ORBITER",
            self.0
        )
    }
}

impl Error for MalformedOrbit {}

/// A parsed orbit map, holding which center each body directly orbits
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrbitMap {
    centers: HashMap<String, String>,
}

impl FromStr for OrbitMap {
    type Err = MalformedOrbit;

    /// Parse one `CENTER)ORBITER` entry per line. A body listed twice keeps
    /// its first recorded center.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut centers = HashMap::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (center, orbiter) = line
                .split_once(')')
                .ok_or_else(|| MalformedOrbit(line.to_string()))?;
            centers
                .entry(orbiter.to_string())
                .or_insert_with(|| center.to_string());
        }
        Ok(Self { centers })
    }
}

impl OrbitMap {
    /// The chain of centers over `body`, nearest first, ending at the root
    fn chain_above<'a>(&'a self, body: &str) -> Vec<&'a str> {
        let mut chain = Vec::new();
        let mut current = body;
        while let Some(center) = self.centers.get(current) {
            chain.push(center.as_str());
            current = center;
        }
        chain
    }

    /// Total direct and indirect orbits: for every body, the length of its
    /// chain of centers.
    pub fn total_orbits(&self) -> usize {
        self.centers
            .keys()
            .map(|body| self.chain_above(body).len())
            .sum()
    }

    /// Minimum orbital transfers to get the body `from` is orbiting next to
    /// the body `to` is orbiting.
    ///
    /// Returns [`None`] when either body is absent from the map, or their
    /// center chains never meet.
    pub fn transfers_between(&self, from: &str, to: &str) -> Option<usize> {
        if !self.centers.contains_key(from) || !self.centers.contains_key(to) {
            return None;
        }
        let from_chain = self.chain_above(from);
        let to_chain = self.chain_above(to);

        // both chains end at the root; drop the shared root-side suffix
        let common = from_chain
            .iter()
            .rev()
            .zip(to_chain.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();
        if common == 0 {
            return None;
        }
        Some((from_chain.len() - common) + (to_chain.len() - common))
    }
}
