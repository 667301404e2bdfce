// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counts gathered while the tables are built, reported at the end of a run.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::geometry::{Shape, Tessellation};

#[derive(EnumCountMacro, EnumIter, Display, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    BaseCases,
    BaseTessellations,
    CaseTessellations,
    AmbiguousCases,
    StreamEntries,
}

const COUNT: usize = Counters::COUNT + Shape::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Add `amount` to the specified counter.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Count the polyhedra of one emitted tessellation by shape.
    pub fn record_tessellation(&mut self, tessellation: &Tessellation) {
        self.add(Counters::CaseTessellations, 1);
        for polyhedron in tessellation.polyhedra() {
            self.stats[Counters::COUNT + polyhedron.shape() as usize] += 1;
        }
    }

    pub fn shape_count(&self, shape: Shape) -> u64 {
        self.stats[Counters::COUNT + shape as usize]
    }

    pub fn polyhedra(&self) -> u64 {
        Shape::iter().map(|shape| self.shape_count(shape)).sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            writeln!(f, "{counter:>20}: {}", self.get(counter))?;
        }
        for shape in Shape::iter() {
            writeln!(f, "{shape:>20}: {}", self.shape_count(shape))?;
        }
        write!(f, "{:>20}: {}", "Polyhedra", self.polyhedra())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
        assert_eq!(stats.polyhedra(), 0);
    }

    #[test]
    fn test_record_tessellation() {
        let mut stats = Statistics::new();
        let t = Tessellation::from_lists(&[&[1, 5, 6, 2, 0], &[2, 6, 7, 3, 0], &[0, 1, 2, 5]])
            .unwrap();
        stats.record_tessellation(&t);
        assert_eq!(stats.get(Counters::CaseTessellations), 1);
        assert_eq!(stats.shape_count(Shape::Pyramid), 2);
        assert_eq!(stats.shape_count(Shape::Tetrahedron), 1);
        assert_eq!(stats.polyhedra(), 3);
    }

    #[test]
    fn test_display_lists_shapes() {
        let mut stats = Statistics::new();
        stats.add(Counters::BaseCases, 23);
        let text = stats.to_string();
        assert!(text.contains("BaseCases: 23"));
        assert!(text.contains("X solid: 0"));
    }
}
