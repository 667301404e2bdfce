// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corner refinement configurations.
//!
//! A [`CaseConfig`] records, for each of the eight cube corners, whether that
//! corner is refined. Case number `n` and corner vector are two views of the
//! same value: bit `i` of `n` (least significant first) is corner `i`.

use std::fmt;

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::{NCASES, NCORNERS};
use crate::symmetry::VertexPermutation;

/// One of the 256 corner refinement states of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseConfig(u8);

impl CaseConfig {
    /// No corner refined.
    pub const EMPTY: CaseConfig = CaseConfig(0);

    /// Every corner refined.
    pub const FULL: CaseConfig = CaseConfig(u8::MAX);

    pub const fn new(bits: u8) -> Self {
        CaseConfig(bits)
    }

    /// Checked conversion from a case number.
    pub fn from_case_number(n: usize) -> GeneratorResult<Self> {
        u8::try_from(n)
            .map(CaseConfig)
            .map_err(|_| GeneratorError::CaseOutOfRange(n))
    }

    /// All 256 configurations in case-number order.
    pub fn all() -> impl Iterator<Item = CaseConfig> {
        (0..NCASES).map(|n| CaseConfig(n as u8))
    }

    pub fn case_number(self) -> usize {
        self.0 as usize
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Corner states, corner 0 first.
    pub fn corners(self) -> [bool; NCORNERS] {
        config_for_case(self.0)
    }

    pub fn from_corners(corners: &[bool; NCORNERS]) -> Self {
        CaseConfig(case_number_for_config(corners))
    }

    pub fn is_refined(self, corner: usize) -> bool {
        (self.0 >> corner) & 1 == 1
    }

    pub fn refined_count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The image of this configuration under a vertex permutation.
    ///
    /// Corner `i` of the image takes the state of corner `p[i]` of `self`.
    pub fn permuted(self, p: &VertexPermutation) -> CaseConfig {
        let mut bits = 0u8;
        for (i, &source) in p.iter().enumerate() {
            if self.is_refined(source as usize) {
                bits |= 1 << i;
            }
        }
        CaseConfig(bits)
    }
}

impl fmt::Display for CaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.0)?;
        for corner in 0..NCORNERS {
            write!(f, "{}", if self.is_refined(corner) { '1' } else { '0' })?;
        }
        write!(f, "]")
    }
}

/// Corner states of case `n`, least significant bit first.
pub fn config_for_case(n: u8) -> [bool; NCORNERS] {
    let mut corners = [false; NCORNERS];
    for (i, corner) in corners.iter_mut().enumerate() {
        *corner = (n >> i) & 1 == 1;
    }
    corners
}

/// Inverse of [`config_for_case`].
pub fn case_number_for_config(corners: &[bool; NCORNERS]) -> u8 {
    corners
        .iter()
        .enumerate()
        .filter(|&(_, &refined)| refined)
        .fold(0u8, |n, (i, _)| n | (1 << i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_for_case_is_lsb_first() {
        assert_eq!(
            config_for_case(1),
            [true, false, false, false, false, false, false, false]
        );
        assert_eq!(
            config_for_case(0b1000_0010),
            [false, true, false, false, false, false, false, true]
        );
        assert_eq!(config_for_case(255), [true; NCORNERS]);
    }

    #[test]
    fn test_case_number_round_trip() {
        for config in CaseConfig::all() {
            assert_eq!(CaseConfig::from_corners(&config.corners()), config);
        }
    }

    #[test]
    fn test_from_case_number_range() {
        assert_eq!(CaseConfig::from_case_number(255).unwrap(), CaseConfig::FULL);
        assert!(matches!(
            CaseConfig::from_case_number(256),
            Err(GeneratorError::CaseOutOfRange(256))
        ));
    }

    #[test]
    fn test_permuted_identity_and_shift() {
        let identity = [0, 1, 2, 3, 4, 5, 6, 7];
        let config = CaseConfig::new(0b0001_0011);
        assert_eq!(config.permuted(&identity), config);

        // Corner 0 of the image shows corner 1 of the source, and so on.
        let shift = [1, 2, 3, 0, 5, 6, 7, 4];
        assert_eq!(CaseConfig::new(0b0000_0010).permuted(&shift).bits(), 0b0000_0001);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CaseConfig::new(3)), "3 [11000000]");
    }
}
