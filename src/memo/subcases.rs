// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ambiguous configurations and their subcases.
//!
//! A configuration is ambiguous along an axis when the four cube edges
//! parallel to that axis each join two corners in the same state, and at
//! least one corner on the axis' low face is unrefined. Unrefined corners are
//! coarse-level samples. Along an ambiguous axis, two unrefined corners that
//! share an edge may sit in the same coarse cell, and only the stitching
//! runtime knows whether they do.
//!
//! Subcase `s` of a configuration selects, for the `i`-th ambiguous axis in
//! X, Y, Z order, whether bit `i` of `s` is set. A set bit merges every
//! unrefined edge pair along that axis into a single vertex at the edge
//! midpoint. A configuration with `k` ambiguous axes has `2^k` subcases,
//! except the all-unrefined configuration, which has none.

use log::info;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::{
    AXIS_LOW_CORNERS, AXIS_PAIRS, CORNER_POSITIONS, MAX_SUBCASES, NAXES, NCORNERS,
};
use crate::geometry::CaseConfig;
use crate::symmetry::Rotation;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter, Display)]
#[repr(u8)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// True when `config` is ambiguous along `axis`.
pub fn is_ambiguous(config: CaseConfig, axis: Axis) -> bool {
    let a = axis as usize;
    let paired = AXIS_PAIRS[a]
        .iter()
        .all(|&(low, high)| config.is_refined(low as usize) == config.is_refined(high as usize));
    let low_face_coarse = AXIS_LOW_CORNERS[a]
        .iter()
        .any(|&corner| !config.is_refined(corner as usize));
    paired && low_face_coarse
}

/// Bitmask of the ambiguous axes (bit 0 X, bit 1 Y, bit 2 Z).
pub fn ambiguous_axes(config: CaseConfig) -> u8 {
    use strum::IntoEnumIterator;
    Axis::iter()
        .filter(|&axis| is_ambiguous(config, axis))
        .fold(0, |mask, axis| mask | axis.bit())
}

/// Subcase count: 0 for the all-unrefined configuration, else 2^k.
pub fn num_sub_cases(config: CaseConfig) -> usize {
    if config.is_empty() {
        0
    } else {
        1 << ambiguous_axes(config).count_ones()
    }
}

/// The emitted direction bitmask: the ambiguous axes of a configuration
/// that has subcases, 0 otherwise.
pub fn subcase_direction(config: CaseConfig) -> u8 {
    if config.is_empty() {
        0
    } else {
        ambiguous_axes(config)
    }
}

/// Spread the bits of `subcase` over the ambiguous axes of `config`.
pub fn axis_mask_for_subcase(config: CaseConfig, subcase: usize) -> u8 {
    let ambiguous = ambiguous_axes(config);
    let mut mask = 0u8;
    let mut next_bit = 0;
    for axis in 0..NAXES {
        if ambiguous & (1 << axis) != 0 {
            if subcase & (1 << next_bit) != 0 {
                mask |= 1 << axis;
            }
            next_bit += 1;
        }
    }
    mask
}

/// Inverse of [`axis_mask_for_subcase`]; bits on non-ambiguous axes are
/// ignored.
pub fn subcase_for_axis_mask(config: CaseConfig, mask: u8) -> usize {
    let ambiguous = ambiguous_axes(config);
    let mut subcase = 0;
    let mut next_bit = 0;
    for axis in 0..NAXES {
        if ambiguous & (1 << axis) != 0 {
            if mask & (1 << axis) != 0 {
                subcase |= 1 << next_bit;
            }
            next_bit += 1;
        }
    }
    subcase
}

/// Which corners are identified in one subcase.
///
/// Each class is named by its smallest corner index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeClasses {
    representative: [u8; NCORNERS],
}

impl MergeClasses {
    pub fn identity() -> Self {
        let mut representative = [0u8; NCORNERS];
        for (i, r) in representative.iter_mut().enumerate() {
            *r = i as u8;
        }
        MergeClasses { representative }
    }

    /// Merge every unrefined edge pair along the axes in `axis_mask`.
    pub fn for_axes(config: CaseConfig, axis_mask: u8) -> Self {
        let mut classes = MergeClasses::identity();
        for axis in 0..NAXES {
            if axis_mask & (1 << axis) == 0 {
                continue;
            }
            for &(a, b) in &AXIS_PAIRS[axis] {
                if !config.is_refined(a as usize) && !config.is_refined(b as usize) {
                    classes.union(a, b);
                }
            }
        }
        classes
    }

    fn union(&mut self, a: u8, b: u8) {
        let ra = self.representative[a as usize];
        let rb = self.representative[b as usize];
        let merged = ra.min(rb);
        for r in self.representative.iter_mut() {
            if *r == ra || *r == rb {
                *r = merged;
            }
        }
    }

    pub fn representative(&self, corner: u8) -> u8 {
        self.representative[corner as usize]
    }

    pub fn is_identity(&self) -> bool {
        *self == MergeClasses::identity()
    }

    /// Number of distinct vertices left after merging.
    pub fn class_count(&self) -> usize {
        self.representative
            .iter()
            .enumerate()
            .filter(|&(i, &r)| i == r as usize)
            .count()
    }

    /// Doubled integer position of each corner's class.
    ///
    /// A class sits at the mean of its members, so doubled coordinates keep
    /// edge and face midpoints integral.
    pub fn positions(&self) -> [[i64; 3]; NCORNERS] {
        let mut positions = [[0i64; 3]; NCORNERS];
        for (corner, position) in positions.iter_mut().enumerate() {
            let class = self.representative[corner];
            let members: Vec<usize> = (0..NCORNERS)
                .filter(|&j| self.representative[j] == class)
                .collect();
            for k in 0..3 {
                let sum: i64 = members.iter().map(|&j| 2 * CORNER_POSITIONS[j][k]).sum();
                position[k] = sum / members.len() as i64;
            }
        }
        positions
    }
}

/// Subcase counts and directions for all configurations.
#[derive(Debug, Clone)]
pub struct SubcaseResolver {
    counts: Vec<usize>,
    directions: Vec<u8>,
}

impl SubcaseResolver {
    pub fn initialize() -> Self {
        let counts: Vec<usize> = CaseConfig::all().map(num_sub_cases).collect();
        let directions: Vec<u8> = CaseConfig::all().map(subcase_direction).collect();

        let mut histogram = [0usize; MAX_SUBCASES + 1];
        for &count in &counts {
            histogram[count] += 1;
        }
        info!(
            "[SubcaseResolver] subcase histogram: none {}, one {}, two {}, four {}",
            histogram[0], histogram[1], histogram[2], histogram[4]
        );

        SubcaseResolver { counts, directions }
    }

    pub fn num_sub_cases(&self, config: CaseConfig) -> usize {
        self.counts[config.case_number()]
    }

    pub fn direction(&self, config: CaseConfig) -> u8 {
        self.directions[config.case_number()]
    }

    pub fn directions(&self) -> &[u8] {
        &self.directions
    }

    /// Total number of (case, subcase) pairs.
    pub fn total_subcases(&self) -> usize {
        self.counts.iter().sum()
    }

    fn check_subcase(&self, config: CaseConfig, subcase: usize) -> GeneratorResult<()> {
        if subcase < self.num_sub_cases(config) {
            Ok(())
        } else {
            Err(GeneratorError::SubcaseOutOfRange {
                case: config.case_number(),
                subcase,
            })
        }
    }

    /// The base case subcase that, carried by `rotation`, becomes
    /// `subcase` of `config`.
    ///
    /// `config` must be the image of `base` under `rotation`. Bit `j` of the
    /// configuration's axis mask moves to axis `rotation.axes[j]`.
    pub fn sub_case_number_after_permutation(
        &self,
        config: CaseConfig,
        subcase: usize,
        rotation: &Rotation,
        base: CaseConfig,
    ) -> GeneratorResult<usize> {
        self.check_subcase(config, subcase)?;
        let config_mask = axis_mask_for_subcase(config, subcase);
        let mut base_mask = 0u8;
        for (j, &target) in rotation.axes.iter().enumerate() {
            if config_mask & (1 << j) != 0 {
                base_mask |= 1 << target;
            }
        }
        Ok(subcase_for_axis_mask(base, base_mask))
    }

    /// Corner identifications for one subcase.
    pub fn merge_classes(
        &self,
        config: CaseConfig,
        subcase: usize,
    ) -> GeneratorResult<MergeClasses> {
        self.check_subcase(config, subcase)?;
        Ok(MergeClasses::for_axes(
            config,
            axis_mask_for_subcase(config, subcase),
        ))
    }

    /// Doubled integer positions of the merged vertices for one subcase.
    pub fn merge_positions(
        &self,
        config: CaseConfig,
        subcase: usize,
    ) -> GeneratorResult<[[i64; 3]; NCORNERS]> {
        Ok(self.merge_classes(config, subcase)?.positions())
    }
}

impl Default for SubcaseResolver {
    fn default() -> Self {
        Self::initialize()
    }
}
