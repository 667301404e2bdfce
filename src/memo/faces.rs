// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tessellation of the square faces of the cube.
//!
//! This is the 2D version of the case problem: a face has 4 corners, so 16
//! configurations, related by the 4 rotations of the square. Six canonical
//! configurations carry a hand-written tessellation, and every configuration
//! is one of them rotated by 0 to 3 quarter turns.
//!
//! # Rule
//!
//! A face is split along whichever diagonal has strictly more refined
//! endpoints. When the diagonals tie it stays a quad. Neighbouring cells see
//! the same face configuration, so they always agree on the split.

use log::debug;

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::{CUBE_FACES, NFACE_CONFIGS, NFACE_CORNERS};
use crate::geometry::{CaseConfig, Face};

/// A polygon cycle over the 4 local corners of a square face.
pub type LocalPolygon = &'static [usize];

const QUAD: &[LocalPolygon] = &[&[0, 1, 2, 3]];
const SPLIT_AT_0: &[LocalPolygon] = &[&[0, 1, 2], &[0, 2, 3]];

/// Canonical face configurations with their tessellations.
///
/// Bit `k` is local corner `k`; local corners run counter-clockwise seen
/// from outside the cube.
pub const CANONICAL_FACE_CONFIGS: [(u8, &[LocalPolygon]); 6] = [
    (0b0000, QUAD),
    (0b0001, SPLIT_AT_0),
    (0b0011, QUAD),
    (0b0101, SPLIT_AT_0),
    (0b0111, SPLIT_AT_0),
    (0b1111, QUAD),
];

/// Which canonical configuration a face configuration is, and how far it
/// is rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLookup {
    /// Index into [`CANONICAL_FACE_CONFIGS`].
    pub canonical: usize,
    /// Local corner `j` of the canonical configuration is local corner
    /// `(j + shift) % 4` of this one.
    pub shift: usize,
}

/// Lookup from every face configuration to its canonical form.
#[derive(Debug, Clone)]
pub struct FaceTessellator {
    lookup: [FaceLookup; NFACE_CONFIGS],
}

fn rotates_to(config: u8, canonical: u8, shift: usize) -> bool {
    (0..NFACE_CORNERS)
        .all(|j| (config >> ((j + shift) % NFACE_CORNERS)) & 1 == (canonical >> j) & 1)
}

impl FaceTessellator {
    pub fn initialize() -> GeneratorResult<Self> {
        let mut lookup = [FaceLookup {
            canonical: 0,
            shift: 0,
        }; NFACE_CONFIGS];
        for (config, entry) in lookup.iter_mut().enumerate() {
            let config = config as u8;
            *entry = CANONICAL_FACE_CONFIGS
                .iter()
                .enumerate()
                .find_map(|(canonical, &(bits, _))| {
                    (0..NFACE_CORNERS)
                        .find(|&shift| rotates_to(config, bits, shift))
                        .map(|shift| FaceLookup { canonical, shift })
                })
                .ok_or(GeneratorError::FaceUncovered { config })?;
        }
        debug!(
            "[FaceTessellator] {} face configurations from {} canonical",
            NFACE_CONFIGS,
            CANONICAL_FACE_CONFIGS.len()
        );
        Ok(FaceTessellator { lookup })
    }

    pub fn lookup(&self, config: u8) -> FaceLookup {
        self.lookup[(config as usize) % NFACE_CONFIGS]
    }

    /// Tessellation of one face configuration, in local corner numbers.
    pub fn local_tessellation(&self, config: u8) -> Vec<Vec<usize>> {
        let FaceLookup { canonical, shift } = self.lookup(config);
        CANONICAL_FACE_CONFIGS[canonical]
            .1
            .iter()
            .map(|polygon| {
                polygon
                    .iter()
                    .map(|&j| (j + shift) % NFACE_CORNERS)
                    .collect()
            })
            .collect()
    }

    /// The 4-bit configuration of one cube face.
    pub fn face_config(config: CaseConfig, face: &[u8; NFACE_CORNERS]) -> u8 {
        face.iter()
            .enumerate()
            .filter(|&(_, &corner)| config.is_refined(corner as usize))
            .fold(0u8, |bits, (k, _)| bits | (1 << k))
    }

    /// Raw outward boundary cycles of the cube for a case, in cube corner
    /// numbers.
    pub fn outer_cycles(&self, config: CaseConfig) -> Vec<Vec<u8>> {
        CUBE_FACES
            .iter()
            .flat_map(|face| {
                self.local_tessellation(Self::face_config(config, face))
                    .into_iter()
                    .map(|polygon| polygon.iter().map(|&j| face[j]).collect::<Vec<u8>>())
            })
            .collect()
    }

    /// Outward boundary faces of the cube for a case.
    pub fn outer_faces(&self, config: CaseConfig) -> Vec<Face> {
        self.outer_cycles(config)
            .iter()
            .map(|cycle| Face::new(cycle))
            .collect()
    }
}
