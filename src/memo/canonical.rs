// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of the 256 configurations to base cases.
//!
//! # Algorithm
//!
//! 1. Start with all 256 configurations in case-number order.
//! 2. Take the lowest remaining configuration as the next base case and
//!    remove all 24 of its rotated images from the remaining set.
//! 3. Repeat until nothing remains. This yields 23 base cases.
//!
//! Each configuration then gets a [`CaseRecord`]: the first (base case,
//! rotation) pair, scanning base cases first, whose image is that
//! configuration. The first match wins, so records are deterministic even
//! for configurations with several generating rotations.

use log::{debug, info};

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::NCASES;
use crate::geometry::CaseConfig;
use crate::symmetry::SymmetryGroup;

/// How a configuration is generated from its base case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRecord {
    /// Index into the base case list.
    pub base: usize,
    /// Index into the symmetry group.
    pub rotation: usize,
}

/// Base cases and the record of every configuration.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    base_cases: Vec<CaseConfig>,
    records: Vec<CaseRecord>,
}

impl Canonicalizer {
    pub fn initialize(group: &SymmetryGroup) -> GeneratorResult<Self> {
        let base_cases = find_base_cases(group);
        info!("[Canonicalizer] {} base cases", base_cases.len());

        let mut records = Vec::with_capacity(NCASES);
        for config in CaseConfig::all() {
            let record = find_record(group, &base_cases, config).ok_or(
                GeneratorError::Uncovered {
                    case: config.case_number(),
                },
            )?;
            records.push(record);
        }
        debug!("[Canonicalizer] recorded all {} cases", records.len());

        Ok(Canonicalizer {
            base_cases,
            records,
        })
    }

    pub fn base_cases(&self) -> &[CaseConfig] {
        &self.base_cases
    }

    pub fn base_case(&self, index: usize) -> CaseConfig {
        self.base_cases[index]
    }

    pub fn record(&self, config: CaseConfig) -> CaseRecord {
        self.records[config.case_number()]
    }

    /// Position of `config` in the base case list, if it is a base case.
    pub fn base_index_of(&self, config: CaseConfig) -> Option<usize> {
        self.base_cases.iter().position(|&b| b == config)
    }

    /// Number of configurations each base case generates.
    pub fn class_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.base_cases.len()];
        for record in &self.records {
            sizes[record.base] += 1;
        }
        sizes
    }
}

fn find_base_cases(group: &SymmetryGroup) -> Vec<CaseConfig> {
    let mut remaining = [true; NCASES];
    let mut base_cases = Vec::new();
    for config in CaseConfig::all() {
        if !remaining[config.case_number()] {
            continue;
        }
        base_cases.push(config);
        for rotation in group.iter() {
            remaining[config.permuted(&rotation.vertices).case_number()] = false;
        }
    }
    base_cases
}

fn find_record(
    group: &SymmetryGroup,
    base_cases: &[CaseConfig],
    config: CaseConfig,
) -> Option<CaseRecord> {
    base_cases.iter().enumerate().find_map(|(base, &b)| {
        group
            .iter()
            .position(|rotation| b.permuted(&rotation.vertices) == config)
            .map(|rotation| CaseRecord { base, rotation })
    })
}
