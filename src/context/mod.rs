// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The full generation pipeline.
//!
//! [`CaseTables::build`] runs every stage in dependency order:
//!
//! 1. precomputed data ([`MemoizedData`]), which checks the symmetry group
//!    and the canonical cover,
//! 2. validation of the base table as authored,
//! 3. expansion to all 256 cases,
//! 4. validation of every (case, subcase),
//! 5. flattening into [`OutputTables`].
//!
//! Any failure stops the pipeline, so a `CaseTables` value only exists for
//! tables that passed every check.

pub mod memoized;

use std::fmt;

use log::info;

pub use memoized::MemoizedData;

use crate::emit::OutputTables;
use crate::error::GeneratorResult;
use crate::geometry::CaseConfig;
use crate::statistics::{Counters, Statistics};
use crate::tessellation::{CaseTessellations, TessellationExpander, Validator};

/// Validated case tables and everything they were built from.
#[derive(Debug, Clone)]
pub struct CaseTables {
    pub memo: MemoizedData,
    pub tessellations: CaseTessellations,
    pub output: OutputTables,
    pub statistics: Statistics,
}

impl CaseTables {
    pub fn build() -> GeneratorResult<Self> {
        Self::with_memo(MemoizedData::initialize()?)
    }

    /// Run the pipeline on existing precomputed data.
    pub fn with_memo(memo: MemoizedData) -> GeneratorResult<Self> {
        let mut statistics = Statistics::new();
        let validator = Validator::new(&memo.faces, &memo.subcases);

        let base_checked = validator.validate_base_cases(&memo.canonical, &memo.base_table)?;
        statistics.add(Counters::BaseCases, memo.canonical.base_cases().len() as u64);
        statistics.add(Counters::BaseTessellations, base_checked as u64);

        let tessellations = TessellationExpander::new(
            &memo.group,
            &memo.canonical,
            &memo.subcases,
            &memo.base_table,
        )
        .expand_all()?;
        validator.validate_all(&tessellations)?;

        for (_, _, tessellation) in tessellations.iter() {
            statistics.record_tessellation(tessellation);
        }
        let ambiguous = CaseConfig::all()
            .filter(|&config| memo.subcases.num_sub_cases(config) > 1)
            .count();
        statistics.add(Counters::AmbiguousCases, ambiguous as u64);

        let output = OutputTables::build(memo.subcases.directions(), &tessellations);
        statistics.add(Counters::StreamEntries, output.tessellation_stream.len() as u64);

        info!(
            "[CaseTables] {} tessellations, {} polyhedra, {} stream entries",
            statistics.get(Counters::CaseTessellations),
            statistics.polyhedra(),
            statistics.get(Counters::StreamEntries)
        );

        Ok(CaseTables {
            memo,
            tessellations,
            output,
            statistics,
        })
    }

    /// Human-readable summary of one case.
    pub fn describe_case(&self, case: usize) -> GeneratorResult<CaseSummary<'_>> {
        Ok(CaseSummary {
            tables: self,
            config: CaseConfig::from_case_number(case)?,
        })
    }
}

/// The record, subcases and stream offsets of one case.
pub struct CaseSummary<'a> {
    tables: &'a CaseTables,
    config: CaseConfig,
}

impl fmt::Display for CaseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let memo = &self.tables.memo;
        let config = self.config;
        let record = memo.canonical.record(config);
        let base = memo.canonical.base_case(record.base);
        writeln!(f, "case {config}")?;
        writeln!(
            f,
            "  base case {} (index {}), rotation {} {:?}",
            base.case_number(),
            record.base,
            record.rotation,
            memo.group.get(record.rotation).vertices
        )?;
        writeln!(
            f,
            "  subcases {}, direction {:#05b}",
            memo.subcases.num_sub_cases(config),
            memo.subcases.direction(config)
        )?;
        let offsets = self.tables.output.case_stream_offsets[config.case_number()];
        let subcases = self.tables.tessellations.subcases(config);
        for (subcase, tessellation) in subcases.iter().enumerate() {
            writeln!(f, "  [{subcase}] @{}: {tessellation}", offsets[subcase])?;
        }
        Ok(())
    }
}
