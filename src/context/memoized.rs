// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data.

use log::info;

use crate::error::GeneratorResult;
use crate::memo::{BaseTessellationTable, Canonicalizer, FaceTessellator, SubcaseResolver};
use crate::symmetry::SymmetryGroup;

/// Immutable precomputed data.
///
/// Built once, leaf component first. Each component only reads the ones
/// built before it.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// The 24 rotations of the cube.
    pub group: SymmetryGroup,

    /// Base cases and the record of every configuration.
    pub canonical: Canonicalizer,

    /// Subcase counts, directions and merge classes.
    pub subcases: SubcaseResolver,

    /// Square-face tessellations and the cube boundary of each case.
    pub faces: FaceTessellator,

    /// Hand-authored tessellations of the base cases.
    pub base_table: BaseTessellationTable,
}

impl MemoizedData {
    /// Initialize all precomputed structures.
    pub fn initialize() -> GeneratorResult<Self> {
        info!("[MemoizedData] Initializing...");

        let group = SymmetryGroup::generate()?;
        let canonical = Canonicalizer::initialize(&group)?;
        let subcases = SubcaseResolver::initialize();
        let faces = FaceTessellator::initialize()?;
        let base_table = BaseTessellationTable::load(&canonical, &subcases)?;

        info!(
            "[MemoizedData] Initialization complete ({} rotations, {} base cases, {} subcases)",
            group.len(),
            canonical.base_cases().len(),
            subcases.total_subcases()
        );

        Ok(Self {
            group,
            canonical,
            subcases,
            faces,
            base_table,
        })
    }
}
