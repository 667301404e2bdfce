// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Carry base case tessellations to all 256 configurations.
//!
//! For configuration `c` with record (base `b`, rotation `p`) and subcase
//! `s`, the base case subcase is `s' = sub_case_number_after_permutation(c,
//! s, p)`. Relabeling every vertex of base `b`'s subcase `s'` through the
//! inverse of `p` gives `c`'s subcase `s` in `c`'s own numbering.

use log::{info, trace};

use crate::error::GeneratorResult;
use crate::geometry::{CaseConfig, Tessellation};
use crate::memo::{BaseTessellationTable, Canonicalizer, SubcaseResolver};
use crate::symmetry::SymmetryGroup;

/// The tessellation of every (case, subcase).
#[derive(Debug, Clone)]
pub struct CaseTessellations {
    cases: Vec<Vec<Tessellation>>,
}

impl CaseTessellations {
    pub fn new(cases: Vec<Vec<Tessellation>>) -> Self {
        CaseTessellations { cases }
    }

    pub fn subcases(&self, config: CaseConfig) -> &[Tessellation] {
        &self.cases[config.case_number()]
    }

    pub fn get(&self, config: CaseConfig, subcase: usize) -> Option<&Tessellation> {
        self.cases[config.case_number()].get(subcase)
    }

    /// Every (case, subcase, tessellation), in case then subcase order.
    pub fn iter(&self) -> impl Iterator<Item = (CaseConfig, usize, &Tessellation)> {
        CaseConfig::all()
            .zip(self.cases.iter())
            .flat_map(|(config, subcases)| {
                subcases
                    .iter()
                    .enumerate()
                    .map(move |(subcase, t)| (config, subcase, t))
            })
    }

    /// Number of (case, subcase) tessellations.
    pub fn total(&self) -> usize {
        self.cases.iter().map(Vec::len).sum()
    }
}

/// Derives case tessellations from the base table.
pub struct TessellationExpander<'a> {
    group: &'a SymmetryGroup,
    canonical: &'a Canonicalizer,
    resolver: &'a SubcaseResolver,
    base_table: &'a BaseTessellationTable,
}

impl<'a> TessellationExpander<'a> {
    pub fn new(
        group: &'a SymmetryGroup,
        canonical: &'a Canonicalizer,
        resolver: &'a SubcaseResolver,
        base_table: &'a BaseTessellationTable,
    ) -> Self {
        TessellationExpander {
            group,
            canonical,
            resolver,
            base_table,
        }
    }

    /// Tessellation of one (case, subcase).
    pub fn expand_case(&self, config: CaseConfig, subcase: usize) -> GeneratorResult<Tessellation> {
        let record = self.canonical.record(config);
        let rotation = self.group.get(record.rotation);
        let base = self.canonical.base_case(record.base);
        let base_subcase =
            self.resolver
                .sub_case_number_after_permutation(config, subcase, rotation, base)?;
        let inverse = rotation.inverse_vertices();
        let tessellation = self
            .base_table
            .get(record.base, base_subcase)?
            .mapped(|v| inverse[v as usize]);
        trace!(
            "case {} subcase {} from base {} subcase {}: {}",
            config.case_number(),
            subcase,
            base.case_number(),
            base_subcase,
            tessellation
        );
        Ok(tessellation)
    }

    /// Tessellations of every configuration.
    pub fn expand_all(&self) -> GeneratorResult<CaseTessellations> {
        let cases = CaseConfig::all()
            .map(|config| {
                (0..self.resolver.num_sub_cases(config))
                    .map(|subcase| self.expand_case(config, subcase))
                    .collect::<GeneratorResult<Vec<_>>>()
            })
            .collect::<GeneratorResult<Vec<_>>>()?;
        let expanded = CaseTessellations::new(cases);
        info!(
            "[TessellationExpander] {} case tessellations",
            expanded.total()
        );
        Ok(expanded)
    }
}
