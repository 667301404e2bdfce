// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hand-authored tessellations of the base cases.
//!
//! One entry per base case, in base case order, with one tessellation per
//! subcase in the base case's own corner numbering. Merged subcases name each
//! merged vertex by any corner of its class; the validator identifies them.
//!
//! Every entry here is checked by the validator before anything is emitted,
//! both as written and carried to each of its rotated images.

use log::info;

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::{CaseConfig, Tessellation};
use crate::memo::{Canonicalizer, SubcaseResolver};

/// Raw tessellations of one base case.
#[derive(Debug, Clone, Copy)]
pub struct BaseEntry {
    pub case: u8,
    pub subcases: &'static [&'static [&'static [u8]]],
}

/// The raw base case data.
pub const BASE_TESSELLATIONS: [BaseEntry; 23] = [
    BaseEntry { case: 0, subcases: &[] },
    // corner 0 refined: three pyramids apexed at corner 0
    BaseEntry {
        case: 1,
        subcases: &[
            &[&[1, 5, 6, 2, 0], &[2, 6, 7, 3, 0], &[4, 7, 6, 5, 0]],
        ],
    },
    BaseEntry {
        case: 3,
        subcases: &[
            &[&[0, 7, 3, 1, 6, 2], &[0, 4, 7, 1, 5, 6]],
            &[&[0, 1, 2, 6], &[0, 1, 6, 4]],
        ],
    },
    BaseEntry {
        case: 5,
        subcases: &[
            &[&[0, 1, 2, 5], &[0, 2, 3, 7], &[0, 2, 7, 4], &[0, 2, 4, 5], &[4, 7, 6, 5, 2]],
        ],
    },
    // TODO: degenerate cell. This is the only convex filling of case 7's
    // boundary found by tests/tiling_test.rs; confirm it against a reference
    // stitching table before relying on it.
    BaseEntry {
        case: 7,
        subcases: &[
            &[&[0, 1, 2, 7, 4, 5, 6], &[0, 2, 3, 7]],
        ],
    },
    // one face refined; subcases merge along no axis, X, Y, then both
    BaseEntry {
        case: 15,
        subcases: &[
            &[&[0, 1, 2, 3, 4, 5, 6, 7]],
            &[&[0, 1, 4, 3, 2, 6]],
            &[&[0, 4, 3, 1, 5, 2]],
            &[&[0, 1, 2, 3, 4]],
        ],
    },
    BaseEntry {
        case: 20,
        subcases: &[
            &[
                &[0, 1, 2, 4],
                &[0, 2, 3, 4],
                &[1, 2, 4, 5],
                &[2, 3, 4, 7],
                &[2, 4, 5, 6],
                &[2, 4, 6, 7],
            ],
        ],
    },
    BaseEntry {
        case: 21,
        subcases: &[
            &[&[0, 4, 5, 1, 2], &[0, 3, 7, 4, 2], &[2, 4, 5, 6], &[2, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 23,
        subcases: &[
            &[&[0, 1, 2, 4], &[0, 3, 7, 4, 2], &[1, 5, 6, 2, 4], &[2, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 26,
        subcases: &[
            &[&[0, 1, 3, 4], &[1, 2, 3, 6], &[1, 3, 4, 6], &[1, 4, 5, 6], &[3, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 27,
        subcases: &[
            &[&[0, 1, 3, 4], &[1, 2, 3, 6], &[1, 3, 4, 6], &[1, 4, 5, 6], &[3, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 29,
        subcases: &[
            &[&[0, 4, 5, 1, 2], &[0, 2, 3, 4], &[2, 6, 7, 3, 4], &[2, 4, 5, 6]],
        ],
    },
    BaseEntry {
        case: 30,
        subcases: &[
            &[&[0, 1, 3, 4], &[1, 2, 3, 4], &[1, 5, 6, 2, 4], &[2, 6, 7, 3, 4]],
        ],
    },
    BaseEntry {
        case: 31,
        subcases: &[
            &[&[0, 1, 2, 3, 4], &[1, 5, 6, 2, 4], &[2, 6, 7, 3, 4]],
        ],
    },
    BaseEntry {
        case: 60,
        subcases: &[
            &[&[0, 4, 3, 1, 5, 2], &[2, 6, 5, 3, 7, 4]],
            &[&[0, 4, 6, 2, 3], &[0, 2, 6, 4, 5]],
        ],
    },
    BaseEntry {
        case: 61,
        subcases: &[
            &[&[0, 1, 2, 5], &[2, 5, 4, 3, 0], &[2, 6, 5, 3, 7, 4]],
        ],
    },
    BaseEntry {
        case: 63,
        subcases: &[
            &[&[0, 4, 3, 1, 5, 2], &[2, 6, 5, 3, 7, 4]],
            &[&[0, 4, 3, 1, 5, 2], &[2, 3, 4, 5, 6]],
        ],
    },
    BaseEntry {
        case: 90,
        subcases: &[
            &[&[0, 1, 3, 4], &[1, 2, 3, 6], &[1, 3, 4, 6], &[1, 4, 5, 6], &[3, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 91,
        subcases: &[
            &[&[0, 1, 3, 4], &[1, 2, 3, 6], &[1, 3, 4, 6], &[1, 4, 5, 6], &[3, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 95,
        subcases: &[
            &[&[0, 1, 2, 3, 4], &[1, 2, 4, 6], &[1, 4, 5, 6], &[2, 3, 4, 6], &[3, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 125,
        subcases: &[
            &[&[0, 1, 2, 5], &[0, 4, 6, 2, 3], &[0, 2, 6, 4, 5], &[3, 4, 6, 7]],
        ],
    },
    BaseEntry {
        case: 127,
        subcases: &[
            &[&[3, 2, 6, 4, 0, 1, 5], &[3, 4, 6, 7]],
        ],
    },
    // fully refined
    BaseEntry {
        case: 255,
        subcases: &[
            &[&[0, 1, 2, 3, 4, 5, 6, 7]],
        ],
    },
];

/// Base case tessellations, checked against the canonical base cases.
#[derive(Debug, Clone)]
pub struct BaseTessellationTable {
    entries: Vec<Vec<Tessellation>>,
}

impl BaseTessellationTable {
    /// Load [`BASE_TESSELLATIONS`].
    pub fn load(canonical: &Canonicalizer, resolver: &SubcaseResolver) -> GeneratorResult<Self> {
        Self::from_entries(&BASE_TESSELLATIONS, canonical, resolver)
    }

    /// Load an explicit table. Entry `i` must be base case `i` and carry
    /// one tessellation per subcase.
    pub fn from_entries(
        raw: &[BaseEntry],
        canonical: &Canonicalizer,
        resolver: &SubcaseResolver,
    ) -> GeneratorResult<Self> {
        let mut entries = Vec::with_capacity(canonical.base_cases().len());
        for (index, &base) in canonical.base_cases().iter().enumerate() {
            let entry = raw.get(index).ok_or(GeneratorError::MissingSubcase {
                base: base.case_number(),
                subcase: 0,
            })?;
            if entry.case as usize != base.case_number() {
                return Err(GeneratorError::BaseTableMismatch {
                    index,
                    found: entry.case as usize,
                    expected: base.case_number(),
                });
            }
            let needed = resolver.num_sub_cases(base);
            if entry.subcases.len() < needed {
                return Err(GeneratorError::MissingSubcase {
                    base: base.case_number(),
                    subcase: entry.subcases.len(),
                });
            }
            let tessellations = entry.subcases[..needed]
                .iter()
                .map(|lists| Tessellation::from_lists(lists))
                .collect::<GeneratorResult<Vec<_>>>()?;
            entries.push(tessellations);
        }
        info!(
            "[BaseTessellationTable] {} base cases, {} subcase tessellations",
            entries.len(),
            entries.iter().map(Vec::len).sum::<usize>()
        );
        Ok(BaseTessellationTable { entries })
    }

    /// Tessellation of subcase `subcase` of base case number `base`.
    pub fn get(&self, base: usize, subcase: usize) -> GeneratorResult<&Tessellation> {
        self.entries
            .get(base)
            .and_then(|subcases| subcases.get(subcase))
            .ok_or(GeneratorError::MissingSubcase { base, subcase })
    }

    /// Every subcase tessellation of one base case.
    pub fn subcases(&self, base: usize) -> &[Tessellation] {
        self.entries.get(base).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Base case `config`'s raw entry, if `config` is a base case.
pub fn raw_entry(config: CaseConfig) -> Option<&'static BaseEntry> {
    BASE_TESSELLATIONS
        .iter()
        .find(|entry| entry.case as usize == config.case_number())
}
