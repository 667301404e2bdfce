// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the full pipeline: group, canonical cover, subcases,
//! expansion and validation.

mod common;

use amr_stitch_tables::error::GeneratorError;
use amr_stitch_tables::memo::{BaseEntry, BaseTessellationTable, BASE_TESSELLATIONS};
use amr_stitch_tables::symmetry::SymmetryGroup;
use amr_stitch_tables::tessellation::{DefectKind, Validator};
use amr_stitch_tables::{CaseConfig, CaseTables, MemoizedData, Shape};

use common::{tables, SINGLE_FACE_CASES};

#[test]
fn test_group_is_closed() {
    let group = SymmetryGroup::generate().unwrap();
    assert_eq!(group.len(), 24);
    for a in group.iter() {
        for b in group.iter() {
            assert!(group.index_of(&a.then(b)).is_some());
        }
    }
}

#[test]
fn test_every_case_has_one_record() {
    let memo = &tables().memo;
    for config in CaseConfig::all() {
        let record = memo.canonical.record(config);
        let base = memo.canonical.base_case(record.base);
        let rotation = memo.group.get(record.rotation);
        assert_eq!(base.permuted(&rotation.vertices), config);
    }
}

#[test]
fn test_every_subcase_is_watertight() {
    let tables = tables();
    let validator = Validator::new(&tables.memo.faces, &tables.memo.subcases);
    let mut checked = 0;
    for (config, subcase, tessellation) in tables.tessellations.iter() {
        let defects = validator.check(config, subcase, tessellation).unwrap();
        assert!(defects.is_empty(), "{defects:?}");
        checked += 1;
    }
    assert_eq!(checked, 303);
}

#[test]
fn test_empty_and_full_cases() {
    let tables = tables();
    assert!(tables.tessellations.subcases(CaseConfig::EMPTY).is_empty());
    assert_eq!(tables.output.case_stream_offsets[0], [-1; 4]);

    let full = tables.tessellations.subcases(CaseConfig::FULL);
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].len(), 1);
    assert_eq!(full[0].polyhedra()[0].vertices(), &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_single_corner_case() {
    let t = tables()
        .tessellations
        .get(CaseConfig::new(1), 0)
        .unwrap();
    assert_eq!(t.len(), 3);
    assert!(t.polyhedra().iter().all(|p| p.shape() == Shape::Pyramid));
}

#[test]
fn test_single_face_cases_have_four_subcases() {
    let tables = tables();
    let memo = &tables.memo;
    let validator = Validator::new(&memo.faces, &memo.subcases);
    for bits in SINGLE_FACE_CASES {
        let config = CaseConfig::new(bits);
        let record = memo.canonical.record(config);
        let base = memo.canonical.base_case(record.base);
        let rotation = memo.group.get(record.rotation);
        assert_eq!(base.bits(), 15);

        let mut reached: Vec<usize> = (0..4)
            .map(|s| {
                memo.subcases
                    .sub_case_number_after_permutation(config, s, rotation, base)
                    .unwrap()
            })
            .collect();
        reached.sort_unstable();
        assert_eq!(reached, vec![0, 1, 2, 3]);

        let subcases = tables.tessellations.subcases(config);
        assert_eq!(subcases.len(), 4);
        for (s, t) in subcases.iter().enumerate() {
            assert!(validator.check(config, s, t).unwrap().is_empty());
        }
        assert_eq!(subcases[0].polyhedra()[0].shape(), Shape::Hexahedron);
        assert_eq!(subcases[3].polyhedra()[0].shape(), Shape::Pyramid);
    }
}

#[test]
fn test_corrupted_base_table_is_rejected() {
    const TWO_PYRAMIDS: &[&[&[u8]]] = &[&[&[1, 5, 6, 2, 0], &[2, 6, 7, 3, 0]]];

    let mut memo = MemoizedData::initialize().unwrap();
    let mut raw = BASE_TESSELLATIONS;
    raw[1] = BaseEntry {
        case: 1,
        subcases: TWO_PYRAMIDS,
    };
    memo.base_table =
        BaseTessellationTable::from_entries(&raw, &memo.canonical, &memo.subcases).unwrap();

    match CaseTables::with_memo(memo) {
        Err(GeneratorError::Watertightness(report)) => {
            assert!(report.mentions_case(1));
            assert!(report.defects().iter().all(|d| d.case == 1));
        }
        other => panic!("expected a watertightness error, got {other:?}"),
    }
}

#[test]
fn test_inverted_cell_is_rejected() {
    const INVERTED: &[&[&[u8]]] = &[&[&[4, 5, 6, 7, 0, 1, 2, 3]]];

    let mut memo = MemoizedData::initialize().unwrap();
    let mut raw = BASE_TESSELLATIONS;
    raw[22] = BaseEntry {
        case: 255,
        subcases: INVERTED,
    };
    memo.base_table =
        BaseTessellationTable::from_entries(&raw, &memo.canonical, &memo.subcases).unwrap();
    let err = CaseTables::with_memo(memo).unwrap_err();
    assert!(err.to_string().contains("case 255"));
}

#[test]
fn test_degenerate_cell_is_rejected() {
    // Corners 0, 1, 2 and 3 all lie in the bottom face.
    const FLAT: &[&[&[u8]]] = &[&[&[0, 1, 2, 7, 4, 5, 6], &[0, 2, 3, 1]]];

    let mut memo = MemoizedData::initialize().unwrap();
    let mut raw = BASE_TESSELLATIONS;
    assert_eq!(raw[4].case, 7);
    raw[4] = BaseEntry {
        case: 7,
        subcases: FLAT,
    };
    memo.base_table =
        BaseTessellationTable::from_entries(&raw, &memo.canonical, &memo.subcases).unwrap();

    match CaseTables::with_memo(memo) {
        Err(GeneratorError::Watertightness(report)) => {
            assert!(report.mentions_case(7));
            assert!(report.defects().iter().any(|d| d.case == 7
                && matches!(d.kind, DefectKind::NonPositiveVolume { volume6: 0, .. })));
        }
        other => panic!("expected a watertightness error, got {other:?}"),
    }
}
