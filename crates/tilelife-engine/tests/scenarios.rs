//! Integration test: classic patterns, border behaviour and commit coverage.

use tilelife_core::{BitPlane, Generation};
use tilelife_engine::{
    CommitTally, Committer, EngineConfig, Handoff, NeighborCounter, PartitionPlan,
    PartitionStrategy, ScratchCounts, StepEngine,
};
use tilelife_test_utils::fixtures::{blinker, blinker_vertical, block, glider, random_soup, seeded};
use tilelife_test_utils::reference_step;

const STRATEGIES: [PartitionStrategy; 4] = [
    PartitionStrategy::Whole,
    PartitionStrategy::Strip { rows: 8 },
    PartitionStrategy::Strip { rows: 3 },
    PartitionStrategy::Block { rows: 5, cols: 4 },
];

fn engine(plane: BitPlane, strategy: PartitionStrategy) -> StepEngine {
    let config = EngineConfig::new(plane.rows(), plane.cols()).with_strategy(strategy);
    StepEngine::with_plane(config, plane).unwrap()
}

// ── Patterns ───────────────────────────────────────────────────────

#[test]
fn blinker_has_period_two() {
    for strategy in STRATEGIES {
        let mut e = engine(seeded(16, 16, &blinker(), 7, 6), strategy);
        e.step();
        assert!(
            blinker_vertical().matches_at(e.current(), 6, 7),
            "{strategy}: expected vertical phase"
        );
        e.step();
        assert!(blinker().matches_at(e.current(), 7, 6), "{strategy}");
    }
}

#[test]
fn block_is_still() {
    for strategy in STRATEGIES {
        for (row, col) in [(0, 0), (6, 6), (7, 7), (14, 14)] {
            let seed = seeded(16, 16, &block(), row, col);
            let mut e = engine(seed.clone(), strategy);
            e.step_n(4);
            assert_eq!(e.current(), &seed, "{strategy} at ({row}, {col})");
        }
    }
}

#[test]
fn device_blinker_and_block() {
    let mut e = StepEngine::new(EngineConfig::default()).unwrap();
    for col in 4..=6 {
        e.set_cell(5, col, true);
    }
    for (row, col) in [(10, 10), (10, 11), (11, 10), (11, 11)] {
        e.set_cell(row, col, true);
    }
    let block_cells = [(10, 10), (10, 11), (11, 10), (11, 11)];

    e.step();
    let live: Vec<(u32, u32)> = e.current().live_cells().collect();
    let mut expected = vec![(4, 5), (5, 5), (6, 5)];
    expected.extend(block_cells);
    assert_eq!(live, expected);

    e.step();
    let live: Vec<(u32, u32)> = e.current().live_cells().collect();
    let mut expected = vec![(5, 4), (5, 5), (5, 6)];
    expected.extend(block_cells);
    assert_eq!(live, expected);
}

#[test]
fn glider_moves_one_diagonal_every_four_generations() {
    for strategy in STRATEGIES {
        let mut e = engine(seeded(32, 32, &glider(), 1, 1), strategy);
        for hop in 1..=6 {
            e.step_n(4);
            assert!(
                glider().matches_at(e.current(), 1 + hop, 1 + hop),
                "{strategy}: glider lost after {} generations",
                e.generation()
            );
        }
        assert_eq!(e.generation(), Generation(24));
    }
}

// ── Borders ────────────────────────────────────────────────────────

#[test]
fn no_wrap_at_edges() {
    // A blinker on the top edge loses its upper half instead of wrapping.
    for strategy in STRATEGIES {
        let mut e = engine(seeded(10, 10, &blinker(), 0, 3), strategy);
        e.step();
        let live: Vec<(u32, u32)> = e.current().live_cells().collect();
        assert_eq!(live, vec![(0, 4), (1, 4)], "{strategy}");
    }
}

#[test]
fn corner_cells_see_only_three_neighbours() {
    // Full 2x2 grid: each cell has exactly three in-grid neighbours.
    let mut plane = BitPlane::new(2, 2).unwrap();
    for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        plane.set(r, c, true);
    }
    let mut e = engine(plane.clone(), PartitionStrategy::Whole);
    e.step();
    assert_eq!(e.current(), &plane);
}

#[test]
fn single_row_and_single_column_grids() {
    for (rows, cols) in [(1, 9), (9, 1), (1, 1)] {
        let seed = random_soup(rows, cols, 0.6, 5);
        for strategy in STRATEGIES {
            let mut e = engine(seed.clone(), strategy);
            e.step();
            assert_eq!(e.current(), &reference_step(&seed), "{rows}x{cols} {strategy}");
        }
    }
}

// ── Commit coverage ────────────────────────────────────────────────

#[test]
fn stale_next_plane_is_fully_overwritten() {
    // Drive the pipeline by hand into a `next` plane full of garbage: every
    // cell must still come out as the reference says.
    let current = random_soup(20, 20, 0.4, 11);
    let plan = PartitionPlan::new(20, 20, PartitionStrategy::Block { rows: 6, cols: 7 }).unwrap();
    let mut scratch = ScratchCounts::new(plan.max_region_area());
    let mut handoff = Handoff::new(plan.cols(), plan.max_region_height());
    let committer = Committer::default();
    let mut next = random_soup(20, 20, 0.5, 12);
    let mut tally = CommitTally::default();

    for region in &plan {
        scratch.begin(region);
        handoff.load(region, &mut scratch);
        NeighborCounter.count(&current, region, &mut scratch);
        handoff.export(region, &scratch);
        tally += committer.commit(&current, &scratch, region, &mut next);
    }

    let expected = reference_step(&current);
    assert_eq!(next, expected);
    assert_eq!(tally.live as usize, expected.population());
}

#[test]
fn every_cell_is_committed_exactly_once() {
    for strategy in STRATEGIES {
        let plan = PartitionPlan::new(23, 19, strategy).unwrap();
        for row in 0..23 {
            for col in 0..19 {
                let owners = plan.iter().filter(|r| r.commits(row, col)).count();
                assert_eq!(owners, 1, "{strategy}: ({row}, {col}) has {owners} owners");
            }
        }
    }
}

#[test]
fn stepping_does_not_touch_cells_it_should_not() {
    // A dead grid with one live still-life far away: only that corner changes.
    let seed = seeded(40, 40, &block(), 30, 30);
    let mut e = engine(seed.clone(), PartitionStrategy::Block { rows: 9, cols: 9 });
    e.step_n(3);
    assert_eq!(e.current(), &seed);
    assert_eq!(e.last_metrics().births + e.last_metrics().deaths, 0);
}
