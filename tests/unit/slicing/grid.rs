use super::*;
use crate::slicing::config::PixelVec;

fn rects(plan: &GridPlan) -> Vec<SliceRect> {
    plan.bounded_rects().collect()
}

#[test]
fn cell_size_grid_emits_top_row_first() {
    let plan = plan_grid(128, 128, &SliceConfig::by_cell_size(64, 64)).unwrap();
    assert_eq!((plan.cols, plan.rows), (2, 2));
    assert_eq!(plan.rest_y, 0);
    assert_eq!(
        rects(&plan),
        vec![
            SliceRect::new(0, 64, 64, 64),
            SliceRect::new(64, 64, 64, 64),
            SliceRect::new(0, 0, 64, 64),
            SliceRect::new(64, 0, 64, 64),
        ]
    );
}

#[test]
fn cell_count_grid_derives_cell_size() {
    let plan = plan_grid(100, 50, &SliceConfig::by_cell_count(2, 1)).unwrap();
    assert_eq!((plan.cols, plan.rows), (2, 1));
    assert_eq!((plan.slice_width, plan.slice_height), (50, 50));
    assert_eq!(plan.rest_y, 0);
    assert_eq!(
        rects(&plan),
        vec![SliceRect::new(0, 0, 50, 50), SliceRect::new(50, 0, 50, 50)]
    );
}

#[test]
fn cell_count_formula_subtracts_offset_and_padding() {
    let mut cfg = SliceConfig::by_cell_count(3, 2);
    cfg.offset = PixelVec::new(4, 2);
    cfg.padding = PixelVec::new(2, 1);
    let plan = plan_grid(100, 61, &cfg).unwrap();
    // floor((100 - 4) / 3 - 2) = 30, floor((61 - 2) / 2 - 1) = 28
    assert_eq!((plan.slice_width, plan.slice_height), (30, 28));
    assert_eq!((plan.cols, plan.rows), (3, 2));
    assert_eq!(plan.rest_y, 61 % 28);
}

#[test]
fn cell_size_grid_even_division_tiles_image_without_overlap() {
    for (w, h, cw, ch) in [(96u32, 64u32, 32i32, 16i32), (30, 30, 10, 15), (7, 5, 1, 1)] {
        let plan = plan_grid(w, h, &SliceConfig::by_cell_size(cw, ch)).unwrap();
        let out = rects(&plan);
        assert_eq!(out.len() as u64, plan.cell_count());
        assert_eq!(
            out.iter().map(|r| r.area()).sum::<u64>(),
            u64::from(w) * u64::from(h)
        );

        let mut covered = vec![false; (w * h) as usize];
        for r in &out {
            assert!(r.fits_within(w, h));
            for y in r.y..r.y + r.height {
                for x in r.x..r.x + r.width {
                    let idx = (y * w + x) as usize;
                    assert!(!covered[idx], "overlap at {x},{y}");
                    covered[idx] = true;
                }
            }
        }
        assert!(covered.iter().all(|c| *c));
    }
}

#[test]
fn remainder_rows_shift_grid_to_top_edge() {
    // 70 = 2 * 32 + 6: the 6 leftover pixels sit at the bottom.
    let plan = plan_grid(32, 70, &SliceConfig::by_cell_size(32, 32)).unwrap();
    assert_eq!(plan.rest_y, 6);
    assert_eq!(
        rects(&plan),
        vec![SliceRect::new(0, 38, 32, 32), SliceRect::new(0, 6, 32, 32)]
    );
}

#[test]
fn negative_padding_and_offset_are_treated_as_zero() {
    let mut cfg = SliceConfig::by_cell_size(64, 64);
    cfg.padding = PixelVec::new(-5, -1);
    cfg.offset = PixelVec::new(-3, -9);
    let clamped = plan_grid(128, 128, &cfg).unwrap();
    let plain = plan_grid(128, 128, &SliceConfig::by_cell_size(64, 64)).unwrap();
    assert_eq!(rects(&clamped), rects(&plain));
}

#[test]
fn cells_pushed_off_the_image_are_dropped() {
    let mut cfg = SliceConfig::by_cell_size(32, 32);
    cfg.offset = PixelVec::new(8, 0);
    let plan = plan_grid(64, 32, &cfg).unwrap();
    let cells: Vec<GridCell> = plan.cells().collect();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].x, 40);
    assert_eq!(rects(&plan), vec![SliceRect::new(8, 0, 32, 32)]);
}

#[test]
fn planning_is_deterministic() {
    let mut cfg = SliceConfig::by_cell_count(5, 3);
    cfg.padding = PixelVec::new(1, 2);
    cfg.offset = PixelVec::new(3, 1);
    let a = plan_grid(211, 97, &cfg).unwrap();
    let b = plan_grid(211, 97, &cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.cells().collect::<Vec<_>>(),
        b.cells().collect::<Vec<_>>()
    );
}

#[test]
fn degenerate_configs_are_configuration_errors() {
    let bad = [
        (64, 64, SliceConfig::by_cell_size(0, 64)),
        (64, 64, SliceConfig::by_cell_size(16, -1)),
        (64, 64, SliceConfig::by_cell_count(0, 1)),
        (64, 64, SliceConfig::by_cell_count(2, -3)),
        // 64 columns of width 1 minus padding 1 leaves nothing.
        (
            64,
            64,
            SliceConfig {
                padding: PixelVec::new(1, 0),
                ..SliceConfig::by_cell_count(64, 1)
            },
        ),
        (32, 32, SliceConfig::by_cell_size(64, 64)),
        (0, 32, SliceConfig::by_cell_size(8, 8)),
    ];
    for (w, h, cfg) in bad {
        let err = plan_grid(w, h, &cfg).unwrap_err();
        assert!(
            matches!(err, ImporterError::Config(_)),
            "{w}x{h} {cfg:?} -> {err}"
        );
    }
}
