use super::*;

fn opaque_except(width: u32, height: u32, blank: &[SliceRect]) -> Bitmap {
    let mut bmp = Bitmap::filled(width, height, Color::WHITE);
    for r in blank {
        for row in 0..r.height {
            for col in 0..r.width {
                // Bottom-up rect row -> native top-down row.
                let y = height - r.y - r.height + row;
                bmp.set(r.x + col, y, Color::CLEAR);
            }
        }
    }
    bmp
}

#[test]
fn names_and_indices_are_dense_after_blank_filtering() {
    // Top-right cell of a 2x2 grid is blank.
    let img = opaque_except(64, 64, &[SliceRect::new(32, 32, 32, 32)]);
    let cfg = SliceConfig::by_cell_size(32, 32);
    let slices = slice_texture("hero", &img, None, &cfg).unwrap();

    let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["hero_0", "hero_1", "hero_2"]);
    assert_eq!(
        slices.iter().map(|s| s.rect).collect::<Vec<_>>(),
        vec![
            SliceRect::new(0, 32, 32, 32),
            SliceRect::new(0, 0, 32, 32),
            SliceRect::new(32, 0, 32, 32),
        ]
    );
    assert!(slices.iter().enumerate().all(|(i, s)| s.index == i));
}

#[test]
fn blank_slices_kept_when_requested() {
    let img = Bitmap::filled(32, 32, Color::CLEAR);
    let mut cfg = SliceConfig::by_cell_size(32, 32);
    assert!(slice_texture("t", &img, None, &cfg).unwrap().is_empty());

    cfg.include_blank_slices = true;
    let slices = slice_texture("t", &img, None, &cfg).unwrap();
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].rect, SliceRect::full(32, 32));
}

#[test]
fn single_opaque_pixel_makes_slice_non_blank() {
    let mut img = Bitmap::filled(16, 16, Color::CLEAR);
    img.set(15, 15, Color::new(0.0, 0.0, 0.0, 0.01));
    let slices = slice_texture("t", &img, None, &SliceConfig::by_cell_size(8, 8)).unwrap();
    // Native (15, 15) is the bottom-right cell, emitted last in the grid.
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].rect, SliceRect::new(8, 0, 8, 8));
    assert_eq!(slices[0].name, "t_0");
}

#[test]
fn default_pivot_and_border_are_copied_onto_slices() {
    let img = Bitmap::filled(32, 16, Color::WHITE);
    let mut cfg = SliceConfig::by_cell_count(2, 1);
    cfg.pivot.alignment = SpriteAlignment::BottomLeft;
    cfg.pivot.pivot = Vec2::new(0.25, 0.75);
    cfg.border = Border {
        left: 1.0,
        bottom: 2.0,
        right: 3.0,
        top: 4.0,
    };
    let slices = slice_texture("t", &img, None, &cfg).unwrap();
    assert_eq!(slices.len(), 2);
    for s in &slices {
        assert_eq!(s.alignment, SpriteAlignment::BottomLeft);
        assert_eq!(s.pivot, Vec2::new(0.25, 0.75));
        assert_eq!(s.border, cfg.border);
    }
}

#[test]
fn pivot_map_overrides_pivot_per_slice() {
    let img = Bitmap::filled(20, 10, Color::WHITE);
    let mut map = Bitmap::filled(20, 10, Color::CLEAR);
    // Left cell: marker at local (5, 2); right cell has no marker.
    map.set(5, 2, Color::RED);

    let mut cfg = SliceConfig::by_cell_size(10, 10);
    cfg.pivot_map_enabled = true;
    let slices = slice_texture("t", &img, Some(&map), &cfg).unwrap();
    assert_eq!(slices.len(), 2);

    assert_eq!(slices[0].alignment, SpriteAlignment::Custom);
    assert_eq!(slices[0].pivot, Vec2::new(0.5, 0.2));
    assert_eq!(slices[1].alignment, SpriteAlignment::Center);
    assert_eq!(slices[1].pivot, Vec2::new(0.5, 0.5));
}

#[test]
fn pivot_map_ignored_when_disabled() {
    let img = Bitmap::filled(10, 10, Color::WHITE);
    let mut map = Bitmap::filled(10, 10, Color::CLEAR);
    map.set(1, 1, Color::RED);

    let cfg = SliceConfig::by_cell_size(10, 10);
    let slices = slice_texture("t", &img, Some(&map), &cfg).unwrap();
    assert_eq!(slices[0].alignment, SpriteAlignment::Center);
}

#[test]
fn configuration_errors_propagate() {
    let img = Bitmap::filled(10, 10, Color::WHITE);
    let err = slice_texture("t", &img, None, &SliceConfig::by_cell_count(0, 0)).unwrap_err();
    assert!(matches!(err, ImporterError::Config(_)));
}

#[test]
fn is_blank_requires_zero_alpha_everywhere() {
    assert!(is_blank(&[]));
    assert!(is_blank(&[Color::CLEAR, Color::new(1.0, 1.0, 1.0, 0.0)]));
    assert!(!is_blank(&[Color::CLEAR, Color::RED]));
}
