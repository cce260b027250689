use crate::foundation::core::{Border, Color, Vec2};

/// How the slicing grid is sized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceMode {
    /// Fixed cell size; column and row counts are derived from the image size.
    #[default]
    ByCellSize,
    /// Fixed column and row counts; the cell size is derived from the image size.
    ByCellCount,
}

/// Signed integer pair used for padding and offset.
///
/// Negative components are accepted on input and treated as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelVec {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl PixelVec {
    /// Build a pair.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Components clamped to `>= 0`, widened for grid arithmetic.
    pub fn clamped(self) -> (i64, i64) {
        (i64::from(self.x.max(0)), i64::from(self.y.max(0)))
    }
}

/// Named sprite anchor.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SpriteAlignment {
    /// Middle of the sprite.
    #[default]
    Center,
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    Left,
    /// Middle of the right edge.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    Bottom,
    /// Bottom-right corner.
    BottomRight,
    /// Use the explicit pivot fraction.
    Custom,
}

impl SpriteAlignment {
    /// Normalized anchor for named alignments (origin bottom-left); `None` for `Custom`.
    pub fn anchor(self) -> Option<Vec2> {
        let (x, y) = match self {
            Self::Center => (0.5, 0.5),
            Self::TopLeft => (0.0, 1.0),
            Self::Top => (0.5, 1.0),
            Self::TopRight => (1.0, 1.0),
            Self::Left => (0.0, 0.5),
            Self::Right => (1.0, 0.5),
            Self::BottomLeft => (0.0, 0.0),
            Self::Bottom => (0.5, 0.0),
            Self::BottomRight => (1.0, 0.0),
            Self::Custom => return None,
        };
        Some(Vec2::new(x, y))
    }
}

/// Default pivot applied to slices without a pivot-map match.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PivotSettings {
    /// Alignment tag.
    pub alignment: SpriteAlignment,
    /// Pivot fraction used when `alignment` is `Custom`.
    pub pivot: Vec2,
}

impl Default for PivotSettings {
    fn default() -> Self {
        Self {
            alignment: SpriteAlignment::Center,
            pivot: Vec2::new(0.5, 0.5),
        }
    }
}

/// Everything the grid planner and slicer need for one texture.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SliceConfig {
    /// How the grid is sized.
    pub mode: SliceMode,
    /// Cell width (`ByCellSize`).
    pub slice_width: i32,
    /// Cell height (`ByCellSize`).
    pub slice_height: i32,
    /// Column count (`ByCellCount`).
    pub cols: i32,
    /// Row count (`ByCellCount`).
    pub rows: i32,
    /// Gap between cells.
    pub padding: PixelVec,
    /// Grid origin offset.
    pub offset: PixelVec,
    /// Border copied onto every slice.
    pub border: Border,
    /// Keep fully transparent slices.
    pub include_blank_slices: bool,
    /// Default pivot for every slice.
    pub pivot: PivotSettings,
    /// Look up per-slice pivots in a companion pivot map.
    pub pivot_map_enabled: bool,
    /// Marker color searched for in the pivot map.
    pub pivot_map_color: Color,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            mode: SliceMode::ByCellSize,
            slice_width: 64,
            slice_height: 64,
            cols: 1,
            rows: 1,
            padding: PixelVec::default(),
            offset: PixelVec::default(),
            border: Border::default(),
            include_blank_slices: false,
            pivot: PivotSettings::default(),
            pivot_map_enabled: false,
            pivot_map_color: Color::RED,
        }
    }
}

impl SliceConfig {
    /// Fixed-size grid of `width x height` cells.
    pub fn by_cell_size(width: i32, height: i32) -> Self {
        Self {
            mode: SliceMode::ByCellSize,
            slice_width: width,
            slice_height: height,
            ..Self::default()
        }
    }

    /// Grid of `cols x rows` cells.
    pub fn by_cell_count(cols: i32, rows: i32) -> Self {
        Self {
            mode: SliceMode::ByCellCount,
            cols,
            rows,
            ..Self::default()
        }
    }
}
