use crate::{
    foundation::core::SliceRect,
    foundation::error::{ImporterError, ImporterResult},
    foundation::math::floor_div,
    slicing::config::{SliceConfig, SliceMode},
};

/// One candidate cell of a slicing grid, before bounds validation.
///
/// Coordinates are signed: offsets and padding can push trailing cells off the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Row index, 0 is the top visual row.
    pub row: u32,
    /// Column index, 0 is the leftmost column.
    pub col: u32,
    /// Left edge.
    pub x: i64,
    /// Bottom edge, counted from the bottom of the image.
    pub y: i64,
    /// Cell width.
    pub width: u32,
    /// Cell height.
    pub height: u32,
}

impl GridCell {
    /// The cell as a [`SliceRect`] if it lies fully inside the image.
    pub fn bounded(&self, image_width: u32, image_height: u32) -> Option<SliceRect> {
        let (img_w, img_h) = (i64::from(image_width), i64::from(image_height));
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let inside = self.x >= 0
            && self.x <= img_w
            && self.x + w <= img_w
            && self.y >= 0
            && self.y <= img_h
            && self.y + h <= img_h;
        inside.then(|| SliceRect::new(self.x as u32, self.y as u32, self.width, self.height))
    }
}

/// Resolved slicing grid for one image.
///
/// Cells are produced lazily in emission order: rows outer (top visual row first), columns
/// inner (left to right).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPlan {
    /// Source image width.
    pub image_width: u32,
    /// Source image height.
    pub image_height: u32,
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
    /// Resolved cell width.
    pub slice_width: u32,
    /// Resolved cell height.
    pub slice_height: u32,
    /// `image_height mod slice_height`, folded into every row's `y`.
    pub rest_y: u32,
    padding: (i64, i64),
    offset: (i64, i64),
}

impl GridPlan {
    /// All candidate cells in emission order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| self.cell(row, col)))
    }

    /// Candidate cells that fit inside the image, in emission order.
    pub fn bounded_rects(&self) -> impl Iterator<Item = SliceRect> + '_ {
        self.cells().filter_map(|cell| {
            let rect = cell.bounded(self.image_width, self.image_height);
            if rect.is_none() {
                tracing::debug!(
                    row = cell.row,
                    col = cell.col,
                    x = cell.x,
                    y = cell.y,
                    "grid cell outside image bounds, dropped"
                );
            }
            rect
        })
    }

    /// Total number of candidate cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.cols) * u64::from(self.rows)
    }

    fn cell(&self, row: u32, col: u32) -> GridCell {
        let (pad_x, pad_y) = self.padding;
        let (off_x, off_y) = self.offset;
        let (sw, sh) = (i64::from(self.slice_width), i64::from(self.slice_height));
        let (i, j) = (i64::from(col), i64::from(row));
        let rows = i64::from(self.rows);

        // Rows run top to bottom while y grows upwards; rest_y re-anchors the grid at the top.
        let x = i * (sw + pad_x) + off_x;
        let y = (rows - j - 1) * sh - j * pad_y + i64::from(self.rest_y) - off_y;

        GridCell {
            row,
            col,
            x,
            y,
            width: self.slice_width,
            height: self.slice_height,
        }
    }
}

/// Resolve the slicing grid for a `image_width x image_height` image.
///
/// Fails with [`ImporterError::Config`] when the grid would have no columns or rows, or when
/// the resolved cell size is not positive.
#[tracing::instrument(skip(config), fields(mode = ?config.mode))]
pub fn plan_grid(
    image_width: u32,
    image_height: u32,
    config: &SliceConfig,
) -> ImporterResult<GridPlan> {
    if image_width == 0 || image_height == 0 {
        return Err(ImporterError::config(format!(
            "cannot slice a {image_width}x{image_height} image"
        )));
    }

    let (img_w, img_h) = (i64::from(image_width), i64::from(image_height));
    let padding = config.padding.clamped();
    let offset = config.offset.clamped();

    let (cols, rows, slice_w, slice_h) = match config.mode {
        SliceMode::ByCellCount => {
            if config.cols <= 0 || config.rows <= 0 {
                return Err(ImporterError::config(format!(
                    "grid must have at least one column and row, got {}x{}",
                    config.cols, config.rows
                )));
            }
            let (cols, rows) = (i64::from(config.cols), i64::from(config.rows));
            let w = floor_div(img_w - offset.0, cols) - padding.0;
            let h = floor_div(img_h - offset.1, rows) - padding.1;
            (cols, rows, w, h)
        }
        SliceMode::ByCellSize => {
            let (w, h) = (i64::from(config.slice_width), i64::from(config.slice_height));
            if w <= 0 || h <= 0 {
                return Err(ImporterError::config(format!(
                    "cell size must be positive, got {w}x{h}"
                )));
            }
            (img_w / w, img_h / h, w, h)
        }
    };

    if slice_w <= 0 || slice_h <= 0 {
        return Err(ImporterError::config(format!(
            "resolved cell size {slice_w}x{slice_h} is not positive for a {image_width}x{image_height} image"
        )));
    }
    if cols <= 0 || rows <= 0 {
        return Err(ImporterError::config(format!(
            "cell size {slice_w}x{slice_h} does not fit in a {image_width}x{image_height} image"
        )));
    }

    // Both counts and sizes are bounded by the image dimensions at this point.
    let plan = GridPlan {
        image_width,
        image_height,
        cols: cols as u32,
        rows: rows as u32,
        slice_width: slice_w as u32,
        slice_height: slice_h as u32,
        rest_y: (img_h % slice_h) as u32,
        padding,
        offset,
    };
    tracing::debug!(
        cols = plan.cols,
        rows = plan.rows,
        slice_width = plan.slice_width,
        slice_height = plan.slice_height,
        rest_y = plan.rest_y,
        "resolved slicing grid"
    );
    Ok(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/slicing/grid.rs"]
mod tests;
