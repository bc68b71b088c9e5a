// SPDX-License-Identifier: MPL-2.0
//! Page layout for printed labels.
//!
//! Every label has the same fixed box. Pages hold only whole boxes, so a
//! label never splits across two pages. Rows are centered horizontally,
//! including a shorter last row.

/// Outer width of one label box in pixels.
pub const ITEM_WIDTH: f32 = 200.0;
/// Outer height of one label box in pixels.
pub const ITEM_HEIGHT: f32 = 140.0;
/// Space around each label box.
pub const ITEM_MARGIN: f32 = 8.0;
/// Border stroke width of a label box.
pub const ITEM_BORDER: f32 = 2.0;
/// Inner padding above the label text.
pub const ITEM_PADDING_TOP: f32 = 6.0;
/// Side length of the printed code.
pub const IMAGE_SIZE: f32 = 100.0;
/// Gap between label text and code.
pub const LABEL_GAP: f32 = 6.0;
pub const LABEL_FONT_SIZE: f32 = 13.0;
pub const LABEL_LETTER_SPACING: f32 = 0.4;

/// Page geometry in CSS pixels (96 dpi).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintLayout {
    pub page_width: f32,
    pub page_height: f32,
    /// Blank border kept free on every page edge.
    pub page_padding: f32,
    /// Rasterization factor applied to the page when producing pixels.
    pub scale: f32,
}

impl Default for PrintLayout {
    fn default() -> Self {
        Self {
            page_width: crate::config::DEFAULT_PAGE_WIDTH,
            page_height: crate::config::DEFAULT_PAGE_HEIGHT,
            page_padding: crate::config::DEFAULT_PAGE_PADDING,
            scale: crate::config::DEFAULT_PRINT_SCALE,
        }
    }
}

/// Top-left corner of one label on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the print sheet.
    pub item: usize,
    pub x: f32,
    pub y: f32,
}

/// Labels placed on one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub placements: Vec<Placement>,
}

impl PrintLayout {
    fn cell_width() -> f32 {
        ITEM_WIDTH + 2.0 * ITEM_MARGIN
    }

    fn cell_height() -> f32 {
        ITEM_HEIGHT + 2.0 * ITEM_MARGIN
    }

    /// Labels per row; at least one even on pages narrower than a label.
    #[must_use]
    pub fn columns(&self) -> usize {
        let usable = self.page_width - 2.0 * self.page_padding;
        ((usable / Self::cell_width()).floor() as usize).max(1)
    }

    /// Rows per page; at least one even on pages shorter than a label.
    #[must_use]
    pub fn rows(&self) -> usize {
        let usable = self.page_height - 2.0 * self.page_padding;
        ((usable / Self::cell_height()).floor() as usize).max(1)
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Distributes `count` labels over as many pages as needed.
    #[must_use]
    pub fn paginate(&self, count: usize) -> Vec<Page> {
        let columns = self.columns();
        let per_page = self.items_per_page();

        (0..count)
            .collect::<Vec<_>>()
            .chunks(per_page)
            .map(|chunk| {
                let placements = chunk
                    .chunks(columns)
                    .enumerate()
                    .flat_map(|(row, items)| {
                        let row_width = items.len() as f32 * Self::cell_width();
                        let left = ((self.page_width - row_width) / 2.0).max(0.0);
                        let top = self.page_padding + row as f32 * Self::cell_height();
                        items.iter().enumerate().map(move |(col, &item)| Placement {
                            item,
                            x: left + col as f32 * Self::cell_width() + ITEM_MARGIN,
                            y: top + ITEM_MARGIN,
                        })
                    })
                    .collect();
                Page { placements }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_fits_three_columns_and_six_rows() {
        let layout = PrintLayout::default();
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.rows(), 6);
        assert_eq!(layout.items_per_page(), 18);
    }

    #[test]
    fn no_labels_means_no_pages() {
        assert!(PrintLayout::default().paginate(0).is_empty());
    }

    #[test]
    fn overflow_starts_a_new_page() {
        let layout = PrintLayout::default();
        let pages = layout.paginate(19);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].placements.len(), 18);
        assert_eq!(pages[1].placements.len(), 1);
        assert_eq!(pages[1].placements[0].item, 18);
    }

    #[test]
    fn labels_stay_inside_the_page() {
        let layout = PrintLayout::default();
        for page in layout.paginate(40) {
            for p in page.placements {
                assert!(p.x >= 0.0);
                assert!(p.y >= 0.0);
                assert!(p.x + ITEM_WIDTH <= layout.page_width);
                assert!(p.y + ITEM_HEIGHT <= layout.page_height);
            }
        }
    }

    #[test]
    fn single_label_is_centered() {
        let layout = PrintLayout::default();
        let pages = layout.paginate(1);
        let p = pages[0].placements[0];
        let right_gap = layout.page_width - (p.x + ITEM_WIDTH);
        assert!((p.x - right_gap).abs() < 0.001);
    }

    #[test]
    fn tiny_page_still_holds_one_label() {
        let layout = PrintLayout {
            page_width: 50.0,
            page_height: 50.0,
            page_padding: 0.0,
            scale: 1.0,
        };
        assert_eq!(layout.items_per_page(), 1);
        assert_eq!(layout.paginate(3).len(), 3);
    }

    #[test]
    fn items_keep_sheet_order() {
        let pages = PrintLayout::default().paginate(20);
        let order: Vec<usize> = pages
            .iter()
            .flat_map(|page| page.placements.iter().map(|p| p.item))
            .collect();
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }
}
