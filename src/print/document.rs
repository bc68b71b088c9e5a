// SPDX-License-Identifier: MPL-2.0
//! Print-only SVG document, one per page.
//!
//! Each label box carries its text and the captured code as an embedded PNG
//! so the page can be rasterized without touching the on-screen widgets.

use super::layout::{
    Page, PrintLayout, IMAGE_SIZE, ITEM_BORDER, ITEM_HEIGHT, ITEM_PADDING_TOP, ITEM_WIDTH,
    LABEL_FONT_SIZE, LABEL_GAP, LABEL_LETTER_SPACING,
};
use super::sheet::PrintSheet;
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt::Write as _;

/// Builds the SVG markup of one page.
///
/// # Errors
///
/// Returns an error if a snapshot cannot be encoded as PNG or a placement
/// refers to an item missing from the sheet.
pub fn page_svg(sheet: &PrintSheet, page: &Page, layout: &PrintLayout) -> Result<String> {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
        w = layout.page_width,
        h = layout.page_height,
    );
    svg.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

    for placement in &page.placements {
        let item = sheet
            .items()
            .get(placement.item)
            .ok_or_else(|| Error::Print(format!("no label at index {}", placement.item)))?;
        let png = item.snapshot.to_png()?;
        let label_baseline = ITEM_PADDING_TOP + LABEL_FONT_SIZE;
        let image_top = label_baseline + LABEL_GAP;
        let inset = ITEM_BORDER / 2.0;

        let _ = write!(
            svg,
            r##"<g class="qr-item" transform="translate({x} {y})"><rect x="{inset}" y="{inset}" width="{bw}" height="{bh}" fill="#ffffff" stroke="#000000" stroke-width="{border}"/><text x="{cx}" y="{baseline}" font-family="sans-serif" font-size="{font}" letter-spacing="{spacing}" text-anchor="middle" fill="#000000">{label}</text><image x="{ix}" y="{iy}" width="{size}" height="{size}" image-rendering="optimizeSpeed" xlink:href="data:image/png;base64,{data}"/></g>"##,
            x = placement.x,
            y = placement.y,
            bw = ITEM_WIDTH - ITEM_BORDER,
            bh = ITEM_HEIGHT - ITEM_BORDER,
            border = ITEM_BORDER,
            cx = ITEM_WIDTH / 2.0,
            baseline = label_baseline,
            font = LABEL_FONT_SIZE,
            spacing = LABEL_LETTER_SPACING,
            label = escape_xml(&item.label),
            ix = (ITEM_WIDTH - IMAGE_SIZE) / 2.0,
            iy = image_top,
            size = IMAGE_SIZE,
            data = STANDARD.encode(png),
        );
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Builds every page of `sheet`.
///
/// # Errors
///
/// See [`page_svg`].
pub fn render_pages(sheet: &PrintSheet, layout: &PrintLayout) -> Result<Vec<String>> {
    layout
        .paginate(sheet.len())
        .iter()
        .map(|page| page_svg(sheet, page, layout))
        .collect()
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
