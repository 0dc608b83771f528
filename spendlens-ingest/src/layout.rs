//! Row reconstruction: recover reading-order text lines from positioned
//! fragments that carry no explicit line breaks.

use crate::types::{Page, TextFragment};

/// Fragments whose y differs from a row's anchor by less than this many
/// layout units belong to the same visual row.
const Y_TOLERANCE: f64 = 5.0;

struct Row<'a> {
    /// y of the row's first fragment. Membership is tested against this
    /// anchor, never against a recomputed centroid, so assignment is
    /// order-dependent by construction.
    y: f64,
    fragments: Vec<&'a TextFragment>,
}

/// Rebuild one page's text lines, top-to-bottom, left-to-right.
///
/// Single-pass clustering: each fragment joins the first row whose anchor
/// y is within tolerance, or opens a new row. Rows are then ordered by
/// descending y (PDF origin is bottom-left), fragments within a row by
/// ascending x, and each row is serialized with single-space joins.
pub fn reconstruct_page_lines(page: &Page) -> Vec<String> {
    let mut rows: Vec<Row> = Vec::new();

    for fragment in &page.fragments {
        match rows
            .iter_mut()
            .find(|row| (row.y - fragment.y).abs() < Y_TOLERANCE)
        {
            Some(row) => row.fragments.push(fragment),
            None => rows.push(Row {
                y: fragment.y,
                fragments: vec![fragment],
            }),
        }
    }

    // Stable sorts keep arrival order for exact ties.
    rows.sort_by(|a, b| b.y.total_cmp(&a.y));

    rows.into_iter()
        .map(|mut row| {
            row.fragments.sort_by(|a, b| a.x.total_cmp(&b.x));
            row.fragments
                .iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Concatenate reconstructed lines across all pages, in page order.
pub fn assemble_lines(pages: &[Page]) -> Vec<String> {
    pages.iter().flat_map(reconstruct_page_lines).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f64, y: f64) -> TextFragment {
        TextFragment::new(text, x, y)
    }

    #[test]
    fn test_empty_page_yields_no_lines() {
        assert!(reconstruct_page_lines(&Page::default()).is_empty());
    }

    #[test]
    fn test_rows_top_to_bottom_left_to_right() {
        let page = Page::new(vec![
            frag("balance", 200.0, 700.0),
            frag("01/03/2024", 10.0, 650.0),
            frag("Date", 10.0, 700.0),
            frag("955.00", 200.0, 650.0),
        ]);

        let lines = reconstruct_page_lines(&page);
        assert_eq!(lines, vec!["Date balance", "01/03/2024 955.00"]);
    }

    #[test]
    fn test_tolerance_band_merges_jittered_baselines() {
        // 702.0 and 698.5 sit within 5 units of the first fragment's y
        let page = Page::new(vec![
            frag("a", 0.0, 700.0),
            frag("b", 50.0, 702.0),
            frag("c", 100.0, 698.5),
        ]);

        assert_eq!(reconstruct_page_lines(&page), vec!["a b c"]);
    }

    #[test]
    fn test_membership_anchors_on_first_seen_y() {
        // 704.0 is within tolerance of 700.0; 708.0 is within tolerance of
        // 704.0 but not of the anchor, so it opens a second row.
        let page = Page::new(vec![
            frag("a", 0.0, 700.0),
            frag("b", 50.0, 704.0),
            frag("c", 100.0, 708.0),
        ]);

        let lines = reconstruct_page_lines(&page);
        assert_eq!(lines, vec!["c", "a b"]);
    }

    #[test]
    fn test_fragments_sorted_by_x_within_row() {
        let page = Page::new(vec![
            frag("third", 300.0, 500.0),
            frag("first", 10.0, 500.0),
            frag("second", 150.0, 500.0),
        ]);

        assert_eq!(reconstruct_page_lines(&page), vec!["first second third"]);
    }

    #[test]
    fn test_assemble_lines_keeps_page_order() {
        let p1 = Page::new(vec![frag("page one", 0.0, 100.0)]);
        let p2 = Page::new(vec![frag("page two", 0.0, 100.0)]);

        assert_eq!(assemble_lines(&[p1, p2]), vec!["page one", "page two"]);
    }
}
