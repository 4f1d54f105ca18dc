// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Page size on the catalog screen.
pub const CATALOG_PAGE_SIZE: usize = 12;
/// Page size on the all-listings screen.
pub const LISTING_PAGE_SIZE: usize = 9;

/// Interior pages farther than this from the current page collapse.
const WINDOW_RADIUS: usize = 2;
/// Windowing only kicks in past this many pages.
const WINDOW_MIN_PAGES: usize = 7;

pub fn total_pages(count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    count.div_ceil(page_size).max(1)
}

/// Clamps a 1-based page request into `[1, total]`. Page 0 lands on page 1.
pub fn clamp_page(requested: usize, total: usize) -> usize {
    requested.clamp(1, total.max(1))
}

/// The visible slice for a (possibly out-of-range) page request.
pub fn page_slice<T>(items: &[T], page_size: usize, requested: usize) -> &[T] {
    let page = clamp_page(requested, total_pages(items.len(), page_size));
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// One entry in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Page links for the pagination bar. First and last page always show; with
/// more than seven pages, interior pages outside the window around the
/// current page collapse, an ellipsis standing in at each boundary. The bar
/// is only rendered at all when `total > 1`.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    let current = clamp_page(current, total);
    let mut links = Vec::with_capacity(total.min(WINDOW_MIN_PAGES + 2));

    for number in 1..=total {
        let interior = number != 1 && number != total;
        let distance = number.abs_diff(current);
        if total > WINDOW_MIN_PAGES && interior && distance > WINDOW_RADIUS {
            let leading_gap = number == 2 && current > 4;
            let trailing_gap = number == total - 1 && current < total - 3;
            if leading_gap || trailing_gap {
                links.push(PageLink::Ellipsis);
            }
            continue;
        }
        links.push(PageLink::Page {
            number,
            current: number == current,
        });
    }

    links
}

#[cfg(test)]
mod tests {
    use super::{PageLink, clamp_page, page_links, page_slice, total_pages};

    #[test]
    fn total_pages_never_drops_below_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(18, 12), 2);
        assert_eq!(total_pages(18, 9), 2);
    }

    #[test]
    fn clamp_handles_zero_and_overflow_requests() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(8, 3), 3);
        assert_eq!(clamp_page(0, 0), 1);
    }

    #[test]
    fn eighteen_listings_split_twelve_then_six() {
        let items: Vec<usize> = (1..=18).collect();
        assert_eq!(total_pages(items.len(), 12), 2);
        assert_eq!(page_slice(&items, 12, 1), (1..=12).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 12, 2), (13..=18).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_pages_reuse_boundary_slices() {
        let items: Vec<usize> = (1..=18).collect();
        assert_eq!(page_slice(&items, 12, 0), page_slice(&items, 12, 1));
        assert_eq!(page_slice(&items, 12, 7), page_slice(&items, 12, 2));
    }

    #[test]
    fn slices_partition_the_input() {
        let items: Vec<usize> = (1..=25).collect();
        let page_size = 9;
        let total = total_pages(items.len(), page_size);
        let mut seen = Vec::new();
        for page in 1..=total {
            seen.extend_from_slice(page_slice(&items, page_size, page));
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn empty_input_yields_single_empty_page() {
        let items: Vec<usize> = Vec::new();
        assert_eq!(total_pages(items.len(), 9), 1);
        assert!(page_slice(&items, 9, 1).is_empty());
        assert!(page_slice(&items, 9, 4).is_empty());
    }

    fn numbers(links: &[PageLink]) -> Vec<Option<usize>> {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn short_runs_show_every_page() {
        let links = page_links(1, 2);
        assert_eq!(numbers(&links), vec![Some(1), Some(2)]);
        let links = page_links(4, 7);
        assert_eq!(numbers(&links), (1..=7).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn long_runs_collapse_around_the_current_page() {
        let links = page_links(6, 12);
        assert_eq!(
            numbers(&links),
            vec![
                Some(1),
                None,
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                None,
                Some(12),
            ]
        );
    }

    #[test]
    fn boundary_pages_keep_their_neighbors_visible() {
        // Near the front the leading ellipsis never appears.
        let links = page_links(2, 12);
        assert_eq!(
            numbers(&links),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(12)]
        );
        // Near the back the trailing ellipsis never appears.
        let links = page_links(11, 12);
        assert_eq!(
            numbers(&links),
            vec![Some(1), None, Some(9), Some(10), Some(11), Some(12)]
        );
    }

    #[test]
    fn current_page_is_flagged_exactly_once() {
        let links = page_links(5, 12);
        let current: Vec<usize> = links
            .iter()
            .filter_map(|link| match link {
                PageLink::Page {
                    number,
                    current: true,
                } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![5]);
    }
}
