//! Page-window math for the pagination controls.

use std::fmt;

/// One slot in the pagination control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Number(u64),
    Ellipsis,
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSlot::Number(n) => write!(f, "{}", n),
            PageSlot::Ellipsis => write!(f, "…"),
        }
    }
}

/// Compute which page numbers to show for `current` of `total` pages.
///
/// The first and last page are always present; interior pages appear when
/// within one step of the current page; the gaps collapse to ellipses.
/// `current` must already be clamped into `[1, total]` by the caller.
pub fn compute_window(current: u64, total: u64) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }

    let mut slots = vec![PageSlot::Number(1)];
    if total == 1 {
        return slots;
    }

    if current > 3 {
        slots.push(PageSlot::Ellipsis);
    }

    for page in 2..total {
        if page.abs_diff(current) <= 1 {
            slots.push(PageSlot::Number(page));
        }
    }

    if current + 2 < total {
        slots.push(PageSlot::Ellipsis);
    }

    slots.push(PageSlot::Number(total));
    slots
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{Ellipsis, Number};
    use super::*;

    #[test]
    fn test_degenerate_windows() {
        assert!(compute_window(1, 0).is_empty());
        assert_eq!(compute_window(1, 1), vec![Number(1)]);
    }

    #[test]
    fn test_first_page_of_many() {
        assert_eq!(
            compute_window(1, 10),
            vec![Number(1), Number(2), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(
            compute_window(5, 10),
            vec![
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10)
            ]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            compute_window(10, 10),
            vec![Number(1), Ellipsis, Number(9), Number(10)]
        );
    }

    #[test]
    fn test_no_leading_ellipsis_until_page_four() {
        assert_eq!(
            compute_window(3, 10),
            vec![
                Number(1),
                Number(2),
                Number(3),
                Number(4),
                Ellipsis,
                Number(10)
            ]
        );
        assert_eq!(
            compute_window(4, 10),
            vec![
                Number(1),
                Ellipsis,
                Number(3),
                Number(4),
                Number(5),
                Ellipsis,
                Number(10)
            ]
        );
    }

    #[test]
    fn test_small_totals_never_show_ellipsis() {
        assert_eq!(compute_window(1, 2), vec![Number(1), Number(2)]);
        assert_eq!(compute_window(2, 3), vec![Number(1), Number(2), Number(3)]);
    }
}
