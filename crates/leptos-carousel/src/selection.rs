//! Active Slide Transitions
//!
//! `None` means no slide is centered. Every function returns `None` or an index in `[0, count)`.

/// Step backwards, wrapping from the first slide to the last
pub fn prev(active: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match active {
        None => Some(0),
        Some(current) => {
            let current = current.min(count - 1);
            Some(if current == 0 { count - 1 } else { current - 1 })
        }
    }
}

/// Step forwards, wrapping from the last slide to the first
pub fn next(active: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match active {
        None => Some(1 % count),
        Some(current) => {
            let current = current.min(count - 1);
            Some(if current + 1 == count { 0 } else { current + 1 })
        }
    }
}

/// Dot click: selecting the active slide clears the selection
pub fn select_dot(active: Option<usize>, index: usize, count: usize) -> Option<usize> {
    if index >= count {
        return active.filter(|&i| i < count);
    }
    if active == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_from_none_selects_first() {
        assert_eq!(prev(None, 2), Some(0));
        assert_eq!(prev(None, 5), Some(0));
    }

    #[test]
    fn test_next_from_none_selects_second() {
        assert_eq!(next(None, 2), Some(1));
        assert_eq!(next(None, 5), Some(1));
        // single slide: 1 % 1
        assert_eq!(next(None, 1), Some(0));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(prev(Some(0), 2), Some(1));
        assert_eq!(prev(Some(1), 2), Some(0));
        assert_eq!(prev(Some(0), 4), Some(3));
        assert_eq!(prev(Some(3), 4), Some(2));
    }

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next(Some(1), 2), Some(0));
        assert_eq!(next(Some(0), 2), Some(1));
        assert_eq!(next(Some(3), 4), Some(0));
        assert_eq!(next(Some(2), 4), Some(3));
    }

    #[test]
    fn test_select_dot_twice_clears() {
        for count in 1..5 {
            for i in 0..count {
                let once = select_dot(None, i, count);
                assert_eq!(once, Some(i));
                assert_eq!(select_dot(once, i, count), None);
            }
        }
    }

    #[test]
    fn test_select_dot_switches_slide() {
        assert_eq!(select_dot(Some(0), 1, 2), Some(1));
    }

    #[test]
    fn test_select_dot_out_of_range_keeps_selection() {
        assert_eq!(select_dot(Some(1), 7, 2), Some(1));
        assert_eq!(select_dot(None, 2, 2), None);
    }

    #[test]
    fn test_empty_carousel_never_selects() {
        assert_eq!(prev(None, 0), None);
        assert_eq!(next(Some(0), 0), None);
        assert_eq!(select_dot(None, 0, 0), None);
    }

    #[test]
    fn test_results_stay_in_range() {
        let count = 3;
        let mut active = None;
        for step in 0..20 {
            active = if step % 3 == 0 { prev(active, count) } else { next(active, count) };
            assert!(active.map_or(false, |i| i < count));
        }
    }
}
