//! Buffer dimension planning.

use attribtex_spec::SizeMode;

/// Planned buffer dimensions.
///
/// `width` is always a power of two; `min_height` is the smallest height
/// that holds every destination row and never exceeds `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Buffer width in pixels.
    pub width: usize,
    /// Buffer height in pixels.
    pub height: usize,
    /// Minimum height that holds all destination rows.
    pub min_height: usize,
}

/// Plans buffer dimensions for `element_count` elements across `num_rows`
/// destination rows.
///
/// The width estimate starts from the square root of the total pixel count
/// and is corrected upward when the rows needed at that width outgrow the
/// estimated side; the sqrt estimate can round down far enough that the
/// data no longer fits inside the square. Degenerate inputs (no elements or
/// no rows) plan a 1x1 buffer so downstream indexing never divides by zero.
///
/// # Example
/// ```
/// use attribtex_engine::layout::plan_layout;
/// use attribtex_spec::SizeMode;
///
/// let layout = plan_layout(5, 1, SizeMode::Smallest);
/// assert_eq!(layout.width, 4);
/// assert_eq!(layout.height, 2);
/// ```
pub fn plan_layout(element_count: usize, num_rows: usize, mode: SizeMode) -> Layout {
    if element_count == 0 || num_rows == 0 {
        return Layout {
            width: 1,
            height: 1,
            min_height: 1,
        };
    }

    let estimate = ((element_count * num_rows) as f64).sqrt().floor() as usize;
    let estimate = estimate.next_power_of_two();

    let rows_needed = element_count.div_ceil(estimate) * num_rows;
    let width = estimate.max(rows_needed.next_power_of_two());

    let min_height = element_count.div_ceil(width) * num_rows;
    let height = match mode {
        SizeMode::Square => width,
        SizeMode::Smallest => min_height,
    };

    Layout {
        width,
        height,
        min_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_power_of_two() {
        for element_count in [1, 2, 3, 7, 16, 100, 1000, 12345] {
            for num_rows in [1, 2, 3, 8, 11] {
                let layout = plan_layout(element_count, num_rows, SizeMode::Smallest);
                assert!(
                    layout.width.is_power_of_two(),
                    "width {} for ({}, {})",
                    layout.width,
                    element_count,
                    num_rows
                );
            }
        }
    }

    #[test]
    fn test_min_height_holds_all_rows() {
        for element_count in [1, 5, 64, 999, 4096] {
            for num_rows in [1, 2, 4, 9] {
                let layout = plan_layout(element_count, num_rows, SizeMode::Smallest);
                assert_eq!(
                    layout.min_height,
                    element_count.div_ceil(layout.width) * num_rows
                );
                assert_eq!(layout.height, layout.min_height);
            }
        }
    }

    #[test]
    fn test_square_mode_is_square() {
        for element_count in [1, 5, 64, 999] {
            for num_rows in [1, 3, 8] {
                let layout = plan_layout(element_count, num_rows, SizeMode::Square);
                assert_eq!(layout.height, layout.width);
                assert!(layout.min_height <= layout.height);
            }
        }
    }

    #[test]
    fn test_correction_pass_widens_buffer() {
        // sqrt(5) rounds the estimate down to 2; at width 2 a single row
        // needs 3 pixel rows, which no longer fits a 2x2 square.
        let layout = plan_layout(5, 1, SizeMode::Smallest);
        assert_eq!(layout.width, 4);
        assert_eq!(layout.min_height, 2);

        // Many rows over few elements: the height demand drives the width up.
        let layout = plan_layout(2, 8, SizeMode::Smallest);
        assert_eq!(layout.width, 8);
        assert_eq!(layout.min_height, 8);
    }

    #[test]
    fn test_exact_square_fit() {
        // Four elements at one row fit a 2x2 square exactly
        let layout = plan_layout(4, 1, SizeMode::Smallest);
        assert_eq!(layout.width, 2);
        assert_eq!(layout.height, 2);
        assert_eq!(layout.min_height, 2);

        let layout = plan_layout(64, 4, SizeMode::Smallest);
        assert_eq!(layout.width, 16);
        assert_eq!(layout.height, 16);
    }

    #[test]
    fn test_degenerate_inputs_plan_unit_buffer() {
        let expected = Layout {
            width: 1,
            height: 1,
            min_height: 1,
        };
        assert_eq!(plan_layout(0, 3, SizeMode::Smallest), expected);
        assert_eq!(plan_layout(7, 0, SizeMode::Smallest), expected);
        assert_eq!(plan_layout(0, 0, SizeMode::Square), expected);
    }

    #[test]
    fn test_min_height_never_exceeds_width() {
        for element_count in [1, 2, 31, 64, 100, 5000] {
            for num_rows in [1, 2, 5, 11] {
                let layout = plan_layout(element_count, num_rows, SizeMode::Smallest);
                assert!(
                    layout.min_height <= layout.width,
                    "min_height {} > width {} for ({}, {})",
                    layout.min_height,
                    layout.width,
                    element_count,
                    num_rows
                );
            }
        }
    }
}
