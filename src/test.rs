/// Check for equality between two components allowing for 16-bit rounding
/// errors, or for the given `epsilon`.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::color::Component
        );
    }};
    ($actual:expr, $expected:expr, epsilon = $epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
