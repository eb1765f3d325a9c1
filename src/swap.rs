// Pattern 5: Swapping Through References
use crate::console::Console;
use crate::error::DemoError;
use std::io::Write;

/// Exchanges the values behind `a` and `b` using a temporary.
///
/// Nothing is returned; the caller sees the effect through its own variables.
pub fn swap<T: Copy>(a: &mut T, b: &mut T) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

pub fn run<W: Write>(console: &mut Console<W>) -> Result<(i32, i32), DemoError> {
    let (mut x, mut y) = (3, 5);
    let locale = console.locale();

    console.heading(locale.pick("Swap through references", "포인터로 값 교환"))?;
    console.line(format_args!("{}: x = {x}, y = {y}", locale.pick("before", "교환 전")))?;
    swap(&mut x, &mut y);
    console.line(format_args!("x = {x}, y = {y}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use proptest::prelude::*;

    #[test]
    fn test_swap_basic() {
        let (mut x, mut y) = (3, 5);
        swap(&mut x, &mut y);
        assert_eq!((x, y), (5, 3));
    }

    #[test]
    fn test_swap_equal_is_noop() {
        let (mut x, mut y) = (7, 7);
        swap(&mut x, &mut y);
        assert_eq!((x, y), (7, 7));
    }

    #[test]
    fn test_swap_negative_and_extremes() {
        let (mut x, mut y) = (i32::MIN, -1);
        swap(&mut x, &mut y);
        assert_eq!((x, y), (-1, i32::MIN));
    }

    #[test]
    fn test_swap_inside_array() {
        let mut arr = [1, 2, 3];
        let (left, right) = arr.split_at_mut(2);
        swap(&mut left[0], &mut right[0]);
        assert_eq!(arr, [3, 2, 1]);
    }

    #[test]
    fn test_run_output() {
        let config = DemoConfig {
            color: false,
            ..DemoConfig::default()
        };
        let mut console = Console::new(Vec::new(), &config);
        assert_eq!(run(&mut console).unwrap(), (5, 3));

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.contains("before: x = 3, y = 5"));
        assert!(text.ends_with("x = 5, y = 3\n"));
    }

    proptest! {
        #[test]
        fn test_swap_any_pair(a: i32, b: i32) {
            let (mut x, mut y) = (a, b);
            swap(&mut x, &mut y);
            prop_assert_eq!((x, y), (b, a));

            // swapping twice restores the original pair
            swap(&mut x, &mut y);
            prop_assert_eq!((x, y), (a, b));
        }
    }
}
