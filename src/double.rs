// Pattern 3: Double Indirection
//
// `pp` borrows `p`, which borrows `value`. Each level is a back-reference to
// storage owned elsewhere; dropping `pp` or `p` never frees anything.
use crate::console::{address, Console};
use crate::error::DemoError;
use std::io::Write;

pub const INITIAL_VALUE: i32 = 10;
pub const WRITTEN_VALUE: i32 = 99;

/// The same integer seen through zero, one and two levels of indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Views {
    pub value: i32,
    pub through_p: i32,
    pub through_pp: i32,
}

impl Views {
    pub fn all_equal(&self, expected: i32) -> bool {
        self.value == expected && self.through_p == expected && self.through_pp == expected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndirectionReport {
    pub before: Views,
    pub written: i32,
    pub after: Views,
    pub value_address: usize,
    /// Where `p` itself lives; this is what `pp` holds.
    pub p_address: usize,
    /// The address reached by following `pp` once (`*pp`).
    pub target_via_pp: usize,
}

pub fn observe(initial: i32, written: i32) -> IndirectionReport {
    let mut value = initial;
    let value_address = std::ptr::addr_of!(value) as usize;
    let value_before = value;

    let mut p: &mut i32 = &mut value;
    let p_before = *p;

    let pp: &mut &mut i32 = &mut p;
    let p_address = &*pp as *const &mut i32 as usize;
    let target_via_pp = &**pp as *const i32 as usize;
    let pp_before = **pp;

    **pp = written; // pp -> p -> value
    let pp_after = **pp;
    let p_after = *p;
    let value_after = value;

    IndirectionReport {
        before: Views {
            value: value_before,
            through_p: p_before,
            through_pp: pp_before,
        },
        written,
        after: Views {
            value: value_after,
            through_p: p_after,
            through_pp: pp_after,
        },
        value_address,
        p_address,
        target_via_pp,
    }
}

pub fn run<W: Write>(console: &mut Console<W>) -> Result<IndirectionReport, DemoError> {
    let report = observe(INITIAL_VALUE, WRITTEN_VALUE);
    let locale = console.locale();

    console.heading(locale.pick("Double pointer", "이중 포인터"))?;
    console.line(format_args!("value = {}", report.before.value))?;
    console.line(format_args!("*p = {}", report.before.through_p))?;
    console.line(format_args!("**pp = {}", report.before.through_pp))?;
    console.line(format_args!(
        "pp = {} ({})",
        address(report.p_address),
        locale.pick("address of p", "p의 주소")
    ))?;
    console.line(format_args!(
        "*pp = {} ({})",
        address(report.target_via_pp),
        locale.pick("address of value", "value의 주소")
    ))?;
    console.line(format_args!(
        "value (after **pp = {}) = {}",
        report.written, report.after.value
    ))?;
    console.line(format_args!(
        "*p = {}, **pp = {}",
        report.after.through_p, report.after.through_pp
    ))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn test_views_agree_before_and_after() {
        let report = observe(10, 99);
        assert!(report.before.all_equal(10));
        assert!(report.after.all_equal(99));
    }

    #[test]
    fn test_pp_leads_back_to_value() {
        let report = observe(INITIAL_VALUE, WRITTEN_VALUE);
        assert_eq!(report.target_via_pp, report.value_address);
        assert_ne!(report.p_address, report.value_address);
    }

    #[test]
    fn test_all_equal_detects_mismatch() {
        let views = Views {
            value: 1,
            through_p: 1,
            through_pp: 2,
        };
        assert!(!views.all_equal(1));
    }

    #[test]
    fn test_negative_write() {
        let report = observe(0, -99);
        assert!(report.before.all_equal(0));
        assert!(report.after.all_equal(-99));
    }

    #[test]
    fn test_run_output() {
        let config = DemoConfig {
            color: false,
            ..DemoConfig::default()
        };
        let mut console = Console::new(Vec::new(), &config);
        run(&mut console).unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();

        assert!(text.contains("**pp = 10\n"));
        assert!(text.contains("value (after **pp = 99) = 99"));
        assert!(text.contains("*p = 99, **pp = 99"));
    }
}
