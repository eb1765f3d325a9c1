// Pattern 1: Address-of and Dereference
use crate::console::{address, Console};
use crate::error::DemoError;
use std::io::Write;

pub const INITIAL_VALUE: i32 = 42;
pub const WRITTEN_VALUE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressReport {
    pub value_before: i32,
    /// `&value`
    pub value_address: usize,
    /// `ptr`, which holds the address of `value`
    pub pointer_value: usize,
    /// `*ptr` before the write
    pub read_through_pointer: i32,
    pub written: i32,
    pub value_after: i32,
}

pub fn observe(initial: i32, written: i32) -> AddressReport {
    let mut value = initial;
    let value_before = value;
    let value_address = std::ptr::addr_of!(value) as usize;

    let ptr: *mut i32 = &mut value;
    let pointer_value = ptr as usize;

    // SAFETY: `ptr` comes from a live `&mut value` and `value` outlives every use below.
    let read_through_pointer = unsafe { *ptr };
    unsafe {
        *ptr = written;
    }

    AddressReport {
        value_before,
        value_address,
        pointer_value,
        read_through_pointer,
        written,
        value_after: value,
    }
}

pub fn run<W: Write>(console: &mut Console<W>) -> Result<AddressReport, DemoError> {
    let report = observe(INITIAL_VALUE, WRITTEN_VALUE);
    let locale = console.locale();

    console.heading(locale.pick("Address-of and dereference", "주소 연산과 역참조"))?;
    console.line(format_args!("value = {}", report.value_before))?;
    console.line(format_args!(
        "&value = {} ({})",
        address(report.value_address),
        locale.pick("address", "주소")
    ))?;
    console.line(format_args!(
        "ptr = {} ({})",
        address(report.pointer_value),
        locale.pick("address of value", "value의 주소")
    ))?;
    console.line(format_args!(
        "*ptr = {} ({})",
        report.read_through_pointer,
        locale.pick("value read through the pointer", "포인터로 접근한 값")
    ))?;
    console.line(format_args!(
        "value (after *ptr = {}) = {}",
        report.written, report.value_after
    ))?;
    Ok(report)
}
