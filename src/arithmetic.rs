// Pattern 2: Pointer Arithmetic over an Array
use crate::console::{address, Console};
use crate::error::DemoError;
use std::io::Write;

pub const VALUES: [i32; 5] = [10, 20, 30, 40, 50];

/// What `p + offset` points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementView {
    pub offset: usize,
    pub address: usize,
    pub value: i32,
}

/// Walks `values` through a pointer to its first element.
pub fn walk(values: &[i32]) -> Vec<ElementView> {
    let p: *const i32 = values.as_ptr(); // values.as_ptr() == &values[0]

    (0..values.len())
        .map(|offset| {
            // SAFETY: offset < values.len(), so `p.add(offset)` stays inside the slice.
            // `add` scales by size_of::<i32>() for us.
            let element = unsafe { p.add(offset) };
            ElementView {
                offset,
                address: element as usize,
                value: unsafe { *element },
            }
        })
        .collect()
}

pub fn run<W: Write>(console: &mut Console<W>) -> Result<Vec<ElementView>, DemoError> {
    let arr = VALUES;
    let views = walk(&arr);

    let locale = console.locale();
    console.heading(locale.pick("Pointer arithmetic", "포인터 산술"))?;
    for view in &views {
        console.line(format_args!(
            "p + {i} = {}, *(p + {i}) = {}",
            address(view.address),
            view.value,
            i = view.offset
        ))?;
    }
    Ok(views)
}
