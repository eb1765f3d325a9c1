// Pattern 4: Heap Allocation and Release
use crate::config::DemoConfig;
use crate::console::{address, Console};
use crate::error::DemoError;
use itertools::Itertools;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::io::Write;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};
use std::slice;

/// A heap block of `i32`s owned by this handle.
///
/// Released either explicitly with [`HeapBuffer::release`] or on drop, so the
/// block is freed on every exit path exactly once.
pub struct HeapBuffer {
    ptr: NonNull<i32>,
    len: usize,
    layout: Layout,
}

impl HeapBuffer {
    /// Requests zeroed storage for `len` integers.
    pub fn allocate(len: usize) -> Result<Self, DemoError> {
        if len == 0 {
            return Err(DemoError::EmptyBuffer);
        }
        let layout =
            Layout::array::<i32>(len).map_err(|_| DemoError::ResourceExhausted { elements: len })?;

        // SAFETY: layout has a non-zero size because len > 0.
        let raw = unsafe { alloc_zeroed(layout) } as *mut i32;
        let ptr = NonNull::new(raw).ok_or(DemoError::ResourceExhausted { elements: len })?;

        Ok(HeapBuffer { ptr, len, layout })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: `allocate` refuses zero-length requests.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr(&self) -> *const i32 {
        self.ptr.as_ptr()
    }

    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: ptr is valid for len zero-initialized i32s while self is alive.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: as in `as_slice`; `&mut self` makes this the only live view.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Writes `f(i)` into slot `i` for every slot.
    pub fn fill_with<F: FnMut(usize) -> i32>(&mut self, mut f: F) {
        for (i, slot) in self.as_mut_slice().iter_mut().enumerate() {
            *slot = f(i);
        }
    }

    /// Frees the block now and hands back the pointer it used to occupy.
    ///
    /// The returned pointer dangles. It may be printed or compared, never read.
    pub fn release(self) -> *const i32 {
        let this = ManuallyDrop::new(self);
        // SAFETY: ptr was allocated with this layout and ManuallyDrop keeps Drop from freeing it again.
        unsafe { dealloc(this.ptr.as_ptr() as *mut u8, this.layout) };
        this.ptr.as_ptr()
    }
}

impl Drop for HeapBuffer {
    fn drop(&mut self) {
        // SAFETY: ptr came from `alloc_zeroed(self.layout)`; `release` bypasses this via ManuallyDrop.
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
    }
}

/// Value stored in slot `index`: 10, 20, 30, ...
///
/// `None` once the value no longer fits in an `i32`.
pub fn slot_value(index: usize) -> Option<i32> {
    let slot = i32::try_from(index.checked_add(1)?).ok()?;
    slot.checked_mul(10)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapReport {
    pub values: Vec<i32>,
    /// First element, copied out before the buffer was released.
    pub first: i32,
    /// Address the buffer had; stale once released.
    pub stale_address: usize,
    /// The pointer after being reset; always null.
    pub reset_address: usize,
}

pub fn observe(len: usize) -> Result<HeapReport, DemoError> {
    // Slot values grow with the index, so checking the last one covers them all.
    if slot_value(len.saturating_sub(1)).is_none() {
        return Err(DemoError::SlotOverflow { elements: len });
    }
    let mut buffer = HeapBuffer::allocate(len)?;
    buffer.fill_with(|i| slot_value(i).unwrap_or(i32::MAX));

    let values = buffer.as_slice().to_vec();
    let first = buffer.as_slice()[0]; // copy before release

    let mut arr: *const i32 = buffer.release();
    let stale_address = arr as usize;

    arr = ptr::null();
    let reset_address = arr as usize;

    Ok(HeapReport {
        values,
        first,
        stale_address,
        reset_address,
    })
}

pub fn run<W: Write>(console: &mut Console<W>, config: &DemoConfig) -> Result<HeapReport, DemoError> {
    let report = observe(config.buffer_len)?;
    let locale = console.locale();

    console.heading(locale.pick("Heap allocation", "동적 메모리 할당"))?;
    console.line(format_args!("{}", report.values.iter().join(" ")))?;
    console.line(format_args!(
        "{}: {}",
        locale.pick("value copied before release", "앞에서 복사한 값"),
        report.first
    ))?;
    console.line(format_args!(
        "{}: {}",
        locale.pick("pointer address after release", "free 후 포인터 자체 주소"),
        address(report.stale_address)
    ))?;
    console.note(locale.pick(
        "(the block behind this address is gone; it is printed, never read)",
        "(이 주소의 메모리는 이미 해제되었으므로 읽지 않는다)",
    ))?;
    console.line(format_args!(
        "{} = {}",
        locale.pick("arr after reset to null", "NULL로 초기화한 후 arr"),
        address(report.reset_address)
    ))?;
    Ok(report)
}
