// raw.rs - Capability pair: raw buffer allocation and raw bulk copy.
//
// Every transforming operation is written against these two primitives, so
// a host-provided faster implementation can be swapped in without touching
// algorithm code. Resolution happens once per process: install() before
// first use, or the System provider wins by default and the choice is
// permanent.

use std::sync::OnceLock;

/// Handle to a resolved capability provider.
pub type Provider = &'static dyn Primitives;

/// The two low-level capabilities the algorithm set is built on.
pub trait Primitives: Send + Sync {
    /// Return a buffer of exactly `len` code units.
    ///
    /// Unit values are unspecified until the caller fully populates them:
    /// callers must write a unit before reading it back. Providers may
    /// pre-fill for safety (the portable one does), but no fill value is
    /// part of the contract.
    fn allocate(&self, len: usize) -> Vec<u8>;

    /// Copy `len` bytes from `src` into `dst`.
    ///
    /// # Safety
    ///
    /// `src` must be readable and `dst` writable for `len` bytes, and the
    /// two regions must not overlap. This is a forward bulk copy, not a
    /// safe move. Bounds are validated by the public operations, never
    /// here.
    unsafe fn copy(&self, dst: *mut u8, src: *const u8, len: usize);
}

// === Providers ===

/// Platform provider: zeroed-page allocation and the platform `memcpy`.
pub struct System;

pub static SYSTEM: System = System;

impl Primitives for System {
    fn allocate(&self, len: usize) -> Vec<u8> {
        vec![0; len]
    }

    unsafe fn copy(&self, dst: *mut u8, src: *const u8, len: usize) {
        std::ptr::copy_nonoverlapping(src, dst, len);
    }
}

/// Sentinel the portable provider pre-fills allocations with.
pub const FILL: u8 = 0x00;

/// Dependency-free reference provider: sentinel-filled allocation and a
/// word-chunked copy loop.
pub struct Portable;

pub static PORTABLE: Portable = Portable;

impl Primitives for Portable {
    fn allocate(&self, len: usize) -> Vec<u8> {
        vec![FILL; len]
    }

    // Complete 4-byte words in a tight loop, then the remaining 0-3 tail
    // bytes individually. Reads and writes are unaligned-safe.
    unsafe fn copy(&self, dst: *mut u8, src: *const u8, len: usize) {
        let words = len >> 2;
        let mut offset = 0;
        for i in 0..words {
            let word = (src as *const u32).add(i).read_unaligned();
            (dst as *mut u32).add(i).write_unaligned(word);
            offset += 4;
        }
        for i in 0..(len & 3) {
            *dst.add(offset + i) = *src.add(offset + i);
        }
    }
}

// === Resolution ===

static PROVIDER: OnceLock<Provider> = OnceLock::new();

/// Install a host-provided capability pair.
///
/// The first resolution wins and is permanent for the process, so this
/// must run before any operation does. Returns `false` if a provider was
/// already resolved; the installation is then ignored.
pub fn install(provider: Provider) -> bool {
    PROVIDER.set(provider).is_ok()
}

/// The resolved capability pair, defaulting to [`System`] on first use.
pub fn primitives() -> Provider {
    *PROVIDER.get_or_init(|| &SYSTEM)
}

/// Bulk-copy `src` into the front of `dst` through `provider`.
///
/// The two distinct borrows guarantee the non-overlap contract of
/// [`Primitives::copy`]. Callers validate bounds before any copy, so
/// `dst` is always at least `src.len()` units long.
#[inline]
pub(crate) fn copy_units(provider: Provider, dst: &mut [u8], src: &[u8]) {
    unsafe { provider.copy(dst.as_mut_ptr(), src.as_ptr(), src.len()) }
}
