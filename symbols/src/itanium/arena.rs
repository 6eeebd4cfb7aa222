//! Bounded scratch memory for the nodes of a single decode.

use super::error::{Error, Result};

use bumpalo::Bump;
use std::cell::Cell;
use std::mem;

/// Bytes reserved for a single decode unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// Arena holding every node a decode produces.
///
/// Allocations are charged against a fixed byte budget. Once the budget is spent every further
/// allocation fails with [`Error::CapacityExceeded`] until the arena is [reset](Arena::reset).
pub struct Arena {
    bump: Bump,
    capacity: usize,
    used: Cell<usize>,
}

impl Arena {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
            capacity,
            used: Cell::new(0),
        }
    }

    fn charge(&self, size: usize, align: usize) -> Result<()> {
        let used = self.used.get();
        // align is always a power of two
        let start = used.checked_add(align - 1).ok_or(Error::CapacityExceeded)? & !(align - 1);
        let end = start
            .checked_add(size)
            .filter(|&end| end <= self.capacity)
            .ok_or(Error::CapacityExceeded)?;

        self.used.set(end);
        Ok(())
    }

    /// Allocate a value in the arena.
    #[inline]
    pub fn alloc<T: Copy>(&self, val: T) -> Result<&T> {
        self.charge(mem::size_of::<T>(), mem::align_of::<T>())?;
        Ok(self.bump.alloc(val))
    }

    /// Allocate a copy of a slice in the arena.
    #[inline]
    pub fn alloc_slice<T: Copy>(&self, slice: &[T]) -> Result<&[T]> {
        if slice.is_empty() {
            return Ok(&[]);
        }

        let size = mem::size_of::<T>()
            .checked_mul(slice.len())
            .ok_or(Error::CapacityExceeded)?;
        self.charge(size, mem::align_of::<T>())?;
        Ok(self.bump.alloc_slice_copy(slice))
    }

    /// Release everything allocated so far, keeping the reserved memory around.
    pub fn reset(&mut self) {
        self.bump.reset();
        self.used.set(0);
    }

    /// Bytes charged since the last reset.
    pub fn used(&self) -> usize {
        self.used.get()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charges_alignment() {
        let arena = Arena::with_capacity(64);
        arena.alloc(1u8).unwrap();
        arena.alloc(1u32).unwrap();
        assert_eq!(arena.used(), 8);
        arena.alloc_slice(&[1u16, 2, 3]).unwrap();
        assert_eq!(arena.used(), 14);
    }

    #[test]
    fn empty_slices_are_free() {
        let arena = Arena::with_capacity(0);
        assert_eq!(arena.alloc_slice::<u64>(&[]).unwrap(), &[] as &[u64]);
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn exhaustion() {
        let arena = Arena::with_capacity(16);
        assert_eq!(*arena.alloc(7u64).unwrap(), 7);
        assert_eq!(*arena.alloc(8u64).unwrap(), 8);
        assert_eq!(arena.alloc(9u64), Err(Error::CapacityExceeded));
        assert_eq!(arena.alloc_slice(&[1u8]), Err(Error::CapacityExceeded));
    }

    #[test]
    fn reset_restores_budget() {
        let mut arena = Arena::with_capacity(8);
        arena.alloc(1u64).unwrap();
        assert!(arena.alloc(2u64).is_err());
        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(*arena.alloc(3u64).unwrap(), 3);
    }
}
