use num::Zero;

/// Read-only view of a single cell, present or void.
///
/// A void cell reads as zero; use [`is_void`](CellRef::is_void) to tell
/// the two apart from a present cell storing zero.
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a, T> {
    slot: Option<&'a T>,
}

impl<'a, T> CellRef<'a, T> {
    #[inline]
    pub(crate) fn new(slot: Option<&'a T>) -> Self {
        CellRef { slot }
    }

    /// The cell value; zero when the cell is void.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Zero + Clone,
    {
        self.slot.cloned().unwrap_or_else(T::zero)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrow of the stored value, `None` for a void cell.
    #[inline]
    pub fn as_ref(&self) -> Option<&'a T> {
        self.slot
    }
}

/// Mutable view of a single cell.
///
/// Reading behaves like [`CellRef`]. Writing is only possible on a present
/// cell: the container does not materialize runs through cell views, so
/// [`set`](CellMut::set) on a void cell is a contract violation and panics.
/// Use [`RunVec::set_at`](crate::RunVec::set_at) to write into the void.
#[derive(Debug)]
pub struct CellMut<'a, T> {
    slot: Option<&'a mut T>,
}

impl<'a, T> CellMut<'a, T> {
    #[inline]
    pub(crate) fn new(slot: Option<&'a mut T>) -> Self {
        CellMut { slot }
    }

    /// The cell value; zero when the cell is void.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Zero + Clone,
    {
        self.slot.as_deref().cloned().unwrap_or_else(T::zero)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.slot.is_none()
    }

    /// Mutable borrow of the stored value, `None` for a void cell.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.slot.as_deref_mut()
    }

    /// Overwrites the cell, returning a borrow of the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the cell is void.
    pub fn set(&mut self, value: T) -> &mut T {
        match self.slot.as_deref_mut() {
            Some(slot) => {
                *slot = value;
                slot
            }
            None => panic!("write through a cell view into the void"),
        }
    }
}
