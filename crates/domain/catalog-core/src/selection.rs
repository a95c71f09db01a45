//! Selection index into the filtered view and its cyclic navigation.

/// Position of the entry shown in the detail overlay, relative to the filtered view.
///
/// Every operation takes the current filtered length so that a non-empty selection always
/// satisfies `index < len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn is_open(self) -> bool {
        self.0.is_some()
    }

    /// Open the overlay at `index`. Out-of-range positions leave the selection untouched.
    pub fn select(self, index: usize, len: usize) -> Self {
        if index < len {
            Self(Some(index))
        } else {
            self
        }
    }

    pub fn next(self, len: usize) -> Self {
        match self.revalidate(len).0 {
            Some(i) => Self(Some(wrap_next(i, len))),
            None => Self(None),
        }
    }

    pub fn previous(self, len: usize) -> Self {
        match self.revalidate(len).0 {
            Some(i) => Self(Some(wrap_previous(i, len))),
            None => Self(None),
        }
    }

    pub fn close(self) -> Self {
        Self(None)
    }

    /// Clear the selection if it no longer points inside a view of `len` entries.
    pub fn revalidate(self, len: usize) -> Self {
        match self.0 {
            Some(i) if i < len => self,
            _ => Self(None),
        }
    }
}

pub fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

pub fn wrap_previous(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Prev/next controls only make sense with more than one entry to move between.
pub fn shows_navigation(len: usize) -> bool {
    len > 1
}
