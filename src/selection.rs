//! Single-selection navigator over the currently visible list.

/// Active index into a list of `len` items.
///
/// `None` only when the list is empty. Moves clamp at both ends; there is no
/// wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    index: Option<usize>,
    len: usize,
}

impl Selection {
    /// Selection over a fresh list of `len` items
    pub fn new(len: usize) -> Self {
        let mut selection = Self::default();
        selection.reset(len);
        selection
    }

    /// First item, or no selection for an empty list. Call whenever the list changes.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = if len > 0 { Some(0) } else { None };
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the index changed
    pub fn move_up(&mut self) -> bool {
        match self.index {
            Some(ix) if ix > 0 => {
                self.index = Some(ix - 1);
                true
            }
            _ => false,
        }
    }

    /// Returns whether the index changed
    pub fn move_down(&mut self) -> bool {
        match self.index {
            Some(ix) if ix + 1 < self.len => {
                self.index = Some(ix + 1);
                true
            }
            _ => false,
        }
    }

    /// Select `ix` directly (mouse). Out-of-range indices are ignored.
    pub fn select(&mut self, ix: usize) -> bool {
        if ix < self.len && self.index != Some(ix) {
            self.index = Some(ix);
            true
        } else {
            false
        }
    }
}
