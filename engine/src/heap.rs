//! Fixed-capacity binary heap used for top-K selection.

/// Array-backed binary heap ordered by a caller-supplied comparator.
///
/// `outranks(a, b)` returns true when `a` belongs closer to the root than `b`, so
/// `|a, b| a > b` gives a max-heap and `|a, b| a < b` a min-heap. The comparator must be
/// a strict ordering.
pub struct BoundedHeap<T, F> {
    items: Vec<T>,
    capacity: usize,
    outranks: F,
}

impl<T, F> BoundedHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(capacity: usize, outranks: F) -> Self {
        Self { items: Vec::with_capacity(capacity), capacity, outranks }
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Inserts `item`, handing it back if the heap is already full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.items.len() == self.capacity {
            return Err(item);
        }
        self.items.push(item);

        let mut child = self.items.len() - 1;
        while child > 0 {
            let parent = (child - 1) / 2;
            if !(self.outranks)(&self.items[child], &self.items[parent]) {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
        Ok(())
    }

    /// Removes and returns the top-ranked item.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);

        let len = self.items.len();
        let mut current = 0;
        loop {
            let left = 2 * current + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let next = if right < len && (self.outranks)(&self.items[right], &self.items[left]) {
                right
            } else {
                left
            };
            if !(self.outranks)(&self.items[next], &self.items[current]) {
                break;
            }
            self.items.swap(current, next);
            current = next;
        }
        Some(top)
    }

    /// Pops up to `k` items in rank order.
    pub fn pop_top(&mut self, k: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(k.min(self.items.len()));
        while out.len() < k {
            match self.pop() {
                Some(item) => out.push(item),
                None => break,
            }
        }
        out
    }
}
