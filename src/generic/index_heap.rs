/*!
A max-heap on some subset of elements with fixed indicies.

In other words, a heap backed by a vector of values with a companion vector which tracks the current location of each index on the heap, if any.

The backing vector of values persists when an index leaves the heap, and so the heap acts as a store of (scored) elements which may be moved onto and off of the heap.

For example, [IndexHeap] is used as a store of [variables](crate::structures::literal::Variable) in the stable search mode, as each variable has an index and it is a useful heuristic to choose the unassigned variable with the highest score when making a decision.

```rust
# use portfolio_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.grow_to(601);
heap.set_value(600, 10.0);
heap.set_value(0, 70.0);

heap.push(600);
heap.push(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), 0.0);

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));

assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default + Copy> {
    /// The value of each index, on the heap or not.
    values: Vec<V>,

    /// The position of each index on the heap, if on the heap.
    position: Vec<Option<usize>>,

    /// The heap, as a vector of indicies.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default + Copy> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default + Copy> IndexHeap<V> {
    /// Ensures `count` indicies are stored, with fresh indicies given the default value and not on the heap.
    pub fn grow_to(&mut self, count: usize) {
        if self.values.len() < count {
            self.values.resize(count, V::default());
            self.position.resize(count, None);
        }
    }

    /// True if `index` is on the heap.
    pub fn contains(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(|position| position.is_some())
    }

    /// Push `index` onto the heap, if not already on the heap.
    /// Returns true if `index` was pushed, false otherwise.
    pub fn push(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        let heap_index = self.heap.len();
        self.heap.push(index);
        self.position[index] = Some(heap_index);
        self.sift_up(heap_index);
        true
    }

    /// Remove `index` from the heap, if present.
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(heap_index) = self.position.get(index).copied().flatten() else {
            return false;
        };
        let last = self.heap.len() - 1;
        self.swap(heap_index, last);
        self.heap.pop();
        self.position[index] = None;
        if heap_index < self.heap.len() {
            self.sift_down(heap_index);
            self.sift_up(heap_index);
        }
        true
    }

    /// Peek at the index with the maximum value on the heap.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Pop the index with the maximum value off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// The value of `index`.
    pub fn value_at(&self, index: usize) -> V {
        self.values[index]
    }

    /// Set the value of `index` to `value`, restoring the heap property if `index` is on the heap.
    pub fn set_value(&mut self, index: usize, value: V) {
        self.values[index] = value;
        if let Some(heap_index) = self.position[index] {
            self.sift_up(heap_index);
            self.sift_down(heap_index);
        }
    }

    /// Apply `f` to all values.
    ///
    /// Note, the heap is not restored, see [heapify](IndexHeap::heapify).
    /// Though, if `f` is monotone the heap property is preserved.
    pub fn apply_to_all(&mut self, f: impl Fn(V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(*value)
        }
    }

    /// Restore the heap property across the whole heap.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.sift_down(heap_index)
        }
    }

    /// A count of indicies stored by the structure, on the heap or not.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of indicies on the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if the heap is empty, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default + Copy> IndexHeap<V> {
    fn value_on_heap(&self, heap_index: usize) -> V {
        self.values[self.heap[heap_index]]
    }

    /// Swaps the elements at `a` and `b` on the heap, and updates the position of each.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Shuffles the element at `heap_index` down into the heap, if required.
    ///
    /// The larger of the children is identified, and the element swapped with that child if the child is larger.
    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = 2 * heap_index + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;

            let mut child = left;
            if right < self.heap.len() && self.value_on_heap(right) > self.value_on_heap(left) {
                child = right;
            }

            if self.value_on_heap(child) > self.value_on_heap(heap_index) {
                self.swap(heap_index, child);
                heap_index = child;
            } else {
                break;
            }
        }
    }

    /// Shuffles the element at `heap_index` up the heap, while the parent is smaller.
    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if self.value_on_heap(heap_index) > self.value_on_heap(parent) {
                self.swap(heap_index, parent);
                heap_index = parent;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_from(values: &[(usize, f64)]) -> IndexHeap<f64> {
        let mut heap = IndexHeap::default();
        heap.grow_to(values.iter().map(|(index, _)| index + 1).max().unwrap_or(0));
        for (index, value) in values {
            heap.set_value(*index, *value);
            heap.push(*index);
        }
        heap
    }

    #[test]
    fn heap_simple() {
        let mut heap = heap_from(&[(6, 10.0), (5, 20.0), (4, 30.0), (1, 60.0), (0, 70.0)]);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert!(heap.is_empty());
    }

    #[test]
    fn heap_update() {
        let mut heap = heap_from(&[(6, 10.0), (4, 30.0), (1, 60.0), (0, 70.0)]);

        heap.set_value(0, 0.0);
        heap.set_value(1, 1.0);
        heap.set_value(4, 4.0);
        heap.set_value(6, 6.0);

        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
        assert!(heap.pop_max().is_none());
    }

    #[test]
    fn heap_rescale() {
        let mut heap = heap_from(&[(2, 1e100), (1, 1e120), (0, 1e110)]);
        heap.apply_to_all(|value| value * 1e-100);
        heap.heapify();

        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(2));
    }

    #[test]
    fn heap_remove() {
        let mut heap = heap_from(&[(6, 6.0), (5, 5.0), (4, 4.0), (1, 1.0), (0, 0.0)]);

        assert!(heap.remove(4));
        assert!(!heap.remove(4));
        assert!(heap.remove(6));
        assert!(!heap.contains(4));

        heap.set_value(4, 1.5);
        assert!(heap.push(4));
        assert!(!heap.push(4));

        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
    }
}
