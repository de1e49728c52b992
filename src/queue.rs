use crate::{
    error::ShortestPathError,
    graphs::{Distance, Vertex},
};

/// Indexed minimum priority queue over `(priority, vertex)` pairs.
///
/// A binary heap with an auxiliary slot table from vertex index to heap
/// position, so decrease-key runs in O(log n) and membership tests in O(1)
/// instead of scanning the heap. The key space is the dense vertex index
/// space `0..vertex_count` of a single graph.
pub struct IndexedHeapQueue {
    heap: Vec<(Distance, Vertex)>,
    slots: Vec<Option<usize>>,
}

impl IndexedHeapQueue {
    pub fn new(vertex_count: usize) -> IndexedHeapQueue {
        IndexedHeapQueue {
            heap: Vec::new(),
            slots: vec![None; vertex_count],
        }
    }

    /// Inserts the vertex, or lowers its priority if the new one is strictly
    /// smaller. A priority greater than or equal to the current one is a
    /// no-op; keys never increase.
    pub fn insert_or_decrease(&mut self, vertex: Vertex, priority: Distance) {
        match self.slots[vertex as usize] {
            Some(slot) => {
                if priority < self.heap[slot].0 {
                    self.heap[slot].0 = priority;
                    self.sift_up(slot);
                }
            }
            None => {
                self.heap.push((priority, vertex));
                let slot = self.heap.len() - 1;
                self.slots[vertex as usize] = Some(slot);
                self.sift_up(slot);
            }
        }
    }

    /// Removes and returns the pair with the smallest priority.
    pub fn extract_min(&mut self) -> Result<(Distance, Vertex), ShortestPathError> {
        if self.heap.is_empty() {
            return Err(ShortestPathError::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let (priority, vertex) = self.heap.pop().ok_or(ShortestPathError::EmptyQueue)?;
        self.slots[vertex as usize] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok((priority, vertex))
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.slots[vertex as usize].is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].0 >= self.heap[parent].0 {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let mut smallest = slot;
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < self.heap.len() && self.heap[child].0 < self.heap[smallest].0 {
                    smallest = child;
                }
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].1 as usize] = Some(a);
        self.slots[self.heap[b].1 as usize] = Some(b);
    }
}
