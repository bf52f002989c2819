/// Minimum-first queue backed by a sorted vec. Insertion scans for the
/// first entry with a strictly greater priority, so equal priorities
/// dequeue in insertion order. Linear insertion is plenty at campus scale
/// and keeps the tie order observable.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P> {
    items: Vec<QueueItem<T, P>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueItem<T, P> {
    pub element: T,
    pub priority: P,
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn enqueue(&mut self, element: T, priority: P) {
        let position = self
            .items
            .iter()
            .position(|item| priority < item.priority);
        let item = QueueItem { element, priority };

        match position {
            Some(index) => self.items.insert(index, item),
            None => self.items.push(item),
        }
    }

    /// Removes and returns the minimum-priority entry, or `None` when the
    /// queue is empty.
    pub fn dequeue(&mut self) -> Option<QueueItem<T, P>> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
