/// Linear undo/redo history over full snapshots.
///
/// `past` is oldest first. `future` is stored nearest-last so undo and redo
/// are both a pop and a push at the end of a `Vec`; [`History::future`]
/// yields it nearest-first.
#[derive(Clone, Debug, PartialEq)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
    limit: Option<usize>,
}

impl<T> History<T> {
    /// Unbounded history starting at `present`.
    pub fn new(present: T) -> Self {
        Self::with_limit(present, None)
    }

    /// History keeping at most `limit` past snapshots when `Some`.
    pub fn with_limit(present: T, limit: Option<usize>) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
            limit,
        }
    }

    /// Replace the present. Clears the redo stack.
    pub fn commit(&mut self, value: T) {
        self.future.clear();
        let previous = std::mem::replace(&mut self.present, value);
        self.past.push(previous);

        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }

    /// Step back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> &T {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past(&self) -> &[T] {
        &self.past
    }

    pub fn future(&self) -> impl Iterator<Item = &T> {
        self.future.iter().rev()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
