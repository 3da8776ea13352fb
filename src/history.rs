use crate::drawable::Drawable;

/// Undo/redo stacks of committed drawables.
///
/// Drawables are moved between the two stacks, never copied. Every method
/// returns `true` when the visible drawing changed.
#[derive(Debug, Default)]
pub struct History {
    /// Committed drawables, oldest first
    undo_stack: Vec<Drawable>,
    /// Undone drawables, most recently undone last
    redo_stack: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a finished drawable. Discards anything that could be redone.
    pub fn commit(&mut self, drawable: Drawable) -> bool {
        log::debug!(
            "Committing {} (undo: {}, dropped redo: {})",
            drawable.kind(),
            self.undo_stack.len() + 1,
            self.redo_stack.len()
        );
        self.undo_stack.push(drawable);
        self.redo_stack.clear();
        true
    }

    /// Move the most recent drawable onto the redo stack
    pub fn undo(&mut self) -> bool {
        let Some(drawable) = self.undo_stack.pop() else {
            return false;
        };
        log::debug!("Undo {}", drawable.kind());
        self.redo_stack.push(drawable);
        true
    }

    /// Move the most recently undone drawable back
    pub fn redo(&mut self) -> bool {
        let Some(drawable) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("Redo {}", drawable.kind());
        self.undo_stack.push(drawable);
        true
    }

    /// Empty both stacks
    pub fn clear(&mut self) -> bool {
        log::debug!(
            "Clearing history (undo: {}, redo: {})",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        self.undo_stack.clear();
        self.redo_stack.clear();
        true
    }

    /// Committed drawables in draw order
    pub fn drawables(&self) -> &[Drawable] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
