use super::config::RememberConfig;
use super::error::{RememberError, Result};
use tracing::{debug, trace};

/// Ordered history of actions with a cursor on the current one.
///
/// The cursor is `None` exactly when no actions are remembered; otherwise it is
/// always a valid index into the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remember<T> {
    actions: Vec<T>,
    cursor: Option<usize>,
    config: RememberConfig,
}

impl<T> Default for Remember<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Remember<T> {
    /// Creates an empty, unbounded history
    pub fn new() -> Self {
        Self::with_config(RememberConfig::default())
    }

    /// Creates an empty history using `config`
    pub fn with_config(config: RememberConfig) -> Self {
        Self {
            actions: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Configuration this history was created with
    pub fn config(&self) -> &RememberConfig {
        &self.config
    }

    /// Number of remembered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are remembered
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Index of the current action, `None` when empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor as a signed index, -1 when empty. Saturates at `isize::MAX`.
    pub fn cursor_index(&self) -> isize {
        self.cursor
            .map_or(-1, |index| isize::try_from(index).unwrap_or(isize::MAX))
    }

    /// Moves the cursor to `position`.
    ///
    /// Fails with [`RememberError::InvalidCursor`] when the history is empty or
    /// `position` is not less than [`len`](Self::len).
    pub fn set_cursor(&mut self, position: usize) -> Result<()> {
        self.seek(Some(position)).map(|_| ())
    }

    /// The action under the cursor
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|index| self.actions.get(index))
    }

    /// Iterates the actions oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.actions.iter()
    }

    /// All remembered actions, oldest first
    pub fn as_slice(&self) -> &[T] {
        &self.actions
    }

    /// Forgets every remembered action
    pub fn clear(&mut self) {
        debug!(forgotten = self.actions.len(), "clearing history");
        self.actions.clear();
        self.cursor = None;
    }

    /// Removes and returns the actions from `start` to the end, oldest first.
    ///
    /// The cursor lands on the action just before `start`, or becomes `None`
    /// when `start` is zero. A `start` past the end is rejected and nothing
    /// is forgotten.
    pub fn forget(&mut self, start: usize) -> Result<Vec<T>> {
        let length = self.actions.len();
        if start > length {
            return Err(RememberError::InvalidCursor {
                position: Some(start - 1),
                length,
            });
        }

        let forgotten = self.actions.split_off(start);
        self.reset_cursor();
        debug!(start, forgotten = forgotten.len(), "forgot actions");
        Ok(forgotten)
    }

    /// Moves the cursor to `position` (or keeps it where it is) and returns the
    /// action found there.
    pub fn get(&mut self, position: Option<usize>) -> Result<&T> {
        let index = self.seek(position.or(self.cursor))?;
        Ok(&self.actions[index])
    }

    /// Action at `position`, if any. Never moves the cursor.
    pub fn peek(&self, position: usize) -> Option<&T> {
        self.actions.get(position)
    }

    /// The action an undo would land on
    pub fn peek_undo(&self) -> Option<&T> {
        self.cursor
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.actions.get(index))
    }

    /// The action a redo would land on
    pub fn peek_redo(&self) -> Option<&T> {
        self.cursor.and_then(|index| self.actions.get(index + 1))
    }

    /// Whether [`undo`](Self::undo) would succeed
    pub fn can_undo(&self) -> bool {
        self.peek_undo().is_some()
    }

    /// Whether [`redo`](Self::redo) would succeed
    pub fn can_redo(&self) -> bool {
        self.peek_redo().is_some()
    }

    /// Removes the newest action; the cursor moves to the new last action.
    pub fn pop(&mut self) -> Option<T> {
        let action = self.actions.pop();
        self.reset_cursor();
        action
    }

    /// Appends `actions` in order, moves the cursor to the newest one and
    /// returns the new length.
    ///
    /// Pushing nothing onto an empty history is a no-op. With a bounded
    /// config the oldest actions are evicted first.
    pub fn push<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.actions.extend(actions);

        let overflow = self.config.overflow(self.actions.len());
        if overflow > 0 {
            self.actions.drain(..overflow);
            debug!(evicted = overflow, "history full, evicted oldest actions");
        }

        self.reset_cursor();
        trace!(length = self.actions.len(), "pushed actions");
        self.actions.len()
    }

    /// Appends a single action, see [`push`](Self::push)
    pub fn push_one(&mut self, action: T) -> usize {
        self.push(std::iter::once(action))
    }

    /// Moves the cursor to `position` (or keeps it where it is), overwrites the
    /// action there and returns the one it replaced.
    pub fn set(&mut self, action: T, position: Option<usize>) -> Result<T> {
        let index = self.seek(position.or(self.cursor))?;
        Ok(std::mem::replace(&mut self.actions[index], action))
    }

    /// Steps the cursor back and returns the action it lands on
    pub fn undo(&mut self) -> Result<&T> {
        let index = self.seek(self.cursor.and_then(|index| index.checked_sub(1)))?;
        Ok(&self.actions[index])
    }

    /// Steps the cursor forward and returns the action it lands on
    pub fn redo(&mut self) -> Result<&T> {
        let index = self.seek(Some(self.cursor.map_or(0, |index| index + 1)))?;
        Ok(&self.actions[index])
    }

    /// Validating cursor move, `None` standing for a position below zero.
    /// State is untouched on error.
    fn seek(&mut self, position: Option<usize>) -> Result<usize> {
        let length = self.actions.len();
        let index = position
            .filter(|&index| index < length)
            .ok_or(RememberError::InvalidCursor { position, length })?;

        trace!(from = self.cursor_index(), to = index, "cursor moved");
        self.cursor = Some(index);
        Ok(index)
    }

    /// Puts the cursor on the last action without validation.
    fn reset_cursor(&mut self) {
        self.cursor = self.actions.len().checked_sub(1);
    }
}

impl<T> FromIterator<T> for Remember<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut remember = Self::new();
        remember.push(iter);
        remember
    }
}

impl<'a, T> IntoIterator for &'a Remember<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
