//! Ordered selection of item keys.
//!
//! A [`SelectionSet`] holds unique keys in the order the user picked them, not
//! in list order. Its [`SelectionMode`] decides what a toggle means:
//!
//! - **Single**: toggling any enabled key replaces the whole set with that key,
//!   even when it is already the selected one. The set never exceeds one key.
//! - **Multi**: toggling adds a key at the end, or removes it if present while
//!   keeping the remaining order.
//!
//! Both branches keep keys unique.

/// Whether the selection holds at most one key or any number of keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    #[default]
    Multi,
}

impl SelectionMode {
    #[must_use]
    pub const fn from_single(single: bool) -> Self {
        if single {
            Self::Single
        } else {
            Self::Multi
        }
    }
}

/// Result of [`SelectionSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was disabled; nothing changed.
    Ignored,
    /// Multi mode: the key was appended.
    Inserted,
    /// Multi mode: the key was present and has been removed.
    Removed,
    /// Single mode: the set now holds exactly this key.
    Replaced,
}

impl ToggleOutcome {
    /// Returns `true` unless the toggle was ignored.
    #[must_use]
    pub const fn toggled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Ordered collection of unique selected keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<K> {
    mode: SelectionMode,
    keys: Vec<K>,
}

impl<K: Clone + PartialEq> SelectionSet<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new(mode: SelectionMode) -> Self {
        Self { mode, keys: Vec::new() }
    }

    /// Creates a selection seeded with `keys`.
    ///
    /// Duplicates are dropped, keeping the first occurrence. In single mode
    /// only the first key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiselect::app::selection::{SelectionMode, SelectionSet};
    ///
    /// let multi = SelectionSet::with_keys(SelectionMode::Multi, [3, 1, 3, 2]);
    /// assert_eq!(multi.keys(), &[3, 1, 2]);
    ///
    /// let single = SelectionSet::with_keys(SelectionMode::Single, [3, 1]);
    /// assert_eq!(single.keys(), &[3]);
    /// ```
    #[must_use]
    pub fn with_keys(mode: SelectionMode, keys: impl IntoIterator<Item = K>) -> Self {
        let mut set = Self::new(mode);
        for key in keys {
            if mode == SelectionMode::Single && !set.keys.is_empty() {
                break;
            }
            if !set.contains(&key) {
                set.keys.push(key);
            }
        }
        set
    }

    /// Toggles `key` according to the selection mode.
    ///
    /// A disabled toggle is a no-op and reports [`ToggleOutcome::Ignored`].
    ///
    /// # Examples
    ///
    /// ```
    /// use multiselect::app::selection::{SelectionMode, SelectionSet, ToggleOutcome};
    ///
    /// let mut set = SelectionSet::new(SelectionMode::Multi);
    /// assert_eq!(set.toggle(&1, false), ToggleOutcome::Inserted);
    /// assert_eq!(set.toggle(&2, false), ToggleOutcome::Inserted);
    /// assert_eq!(set.toggle(&1, false), ToggleOutcome::Removed);
    /// assert_eq!(set.keys(), &[2]);
    /// assert_eq!(set.toggle(&3, true), ToggleOutcome::Ignored);
    /// ```
    pub fn toggle(&mut self, key: &K, disabled: bool) -> ToggleOutcome {
        if disabled {
            return ToggleOutcome::Ignored;
        }

        match self.mode {
            SelectionMode::Single => {
                self.keys.clear();
                self.keys.push(key.clone());
                ToggleOutcome::Replaced
            }
            SelectionMode::Multi => {
                if self.remove(key) {
                    ToggleOutcome::Removed
                } else {
                    self.keys.push(key.clone());
                    ToggleOutcome::Inserted
                }
            }
        }
    }

    /// Removes `key`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }
}
