mod session;

pub use session::EditSession;

use chrono::Utc;
use indexmap::IndexMap;

use crate::model::config::Sort;
use crate::model::task::{Counts, Filter, Task};

/// Store behavior fixed at startup from config
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Stamp `created_at` on newly added tasks
    pub stamp_created: bool,
    /// Ordering applied by `view`
    pub sort: Sort,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            stamp_created: true,
            sort: Sort::Insertion,
        }
    }
}

/// Owns the ordered task collection and the edit session.
///
/// Mutations report whether anything changed so the caller knows when to
/// persist; reads never touch storage.
#[derive(Debug)]
pub struct TaskStore {
    tasks: IndexMap<String, Task>,
    session: EditSession,
    next_id: u64,
    options: StoreOptions,
}

impl TaskStore {
    /// Build a store over previously loaded tasks.
    ///
    /// Duplicate ids keep their first occurrence. The id counter resumes
    /// past the highest numeric suffix seen, so ids stay unique across
    /// restarts.
    pub fn new(tasks: Vec<Task>, options: StoreOptions) -> Self {
        let mut map = IndexMap::with_capacity(tasks.len());
        for task in tasks {
            map.entry(task.id.clone()).or_insert(task);
        }
        let next_id = map
            .keys()
            .filter_map(|id| id.strip_prefix("t-")?.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);
        TaskStore {
            tasks: map,
            session: EditSession::Idle,
            next_id,
            options,
        }
    }

    fn fresh_id(&mut self) -> String {
        let id = format!("t-{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a task with trimmed text. Whitespace-only input is rejected
    /// without mutating anything; otherwise the new task's id is returned.
    pub fn add(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        let task = Task {
            id: id.clone(),
            text: text.to_string(),
            completed: false,
            created_at: self.options.stamp_created.then(Utc::now),
        };
        self.tasks.insert(id.clone(), task);
        Some(id)
    }

    /// Flip `completed`. Unknown ids are a silent no-op.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.get_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Replace a task's text with the trimmed value. Whitespace-only text
    /// or an unknown id leaves the collection unchanged.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        match self.tasks.get_mut(id) {
            Some(task) => {
                task.text = new_text.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a task, keeping the order of the rest. An active edit
    /// session on the removed task is abandoned.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.tasks.shift_remove(id).is_some();
        if removed && self.session.target() == Some(id) {
            self.session.reset();
        }
        removed
    }

    /// Remove every completed task; returns how many went away. If the
    /// task under edit is among them, the session is abandoned.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.completed);
        let target_gone = self
            .session
            .target()
            .is_some_and(|id| !self.tasks.contains_key(id));
        if target_gone {
            self.session.reset();
        }
        before - self.tasks.len()
    }

    /// Tasks admitted by `filter`, in display order. Recomputed on every
    /// call; never cached.
    pub fn view(&self, filter: Filter) -> Vec<&Task> {
        let mut rows: Vec<&Task> = self
            .tasks
            .values()
            .filter(|task| filter.admits(task))
            .collect();
        if self.options.sort == Sort::NewestFirst {
            // Stable sort: undated tasks keep insertion order at the back
            rows.sort_by_key(|task| (task.completed, std::cmp::Reverse(task.created_at)));
        }
        rows
    }

    pub fn counts(&self) -> Counts {
        let completed = self.tasks.values().filter(|t| t.completed).count();
        let total = self.tasks.len();
        Counts {
            active: total - completed,
            completed,
            total,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Owned copy of the collection in order, for persistence
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    // ── edit session ───────────────────────────────────────────────

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Mutable draft access for the line editor; `None` while idle
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.session.draft_mut()
    }

    /// Begin editing `id`, seeding the draft with the current text.
    /// A session already in progress is silently abandoned.
    pub fn start_editing(&mut self, id: &str) -> bool {
        match self.tasks.get(id) {
            Some(task) => {
                let seed = task.text.clone();
                self.session.begin(id, &seed);
                true
            }
            None => false,
        }
    }

    /// Commit the draft through `edit` and return to idle. Returns whether
    /// the collection changed: a whitespace-only draft still ends the
    /// session but leaves the task text as it was.
    pub fn save_editing(&mut self) -> bool {
        match self.session.take() {
            Some((id, draft)) => self.edit(&id, &draft),
            None => false,
        }
    }

    /// Drop the draft without committing
    pub fn cancel_editing(&mut self) {
        self.session.reset();
    }
}
