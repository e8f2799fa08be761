//! Tracking store — persistence layer for the tracking snapshot.
//!
//! The snapshot lives in a single YAML file. All I/O goes through the
//! `FileSystem` port so the store works against the real disk or an
//! in-memory filesystem in tests. Every mutation reloads the snapshot,
//! applies the lifecycle edit, recomputes progress, bumps
//! `last_updated`, and writes the file back — last writer wins, as in
//! the original single-user tool.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::engine::progress;
use crate::error::TrackError;
use crate::lifecycle;
use crate::lifecycle::TaskUpdate;
use crate::model::blocker::{Blocker, Severity};
use crate::model::task::DevelopmentTask;
use crate::model::test_case::{TestCase, TestCaseStatus};
use crate::model::tracking::TrackingSnapshot;

/// Persistence layer for the tracking snapshot.
pub struct TrackingStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> TrackingStore<'a> {
    /// Creates a store over the given snapshot file.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: &Path) -> Self {
        Self { ctx, path: path.to_path_buf() }
    }

    /// Returns `true` if a snapshot file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.ctx.fs.exists(&self.path)
    }

    /// Loads the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<TrackingSnapshot, TrackError> {
        let contents = self.ctx.fs.read_to_string(&self.path).map_err(|e| TrackError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|e| TrackError::Parse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Writes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, snapshot: &TrackingSnapshot) -> Result<(), TrackError> {
        let yaml = serde_yaml::to_string(snapshot).map_err(|e| TrackError::Parse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        self.ctx.fs.write(&self.path, &yaml).map_err(|e| TrackError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Persists a freshly generated snapshot, enforcing the
    /// generate-once guard: if a snapshot with generated tasks already
    /// exists, this fails unless `force` is set.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::AlreadyGenerated`] when tasks exist and
    /// `force` is not set, or an I/O error from the write.
    pub fn initialize(&self, snapshot: &TrackingSnapshot, force: bool) -> Result<(), TrackError> {
        if !force && self.exists() {
            if let Ok(existing) = self.load() {
                if existing.tasks_generated {
                    return Err(TrackError::AlreadyGenerated);
                }
            }
        }
        self.save(snapshot)
    }

    /// Applies a partial edit to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownTask`] if the id does not exist.
    pub fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<DevelopmentTask, TrackError> {
        let now = self.ctx.clock.now();
        self.mutate(|snapshot| {
            let task = find_task(&mut snapshot.tasks, task_id)?;
            lifecycle::apply_update(task, update, now);
            Ok(task.clone())
        })
    }

    /// Reports a new blocker for a task. The task's status is re-synced
    /// from the blocker set (it becomes `blocked` unless already done).
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownTask`] if the task does not exist.
    pub fn add_blocker(
        &self,
        task_id: &str,
        description: &str,
        severity: Severity,
        reported_by: &str,
    ) -> Result<Blocker, TrackError> {
        let now = self.ctx.clock.now();
        let id = self.ctx.id_gen.generate_id();
        self.mutate(|snapshot| {
            // Reject references to tasks that do not exist rather than
            // letting orphan blockers accumulate.
            find_task(&mut snapshot.tasks, task_id)?;

            let blocker =
                lifecycle::new_blocker(&id, task_id, description, severity, reported_by, now);
            snapshot.blockers.push(blocker.clone());

            let blockers = snapshot.blockers.clone();
            let task = find_task(&mut snapshot.tasks, task_id)?;
            lifecycle::sync_blocked_status(task, &blockers, now);
            Ok(blocker)
        })
    }

    /// Resolves a blocker. The blocked task drops back to `todo` when
    /// this was its last unresolved blocker, and stays `blocked`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownBlocker`] if the id does not exist.
    pub fn resolve_blocker(
        &self,
        blocker_id: &str,
        resolution: &str,
        resolved_by: &str,
    ) -> Result<Blocker, TrackError> {
        let now = self.ctx.clock.now();
        self.mutate(|snapshot| {
            let blocker = snapshot
                .blockers
                .iter_mut()
                .find(|b| b.id == blocker_id)
                .ok_or_else(|| TrackError::UnknownBlocker { id: blocker_id.to_string() })?;
            lifecycle::resolve_blocker(blocker, resolution, resolved_by, now);
            let task_id = blocker.task_id.clone();
            let resolved = blocker.clone();

            let blockers = snapshot.blockers.clone();
            // The blocker may reference a task deleted by hand; resolve
            // still succeeds, there is just no status to sync.
            if let Ok(task) = find_task(&mut snapshot.tasks, &task_id) {
                lifecycle::sync_blocked_status(task, &blockers, now);
            }
            Ok(resolved)
        })
    }

    /// Attaches a new pending test case to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownTask`] if the task does not exist.
    pub fn add_task_test_case(
        &self,
        task_id: &str,
        scenario: &str,
        expected_result: &str,
    ) -> Result<TestCase, TrackError> {
        let now = self.ctx.clock.now();
        let id = self.ctx.id_gen.generate_id();
        self.mutate(|snapshot| {
            let task = find_task(&mut snapshot.tasks, task_id)?;
            let case = TestCase::new(&id, scenario, expected_result);
            task.test_cases.push(case.clone());
            task.testing_required = true;
            task.updated_at = now;
            Ok(case)
        })
    }

    /// Records the outcome of a test case on a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::UnknownTask`] or
    /// [`TrackError::UnknownTestCase`] when either id does not exist.
    pub fn update_task_test_case(
        &self,
        task_id: &str,
        case_id: &str,
        status: TestCaseStatus,
        actual_result: Option<&str>,
    ) -> Result<TestCase, TrackError> {
        let now = self.ctx.clock.now();
        self.mutate(|snapshot| {
            let task = find_task(&mut snapshot.tasks, task_id)?;
            let case = task
                .test_cases
                .iter_mut()
                .find(|c| c.id == case_id)
                .ok_or_else(|| TrackError::UnknownTestCase { id: case_id.to_string() })?;
            case.status = status;
            if let Some(actual) = actual_result {
                case.actual_result = Some(actual.to_string());
            }
            let updated = case.clone();
            task.updated_at = now;
            Ok(updated)
        })
    }

    /// Loads, applies `edit`, recomputes progress, stamps
    /// `last_updated`, and saves.
    fn mutate<T>(
        &self,
        edit: impl FnOnce(&mut TrackingSnapshot) -> Result<T, TrackError>,
    ) -> Result<T, TrackError> {
        let mut snapshot = self.load()?;
        let result = edit(&mut snapshot)?;
        snapshot.progress = progress::aggregate(&snapshot.tasks, &snapshot.blockers);
        snapshot.last_updated = self.ctx.clock.now();
        self.save(&snapshot)?;
        Ok(result)
    }
}

fn find_task<'t>(
    tasks: &'t mut [DevelopmentTask],
    task_id: &str,
) -> Result<&'t mut DevelopmentTask, TrackError> {
    tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| TrackError::UnknownTask { id: task_id.to_string() })
}
