//! Sprint allocator: buckets tasks into fixed-size sprints.
//!
//! Ordering is by dependency *count*, not dependency closure. That is
//! not a topological sort: a task can land in the same or an earlier
//! sprint than one of its prerequisites when counts tie. This mirrors
//! the behavior downstream planners already expect; see DESIGN.md
//! before changing it.

use tracing::debug;

use crate::model::task::DevelopmentTask;

/// Number of tasks per sprint bucket.
pub const SPRINT_SIZE: usize = 10;

/// Assigns every task a sprint number and label in place.
///
/// Tasks are stable-sorted ascending by their current dependency count
/// (ties keep generation order) and chunked into groups of
/// [`SPRINT_SIZE`]; the i-th task (1-based) gets sprint
/// `ceil(i / SPRINT_SIZE)`.
pub fn allocate(tasks: &mut [DevelopmentTask]) {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    // sort_by_key is stable, so ties keep generation order.
    order.sort_by_key(|&i| tasks[i].dependencies.len());

    for (position, &index) in order.iter().enumerate() {
        let number = u32::try_from(position / SPRINT_SIZE + 1).unwrap_or(u32::MAX);
        tasks[index].sprint_number = Some(number);
        tasks[index].sprint = Some(format!("Sprint {number}"));
    }

    let sprint_count = tasks.len().div_ceil(SPRINT_SIZE);
    debug!(task_count = tasks.len(), sprint_count, "sprint allocation complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, SpecEntityKind, SpecRef, TaskPhase, TaskStatus, TaskType};
    use chrono::{TimeZone, Utc};

    fn task(id: &str, dependency_count: usize) -> DevelopmentTask {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        DevelopmentTask {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: String::new(),
            task_type: TaskType::Integration,
            phase: TaskPhase::Module,
            related_spec: SpecRef {
                kind: SpecEntityKind::System,
                spec_id: "sys-1".into(),
                name: "HubSpot".into(),
                system: Some("HubSpot".into()),
            },
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            estimated_hours: 8.0,
            actual_hours: 0.0,
            dependencies: (0..dependency_count).map(|n| format!("dep-{n}")).collect(),
            blocks_other_tasks: Vec::new(),
            testing_required: false,
            test_cases: Vec::new(),
            sprint: None,
            sprint_number: None,
            technical_notes: String::new(),
            created_at: now,
            updated_at: now,
            created_by: "generator".into(),
        }
    }

    #[test]
    fn twenty_three_tasks_fill_three_sprints() {
        // Dependency counts 0..=22, shuffled so generation order and
        // count order differ.
        let mut tasks: Vec<DevelopmentTask> =
            (0..23).map(|n| task(&format!("task-{n:03}"), (n * 7) % 23)).collect();
        allocate(&mut tasks);

        // The 10 tasks with the lowest counts land in Sprint 1, the
        // next 10 in Sprint 2, the remaining 3 in Sprint 3.
        let mut by_count: Vec<&DevelopmentTask> = tasks.iter().collect();
        by_count.sort_by_key(|t| t.dependencies.len());
        for (position, task) in by_count.iter().enumerate() {
            let expected = (position / 10 + 1) as u32;
            assert_eq!(task.sprint_number, Some(expected), "task {}", task.id);
            assert_eq!(task.sprint.as_deref(), Some(format!("Sprint {expected}").as_str()));
        }
        assert_eq!(tasks.iter().filter(|t| t.sprint_number == Some(3)).count(), 3);
    }

    #[test]
    fn ties_keep_generation_order() {
        // All counts equal: the first ten stay in Sprint 1.
        let mut tasks: Vec<DevelopmentTask> =
            (0..12).map(|n| task(&format!("task-{n:03}"), 1)).collect();
        allocate(&mut tasks);

        for (n, task) in tasks.iter().enumerate() {
            let expected = if n < 10 { 1 } else { 2 };
            assert_eq!(task.sprint_number, Some(expected), "task {}", task.id);
        }
    }

    #[test]
    fn empty_task_list_is_a_no_op() {
        let mut tasks: Vec<DevelopmentTask> = Vec::new();
        allocate(&mut tasks);
        assert!(tasks.is_empty());
    }

    #[test]
    fn single_task_gets_sprint_one() {
        let mut tasks = vec![task("task-001", 5)];
        allocate(&mut tasks);
        assert_eq!(tasks[0].sprint.as_deref(), Some("Sprint 1"));
        assert_eq!(tasks[0].sprint_number, Some(1));
    }
}
