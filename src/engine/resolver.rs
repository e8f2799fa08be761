//! Dependency resolver: adds directed prerequisite edges to the task list.
//!
//! Edges are joined exactly on the typed back-references the factory
//! emits (owning system + phase), replacing the title-substring matching
//! of the original tracking tool. The edge semantics are unchanged:
//! authentication before integration work, integration before migration,
//! everything before the end-to-end test, testing before deployment.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::model::task::{DevelopmentTask, TaskPhase, TaskType};

/// Adds prerequisite edges in place. Existing edges are never removed;
/// duplicates and self-edges are never created.
pub fn link_dependencies(tasks: &mut [DevelopmentTask]) {
    let mut edges: Vec<(usize, usize)> = Vec::new(); // (dependent, prerequisite)

    // Auth task index per owning system.
    let auth_by_system: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.phase == TaskPhase::Auth)
        .filter_map(|(i, t)| t.related_spec.system.as_deref().map(|s| (s, i)))
        .collect();

    // 1. Integration work on a system waits for that system's auth.
    for (i, task) in tasks.iter().enumerate() {
        if task.phase == TaskPhase::Auth {
            continue;
        }
        if !matches!(task.task_type, TaskType::Integration | TaskType::Workflow) {
            continue;
        }
        if let Some(system) = task.related_spec.system.as_deref() {
            if let Some(&auth) = auth_by_system.get(system) {
                edges.push((i, auth));
            }
        }
    }

    // 2. Migration into a system waits for every integration task of
    //    that system (auth included).
    for (i, task) in tasks.iter().enumerate() {
        if task.task_type != TaskType::Migration {
            continue;
        }
        let Some(system) = task.related_spec.system.as_deref() else { continue };
        for (j, other) in tasks.iter().enumerate() {
            if matches!(other.task_type, TaskType::Integration | TaskType::Workflow)
                && other.related_spec.system.as_deref() == Some(system)
            {
                edges.push((i, j));
            }
        }
    }

    // 3. The end-to-end test waits for every non-testing, non-deployment task.
    for (i, task) in tasks.iter().enumerate() {
        if task.phase != TaskPhase::EndToEnd {
            continue;
        }
        for (j, other) in tasks.iter().enumerate() {
            if !matches!(other.task_type, TaskType::Testing | TaskType::Deployment) {
                edges.push((i, j));
            }
        }
    }

    // 4. Deployment waits for every testing-type task.
    for (i, task) in tasks.iter().enumerate() {
        if task.task_type != TaskType::Deployment {
            continue;
        }
        for (j, other) in tasks.iter().enumerate() {
            if other.task_type == TaskType::Testing {
                edges.push((i, j));
            }
        }
    }

    for (dependent, prerequisite) in edges {
        add_edge(tasks, dependent, prerequisite);
    }

    debug!(
        edge_count = tasks.iter().map(|t| t.dependencies.len()).sum::<usize>(),
        "dependency resolution complete"
    );
}

/// Records `prerequisite -> dependent` symmetrically on both tasks.
fn add_edge(tasks: &mut [DevelopmentTask], dependent: usize, prerequisite: usize) {
    if dependent == prerequisite {
        return;
    }
    let prerequisite_id = tasks[prerequisite].id.clone();
    let dependent_id = tasks[dependent].id.clone();

    let deps = &mut tasks[dependent].dependencies;
    if !deps.contains(&prerequisite_id) {
        deps.push(prerequisite_id);
    }
    let blocks = &mut tasks[prerequisite].blocks_other_tasks;
    if !blocks.contains(&dependent_id) {
        blocks.push(dependent_id);
    }
}

/// Detects dependency cycles using DFS with coloring.
///
/// Returns each cycle as the list of task ids on it. The generator only
/// reports cycles; it never fails on them unless running in strict mode.
#[must_use]
pub fn detect_cycles(tasks: &[DevelopmentTask]) -> Vec<Vec<String>> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let graph: HashMap<&str, Vec<&str>> = tasks
        .iter()
        .map(|t| {
            let deps: Vec<&str> = t
                .dependencies
                .iter()
                .map(String::as_str)
                .filter(|d| ids.contains(d))
                .collect();
            (t.id.as_str(), deps)
        })
        .collect();

    let mut cycles: Vec<Vec<String>> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut on_stack: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();

    for task in tasks {
        if !visited.contains(task.id.as_str()) {
            dfs(task.id.as_str(), &graph, &mut visited, &mut on_stack, &mut stack, &mut cycles);
        }
    }

    cycles
}

fn dfs<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    on_stack: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
    cycles: &mut Vec<Vec<String>>,
) {
    visited.insert(node);
    on_stack.insert(node);
    stack.push(node);

    if let Some(deps) = graph.get(node) {
        for &dep in deps {
            if !visited.contains(dep) {
                dfs(dep, graph, visited, on_stack, stack, cycles);
            } else if on_stack.contains(dep) {
                if let Some(start) = stack.iter().position(|&n| n == dep) {
                    cycles.push(stack[start..].iter().map(|s| (*s).to_string()).collect());
                }
            }
        }
    }

    stack.pop();
    on_stack.remove(node);
}
