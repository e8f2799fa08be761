//! Task factory: turns specification entities into task records.
//!
//! Every entity type has a fixed template (title pattern, default
//! hours, default priority). The hour and priority values here are the
//! behavioral contract consultants plan around; change them and every
//! existing estimate shifts.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::task::{
    DevelopmentTask, Priority, SpecEntityKind, SpecRef, TaskPhase, TaskStatus, TaskType,
};
use crate::model::test_case::TestCase;
use crate::spec::service::ServiceCategory;
use crate::spec::{AgentSpec, IntegrationFlow, ServiceEntry, Specification, SystemSpec};

/// Emits tasks for one generation run.
///
/// Ids are allocated from run-scoped counters (`task-001`, `tc-001`),
/// so regenerating the same specification yields identical output.
pub struct TaskFactory {
    tasks: Vec<DevelopmentTask>,
    next_task: usize,
    next_case: usize,
    now: DateTime<Utc>,
    created_by: String,
}

impl TaskFactory {
    /// Creates a factory stamping tasks with the given creation time
    /// and creator tag.
    #[must_use]
    pub fn new(now: DateTime<Utc>, created_by: &str) -> Self {
        Self {
            tasks: Vec::new(),
            next_task: 1,
            next_case: 1,
            now,
            created_by: created_by.to_string(),
        }
    }

    /// Reads the whole specification once and emits the flat task list:
    /// per-entity tasks in collection order, then the three per-run
    /// constants (end-to-end test, deployment, documentation).
    #[must_use]
    pub fn generate(mut self, spec: &Specification) -> Vec<DevelopmentTask> {
        for system in &spec.systems {
            self.emit_system_tasks(system);
        }
        for flow in &spec.integration_flows {
            self.emit_flow_tasks(flow);
        }
        for agent in &spec.ai_agents {
            self.emit_agent_tasks(agent);
        }
        for entry in &spec.service_entries {
            self.emit_service_task(entry);
        }
        self.emit_run_constants();

        debug!(task_count = self.tasks.len(), "task generation complete");
        self.tasks
    }

    fn emit_system_tasks(&mut self, system: &SystemSpec) {
        let spec_ref = |kind| SpecRef {
            kind,
            spec_id: system.id.clone(),
            name: system.name.clone(),
            system: Some(system.name.clone()),
        };

        if system.auth.required {
            let method = if system.auth.method.is_empty() {
                String::new()
            } else {
                format!(" ({})", system.auth.method)
            };
            self.push(TaskTemplate {
                title: format!("Set up {} authentication", system.name),
                description: format!(
                    "Configure and verify authentication{method} for {}.",
                    system.name
                ),
                task_type: TaskType::Integration,
                phase: TaskPhase::Auth,
                related: spec_ref(SpecEntityKind::System),
                hours: 4.0,
                priority: Priority::High,
                test_cases: Vec::new(),
            });
        }

        for module in &system.modules {
            self.push(TaskTemplate {
                title: format!("Implement {} module in {}", module.name, system.name),
                description: module.description.clone(),
                task_type: TaskType::Integration,
                phase: TaskPhase::Module,
                related: spec_ref(SpecEntityKind::System),
                hours: 8.0,
                priority: Priority::Medium,
                test_cases: Vec::new(),
            });

            if module.requires_field_mapping && !module.fields.is_empty() {
                self.push(TaskTemplate {
                    title: format!("Map {} fields in {}", module.name, system.name),
                    description: format!(
                        "Map {} field(s) between source and target shapes.",
                        module.fields.len()
                    ),
                    task_type: TaskType::Migration,
                    phase: TaskPhase::FieldMapping,
                    related: spec_ref(SpecEntityKind::System),
                    hours: 3.0,
                    priority: Priority::Medium,
                    test_cases: Vec::new(),
                });
            }
        }

        if system.migration.as_ref().is_some_and(|m| m.required) {
            let source = system.migration.as_ref().map(|m| m.source.clone()).unwrap_or_default();
            self.push(TaskTemplate {
                title: format!("Migrate data into {}", system.name),
                description: if source.is_empty() {
                    format!("Plan and execute the data migration into {}.", system.name)
                } else {
                    format!("Plan and execute the data migration from {source} into {}.", system.name)
                },
                task_type: TaskType::Migration,
                phase: TaskPhase::Migration,
                related: spec_ref(SpecEntityKind::System),
                hours: 16.0,
                priority: Priority::High,
                test_cases: Vec::new(),
            });
        }
    }

    fn emit_flow_tasks(&mut self, flow: &IntegrationFlow) {
        let system = if flow.source_system.is_empty() {
            None
        } else {
            Some(flow.source_system.clone())
        };
        let spec_ref = SpecRef {
            kind: SpecEntityKind::IntegrationFlow,
            spec_id: flow.id.clone(),
            name: flow.name.clone(),
            system,
        };

        // The workflow task carries the flow's own priority and test
        // cases rather than template defaults.
        self.push(TaskTemplate {
            title: format!("Build integration flow: {}", flow.name),
            description: format!(
                "Implement the {} flow from {} to {} ({} step(s)).",
                flow.name,
                flow.source_system,
                flow.target_system,
                flow.steps.len()
            ),
            task_type: TaskType::Workflow,
            phase: TaskPhase::Workflow,
            related: spec_ref.clone(),
            hours: 10.0,
            priority: flow.priority,
            test_cases: flow.test_cases.clone(),
        });

        self.push(TaskTemplate {
            title: format!("Add error handling to flow: {}", flow.name),
            description: if flow.error_handling.strategy.is_empty() {
                format!("Implement failure behavior for the {} flow.", flow.name)
            } else {
                format!(
                    "Implement {} error handling for the {} flow.",
                    flow.error_handling.strategy, flow.name
                )
            },
            task_type: TaskType::Workflow,
            phase: TaskPhase::ErrorHandling,
            related: spec_ref,
            hours: 4.0,
            priority: Priority::Medium,
            test_cases: Vec::new(),
        });
    }

    fn emit_agent_tasks(&mut self, agent: &AgentSpec) {
        let spec_ref = SpecRef {
            kind: SpecEntityKind::AiAgent,
            spec_id: agent.id.clone(),
            name: agent.name.clone(),
            system: None,
        };

        self.push(TaskTemplate {
            title: format!("Set up knowledge base for {}", agent.name),
            description: format!(
                "Ingest {} knowledge source(s) for {}.",
                agent.knowledge_sources.len(),
                agent.name
            ),
            task_type: TaskType::AiAgent,
            phase: TaskPhase::KnowledgeBase,
            related: spec_ref.clone(),
            hours: 8.0,
            priority: Priority::High,
            test_cases: Vec::new(),
        });

        self.push(TaskTemplate {
            title: format!("Design conversation flow for {}", agent.name),
            description: format!(
                "Design and wire the {}-step conversation flow.",
                agent.conversation_flow.len()
            ),
            task_type: TaskType::AiAgent,
            phase: TaskPhase::ConversationFlow,
            related: spec_ref.clone(),
            hours: 12.0,
            priority: Priority::High,
            test_cases: Vec::new(),
        });

        if agent.crm_integration {
            self.push(TaskTemplate {
                title: format!("Connect {} to the CRM", agent.name),
                description: format!("Wire {} into the CRM for reads and writes.", agent.name),
                task_type: TaskType::AiAgent,
                phase: TaskPhase::CrmIntegration,
                related: spec_ref.clone(),
                hours: 6.0,
                priority: Priority::Medium,
                test_cases: Vec::new(),
            });
        }

        // One test case per sample conversation.
        let cases: Vec<TestCase> = agent
            .training_examples
            .iter()
            .map(|example| {
                let id = self.next_case_id();
                TestCase::new(&id, &example.user_message, &example.expected_response)
            })
            .collect();
        self.push(TaskTemplate {
            title: format!("Train and test {}", agent.name),
            description: format!(
                "Train {} on {} sample conversation(s) and verify responses.",
                agent.name,
                agent.training_examples.len()
            ),
            task_type: TaskType::Testing,
            phase: TaskPhase::Training,
            related: spec_ref,
            hours: 8.0,
            priority: Priority::High,
            test_cases: cases,
        });
    }

    fn emit_service_task(&mut self, entry: &ServiceEntry) {
        let (title, task_type, hours, priority) = match entry.category {
            ServiceCategory::Automation => {
                let hours = match entry.automation_category.as_str() {
                    "lead_management" => 12.0,
                    "communication" => 8.0,
                    "crm_sync" => 16.0,
                    "team_productivity" => 10.0,
                    "ai_agents" => 24.0,
                    _ => 12.0,
                };
                let priority = if entry.automation_category == "lead_management" {
                    Priority::High
                } else {
                    Priority::Medium
                };
                (
                    format!("Implement automation: {}", entry.name),
                    TaskType::ServiceImplementation,
                    hours,
                    priority,
                )
            }
            ServiceCategory::AiAgent => {
                let hours = match entry.complexity.as_str() {
                    "complex" => 40.0,
                    "medium" => 24.0,
                    _ => 16.0,
                };
                (format!("Build AI agent: {}", entry.name), TaskType::AiAgent, hours, Priority::High)
            }
            ServiceCategory::Integration => {
                let hours = match entry.complexity.as_str() {
                    "complex" => 32.0,
                    "medium" => 20.0,
                    _ => 12.0,
                };
                (
                    format!("Deliver integration service: {}", entry.name),
                    TaskType::Integration,
                    hours,
                    Priority::Medium,
                )
            }
            ServiceCategory::SystemImplementation => {
                let hours = f64::from(entry.module_count.max(1)) * 8.0;
                (
                    format!("Implement system: {}", entry.name),
                    TaskType::SystemImplementation,
                    hours,
                    Priority::High,
                )
            }
            ServiceCategory::Additional => {
                let hours = match entry.scope.as_str() {
                    "enterprise" => 40.0,
                    "multi_department" => 24.0,
                    _ => 16.0,
                };
                (
                    format!("Deliver additional service: {}", entry.name),
                    TaskType::AdditionalService,
                    hours,
                    Priority::Medium,
                )
            }
        };

        let cases = self.synthesized_cases(&entry.name);
        self.push(TaskTemplate {
            title,
            description: format!("Deliver the purchased \"{}\" service entry.", entry.name),
            task_type,
            phase: TaskPhase::Service,
            related: SpecRef {
                kind: SpecEntityKind::ServiceEntry,
                spec_id: entry.id.clone(),
                name: entry.name.clone(),
                system: None,
            },
            hours,
            priority,
            test_cases: cases,
        });
    }

    fn emit_run_constants(&mut self) {
        let project_ref = || SpecRef {
            kind: SpecEntityKind::Project,
            spec_id: "project".to_string(),
            name: "Project".to_string(),
            system: None,
        };

        let cases = self.synthesized_cases("The integrated solution");
        self.push(TaskTemplate {
            title: "End-to-end integration testing".to_string(),
            description: "Exercise every integrated system and flow together.".to_string(),
            task_type: TaskType::Testing,
            phase: TaskPhase::EndToEnd,
            related: project_ref(),
            hours: 12.0,
            priority: Priority::High,
            test_cases: cases,
        });

        self.push(TaskTemplate {
            title: "Production deployment".to_string(),
            description: "Deploy the integrated solution to production.".to_string(),
            task_type: TaskType::Deployment,
            phase: TaskPhase::Deployment,
            related: project_ref(),
            hours: 4.0,
            priority: Priority::Critical,
            test_cases: Vec::new(),
        });

        self.push(TaskTemplate {
            title: "Documentation and handoff".to_string(),
            description: "Write operating documentation and hand off to the client.".to_string(),
            task_type: TaskType::Documentation,
            phase: TaskPhase::Documentation,
            related: project_ref(),
            hours: 8.0,
            priority: Priority::Medium,
            test_cases: Vec::new(),
        });
    }

    /// One case asserting to-spec behavior and one asserting error
    /// handling, for tasks whose verification we synthesize.
    fn synthesized_cases(&mut self, subject: &str) -> Vec<TestCase> {
        let spec_id = self.next_case_id();
        let err_id = self.next_case_id();
        vec![
            TestCase::new(
                &spec_id,
                &format!("{subject} operates according to specification"),
                "Behavior matches the agreed specification",
            ),
            TestCase::new(
                &err_id,
                &format!("{subject} handles failures"),
                "Errors are surfaced to the operator and no data is corrupted",
            ),
        ]
    }

    fn next_case_id(&mut self) -> String {
        let id = format!("tc-{:03}", self.next_case);
        self.next_case += 1;
        id
    }

    fn push(&mut self, template: TaskTemplate) {
        let id = format!("task-{:03}", self.next_task);
        self.next_task += 1;
        let testing_required = !template.test_cases.is_empty();
        self.tasks.push(DevelopmentTask {
            id,
            title: template.title,
            description: template.description,
            task_type: template.task_type,
            phase: template.phase,
            related_spec: template.related,
            status: TaskStatus::Todo,
            priority: template.priority,
            estimated_hours: template.hours,
            actual_hours: 0.0,
            dependencies: Vec::new(),
            blocks_other_tasks: Vec::new(),
            testing_required,
            test_cases: template.test_cases,
            sprint: None,
            sprint_number: None,
            technical_notes: String::new(),
            created_at: self.now,
            updated_at: self.now,
            created_by: self.created_by.clone(),
        });
    }
}

struct TaskTemplate {
    title: String,
    description: String,
    task_type: TaskType,
    phase: TaskPhase,
    related: SpecRef,
    hours: f64,
    priority: Priority,
    test_cases: Vec<TestCase>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{
        AgentSpec, AuthConfig, DataMigration, FieldMapping, IntegrationFlow, ModuleSpec,
        ServiceEntry, SystemSpec, TrainingExample,
    };
    use chrono::{TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn generate(spec: &Specification) -> Vec<DevelopmentTask> {
        TaskFactory::new(now(), "generator").generate(spec)
    }

    fn one_system(modules: Vec<ModuleSpec>, migration: Option<DataMigration>) -> Specification {
        Specification {
            systems: vec![SystemSpec {
                id: "sys-1".into(),
                name: "HubSpot".into(),
                auth: AuthConfig { method: "oauth2".into(), required: true },
                modules,
                migration,
            }],
            ..Specification::default()
        }
    }

    fn find<'a>(tasks: &'a [DevelopmentTask], phase: TaskPhase) -> &'a DevelopmentTask {
        tasks.iter().find(|t| t.phase == phase).expect("task for phase")
    }

    #[test]
    fn minimal_system_produces_at_least_five_tasks() {
        let spec = one_system(
            vec![ModuleSpec {
                name: "Contacts".into(),
                description: String::new(),
                requires_field_mapping: false,
                fields: Vec::new(),
            }],
            None,
        );
        let tasks = generate(&spec);

        // auth + module + e2e + deployment + documentation
        assert!(tasks.len() >= 5);
        assert_eq!(find(&tasks, TaskPhase::Auth).estimated_hours, 4.0);
        assert_eq!(find(&tasks, TaskPhase::Auth).priority, Priority::High);
        assert_eq!(find(&tasks, TaskPhase::Module).estimated_hours, 8.0);
        assert_eq!(find(&tasks, TaskPhase::EndToEnd).estimated_hours, 12.0);
        assert_eq!(find(&tasks, TaskPhase::Deployment).priority, Priority::Critical);
        assert_eq!(find(&tasks, TaskPhase::Documentation).estimated_hours, 8.0);
    }

    #[test]
    fn task_ids_are_deterministic_across_runs() {
        let spec = one_system(Vec::new(), None);
        let first = generate(&spec);
        let second = generate(&spec);
        assert_eq!(first, second);
        assert_eq!(first[0].id, "task-001");
        assert_eq!(first[1].id, "task-002");
    }

    #[test]
    fn field_mapping_task_needs_flag_and_fields() {
        let mapped = ModuleSpec {
            name: "Contacts".into(),
            description: String::new(),
            requires_field_mapping: true,
            fields: vec![FieldMapping { source: "email".into(), target: "primary_email".into() }],
        };
        let flagged_but_empty = ModuleSpec {
            name: "Deals".into(),
            description: String::new(),
            requires_field_mapping: true,
            fields: Vec::new(),
        };
        let spec = one_system(vec![mapped, flagged_but_empty], None);
        let tasks = generate(&spec);

        let mapping_tasks: Vec<_> =
            tasks.iter().filter(|t| t.phase == TaskPhase::FieldMapping).collect();
        assert_eq!(mapping_tasks.len(), 1);
        assert_eq!(mapping_tasks[0].estimated_hours, 3.0);
        assert!(mapping_tasks[0].title.contains("Contacts"));
    }

    #[test]
    fn migration_task_only_when_required() {
        let not_required = one_system(
            Vec::new(),
            Some(DataMigration { required: false, source: String::new(), notes: String::new() }),
        );
        assert!(!generate(&not_required).iter().any(|t| t.phase == TaskPhase::Migration));

        let required = one_system(
            Vec::new(),
            Some(DataMigration {
                required: true,
                source: "legacy CRM".into(),
                notes: String::new(),
            }),
        );
        let tasks = generate(&required);
        let migration = find(&tasks, TaskPhase::Migration);
        assert_eq!(migration.estimated_hours, 16.0);
        assert_eq!(migration.priority, Priority::High);
        assert_eq!(migration.task_type, TaskType::Migration);
    }

    #[test]
    fn auth_not_required_skips_auth_task() {
        let mut spec = one_system(Vec::new(), None);
        spec.systems[0].auth.required = false;
        let tasks = generate(&spec);
        assert!(!tasks.iter().any(|t| t.phase == TaskPhase::Auth));
    }

    #[test]
    fn flow_task_carries_flow_priority_and_test_cases() {
        let spec = Specification {
            integration_flows: vec![IntegrationFlow {
                id: "flow-1".into(),
                name: "Lead sync".into(),
                source_system: "HubSpot".into(),
                target_system: "Salesforce".into(),
                trigger: crate::spec::TriggerSpec::default(),
                steps: Vec::new(),
                error_handling: crate::spec::ErrorHandlingSpec::default(),
                priority: Priority::Critical,
                test_cases: vec![TestCase::new("tc-x", "lead syncs", "lead lands in target")],
            }],
            ..Specification::default()
        };
        let tasks = generate(&spec);

        let workflow = find(&tasks, TaskPhase::Workflow);
        assert_eq!(workflow.priority, Priority::Critical);
        assert_eq!(workflow.estimated_hours, 10.0);
        assert_eq!(workflow.test_cases.len(), 1);
        assert!(workflow.testing_required);
        assert_eq!(workflow.related_spec.system.as_deref(), Some("HubSpot"));

        let error = find(&tasks, TaskPhase::ErrorHandling);
        assert_eq!(error.estimated_hours, 4.0);
        assert_eq!(error.priority, Priority::Medium);
    }

    #[test]
    fn agent_tasks_follow_templates() {
        let spec = Specification {
            ai_agents: vec![AgentSpec {
                id: "agent-1".into(),
                name: "Support Bot".into(),
                knowledge_sources: vec!["faq.md".into()],
                conversation_flow: vec!["greet".into(), "resolve".into()],
                crm_integration: true,
                email_integration: false,
                calendar_integration: false,
                training_examples: vec![
                    TrainingExample {
                        user_message: "Where is my order?".into(),
                        expected_response: "Let me check.".into(),
                    },
                    TrainingExample {
                        user_message: "Cancel my plan".into(),
                        expected_response: String::new(),
                    },
                ],
            }],
            ..Specification::default()
        };
        let tasks = generate(&spec);

        assert_eq!(find(&tasks, TaskPhase::KnowledgeBase).estimated_hours, 8.0);
        assert_eq!(find(&tasks, TaskPhase::ConversationFlow).estimated_hours, 12.0);
        assert_eq!(find(&tasks, TaskPhase::CrmIntegration).estimated_hours, 6.0);
        assert_eq!(find(&tasks, TaskPhase::CrmIntegration).priority, Priority::Medium);

        let training = find(&tasks, TaskPhase::Training);
        assert_eq!(training.estimated_hours, 8.0);
        assert_eq!(training.task_type, TaskType::Testing);
        assert_eq!(training.test_cases.len(), 2);
        assert_eq!(training.test_cases[0].scenario, "Where is my order?");
    }

    #[test]
    fn crm_task_only_when_enabled() {
        let spec = Specification {
            ai_agents: vec![AgentSpec {
                id: "agent-1".into(),
                name: "Support Bot".into(),
                knowledge_sources: Vec::new(),
                conversation_flow: Vec::new(),
                crm_integration: false,
                email_integration: false,
                calendar_integration: false,
                training_examples: Vec::new(),
            }],
            ..Specification::default()
        };
        let tasks = generate(&spec);
        assert!(!tasks.iter().any(|t| t.phase == TaskPhase::CrmIntegration));
    }

    fn service(category: ServiceCategory) -> ServiceEntry {
        ServiceEntry {
            id: "svc-1".into(),
            name: "Lead scoring".into(),
            category,
            automation_category: String::new(),
            complexity: String::new(),
            scope: String::new(),
            module_count: 0,
        }
    }

    #[test]
    fn automation_service_hours_by_category() {
        for (tag, hours, priority) in [
            ("lead_management", 12.0, Priority::High),
            ("communication", 8.0, Priority::Medium),
            ("crm_sync", 16.0, Priority::Medium),
            ("team_productivity", 10.0, Priority::Medium),
            ("ai_agents", 24.0, Priority::Medium),
            ("something_new", 12.0, Priority::Medium),
        ] {
            let mut entry = service(ServiceCategory::Automation);
            entry.automation_category = tag.into();
            let spec =
                Specification { service_entries: vec![entry], ..Specification::default() };
            let tasks = generate(&spec);
            let task = find(&tasks, TaskPhase::Service);
            assert_eq!(task.estimated_hours, hours, "category {tag}");
            assert_eq!(task.priority, priority, "category {tag}");
            assert_eq!(task.task_type, TaskType::ServiceImplementation);
        }
    }

    #[test]
    fn agent_and_integration_service_hours_by_complexity() {
        for (complexity, agent_hours, integration_hours) in
            [("complex", 40.0, 32.0), ("medium", 24.0, 20.0), ("simple", 16.0, 12.0)]
        {
            let mut agent = service(ServiceCategory::AiAgent);
            agent.complexity = complexity.into();
            let mut integration = service(ServiceCategory::Integration);
            integration.id = "svc-2".into();
            integration.complexity = complexity.into();

            let spec = Specification {
                service_entries: vec![agent, integration],
                ..Specification::default()
            };
            let tasks = generate(&spec);
            let by_type = |tt: TaskType| {
                tasks.iter().find(|t| t.task_type == tt).expect("service task").estimated_hours
            };
            assert_eq!(by_type(TaskType::AiAgent), agent_hours, "complexity {complexity}");
            assert_eq!(
                by_type(TaskType::Integration),
                integration_hours,
                "complexity {complexity}"
            );
        }
    }

    #[test]
    fn system_implementation_service_scales_with_modules() {
        let mut entry = service(ServiceCategory::SystemImplementation);
        entry.module_count = 3;
        let spec =
            Specification { service_entries: vec![entry], ..Specification::default() };
        assert_eq!(find(&generate(&spec), TaskPhase::Service).estimated_hours, 24.0);

        // Minimum of one module even when the count is zero.
        let entry = service(ServiceCategory::SystemImplementation);
        let spec =
            Specification { service_entries: vec![entry], ..Specification::default() };
        assert_eq!(find(&generate(&spec), TaskPhase::Service).estimated_hours, 8.0);
    }

    #[test]
    fn additional_service_hours_by_scope() {
        for (scope, hours) in
            [("enterprise", 40.0), ("multi_department", 24.0), ("single_team", 16.0)]
        {
            let mut entry = service(ServiceCategory::Additional);
            entry.scope = scope.into();
            let spec =
                Specification { service_entries: vec![entry], ..Specification::default() };
            let tasks = generate(&spec);
            let task = find(&tasks, TaskPhase::Service);
            assert_eq!(task.estimated_hours, hours, "scope {scope}");
            assert_eq!(task.task_type, TaskType::AdditionalService);
        }
    }

    #[test]
    fn service_tasks_get_spec_and_error_test_cases() {
        let spec = Specification {
            service_entries: vec![service(ServiceCategory::Automation)],
            ..Specification::default()
        };
        let tasks = generate(&spec);
        let task = find(&tasks, TaskPhase::Service);
        assert!(task.testing_required);
        assert_eq!(task.test_cases.len(), 2);
        assert!(task.test_cases[0].scenario.contains("operates according to specification"));
        assert!(task.test_cases[1].scenario.contains("handles failures"));
    }

    #[test]
    fn related_spec_ids_exist_in_specification() {
        let spec = Specification {
            systems: vec![SystemSpec {
                id: "sys-1".into(),
                name: "HubSpot".into(),
                auth: AuthConfig::default(),
                modules: Vec::new(),
                migration: None,
            }],
            integration_flows: vec![IntegrationFlow {
                id: "flow-1".into(),
                name: "Lead sync".into(),
                source_system: "HubSpot".into(),
                target_system: "Sheets".into(),
                trigger: crate::spec::TriggerSpec::default(),
                steps: Vec::new(),
                error_handling: crate::spec::ErrorHandlingSpec::default(),
                priority: Priority::Medium,
                test_cases: Vec::new(),
            }],
            ai_agents: Vec::new(),
            service_entries: vec![service(ServiceCategory::Additional)],
        };
        let tasks = generate(&spec);

        for task in &tasks {
            if task.related_spec.kind != SpecEntityKind::Project {
                assert!(
                    spec.contains_entity(&task.related_spec.spec_id),
                    "task {} references unknown entity {}",
                    task.id,
                    task.related_spec.spec_id
                );
            }
        }
    }

    #[test]
    fn empty_specification_still_emits_run_constants() {
        let tasks = generate(&Specification::default());
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].phase, TaskPhase::EndToEnd);
        assert_eq!(tasks[1].phase, TaskPhase::Deployment);
        assert_eq!(tasks[2].phase, TaskPhase::Documentation);
    }
}
