use employee_tracker::db::{NewEmployee, NewRole, RosterStorage};
use employee_tracker::handlers::parse_salary;
use employee_tracker::menu::MENU_PROMPT;
use employee_tracker::prompt::{Answer, Choice, Prompter, ScriptedPrompter, choose};
use employee_tracker::{Menu, MenuChoice, TrackerError};

async fn memory_storage() -> RosterStorage {
    let storage = RosterStorage::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    storage.init_schema().await.expect("failed to init schema");
    storage
}

/// Drive a menu session with `answers`; returns the run result, the
/// output text and the prompts that were shown.
async fn run_session(
    storage: RosterStorage,
    answers: Vec<Answer>,
) -> (Result<(), TrackerError>, String, Vec<String>) {
    let mut prompter = ScriptedPrompter::new(answers);
    let mut out = Vec::new();
    let result = Menu::new(storage, &mut prompter, &mut out).run().await;
    let text = String::from_utf8(out).expect("output was not utf-8");
    (result, text, prompter.asked().to_vec())
}

fn menu_prompts(asked: &[String]) -> usize {
    asked.iter().filter(|p| p.as_str() == MENU_PROMPT).count()
}

#[tokio::test]
async fn exit_ends_session_immediately() {
    let (result, out, asked) = run_session(memory_storage().await, vec![Answer::pick("Exit")]).await;
    assert!(result.is_ok());
    assert!(out.is_empty());
    assert_eq!(asked, vec![MENU_PROMPT.to_string()]);
}

#[tokio::test]
async fn add_department_and_role_then_view_them() {
    let answers = vec![
        Answer::pick("Add a department"),
        Answer::text("Engineering"),
        Answer::pick("View all departments"),
        Answer::pick("Add a role"),
        Answer::text("Engineer"),
        Answer::text("90000"),
        Answer::pick("Engineering"),
        Answer::pick("View all roles"),
        Answer::pick("Exit"),
    ];
    let (result, out, asked) = run_session(memory_storage().await, answers).await;

    assert!(result.is_ok());
    assert!(out.contains("Department Engineering added successfully."));
    assert!(out.contains("│  1 │ Engineering │"));
    assert!(out.contains("Engineer role successfully added."));
    assert!(out.contains("│ id │ title    │ department  │ salary │"));
    assert!(out.contains("│  1 │ Engineer │ Engineering │  90000 │"));
    assert_eq!(menu_prompts(&asked), 5);
}

#[tokio::test]
async fn employees_show_manager_name_or_none() {
    let storage = memory_storage().await;
    let department_id = storage.add_department("Engineering").await.unwrap();
    storage
        .add_role(&NewRole {
            title: "Engineer".into(),
            salary: 90000.0,
            department_id,
        })
        .await
        .unwrap();

    let answers = vec![
        Answer::pick("Add an employee"),
        Answer::text("Ada"),
        Answer::text("Lovelace"),
        Answer::pick("Engineer"),
        Answer::pick("None"),
        Answer::pick("Add an employee"),
        Answer::text("Grace"),
        Answer::text("Hopper"),
        Answer::pick("Engineer"),
        Answer::pick("Ada Lovelace"),
        Answer::pick("View all employees"),
        Answer::pick("Exit"),
    ];
    let (result, out, _) = run_session(storage, answers).await;

    assert!(result.is_ok());
    assert!(out.contains("Employee Ada Lovelace successfully added."));
    assert!(out.contains("Employee Grace Hopper successfully added."));
    let rows: Vec<&str> = out.lines().filter(|l| l.starts_with('│')).skip(1).collect();
    assert_eq!(rows.len(), 2);
    let (ada_row, grace_row) = (rows[0], rows[1]);
    assert!(ada_row.contains("│ Ada "));
    assert!(ada_row.ends_with("│ None         │"));
    assert!(grace_row.contains("│ Grace "));
    assert!(grace_row.ends_with("│ Ada Lovelace │"));
}

#[tokio::test]
async fn update_reports_employee_and_changes_role() {
    let storage = memory_storage().await;
    let department_id = storage.add_department("Engineering").await.unwrap();
    let engineer = storage
        .add_role(&NewRole {
            title: "Engineer".into(),
            salary: 90000.0,
            department_id,
        })
        .await
        .unwrap();
    storage
        .add_role(&NewRole {
            title: "Architect".into(),
            salary: 180000.0,
            department_id,
        })
        .await
        .unwrap();
    storage
        .add_employee(&NewEmployee {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role_id: engineer,
            manager_id: None,
        })
        .await
        .unwrap();

    let answers = vec![
        Answer::pick("Update an employee role"),
        Answer::pick("Ada Lovelace"),
        Answer::pick("Architect"),
        Answer::pick("View all employees"),
        Answer::pick("Exit"),
    ];
    let (result, out, _) = run_session(storage, answers).await;

    assert!(result.is_ok());
    assert!(out.contains("Ada Lovelace's role successfully updated."));
    let row = out
        .lines()
        .find(|l| l.starts_with('│') && l.contains("Lovelace"))
        .expect("Ada's row");
    assert!(row.contains("Architect"));
    assert!(row.contains("180000"));
    assert!(!row.contains("Engineer "));
}

#[tokio::test]
async fn failed_statement_is_printed_and_menu_redisplayed() {
    let answers = vec![
        Answer::pick("Add a department"),
        Answer::text(""),
        Answer::pick("View all departments"),
        Answer::pick("Exit"),
    ];
    let (result, out, asked) = run_session(memory_storage().await, answers).await;

    assert!(result.is_ok());
    assert!(out.contains("Error: Database error"));
    assert!(!out.contains("added successfully"));
    // header and borders only: no department rows were written
    assert_eq!(out.lines().filter(|l| l.starts_with('│')).count(), 1);
    assert_eq!(menu_prompts(&asked), 3);
}

#[tokio::test]
async fn non_numeric_salary_writes_nothing() {
    let storage = memory_storage().await;
    storage.add_department("Sales").await.unwrap();

    let answers = vec![
        Answer::pick("Add a role"),
        Answer::text("Salesperson"),
        Answer::text("plenty"),
        Answer::pick("Sales"),
        Answer::pick("View all roles"),
        Answer::pick("Exit"),
    ];
    let (result, out, _) = run_session(storage, answers).await;

    assert!(result.is_ok());
    assert!(out.contains(r#"Error: Salary must be a number, got "plenty""#));
    assert!(!out.contains("Salesperson"));
}

#[tokio::test]
async fn empty_reference_lists_short_circuit_handlers() {
    let answers = vec![
        Answer::pick("Add a role"),
        Answer::pick("Add an employee"),
        Answer::pick("Update an employee role"),
        Answer::pick("Exit"),
    ];
    let (result, out, asked) = run_session(memory_storage().await, answers).await;

    assert!(result.is_ok());
    assert!(out.contains("No departments found. Add a department first."));
    assert!(out.contains("No roles found. Add a role first."));
    assert!(out.contains("No employees found. Add an employee first."));
    assert!(asked.iter().all(|p| p == MENU_PROMPT));
}

#[tokio::test]
async fn prompt_failure_ends_session_with_error() {
    let answers = vec![Answer::pick("Add a department")];
    let (result, out, asked) = run_session(memory_storage().await, answers).await;

    let err = result.unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, TrackerError::ScriptExhausted(ref p) if p == "Enter the name of the department:"));
    assert!(out.is_empty());
    assert_eq!(asked.len(), 2);
}

#[test]
fn menu_lists_eight_actions_ending_with_exit() {
    let labels = MenuChoice::labels();
    assert_eq!(labels.len(), 8);
    assert_eq!(labels[0], "View all departments");
    assert_eq!(labels[6], "Update an employee role");
    assert_eq!(labels.last().map(String::as_str), Some("Exit"));
    assert_eq!(MenuChoice::AddRole.to_string(), "Add a role");
}

#[test]
fn salary_accepts_plain_and_grouped_numbers() {
    assert_eq!(parse_salary("90000").unwrap(), 90000.0);
    assert_eq!(parse_salary(" 85,500.50 ").unwrap(), 85500.5);
}

#[test]
fn salary_rejects_text_and_non_finite_values() {
    assert!(matches!(
        parse_salary("lots"),
        Err(TrackerError::InvalidSalary(raw)) if raw == "lots"
    ));
    assert!(parse_salary("").is_err());
    assert!(parse_salary("inf").is_err());
}

#[test]
fn choose_returns_value_behind_label() {
    let choices = vec![Choice::new("Sales", 2_i64), Choice::new("Legal", 4_i64)];
    let mut prompter = ScriptedPrompter::new([Answer::pick("Legal")]);
    let picked = choose(&mut prompter, "Department?", &choices).expect("pick");
    assert_eq!(picked.value, 4);
    assert_eq!(prompter.asked(), ["Department?".to_string()]);

    let mut prompter = ScriptedPrompter::new([Answer::pick("Marketing")]);
    let err = choose(&mut prompter, "Department?", &choices).unwrap_err();
    assert!(matches!(err, TrackerError::UnknownChoice { .. }));
}

#[test]
fn prompt_and_output_failures_are_fatal_statement_failures_are_not() {
    let mut prompter = ScriptedPrompter::new([Answer::text("Ada")]);
    assert_eq!(prompter.input("First name?").unwrap(), "Ada");
    assert!(prompter.input("Last name?").unwrap_err().is_fatal());
    assert_eq!(prompter.remaining(), 0);

    let eof = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
    assert!(TrackerError::PromptError(dialoguer::Error::IO(eof)).is_fatal());
    assert!(!TrackerError::DatabaseError(sqlx::Error::RowNotFound).is_fatal());
    assert!(!TrackerError::InvalidSalary("lots".into()).is_fatal());
    assert!(!TrackerError::EmployeeNotFound(7).is_fatal());
}
