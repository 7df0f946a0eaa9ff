use employee_tracker::db::{Department, EmployeeView, RoleView};
use employee_tracker::table::render;

#[test]
fn renders_header_and_rows_padded_to_widest_cell() {
    let rows = vec![
        Department {
            id: 1,
            name: "Engineering".into(),
        },
        Department {
            id: 12,
            name: "Legal".into(),
        },
    ];
    let expected = "\
┌────┬─────────────┐
│ id │ name        │
├────┼─────────────┤
│  1 │ Engineering │
│ 12 │ Legal       │
└────┴─────────────┘
";
    assert_eq!(render(&rows), expected);
}

#[test]
fn empty_result_renders_header_only() {
    let rows: Vec<Department> = Vec::new();
    let expected = "\
┌────┬──────┐
│ id │ name │
├────┼──────┤
└────┴──────┘
";
    assert_eq!(render(&rows), expected);
}

#[test]
fn role_salary_column_is_right_aligned() {
    let rows = vec![RoleView {
        id: 1,
        title: "Engineer".into(),
        department: "Engineering".into(),
        salary: 90000.0,
    }];
    let rendered = render(&rows);
    assert!(rendered.contains("│ id │ title    │ department  │ salary │"));
    assert!(rendered.contains("│  1 │ Engineer │ Engineering │  90000 │"));
}

#[test]
fn employee_without_manager_shows_none() {
    let rows = vec![EmployeeView {
        id: 1,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        title: "Engineer".into(),
        department: "Engineering".into(),
        salary: 90000.0,
        manager: None,
    }];
    let rendered = render(&rows);
    assert!(rendered.contains("│ None    │"));
    assert!(rendered.contains("│  90000 │"));
}

#[test]
fn width_counts_characters_not_bytes() {
    let rows = vec![Department {
        id: 1,
        name: "Zürich".into(),
    }];
    assert!(render(&rows).contains("│ Zürich │"));
}
