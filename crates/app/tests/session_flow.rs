//! End-to-end flows through the shell and orchestrator.

use stockroom_app::shell::Command;
use stockroom_app::{AppConfig, AppState, Intent, Outcome, Shell, ShellError, TableIntent};
use stockroom_core::DomainError;
use stockroom_inventory::{CategoryFilter, SortDirection};

fn run(shell: &mut Shell, script: &str) -> String {
    script
        .lines()
        .map(|line| shell.run_line(line).output)
        .collect()
}

fn names(state: &AppState) -> Vec<String> {
    state.view().into_iter().map(|i| i.name().to_string()).collect()
}

#[test]
fn scripted_session_creates_filters_and_sorts() {
    let mut shell = Shell::default();
    let output = run(
        &mut shell,
        "add
         set name Widget
         set category Tools
         set quantity 5
         set price 9.99
         submit
         add
         set name Bolt
         set category Tools
         set quantity 50
         set price 0.10
         submit
         add
         set name Primer
         set category Paint
         set quantity 8
         submit",
    );

    assert!(output.contains("created"));
    assert_eq!(names(shell.state()), vec!["Bolt", "Primer", "Widget"]);
    assert_eq!(shell.state().categories(), vec!["Tools", "Paint"]);

    let listing = shell.run_line("filter Tools").output;
    assert!(listing.contains("showing category Tools"));
    assert!(!listing.contains("Primer"));

    shell.run_line("sort");
    assert_eq!(shell.state().sort_direction(), SortDirection::Asc);
    assert_eq!(names(shell.state()), vec!["Widget", "Bolt"]);

    shell.run_line("filter");
    assert!(shell.state().filter().is_all());
    assert_eq!(names(shell.state()), vec!["Widget", "Primer", "Bolt"]);
}

#[test]
fn edit_by_row_updates_record_in_place() {
    let mut shell = Shell::default();
    run(
        &mut shell,
        "add\nset name A\nset category X\nset quantity 1\nsubmit\n\
         add\nset name B\nset category X\nset quantity 2\nsubmit",
    );
    let original_order: Vec<_> = shell.state().store().items().iter().map(|i| i.id_typed()).collect();

    // Descending view: row 1 is B.
    let opened = shell.run_line("edit 1").output;
    assert!(opened.contains("Name:     B"));
    assert!(opened.contains("[Update Item]"));

    let out = run(&mut shell, "set quantity 20\nset name B-prime\nsubmit");
    assert!(out.contains("updated"));

    let order: Vec<_> = shell.state().store().items().iter().map(|i| i.id_typed()).collect();
    assert_eq!(order, original_order);
    let b = shell.state().store().get(order[1]).unwrap();
    assert_eq!((b.name(), b.quantity()), ("B-prime", 20));
    assert_eq!(shell.state().store().get(order[0]).unwrap().name(), "A");
}

#[test]
fn blocked_submit_reports_and_keeps_form_open() {
    let mut shell = Shell::default();
    let out = run(&mut shell, "add\nset category Tools\nsubmit");
    assert!(out.contains("error: validation failed: name is required"));
    assert!(!shell.state().session().is_idle());
    assert!(shell.state().store().is_empty());

    let out = run(&mut shell, "set name Hammer\nset quantity -4\nsubmit");
    assert!(out.contains("quantity cannot be negative"));

    let out = run(&mut shell, "set quantity abc\nsubmit");
    assert!(out.contains("created"));
    assert_eq!(shell.state().store().items()[0].quantity(), 0);
}

#[test]
fn delete_does_not_touch_open_form() {
    let mut shell = Shell::default();
    run(&mut shell, "add\nset name A\nset category X\nsubmit");
    shell.run_line("add");
    let out = shell.run_line("delete 1").output;
    assert!(out.contains("deleted"));
    assert!(out.contains("No items in inventory"));
    assert!(!shell.state().session().is_idle());
    assert!(shell.state().session().target().is_none());
}

#[test]
fn handle_line_surfaces_domain_errors() {
    let mut shell = Shell::default();
    let err = shell.handle_line("submit").unwrap_err();
    assert!(matches!(err, ShellError::Domain(DomainError::InvariantViolation(_))));
    assert_eq!(Command::parse("json").unwrap(), Some(Command::Json));
}

#[test]
fn json_lists_current_view() {
    let mut shell = Shell::default();
    run(&mut shell, "add\nset name Widget\nset category Tools\nset quantity 5\nset price 9.99\nsubmit");
    let json = shell.run_line("json").output;
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(rows[0]["name"], "Widget");
    assert_eq!(rows[0]["price"], "$9.99");
    assert_eq!(rows[0]["low_stock"], true);
}

#[test]
fn previous_state_survives_mutation() {
    let mut state = AppState::from_config(&AppConfig::new(SortDirection::Desc, None));
    state.open_create_form();
    state.set_field(stockroom_inventory::FormField::Name, "A").unwrap();
    state.set_field(stockroom_inventory::FormField::Category, "X").unwrap();
    let Outcome::Created(id) = state.submit().unwrap() else {
        panic!("expected create");
    };

    let snapshot = state.store().clone();
    state.dispatch(Intent::Table(TableIntent::Delete(id))).unwrap();
    assert!(state.store().is_empty());
    assert!(snapshot.get(id).is_some());

    let restored = AppState::new().with_store(snapshot);
    assert_eq!(restored.store().len(), 1);
    assert_eq!(
        restored.clone().dispatch(Intent::SelectCategory(CategoryFilter::only("X"))).unwrap(),
        Outcome::Filtered(CategoryFilter::only("X"))
    );
}
