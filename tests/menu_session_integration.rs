//! Drives whole menu sessions through a scripted console.

use carbook::commands::run;
use carbook::infra::db::Database;
use carbook::ui::Key;
use carbook::ui::scripted::{Input, ScriptedConsole};

fn key(key: Key) -> Input {
    Input::Key(key)
}

/// Move down `steps` rows in the main menu and confirm.
fn pick(steps: usize) -> Vec<Input> {
    let mut inputs = vec![key(Key::Down); steps];
    inputs.push(key(Key::Enter));
    inputs
}

#[test]
fn test_session_add_list_delete() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;

    let mut script = Vec::new();
    // Add Owner
    script.extend(pick(0));
    script.extend([
        Input::line("Anna"),
        Input::line("31"),
        Input::line("1 Main Street"),
        key(Key::Enter),
    ]);
    // Add Car for Anna
    script.extend(pick(1));
    script.extend([
        key(Key::Enter),
        Input::line("Civic"),
        Input::line("2004"),
        key(Key::Enter),
    ]);
    // Show Database
    script.extend(pick(2));
    script.push(key(Key::Enter));
    // Delete Owner (Anna)
    script.extend(pick(3));
    script.extend([key(Key::Enter), key(Key::Enter)]);
    // Exit
    script.extend(pick(5));

    let mut console = ScriptedConsole::new(script);
    run(&db, &mut console)?;

    let transcript = console.transcript();
    assert!(transcript.contains(&"Owner: Anna, Age: 31, Address: 1 Main Street"));
    assert!(transcript.contains(&"  Model: Civic, Year: 2004"));
    assert!(transcript.contains(&"Owner and their cars deleted successfully."));

    assert_eq!(db.owner_repo().count()?, 0);
    assert_eq!(db.car_repo().count()?, 0);
    assert_eq!(console.remaining(), 0);
    Ok(())
}

#[test]
fn test_session_add_car_with_empty_store() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;

    let mut script = pick(1);
    script.push(key(Key::Enter));
    script.extend(pick(5));

    let mut console = ScriptedConsole::new(script);
    run(&db, &mut console)?;

    assert!(
        console
            .transcript()
            .contains(&"No owners found. Please add an owner first.")
    );
    assert_eq!(db.car_repo().count()?, 0);
    Ok(())
}

#[test]
fn test_session_stops_on_invalid_number() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;

    let mut script = pick(0);
    script.extend([Input::line("Anna"), Input::line("thirty")]);

    let mut console = ScriptedConsole::new(script);
    let err = run(&db, &mut console).unwrap_err();

    assert!(err.to_string().contains("age must be a whole number"));
    assert_eq!(db.owner_repo().count()?, 0);
    Ok(())
}

#[test]
fn test_session_ends_when_input_runs_out() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let mut console = ScriptedConsole::new(vec![key(Key::Down)]);

    let err = run(&db, &mut console).unwrap_err();
    assert!(err.to_string().contains("input stream closed"));
    Ok(())
}
