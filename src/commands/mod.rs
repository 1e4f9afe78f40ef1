//! Main menu and the operations behind each entry.
//!
//! Every operation talks to the user through a [`Console`] and to the store
//! through the repositories, committing each change as soon as it is made.

use anyhow::Result;

use crate::domain::{NewCar, NewOwner, Owner, parse_number};
use crate::infra::db::Database;
use crate::ui::Console;
use crate::ui::menu::select;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddOwner,
    AddCar,
    ShowDatabase,
    DeleteOwner,
    DeleteCar,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddOwner,
        MenuAction::AddCar,
        MenuAction::ShowDatabase,
        MenuAction::DeleteOwner,
        MenuAction::DeleteCar,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddOwner => "Add Owner",
            MenuAction::AddCar => "Add Car",
            MenuAction::ShowDatabase => "Show Database",
            MenuAction::DeleteOwner => "Delete Owner",
            MenuAction::DeleteCar => "Delete Car",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

fn main_menu_labels() -> Vec<String> {
    MenuAction::ALL
        .iter()
        .map(|action| action.label().to_string())
        .collect()
}

/// Run the interactive loop until the user picks Exit.
pub fn run<C: Console>(db: &Database, console: &mut C) -> Result<()> {
    let labels = main_menu_labels();
    loop {
        let index = select(console, None, &labels)?;
        console.clear()?;

        let Some(action) = MenuAction::from_index(index) else {
            console.write_line("Invalid choice, try again.")?;
            continue;
        };

        log::info!("Menu action: {:?}", action);
        match action {
            MenuAction::AddOwner => add_owner(db, console)?,
            MenuAction::AddCar => add_car(db, console)?,
            MenuAction::ShowDatabase => show_database(db, console)?,
            MenuAction::DeleteOwner => delete_owner(db, console)?,
            MenuAction::DeleteCar => delete_car(db, console)?,
            MenuAction::Exit => return Ok(()),
        }
    }
}

fn select_owner<C: Console>(console: &mut C, owners: &[Owner]) -> Result<usize> {
    let labels: Vec<String> = owners.iter().map(|o| o.name.clone()).collect();
    select(console, Some("Select an owner:"), &labels)
}

pub fn add_owner<C: Console>(db: &Database, console: &mut C) -> Result<()> {
    console.write_line("Enter owner details:")?;

    let name = console.read_line("Name: ")?;
    let age = parse_number("age", &console.read_line("Age: ")?)?;
    let address = console.read_line("Address: ")?;

    let owner = db.owner_repo().insert(&NewOwner::new(&name, age, &address)?)?;
    log::info!("Added owner {} ({})", owner.id, owner.name);

    console.write_line("Owner added successfully!")?;
    console.pause()?;
    Ok(())
}

pub fn add_car<C: Console>(db: &Database, console: &mut C) -> Result<()> {
    let owners = db.owner_repo().find_all()?;
    if owners.is_empty() {
        console.write_line("No owners found. Please add an owner first.")?;
        console.pause()?;
        return Ok(());
    }

    let owner = &owners[select_owner(console, &owners)?];

    let model = console.read_line("Enter car model: ")?;
    let year = parse_number("year", &console.read_line("Enter car year: ")?)?;

    let car = db.car_repo().insert(&NewCar::new(owner.id, &model, year)?)?;
    log::info!("Added car {} for owner {}", car.id, owner.id);

    console.write_line("Car added successfully!")?;
    console.pause()?;
    Ok(())
}

pub fn show_database<C: Console>(db: &Database, console: &mut C) -> Result<()> {
    let owners = db.owner_repo().find_all_with_cars()?;
    if owners.is_empty() {
        console.write_line("No owners found.")?;
        console.pause()?;
        return Ok(());
    }

    for owner in &owners {
        console.write_line(&owner.summary())?;
        console.write_line("Cars:")?;
        for car in &owner.cars {
            console.write_line(&format!("  {}", car.label()))?;
        }
    }

    console.pause()?;
    Ok(())
}

pub fn delete_owner<C: Console>(db: &Database, console: &mut C) -> Result<()> {
    let repo = db.owner_repo();
    let owners = repo.find_all()?;
    if owners.is_empty() {
        console.write_line("No owners found to delete.")?;
        console.pause()?;
        return Ok(());
    }

    let owner = &owners[select_owner(console, &owners)?];
    repo.delete(owner.id)?;
    log::info!("Deleted owner {} ({})", owner.id, owner.name);

    console.write_line("Owner and their cars deleted successfully.")?;
    console.pause()?;
    Ok(())
}

pub fn delete_car<C: Console>(db: &Database, console: &mut C) -> Result<()> {
    let owners = db.owner_repo().find_all_with_cars()?;
    if owners.is_empty() {
        console.write_line("No owners found.")?;
        console.pause()?;
        return Ok(());
    }

    let owner = &owners[select_owner(console, &owners)?];
    if owner.cars.is_empty() {
        console.write_line("This owner has no cars to delete.")?;
        console.pause()?;
        return Ok(());
    }

    let labels: Vec<String> = owner.cars.iter().map(|c| c.label()).collect();
    let car = &owner.cars[select(console, Some("Select a car to delete:"), &labels)?];
    db.car_repo().delete(car.id)?;
    log::info!("Deleted car {} of owner {}", car.id, owner.id);

    console.write_line("Car deleted successfully.")?;
    console.pause()?;
    Ok(())
}
