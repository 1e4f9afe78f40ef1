//! Repository implementations for data access in carbook.
//!
//! Provides database operations for owners and cars.

mod car;
mod owner;

pub use car::CarRepository;
pub use owner::OwnerRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub type DbConn = Arc<Mutex<Connection>>;
