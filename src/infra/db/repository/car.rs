use super::DbConn;
use crate::domain::{Car, CarId, NewCar, OwnerId};
use anyhow::Result;

/// Repository for car operations.
pub struct CarRepository {
    conn: DbConn,
}

impl CarRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn insert(&self, car: &NewCar) -> Result<Car> {
        let conn = self
            .conn
            .lock()
            .expect("CarRepository: failed to acquire database lock");
        conn.execute(
            "INSERT INTO cars (owner_id, model, year) VALUES (?1, ?2, ?3)",
            rusqlite::params![car.owner_id, &car.model, car.year],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("Inserted car {} for owner {}", id, car.owner_id);

        Ok(Car {
            id,
            owner_id: car.owner_id,
            model: car.model.clone(),
            year: car.year,
        })
    }

    pub fn find_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Car>> {
        let conn = self
            .conn
            .lock()
            .expect("CarRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            "SELECT id, owner_id, model, year FROM cars WHERE owner_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map([owner_id], |row| {
            Ok(Car {
                id: row.get(0)?,
                owner_id: row.get(1)?,
                model: row.get(2)?,
                year: row.get(3)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn delete(&self, id: CarId) -> Result<usize> {
        let conn = self
            .conn
            .lock()
            .expect("CarRepository: failed to acquire database lock");
        let affected = conn.execute("DELETE FROM cars WHERE id = ?1", [id])?;
        log::debug!("Deleted car {} ({} row(s))", id, affected);
        Ok(affected)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self
            .conn
            .lock()
            .expect("CarRepository: failed to acquire database lock");
        let count = conn.query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))?;
        Ok(count)
    }
}
