use super::DbConn;
use crate::domain::{Car, NewOwner, Owner, OwnerId};
use anyhow::Result;

/// Repository for owner operations.
pub struct OwnerRepository {
    conn: DbConn,
}

impl OwnerRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn insert(&self, owner: &NewOwner) -> Result<Owner> {
        let conn = self
            .conn
            .lock()
            .expect("OwnerRepository: failed to acquire database lock");
        conn.execute(
            "INSERT INTO owners (name, age, address) VALUES (?1, ?2, ?3)",
            rusqlite::params![&owner.name, owner.age, &owner.address],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("Inserted owner {} ({})", id, owner.name);

        Ok(Owner {
            id,
            name: owner.name.clone(),
            age: owner.age,
            address: owner.address.clone(),
            cars: Vec::new(),
        })
    }

    /// All owners in insertion order, without their cars.
    pub fn find_all(&self) -> Result<Vec<Owner>> {
        let conn = self
            .conn
            .lock()
            .expect("OwnerRepository: failed to acquire database lock");
        let mut stmt = conn.prepare("SELECT id, name, age, address FROM owners ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Owner {
                id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
                address: row.get(3)?,
                cars: Vec::new(),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All owners with their cars, loaded in a single joined query.
    pub fn find_all_with_cars(&self) -> Result<Vec<Owner>> {
        let conn = self
            .conn
            .lock()
            .expect("OwnerRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            r#"
            SELECT o.id, o.name, o.age, o.address, c.id, c.model, c.year
            FROM owners o
            LEFT JOIN cars c ON c.owner_id = o.id
            ORDER BY o.id, c.id
            "#,
        )?;

        let mut owners: Vec<Owner> = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let owner_id: OwnerId = row.get(0)?;
            if owners.last().map(|o| o.id) != Some(owner_id) {
                owners.push(Owner {
                    id: owner_id,
                    name: row.get(1)?,
                    age: row.get(2)?,
                    address: row.get(3)?,
                    cars: Vec::new(),
                });
            }

            let car_id: Option<i64> = row.get(4)?;
            if let Some(car_id) = car_id
                && let Some(owner) = owners.last_mut()
            {
                owner.cars.push(Car {
                    id: car_id,
                    owner_id,
                    model: row.get(5)?,
                    year: row.get(6)?,
                });
            }
        }

        Ok(owners)
    }

    /// Delete an owner; its cars go with it through the foreign key cascade.
    pub fn delete(&self, id: OwnerId) -> Result<usize> {
        let conn = self
            .conn
            .lock()
            .expect("OwnerRepository: failed to acquire database lock");
        let affected = conn.execute("DELETE FROM owners WHERE id = ?1", [id])?;
        log::debug!("Deleted owner {} ({} row(s))", id, affected);
        Ok(affected)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self
            .conn
            .lock()
            .expect("OwnerRepository: failed to acquire database lock");
        let count = conn.query_row("SELECT COUNT(*) FROM owners", [], |row| row.get(0))?;
        Ok(count)
    }
}
