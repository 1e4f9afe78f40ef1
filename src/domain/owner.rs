use super::{Car, InputError, check_text};

pub type OwnerId = i64;

pub const NAME_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 255;

/// A stored owner together with the cars loaded for it.
///
/// `cars` is empty unless the owner was loaded with an eager join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
    pub cars: Vec<Car>,
}

impl Owner {
    /// Line used by the database listing.
    pub fn summary(&self) -> String {
        format!(
            "Owner: {}, Age: {}, Address: {}",
            self.name,
            self.age,
            self.address.as_deref().unwrap_or("")
        )
    }
}

/// Owner fields collected from the user, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOwner {
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
}

impl NewOwner {
    pub fn new(name: &str, age: i32, address: &str) -> Result<Self, InputError> {
        check_text("name", name, NAME_MAX_LEN)?;

        let address = if address.trim().is_empty() {
            None
        } else {
            check_text("address", address, ADDRESS_MAX_LEN)?;
            Some(address.to_string())
        };

        Ok(Self {
            name: name.to_string(),
            age,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_address_is_absent() {
        let owner = NewOwner::new("Anna", 31, "   ").unwrap();
        assert_eq!(owner.address, None);
    }

    #[test]
    fn test_address_limit() {
        let long = "a".repeat(ADDRESS_MAX_LEN + 1);
        assert!(matches!(
            NewOwner::new("Anna", 31, &long),
            Err(InputError::TooLong {
                field: "address",
                ..
            })
        ));
    }

    #[test]
    fn test_summary_without_address() {
        let owner = Owner {
            id: 1,
            name: "Anna".into(),
            age: 31,
            address: None,
            cars: vec![],
        };
        assert_eq!(owner.summary(), "Owner: Anna, Age: 31, Address: ");
    }
}
