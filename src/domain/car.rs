use super::{InputError, OwnerId, check_text};

pub type CarId = i64;

pub const MODEL_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: CarId,
    pub owner_id: OwnerId,
    pub model: String,
    pub year: i32,
}

impl Car {
    /// Label shown in listings and in the car selection menu.
    pub fn label(&self) -> String {
        format!("Model: {}, Year: {}", self.model, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub owner_id: OwnerId,
    pub model: String,
    pub year: i32,
}

impl NewCar {
    pub fn new(owner_id: OwnerId, model: &str, year: i32) -> Result<Self, InputError> {
        check_text("model", model, MODEL_MAX_LEN)?;
        Ok(Self {
            owner_id,
            model: model.to_string(),
            year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let car = Car {
            id: 3,
            owner_id: 1,
            model: "Civic".into(),
            year: 2004,
        };
        assert_eq!(car.label(), "Model: Civic, Year: 2004");
    }

    #[test]
    fn test_model_required() {
        assert_eq!(NewCar::new(1, "", 2004), Err(InputError::Required("model")));
    }
}
