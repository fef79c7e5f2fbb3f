//! Dog record types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// A stored dog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dog {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,
    /// Breed, e.g. "Labrador Retriever".
    pub breed: String,
    /// The dog's name.
    pub name: String,
    /// Coat color.
    pub color: String,
    /// Free-form description shown on the adoption listing.
    pub description: String,
}

impl Dog {
    /// Build a record from creation fields and an assigned id.
    pub fn from_new(id: i64, fields: NewDog) -> Self {
        Self {
            id,
            breed: fields.breed,
            name: fields.name,
            color: fields.color,
            description: fields.description,
        }
    }
}

/// Creation payload for a dog record. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewDog {
    /// Breed, e.g. "Labrador Retriever".
    pub breed: String,
    /// The dog's name.
    pub name: String,
    /// Coat color.
    pub color: String,
    /// Free-form description shown on the adoption listing.
    pub description: String,
}

impl NewDog {
    /// Presence check: every field must be non-empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        for (field, value) in [
            ("breed", &self.breed),
            ("name", &self.name),
            ("color", &self.color),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::EmptyField { field });
            }
        }

        Ok(())
    }

    /// Check whether a stored record carries exactly these fields.
    pub fn matches(&self, dog: &Dog) -> bool {
        self.breed == dog.breed
            && self.name == dog.name
            && self.color == dog.color
            && self.description == dog.description
    }
}
