//! The movie record and its request payload.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A stored movie. `id` is server-assigned at creation and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
}

/// The client-supplied fields of a create or update body.
///
/// Unknown keys are tolerated, so a client that round-trips a full [`Movie`]
/// (including `id`) back through PUT works; the server owns IDs and ignores
/// the one in the body.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
}

impl MovieDraft {
    /// Decodes a draft from a JSON body, then validates it.
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let draft: Self =
            serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        draft.validate()?;
        Ok(draft)
    }

    /// One blank-field policy for create and update alike: text fields must
    /// be non-empty after trimming, `year` must be non-zero.
    fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::InvalidInput("title must not be blank".to_owned()));
        }
        if self.director.trim().is_empty() {
            return Err(ApiError::InvalidInput("director must not be blank".to_owned()));
        }
        if self.year == 0 {
            return Err(ApiError::InvalidInput("year must not be zero".to_owned()));
        }
        if self.genre.trim().is_empty() {
            return Err(ApiError::InvalidInput("genre must not be blank".to_owned()));
        }
        Ok(())
    }
}
