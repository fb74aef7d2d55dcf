use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// U.S. state, stored by abbreviation ("CA").
///
/// Unlike cities, which are free text on users and restaurants, states are
/// their own entity so profile edits can reuse existing rows via
/// find-or-create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: Uuid,
    pub name: String,
}

impl State {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
