use serde::{Deserialize, Serialize};

use crate::consts::HOME_CITY;

/// A person record as submitted by a form or API client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name:  String,
    pub age:        u8,
    pub city:       String,
}

/// Whether `person` lives in [`HOME_CITY`]. Exact, case-sensitive match.
pub fn lives_here(person: &Person) -> bool {
    person.city == HOME_CITY
}
