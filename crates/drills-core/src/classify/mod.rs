//! Pure classification functions.
//!
//! Each classifier maps validated input to exactly one label from a fixed
//! set. None of them can fail: unrecognized categories resolve to a
//! fallback label instead of an error.

mod leap_year;
mod password;
mod pet;

pub use leap_year::is_leap_year;
pub use password::{classify_password, password_strength, PasswordStrength};
pub use pet::{classify_pet, PetFood, Species};
