use crate::modules::identity::core::password::PasswordHashing;
use argon2::Params;

/// Argon2 at its minimum cost so tests hash quickly.
pub fn test_hashing() -> PasswordHashing {
    PasswordHashing::new(Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params"))
}
