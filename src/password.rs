use blake2::{Blake2b, Digest};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

// Stored form is `salt$digest`, with the salt prepended to the password
// before hashing. Verification recomputes the digest from the stored salt.

const SALT_LEN: usize = 16;

fn digest_with_salt(salt: &str, password: &str) -> String {
    format!(
        "{:x}",
        Blake2b::digest(format!("{}{}", salt, password).as_bytes())
    )
}

pub fn hash_password(password: &str) -> String {
    let salt: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect();
    format!("{}${}", salt, digest_with_salt(&salt, password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_with_salt(salt, password) == digest,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_original_password() {
        let stored = hash_password("hunter2");
        assert!(verify_password("hunter2", &stored));
    }

    #[test]
    fn rejects_wrong_password() {
        let stored = hash_password("hunter2");
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("hunter2");
        let b = hash_password("hunter2");
        assert_ne!(a, b);
        assert!(verify_password("hunter2", &a));
        assert!(verify_password("hunter2", &b));
    }

    #[test]
    fn rejects_malformed_stored_value() {
        assert!(!verify_password("hunter2", "no-salt-separator"));
    }
}
