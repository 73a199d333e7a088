use rand::Rng;

// One reset-code width for both account kinds.
pub fn generate_otp() -> i32 {
    rand::thread_rng().gen_range(1000..=9999)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_four_digits() {
        for _ in 0..1000 {
            let otp = generate_otp();
            assert!((1000..=9999).contains(&otp));
        }
    }
}
