use rand::Rng;

/// Characters a short code may contain: `[a-zA-Z0-9]`.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a short code unless `SHORT_CODE_LENGTH` says otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generate a candidate short code of the default length.
pub fn generate() -> String {
    random_code(DEFAULT_CODE_LENGTH)
}

/// Generate a random alphanumeric string of the given length, each character
/// picked independently and uniformly from [`ALPHABET`].
pub fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
