/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// UTC start-of-day (midnight) for the given millisecond timestamp.
pub fn start_of_day(ts: i64) -> i64 {
    const DAY_MS: i64 = 86_400_000;
    ts.div_euclid(DAY_MS) * DAY_MS
}

/// Generate a short random token for use as a resource id.
///
/// Nine characters of base-36 (~46 bits), collision-resistant at the
/// scale of a single shop's order book.
pub fn token_id() -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
