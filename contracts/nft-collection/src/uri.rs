use soroban_sdk::{Env, String};

/// Longest base URI accepted at construction.
pub const MAX_BASE_URI_LENGTH: u32 = 200;

/// Decimal digits in `u64::MAX`.
const MAX_ID_DIGITS: usize = 20;

/// Writes `value` in base 10 at the start of `buf` and returns the number of
/// bytes written. `buf` must hold at least 20 bytes.
pub fn write_decimal(buf: &mut [u8], mut value: u64) -> usize {
    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        n += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    for i in 0..n {
        buf[i] = digits[n - 1 - i];
    }
    n
}

/// Builds `base_uri ++ decimal(token_id)`.
pub fn token_uri(env: &Env, base_uri: &String, token_id: u64) -> String {
    let mut buf = [0u8; MAX_BASE_URI_LENGTH as usize + MAX_ID_DIGITS];
    let base_len = base_uri.len() as usize;
    base_uri.copy_into_slice(&mut buf[..base_len]);
    let id_len = write_decimal(&mut buf[base_len..], token_id);
    String::from_bytes(env, &buf[..base_len + id_len])
}
