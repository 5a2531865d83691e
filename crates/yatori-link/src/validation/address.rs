//! Solana wallet address format check.

/// Base58 alphabet: digits and letters without `0`, `O`, `I`, `l`.
const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Shortest accepted address, in characters.
pub const MIN_ADDRESS_LEN: usize = 32;

/// Longest accepted address, in characters.
pub const MAX_ADDRESS_LEN: usize = 44;

/// Returns `true` if `address` looks like a Solana wallet address.
///
/// Only length and alphabet are checked. The address is not decoded and
/// its existence on chain is not verified.
pub fn validate_address(address: &str) -> bool {
    let len = address.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return false;
    }

    address.bytes().all(|b| BASE58_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "GvCoHGGBR97Yphzc6SrRycZyS31oUYBM8m9hLRtJT7r5";

    #[test]
    fn test_accepts_known_address() {
        assert_eq!(VALID.len(), 44);
        assert!(validate_address(VALID));
        assert!(validate_address("4M4fd9JSEgrzbCko9uABWN1E1xhjxPsmMSt6KHf3ZjQ8"));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!validate_address(""));
        assert!(!validate_address(&"1".repeat(31)));
        assert!(validate_address(&"1".repeat(32)));
        assert!(validate_address(&"z".repeat(44)));
        assert!(!validate_address(&"z".repeat(45)));
    }

    #[test]
    fn test_rejects_excluded_characters() {
        for bad in ['0', 'O', 'I', 'l'] {
            let candidate = format!("{}{}", &VALID[..43], bad);
            assert!(!validate_address(&candidate), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        let candidate = format!("{}é", &VALID[..40]);
        assert!(!validate_address(&candidate));
    }

    #[test]
    fn test_every_alphabet_symbol_accepted() {
        let alphabet = std::str::from_utf8(BASE58_ALPHABET).expect("ascii");
        assert!(validate_address(&alphabet[..44]));
        assert!(validate_address(&alphabet[14..]));
    }
}
