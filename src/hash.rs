//! Block-hash handling
//! The evaluator is seeded with the 32-byte hash of a block header,
//! produced by the node and usually handed around hex-printed

/// Number of bytes in a block hash
pub const HASH_LEN: usize = 32;

/// A block hash; the seed of the evaluator
pub type Hash = [u8; 32];


/// Copies a slice into an owned hash; None if the length doesn't match
///
/// A mismatched length is never truncated or padded, since the resulting
/// score would not belong to the hash the caller thinks it evaluated
pub fn hash_from_slice(slice: &[u8]) -> Option<Hash> {
    if slice.len() != HASH_LEN {
        return None;
    }
    let mut result = [0; HASH_LEN];
    result.copy_from_slice(slice);
    Some(result)
}

/// Parses a hex-printed block hash into seed bytes
///
/// Hex prints the hash most-significant-first while the evaluator consumes
/// it least-significant-byte-first, hence the reversal
pub fn hash_from_hex(str: &str) -> Option<Hash> {
    let mut v = from_hex(str);
    v.reverse();
    hash_from_slice(&v)
}

/// Hex-encodes seed bytes back to printed-hash order
pub fn to_hex(hash: &Hash) -> String {
    hash.iter()
        .rev()
        .map(|n| format!("{:02x}", n))
        .collect::<Vec<_>>()
        .concat()
}

/// Decodes a hex string; whitespace is skipped. Used mainly for tests
pub fn from_hex(str: &str) -> Vec<u8> {

    let mut b = Vec::with_capacity(str.len() / 2);
    let mut nibbles = 0;
    let mut buf = 0u8;

    for byte in str.bytes() {
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            b' ' | b'\r' | b'\n' | b'\t' => continue,
            _ => panic!("Invalid hex char"),
        };

        buf = buf << 4 | nibble;
        nibbles += 1;
        if nibbles == 2 {
            b.push(buf);
            nibbles = 0;
            buf = 0;
        }
    }

    b
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("00ff10"), vec![0x00, 0xff, 0x10]);
        assert_eq!(from_hex("DE ad\n01"), vec![0xde, 0xad, 0x01]);
        assert!(from_hex("").is_empty());
    }

    #[test]
    fn test_hash_from_slice_checks_length() {
        assert!(hash_from_slice(&[0; 32]).is_some());
        assert!(hash_from_slice(&[0; 31]).is_none());
        assert!(hash_from_slice(&[0; 33]).is_none());
    }

    #[test]
    fn test_hash_from_hex_reverses() {

        const HASH1: &'static str =
            "0100000000000000000000000000000000000000000000000000000000000000";

        let hash = hash_from_hex(HASH1).unwrap();

        // most-significant printed byte lands at the end of the seed
        assert_eq!(hash[31], 1);
        assert_eq!(hash[0], 0);

        assert_eq!(to_hex(&hash), HASH1);
    }
}
