//! Functions in this module convert text values to single-byte ASCII
//! representations and back.
//!
//! Only the 7-bit ASCII range round-trips. Code points outside that range
//! encode as `?`, and bytes above `0x7F` decode as `?`.

/// Returns the ASCII representation of a text value in a new buffer.
pub fn bytes_from_string(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}


/// Encodes a text value as ASCII and copies it into the caller's buffer
/// starting at `index`.
pub fn write_string(buf: &mut [u8], index: usize, text: &str) {
    let data = bytes_from_string(text);
    buf [index..index + data.len()].copy_from_slice(&data);
}


/// Returns the text value decoded from the whole buffer.
pub fn string_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}


/// Returns the text value decoded from `count` bytes starting at `index`.
pub fn string_from_bytes_range(bytes: &[u8], index: usize, count: usize) -> String {
    string_from_bytes(&bytes [index..index + count])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_from_string() {
        assert_eq!(b"".to_vec(), bytes_from_string(""));
        assert_eq!(b"STATUS OK".to_vec(), bytes_from_string("STATUS OK"));
    }

    #[test]
    fn test_bytes_from_string_substitutes_non_ascii() {
        assert_eq!(b"Gr??e".to_vec(), bytes_from_string("Gr\u{00FC}\u{00DF}e"));
    }

    #[test]
    fn test_write_string() {
        let mut buf = [0u8; 8];

        write_string(&mut buf, 2, "abc");

        assert_eq!([0x00, 0x00, 0x61, 0x62, 0x63, 0x00, 0x00, 0x00], buf);
    }

    #[test]
    fn test_string_from_bytes() {
        assert_eq!("", string_from_bytes(&[]));
        assert_eq!("abc", string_from_bytes(&[0x61, 0x62, 0x63]));
        assert_eq!("a?c", string_from_bytes(&[0x61, 0x80, 0x63]));
    }

    #[test]
    fn test_string_from_bytes_range() {
        let buf = [0x00, 0x61, 0x62, 0x63, 0x00];

        assert_eq!("abc", string_from_bytes_range(&buf, 1, 3));
        assert_eq!("", string_from_bytes_range(&buf, 1, 0));
    }

    #[test]
    fn test_string_round_trip() {
        let texts = ["", " ", "0123456789", "The quick brown fox", "~!@#$%^&*()"];

        for text in texts {
            assert_eq!(text, string_from_bytes(&bytes_from_string(text)));
        }
    }
}
