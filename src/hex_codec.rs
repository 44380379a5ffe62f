//! Functions in this module convert byte slices to hexadecimal strings and
//! back. The string form is commonly used to log or diff captured frames.

use crate::error::{Error, Result};

/// Returns the uppercase hex representation of a byte slice, with byte
/// pairs joined by `separator`.
///
/// An empty separator produces a contiguous digit string. No leading or
/// trailing separator is emitted.
///
/// # Examples
///
/// ```rust
/// use wirebytes::hex_codec::hex_from_bytes;
///
/// assert_eq!("AB-0F", hex_from_bytes(&[0xAB, 0x0F], "-"));
/// assert_eq!("AB0F", hex_from_bytes(&[0xAB, 0x0F], ""));
/// ```
pub fn hex_from_bytes(bytes: &[u8], separator: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<String>>()
        .join(separator)
}


/// Returns the uppercase hex representation of `count` bytes starting at
/// `index`, with byte pairs joined by `separator`.
pub fn hex_from_bytes_range(bytes: &[u8], index: usize, count: usize, separator: &str) -> String {
    hex_from_bytes(&bytes [index..index + count], separator)
}


/// Parses a hex string back into the byte sequence it represents.
///
/// `-` and space characters are stripped before parsing, so the output of
/// `hex_from_bytes` with either separator is accepted. The remaining
/// string must consist of an even number of hex digits; anything else
/// results in an `Err`.
pub fn bytes_from_hex(hexstr: &str) -> Result<Vec<u8>> {
    let digits = hexstr.replace('-', "").replace(' ', "");
    if digits.len() % 2 != 0 {
        return Err(Error::new("Hex string must contain an even number of digits"));
    }

    (0..digits.len())
        .step_by(2)
        .map(|idx| Ok(u8::from_str_radix(&digits [idx..idx + 2], 16)?))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_from_bytes() {
        assert_eq!("", hex_from_bytes(&[], ""));
        assert_eq!("AB-0F", hex_from_bytes(&[0xAB, 0x0F], "-"));
        assert_eq!("AB 0F 00", hex_from_bytes(&[0xAB, 0x0F, 0x00], " "));
        assert_eq!("01234567", hex_from_bytes(&[0x01, 0x23, 0x45, 0x67], ""));
    }

    #[test]
    fn test_hex_from_bytes_range() {
        let buf = [0x01, 0x23, 0x45, 0x67];

        assert_eq!("23-45", hex_from_bytes_range(&buf, 1, 2, "-"));
        assert_eq!("", hex_from_bytes_range(&buf, 1, 0, "-"));
    }

    #[test]
    fn test_bytes_from_hex() {
        assert_eq!(Ok(vec![]), bytes_from_hex(""));
        assert_eq!(Ok(vec![0xAB, 0x0F]), bytes_from_hex("AB0F"));
        assert_eq!(Ok(vec![0xAB, 0x0F]), bytes_from_hex("AB-0F"));
        assert_eq!(Ok(vec![0xAB, 0x0F]), bytes_from_hex("AB 0F"));
        assert_eq!(Ok(vec![0xAB, 0x0F]), bytes_from_hex("ab0f"));
    }

    #[test]
    fn test_bytes_from_hex_odd_length() {
        let result = bytes_from_hex("AB0");

        assert_eq!(
            "Hex string must contain an even number of digits",
            format!("{}", result.unwrap_err())
        );
    }

    #[test]
    fn test_bytes_from_hex_invalid_digit() {
        assert!(bytes_from_hex("ZZ").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let buf = [0x00, 0x01, 0x7F, 0x80, 0xFE, 0xFF];

        assert_eq!(Ok(buf.to_vec()), bytes_from_hex(&hex_from_bytes(&buf, "")));
        assert_eq!(Ok(buf.to_vec()), bytes_from_hex(&hex_from_bytes(&buf, "-")));
        assert_eq!(Ok(buf.to_vec()), bytes_from_hex(&hex_from_bytes(&buf, " ")));
    }
}
