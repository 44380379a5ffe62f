/// Selects the byte order used to store a multi-byte integer field.
///
/// Multi-byte operations in this crate take the selector as an explicit
/// argument. `LsbFirst` is the conventional default and is what
/// `Endianness::default()` returns.
///
/// # Examples
///
/// ```rust
/// use wirebytes::Endianness;
///
/// assert_eq!(Endianness::LsbFirst, Endianness::default());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    /// The least-significant byte is stored first (little-endian).
    LsbFirst,

    /// The most-significant byte is stored first (big-endian).
    MsbFirst,
}

impl Default for Endianness {
    fn default() -> Endianness {
        Endianness::LsbFirst
    }
}
