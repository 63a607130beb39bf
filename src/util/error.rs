/// Error type for geohash-rs operations.
#[derive(Debug, PartialEq)]
pub enum GeohashError {
    /// The total bit width (hash length × bits per character) is outside (0, 64].
    InvalidConfiguration(u32),
    /// The hash string length does not match the codec's configured length.
    InvalidHashLength(usize),
    /// The character is not part of the codec's alphabet.
    UnknownCharacter(char),
    /// The requested resolution is coarser than the widest tabulated cell size.
    ResolutionTooCoarse(f64),
    /// The requested resolution is finer than 64 bits can express.
    ResolutionTooFine(f64),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidConfiguration(bits) => {
                write!(f, "Invalid configuration: {} total bits, expected 1-64", bits)
            }
            GeohashError::InvalidHashLength(len) => write!(f, "Invalid hash length: {}", len),
            GeohashError::UnknownCharacter(c) => write!(f, "Unknown character: '{}'", c),
            GeohashError::ResolutionTooCoarse(cm) => {
                write!(f, "Resolution too coarse: {} cm", cm)
            }
            GeohashError::ResolutionTooFine(cm) => write!(f, "Resolution too fine: {} cm", cm),
        }
    }
}

impl std::error::Error for GeohashError {}
