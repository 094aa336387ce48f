use core::num::ParseIntError;

/// Errors that can occur when parsing a version string.
///
/// Positions are byte offsets into the version string at which the problem was detected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The version string does not follow the version grammar: an unknown release or specifier
    /// type name, a letter after both type slots are used, a third separator, a separator at the
    /// end of the string, or a malformed `+build` suffix.
    #[error("Version string `{version_string}` is invalid at position {position}")]
    InvalidVersionString {
        /// The version string that was being parsed
        version_string: String,
        /// Byte offset where the problem was detected
        position: usize,
    },

    /// A number was found where a release or specifier type name was expected. This happens when
    /// more than four columns are given in a section.
    #[error("Version string `{version_string}` has too many columns at position {position}")]
    TooManyColumns {
        /// The version string that was being parsed
        version_string: String,
        /// Byte offset where the problem was detected
        position: usize,
    },

    /// The version string has more numeric columns than a version can hold.
    #[error("Version string `{version_string}` is too long at position {position}")]
    VersionTooLong {
        /// The version string that was being parsed
        version_string: String,
        /// Byte offset where the problem was detected
        position: usize,
    },

    /// A token that should be a number could not be converted to one.
    #[error("Token `{token}` is not a valid number: {source}")]
    IntegerFormat {
        /// The text that failed to convert
        token: String,
        /// The underlying integer parsing error
        #[source]
        source: ParseIntError,
    },
}
