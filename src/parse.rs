use crate::{
    error::VersionError,
    release::ReleaseType,
    version::{Version, IDX_RELEASE_TYPE, IDX_SPECIFIER_TYPE},
};
use log::trace;

const BUILD_PREFIX: &str = "+build";

/// Single-pass tokenizer that writes a version string into a [Version], slot by slot.
///
/// A token is a run of lowercase letters (a release or specifier type name) or of anything else
/// (a number). A token is flushed into slot `field` when a byte of the other class shows up. The
/// separators `.`, `-`, `_` and `+` decide how the next token starts.
pub(crate) struct Scanner<'vs> {
    version_str: &'vs str,
    /// Byte offset of the pending token.
    from: usize,
    /// Length of the pending token in bytes.
    len: usize,
    /// The slot the pending token is written to.
    field: usize,
    /// Whether the pending token is a type name.
    alpha: bool,
}

impl<'vs> Scanner<'vs> {
    pub(crate) fn new(version_str: &'vs str) -> Self {
        Self {
            version_str,
            from: 0,
            len: 0,
            field: 0,
            alpha: false,
        }
    }

    pub(crate) fn scan(mut self, version: &mut Version) -> Result<(), VersionError> {
        let version_str = self.version_str;
        let bytes = version_str.as_bytes();

        for (idx, &byte) in bytes.iter().enumerate() {
            if self.accepts(byte) {
                self.len += 1;
                continue;
            }

            self.flush(version)?;

            match byte {
                b'.' => {
                    self.from = idx + 1;
                    self.alpha = false;
                }
                b'-' | b'_' => {
                    self.from = idx + 1;
                    let next = bytes.get(self.from).ok_or_else(|| self.invalid(idx))?;
                    self.alpha = next.is_ascii_lowercase();
                    self.field = self.type_slot(idx)?;
                    if !self.alpha {
                        // a number right after the separator goes straight to the first column
                        self.field += 1;
                    }
                }
                b'+' => {
                    version.build = self.build_suffix(idx)?;
                    return Ok(());
                }
                _ => {
                    self.from = idx;
                    self.alpha = byte.is_ascii_lowercase();
                    self.len = 1;
                }
            }
        }

        if self.len > 0 {
            self.flush(version)?;
        }
        Ok(())
    }

    fn accepts(&self, byte: u8) -> bool {
        if self.alpha {
            byte.is_ascii_lowercase()
        } else {
            byte.is_ascii_digit()
        }
    }

    /// Writes the pending token into the version and moves on to the next slot.
    fn flush(&mut self, version: &mut Version) -> Result<(), VersionError> {
        let version_str = self.version_str;
        let token = version_str
            .get(self.from..self.from + self.len)
            .ok_or_else(|| self.invalid(self.from))?;

        if self.alpha {
            self.field = self.type_slot(self.from)?;
            let kind = ReleaseType::from_name(token).ok_or_else(|| self.invalid(self.from))?;
            let section = version
                .section_mut(self.field)
                .ok_or_else(|| self.invalid(self.from))?;
            section.kind = kind;
        } else {
            if self.field == IDX_RELEASE_TYPE || self.field == IDX_SPECIFIER_TYPE {
                return Err(VersionError::TooManyColumns {
                    version_string: self.version_str.to_owned(),
                    position: self.from,
                });
            }
            let column = version
                .column_mut(self.field)
                .ok_or_else(|| VersionError::VersionTooLong {
                    version_string: self.version_str.to_owned(),
                    position: self.from,
                })?;
            *column = parse_int(token)?;
        }

        trace!("slot {} <- `{}`", self.field, token);
        self.field += 1;
        self.len = 0;
        Ok(())
    }

    /// The type slot a type name at the current field belongs to: the release type if it has not
    /// been passed yet, else the specifier type.
    fn type_slot(&self, position: usize) -> Result<usize, VersionError> {
        match self.field {
            field if field <= IDX_RELEASE_TYPE => Ok(IDX_RELEASE_TYPE),
            field if field <= IDX_SPECIFIER_TYPE => Ok(IDX_SPECIFIER_TYPE),
            _ => Err(self.invalid(position)),
        }
    }

    /// Parses `+build<N>`, which must run to the end of the version string.
    fn build_suffix(&self, position: usize) -> Result<i64, VersionError> {
        let digits = self
            .version_str
            .get(position..)
            .and_then(|suffix| suffix.strip_prefix(BUILD_PREFIX))
            .filter(|digits| !digits.is_empty())
            .ok_or_else(|| self.invalid(position))?;
        parse_int(digits)
    }

    fn invalid(&self, position: usize) -> VersionError {
        VersionError::InvalidVersionString {
            version_string: self.version_str.to_owned(),
            position,
        }
    }
}

fn parse_int(token: &str) -> Result<i64, VersionError> {
    token
        .parse()
        .map_err(|source| VersionError::IntegerFormat {
            token: token.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::Release;
    use rstest::*;

    fn parse(version_str: &str) -> Result<Version, VersionError> {
        let mut version = Version::default();
        Scanner::new(version_str).scan(&mut version)?;
        Ok(version)
    }

    fn release(kind: ReleaseType, columns: [i64; Release::COLUMNS]) -> Release {
        Release { kind, columns }
    }

    #[test]
    fn test_base_columns() {
        let version = parse("1.2.4.99").unwrap();
        assert_eq!([1, 2, 4, 99, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], version.slots());
        assert_eq!(0, version.build);
    }

    #[rstest]
    #[case("1.0-rc.1", ReleaseType::Rc, [1, 0, 0, 0])]
    #[case("1.0-beta", ReleaseType::Beta, [0, 0, 0, 0])]
    #[case("1.0-alpha.1.2.3.4", ReleaseType::Alpha, [1, 2, 3, 4])]
    #[case("1.0_pre2", ReleaseType::Pre, [2, 0, 0, 0])]
    #[case("1.0rc1", ReleaseType::Rc, [1, 0, 0, 0])]
    #[case("1.0-r3", ReleaseType::Revision, [3, 0, 0, 0])]
    #[case("1.0-p", ReleaseType::Patch, [0, 0, 0, 0])]
    #[case("1.0-5.6", ReleaseType::Common, [5, 6, 0, 0])]
    fn test_release_section(
        #[case] version_str: &str,
        #[case] kind: ReleaseType,
        #[case] columns: [i64; Release::COLUMNS],
    ) {
        let version = parse(version_str).unwrap();
        assert_eq!([1, 0, 0, 0], version.base);
        assert_eq!(release(kind, columns), version.release);
        assert_eq!(Release::default(), version.specifier);
    }

    #[test]
    fn test_specifier_section() {
        let version = parse("1.2-rc.3.4-p.5.6.7.8").unwrap();
        assert_eq!([1, 2, 0, 0], version.base);
        assert_eq!(release(ReleaseType::Rc, [3, 4, 0, 0]), version.release);
        assert_eq!(release(ReleaseType::Patch, [5, 6, 7, 8]), version.specifier);
    }

    #[test]
    fn test_numeric_sections_skip_type_slots() {
        let version = parse("1.2-634.0-99.8").unwrap();
        assert_eq!(
            [1, 2, 0, 0, 0, 634, 0, 0, 0, 0, 99, 8, 0, 0],
            version.slots()
        );
    }

    #[test]
    fn test_build() {
        let version = parse("2.0+build42").unwrap();
        assert_eq!([2, 0, 0, 0], version.base);
        assert_eq!(42, version.build);

        let version = parse("2.0-rc.1+build7").unwrap();
        assert_eq!(release(ReleaseType::Rc, [1, 0, 0, 0]), version.release);
        assert_eq!(7, version.build);
    }

    #[test]
    fn test_trailing_dot_is_ignored() {
        assert_eq!(parse("1.2"), parse("1.2."));
    }

    #[test]
    fn test_empty_string_is_zero_version() {
        assert_eq!(Ok(Version::default()), parse(""));
    }

    #[rstest]
    #[case("1.0-unknown", 4)]
    #[case("1.0-rc-p-r", 8)]
    #[case("1-rc-p.1.2.3.4-5", 14)]
    #[case("1.0-rc.1-p.1-p", 12)]
    #[case("1.0-", 3)]
    #[case("1.0_", 3)]
    #[case("1.0+", 3)]
    #[case("1.0+build", 3)]
    #[case("1.0+bu1ld1", 3)]
    #[case("1.0-rc.1x", 8)]
    fn test_invalid_version_string(#[case] version_str: &str, #[case] position: usize) {
        assert_eq!(
            Err(VersionError::InvalidVersionString {
                version_string: version_str.to_owned(),
                position,
            }),
            parse(version_str)
        );
    }

    #[rstest]
    #[case("1.2.3.4.5", 8)]
    #[case("1-rc.1.2.3.4.5", 13)]
    #[case("1-5.6.7.8.9", 10)]
    fn test_too_many_columns(#[case] version_str: &str, #[case] position: usize) {
        assert_eq!(
            Err(VersionError::TooManyColumns {
                version_string: version_str.to_owned(),
                position,
            }),
            parse(version_str)
        );
    }

    #[test]
    fn test_version_too_long() {
        let version_str = "1-rc.1.2.3.4-p.5.6.7.8.9";
        assert_eq!(
            Err(VersionError::VersionTooLong {
                version_string: version_str.to_owned(),
                position: 23,
            }),
            parse(version_str)
        );
    }

    #[rstest]
    #[case("1..2", "")]
    #[case("rc1", "")]
    #[case("1.0+buildx", "x")]
    #[case("99999999999999999999", "99999999999999999999")]
    #[case("1.2!", "!")]
    #[case("1.0A", "A")]
    fn test_integer_format(#[case] version_str: &str, #[case] token: &str) {
        match parse(version_str) {
            Err(VersionError::IntegerFormat { token: actual, .. }) => assert_eq!(token, actual),
            other => panic!("expected an integer format error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        assert!(matches!(
            parse("1.2é"),
            Err(VersionError::InvalidVersionString { .. })
        ));
    }
}
