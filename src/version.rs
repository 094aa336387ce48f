use crate::{
    error::VersionError,
    parse::Scanner,
    release::{Release, ReleaseType},
};
use core::{cmp::Ordering, str::FromStr};
use log::debug;

/// Number of comparable slots in a version: four base columns, then the release section's type and
/// columns, then the specifier section's type and columns.
pub const SLOTS: usize = BASE_COLUMNS + 2 * Release::SLOTS;

pub(crate) const BASE_COLUMNS: usize = 4;
pub(crate) const IDX_RELEASE_TYPE: usize = BASE_COLUMNS;
pub(crate) const IDX_SPECIFIER_TYPE: usize = IDX_RELEASE_TYPE + Release::SLOTS;

/// A parsed version: up to four base columns (`1.2.4.99`), optionally followed by a release section
/// and a specifier section (`1.2-rc.3-p.1`), and a build number (`+build42`).
///
/// Conceptually, a version is a sequence of [SLOTS] integers (see [Version::slots]). All
/// comparisons are lexicographic over a prefix of that sequence. The build number is not part of
/// it: it only breaks ties in the total order ([Ord], [Version::less]).
///
/// # Examples
///
/// ```
/// use colver::prelude::*;
///
/// let rc = Version::parse("1.0-rc.1").unwrap();
/// let release = Version::parse("1.0").unwrap();
/// assert!(rc.is_pre_release());
/// assert!(rc < release);
///
/// let mut versions: Vec<Version> = ["1.10", "1.2", "1.2-beta", "1.2-p1"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// versions.sort();
/// assert_eq!(Version::parse("1.10").unwrap(), versions[3]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    pub(crate) base: [i64; BASE_COLUMNS],
    pub(crate) release: Release,
    pub(crate) specifier: Release,
    pub(crate) build: i64,
}

impl Version {
    /// Parses a version string, which must be free of whitespace.
    ///
    /// # Errors
    ///
    /// - [VersionError::InvalidVersionString] for an unknown release or specifier name, a letter
    ///   after both sections, a third section, a trailing separator, or a malformed `+build`
    ///   suffix.
    /// - [VersionError::TooManyColumns] if a section (or the base version) has more than four
    ///   columns.
    /// - [VersionError::VersionTooLong] if the specifier section has more than four columns.
    /// - [VersionError::IntegerFormat] if a column does not fit in an `i64`, or is empty (`1..2`).
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let mut version = Self::default();
        version.reparse(version_str)?;
        Ok(version)
    }

    /// Parses a version string into this version, overwriting all of its values.
    ///
    /// If this returns an error, the version is left partially written and should be discarded.
    pub fn reparse(&mut self, version_str: &str) -> Result<(), VersionError> {
        *self = Self::default();
        Scanner::new(version_str).scan(self).map_err(|err| {
            debug!("rejected version string `{}`: {}", version_str, err);
            err
        })
    }

    /// The major, minor, patch, and revision columns.
    pub fn base(&self) -> &[i64; BASE_COLUMNS] {
        &self.base
    }

    /// The release section, e.g. `rc.1` in `1.0-rc.1`.
    pub fn release(&self) -> &Release {
        &self.release
    }

    /// The specifier section, e.g. `p.2` in `1.0-rc.1-p.2`.
    pub fn specifier(&self) -> &Release {
        &self.specifier
    }

    /// The build number, or zero if the version has no `+build` suffix.
    pub fn build(&self) -> i64 {
        self.build
    }

    /// All comparable slots of this version, in order. Type slots hold [ReleaseType::code].
    ///
    /// ```
    /// use colver::Version;
    ///
    /// let version = Version::parse("1.2-rc.3").unwrap();
    /// assert_eq!([1, 2, 0, 0, -1, 3, 0, 0, 0, 0, 0, 0, 0, 0], version.slots());
    /// ```
    pub fn slots(&self) -> [i64; SLOTS] {
        let mut slots = [0; SLOTS];
        slots[..IDX_RELEASE_TYPE].copy_from_slice(&self.base);
        self.release
            .write_slots(&mut slots[IDX_RELEASE_TYPE..IDX_SPECIFIER_TYPE]);
        self.specifier.write_slots(&mut slots[IDX_SPECIFIER_TYPE..]);
        slots
    }

    /// The numeric column at slot `field`, or `None` if that slot is a type slot or out of range.
    pub(crate) fn column_mut(&mut self, field: usize) -> Option<&mut i64> {
        match field {
            0..=3 => self.base.get_mut(field),
            5..=8 => self.release.columns.get_mut(field - IDX_RELEASE_TYPE - 1),
            10..=13 => self.specifier.columns.get_mut(field - IDX_SPECIFIER_TYPE - 1),
            _ => None,
        }
    }

    /// The section whose type lives at slot `field`.
    pub(crate) fn section_mut(&mut self, field: usize) -> Option<&mut Release> {
        match field {
            IDX_RELEASE_TYPE => Some(&mut self.release),
            IDX_SPECIFIER_TYPE => Some(&mut self.specifier),
            _ => None,
        }
    }

    /// Strict total order for sorting: all slots, then the build number.
    ///
    /// This is the same order as [Ord] implements.
    pub fn less(&self, other: &Self) -> bool {
        self.cmp(other).is_lt()
    }

    /// Compares the base version, release type, and release columns. The specifier section is not
    /// compared.
    pub(crate) fn limited_less(&self, other: &Self) -> bool {
        sign_delta(self, other, IDX_SPECIFIER_TYPE).is_lt()
    }

    /// Returns true if both versions share the "actual version": the base version, release type,
    /// and release columns. The specifier section is ignored.
    ///
    /// The exception are patch levels: if this version has no release type and `other` is a
    /// revision or patch, only the base versions are compared. Note that this is one-directional.
    ///
    /// Use this, for example, to tell a beta from a regular version, or to accept a patched
    /// version as the regular version.
    ///
    /// ```
    /// use colver::Version;
    ///
    /// let regular = Version::parse("1.2.3").unwrap();
    /// let patched = Version::parse("1.2.3-p1").unwrap();
    /// let beta = Version::parse("1.2.3-beta").unwrap();
    /// assert!(regular.limited_equal(&patched));
    /// assert!(!regular.limited_equal(&beta));
    /// ```
    pub fn limited_equal(&self, other: &Self) -> bool {
        if self.release.kind == ReleaseType::Common && other.release.kind > ReleaseType::Common {
            return self.shares_prefix_with(other);
        }
        !self.limited_less(other) && !other.limited_less(self)
    }

    /// Returns true if the release type is `alpha`, `beta`, `pre`, or `rc`.
    pub fn is_pre_release(&self) -> bool {
        self.release.is_pre_release()
    }

    /// Returns true if the major, minor, patch, and revision columns are all equal.
    pub fn shares_prefix_with(&self, other: &Self) -> bool {
        sign_delta(self, other, IDX_RELEASE_TYPE).is_eq()
    }
}

/// Lexicographically compares the first `cutoff` slots of two versions.
fn sign_delta(a: &Version, b: &Version, cutoff: usize) -> Ordering {
    let (a, b) = (a.slots(), b.slots());
    a.iter()
        .zip(b.iter())
        .take(cutoff)
        .map(|(a, b)| a.cmp(b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compares all slots of two versions. The build number is not compared.
///
/// Use `compare(a, b) as i8` for a `-1`/`0`/`1` signum.
///
/// ```
/// use colver::{compare, Version};
/// use std::cmp::Ordering;
///
/// let a = Version::parse("1.2.4.99").unwrap();
/// let b = Version::parse("1.2.4.100").unwrap();
/// assert_eq!(Ordering::Less, compare(&a, &b));
/// assert_eq!(-1, compare(&a, &b) as i8);
///
/// let built = Version::parse("1.2.4.99+build7").unwrap();
/// assert_eq!(Ordering::Equal, compare(&a, &built));
/// ```
pub fn compare(a: &Version, b: &Version) -> Ordering {
    sign_delta(a, b, SLOTS)
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
