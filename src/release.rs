use core::fmt::{self, Display};

/// The maturity of a release or specifier section.
///
/// The discriminants are ordered so that comparing two types compares their maturity: every
/// pre-release type is negative, [ReleaseType::Common] is zero, and post-release types (revisions
/// and patches) are positive.
///
/// ```
/// use colver::ReleaseType;
///
/// assert!(ReleaseType::Alpha < ReleaseType::Rc);
/// assert!(ReleaseType::Rc < ReleaseType::Common);
/// assert!(ReleaseType::Common < ReleaseType::Patch);
/// assert_eq!(-1, ReleaseType::Rc.code());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum ReleaseType {
    /// `alpha`
    Alpha = -4,
    /// `beta`
    Beta = -3,
    /// `pre`
    Pre = -2,
    /// `rc`, a release candidate
    Rc = -1,
    /// No type given. This is the value of an unset type slot.
    #[default]
    Common = 0,
    /// `r`
    Revision = 1,
    /// `p`
    Patch = 2,
}

impl ReleaseType {
    /// Looks up a type by the name used in version strings. The empty name is an implicit `pre`.
    /// Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(Self::Alpha),
            "beta" => Some(Self::Beta),
            "pre" | "" => Some(Self::Pre),
            "rc" => Some(Self::Rc),
            "r" => Some(Self::Revision),
            "p" => Some(Self::Patch),
            _ => None,
        }
    }

    /// The name of this type as written in version strings. [ReleaseType::Common] has no name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Pre => "pre",
            Self::Rc => "rc",
            Self::Common => "",
            Self::Revision => "r",
            Self::Patch => "p",
        }
    }

    /// The signed ordinal of this type, as stored in a version's type slot.
    pub fn code(&self) -> i8 {
        *self as i8
    }

    /// Returns true for `alpha`, `beta`, `pre`, and `rc`.
    pub fn is_pre_release(&self) -> bool {
        *self < Self::Common
    }
}

impl Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A release or specifier section of a version: a type followed by up to four numeric columns.
///
/// In `1.2-rc.3.4`, the release section has type `rc` and columns `[3, 4, 0, 0]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Release {
    pub(crate) kind: ReleaseType,
    pub(crate) columns: [i64; Release::COLUMNS],
}

impl Release {
    /// Number of numeric columns a section can hold.
    pub const COLUMNS: usize = 4;

    /// Number of slots this section takes up in a version: the type plus its columns.
    pub(crate) const SLOTS: usize = 1 + Self::COLUMNS;

    /// The type of this section.
    pub fn kind(&self) -> ReleaseType {
        self.kind
    }

    /// The numeric columns of this section. Unset columns are zero.
    pub fn columns(&self) -> &[i64; Release::COLUMNS] {
        &self.columns
    }

    /// Returns true if this section's type is a pre-release type.
    pub fn is_pre_release(&self) -> bool {
        self.kind.is_pre_release()
    }

    /// Writes this section's slots, type first, into `out`, which must be [Release::SLOTS] long.
    pub(crate) fn write_slots(&self, out: &mut [i64]) {
        out[0] = self.kind.code().into();
        out[1..].copy_from_slice(&self.columns);
    }
}
