//! # colver
//!
//! A library for parsing columnar release versions and ordering them.
//!
//! A version is made of up to four numeric *base* columns, an optional *release* section, an
//! optional *specifier* section, and an optional *build* number:
//!
//! ```text
//! 1.2.4.99        base columns
//! 1.0-rc.1        base, then a release candidate
//! 1.0-rc.1-p.2    base, release candidate, then a patch on top of it
//! 1.2-634.0-99.8  sections without a type name
//! 2.0+build42     base, then a build number
//! ```
//!
//! ## Examples
//!
//! ```
//! use colver::prelude::*;
//! use std::cmp::Ordering;
//!
//! let rc = Version::parse("1.0-rc.1").unwrap();
//! let regular = Version::parse("1.0").unwrap();
//! let patched = Version::parse("1.0-p1").unwrap();
//!
//! assert!(rc.is_pre_release());
//! assert!(rc < regular && regular < patched);
//! assert_eq!(Ordering::Greater, compare(&patched, &regular));
//!
//! // a patch level counts as the regular version
//! assert!(regular.limited_equal(&patched));
//! assert!(regular.shares_prefix_with(&rc));
//! ```
//!
//! ## Grammar
//!
//! ```text
//! version    := N ('.' N){0,3} [release] [specifier] [build]
//! release    := sep tname [N ('.' N){0,3}]
//! specifier  := sep tname [N ('.' N){0,3}]
//! build      := '+build' N
//! sep        := '-' | '_'
//! ```
//!
//! Where `N` is a number and `tname` is a [type name](#release-types), which may be omitted. When
//! it is, the section has type [ReleaseType::Common] and the number after the separator is the
//! section's first column.
//!
//! ## Release Types
//!
//! | Name | Type | Pre-release? |
//! |---|---|---|
//! | `alpha` | [ReleaseType::Alpha] | Yes |
//! | `beta` | [ReleaseType::Beta] | Yes |
//! | `pre` | [ReleaseType::Pre] | Yes |
//! | `rc` | [ReleaseType::Rc] | Yes |
//! | *(none)* | [ReleaseType::Common] | No |
//! | `r` | [ReleaseType::Revision] | No |
//! | `p` | [ReleaseType::Patch] | No |
//!
//! Types are listed in ascending order.
//!
//! ## Comparisons
//!
//! Versions compare lexicographically over their [slots](Version::slots). The comparisons differ in
//! how many slots they consider:
//!
//! - [compare]: all slots.
//! - [Version::less] and [Ord]: all slots, then the build number.
//! - [Version::limited_equal]: base, release type and release columns.
//! - [Version::shares_prefix_with]: base columns only.
//!
//! ## Prelude
//!
//! colver provides a prelude module for convenience. Use it with:
//!
//! ```
//! use colver::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod parse;
mod release;
mod version;

pub use crate::error::VersionError;
pub use crate::release::{Release, ReleaseType};
pub use crate::version::{compare, Version, SLOTS};

/// A convenience module appropriate for glob imports (`use colver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::compare;
    #[doc(no_inline)]
    pub use crate::Release;
    #[doc(no_inline)]
    pub use crate::ReleaseType;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
