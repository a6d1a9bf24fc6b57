// Copyright (c) 2017, Maarten de Vries
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Comparison of software version strings under real-world conventions:
//! dotted numeric components, prerelease tags (`alpha`, `beta`, `rc`,
//! `pre*`), postrelease tags (`post*`, `patch`, `pl`, `errata`-shaped
//! runs), alphabetic suffixes glued onto numbers, and mixed alphanumeric
//! separators.
//!
//! ```
//! use vercmp::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("1.0", "1.0.0"), Ordering::Equal);
//! assert_eq!(compare("1.0alpha1", "1.0"), Ordering::Less);
//! assert_eq!(compare("1.0patch1", "1.0"), Ordering::Greater);
//! ```
//!
//! The comparison is total, deterministic, locale-independent (all
//! classification is ASCII-only) and never allocates: every call walks the
//! two input byte strings once, in lockstep, with a small fixed amount of
//! stack state. There are no error conditions — every input, including the
//! empty string and strings of pure separators, produces a defined
//! [`Ordering`][std::cmp::Ordering].
//!
//! Four entry points cover the same comparison at different levels of
//! generality:
//!
//! - [`compare`] — no flags.
//! - [`compare_symmetric`] — one flag word applied to both sides.
//! - [`compare_combined`] — one flag word carrying separate left/right bits.
//! - [`compare_asymmetric`] — independent flags per side; the most general.
//!
//! See [`SideFlags`] for what the flags actually change: forcing a bare
//! `p`/`P` to mean "patch", forcing every alpha token to mean "patch", and
//! building open lower/upper bounds for range queries by extending a side
//! with one synthetic extra component.

#![forbid(unsafe_code)]

mod alpha;
mod compare;
mod extract;
mod flags;
mod number;
mod scalar;
mod unit;

pub use crate::compare::{compare, compare_asymmetric, compare_combined, compare_symmetric};
pub use crate::flags::{CombinedFlags, SideFlags};

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;
	use std::cmp::Ordering;

	/// Small alphanumeric/separator alphabet so generated strings actually
	/// exercise number/alpha/separator transitions instead of mostly
	/// missing each other.
	fn version_string() -> impl Strategy<Value = String> {
		proptest::collection::vec(prop_oneof![
			"[0-9]",
			"[a-zA-Z]",
			Just(".".to_string()),
			Just("-".to_string()),
		], 0..12)
		.prop_map(|parts| parts.concat())
	}

	fn any_side_flags() -> impl Strategy<Value = SideFlags> {
		(0u8..16).prop_map(|bits| SideFlags::from_bits_truncate(bits) & !(SideFlags::LOWER_BOUND | SideFlags::UPPER_BOUND))
	}

	proptest! {
		#[test]
		fn reflexivity(v in version_string()) {
			prop_assert_eq!(compare(&v, &v), Ordering::Equal);
		}

		#[test]
		fn antisymmetry(a in version_string(), b in version_string(), fa in any_side_flags(), fb in any_side_flags()) {
			let forward = compare_asymmetric(&a, &b, fa, fb);
			let backward = compare_asymmetric(&b, &a, fb, fa);
			prop_assert_eq!(forward, backward.reverse());
		}

		#[test]
		fn case_insensitive_alpha_folding(v in version_string()) {
			let upper = v.to_ascii_uppercase();
			prop_assert_eq!(compare(&v, &upper), Ordering::Equal);
		}

		#[test]
		fn lower_bound_never_sorts_above_the_plain_version(v in version_string()) {
			let ordering = compare_asymmetric(&v, &v, SideFlags::LOWER_BOUND, SideFlags::empty());
			prop_assert_ne!(ordering, Ordering::Greater);
		}

		#[test]
		fn upper_bound_never_sorts_below_the_plain_version(v in version_string()) {
			let ordering = compare_asymmetric(&v, &v, SideFlags::UPPER_BOUND, SideFlags::empty());
			prop_assert_ne!(ordering, Ordering::Less);
		}

		#[test]
		fn transitivity(a in version_string(), b in version_string(), c in version_string()) {
			if compare(&a, &b) != Ordering::Greater && compare(&b, &c) != Ordering::Greater {
				prop_assert_ne!(compare(&a, &c), Ordering::Greater);
			}
		}
	}
}
