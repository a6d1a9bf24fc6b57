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

use std::cmp::Ordering;

use crate::extract::next_component;
use crate::flags::{CombinedFlags, SideFlags};
use crate::unit::Unit;

/// Compares two version strings with no flags on either side.
///
/// This is the plain entry point: equivalent to
/// `compare_asymmetric(v1, v2, SideFlags::empty(), SideFlags::empty())`.
///
/// ```
/// use std::cmp::Ordering;
/// use vercmp::compare;
///
/// assert_eq!(compare("1.0", "1.0"), Ordering::Equal);
/// assert_eq!(compare("1.0", "1.1"), Ordering::Less);
/// assert_eq!(compare("1.0rc1", "1.0"), Ordering::Less);
/// ```
pub fn compare(v1: impl AsRef<[u8]>, v2: impl AsRef<[u8]>) -> Ordering {
	compare_asymmetric(v1, v2, SideFlags::empty(), SideFlags::empty())
}

/// Compares two version strings, applying the same `flags` to both sides.
///
/// Kept for callers migrating from the historical "one flag word, symmetric"
/// API; prefer [`compare_asymmetric`] when the two sides need different
/// treatment.
pub fn compare_symmetric(v1: impl AsRef<[u8]>, v2: impl AsRef<[u8]>, flags: SideFlags) -> Ordering {
	compare_asymmetric(v1, v2, flags, flags)
}

/// Compares two version strings using a single flag word that carries
/// distinct left/right `P_IS_PATCH`/`ANY_IS_PATCH` bits.
///
/// `flags` is translated into a `(left, right)` pair of [`SideFlags`] via
/// [`CombinedFlags::split`] before comparing; see that type for the bit
/// layout.
pub fn compare_combined(v1: impl AsRef<[u8]>, v2: impl AsRef<[u8]>, flags: CombinedFlags) -> Ordering {
	let (v1_flags, v2_flags) = flags.split();
	compare_asymmetric(v1, v2, v1_flags, v2_flags)
}

/// Compares two version strings with independent per-side flags.
///
/// This is the most general entry point; `compare`, `compare_symmetric` and
/// `compare_combined` all funnel into it. Drives two [extractors][next_component]
/// in lockstep, comparing the units they emit pairwise, until both sides
/// are exhausted. A side with [`SideFlags::LOWER_BOUND`] or
/// [`SideFlags::UPPER_BOUND`] set gets one synthetic extra component at end
/// of string so it can represent an open interval bound rather than an
/// exact version. If both bound flags are set on the same side — a caller
/// error — `LOWER_BOUND` takes precedence; the comparison still completes
/// and never panics.
///
/// Runs in time linear in `v1.len() + v2.len()`, performs no allocation,
/// and never fails: every input, including empty strings and strings of
/// pure separators, produces a defined `Ordering`.
pub fn compare_asymmetric(
	v1: impl AsRef<[u8]>,
	v2: impl AsRef<[u8]>,
	v1_flags: SideFlags,
	v2_flags: SideFlags,
) -> Ordering {
	let mut v1 = v1.as_ref();
	let mut v2 = v2.as_ref();

	let mut v1_buf = [Unit::default(); 2];
	let mut v2_buf = [Unit::default(); 2];
	let mut v1_len = 0usize;
	let mut v2_len = 0usize;

	let bound_flags = SideFlags::LOWER_BOUND | SideFlags::UPPER_BOUND;
	let mut v1_extra = u8::from(v1_flags.intersects(bound_flags));
	let mut v2_extra = u8::from(v2_flags.intersects(bound_flags));

	loop {
		if v1_len == 0 {
			v1_len = next_component(&mut v1, v1_flags, &mut v1_buf);
		}
		if v2_len == 0 {
			v2_len = next_component(&mut v2, v2_flags, &mut v2_buf);
		}

		let shift = v1_len.min(v2_len);
		for i in 0..shift {
			let ordering = v1_buf[i].cmp(&v2_buf[i]);
			if ordering != Ordering::Equal {
				return ordering;
			}
		}

		// The longer side's leftover unit(s) are reconsidered next
		// iteration instead of being re-extracted.
		if v1_len != v2_len {
			for i in 0..shift {
				v1_buf[i] = v1_buf[i + shift];
				v2_buf[i] = v2_buf[i + shift];
			}
		}
		v1_len -= shift;
		v2_len -= shift;

		let mut v1_exhausted = v1.is_empty() && v1_len == 0;
		let mut v2_exhausted = v2.is_empty() && v2_len == 0;

		if v1_exhausted && v1_extra > 0 {
			v1_extra -= 1;
			v1_exhausted = false;
		}
		if v2_exhausted && v2_extra > 0 {
			v2_extra -= 1;
			v2_exhausted = false;
		}

		if v1_exhausted && v2_exhausted {
			return Ordering::Equal;
		}
	}
}
