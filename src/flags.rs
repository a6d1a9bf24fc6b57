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

bitflags::bitflags! {
	/// Per-side interpretation hints for [`crate::compare_asymmetric`] and
	/// [`crate::compare_symmetric`].
	///
	/// Bit positions are part of this crate's public ABI and will not be
	/// renumbered across semver-compatible releases.
	pub struct SideFlags: u8 {
		/// A single `p`/`P` alpha token classifies as postrelease instead of
		/// neutral. Does not affect multi-letter tokens.
		const P_IS_PATCH   = 0b0001;
		/// Every alpha token on this side classifies as postrelease,
		/// regardless of spelling. Useful for callers who know their
		/// versions never use alphabetic suffixes for prereleases.
		const ANY_IS_PATCH = 0b0010;
		/// End of string on this side yields the synthetic unit
		/// `(-2, -2, -2)`, which sorts below any real component, and this
		/// side gets one extra comparison step before it is considered
		/// exhausted. Used to build an open lower bound for range queries.
		const LOWER_BOUND  = 0b0100;
		/// End of string on this side yields the synthetic unit
		/// `(MAX, MAX, MAX)`, which sorts above any real component, and
		/// this side gets one extra comparison step before it is
		/// considered exhausted. Used to build an open upper bound.
		const UPPER_BOUND  = 0b1000;
	}
}

bitflags::bitflags! {
	/// A single flag word carrying distinct left/right `P_IS_PATCH` and
	/// `ANY_IS_PATCH` bits, for [`crate::compare_combined`].
	///
	/// This is the legacy "one int for both sides" shape some callers
	/// prefer; [`CombinedFlags::split`] translates it into the two
	/// [`SideFlags`] words the comparator actually runs on.
	pub struct CombinedFlags: u8 {
		const P_IS_PATCH_LEFT    = 0b0001;
		const ANY_IS_PATCH_LEFT  = 0b0010;
		const P_IS_PATCH_RIGHT   = 0b0100;
		const ANY_IS_PATCH_RIGHT = 0b1000;
	}
}

impl CombinedFlags {
	/// Translates a combined flag word into the (left, right) `SideFlags`
	/// pair the comparator loop takes.
	///
	/// `CombinedFlags` has no bound bits of its own: lower/upper bound
	/// comparisons always go through [`crate::compare_asymmetric`] with
	/// explicit per-side `SideFlags`.
	pub(crate) fn split(self) -> (SideFlags, SideFlags) {
		let mut left = SideFlags::empty();
		left.set(SideFlags::P_IS_PATCH, self.contains(CombinedFlags::P_IS_PATCH_LEFT));
		left.set(SideFlags::ANY_IS_PATCH, self.contains(CombinedFlags::ANY_IS_PATCH_LEFT));

		let mut right = SideFlags::empty();
		right.set(SideFlags::P_IS_PATCH, self.contains(CombinedFlags::P_IS_PATCH_RIGHT));
		right.set(SideFlags::ANY_IS_PATCH, self.contains(CombinedFlags::ANY_IS_PATCH_RIGHT));

		(left, right)
	}
}
