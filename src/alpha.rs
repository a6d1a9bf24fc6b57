use crate::flags::SideFlags;
use crate::scalar::Scalar;

/// How an alphabetic token influences ordering relative to the numeric
/// release it is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AlphaClass {
	/// Sorts below an equivalent numeric release: exact `alpha`, `beta`,
	/// `rc`, or any run starting with `pre`.
	Prerelease,
	/// Sorts above an equivalent numeric release: any run starting with
	/// `post`, exact `patch`/`pl`, an "errata"-shaped run (see the open
	/// question below), or a lone `p`/`P` under [`SideFlags::P_IS_PATCH`].
	Postrelease,
	/// Anything else; stays attached to the preceding number as a plain
	/// suffix and does not move the component above or below the release.
	Neutral,
}

/// Consumes the longest prefix of ASCII letters from `cursor`, classifies
/// the whole run, and returns its first byte folded to lowercase together
/// with the classification.
///
/// Returns `None` if the run is empty. The recognized-word list is closed;
/// no configuration extends it. `flags` only affects the single-letter
/// `p`/`P` case: it classifies as postrelease exclusively when
/// [`SideFlags::P_IS_PATCH`] is set for this side, since plenty of real
/// versions use a bare `p` for something other than a patch level.
///
/// The "errata" arm preserves an inherited quirk: it matches any run of
/// length exactly 6 whose first two letters case-insensitively read `er`,
/// rather than comparing the whole word "errata". Whether this was
/// intentional (recognizing any `er`-prefixed length-6 postrelease-style
/// suffix) or an off-by-some bug is an open question upstream; this crate
/// preserves the observable behavior rather than silently narrowing it.
/// See DESIGN.md.
pub(crate) fn parse_alpha(cursor: &mut &[u8], flags: SideFlags) -> Option<(Scalar, AlphaClass)> {
	let mut consumed = 0;
	while consumed < cursor.len() && cursor[consumed].is_ascii_alphabetic() {
		consumed += 1;
	}
	if consumed == 0 {
		return None;
	}

	let word = &cursor[..consumed];
	*cursor = &cursor[consumed..];

	let mut class = classify(word);
	if class == AlphaClass::Neutral
		&& flags.contains(SideFlags::P_IS_PATCH)
		&& word.len() == 1
		&& word[0].eq_ignore_ascii_case(&b'p')
	{
		class = AlphaClass::Postrelease;
	}

	let first = word[0];
	let folded = if first.is_ascii_uppercase() { first - b'A' + b'a' } else { first };
	Some((Scalar::from(folded), class))
}

fn classify(word: &[u8]) -> AlphaClass {
	if word.eq_ignore_ascii_case(b"alpha")
		|| word.eq_ignore_ascii_case(b"beta")
		|| word.eq_ignore_ascii_case(b"rc")
		|| starts_with_ignore_case(word, b"pre")
	{
		AlphaClass::Prerelease
	} else if starts_with_ignore_case(word, b"post")
		|| word.eq_ignore_ascii_case(b"patch")
		|| word.eq_ignore_ascii_case(b"pl")
		|| (word.len() == 6 && word[..2].eq_ignore_ascii_case(b"er"))
	{
		AlphaClass::Postrelease
	} else {
		AlphaClass::Neutral
	}
}

fn starts_with_ignore_case(word: &[u8], prefix: &[u8]) -> bool {
	word.len() >= prefix.len() && word[..prefix.len()].eq_ignore_ascii_case(prefix)
}
