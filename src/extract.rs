use crate::alpha::{parse_alpha, AlphaClass};
use crate::flags::SideFlags;
use crate::number::parse_number;
use crate::scalar::Scalar;
use crate::unit::Unit;

fn is_version_byte(b: u8) -> bool {
	b.is_ascii_alphanumeric()
}

/// Extracts the next one or two [`Unit`]s from `cursor` into `buf`,
/// advancing `cursor` past what was consumed, and returns how many units
/// were written (1 or 2).
///
/// Skips leading separators, then parses `number [alpha [number]]` out of
/// the following alphanumeric run. A classified alpha token (prerelease or
/// postrelease) is "unglued" into its own unit so that, for example,
/// `"1alpha"` sorts below `"1"` — the companion unit's `a` field is `-1`,
/// which is less than the `0` the other side produces at end of string. A
/// neutral alpha with no trailing number stays attached to the number as a
/// single unit instead.
pub(crate) fn next_component(cursor: &mut &[u8], flags: SideFlags, buf: &mut [Unit; 2]) -> usize {
	while let Some(&b) = cursor.first() {
		if is_version_byte(b) {
			break;
		}
		*cursor = &cursor[1..];
	}

	if cursor.is_empty() {
		buf[0] = if flags.contains(SideFlags::LOWER_BOUND) {
			Unit::new(-2, -2, -2)
		} else if flags.contains(SideFlags::UPPER_BOUND) {
			Unit::new(Scalar::MAX, Scalar::MAX, Scalar::MAX)
		} else {
			Unit::new(0, -1, -1)
		};
		return 1;
	}

	let number = parse_number(cursor);
	let alpha = parse_alpha(cursor, flags);
	let extra_number = parse_number(cursor);

	// Defensive: skip any remaining version bytes in this run. Well-formed
	// input never leaves any, since number/alpha/number already consumed
	// the whole alphanumeric run it started in.
	while let Some(&b) = cursor.first() {
		if !is_version_byte(b) {
			break;
		}
		*cursor = &cursor[1..];
	}

	let (alpha_letter, mut class) = match alpha {
		Some((letter, class)) => (letter, class),
		None => (-1, AlphaClass::Neutral),
	};
	if flags.contains(SideFlags::ANY_IS_PATCH) {
		class = AlphaClass::Postrelease;
	}

	if number != -1 && extra_number != -1 {
		// "1a2", "1patch2": number and the (alpha, extranumber) pair are
		// distinct components.
		buf[0] = Unit::new(number, -1, -1);
		buf[1] = companion_unit(class, alpha_letter, extra_number);
		2
	} else if number != -1 && alpha.is_some() && class != AlphaClass::Neutral {
		// "1alpha", "1patch": unglue the classified alpha from the number.
		buf[0] = Unit::new(number, -1, -1);
		buf[1] = companion_unit(class, alpha_letter, -1);
		2
	} else {
		// Bare number, bare alpha, or a neutral alpha glued to a number
		// ("1a" stays one unit; "1a2" always has an extranumber and is
		// handled by the first branch above).
		let number = if number == -1 && class == AlphaClass::Postrelease { 0 } else { number };
		buf[0] = Unit::new(number, alpha_letter, extra_number);
		1
	}
}

fn companion_unit(class: AlphaClass, alpha_letter: Scalar, c: Scalar) -> Unit {
	let a = if class == AlphaClass::Postrelease { 0 } else { -1 };
	Unit::new(a, alpha_letter, c)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert2::assert;

	fn extract(input: &'static str, flags: SideFlags) -> (Vec<Unit>, &'static [u8]) {
		let mut cursor: &[u8] = input.as_bytes();
		let mut buf = [Unit::default(); 2];
		let len = next_component(&mut cursor, flags, &mut buf);
		(buf[..len].to_vec(), cursor)
	}

	#[test]
	fn pure_number() {
		let (units, rest) = extract("123.4", SideFlags::empty());
		assert!(units == vec![Unit::new(123, -1, -1)]);
		assert!(rest == b".4");
	}

	#[test]
	fn end_of_string_with_no_bound_flag() {
		let (units, rest) = extract("", SideFlags::empty());
		assert!(units == vec![Unit::new(0, -1, -1)]);
		assert!(rest.is_empty());
	}

	#[test]
	fn end_of_string_with_lower_bound() {
		let (units, _) = extract("", SideFlags::LOWER_BOUND);
		assert!(units == vec![Unit::new(-2, -2, -2)]);
	}

	#[test]
	fn end_of_string_with_upper_bound() {
		let (units, _) = extract("", SideFlags::UPPER_BOUND);
		assert!(units == vec![Unit::new(Scalar::MAX, Scalar::MAX, Scalar::MAX)]);
	}

	#[test]
	fn number_then_postrelease_alpha_then_number_splits_in_two() {
		let (units, rest) = extract("1patch2", SideFlags::empty());
		assert!(units == vec![Unit::new(1, -1, -1), Unit::new(0, i64::from(b'p'), 2)]);
		assert!(rest.is_empty());
	}

	#[test]
	fn number_then_prerelease_alpha_then_number_splits_in_two() {
		let (units, _) = extract("1rc2", SideFlags::empty());
		assert!(units == vec![Unit::new(1, -1, -1), Unit::new(-1, i64::from(b'r'), 2)]);
	}

	#[test]
	fn number_then_neutral_alpha_then_number_also_splits() {
		let (units, _) = extract("1a2", SideFlags::empty());
		assert!(units == vec![Unit::new(1, -1, -1), Unit::new(-1, i64::from(b'a'), 2)]);
	}

	#[test]
	fn number_then_classified_alpha_alone_splits_in_two() {
		let (units, _) = extract("1alpha", SideFlags::empty());
		assert!(units == vec![Unit::new(1, -1, -1), Unit::new(-1, i64::from(b'a'), -1)]);
	}

	#[test]
	fn number_then_neutral_alpha_alone_stays_one_unit() {
		let (units, _) = extract("1a", SideFlags::empty());
		assert!(units == vec![Unit::new(1, i64::from(b'a'), -1)]);
	}

	#[test]
	fn bare_postrelease_alpha_gets_a_zero_number() {
		let (units, _) = extract("patch", SideFlags::empty());
		assert!(units == vec![Unit::new(0, i64::from(b'p'), -1)]);
	}

	#[test]
	fn bare_other_alpha_gets_absent_number() {
		let (units, _) = extract("rc", SideFlags::empty());
		assert!(units == vec![Unit::new(-1, i64::from(b'r'), -1)]);
	}

	#[test]
	fn any_is_patch_overrides_classification_regardless_of_spelling() {
		let (units, _) = extract("1dev2", SideFlags::ANY_IS_PATCH);
		assert!(units == vec![Unit::new(1, -1, -1), Unit::new(0, i64::from(b'd'), 2)]);
	}

	#[test]
	fn separators_are_skipped_before_extraction() {
		let (units, rest) = extract("...1.2", SideFlags::empty());
		assert!(units == vec![Unit::new(1, -1, -1)]);
		assert!(rest == b".2");
	}
}
