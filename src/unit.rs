use crate::scalar::Scalar;

/// One atomic step of a version comparison.
///
/// All comparison semantics flow from how [`crate::extract::next_component`]
/// fills in `a`, `b` and `c`; `Unit` itself is just a triple ordered strictly
/// lexicographically, and carries no other structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Unit {
	pub a: Scalar,
	pub b: Scalar,
	pub c: Scalar,
}

impl Unit {
	pub(crate) const fn new(a: Scalar, b: Scalar, c: Scalar) -> Self {
		Unit { a, b, c }
	}
}
