/// One-byte record discriminant.
///
/// The table is closed: a byte outside it is a hard decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
	/// `0` null record; also terminates a dict. Byte `0x00` reads as this tag too.
	Null,
	/// `N` Python `None`.
	None,
	/// `F` boolean false.
	False,
	/// `T` boolean true.
	True,
	/// `S` `StopIteration` singleton.
	StopIter,
	/// `.` `Ellipsis` singleton.
	Ellipsis,
	/// `i` 32-bit signed integer.
	Int,
	/// `I` 64-bit signed integer.
	Int64,
	/// `f` float as length-prefixed decimal text.
	Float,
	/// `g` float as 8 raw IEEE-754 bytes.
	BinaryFloat,
	/// `x` complex as two length-prefixed decimal texts.
	Complex,
	/// `y` complex as 16 raw IEEE-754 bytes.
	BinaryComplex,
	/// `l` arbitrary-precision integer in 15-bit digits.
	Long,
	/// `s` byte string.
	String,
	/// `t` string also appended to the intern table.
	Interned,
	/// `R` index into the intern table.
	StringRef,
	/// `(` tuple.
	Tuple,
	/// `[` list.
	List,
	/// `>` frozenset.
	FrozenSet,
	/// `{` dict.
	Dict,
}

impl Tag {
	/// Every tag in the table.
	pub const ALL: [Tag; 20] = [
		Tag::Null,
		Tag::None,
		Tag::False,
		Tag::True,
		Tag::StopIter,
		Tag::Ellipsis,
		Tag::Int,
		Tag::Int64,
		Tag::Float,
		Tag::BinaryFloat,
		Tag::Complex,
		Tag::BinaryComplex,
		Tag::Long,
		Tag::String,
		Tag::Interned,
		Tag::StringRef,
		Tag::Tuple,
		Tag::List,
		Tag::FrozenSet,
		Tag::Dict,
	];

	/// Map a wire byte to its tag.
	pub fn from_byte(byte: u8) -> Option<Self> {
		Some(match byte {
			0x00 | b'0' => Self::Null,
			b'N' => Self::None,
			b'F' => Self::False,
			b'T' => Self::True,
			b'S' => Self::StopIter,
			b'.' => Self::Ellipsis,
			b'i' => Self::Int,
			b'I' => Self::Int64,
			b'f' => Self::Float,
			b'g' => Self::BinaryFloat,
			b'x' => Self::Complex,
			b'y' => Self::BinaryComplex,
			b'l' => Self::Long,
			b's' => Self::String,
			b't' => Self::Interned,
			b'R' => Self::StringRef,
			b'(' => Self::Tuple,
			b'[' => Self::List,
			b'>' => Self::FrozenSet,
			b'{' => Self::Dict,
			_ => return None,
		})
	}

	/// Canonical wire byte written for this tag.
	pub fn as_byte(self) -> u8 {
		match self {
			Self::Null => b'0',
			Self::None => b'N',
			Self::False => b'F',
			Self::True => b'T',
			Self::StopIter => b'S',
			Self::Ellipsis => b'.',
			Self::Int => b'i',
			Self::Int64 => b'I',
			Self::Float => b'f',
			Self::BinaryFloat => b'g',
			Self::Complex => b'x',
			Self::BinaryComplex => b'y',
			Self::Long => b'l',
			Self::String => b's',
			Self::Interned => b't',
			Self::StringRef => b'R',
			Self::Tuple => b'(',
			Self::List => b'[',
			Self::FrozenSet => b'>',
			Self::Dict => b'{',
		}
	}

	/// Symbolic upper-case name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Null => "NULL",
			Self::None => "NONE",
			Self::False => "FALSE",
			Self::True => "TRUE",
			Self::StopIter => "STOPITER",
			Self::Ellipsis => "ELLIPSIS",
			Self::Int => "INT",
			Self::Int64 => "INT64",
			Self::Float => "FLOAT",
			Self::BinaryFloat => "BINARY_FLOAT",
			Self::Complex => "COMPLEX",
			Self::BinaryComplex => "BINARY_COMPLEX",
			Self::Long => "LONG",
			Self::String => "STRING",
			Self::Interned => "INTERNED",
			Self::StringRef => "STRINGREF",
			Self::Tuple => "TUPLE",
			Self::List => "LIST",
			Self::FrozenSet => "FROZENSET",
			Self::Dict => "DICT",
		}
	}

	/// True for tags decoded into the unsupported sentinel.
	pub fn is_unsupported(self) -> bool {
		matches!(
			self,
			Self::StopIter | Self::Ellipsis | Self::Int64 | Self::Complex | Self::BinaryComplex | Self::Long
		)
	}
}

impl std::fmt::Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
