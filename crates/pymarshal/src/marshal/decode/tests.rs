use crate::marshal::{Cursor, DecodeOptions, Endianness, MarshalError, Tag, Value, decode_all, decode_buffer, decode_buffer_with};

fn string_record(tag: u8, text: &str) -> Vec<u8> {
	let mut out = vec![tag];
	out.extend_from_slice(&(text.len() as u32).to_le_bytes());
	out.extend_from_slice(text.as_bytes());
	out
}

#[test]
fn decodes_dict_with_true_value() {
	let bytes = [0x7b, 0x73, 0x03, 0x00, 0x00, 0x00, 0x66, 0x6f, 0x6f, 0x54, 0x30];
	let value = decode_buffer(&bytes).expect("dict decodes");

	let dict = value.as_dict().expect("dict value");
	assert_eq!(dict.len(), 1);
	assert_eq!(dict.get("foo"), Some(&Value::Bool(true)));
}

#[test]
fn decodes_empty_list() {
	let value = decode_buffer(&[0x5b, 0, 0, 0, 0]).expect("list decodes");
	assert_eq!(value, Value::List(Vec::new()));
}

#[test]
fn decodes_int32() {
	assert_eq!(decode_buffer(&[0x69, 0x2a, 0, 0, 0]).expect("int decodes"), Value::Int(42));
	assert_eq!(decode_buffer(&[0x69, 0xd6, 0xff, 0xff, 0xff]).expect("negative int decodes"), Value::Int(-42));
}

#[test]
fn decodes_singletons() {
	assert_eq!(decode_buffer(b"N").expect("none"), Value::None);
	assert_eq!(decode_buffer(b"T").expect("true"), Value::Bool(true));
	assert_eq!(decode_buffer(b"F").expect("false"), Value::Bool(false));
	assert_eq!(decode_buffer(b"0").expect("null"), Value::Absent);
	assert_eq!(decode_buffer(&[0]).expect("zero tag"), Value::Absent);
}

#[test]
fn empty_buffer_yields_absent() {
	assert_eq!(decode_buffer(&[]).expect("empty buffer"), Value::Absent);
}

#[test]
fn decodes_binary_float_little_endian_by_default() {
	let mut bytes = vec![b'g'];
	bytes.extend_from_slice(&3.14_f64.to_le_bytes());
	assert_eq!(decode_buffer(&bytes).expect("float decodes"), Value::Float(3.14));
}

#[test]
fn decodes_binary_float_big_endian_when_requested() {
	let mut bytes = vec![b'g'];
	bytes.extend_from_slice(&(-0.25_f64).to_be_bytes());
	let opt = DecodeOptions {
		float_byte_order: Endianness::Big,
		..DecodeOptions::default()
	};
	assert_eq!(decode_buffer_with(&bytes, &opt).expect("float decodes"), Value::Float(-0.25));
}

#[test]
fn decodes_legacy_text_float() {
	let mut bytes = vec![b'f', 4];
	bytes.extend_from_slice(b"3.14");
	assert_eq!(decode_buffer(&bytes).expect("text float decodes"), Value::Float(3.14));

	let mut bytes = vec![b'f', 3];
	bytes.extend_from_slice(b"inf");
	assert_eq!(decode_buffer(&bytes).expect("inf decodes"), Value::Float(f64::INFINITY));
}

#[test]
fn rejects_garbage_text_float() {
	let mut bytes = vec![b'f', 3];
	bytes.extend_from_slice(b"abc");
	let err = decode_buffer(&bytes).expect_err("garbage float should fail");
	assert!(matches!(err, MarshalError::InvalidFloatLiteral { ref text, at: 2 } if text == "abc"));
}

#[test]
fn string_length_counts_bytes() {
	let bytes = string_record(b's', "foo\u{e0b0}bar");
	assert_eq!(bytes[1], 9);
	assert_eq!(decode_buffer(&bytes).expect("string decodes"), Value::from("foo\u{e0b0}bar"));
}

#[test]
fn invalid_utf8_is_replaced_by_default_and_rejected_in_strict_mode() {
	let bytes = [b's', 3, 0, 0, 0, b'a', 0xff, b'b'];
	assert_eq!(decode_buffer(&bytes).expect("lossy decode"), Value::from("a\u{fffd}b"));

	let err = decode_buffer_with(&bytes, &DecodeOptions::strict()).expect_err("strict decode fails");
	assert!(matches!(err, MarshalError::InvalidUtf8 { at: 6 }));
}

#[test]
fn string_reference_resolves_interned_text() {
	let mut bytes = vec![b'[', 2, 0, 0, 0];
	bytes.extend(string_record(b't', "shared"));
	bytes.extend_from_slice(&[b'R', 0, 0, 0, 0]);

	let value = decode_buffer(&bytes).expect("list decodes");
	assert_eq!(value, Value::List(vec![Value::from("shared"), Value::from("shared")]));
}

#[test]
fn plain_strings_are_not_interned() {
	let mut bytes = vec![b'[', 2, 0, 0, 0];
	bytes.extend(string_record(b's', "plain"));
	bytes.extend_from_slice(&[b'R', 0, 0, 0, 0]);

	let err = decode_buffer(&bytes).expect_err("reference to plain string fails");
	assert!(matches!(err, MarshalError::UnresolvedStringRef { index: 0, len: 0 }));
}

#[test]
fn forward_string_reference_is_unresolved() {
	let mut bytes = vec![b'[', 2, 0, 0, 0];
	bytes.extend_from_slice(&[b'R', 1, 0, 0, 0]);
	bytes.extend(string_record(b't', "late"));

	let err = decode_buffer(&bytes).expect_err("forward reference fails");
	assert!(matches!(err, MarshalError::UnresolvedStringRef { index: 1, len: 0 }));
}

#[test]
fn intern_table_spans_concatenated_records() {
	let mut bytes = string_record(b't', "first");
	bytes.extend_from_slice(&[b'R', 0, 0, 0, 0]);

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.decode().expect("first record"), Value::from("first"));
	assert_eq!(cursor.decode().expect("second record"), Value::from("first"));
	assert!(!cursor.has_more());
	assert_eq!(cursor.decode().expect("end of stream"), Value::Absent);
	assert_eq!(cursor.intern_len(), 1);
}

#[test]
fn tuple_and_frozenset_decode_as_list() {
	for tag in [b'(', b'>'] {
		let bytes = [tag, 2, 0, 0, 0, b'T', b'N'];
		assert_eq!(
			decode_buffer(&bytes).expect("sequence decodes"),
			Value::List(vec![Value::Bool(true), Value::None])
		);
	}
}

#[test]
fn dict_stops_at_non_string_key_and_consumes_it() {
	// [ {"a": 1, <None terminator>}, True ]
	let mut bytes = vec![b'[', 2, 0, 0, 0, b'{'];
	bytes.extend(string_record(b's', "a"));
	bytes.extend_from_slice(&[b'i', 1, 0, 0, 0]);
	bytes.push(b'N');
	bytes.push(b'T');

	let value = decode_buffer(&bytes).expect("nested dict decodes");
	let items = value.as_list().expect("list value");
	assert_eq!(items.len(), 2);
	assert_eq!(items[0].get("a"), Some(&Value::Int(1)));
	assert_eq!(items[0].as_dict().map(|dict| dict.len()), Some(1));
	assert_eq!(items[1], Value::Bool(true));
}

#[test]
fn dict_duplicate_key_last_write_wins() {
	let mut bytes = vec![b'{'];
	bytes.extend(string_record(b's', "k"));
	bytes.push(b'F');
	bytes.extend(string_record(b's', "k"));
	bytes.push(b'T');
	bytes.push(b'0');

	let value = decode_buffer(&bytes).expect("dict decodes");
	assert_eq!(value.get("k"), Some(&Value::Bool(true)));
	assert_eq!(value.as_dict().map(|dict| dict.len()), Some(1));
}

#[test]
fn unknown_tag_is_fatal() {
	let err = decode_buffer(&[0x63, 0x00, 0x00]).expect_err("code object tag unsupported");
	assert!(matches!(err, MarshalError::UnknownTag { tag: 0x63, at: 0 }));
}

#[test]
fn unknown_tag_inside_container_reports_offset() {
	let err = decode_buffer(&[b'[', 2, 0, 0, 0, b'N', b'?']).expect_err("nested unknown tag");
	assert!(matches!(err, MarshalError::UnknownTag { tag: b'?', at: 6 }));
}

#[test]
fn unsupported_tags_keep_payload_and_alignment() {
	let mut bytes = vec![b'[', 4, 0, 0, 0];
	bytes.push(b'.');
	bytes.push(b'S');
	bytes.push(b'I');
	bytes.extend_from_slice(&0x0102_0304_0506_0708_i64.to_le_bytes());
	bytes.push(b'T');

	let value = decode_buffer(&bytes).expect("list decodes");
	let items = value.as_list().expect("list value");
	let Value::Unsupported(ellipsis) = &items[0] else {
		panic!("expected ellipsis sentinel");
	};
	assert_eq!(ellipsis.name(), "ELLIPSIS");
	assert!(ellipsis.payload.is_empty());

	let Value::Unsupported(stopiter) = &items[1] else {
		panic!("expected stopiter sentinel");
	};
	assert_eq!(stopiter.tag, Tag::StopIter);

	let Value::Unsupported(int64) = &items[2] else {
		panic!("expected int64 sentinel");
	};
	assert_eq!(int64.name(), "INT64");
	assert_eq!(int64.payload, 0x0102_0304_0506_0708_i64.to_le_bytes());

	assert_eq!(items[3], Value::Bool(true));
}

#[test]
fn long_payload_covers_all_digits() {
	// Negative digit count; the sign only matters to the value, not the payload size.
	let bytes = [b'l', 0xfd, 0xff, 0xff, 0xff, 0, 0, 0, 0, 0x10, 0, b'N'];
	let mut cursor = Cursor::new(&bytes);
	let Value::Unsupported(long) = cursor.decode().expect("long decodes") else {
		panic!("expected long sentinel");
	};
	assert_eq!(long.tag, Tag::Long);
	assert_eq!(long.payload, bytes[1..11]);
	assert_eq!(cursor.decode().expect("trailing none"), Value::None);
}

#[test]
fn complex_payloads_are_skipped() {
	let mut bytes = vec![b'x', 3];
	bytes.extend_from_slice(b"1.5");
	bytes.push(2);
	bytes.extend_from_slice(b"-2");
	bytes.push(b'y');
	bytes.extend_from_slice(&[0xaa; 16]);

	let values = decode_all(&bytes, &DecodeOptions::default()).expect("records decode");
	assert_eq!(values.len(), 2);
	let Value::Unsupported(text) = &values[0] else {
		panic!("expected complex sentinel");
	};
	assert_eq!(text.payload, b"\x031.5\x02-2");
	let Value::Unsupported(binary) = &values[1] else {
		panic!("expected binary complex sentinel");
	};
	assert_eq!(binary.name(), "BINARY_COMPLEX");
	assert_eq!(binary.payload, [0xaa; 16]);
}

#[test]
fn truncated_string_is_out_of_range() {
	let err = decode_buffer(&[b's', 10, 0, 0, 0, b'a', b'b']).expect_err("short string fails");
	assert!(matches!(err, MarshalError::UnexpectedEof { at: 5, need: 10, rem: 2 }));
}

#[test]
fn truncated_list_is_out_of_range() {
	let err = decode_buffer(&[b'[', 3, 0, 0, 0, b'N']).expect_err("short list fails");
	assert!(matches!(err, MarshalError::UnexpectedEof { at: 6, need: 1, rem: 0 }));
}

#[test]
fn huge_declared_count_does_not_preallocate() {
	let err = decode_buffer(&[b'[', 0xff, 0xff, 0xff, 0xff]).expect_err("no items available");
	assert!(matches!(err, MarshalError::UnexpectedEof { .. }));
}

#[test]
fn nesting_beyond_limit_is_rejected() {
	let mut bytes = Vec::new();
	for _ in 0..4 {
		bytes.extend_from_slice(&[b'[', 1, 0, 0, 0]);
	}
	bytes.push(b'N');

	let shallow = DecodeOptions {
		max_depth: 3,
		..DecodeOptions::default()
	};
	let err = decode_buffer_with(&bytes, &shallow).expect_err("depth 4 exceeds 3");
	assert!(matches!(err, MarshalError::DepthExceeded { max_depth: 3 }));

	let deep_enough = DecodeOptions {
		max_depth: 4,
		..DecodeOptions::default()
	};
	decode_buffer_with(&bytes, &deep_enough).expect("depth 4 fits");
}

#[test]
fn decode_all_reads_concatenated_records() {
	let bytes = [b'i', 1, 0, 0, 0, b'N', b'T'];
	let values = decode_all(&bytes, &DecodeOptions::default()).expect("records decode");
	assert_eq!(values, vec![Value::Int(1), Value::None, Value::Bool(true)]);
}

#[test]
fn dict_at_end_of_buffer_is_empty() {
	let value = decode_buffer(&[0x7b]).expect("bare dict tag decodes");
	assert_eq!(value, Value::Dict(Default::default()));
}

#[test]
fn dict_missing_terminator_ends_at_buffer_end() {
	let bytes = [0x7b, 0x73, 0x03, 0x00, 0x00, 0x00, b'f', b'o', b'o', 0x54];
	let mut cursor = Cursor::new(&bytes);
	let value = cursor.decode().expect("unterminated dict decodes");

	assert_eq!(value.get("foo"), Some(&Value::Bool(true)));
	assert_eq!(value.as_dict().map(|dict| dict.len()), Some(1));
	assert!(!cursor.has_more());
}

#[test]
fn dict_key_without_value_maps_to_absent() {
	let mut bytes = vec![b'{'];
	bytes.extend(string_record(b's', "k"));

	let value = decode_buffer(&bytes).expect("dict decodes");
	assert_eq!(value.get("k"), Some(&Value::Absent));
}

#[test]
fn long_digit_count_beyond_buffer_is_out_of_range() {
	let bytes = [b'l', 0x00, 0x00, 0x00, 0x80];
	let err = decode_buffer(&bytes).expect_err("2**31 digits cannot be present");
	assert!(matches!(err, MarshalError::UnexpectedEof { at: 5, rem: 0, .. }));
}
