use std::fmt::Write as _;

use pymarshal::marshal::Value;

use crate::cmd::util::hex;

/// Output truncation limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of items printed per list or dict.
	pub max_items: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_items: 64,
		}
	}
}

/// Print one decoded value tree.
pub fn print_value(value: &Value, options: PrintOptions) {
	print!("{}", render_value(value, options));
}

/// Render one decoded value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	render_into(&mut out, None, value, 0, options);
	out
}

fn render_into(out: &mut String, label: Option<&str>, value: &Value, indent: usize, options: PrintOptions) {
	let pad = " ".repeat(indent);
	let label = label.map(|label| format!("{label}: ")).unwrap_or_default();

	match value {
		Value::Absent => {
			let _ = writeln!(out, "{pad}{label}<absent>");
		}
		Value::None => {
			let _ = writeln!(out, "{pad}{label}None");
		}
		Value::Bool(flag) => {
			let _ = writeln!(out, "{pad}{label}{}", if *flag { "True" } else { "False" });
		}
		Value::Int(number) => {
			let _ = writeln!(out, "{pad}{label}{number}");
		}
		Value::Float(number) => {
			let _ = writeln!(out, "{pad}{label}{number:?}");
		}
		Value::String(text) => {
			let _ = writeln!(out, "{pad}{label}\"{}\"", truncate(text, options.max_string_len));
		}
		Value::Unsupported(item) => {
			let _ = writeln!(out, "{pad}{label}<{} {}>", item.name(), hex(&item.payload));
		}
		Value::List(items) => {
			let _ = writeln!(out, "{pad}{label}list[{}]", items.len());
			for (idx, item) in items.iter().take(options.max_items).enumerate() {
				render_into(out, Some(format!("[{idx}]").as_str()), item, indent + 2, options);
			}
			if items.len() > options.max_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_items);
			}
		}
		Value::Dict(dict) => {
			let _ = writeln!(out, "{pad}{label}dict[{}]", dict.len());
			for (key, item) in dict.iter().take(options.max_items) {
				render_into(out, Some(key), item, indent + 2, options);
			}
			if dict.len() > options.max_items {
				let _ = writeln!(out, "{pad}  ... {} more", dict.len() - options.max_items);
			}
		}
	}
}

fn truncate(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_owned(),
	}
}
