/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Canonical compact rendering of a registration's endpoint list.
//!
//! Only object elements are kept, and of those only the recognized keys, in
//! a fixed order. Unknown keys and source key order never affect the output.

use std::fmt::Write;

use serde_json::Value;

use crate::access::{FieldAccess, JsonObject};

const STRING_KEYS: [&str; 3] = ["name", "endpoint", "version"];
const LIST_KEYS: [&str; 3] = ["capabilities", "skills", "domains"];

/// Render the recognized subset of `endpoints` as a compact JSON array.
pub fn endpoints_raw_json(endpoints: &[Value]) -> String {
    let mut out = String::from("[");
    let mut first = true;
    for entry in endpoints.iter().filter_map(Value::as_object) {
        if !first {
            out.push(',');
        }
        first = false;
        write_entry(entry, &mut out);
    }
    out.push(']');
    out
}

fn write_entry(entry: &JsonObject, out: &mut String) {
    out.push('{');
    let mut first = true;

    for key in STRING_KEYS {
        if let Some(value) = entry.string(key) {
            write_key(key, &mut first, out);
            write_string(value, out);
        }
    }

    for key in LIST_KEYS {
        if let Some(items) = entry.array(key) {
            write_key(key, &mut first, out);
            out.push('[');
            let strings = items.iter().filter_map(Value::as_str);
            for (idx, item) in strings.enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_string(item, out);
            }
            out.push(']');
        }
    }

    out.push('}');
}

fn write_key(key: &str, first: &mut bool, out: &mut String) {
    if !*first {
        out.push(',');
    }
    *first = false;
    write_string(key, out);
    out.push(':');
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                // writing into a String cannot fail
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
}
