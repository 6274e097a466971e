//! Minimal encoder for building test fixtures.
//!
//! Dictionaries are written in insertion order, not sorted, so fixtures can
//! reproduce non-canonical files byte for byte.

use super::value::Value;

pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_value(value, &mut buf);
    buf
}

fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.extend_from_slice(format!("i{}e", i).as_bytes());
        }
        Value::Bytes(b) => encode_bytes(b, buf),
        Value::List(l) => {
            buf.push(b'l');
            for item in l {
                encode_value(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(d) => {
            buf.push(b'd');
            for (key, val) in d.iter() {
                encode_bytes(key.as_bytes(), buf);
                encode_value(val, buf);
            }
            buf.push(b'e');
        }
    }
}

fn encode_bytes(bytes: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(format!("{}:", bytes.len()).as_bytes());
    buf.extend_from_slice(bytes);
}
