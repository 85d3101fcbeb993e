use crate::Value;

/// Sink for the literal rendering of values.
///
/// Floats render through `ryu` with `NaN`, `Infinity` and `-Infinity` for the
/// special values, text renders as a JSON string literal so that empty and
/// whitespace-only results stay visible.
pub trait Appendable {
    fn append_str(&mut self, s: &str);
    fn append_i64(&mut self, i: i64);
    fn append_f64(&mut self, f: f64);
    fn append_bool(&mut self, b: bool);
    fn append_text_literal(&mut self, s: &str);
    fn append_value(&mut self, v: &Value);
}

impl Appendable for String {
    fn append_str(&mut self, s: &str) {
        self.push_str(s);
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(i));
    }
    fn append_f64(&mut self, f: f64) {
        if f.is_nan() {
            self.push_str("NaN");
        } else if f.is_infinite() {
            self.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
        } else {
            let mut buf = ryu::Buffer::new();
            self.push_str(buf.format_finite(f));
        }
    }
    fn append_bool(&mut self, b: bool) {
        self.push_str(if b { "true" } else { "false" });
    }
    fn append_text_literal(&mut self, s: &str) {
        match serde_json::to_string(s) {
            Ok(quoted) => self.push_str(&quoted),
            Err(_) => {
                self.push('"');
                self.push_str(s);
                self.push('"');
            }
        }
    }
    fn append_value(&mut self, v: &Value) {
        match v {
            Value::Number(f) => self.append_f64(*f),
            Value::Integer(i) => self.append_i64(*i),
            Value::Boolean(b) => self.append_bool(*b),
            Value::Text(s) => self.append_text_literal(s),
            Value::TextList(items) => {
                self.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.push_str(", ");
                    }
                    self.append_text_literal(item);
                }
                self.push(']');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_special_floats_by_name() {
        let mut out = String::new();
        out.append_f64(f64::NAN);
        out.push(' ');
        out.append_f64(f64::NEG_INFINITY);
        out.push(' ');
        out.append_f64(-30.0);
        out.push(' ');
        out.append_f64(-0.0);
        assert_eq!(out, "NaN -Infinity -30.0 -0.0");
    }

    #[test]
    fn renders_lists_as_quoted_items() {
        let mut out = String::new();
        out.append_value(&Value::TextList(vec!["a".into(), "".into(), "b\"c".into()]));
        assert_eq!(out, r#"["a", "", "b\"c"]"#);
    }
}
