//! Operation registry keyed by cross-language name.
//!
//! Every operation is registered as `Namespace.name` using the names shared by
//! all language ports (`Comparison.lessThan`, `String.indexOf`, ...), with
//! parameters in the shared order.

use std::fmt;

use ahash::RandomState;
use indexmap::IndexMap;
use phf::phf_map;
use smallvec::SmallVec;
use tracing::trace;

use crate::{CallError, Value, ValueType, arithmetic, comparison, find_best_match, logical, string};
use crate::value::widen_integer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Arithmetic,
    Comparison,
    Logical,
    String,
}

static NAMESPACES: phf::Map<&'static str, Namespace> = phf_map! {
    "Arithmetic" => Namespace::Arithmetic,
    "arithmetic" => Namespace::Arithmetic,
    "Comparison" => Namespace::Comparison,
    "comparison" => Namespace::Comparison,
    "Logical" => Namespace::Logical,
    "logical" => Namespace::Logical,
    "String" => Namespace::String,
    "string" => Namespace::String,
};

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Arithmetic,
        Namespace::Comparison,
        Namespace::Logical,
        Namespace::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Namespace::Arithmetic => "Arithmetic",
            Namespace::Comparison => "Comparison",
            Namespace::Logical => "Logical",
            Namespace::String => "String",
        }
    }

    pub fn from_name(name: &str) -> Option<Namespace> {
        NAMESPACES.get(name).copied()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub params: &'static [ValueType],
    pub ret: ValueType,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Checks `args` against the parameter list. Integers passed for a
    /// `Number` parameter are widened; ones that would round are rejected.
    fn bind(&self, op: &str, args: &[Value]) -> Result<Args, CallError> {
        if args.len() != self.params.len() {
            return Err(CallError::ArgumentCountMismatch {
                op: op.to_string(),
                expected: self.params.len(),
                actual: args.len(),
            });
        }
        let mut bound: SmallVec<[Value; 3]> = SmallVec::with_capacity(args.len());
        for (index, (arg, &ty)) in args.iter().zip(self.params).enumerate() {
            let v = match (ty, arg) {
                (ValueType::Number, Value::Integer(i)) => match widen_integer(*i) {
                    Some(f) => Value::Number(f),
                    None => {
                        return Err(CallError::InvalidLiteral {
                            ty,
                            text: i.to_string(),
                            reason: "integer is not exactly representable as a Number".into(),
                        });
                    }
                },
                _ if arg.value_type() == ty => arg.clone(),
                _ => {
                    return Err(CallError::TypeMismatch {
                        op: op.to_string(),
                        index,
                        expected: ty,
                        actual: arg.value_type(),
                    });
                }
            };
            bound.push(v);
        }
        Ok(Args(bound))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

/// Arguments already checked against a [`Signature`].
pub struct Args(SmallVec<[Value; 3]>);

impl Args {
    pub fn number(&self, i: usize) -> f64 {
        match &self.0[i] {
            Value::Number(f) => *f,
            other => unreachable!("argument {i} bound as Number, found {}", other.type_name()),
        }
    }

    pub fn integer(&self, i: usize) -> i64 {
        match &self.0[i] {
            Value::Integer(v) => *v,
            other => unreachable!("argument {i} bound as Integer, found {}", other.type_name()),
        }
    }

    pub fn boolean(&self, i: usize) -> bool {
        match &self.0[i] {
            Value::Boolean(b) => *b,
            other => unreachable!("argument {i} bound as Boolean, found {}", other.type_name()),
        }
    }

    pub fn text(&self, i: usize) -> &str {
        match &self.0[i] {
            Value::Text(s) => s,
            other => unreachable!("argument {i} bound as Text, found {}", other.type_name()),
        }
    }

    pub fn text_list(&self, i: usize) -> &[String] {
        match &self.0[i] {
            Value::TextList(items) => items,
            other => unreachable!("argument {i} bound as Array<Text>, found {}", other.type_name()),
        }
    }
}

pub type OpFn = fn(&Args) -> Value;

pub struct Operation {
    pub namespace: Namespace,
    pub name: &'static str,
    pub signature: Signature,
    qualified: String,
    func: OpFn,
}

impl Operation {
    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Value, CallError> {
        let bound = self.signature.bind(&self.qualified, args)?;
        let out = (self.func)(&bound);
        trace!(op = %self.qualified, result = %out, "call");
        Ok(out)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.qualified)
            .field("signature", &self.signature)
            .finish()
    }
}

pub struct Registry {
    ops: IndexMap<String, Operation, RandomState>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            ops: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Adds `func` under `namespace.name`, replacing any earlier entry.
    ///
    /// # Panics
    ///
    /// Calls panic if `func` reads an [`Args`] index or type that `params`
    /// does not declare; arguments are only checked against `params`.
    pub fn register(
        &mut self,
        namespace: Namespace,
        name: &'static str,
        params: &'static [ValueType],
        ret: ValueType,
        func: OpFn,
    ) {
        let qualified = format!("{namespace}.{name}");
        self.ops.insert(
            qualified.clone(),
            Operation {
                namespace,
                name,
                signature: Signature { params, ret },
                qualified,
                func,
            },
        );
    }

    /// Registry holding every primitive operation, in declaration order.
    pub fn standard() -> Self {
        use ValueType::{Boolean, Integer, Number, Text, TextList};

        const NN: &[ValueType] = &[Number, Number];
        const BB: &[ValueType] = &[Boolean, Boolean];
        const T: &[ValueType] = &[Text];
        const TT: &[ValueType] = &[Text, Text];

        let mut r = Self::new();

        let ns = Namespace::Arithmetic;
        r.register(ns, "add", NN, Number, |a| {
            arithmetic::add(a.number(0), a.number(1)).into()
        });
        r.register(ns, "subtract", NN, Number, |a| {
            arithmetic::subtract(a.number(0), a.number(1)).into()
        });
        r.register(ns, "multiply", NN, Number, |a| {
            arithmetic::multiply(a.number(0), a.number(1)).into()
        });
        r.register(ns, "divide", NN, Number, |a| {
            arithmetic::divide(a.number(0), a.number(1)).into()
        });
        r.register(ns, "modulo", NN, Number, |a| {
            arithmetic::modulo(a.number(0), a.number(1)).into()
        });

        let ns = Namespace::Comparison;
        r.register(ns, "lessThan", NN, Boolean, |a| {
            comparison::less_than(a.number(0), a.number(1)).into()
        });
        r.register(ns, "greaterThan", NN, Boolean, |a| {
            comparison::greater_than(a.number(0), a.number(1)).into()
        });
        r.register(ns, "equal", NN, Boolean, |a| {
            comparison::equal(a.number(0), a.number(1)).into()
        });
        r.register(ns, "notEqual", NN, Boolean, |a| {
            comparison::not_equal(a.number(0), a.number(1)).into()
        });
        r.register(ns, "lessEqual", NN, Boolean, |a| {
            comparison::less_equal(a.number(0), a.number(1)).into()
        });
        r.register(ns, "greaterEqual", NN, Boolean, |a| {
            comparison::greater_equal(a.number(0), a.number(1)).into()
        });

        let ns = Namespace::Logical;
        r.register(ns, "and", BB, Boolean, |a| {
            logical::and(a.boolean(0), a.boolean(1)).into()
        });
        r.register(ns, "or", BB, Boolean, |a| {
            logical::or(a.boolean(0), a.boolean(1)).into()
        });
        r.register(ns, "not", &[Boolean], Boolean, |a| {
            logical::not(a.boolean(0)).into()
        });

        let ns = Namespace::String;
        r.register(ns, "concat", TT, Text, |a| {
            string::concat(a.text(0), a.text(1)).into()
        });
        r.register(ns, "length", T, Integer, |a| {
            Value::Integer(string::length(a.text(0)) as i64)
        });
        r.register(ns, "substring", &[Text, Integer, Integer], Text, |a| {
            string::substring(a.text(0), a.integer(1), a.integer(2)).into()
        });
        r.register(ns, "indexOf", TT, Integer, |a| {
            string::index_of(a.text(0), a.text(1)).into()
        });
        r.register(ns, "contains", TT, Boolean, |a| {
            string::contains(a.text(0), a.text(1)).into()
        });
        r.register(ns, "startsWith", TT, Boolean, |a| {
            string::starts_with(a.text(0), a.text(1)).into()
        });
        r.register(ns, "endsWith", TT, Boolean, |a| {
            string::ends_with(a.text(0), a.text(1)).into()
        });
        r.register(ns, "toUppercase", T, Text, |a| {
            string::to_uppercase(a.text(0)).into()
        });
        r.register(ns, "toLowercase", T, Text, |a| {
            string::to_lowercase(a.text(0)).into()
        });
        r.register(ns, "trim", T, Text, |a| string::trim(a.text(0)).into());
        r.register(ns, "split", TT, TextList, |a| {
            string::split(a.text(0), a.text(1)).into()
        });
        r.register(ns, "join", &[TextList, Text], Text, |a| {
            string::join(a.text_list(0), a.text(1)).into()
        });
        r.register(ns, "replace", &[Text, Text, Text], Text, |a| {
            string::replace(a.text(0), a.text(1), a.text(2)).into()
        });
        r.register(ns, "isEmpty", T, Boolean, |a| {
            string::is_empty(a.text(0)).into()
        });

        r
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.ops.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    /// Looks up an operation by qualified name.
    ///
    /// The namespace may be written in lower case, and may be omitted when
    /// the bare name is unique across namespaces.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        if let Some(op) = self.ops.get(name) {
            return Some(op);
        }
        match name.split_once('.') {
            Some((ns, op)) => {
                let ns = Namespace::from_name(ns)?;
                self.ops.get(&format!("{ns}.{op}"))
            }
            None => {
                let mut found = self.ops.values().filter(|op| op.name == name);
                let first = found.next()?;
                if found.next().is_some() {
                    return None;
                }
                Some(first)
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&Operation, CallError> {
        self.get(name).ok_or_else(|| CallError::UnknownOperation {
            name: name.to_string(),
            suggestion: find_best_match(name, self.names()).map(str::to_string),
        })
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        self.resolve(name)?.invoke(args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_every_operation() {
        let r = Registry::standard();
        assert_eq!(r.len(), 28);
        let per_ns = |ns| r.iter().filter(|op| op.namespace == ns).count();
        assert_eq!(per_ns(Namespace::Arithmetic), 5);
        assert_eq!(per_ns(Namespace::Comparison), 6);
        assert_eq!(per_ns(Namespace::Logical), 3);
        assert_eq!(per_ns(Namespace::String), 14);
        assert_eq!(r.names().next(), Some("Arithmetic.add"));
    }

    #[test]
    fn lookup_accepts_lowercase_namespace_and_bare_names() {
        let r = Registry::standard();
        assert_eq!(r.get("string.indexOf").unwrap().qualified_name(), "String.indexOf");
        assert_eq!(r.get("modulo").unwrap().qualified_name(), "Arithmetic.modulo");
        assert!(r.get("Bitwise.xor").is_none());
        assert!(r.get("String.nope").is_none());
    }

    #[test]
    fn signature_display() {
        let r = Registry::standard();
        let op = r.get("String.substring").unwrap();
        assert_eq!(op.signature.to_string(), "(Text, Integer, Integer) -> Text");
        assert_eq!(op.signature.arity(), 3);
    }

    #[test]
    fn integer_arguments_widen_unless_they_would_round() {
        let r = Registry::standard();
        let sum = r.call("add", &[Value::Integer(1 << 53), Value::Number(2.0)]).unwrap();
        assert_eq!(sum, Value::Number(9_007_199_254_740_994.0));

        let err = r
            .call("add", &[Value::Integer((1 << 53) + 1), Value::Number(0.0)])
            .unwrap_err();
        assert!(
            matches!(err, CallError::InvalidLiteral { ty: ValueType::Number, ref text, .. } if text == "9007199254740993"),
            "{err}"
        );
    }

    #[test]
    #[should_panic(expected = "bound as Text")]
    fn func_reading_undeclared_type_panics() {
        let mut r = Registry::new();
        r.register(Namespace::String, "broken", &[ValueType::Number], ValueType::Text, |a| {
            a.text(0).into()
        });
        let _ = r.call("String.broken", &[Value::Number(1.0)]);
    }
}
