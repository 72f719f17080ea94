//! Values inspected by the required-ness rule
//!
//! This module provides the `Value` type, a closed set of the semantic kinds
//! that [`required`](crate::ValidationContext::required) knows how to judge.
//! Instead of inspecting arbitrary types at runtime, callers convert their
//! input into a `Value` (usually through `From`) and the emptiness check
//! becomes an exhaustive `match`.
//!
//! # Examples
//!
//! ```
//! use formcheck::Value;
//!
//! assert!(Value::from("").is_empty());
//! assert!(!Value::from("hello").is_empty());
//! assert!(Value::from(0).is_empty());
//! assert!(Value::from(Vec::<i32>::new()).is_empty());
//!
//! // `Option` is an indirection layer; `None` at any depth is nil
//! assert!(Value::from(None::<String>).is_nil());
//! assert!(Value::from(Some(None::<i32>)).is_nil());
//! assert!(!Value::from(Some(Some(5))).is_nil());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// A value whose presence and emptiness can be judged without reflection.
///
/// Each variant stands for one semantic kind:
///
/// | Variant | Empty when |
/// |---|---|
/// | `Str` | zero length |
/// | `Int`, `UInt`, `Float` | equal to zero |
/// | `Bool` | `false` |
/// | `Seq`, `Map`, `Set` | zero length |
/// | `Ref` | `None` (after following every layer) |
/// | `Opaque` | never |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Text
    Str(String),
    /// Signed integer of any width
    Int(i64),
    /// Unsigned integer of any width
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Bool(bool),
    /// Ordered sequence
    Seq(Vec<Value>),
    /// Key/value mapping
    Map(Vec<(Value, Value)>),
    /// Unordered set
    Set(Vec<Value>),
    /// Nullable indirection layer; `None` is nil
    Ref(Option<Box<Value>>),
    /// Any other value (structs and the like); always present, never empty
    Opaque,
}

impl Value {
    /// The nil reference.
    pub fn nil() -> Self {
        Value::Ref(None)
    }

    /// Wrap a value in one non-nil indirection layer.
    ///
    /// ```
    /// use formcheck::Value;
    ///
    /// let v = Value::reference(Value::reference(""));
    /// assert!(!v.is_nil());
    /// assert!(v.is_empty());
    /// ```
    pub fn reference(value: impl Into<Value>) -> Self {
        Value::Ref(Some(Box::new(value.into())))
    }

    /// Follow every indirection layer.
    ///
    /// Returns the concrete value underneath, or `None` if a nil was found at
    /// any layer.
    ///
    /// ```
    /// use formcheck::Value;
    ///
    /// let v = Value::reference(Value::reference(7));
    /// assert_eq!(v.indirect(), Some(&Value::Int(7)));
    /// assert_eq!(Value::reference(Value::nil()).indirect(), None);
    /// ```
    pub fn indirect(&self) -> Option<&Value> {
        let mut current = self;
        while let Value::Ref(inner) = current {
            current = inner.as_deref()?;
        }
        Some(current)
    }

    /// True if a nil is found while following indirection layers.
    pub fn is_nil(&self) -> bool {
        self.indirect().is_none()
    }

    /// True if the value is nil or empty for its kind.
    ///
    /// ```
    /// use formcheck::Value;
    ///
    /// assert!(Value::from(false).is_empty());
    /// assert!(Value::from(0.0).is_empty());
    /// assert!(!Value::from(f64::NAN).is_empty());
    /// assert!(!Value::Opaque.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self.indirect() {
            None => true,
            Some(value) => match value {
                Value::Str(s) => s.is_empty(),
                Value::Int(n) => *n == 0,
                Value::UInt(n) => *n == 0,
                Value::Float(n) => *n == 0.0,
                Value::Bool(b) => !*b,
                Value::Seq(items) | Value::Set(items) => items.is_empty(),
                Value::Map(entries) => entries.is_empty(),
                Value::Ref(inner) => inner.is_none(),
                Value::Opaque => false,
            },
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value as $wide)
                }
            }
        )+
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64, isize);
impl_from_number!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_number!(Float as f64: f32, f64);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Ref(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(value: Box<T>) -> Self {
        Value::reference(*value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(value: HashMap<K, V, S>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<T: Into<Value>, S> From<HashSet<T, S>> for Value {
    fn from(value: HashSet<T, S>) -> Self {
        Value::Set(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(value: BTreeSet<T>) -> Self {
        Value::Set(value.into_iter().map(Into::into).collect())
    }
}
