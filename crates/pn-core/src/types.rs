//! Type tags for settings options.
//!
//! An option's type is either declared up front or inferred from the first
//! value written to it. `Any` marks a type that is not established yet; it
//! is narrowed by the first non-null value (for sequences, by the first
//! element).

use core::fmt;

use crate::error::{ValueError, ValueResult};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Any,
    Bool,
    Int,
    Float,
    Str,
    /// Homogeneous sequence with the given element type.
    List(Box<ValueType>),
}

impl ValueType {
    pub fn list_of(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    /// Element type of a sequence type.
    pub fn element(&self) -> Option<&ValueType> {
        match self {
            ValueType::List(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ValueType::List(_))
    }

    /// True if the type still has an `Any` hole somewhere.
    pub fn is_open(&self) -> bool {
        match self {
            ValueType::Any => true,
            ValueType::List(elem) => elem.is_open(),
            _ => false,
        }
    }

    /// Infer the type of a fresh value.
    ///
    /// `Null` infers to `Any`. Sequence element types come from the first
    /// non-null element; every later element must conform to it.
    pub fn infer(value: &Value) -> ValueResult<ValueType> {
        ValueType::Any.unify(value)
    }

    /// Check `value` against this type and return the (possibly narrowed)
    /// type the option has after accepting it.
    pub fn unify(&self, value: &Value) -> ValueResult<ValueType> {
        match (self, value) {
            (ValueType::Any, Value::Null) => Ok(ValueType::Any),
            (ValueType::Any, Value::Bool(_)) => Ok(ValueType::Bool),
            (ValueType::Any, Value::Int(_)) => Ok(ValueType::Int),
            (ValueType::Any, Value::Float(_)) => Ok(ValueType::Float),
            (ValueType::Any, Value::Str(_)) => Ok(ValueType::Str),
            (ValueType::Any, Value::List(items)) => unify_items(ValueType::Any, items),
            (ValueType::Bool, Value::Bool(_))
            | (ValueType::Int, Value::Int(_))
            | (ValueType::Float, Value::Float(_))
            | (ValueType::Str, Value::Str(_)) => Ok(self.clone()),
            (ValueType::List(elem), Value::List(items)) => unify_items((**elem).clone(), items)
                .map_err(|_| mismatch(self, value)),
            _ => Err(mismatch(self, value)),
        }
    }

    /// Check a single element appended to a sequence of this type.
    pub fn unify_element(&self, item: &Value) -> ValueResult<ValueType> {
        match self {
            ValueType::List(elem) => elem.unify(item).map(ValueType::list_of),
            other => Err(ValueError::Mismatch {
                expected: other.to_string(),
                found: format!("append of {}", item.describe()),
            }),
        }
    }

    /// True if `value` would be accepted without error.
    pub fn accepts(&self, value: &Value) -> bool {
        self.unify(value).is_ok()
    }
}

fn unify_items(mut elem: ValueType, items: &[Value]) -> ValueResult<ValueType> {
    for item in items {
        elem = elem.unify(item)?;
    }
    Ok(ValueType::list_of(elem))
}

fn mismatch(expected: &ValueType, found: &Value) -> ValueError {
    ValueError::Mismatch {
        expected: expected.to_string(),
        found: found.describe(),
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => write!(f, "any"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Int => write!(f, "int"),
            ValueType::Float => write!(f, "float"),
            ValueType::Str => write!(f, "str"),
            ValueType::List(elem) => write!(f, "list[{}]", elem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_scalars() {
        assert_eq!(ValueType::infer(&Value::from(5)).unwrap(), ValueType::Int);
        assert_eq!(ValueType::infer(&Value::from(5.5)).unwrap(), ValueType::Float);
        assert_eq!(ValueType::infer(&Value::from("x")).unwrap(), ValueType::Str);
        assert_eq!(ValueType::infer(&Value::Null).unwrap(), ValueType::Any);
    }

    #[test]
    fn infer_lists() {
        let empty = Value::List(vec![]);
        assert_eq!(
            ValueType::infer(&empty).unwrap(),
            ValueType::list_of(ValueType::Any)
        );

        let strs = Value::from(vec!["a", "b"]);
        assert_eq!(
            ValueType::infer(&strs).unwrap(),
            ValueType::list_of(ValueType::Str)
        );

        let nested = Value::from(vec![vec![1_i64], vec![]]);
        assert_eq!(
            ValueType::infer(&nested).unwrap(),
            ValueType::list_of(ValueType::list_of(ValueType::Int))
        );
    }

    #[test]
    fn heterogeneous_list_is_rejected() {
        let mixed = Value::List(vec![Value::from("a"), Value::from(1)]);
        let err = ValueType::infer(&mixed).unwrap_err();
        assert_eq!(
            err,
            ValueError::Mismatch {
                expected: "str".into(),
                found: "int `1`".into()
            }
        );
    }

    #[test]
    fn int_and_float_are_distinct() {
        assert!(!ValueType::Int.accepts(&Value::from(5.5)));
        assert!(!ValueType::Float.accepts(&Value::from(2)));
    }

    #[test]
    fn scalar_is_not_wrapped_into_list() {
        let ty = ValueType::list_of(ValueType::Str);
        assert!(!ty.accepts(&Value::from("item")));
        let err = ty.unify(&Value::from("item")).unwrap_err();
        assert!(err.to_string().contains("list[str]"));
    }

    #[test]
    fn open_list_narrows_on_first_element() {
        let ty = ValueType::list_of(ValueType::Any);
        assert!(ty.is_open());
        let narrowed = ty.unify_element(&Value::from("item")).unwrap();
        assert_eq!(narrowed, ValueType::list_of(ValueType::Str));
        assert!(!narrowed.is_open());
        assert!(narrowed.unify_element(&Value::from(100)).is_err());
    }

    #[test]
    fn append_to_scalar_type_fails() {
        let err = ValueType::Str.unify_element(&Value::from("x")).unwrap_err();
        assert!(err.to_string().contains("append"));
    }

    #[test]
    fn display_nested() {
        let ty = ValueType::list_of(ValueType::list_of(ValueType::Float));
        assert_eq!(ty.to_string(), "list[list[float]]");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            (-1e9_f64..1e9_f64).prop_map(Value::Float),
            "[a-z.]{0,12}".prop_map(Value::Str),
        ]
    }

    proptest! {
        #[test]
        fn inferred_type_accepts_its_value(v in scalar()) {
            let ty = ValueType::infer(&v).unwrap();
            prop_assert!(ty.accepts(&v));
            prop_assert_eq!(ty.unify(&v).unwrap(), ty);
        }

        #[test]
        fn homogeneous_int_lists_infer_list_of_int(items in prop::collection::vec(any::<i64>(), 1..8)) {
            let v = Value::from(items);
            prop_assert_eq!(ValueType::infer(&v).unwrap(), ValueType::list_of(ValueType::Int));
        }
    }
}
