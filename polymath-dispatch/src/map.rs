//! Elementwise mapping over nested containers

use polymath_core::{Container, MathError, Value};

/// Apply `f` to every leaf of `container`, rebuilding a new container of the
/// same nesting shape and kind. The source is never modified.
///
/// The first failing leaf aborts the whole map; no partial result escapes.
pub fn deep_map<F>(container: &Container, f: &F) -> Result<Container, MathError>
where
    F: Fn(&Value) -> Result<Value, MathError>,
{
    let items = container.items().iter()
        .map(|item| match item {
            Value::Container(inner) => deep_map(inner, f).map(Value::Container),
            leaf => f(leaf),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Container::new(items, container.kind())
}

/// Map the leaves of `value` if it is a container, otherwise apply `f` directly
pub fn map_value<F>(value: &Value, f: &F) -> Result<Value, MathError>
where
    F: Fn(&Value) -> Result<Value, MathError>,
{
    match value {
        Value::Container(c) => deep_map(c, f).map(Value::Container),
        other => f(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use polymath_core::{ContainerKind, MathError};

    fn double(v: &Value) -> Result<Value, MathError> {
        match v {
            Value::Real(x) => Ok(Value::Real(x * 2.0)),
            other => Err(MathError::type_error("Real", other.type_name())),
        }
    }

    #[test]
    fn test_nested_shape_preserved() {
        let c = Container::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], ContainerKind::Matrix).unwrap();
        let mapped = deep_map(&c, &double).unwrap();

        assert_eq!(mapped.size(), &[2, 2]);
        assert_eq!(mapped.kind(), ContainerKind::Matrix);
        let expected = Container::from_rows(vec![vec![2.0, 4.0], vec![6.0, 8.0]], ContainerKind::Matrix).unwrap();
        assert_eq!(mapped, expected);
    }

    #[test]
    fn test_source_untouched() {
        let c = Container::from_rows(vec![vec![1.0], vec![2.0]], ContainerKind::Array).unwrap();
        let before = c.clone();
        let _ = deep_map(&c, &double).unwrap();
        assert_eq!(c, before);
    }

    #[test]
    fn test_empty_containers() {
        let empty = Container::array(vec![]).unwrap();
        let mapped = deep_map(&empty, &double).unwrap();
        assert!(mapped.is_empty());
        assert_eq!(mapped.size(), &[0]);

        let nested = Container::array(vec![Value::Container(empty)]).unwrap();
        let mapped = deep_map(&nested, &double).unwrap();
        assert_eq!(mapped.size(), &[1, 0]);
    }

    #[test]
    fn test_failure_stops_mapping() {
        let calls = Cell::new(0);
        let c = Container::array(vec![Value::Real(1.0), Value::Real(2.0), Value::Real(3.0)]).unwrap();
        let result = deep_map(&c, &|v: &Value| {
            calls.set(calls.get() + 1);
            match v {
                Value::Real(x) if *x == 2.0 => Err(MathError::domain_error("two")),
                other => Ok(other.clone()),
            }
        });
        assert_eq!(result.unwrap_err().message, "Domain error: two");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_map_value_scalar() {
        assert_eq!(map_value(&Value::Real(1.5), &double).unwrap(), Value::Real(3.0));
    }
}
