//! Nested containers (arrays and matrices)
//!
//! A container holds an ordered list of items. Items are either all
//! leaves or all sub-containers of the same size, so the whole tree has a
//! single rectangular `size` such as `[2, 3]`.

use serde::{Deserialize, Serialize};
use crate::{MathError, Value};

/// Whether a container came in as a plain array or a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Array,
    Matrix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    items: Vec<Value>,
    size: Vec<usize>,
    kind: ContainerKind,
}

impl Container {
    /// Build a container, checking that every item shares one nesting shape
    pub fn new(items: Vec<Value>, kind: ContainerKind) -> Result<Self, MathError> {
        let size = Self::infer_size(&items)?;
        Ok(Self { items, size, kind })
    }

    pub fn array(items: Vec<Value>) -> Result<Self, MathError> {
        Self::new(items, ContainerKind::Array)
    }

    pub fn matrix(items: Vec<Value>) -> Result<Self, MathError> {
        Self::new(items, ContainerKind::Matrix)
    }

    /// Build a two-level container from rows of reals
    pub fn from_rows(rows: Vec<Vec<f64>>, kind: ContainerKind) -> Result<Self, MathError> {
        let items = rows.into_iter()
            .map(|row| {
                let leaves = row.into_iter().map(Value::Real).collect();
                Container::new(leaves, kind).map(Value::Container)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items, kind)
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Size along each nesting level
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first leaves
    pub fn leaves(&self) -> Vec<&Value> {
        let mut out = Vec::new();
        for item in &self.items {
            match item {
                Value::Container(inner) => out.extend(inner.leaves()),
                leaf => out.push(leaf),
            }
        }
        out
    }

    fn infer_size(items: &[Value]) -> Result<Vec<usize>, MathError> {
        let mut inner: Option<&[usize]> = None;
        let mut leaves = 0usize;

        for (i, item) in items.iter().enumerate() {
            match item {
                Value::Container(c) => match inner {
                    None => inner = Some(c.size()),
                    Some(expected) if expected != c.size() => {
                        return Err(MathError::ragged(format!(
                            "item {} has size {:?}, expected {:?}", i, c.size(), expected
                        )));
                    }
                    Some(_) => {}
                },
                _ => leaves += 1,
            }
        }

        if leaves > 0 && inner.is_some() {
            return Err(MathError::ragged("containers and scalars mixed at one level"));
        }

        let mut size = vec![items.len()];
        if let Some(inner) = inner {
            size.extend_from_slice(inner);
        }
        Ok(size)
    }
}

/// Deserialization re-validates the shape.
impl<'de> Deserialize<'de> for Container {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            items: Vec<Value>,
            kind: ContainerKind,
        }
        let raw = Raw::deserialize(deserializer)?;
        Container::new(raw.items, raw.kind).map_err(serde::de::Error::custom)
    }
}
