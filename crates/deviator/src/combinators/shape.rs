//! SHAPE combinator - per-key traversal of an object
//!
//! A [`Shape`] is an ordered schema mapping property names to deviations.
//! [`ShapeDeviation`] applies it to a JSON object:
//!
//! - every key of the schema runs, in declaration order, with no early exit
//! - a missing property is handed to its deviation as `None`
//! - successes (`Continue` or `Done`) land in the output object
//! - failures land in a field error map holding only the failing keys
//!
//! Input properties that are not part of the schema are dropped.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_deviator::prelude::*;
//!
//! let user = deviate::<Value>().as_object().shape(
//!     Shape::new()
//!         .field("name", deviate::<Option<Value>>().defined().as_string().trim().not_empty())
//!         .field("age", deviate::<Option<Value>>().optional().as_number().min(0.0)),
//! );
//!
//! let outcome = user.deviate(json!({"name": "  "}));
//! assert_eq!(serde_json::to_value(outcome.error().unwrap()).unwrap(), json!({"name": "empty"}));
//! ```

use crate::foundation::{BoxDeviation, Deviation, Fault, Outcome};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// A type-erased property deviation.
pub type FieldDeviation = BoxDeviation<'static, Option<Value>, Value, Value, Fault>;

// ============================================================================
// SHAPE SCHEMA
// ============================================================================

/// Ordered schema of property deviations.
#[derive(Default)]
pub struct Shape {
    fields: IndexMap<String, FieldDeviation>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the deviation for `name`.
    ///
    /// The deviation receives `Some(value)` for a present property and
    /// `None` for a missing one. Its success payloads must convert into
    /// [`Value`] and its failure payload into [`Fault`].
    #[must_use = "builder methods must be chained or built"]
    pub fn field<D>(mut self, name: impl Into<String>, deviation: D) -> Self
    where
        D: Deviation<Input = Option<Value>> + Send + Sync + 'static,
        D::Next: Into<Value>,
        D::Done: Into<Value>,
        D::Error: Into<Fault>,
    {
        self.fields
            .insert(name.into(), Box::new(IntoValue { inner: deviation }));
        self
    }

    /// Returns the property names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Runs every property deviation against `input`.
    ///
    /// Returns the assembled object, or the failing keys with their errors.
    pub fn apply(
        &self,
        mut input: Map<String, Value>,
    ) -> Result<Map<String, Value>, IndexMap<String, Fault>> {
        let mut output = Map::new();
        let mut errors = IndexMap::new();

        for (key, deviation) in &self.fields {
            match deviation.deviate(input.remove(key)) {
                Outcome::Continue(value) | Outcome::Done(value) => {
                    output.insert(key.clone(), value);
                }
                Outcome::Failed(error) => {
                    errors.insert(key.clone(), error);
                }
            }
        }

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("keys", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Lifts a property deviation's payloads into the dynamic domain.
struct IntoValue<D> {
    inner: D,
}

impl<D> Deviation for IntoValue<D>
where
    D: Deviation<Input = Option<Value>>,
    D::Next: Into<Value>,
    D::Done: Into<Value>,
    D::Error: Into<Fault>,
{
    type Input = Option<Value>;
    type Next = Value;
    type Done = Value;
    type Error = Fault;

    fn deviate(&self, input: Option<Value>) -> Outcome<Value, Value, Fault> {
        match self.inner.deviate(input) {
            Outcome::Continue(value) => Outcome::Continue(value.into()),
            Outcome::Done(value) => Outcome::Done(value.into()),
            Outcome::Failed(error) => Outcome::Failed(error.into()),
        }
    }
}

// ============================================================================
// SHAPE DEVIATION
// ============================================================================

/// Applies a [`Shape`] to a JSON object.
///
/// Succeeds with `Continue(object)` when every key passed, otherwise fails
/// with [`Fault::Fields`] listing only the failing keys.
pub struct ShapeDeviation<O, E> {
    shape: Shape,
    _marker: PhantomData<fn() -> (O, E)>,
}

impl<O, E> ShapeDeviation<O, E> {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            _marker: PhantomData,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl<O, E> fmt::Debug for ShapeDeviation<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeDeviation").field(&self.shape).finish()
    }
}

impl<O, E> Deviation for ShapeDeviation<O, E>
where
    E: From<Fault>,
{
    type Input = Map<String, Value>;
    type Next = Map<String, Value>;
    type Done = O;
    type Error = E;

    fn deviate(&self, input: Map<String, Value>) -> Outcome<Map<String, Value>, O, E> {
        match self.shape.apply(input) {
            Ok(output) => Outcome::Continue(output),
            Err(errors) => Outcome::Failed(E::from(Fault::Fields(errors))),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
