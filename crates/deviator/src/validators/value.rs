//! Type guards and narrowing for dynamic JSON values
//!
//! Guards (`is_*`) check the kind of a [`Value`] and keep it unchanged.
//! Narrowing operations (`as_*`) check the kind and continue with the
//! unwrapped payload, which unlocks the matching capability family:
//!
//! ```rust,ignore
//! deviate::<Value>().as_string().trim()   // String methods
//! deviate::<Value>().as_number().min(0.0) // f64 methods
//! deviate::<Value>().as_array().each(..)  // Vec methods
//! ```

use crate::foundation::{Deviation, Deviator, Fault, Outcome, Stage, codes, guard};
use crate::validators::reject;
use serde_json::{Map, Value};

// ============================================================================
// GUARDS
// ============================================================================

impl<D> Deviator<D>
where
    D: Deviation<Next = Value>,
    D::Error: From<Fault>,
{
    /// Requires a JSON string.
    pub fn is_string(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>> {
        guard(self, codes::NOT_STRING, Value::is_string)
    }

    /// Requires a JSON number.
    pub fn is_number(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>> {
        guard(self, codes::NOT_NUMBER, Value::is_number)
    }

    /// Requires a JSON boolean.
    pub fn is_boolean(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>> {
        guard(self, codes::NOT_BOOLEAN, Value::is_boolean)
    }

    /// Requires JSON `null`.
    pub fn is_null(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>> {
        guard(self, codes::NOT_NULL, Value::is_null)
    }

    /// Requires a JSON object.
    pub fn is_object(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>> {
        guard(self, codes::NOT_OBJECT, Value::is_object)
    }

    /// Requires a JSON array.
    pub fn is_array(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>> {
        guard(self, codes::NOT_ARRAY, Value::is_array)
    }

    /// Stops the pipeline with `Done(null)` when the value is `null`.
    pub fn nullable(self) -> Deviator<impl Stage<D::Input, Value, D::Done, D::Error>>
    where
        D::Done: From<Value>,
    {
        self.append(|value| match value {
            Value::Null => Outcome::Done(Value::Null.into()),
            value => Outcome::Continue(value),
        })
    }
}

// ============================================================================
// NARROWING
// ============================================================================

impl<D> Deviator<D>
where
    D: Deviation<Next = Value>,
    D::Error: From<Fault>,
{
    /// Narrows to the string payload.
    pub fn as_string(self) -> Deviator<impl Stage<D::Input, String, D::Done, D::Error>> {
        self.append(|value| match value {
            Value::String(text) => Outcome::Continue(text),
            _ => reject(codes::NOT_STRING),
        })
    }

    /// Narrows to the numeric payload as `f64`.
    pub fn as_number(self) -> Deviator<impl Stage<D::Input, f64, D::Done, D::Error>> {
        self.append(|value| match value.as_f64() {
            Some(number) => Outcome::Continue(number),
            None => reject(codes::NOT_NUMBER),
        })
    }

    /// Narrows to the boolean payload.
    pub fn as_bool(self) -> Deviator<impl Stage<D::Input, bool, D::Done, D::Error>> {
        self.append(|value| match value {
            Value::Bool(flag) => Outcome::Continue(flag),
            _ => reject(codes::NOT_BOOLEAN),
        })
    }

    /// Narrows to the object payload.
    pub fn as_object(
        self,
    ) -> Deviator<impl Stage<D::Input, Map<String, Value>, D::Done, D::Error>> {
        self.append(|value| match value {
            Value::Object(object) => Outcome::Continue(object),
            _ => reject(codes::NOT_OBJECT),
        })
    }

    /// Narrows to the array payload.
    pub fn as_array(self) -> Deviator<impl Stage<D::Input, Vec<Value>, D::Done, D::Error>> {
        self.append(|value| match value {
            Value::Array(items) => Outcome::Continue(items),
            _ => reject(codes::NOT_ARRAY),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
