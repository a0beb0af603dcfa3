// src/value/traits.rs

use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle points at the same node.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl Debug for Value {
    /// Shows the node's own fields and the operation, without recursing into
    /// the dependencies (graphs with heavy reuse would print exponentially).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vd = self.read_data();
        f.debug_struct("Value")
            .field("data", &vd.data)
            .field("grad", &vd.grad)
            .field("label", &vd.label)
            .field("operation", &vd.operation)
            .field("dependencies", &vd.dependencies.len())
            .finish()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vd = self.read_data();
        write!(f, "Value(data={}, grad={}", vd.data, vd.grad)?;
        if let Some(label) = &vd.label {
            write!(f, ", label={}", label)?;
        }
        if let Some(op) = vd.operation {
            write!(f, ", op={}", op)?;
        }
        write!(f, ")")
    }
}

impl PartialEq for Value {
    /// Two handles are equal iff they refer to the same node.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Value {}

impl Hash for Value {
    /// Hashes the Value based on the pointer address of its node.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(data)
    }
}
