// src/value/arithmetic.rs
//
// Operator overloads building graph nodes. `+`, `-` and `*` cannot fail (the
// operand count is fixed by the operator), `/` returns a `Result` because of
// the zero-divisor check. A raw `f32` operand is wrapped in a fresh leaf.

use crate::error::ScalarustError;
use crate::ops::activation::tanh;
use crate::ops::arithmetic::{add, div, mul, sub};
use crate::ops::math_elem::exp;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Sub};

impl<'a, 'b> Add<&'b Value> for &'a Value {
    type Output = Value;

    fn add(self, rhs: &'b Value) -> Value {
        add::forward(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Value> for &'a Value {
    type Output = Value;

    fn sub(self, rhs: &'b Value) -> Value {
        sub::forward(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Value> for &'a Value {
    type Output = Value;

    fn mul(self, rhs: &'b Value) -> Value {
        mul::forward(self, rhs)
    }
}

impl<'a, 'b> Div<&'b Value> for &'a Value {
    type Output = Result<Value, ScalarustError>;

    /// # Errors
    /// `DivisionByZero` if `rhs` holds exactly zero.
    fn div(self, rhs: &'b Value) -> Self::Output {
        div::forward(self, rhs)
    }
}

/// Derives the owned and scalar-mixed forms of an operator from its
/// `&Value op &Value` implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $output:ty) => {
        impl $imp<Value> for Value {
            type Output = $output;

            fn $method(self, rhs: Value) -> $output {
                <&Value as $imp<&Value>>::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a Value> for Value {
            type Output = $output;

            fn $method(self, rhs: &'a Value) -> $output {
                <&Value as $imp<&Value>>::$method(&self, rhs)
            }
        }

        impl<'a> $imp<Value> for &'a Value {
            type Output = $output;

            fn $method(self, rhs: Value) -> $output {
                <&Value as $imp<&Value>>::$method(self, &rhs)
            }
        }

        impl<'a> $imp<f32> for &'a Value {
            type Output = $output;

            fn $method(self, rhs: f32) -> $output {
                <&Value as $imp<&Value>>::$method(self, &Value::new(rhs))
            }
        }

        impl $imp<f32> for Value {
            type Output = $output;

            fn $method(self, rhs: f32) -> $output {
                <&Value as $imp<&Value>>::$method(&self, &Value::new(rhs))
            }
        }

        impl<'a> $imp<&'a Value> for f32 {
            type Output = $output;

            fn $method(self, rhs: &'a Value) -> $output {
                <&Value as $imp<&Value>>::$method(&Value::new(self), rhs)
            }
        }

        impl $imp<Value> for f32 {
            type Output = $output;

            fn $method(self, rhs: Value) -> $output {
                <&Value as $imp<&Value>>::$method(&Value::new(self), &rhs)
            }
        }
    };
}

forward_binop!(Add, add, Value);
forward_binop!(Sub, sub, Value);
forward_binop!(Mul, mul, Value);
forward_binop!(Div, div, Result<Value, ScalarustError>);

impl Value {
    /// `e^self` as a new graph node.
    pub fn exp(&self) -> Value {
        exp::forward(self)
    }

    /// `tanh(self)` as a new graph node.
    pub fn tanh(&self) -> Value {
        tanh::forward(self)
    }
}
