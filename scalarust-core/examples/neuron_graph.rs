//! Builds the small graphs used throughout the docs, runs backward on each and
//! prints the gradients. The neuron graphs are written as DOT files and, with
//! Graphviz installed, rendered to PNG.
//!
//! Run with `RUST_LOG=debug cargo run --example neuron_graph` to see the engine logs.

use log::warn;
use scalarust_core::viz::{to_dot, write_dot_file, write_png};
use scalarust_core::{make_value, ScalarustError, Value};

fn print_grads(title: &str, values: &[&Value]) {
    println!("--- {} ---", title);
    for v in values {
        println!("{}", v);
    }
}

fn main() -> Result<(), ScalarustError> {
    env_logger::init();

    // Reusing an operand: b = a + a, so db/da = 2.
    let a = make_value(3.0, Some("a"));
    let b = &a + &a;
    b.set_label("b");
    b.backward()?;
    print_grads("a + a", &[&a, &b]);

    // f = (a * b) * (a + b)
    let a = make_value(-2.0, Some("a"));
    let b = make_value(3.0, Some("b"));
    let d = &a * &b;
    d.set_label("d");
    let e = &a + &b;
    e.set_label("e");
    let f = &d * &e;
    f.set_label("f");
    f.backward()?;
    print_grads("(a * b) * (a + b)", &[&a, &b, &d, &e, &f]);

    // A single neuron, first without and then with its activation.
    let x1 = make_value(2.0, Some("x1"));
    let x2 = make_value(0.0, Some("x2"));
    let w1 = make_value(-3.0, Some("w1"));
    let w2 = make_value(1.0, Some("w2"));
    let bias = make_value(6.881_373_6, Some("b"));
    let x1w1 = &x1 * &w1;
    x1w1.set_label("x1*w1");
    let x2w2 = &x2 * &w2;
    x2w2.set_label("x2*w2");
    let sum = &x1w1 + &x2w2;
    sum.set_label("x1*w1 + x2*w2");
    let n = &sum + &bias;
    n.set_label("n");

    n.backward()?;
    print_grads("neuron without tanh", &[&x1, &x2, &w1, &w2, &bias, &n]);

    for v in [&x1, &x2, &w1, &w2, &bias] {
        v.zero_grad();
    }
    let out = n.tanh();
    out.set_label("out");
    out.backward()?;
    print_grads("neuron with tanh", &[&x1, &x2, &w1, &w2, &bias, &n, &out]);

    // Same neuron with tanh spelled out as (e^{2n} - 1) / (e^{2n} + 1).
    for v in [&x1, &x2, &w1, &w2, &bias] {
        v.zero_grad();
    }
    let e2n = (2.0 * &n).exp();
    e2n.set_label("e^2n");
    let composed = ((&e2n - 1.0) / (&e2n + 1.0))?;
    composed.set_label("out");
    composed.backward()?;
    print_grads("neuron with composed tanh", &[&x1, &x2, &w1, &w2, &bias, &n, &composed]);

    println!("{}", to_dot(&out));
    write_dot_file(&composed, "neuron_composed.dot")?;
    for (root, name) in [(&out, "neuron"), (&composed, "neuron_composed")] {
        let png = format!("{}.png", name);
        match write_png(root, &png, format!("{}.dot", name)) {
            Ok(()) => println!("wrote {}", png),
            Err(e) => warn!("skipping {}: {}", png, e),
        }
    }
    Ok(())
}
