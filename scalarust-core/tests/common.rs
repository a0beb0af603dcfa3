use scalarust_core::Value;

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one unlabeled leaf per entry.
#[allow(dead_code)]
pub(crate) fn leaves(data: &[f32]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

/// Builds `d = a * b`, `e = a + b`, `f = d * e` and returns `[a, b, d, e, f]`.
#[allow(dead_code)]
pub(crate) fn product_sum_graph(a: f32, b: f32) -> [Value; 5] {
    let a = Value::with_label(a, "a");
    let b = Value::with_label(b, "b");
    let d = &a * &b;
    let e = &a + &b;
    let f = &d * &e;
    [a, b, d, e, f]
}
