//! Functions: a named function, a function bound to a variable of function
//! type, and an anonymous closure.

/// Signature shared by functions that combine two integers.
pub type BinaryOp = fn(i64, i64) -> i64;

/// Build a greeting for `name`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn calculate_sum(a: i64, b: i64) -> i64 {
    a + b
}

/// The closure shown in the "Closures" section.
pub fn square() -> impl Fn(i64) -> i64 {
    |number| number * number
}

/// Body of the "Functions" section.
pub fn function_lines() -> Vec<String> {
    let greeting = greet("Talal");

    let sum_function: BinaryOp = calculate_sum;
    let result = sum_function(5, 10);

    vec![greeting, format!("Sum: {result}")]
}

/// Body of the "Closures" section.
pub fn closure_lines() -> Vec<String> {
    let square = square();
    let squared_value = square(4);
    vec![format!("Squared Value: {squared_value}")]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
