//! Arithmetic tools. Pure functions, no I/O.

use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter};

pub const ADD_NUMBERS: &str = "add_numbers";
pub const SUBTRACT_NUMBERS: &str = "subtract_numbers";
pub const MULTIPLY_NUMBERS: &str = "multiply_numbers";
pub const DIVIDE_NUMBERS: &str = "divide_numbers";

pub fn definitions() -> Vec<ToolDefinition> {
    [
        (ADD_NUMBERS, "Add two numbers together"),
        (SUBTRACT_NUMBERS, "Subtract second number from first number"),
        (MULTIPLY_NUMBERS, "Multiply two numbers"),
        (DIVIDE_NUMBERS, "Divide first number by second number"),
    ]
    .into_iter()
    .map(|(name, description)| {
        ToolDefinition::new(name, description)
            .with_parameter(ToolParameter::new("a", "First operand", true).with_type("number"))
            .with_parameter(ToolParameter::new("b", "Second operand", true).with_type("number"))
    })
    .collect()
}

pub fn execute(invocation: &ToolInvocation) -> String {
    let a = match invocation.require_f64("a") {
        Ok(a) => a,
        Err(e) => return format!("Error: {e}"),
    };
    let b = match invocation.require_f64("b") {
        Ok(b) => b,
        Err(e) => return format!("Error: {e}"),
    };

    match invocation.name.as_str() {
        ADD_NUMBERS => format!("The sum of {a} and {b} is {}", a + b),
        SUBTRACT_NUMBERS => format!("{a} minus {b} equals {}", a - b),
        MULTIPLY_NUMBERS => format!("{a} times {b} equals {}", a * b),
        DIVIDE_NUMBERS => {
            if b == 0.0 {
                "Error: cannot divide by zero".to_string()
            } else {
                format!("{a} divided by {b} equals {}", a / b)
            }
        }
        other => format!("Error: unknown tool '{other}'."),
    }
}
