//! A four-function calculator state machine.
//!
//! Standalone collaborator like [`validate`](crate::validate)—the engine never
//! depends on it. The state is the display string plus a pending operand and
//! operator; there is no expression tree and no precedence: operators apply
//! strictly left to right, and pressing an operator while a result is pending
//! evaluates first (`2 + 3 × 4` shows `20`).
//!
//! Values travel as display strings so digit entry can append characters
//! directly. Division by zero puts `"Error"` on the display; any further
//! arithmetic over a non-numeric display leaves it unchanged until cleared or
//! overwritten.

/// The four keypad operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Display shown when dividing by zero.
pub const ERROR_DISPLAY: &str = "Error";

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: String,
    previous: Option<String>,
    operator: Option<Op>,
    overwrite: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            overwrite: true,
        }
    }

    /// What the display currently shows.
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Press a digit key. Non-digit characters are ignored.
    pub fn digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            return;
        }
        if self.overwrite {
            self.current = d.to_string();
            self.overwrite = false;
        } else if self.current == "0" {
            self.current = d.to_string();
        } else {
            self.current.push(d);
        }
    }

    /// Press the decimal point. At most one per entry.
    pub fn decimal(&mut self) {
        if self.overwrite {
            self.current = "0.".to_string();
            self.overwrite = false;
            return;
        }
        if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    /// Press C: back to the initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Press ±. Zero stays zero.
    pub fn toggle_sign(&mut self) {
        if let Some(stripped) = self.current.strip_prefix('-') {
            self.current = stripped.to_string();
        } else if self.current != "0" {
            self.current = format!("-{}", self.current);
        }
    }

    /// Press %: divide the displayed value by 100.
    pub fn percent(&mut self) {
        let Ok(value) = self.current.parse::<f64>() else {
            return;
        };
        self.current = format_value(value / 100.0);
    }

    /// Press an operator key. A pending operation evaluates first, so chains
    /// run left to right.
    pub fn operator(&mut self, op: Op) {
        if self.operator.is_some() && !self.overwrite && self.previous.is_some() {
            let result = self.evaluate();
            self.previous = if result == ERROR_DISPLAY {
                None
            } else {
                Some(result.clone())
            };
            self.current = result;
        } else {
            self.previous = Some(self.current.clone());
        }
        self.operator = Some(op);
        self.overwrite = true;
    }

    /// Press =. A no-op unless an operator and operand are pending.
    pub fn equals(&mut self) {
        if self.operator.is_none() || self.previous.is_none() {
            return;
        }
        self.current = self.evaluate();
        self.previous = None;
        self.operator = None;
        self.overwrite = true;
    }

    fn evaluate(&self) -> String {
        let (Some(prev), Some(op)) = (self.previous.as_deref(), self.operator) else {
            return self.current.clone();
        };
        let (Ok(a), Ok(b)) = (prev.parse::<f64>(), self.current.parse::<f64>()) else {
            return self.current.clone();
        };
        match op {
            Op::Add => format_value(a + b),
            Op::Subtract => format_value(a - b),
            Op::Multiply => format_value(a * b),
            Op::Divide => {
                if b == 0.0 {
                    ERROR_DISPLAY.to_string()
                } else {
                    format_value(a / b)
                }
            }
        }
    }
}

// f64's Display already prints whole values without a trailing ".0"
fn format_value(value: f64) -> String {
    format!("{}", value)
}
