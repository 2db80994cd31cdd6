use crate::error::{CalculatorError, Result};

/// A simple calculator with basic arithmetic operations and a one-slot
/// result register.
///
/// The arithmetic methods are pure functions of their arguments; they never
/// read or write the register. Only [`set_result`](Calculator::set_result),
/// [`get_result`](Calculator::get_result) and [`clear`](Calculator::clear)
/// touch the stored value, so callers decide when a computed value becomes
/// the stored result.
///
/// # Examples
///
/// ```
/// use bdd_calculator::Calculator;
///
/// let mut calc = Calculator::new();
/// let sum = calc.add(50.0, 70.0);
/// calc.set_result(sum);
/// assert_eq!(calc.get_result(), 120.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    /// Create a calculator with the register initialized to 0.
    pub fn new() -> Self {
        Self { result: 0.0 }
    }

    /// Add two numbers and return the sum.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtract `b` from `a` and return the difference.
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiply two numbers and return the product.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divide `a` by `b` and return the quotient.
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b` equals 0. The
    /// check is exact equality, not epsilon-based; `-0.0` also trips it.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Raise `base` to the power of `exponent`.
    ///
    /// Uses [`f64::powf`], so edge cases follow IEEE-754 semantics:
    /// `0.0.powf(-1.0)` is infinity and a negative base with a fractional
    /// exponent is NaN. No special-casing is performed.
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    /// Overwrite the stored result.
    pub fn set_result(&mut self, value: f64) {
        self.result = value;
    }

    /// Return the stored result.
    pub fn get_result(&self) -> f64 {
        self.result
    }

    /// Reset the stored result to 0.
    pub fn clear(&mut self) {
        self.result = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let calc = Calculator::new();
        assert_eq!(calc.add(50.0, 70.0), 120.0);
        assert_eq!(calc.add(-2.5, 2.5), 0.0);
    }

    #[test]
    fn test_subtract() {
        let calc = Calculator::new();
        assert_eq!(calc.subtract(100.0, 35.0), 65.0);
        assert_eq!(calc.subtract(1.0, 2.5), -1.5);
    }

    #[test]
    fn test_multiply() {
        let calc = Calculator::new();
        assert_eq!(calc.multiply(8.0, 7.0), 56.0);
        assert_eq!(calc.multiply(-4.0, 0.5), -2.0);
    }

    #[test]
    fn test_divide() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(100.0, 5.0).unwrap(), 20.0);
        assert_eq!(calc.divide(1.0, -4.0).unwrap(), -0.25);
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::new();
        let err = calc.divide(10.0, 0.0).unwrap_err();
        assert!(matches!(err, CalculatorError::DivisionByZero));
        assert_eq!(err.to_string(), "Cannot divide by zero");

        // Negative zero compares equal to zero and must trip the same guard
        assert!(calc.divide(1.0, -0.0).is_err());
    }

    #[test]
    fn test_power() {
        let calc = Calculator::new();
        assert_eq!(calc.power(2.0, 8.0), 256.0);
        assert_eq!(calc.power(5.0, 0.0), 1.0);
        assert_eq!(calc.power(2.0, -2.0), 0.25);
        assert_eq!(calc.power(9.0, 0.5), 3.0);
    }

    #[test]
    fn test_power_ieee_edge_cases() {
        let calc = Calculator::new();
        assert_eq!(calc.power(0.0, -1.0), f64::INFINITY);
        assert!(calc.power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn test_register_starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.get_result(), 0.0);

        let calc = Calculator::default();
        assert_eq!(calc.get_result(), 0.0);
    }

    #[test]
    fn test_set_and_get_result() {
        let mut calc = Calculator::new();
        calc.set_result(100.0);
        assert_eq!(calc.get_result(), 100.0);
        calc.set_result(-3.25);
        assert_eq!(calc.get_result(), -3.25);
    }

    #[test]
    fn test_clear_resets_register() {
        let mut calc = Calculator::new();
        calc.set_result(42.0);
        calc.clear();
        assert_eq!(calc.get_result(), 0.0);
    }

    #[test]
    fn test_operations_do_not_touch_register() {
        let mut calc = Calculator::new();
        calc.set_result(7.0);
        calc.add(1.0, 2.0);
        calc.subtract(1.0, 2.0);
        calc.multiply(1.0, 2.0);
        calc.divide(1.0, 2.0).unwrap();
        calc.power(1.0, 2.0);
        assert_eq!(calc.get_result(), 7.0);
    }
}
