//! Cucumber harness binding the Gherkin features under `features/` to the
//! calculator. The world holds the per-scenario context: entered numbers,
//! a captured error slot, and an explicitly stored result.

use bdd_calculator::Calculator;
use cucumber::{given, then, when, World};

#[derive(Debug, Default, World)]
pub struct CalculatorWorld {
    calculator: Calculator,
    numbers: Vec<f64>,
    error: Option<String>,
    stored_result: Option<f64>,
}

/// The first two entered numbers, if both are present
fn operands(world: &CalculatorWorld) -> Option<(f64, f64)> {
    match world.numbers.as_slice() {
        [a, b, ..] => Some((*a, *b)),
        _ => None,
    }
}

#[given("I have a calculator")]
fn have_a_calculator(world: &mut CalculatorWorld) {
    world.calculator = Calculator::new();
    world.numbers.clear();
    world.error = None;
    world.stored_result = None;
}

#[given(expr = "I have entered {int} into the calculator")]
fn enter_number(world: &mut CalculatorWorld, number: i64) {
    world.numbers.push(number as f64);
}

#[given(expr = "the calculator result is set to {int}")]
fn set_result(world: &mut CalculatorWorld, value: i64) {
    world.calculator.set_result(value as f64);
}

#[when("I press add")]
fn press_add(world: &mut CalculatorWorld) {
    if let Some((a, b)) = operands(world) {
        let result = world.calculator.add(a, b);
        world.calculator.set_result(result);
    }
}

#[when("I press subtract")]
fn press_subtract(world: &mut CalculatorWorld) {
    if let Some((a, b)) = operands(world) {
        let result = world.calculator.subtract(a, b);
        world.calculator.set_result(result);
    }
}

#[when("I press multiply")]
fn press_multiply(world: &mut CalculatorWorld) {
    if let Some((a, b)) = operands(world) {
        let result = world.calculator.multiply(a, b);
        world.calculator.set_result(result);
    }
}

#[when("I press divide")]
fn press_divide(world: &mut CalculatorWorld) {
    if let Some((a, b)) = operands(world) {
        match world.calculator.divide(a, b) {
            Ok(result) => world.calculator.set_result(result),
            Err(err) => world.error = Some(err.to_string()),
        }
    }
}

#[when("I press power")]
fn press_power(world: &mut CalculatorWorld) {
    if let Some((a, b)) = operands(world) {
        let result = world.calculator.power(a, b);
        world.calculator.set_result(result);
    }
}

#[when("I press clear")]
fn press_clear(world: &mut CalculatorWorld) {
    world.calculator.clear();
}

#[when("I store the result")]
fn store_result(world: &mut CalculatorWorld) {
    world.stored_result = Some(world.calculator.get_result());
}

#[then(expr = "the result should be {int} on the screen")]
fn result_on_screen(world: &mut CalculatorWorld, expected: i64) {
    let actual = world.calculator.get_result();
    assert_eq!(actual, expected as f64, "expected {expected}, got {actual}");
}

#[then(expr = "I should see an error message {string}")]
fn see_error_message(world: &mut CalculatorWorld, message: String) {
    match &world.error {
        Some(actual) => assert_eq!(
            actual, &message,
            "expected error '{message}', got '{actual}'"
        ),
        None => panic!("expected an error but none was raised"),
    }
}

#[then("no error should be raised")]
fn no_error_raised(world: &mut CalculatorWorld) {
    assert!(
        world.error.is_none(),
        "unexpected error occurred: {:?}",
        world.error
    );
}

#[then(expr = "the stored result should be {int}")]
fn stored_result_is(world: &mut CalculatorWorld, expected: i64) {
    match world.stored_result {
        Some(actual) => assert_eq!(
            actual, expected as f64,
            "expected stored result {expected}, got {actual}"
        ),
        None => panic!("no result was stored"),
    }
}

#[tokio::main]
async fn main() {
    CalculatorWorld::run("features").await;
}
