//! Arithmetic operation family
//!
//! Parameters: `num1`, `num2` (default `0`) and `operacion`
//! (default `suma`, one of `suma|resta|multiplicacion|division`).

use std::fmt;

use super::OperationError;
use crate::cgi::{format_number, parse_number, ParsedParameters};
use crate::response::ScriptOutput;

const DEFAULT_OPERATION: &str = "suma";

/// Supported arithmetic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Suma,
    Resta,
    Multiplicacion,
    Division,
    /// Anything else, kept verbatim for echoing
    Unsupported(String),
}

impl Operation {
    /// Exact, case-sensitive match against the supported names
    pub fn parse(name: &str) -> Self {
        match name {
            "suma" => Self::Suma,
            "resta" => Self::Resta,
            "multiplicacion" => Self::Multiplicacion,
            "division" => Self::Division,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Suma => "suma",
            Self::Resta => "resta",
            Self::Multiplicacion => "multiplicacion",
            Self::Division => "division",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A calculator operand
///
/// A defaulted operand is the integer `0` and renders without a decimal
/// part; a parsed operand is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Default,
    Parsed(f64),
}

impl Operand {
    pub fn value(self) -> f64 {
        match self {
            Self::Default => 0.0,
            Self::Parsed(v) => v,
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("0"),
            Self::Parsed(v) => f.write_str(&format_number(*v)),
        }
    }
}

/// Operands and operation for one calculator invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorRequest {
    pub num1: Operand,
    pub num2: Operand,
    pub operation: Operation,
}

impl CalculatorRequest {
    /// Build a request from decoded parameters
    ///
    /// Absent operands default to `0`; a present operand that does not
    /// parse as a number is an [`OperationError::InvalidInput`].
    pub fn from_params(params: &ParsedParameters) -> Result<Self, OperationError> {
        Ok(Self {
            num1: operand(params, "num1")?,
            num2: operand(params, "num2")?,
            operation: Operation::parse(params.get_or("operacion", DEFAULT_OPERATION)),
        })
    }

    /// Integer arithmetic applies only when both operands were defaulted
    pub const fn is_integral(&self) -> bool {
        self.num1.is_default() && self.num2.is_default()
    }
}

fn operand(params: &ParsedParameters, name: &str) -> Result<Operand, OperationError> {
    if !params.contains(name) {
        return Ok(Operand::Default);
    }
    parse_number(params.get_or(name, "")).map(Operand::Parsed)
}

/// Compute the result of a calculator request
pub fn calculate(request: &CalculatorRequest) -> Result<f64, OperationError> {
    let (num1, num2) = (request.num1.value(), request.num2.value());
    match &request.operation {
        Operation::Suma => Ok(num1 + num2),
        Operation::Resta => Ok(num1 - num2),
        Operation::Multiplicacion => Ok(num1 * num2),
        Operation::Division if num2 == 0.0 => Err(OperationError::DivisionByZero),
        Operation::Division => Ok(num1 / num2),
        Operation::Unsupported(name) => Err(OperationError::UnsupportedOperation(name.clone())),
    }
}

/// Render a successful result for the result line
pub fn render_result(request: &CalculatorRequest, value: f64) -> String {
    if request.is_integral() {
        format!("{value:.0}")
    } else {
        format_number(value)
    }
}

/// Run the calculator against a combined query string
pub fn run(query: &str, echo_inputs: bool) -> ScriptOutput {
    let params = ParsedParameters::parse(query);
    let mut output = ScriptOutput::new();

    let text = match CalculatorRequest::from_params(&params) {
        Ok(request) => {
            if echo_inputs {
                output.push_debug(format!("Num1: {}", request.num1));
                output.push_debug(format!("Num2: {}", request.num2));
                output.push_debug(format!("Operacion: {}", request.operation));
            }
            match calculate(&request) {
                Ok(value) => render_result(&request, value),
                Err(e) => e.to_string(),
            }
        }
        Err(e) => e.to_string(),
    };
    output.push(format!("Resultado: {text}"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(num1: f64, num2: f64, op: &str) -> CalculatorRequest {
        CalculatorRequest {
            num1: Operand::Parsed(num1),
            num2: Operand::Parsed(num2),
            operation: Operation::parse(op),
        }
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(calculate(&request(10.0, 5.0, "suma")), Ok(15.0));
        assert_eq!(calculate(&request(10.0, 5.0, "resta")), Ok(5.0));
        assert_eq!(calculate(&request(10.0, 5.0, "multiplicacion")), Ok(50.0));
        assert_eq!(calculate(&request(10.0, 4.0, "division")), Ok(2.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            calculate(&request(10.0, 0.0, "division")),
            Err(OperationError::DivisionByZero)
        );
        assert_eq!(
            calculate(&request(0.0, -0.0, "division")),
            Err(OperationError::DivisionByZero)
        );
    }

    #[test]
    fn test_unsupported_operation() {
        for op in ["potencia", "Suma", "SUMA", "", "suma "] {
            assert_eq!(
                calculate(&request(1.0, 0.0, op)),
                Err(OperationError::UnsupportedOperation(op.to_string())),
                "operation {op:?} should be unsupported"
            );
        }
    }

    #[test]
    fn test_defaults() {
        let params = ParsedParameters::parse("");
        let req = CalculatorRequest::from_params(&params).unwrap();
        assert_eq!(req.num1, Operand::Default);
        assert_eq!(req.num2, Operand::Default);
        assert_eq!(req.operation, Operation::Suma);
        assert!(req.is_integral());

        let params = ParsedParameters::parse("num2=7");
        let req = CalculatorRequest::from_params(&params).unwrap();
        assert_eq!(calculate(&req), Ok(7.0));
    }

    #[test]
    fn test_run_all_defaults_is_integer() {
        let output = run("", true);
        assert_eq!(
            output.lines(),
            ["Num1: 0", "Num2: 0", "Operacion: suma", "Resultado: 0"]
        );

        for op in ["resta", "multiplicacion"] {
            let output = run(&format!("operacion={op}"), false);
            assert_eq!(output.lines(), ["Resultado: 0"]);
        }

        let output = run("operacion=division", false);
        assert_eq!(output.lines(), ["Resultado: Error: División por cero"]);
    }

    #[test]
    fn test_run_one_default_operand_is_float() {
        let output = run("num2=7", true);
        assert_eq!(
            output.lines(),
            ["Num1: 0", "Num2: 7.0", "Operacion: suma", "Resultado: 7.0"]
        );

        let output = run("num2=4&operacion=division", false);
        assert_eq!(output.lines(), ["Resultado: 0.0"]);
    }

    #[test]
    fn test_grouped_operand() {
        let output = run("num1=1_000", false);
        assert_eq!(output.lines(), ["Resultado: 1000.0"]);
    }

    #[test]
    fn test_invalid_operand() {
        let params = ParsedParameters::parse("num1=diez&num2=5");
        assert_eq!(
            CalculatorRequest::from_params(&params),
            Err(OperationError::InvalidInput)
        );
    }

    #[test]
    fn test_run_output_lines() {
        let output = run("num1=10&num2=5&operacion=multiplicacion", true);
        assert_eq!(
            output.lines(),
            [
                "Num1: 10.0",
                "Num2: 5.0",
                "Operacion: multiplicacion",
                "Resultado: 50.0",
            ]
        );
    }

    #[test]
    fn test_run_without_echo() {
        let output = run("num1=1&num2=0&operacion=division", false);
        assert_eq!(output.lines(), ["Resultado: Error: División por cero"]);
    }

    #[test]
    fn test_run_unsupported() {
        let output = run("num1=3&num2=4&operacion=modulo", true);
        assert_eq!(output.result_line(), Some("Resultado: Operación no soportada"));
        assert!(output.lines().contains(&"Operacion: modulo".to_string()));
    }

    #[test]
    fn test_run_invalid_operand() {
        let output = run("num1=abc", true);
        assert_eq!(output.lines(), ["Resultado: Error: Entrada no valida"]);
    }
}
