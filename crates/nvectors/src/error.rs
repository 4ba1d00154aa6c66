use std::error::Error;
use std::fmt;

/// Failure conditions raised by validation and by every vector operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// The element type is not a recognized numeric kind (bool and char are excluded).
    NotNumericType,
    /// Two operands that must share a dimension (or a count) do not.
    DimensionMismatch { expected: usize, requested: usize },
    /// An index fell outside `[lower, upper]`, both ends inclusive.
    IndexOutOfRange {
        lower: usize,
        upper: usize,
        requested: usize,
    },
    /// A divisor, or a norm used as a divisor, has a non-finite reciprocal.
    DivisionByZero,
    /// A size that must be strictly greater than `bound` was not.
    NotGreaterThan { bound: usize, value: usize },
    /// An integer quotient does not fit in the element type (`MIN / -1`).
    ArithmeticOverflow,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::NotNumericType => {
                write!(f, "The requested variable is not of numerical type")
            }
            VectorError::DimensionMismatch {
                expected,
                requested,
            } => write!(
                f,
                "Requested number of dimensions doesn't match the expected number (expected: {}, requested: {})",
                expected, requested
            ),
            VectorError::IndexOutOfRange {
                lower,
                upper,
                requested,
            } => write!(
                f,
                "Index {} is out of range [{}, {}] (both ends inclusive)",
                requested, lower, upper
            ),
            VectorError::DivisionByZero => write!(f, "Attempted a division by zero"),
            VectorError::NotGreaterThan { bound, value } => write!(
                f,
                "Value {} is not greater than the required lower bound {}",
                value, bound
            ),
            VectorError::ArithmeticOverflow => {
                write!(f, "Arithmetic overflow: the result does not fit in the element type")
            }
        }
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
