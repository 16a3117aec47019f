use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    /// An arc reference pointing outside the topology's arc arena
    InvalidArcRef { raw: i32, arcs: usize },
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl Error {
    pub fn invalid_arc_ref(raw: i32, arcs: usize) -> Self {
        Self(ErrorType::InvalidArcRef { raw, arcs }, vec![])
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let err = Error::invalid_arc_ref(-7, 12)
        .with_trace_step("inner")
        .with_trace_step("outer");
    let formatted = format!("{:?}", err);
    let inner = formatted.find("in inner").unwrap();
    let outer = formatted.find("in outer").unwrap();
    assert!(outer < inner, "outer step should print first:\n{}", formatted);
}
