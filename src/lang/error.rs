use super::Column;

pub struct Error {
    code: ErrorCode,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Expected,
    EndOfInput,
    DivisionByZero,
    Overflow,
    InternalError,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::new(ErrorCode::InternalError).message(&error.to_string())
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error {{ {} ({}..{}) }}",
            self.to_string(),
            self.column.start,
            self.column.end
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self.code {
            Expected => write!(f, "{} Expected", self.message),
            EndOfInput => write!(f, "{} Expected at end of input", self.message),
            DivisionByZero => write!(f, "Division by zero"),
            Overflow => write!(f, "Overflow"),
            InternalError => {
                if self.message.is_empty() {
                    write!(f, "Internal error")
                } else {
                    write!(f, "Internal error; {}", self.message)
                }
            }
        }
    }
}

impl std::error::Error for Error {}
