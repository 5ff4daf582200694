//! # Cradle
//!
//! A one-pass arithmetic language with one character of lookahead.
//!
//! A program is a sequence of statements, one per line, ended by `;`.
//! ```text
//! A = 3 + 4 * 2
//! ?B 10
//! C = -(A - B) / 2
//! !C
//! ;
//! ```
//! `A = expression` assigns, `?A number` reads a value and
//! `!A` prints one. Names are a single letter and are not case
//! sensitive. Values are 32 bit integers and
//! every variable starts at zero.
//!
//! The same grammar either runs directly or compiles to 68000
//! assembly:
//! ```
//! let mut out = Vec::new();
//! cradle::mach::interpret("A=3+4*2\r\n!A;".chars(), &mut out).unwrap();
//! assert_eq!(out, b"11\n");
//!
//! let mut asm = Vec::new();
//! cradle::mach::compile("A=-B;".chars(), &mut asm).unwrap();
//! assert_eq!(
//!     String::from_utf8(asm).unwrap(),
//!     "\tCLR D0\n\tMOVE D0,-(SP)\n\tMOVE B(PC),D0\n\tSUB (SP)+,D0\n\tNEG D0\n\tLEA A(PC),A0\n\tMOVE D0,(A0)\n"
//! );
//! ```

pub mod lang;
pub mod mach;
