mod common;
use common::*;
use cradle::lang::{ErrorCode, Parser};
use cradle::mach::{self, Compiler};

#[test]
fn test_literal_assignment() {
    assert_eq!(asm("a=12;"), ["MOVE #12,D0", "LEA A(PC),A0", "MOVE D0,(A0)"]);
}

#[test]
fn test_add_sub() {
    assert_eq!(
        asm("x=a+b-c;"),
        [
            "MOVE A(PC),D0",
            "MOVE D0,-(SP)",
            "MOVE B(PC),D0",
            "ADD (SP)+,D0",
            "MOVE D0,-(SP)",
            "MOVE C(PC),D0",
            "SUB (SP)+,D0",
            "NEG D0",
            "LEA X(PC),A0",
            "MOVE D0,(A0)",
        ]
    );
}

#[test]
fn test_mul_div_precedence() {
    assert_eq!(
        asm("x=1+2*3/4;"),
        [
            "MOVE #1,D0",
            "MOVE D0,-(SP)",
            "MOVE #2,D0",
            "MOVE D0,-(SP)",
            "MOVE #3,D0",
            "MULS (SP)+,D0",
            "MOVE D0,-(SP)",
            "MOVE #4,D0",
            "MOVE (SP)+,D1",
            "DIVS D1,D0",
            "ADD (SP)+,D0",
            "LEA X(PC),A0",
            "MOVE D0,(A0)",
        ]
    );
}

#[test]
fn test_leading_minus() {
    assert_eq!(
        asm("y=-(x);"),
        [
            "CLR D0",
            "MOVE D0,-(SP)",
            "MOVE X(PC),D0",
            "SUB (SP)+,D0",
            "NEG D0",
            "LEA Y(PC),A0",
            "MOVE D0,(A0)",
        ]
    );
}

#[test]
fn test_call() {
    assert_eq!(
        asm("t=s()*2;"),
        [
            "BSR S",
            "MOVE D0,-(SP)",
            "MOVE #2,D0",
            "MULS (SP)+,D0",
            "LEA T(PC),A0",
            "MOVE D0,(A0)",
        ]
    );
}

#[test]
fn test_input_output() {
    assert_eq!(
        asm("?n 7\r\n!n;"),
        [
            "MOVE #7,D0",
            "LEA N(PC),A0",
            "MOVE D0,(A0)",
            "MOVE N(PC),D0",
            "BSR WRITE",
        ]
    );
}

#[test]
fn test_no_arithmetic_checks() {
    assert_eq!(asm("a=1/0;").len(), 7);
    assert_eq!(asm("a=99999999999;")[0], "MOVE #99999999999,D0");
}

#[test]
fn test_partial_listing_on_error() {
    let mut out = Vec::new();
    let e = mach::compile("a=b+\r\n;".chars(), &mut out).unwrap_err();
    assert_eq!(e.code(), ErrorCode::Expected);
    assert_eq!(e.to_string(), "Integer Expected");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\tMOVE B(PC),D0\n\tMOVE D0,-(SP)\n"
    );
}

#[test]
fn test_instruction_count() {
    let mut out = Vec::new();
    assert_eq!(mach::compile("a=1\r\nb=a;".chars(), &mut out).unwrap(), 6);
}

#[test]
fn test_single_assignment_line() {
    let mut compiler = Compiler::new(Vec::new());
    assert!(compiler.is_empty());
    Parser::new("a = b()\r\n".chars(), &mut compiler)
        .assignment_line()
        .unwrap();
    assert_eq!(compiler.len(), 3);
    assert_eq!(
        String::from_utf8(compiler.into_inner()).unwrap(),
        "\tBSR B\n\tLEA A(PC),A0\n\tMOVE D0,(A0)\n"
    );
    let mut compiler = Compiler::new(Vec::new());
    let e = Parser::new("a = b".chars(), &mut compiler)
        .assignment_line()
        .unwrap_err();
    assert_eq!(e.code(), ErrorCode::EndOfInput);
    assert_eq!(e.to_string(), "NewLine Expected at end of input");
}
