mod common;
use common::*;
use proptest::prelude::*;

const OPS: [char; 4] = ['+', '-', '*', '/'];

fn close_term(sum_text: &mut Option<String>, sum: &mut i64, op: char, t: &str, v: i64) {
    match sum_text.take() {
        None => {
            *sum_text = Some(t.to_string());
            *sum = v;
        }
        Some(s) => {
            *sum_text = Some(format!("({}{}{})", s, op, t));
            *sum = if op == '+' { *sum + v } else { *sum - v };
        }
    }
}

/// Renders `first (op n)*` flat and fully parenthesized, and folds it
/// with multiply before add and left to right within a level.
fn render(first: i64, rest: &[(usize, i64)]) -> (String, String, i64) {
    let mut flat = first.to_string();
    let mut sum_text: Option<String> = None;
    let mut sum = 0i64;
    let mut pending_op = '+';
    let mut term_text = first.to_string();
    let mut term = first;
    for &(op, n) in rest {
        let op = OPS[op];
        flat.push(op);
        flat.push_str(&n.to_string());
        if op == '*' || op == '/' {
            term_text = format!("({}{}{})", term_text, op, n);
            term = if op == '*' { term * n } else { term / n };
        } else {
            close_term(&mut sum_text, &mut sum, pending_op, &term_text, term);
            pending_op = op;
            term_text = n.to_string();
            term = n;
        }
    }
    close_term(&mut sum_text, &mut sum, pending_op, &term_text, term);
    (flat, sum_text.unwrap_or_default(), sum)
}

proptest! {
    #[test]
    fn flat_and_parenthesized_agree(
        first in 0i64..40,
        rest in proptest::collection::vec((0usize..4, 1i64..40), 0..5),
    ) {
        let (flat, full, expected) = render(first, &rest);
        let a = eval("A", &format!("a={};", flat));
        let b = eval("A", &format!("a={};", full));
        prop_assert_eq!(a, b, "{} vs {}", flat, full);
        prop_assert_eq!(i64::from(a), expected, "{}", flat);
    }

    #[test]
    fn leading_minus_negates(n in 0i32..100_000, m in 0i32..100_000) {
        prop_assert_eq!(eval("A", &format!("a=-{}+{};", n, m)), m - n);
        prop_assert_eq!(eval("A", &format!("a=-{}/7;", n)), -(n / 7));
    }

    #[test]
    fn assignment_round_trips(n in 0i32..=i32::max_value(), name in "[a-z]") {
        let source = format!("{} = {}\r\n!{};", name, n, name.to_uppercase());
        prop_assert_eq!(exec(&source), format!("{}\n", n));
    }
}
