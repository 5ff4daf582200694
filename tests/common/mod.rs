#![allow(dead_code)]
use cradle::lang::Error;
use cradle::mach;

/// Output of a successful run, or the error text after any output.
pub fn exec(source: &str) -> String {
    let mut out = Vec::new();
    let result = mach::interpret(source.chars(), &mut out);
    let mut s = String::from_utf8(out).unwrap();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}

pub fn exec_err(source: &str) -> Error {
    let mut out = Vec::new();
    match mach::interpret(source.chars(), &mut out) {
        Ok(_) => panic!("{:?} ran without error", source),
        Err(error) => error,
    }
}

/// Value left in `name` after running `source`.
pub fn eval(name: &str, source: &str) -> i32 {
    let mut out = Vec::new();
    match mach::interpret(source.chars(), &mut out) {
        Ok(var) => var.fetch(name),
        Err(error) => panic!("{:?}: {}", source, error),
    }
}

/// Assembly listing with the leading tabs removed.
pub fn asm(source: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Err(error) = mach::compile(source.chars(), &mut out) {
        panic!("{:?}: {}", source, error);
    }
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| {
            assert!(l.starts_with('\t'), "{:?}", l);
            l[1..].to_string()
        })
        .collect()
}
