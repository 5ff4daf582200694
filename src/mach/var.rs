use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// Names are single upper case letters. Every name holds zero
/// until assigned. Zero is never stored.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> i32 {
        self.vars.get(var_name).copied().unwrap_or(0)
    }

    pub fn store(&mut self, var_name: &str, value: i32) {
        if value == 0 {
            self.vars.remove(var_name);
            return;
        }
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        };
    }

    /// Assigned variables ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        let mut v: Vec<(&str, i32)> = self.vars.iter().map(|(k, v)| (&**k, *v)).collect();
        v.sort_unstable();
        v.into_iter()
    }
}
