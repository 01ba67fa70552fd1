use super::{Operation, Val};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    /// Last write wins; the previous value and its type are discarded.
    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }

    /// Apply `op` to the stored value in place. On any error the
    /// stored value is left untouched.
    pub fn update(
        &mut self,
        var_name: &str,
        rhs: Val,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<&Val> {
        let var = match self.vars.get_mut(var_name) {
            Some(var) => var,
            None => return Err(error!(UndefinedVariable; var_name)),
        };
        *var = op(var.clone(), rhs)?;
        Ok(&*var)
    }

    pub fn add(&mut self, var_name: &str, rhs: Val) -> Result<&Val> {
        self.update(var_name, rhs, Operation::sum)
    }

    pub fn sub(&mut self, var_name: &str, rhs: Val) -> Result<&Val> {
        self.update(var_name, rhs, Operation::subtract)
    }

    pub fn mul(&mut self, var_name: &str, rhs: Val) -> Result<&Val> {
        self.update(var_name, rhs, Operation::multiply)
    }

    pub fn div(&mut self, var_name: &str, rhs: Val) -> Result<&Val> {
        self.update(var_name, rhs, Operation::divide)
    }
}
