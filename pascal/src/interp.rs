// (C) 2020 Srimanta Barua <srimanta.barua1@gmail.com>

use fnv::FnvHashMap;

use crate::lexer::Lexer;
use crate::parser::{Ast, Op, Parser};
use crate::{Error, Result};

/// Tree-walking interpreter. A single global scope maps variable names to
/// their values.
pub struct Interpreter {
    globals: FnvHashMap<String, i64>,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            globals: FnvHashMap::default(),
        }
    }

    pub fn globals(&self) -> &FnvHashMap<String, i64> {
        &self.globals
    }

    pub fn run(&mut self, node: &Ast) -> Result<()> {
        self.visit(node).map(|_| ())
    }

    fn visit(&mut self, node: &Ast) -> Result<i64> {
        match node {
            Ast::Num(n) => Ok(*n),
            Ast::BinOp(left, op, right) => {
                let left = self.visit(left)?;
                let right = self.visit(right)?;
                match op {
                    Op::Add => Ok(left + right),
                    Op::Sub => Ok(left - right),
                    Op::Mul => Ok(left * right),
                    Op::Div => {
                        if right == 0 {
                            Err(Error::DivisionByZero)
                        } else {
                            Ok(left / right)
                        }
                    }
                }
            }
            Ast::UnaryOp(op, expr) => {
                let value = self.visit(expr)?;
                match op {
                    Op::Sub => Ok(-value),
                    _ => Ok(value),
                }
            }
            Ast::Compound(children) => {
                for child in children {
                    self.visit(child)?;
                }
                Ok(0)
            }
            Ast::Assign(name, expr) => {
                let value = self.visit(expr)?;
                self.globals.insert(name.clone(), value);
                Ok(value)
            }
            Ast::Var(name) => self
                .globals
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownVariable(name.clone())),
            Ast::NoOp => Ok(0),
        }
    }
}

/// Parse and run a program, returning the final global scope
pub fn interpret(source: &str) -> Result<FnvHashMap<String, i64>> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let tree = parser.parse()?;
    let mut interp = Interpreter::new();
    interp.run(&tree)?;
    Ok(interp.globals)
}
