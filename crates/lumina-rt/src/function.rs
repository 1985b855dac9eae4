//! A user-defined function: a name and the statement body run on call.

use lumina_ast::Statement;

#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub body: Vec<Statement>,
}
