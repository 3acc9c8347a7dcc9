pub type Identifier = String;

/// Root of the tree: top-level declarations in source order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FunctionDef {
    pub return_type: Identifier,
    pub name: Identifier,
    pub body: Block,
}

/// `None` entries stand for statements the parser skipped.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Block {
    pub statements: Vec<Option<Statement>>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    FunctionDef(FunctionDef),
    Block(Block),
    Return(Expression),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    /// Verbatim digits, no range check.
    NumberLiteral(String),
}

impl Statement {
    pub fn function(return_type: impl Into<Identifier>, name: impl Into<Identifier>, body: Block) -> Self {
        Self::FunctionDef(FunctionDef {
            return_type: return_type.into(),
            name: name.into(),
            body,
        })
    }

    pub fn ret(expression: Expression) -> Self {
        Self::Return(expression)
    }
}

impl Expression {
    pub fn number(text: impl Into<String>) -> Self {
        Self::NumberLiteral(text.into())
    }
}

impl Block {
    pub fn new(statements: Vec<Option<Statement>>) -> Self {
        Self { statements }
    }

    /// Present statements in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().flatten()
    }

    /// Whether a `return` is reachable without entering a nested function.
    pub fn has_return(&self) -> bool {
        self.iter().any(|statement| match statement {
            Statement::Return(_) => true,
            Statement::Block(block) => block.has_return(),
            Statement::FunctionDef(_) => false,
        })
    }
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}
