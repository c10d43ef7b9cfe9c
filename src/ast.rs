use std::rc::Rc;

use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GetData, GroupingData, LogicalData,
    SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::literal::Literal;
use crate::stmt::{
    BlockData, BreakData, ClassData, ExpressionData, FunctionData, IfData, PrintData, ReturnData,
    Stmt, StmtVisitor, VarData, WhileData,
};

/// Returns a string representation of the expression in parenthesized form.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$x.accept($self);
            )*
            string += ")";

            string
        }
    };
}

/// An S-expression rendering of the AST, useful for debugging and as a
/// golden-file format for round-trip tests (§6, §8 of the design).
pub struct Printer;

impl Printer {
    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }
}

impl ExprVisitor<String> for Printer {
    fn visit_literal_expr(&mut self, literal: &Literal) -> String {
        match literal {
            Literal::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> String {
        parenthesize!(self, &data.operator.lexeme, &data.left, &data.right)
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> String {
        parenthesize!(self, &data.operator.lexeme, &data.expr)
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> String {
        parenthesize!(self, &data.operator.lexeme, &data.left, &data.right)
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> String {
        parenthesize!(self, "grouping", &data.expr)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> String {
        data.name.lexeme.clone()
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> String {
        parenthesize!(self, &format!("assign {}", data.name.lexeme), &data.value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> String {
        let mut string = String::new();
        string += "(call ";
        string += &data.callee.accept(self);
        for arg in &data.arguments {
            string += " ";
            string += &arg.accept(self);
        }
        string += ")";
        string
    }

    fn visit_get_expr(&mut self, data: &GetData) -> String {
        parenthesize!(self, &format!("get {}", data.name.lexeme), &data.object)
    }

    fn visit_set_expr(&mut self, data: &SetData) -> String {
        let mut string = format!("(set {} ", data.name.lexeme);
        string += &data.object.accept(self);
        string += " ";
        string += &data.value.accept(self);
        string += ")";
        string
    }

    fn visit_this_expr(&mut self, _data: &ThisData) -> String {
        "this".to_string()
    }

    fn visit_super_expr(&mut self, data: &SuperData) -> String {
        format!("(super {})", data.method.lexeme)
    }
}

impl StmtVisitor<String> for Printer {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> String {
        parenthesize!(self, "expr", &data.expr)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> String {
        parenthesize!(self, "print", &data.expr)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> String {
        match &data.initializer {
            Some(initializer) => parenthesize!(self, &format!("var {}", data.name.lexeme), initializer),
            None => format!("(var {})", data.name.lexeme),
        }
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> String {
        let mut string = String::from("{");
        for stmt in &data.statements {
            string += " ";
            string += &stmt.accept(self);
        }
        string += " }";
        string
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> String {
        let mut string = String::new();
        string += "(if ";
        string += &data.condition.accept(self);
        string += " ";
        string += &data.then_branch.accept(self);
        if let Some(else_branch) = &data.else_branch {
            string += " else ";
            string += &else_branch.accept(self);
        }
        string += ")";
        string
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> String {
        parenthesize!(self, "while", &data.condition, &data.body)
    }

    fn visit_function_stmt(&mut self, data: &Rc<FunctionData>) -> String {
        self.format_function(data)
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> String {
        match &data.value {
            Some(value) => parenthesize!(self, "return", value),
            None => "(return)".to_string(),
        }
    }

    fn visit_break_stmt(&mut self, _data: &BreakData) -> String {
        "(break)".to_string()
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> String {
        let mut string = format!("(class {}", data.name.lexeme);
        if let Some(superclass) = &data.superclass {
            string += " < ";
            string += &superclass.accept(self);
        }
        for method in &data.methods {
            string += " ";
            string += &self.format_function(method);
        }
        string += ")";
        string
    }
}

impl Printer {
    fn format_function(&mut self, data: &FunctionData) -> String {
        let mut string = format!("(func {}(", data.name.lexeme);
        string += &data.params.iter().map(|p| p.lexeme.clone()).collect::<Vec<_>>().join(" ");
        string += ") ";
        string += &data.body.iter().map(|s| s.accept(self)).collect::<Vec<_>>().join(" ");
        string += ")";
        string
    }
}
