use std::collections::HashMap;
use std::mem;
use std::rc::Rc;

use crate::error::{Diagnostics, Error, ResolveError};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GetData, GroupingData, LogicalData,
    SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::interpreter::Interpreter;
use crate::literal::Literal;
use crate::stmt::{
    BlockData, BreakData, ClassData, ExpressionData, FunctionData, IfData, PrintData, ReturnData,
    Stmt, StmtVisitor, VarData, WhileData,
};
use crate::token::Token;

#[derive(Clone, Copy, PartialEq)]
enum FunctionType {
    None,
    Function,
    Initializer,
    Method,
}

#[derive(Clone, Copy, PartialEq)]
enum ClassType {
    None,
    Class,
    Subclass,
}

/// A static pass between parsing and evaluation that computes, for every
/// `Variable`/`Assign`/`This`/`Super` node, how many environment hops
/// separate its use from the scope that declares it. The result is
/// recorded in the interpreter's side-table, keyed by the node's id rather
/// than by name, so that two uses of the same name in different places
/// never collide. It also rejects a handful of statically-detectable
/// misuses (`this`/`super`/`return` outside their proper context, a
/// variable read from its own initializer, a class inheriting from
/// itself).
pub struct Resolver<'a, 'b> {
    interpreter: &'a mut Interpreter,
    diagnostics: &'b mut Diagnostics,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionType,
    current_class: ClassType,
}

impl<'a, 'b> Resolver<'a, 'b> {
    pub fn new(interpreter: &'a mut Interpreter, diagnostics: &'b mut Diagnostics) -> Self {
        Resolver {
            interpreter,
            diagnostics,
            scopes: vec![],
            current_function: FunctionType::None,
            current_class: ClassType::None,
        }
    }

    pub fn resolve(&mut self, statements: &[Stmt]) {
        for statement in statements {
            statement.accept(self);
        }
    }

    fn resolve_function(&mut self, function: &FunctionData, r#type: FunctionType) {
        let enclosing_function = mem::replace(&mut self.current_function, r#type);

        self.begin_scope();
        for param in &function.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve(&function.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else { return };

        if scope.contains_key(&name.lexeme) {
            ResolveError {
                token: name.clone(),
                message: format!("A variable is already defined with name '{}' in this scope", name.lexeme),
            }
            .report(self.diagnostics);
        }
        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    fn resolve_local(&mut self, id: crate::expr::NodeId, name: &Token) {
        for (distance, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.interpreter.resolve(id, distance);
                return;
            }
        }
        // Not found in any scope: treated as a global, resolved by name at
        // runtime through `Environment::get`/`assign`.
    }
}

impl ExprVisitor<()> for Resolver<'_, '_> {
    fn visit_binary_expr(&mut self, data: &BinaryData) {
        data.left.accept(self);
        data.right.accept(self);
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) {
        data.left.accept(self);
        data.right.accept(self);
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) {
        data.expr.accept(self);
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) {
        data.expr.accept(self);
    }

    fn visit_literal_expr(&mut self, _literal: &Literal) {}

    fn visit_variable_expr(&mut self, data: &VariableData) {
        if let Some(scope) = self.scopes.last() {
            if scope.get(&data.name.lexeme) == Some(&false) {
                ResolveError {
                    token: data.name.clone(),
                    message: "Cannot read local variable in its own initializer".to_string(),
                }
                .report(self.diagnostics);
            }
        }

        self.resolve_local(data.id, &data.name);
    }

    fn visit_assign_expr(&mut self, data: &AssignData) {
        data.value.accept(self);
        self.resolve_local(data.id, &data.name);
    }

    fn visit_call_expr(&mut self, data: &CallData) {
        data.callee.accept(self);
        for argument in &data.arguments {
            argument.accept(self);
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) {
        data.object.accept(self);
    }

    fn visit_set_expr(&mut self, data: &SetData) {
        data.value.accept(self);
        data.object.accept(self);
    }

    fn visit_this_expr(&mut self, data: &ThisData) {
        if self.current_class == ClassType::None {
            ResolveError {
                token: data.keyword.clone(),
                message: "Cannot use 'this' outside of a class".to_string(),
            }
            .report(self.diagnostics);
            return;
        }

        self.resolve_local(data.id, &data.keyword);
    }

    fn visit_super_expr(&mut self, data: &SuperData) {
        match self.current_class {
            ClassType::Subclass => {}
            ClassType::None => ResolveError {
                token: data.keyword.clone(),
                message: "Cannot use 'super' outside of a class".to_string(),
            }
            .report(self.diagnostics),
            ClassType::Class => ResolveError {
                token: data.keyword.clone(),
                message: "Cannot use 'super' in a class with no superclass".to_string(),
            }
            .report(self.diagnostics),
        }

        self.resolve_local(data.id, &data.keyword);
    }
}

impl StmtVisitor<()> for Resolver<'_, '_> {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) {
        data.expr.accept(self);
    }

    fn visit_print_stmt(&mut self, data: &PrintData) {
        data.expr.accept(self);
    }

    fn visit_var_stmt(&mut self, data: &VarData) {
        self.declare(&data.name);
        if let Some(initializer) = &data.initializer {
            initializer.accept(self);
        }
        self.define(&data.name);
    }

    fn visit_block_stmt(&mut self, data: &BlockData) {
        self.begin_scope();
        self.resolve(&data.statements);
        self.end_scope();
    }

    fn visit_if_stmt(&mut self, data: &IfData) {
        data.condition.accept(self);
        data.then_branch.accept(self);
        if let Some(else_branch) = &data.else_branch {
            else_branch.accept(self);
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) {
        data.condition.accept(self);
        data.body.accept(self);
    }

    fn visit_function_stmt(&mut self, data: &Rc<FunctionData>) {
        self.declare(&data.name);
        self.define(&data.name);
        self.resolve_function(data, FunctionType::Function);
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) {
        if self.current_function == FunctionType::None {
            ResolveError {
                token: data.keyword.clone(),
                message: "Cannot return from top-level code".to_string(),
            }
            .report(self.diagnostics);
        }

        if let Some(value) = &data.value {
            if self.current_function == FunctionType::Initializer {
                ResolveError {
                    token: data.keyword.clone(),
                    message: "Cannot return a value from an initializer".to_string(),
                }
                .report(self.diagnostics);
                return;
            }
            value.accept(self);
        }
    }

    fn visit_break_stmt(&mut self, data: &BreakData) {
        if data.loop_depth == 0 {
            ResolveError {
                token: data.keyword.clone(),
                message: "Cannot break outside of a loop.".to_string(),
            }
            .report(self.diagnostics);
        }
    }

    fn visit_class_stmt(&mut self, data: &ClassData) {
        let enclosing_class = mem::replace(&mut self.current_class, ClassType::Class);

        self.declare(&data.name);
        self.define(&data.name);

        if let Some(superclass) = &data.superclass {
            if let Expr::Variable(variable) = superclass {
                if variable.name.lexeme == data.name.lexeme {
                    ResolveError {
                        token: variable.name.clone(),
                        message: "A class cannot inherit from itself".to_string(),
                    }
                    .report(self.diagnostics);
                }
            }

            self.current_class = ClassType::Subclass;
            superclass.accept(self);

            self.begin_scope();
            self.scopes.last_mut().expect("scope just pushed").insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes.last_mut().expect("scope just pushed").insert("this".to_string(), true);

        for method in &data.methods {
            let declaration =
                if method.name.lexeme == "init" { FunctionType::Initializer } else { FunctionType::Method };
            self.resolve_function(method, declaration);
        }

        self.end_scope();

        if data.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }
}
