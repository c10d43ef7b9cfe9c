use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::Class;
use crate::environment::Environment;
use crate::error::{Diagnostics, Error, RuntimeError};
use crate::expr::*;
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::*;
use crate::token::{Token, Type};

/// What a statement did, besides possibly erroring. `execute_block` and the
/// loop statements use this to unwind to the right place instead of the
/// teacher's boolean flags: `Return` unwinds all the way out of the
/// enclosing function call, `Break` unwinds only to the enclosing loop.
#[derive(Debug, Clone)]
pub enum Signal {
    Normal,
    Break,
    Return(Object),
}

/// Walks the AST produced by the parser (and annotated by the resolver)
/// and evaluates it directly, with no separate bytecode or compilation
/// step. One `Interpreter` lives for the whole process, so that top-level
/// `var` declarations in a REPL session persist between lines.
pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
    output: Rc<RefCell<dyn Write>>,
}

impl Interpreter {
    pub fn new(output: Rc<RefCell<dyn Write>>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::globals() {
            let name = native.name.clone();
            globals.borrow_mut().define(&name, Object::from(native));
        }

        Interpreter { environment: Rc::clone(&globals), globals, locals: HashMap::new(), output }
    }

    /// Records the scope distance the resolver computed for a
    /// `Variable`/`Assign`/`This`/`Super` node, keyed by node id.
    pub fn resolve(&mut self, id: NodeId, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Executes a parsed (and resolved) program, reporting the first
    /// runtime error encountered and then stopping.
    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                error.report(diagnostics);
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<Signal, RuntimeError> {
        stmt.accept(self)
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        expr.accept(self)
    }

    /// Runs `statements` in a fresh environment enclosed by `environment`,
    /// restoring the previous environment before returning, whether the
    /// block finished normally, unwound with `break`/`return`, or errored.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<Signal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(Signal::Normal);
        for statement in statements {
            match self.execute(statement) {
                Ok(Signal::Normal) => continue,
                other => {
                    result = other;
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }

    fn lookup_variable(&self, id: NodeId, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

fn numeric_binary(
    operator: &Token,
    left: &Object,
    right: &Object,
    checked: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Object, RuntimeError> {
    match (left.as_literal(), right.as_literal()) {
        (Some(Literal::Integer(a)), Some(Literal::Integer(b))) => match checked(*a, *b) {
            Some(result) => Ok(Object::from(result)),
            None => Ok(Object::from(float_op(*a as f64, *b as f64))),
        },
        (Some(a), Some(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => Ok(Object::from(float_op(a, b))),
            _ => Err(RuntimeError { token: operator.clone(), message: "Operands must be numbers.".to_string() }),
        },
        _ => Err(RuntimeError { token: operator.clone(), message: "Operands must be numbers.".to_string() }),
    }
}

fn compare(operator: &Token, left: &Object, right: &Object, op: fn(f64, f64) -> bool) -> Result<Object, RuntimeError> {
    match (left.as_literal().and_then(Literal::as_f64), right.as_literal().and_then(Literal::as_f64)) {
        (Some(a), Some(b)) => Ok(Object::from(op(a, b))),
        _ => Err(RuntimeError { token: operator.clone(), message: "Operands must be numbers.".to_string() }),
    }
}

impl ExprVisitor<Result<Object, RuntimeError>> for Interpreter {
    fn visit_literal_expr(&mut self, literal: &Literal) -> Result<Object, RuntimeError> {
        Ok(Object::from(literal.clone()))
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> Result<Object, RuntimeError> {
        self.evaluate(&data.expr)
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> Result<Object, RuntimeError> {
        let right = self.evaluate(&data.expr)?;

        match data.operator.r#type {
            Type::Minus => match right.as_literal() {
                Some(Literal::Integer(n)) => Ok(Object::from(-n)),
                Some(Literal::Float(n)) => Ok(Object::from(-n)),
                _ => Err(RuntimeError { token: data.operator.clone(), message: "Operand must be a number.".to_string() }),
            },
            Type::Bang => Ok(Object::from(!right.is_truthy())),
            _ => unreachable!("parser only emits '-' or '!' as a unary operator"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;
        let operator = &data.operator;

        match operator.r#type {
            Type::Plus => match (left.as_literal(), right.as_literal()) {
                (Some(Literal::String(a)), Some(Literal::String(b))) => Ok(Object::from(format!("{a}{b}"))),
                (Some(_), Some(_)) => numeric_binary(operator, &left, &right, i64::checked_add, |a, b| a + b),
                _ => Err(RuntimeError {
                    token: operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }),
            },
            Type::Minus => numeric_binary(operator, &left, &right, i64::checked_sub, |a, b| a - b),
            Type::Star => numeric_binary(operator, &left, &right, i64::checked_mul, |a, b| a * b),
            Type::Slash => {
                match (left.as_literal().and_then(Literal::as_f64), right.as_literal().and_then(Literal::as_f64)) {
                    (Some(_), Some(b)) if b == 0.0 => {
                        Err(RuntimeError { token: operator.clone(), message: "Divided by zero.".to_string() })
                    }
                    (Some(a), Some(b)) => Ok(Object::from(a / b)),
                    _ => Err(RuntimeError { token: operator.clone(), message: "Operands must be numbers.".to_string() }),
                }
            }
            Type::Greater => compare(operator, &left, &right, |a, b| a > b),
            Type::GreaterEqual => compare(operator, &left, &right, |a, b| a >= b),
            Type::Less => compare(operator, &left, &right, |a, b| a < b),
            Type::LessEqual => compare(operator, &left, &right, |a, b| a <= b),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::EqualEqual => Ok(Object::from(left == right)),
            _ => unreachable!("parser only emits arithmetic, comparison or equality operators for Binary"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;

        if data.operator.r#type == Type::Or {
            if left.is_truthy() {
                return Ok(left);
            }
        } else if !left.is_truthy() {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> Result<Object, RuntimeError> {
        self.lookup_variable(data.id, &data.name)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> Result<Object, RuntimeError> {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&distance) => Environment::assign_at(&self.environment, distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> Result<Object, RuntimeError> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Object::Function(function) => function.arity(),
            Object::NativeFunction(function) => function.arity(),
            Object::Class(class) => class.borrow().arity(),
            _ => {
                return Err(RuntimeError {
                    token: data.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                })
            }
        };

        if arguments.len() != arity {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: format!("Expected {arity} arguments but got {}.", arguments.len()),
            });
        }

        match &callee {
            Object::Function(function) => function.call(self, arguments),
            Object::NativeFunction(function) => function.call(self, arguments),
            Object::Class(class) => {
                let class = class.borrow().clone();
                class.call(self, arguments)
            }
            _ => unreachable!("arity check above already rejected non-callables"),
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        if let Object::Instance(instance) = &object {
            return instance.borrow().get(&data.name, &object);
        }

        Err(RuntimeError { token: data.name.clone(), message: "Only instances have properties.".to_string() })
    }

    fn visit_set_expr(&mut self, data: &SetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        let Object::Instance(instance) = &object else {
            return Err(RuntimeError { token: data.name.clone(), message: "Only instances have fields.".to_string() });
        };

        let value = self.evaluate(&data.value)?;
        instance.borrow_mut().set(&data.name, value.clone());
        Ok(value)
    }

    fn visit_this_expr(&mut self, data: &ThisData) -> Result<Object, RuntimeError> {
        self.lookup_variable(data.id, &data.keyword)
    }

    fn visit_super_expr(&mut self, data: &SuperData) -> Result<Object, RuntimeError> {
        let distance = *self
            .locals
            .get(&data.id)
            .expect("resolver to have resolved every 'super' expression before evaluation");

        let superclass = Environment::get_at(&self.environment, distance, &Token::from("super"))?;
        let instance = Environment::get_at(&self.environment, distance - 1, &Token::from("this"))?;

        let Object::Class(class) = superclass else {
            unreachable!("'super' always resolves to the enclosing class")
        };

        let method = class.borrow().find_method(&data.method.lexeme).ok_or_else(|| RuntimeError {
            token: data.method.clone(),
            message: format!("Undefined property '{}'.", data.method.lexeme),
        })?;

        Ok(Object::from(method.bind(instance)))
    }
}

impl StmtVisitor<Result<Signal, RuntimeError>> for Interpreter {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> Result<Signal, RuntimeError> {
        self.evaluate(&data.expr)?;
        Ok(Signal::Normal)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> Result<Signal, RuntimeError> {
        let value = self.evaluate(&data.expr)?;
        let _ = writeln!(self.output.borrow_mut(), "{value}");
        Ok(Signal::Normal)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> Result<Signal, RuntimeError> {
        let value = match &data.initializer {
            Some(initializer) => self.evaluate(initializer)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(Signal::Normal)
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> Result<Signal, RuntimeError> {
        let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
        self.execute_block(&data.statements, environment)
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> Result<Signal, RuntimeError> {
        if self.evaluate(&data.condition)?.is_truthy() {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(Signal::Normal)
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> Result<Signal, RuntimeError> {
        while self.evaluate(&data.condition)?.is_truthy() {
            match self.execute(&data.body)? {
                Signal::Normal => {}
                Signal::Break => break,
                Signal::Return(value) => return Ok(Signal::Return(value)),
            }
        }

        Ok(Signal::Normal)
    }

    fn visit_function_stmt(&mut self, data: &Rc<FunctionData>) -> Result<Signal, RuntimeError> {
        let function = Function::new(Rc::clone(data), Rc::clone(&self.environment), false);
        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(Signal::Normal)
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> Result<Signal, RuntimeError> {
        let value = match &data.value {
            Some(value) => self.evaluate(value)?,
            None => Object::from(Literal::Nil),
        };

        Ok(Signal::Return(value))
    }

    fn visit_break_stmt(&mut self, _data: &BreakData) -> Result<Signal, RuntimeError> {
        Ok(Signal::Break)
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> Result<Signal, RuntimeError> {
        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                match value {
                    Object::Class(class) => Some(class),
                    _ => {
                        let token = match expr {
                            Expr::Variable(variable) => variable.name.clone(),
                            _ => data.name.clone(),
                        };
                        return Err(RuntimeError { token, message: "Superclass must be a class.".to_string() });
                    }
                }
            }
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let enclosing = superclass.as_ref().map(|superclass| {
            let environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&self.environment)))));
            environment.borrow_mut().define("super", Object::from(Rc::clone(superclass)));
            std::mem::replace(&mut self.environment, environment)
        });

        let mut methods = HashMap::new();
        for method in &data.methods {
            let function =
                Function::new(Rc::clone(method), Rc::clone(&self.environment), method.name.lexeme == "init");
            methods.insert(method.name.lexeme.clone(), function);
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);

        if let Some(enclosing) = enclosing {
            self.environment = enclosing;
        }

        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;

        Ok(Signal::Normal)
    }
}
