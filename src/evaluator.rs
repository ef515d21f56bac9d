//! Tree-walking evaluator: walks an [`ast::Program`] directly, without an
//! intermediate bytecode representation.

use std::{cell::RefCell, rc::Rc};

use log::trace;

use crate::{
    ast::{self, BlockStatement, Expression, Program, Statement},
    builtins,
    environment::Environment,
    object::{native_bool, HashKey, Value, NULL},
};

/// Evaluates a whole program. A `return` at the top level stops evaluation of
/// later statements and yields the unwrapped value; an `Error` does the same.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = NULL.clone();

    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::ReturnValue(value) => return *value,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block's statements without unwrapping a `return` or unwinding
/// past an error: both are left wrapped so an enclosing `eval_program` or
/// function call boundary can see them and stop propagating further.
fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = NULL.clone();

    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> Value {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            Value::ReturnValue(Box::new(value))
        }
        Statement::Let(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(stmt.name.value.clone(), value);
            NULL.clone()
        }
    }
}

fn eval_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> Value {
    match expression {
        Expression::IntegerLiteral(lit) => Value::Integer(lit.value),
        Expression::BooleanLiteral(lit) => native_bool(lit.value),
        Expression::StringLiteral(lit) => Value::String(lit.value.as_str().into()),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, left, right)
        }
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::Function(expr) => Value::Function(Rc::new(crate::object::FunctionValue {
            parameters: expr.parameters.clone(),
            body: expr.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(expr) => eval_call_expression(expr, env),
        Expression::ArrayLiteral(expr) => {
            match eval_expressions(&expr.elements, env) {
                Ok(elements) => Value::Array(Rc::new(elements)),
                Err(err) => err,
            }
        }
        Expression::HashLiteral(expr) => eval_hash_literal(expr, env),
        Expression::Index(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(&expr.index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    trace!("identifier not found: {name}");
    Value::error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => native_bool(!right.is_truthy()),
        "-" => match right {
            Value::Integer(i) => Value::Integer(-i),
            other => Value::error(format!("unknown operator: -{}", other.object_type())),
        },
        other => Value::error(format!(
            "unknown operator: {other}{}",
            right.object_type()
        )),
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        _ if operator == "==" => native_bool(values_equal(&left, &right)),
        _ if operator == "!=" => native_bool(!values_equal(&left, &right)),
        _ if left.object_type() != right.object_type() => Value::error(format!(
            "type mismatch: {} {operator} {}",
            left.object_type(),
            right.object_type()
        )),
        _ => Value::error(format!(
            "unknown operator: {} {operator} {}",
            left.object_type(),
            right.object_type()
        )),
    }
}

/// `values_equal` backs `==`/`!=` for the cases [`eval_infix_expression`]
/// doesn't special-case directly: booleans and `null` compare by identity of
/// their singleton value, matching the reference semantics where `true` and
/// `false` are the only two `Boolean` instances that ever exist.
fn values_equal(left: &Value, right: &Value) -> bool {
    matches!(
        (left, right),
        (Value::Boolean(true), Value::Boolean(true))
            | (Value::Boolean(false), Value::Boolean(false))
            | (Value::Null, Value::Null)
    )
}

/// Integer division floors toward negative infinity, matching the source
/// language's `//` rather than Rust's truncating `/`.
fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => {
            if right == 0 {
                return Value::error("division by zero");
            }
            Value::Integer(floor_div(left, right))
        }
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Value::error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

/// Floors toward negative infinity, unlike Rust's truncating `/` and unlike
/// `div_euclid` (which floors only for a positive divisor).
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(format!("{left}{right}").into()),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        other => Value::error(format!("unknown operator: STRING {other} STRING")),
    }
}

fn eval_if_expression(expr: &ast::IfExpression, env: &Rc<RefCell<Environment>>) -> Value {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL.clone()
    }
}

fn eval_expressions(
    expressions: &[Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(expressions.len());
    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_call_expression(expr: &ast::CallExpression, env: &Rc<RefCell<Environment>>) -> Value {
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let args = match eval_expressions(&expr.arguments, env) {
        Ok(args) => args,
        Err(err) => return err,
    };

    apply_function(function, args, env)
}

fn apply_function(function: Value, args: Vec<Value>, env: &Rc<RefCell<Environment>>) -> Value {
    match function {
        Value::Function(func) => {
            if func.parameters.len() != args.len() {
                return Value::error(format!(
                    "wrong number of arguments. got={}, want={}",
                    args.len(),
                    func.parameters.len()
                ));
            }

            let call_env = Environment::enclosed(func.env.clone());
            for (param, arg) in func.parameters.iter().zip(args) {
                call_env.borrow_mut().set(param.value.clone(), arg);
            }

            // Unwrap `ReturnValue` exactly once here: a `return` inside a
            // nested block must not keep propagating past this call boundary.
            match eval_block_statement(&func.body, &call_env) {
                Value::ReturnValue(value) => *value,
                other => other,
            }
        }
        Value::Builtin(builtin) => builtin(&args, env),
        other => Value::error(format!("not a function: {}", other.object_type())),
    }
}

fn eval_hash_literal(expr: &ast::HashLiteral, env: &Rc<RefCell<Environment>>) -> Value {
    let mut pairs = indexmap::IndexMap::new();

    for (key_expr, value_expr) in &expr.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }

        let Some(hash_key) = HashKey::from_value(&key) else {
            return Value::error(format!("unusable as hash key: {}", key.object_type()));
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, (key, value));
    }

    Value::Hash(Rc::new(pairs))
}

fn eval_index_expression(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                return NULL.clone();
            }
            elements[*i as usize].clone()
        }
        (Value::Hash(pairs), key) => match HashKey::from_value(key) {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map(|(_, v)| v.clone())
                .unwrap_or_else(|| NULL.clone()),
            None => Value::error(format!("unusable as hash key: {}", key.object_type())),
        },
        (other, _) => Value::error(format!("index operator not supported: {}", other.object_type())),
    }
}
