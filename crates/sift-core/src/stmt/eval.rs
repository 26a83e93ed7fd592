use super::{BinaryOp, Expr, ExprCall, Method, Type, Value};
use crate::{Error, Result};

use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::cmp::Ordering;

impl Expr {
    /// Evaluates an expression that references no parameter or subquery.
    ///
    /// Captured closures are invoked here.
    pub fn eval_const(&self) -> Result<Value> {
        match self {
            Expr::Value(value) => Ok(value.clone()),
            Expr::Captured(captured) => captured.eval(),
            Expr::List(list) => Ok(Value::List(
                list.items
                    .iter()
                    .map(Expr::eval_const)
                    .collect::<Result<_>>()?,
            )),
            Expr::Cast(cast) => cast.ty.cast(cast.expr.eval_const()?),
            Expr::Not(not) => match not.expr.eval_const()? {
                Value::Bool(v) => Ok(Value::Bool(!v)),
                Value::Null => Ok(Value::Null),
                value => Err(Error::type_conversion(value, "bool")),
            },
            Expr::And(and) => eval_logic(&and.lhs, &and.rhs, false),
            Expr::Or(or) => eval_logic(&or.lhs, &or.rhs, true),
            Expr::BinaryOp(expr) => {
                let lhs = expr.lhs.eval_const()?;
                let rhs = expr.rhs.eval_const()?;
                eval_binary_op(expr.op, lhs, rhs)
            }
            Expr::Call(call) => eval_call(call),
            Expr::Member(_) | Expr::Param(_) | Expr::Subquery(_) => Err(Error::resolution(
                self.name(),
                "expression is not a constant",
            )),
        }
    }
}

/// Three-valued AND/OR. `short` is the value that decides the result.
fn eval_logic(lhs: &Expr, rhs: &Expr, short: bool) -> Result<Value> {
    let lhs = as_opt_bool(lhs.eval_const()?)?;
    if lhs == Some(short) {
        return Ok(Value::Bool(short));
    }
    let rhs = as_opt_bool(rhs.eval_const()?)?;
    Ok(match (lhs, rhs) {
        (_, Some(v)) if v == short => Value::Bool(short),
        (Some(_), Some(_)) => Value::Bool(!short),
        _ => Value::Null,
    })
}

fn as_opt_bool(value: Value) -> Result<Option<bool>> {
    match value {
        Value::Bool(v) => Ok(Some(v)),
        Value::Null => Ok(None),
        value => Err(Error::type_conversion(value, "bool")),
    }
}

fn eval_binary_op(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
    if lhs.is_null() || rhs.is_null() {
        return Ok(match op {
            BinaryOp::Eq => Value::Bool(lhs.is_null() && rhs.is_null()),
            BinaryOp::Ne => Value::Bool(lhs.is_null() != rhs.is_null()),
            _ => Value::Null,
        });
    }

    if op.is_comparison() {
        let ordering = match lhs.compare(&rhs) {
            Some(ordering) => ordering,
            None if lhs == rhs => Ordering::Equal,
            None if op.is_eq() => return Ok(Value::Bool(false)),
            None if op.is_ne() => return Ok(Value::Bool(true)),
            None => return Err(Error::type_conversion(rhs, lhs.infer_ty().name())),
        };
        return Ok(Value::Bool(match op {
            BinaryOp::Eq => ordering.is_eq(),
            BinaryOp::Ne => ordering.is_ne(),
            BinaryOp::Lt => ordering.is_lt(),
            BinaryOp::Le => ordering.is_le(),
            BinaryOp::Gt => ordering.is_gt(),
            _ => ordering.is_ge(),
        }));
    }

    if op == BinaryOp::Add {
        if let (Value::String(a), b) = (&lhs, &rhs) {
            return Ok(Value::String(format!("{a}{b}")));
        }
    }

    Num::arithmetic(op, &lhs, &rhs)
}

/// Numeric operand promoted to the widest participating representation.
#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i128),
    Decimal(Decimal),
    F64(f64),
}

impl Num {
    fn from_value(value: &Value) -> Option<Num> {
        if let Some(int) = value.as_i128() {
            return Some(Num::Int(int));
        }
        match value {
            Value::Decimal(v) => Some(Num::Decimal(*v)),
            Value::F64(v) => Some(Num::F64(*v)),
            _ => None,
        }
    }

    fn to_decimal(self) -> Option<Decimal> {
        match self {
            Num::Int(v) => Decimal::try_from_i128_with_scale(v, 0).ok(),
            Num::Decimal(v) => Some(v),
            Num::F64(v) => Decimal::from_f64_retain(v),
        }
    }

    fn to_f64(self) -> Option<f64> {
        match self {
            Num::Int(v) => Some(v as f64),
            Num::Decimal(v) => v.to_f64(),
            Num::F64(v) => Some(v),
        }
    }

    fn arithmetic(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value> {
        let (Some(a), Some(b)) = (Num::from_value(lhs), Num::from_value(rhs)) else {
            return Err(Error::type_conversion(
                if Num::from_value(lhs).is_none() {
                    lhs.clone()
                } else {
                    rhs.clone()
                },
                "number",
            ));
        };

        let overflow = || crate::err!("arithmetic overflow evaluating `{lhs} {op} {rhs}`");

        match (a, b) {
            (Num::Int(a), Num::Int(b)) => {
                let result = match op {
                    BinaryOp::Add => a.checked_add(b),
                    BinaryOp::Sub => a.checked_sub(b),
                    BinaryOp::Mul => a.checked_mul(b),
                    BinaryOp::Div => a.checked_div(b),
                    BinaryOp::Rem => a.checked_rem(b),
                    BinaryOp::BitAnd => Some(a & b),
                    BinaryOp::BitOr => Some(a | b),
                    BinaryOp::BitXor => Some(a ^ b),
                    _ => return Err(crate::err!("`{op}` is not an arithmetic operator")),
                }
                .ok_or_else(overflow)?;
                int_value(&lhs.infer_ty(), result)
            }
            (Num::F64(_), _) | (_, Num::F64(_)) => {
                let (Some(a), Some(b)) = (a.to_f64(), b.to_f64()) else {
                    return Err(overflow());
                };
                Ok(Value::F64(match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Rem => a % b,
                    _ => return Err(Error::type_conversion(Value::F64(a), "integer")),
                }))
            }
            _ => {
                let (Some(a), Some(b)) = (a.to_decimal(), b.to_decimal()) else {
                    return Err(overflow());
                };
                let result = match op {
                    BinaryOp::Add => a.checked_add(b),
                    BinaryOp::Sub => a.checked_sub(b),
                    BinaryOp::Mul => a.checked_mul(b),
                    BinaryOp::Div => a.checked_div(b),
                    BinaryOp::Rem => a.checked_rem(b),
                    _ => return Err(Error::type_conversion(Value::Decimal(a), "integer")),
                };
                Ok(Value::Decimal(result.ok_or_else(overflow)?))
            }
        }
    }
}

/// Stores an integer result in the type of the left operand, widening to
/// 64 bits when it does not fit.
fn int_value(ty: &Type, int: i128) -> Result<Value> {
    let wide = if let Ok(v) = i64::try_from(int) {
        Value::I64(v)
    } else if let Ok(v) = u64::try_from(int) {
        Value::U64(v)
    } else {
        Decimal::try_from_i128_with_scale(int, 0)
            .map(Value::Decimal)
            .map_err(|_| crate::err!("integer `{int}` is out of range"))?
    };

    match ty.integer_bounds() {
        Some((min, max)) if (min..=max).contains(&int) => ty.cast(wide),
        _ => Ok(wide),
    }
}

fn eval_call(call: &ExprCall) -> Result<Value> {
    let subject = match call.subject() {
        Some(subject) => subject.eval_const()?,
        None => return Err(Error::resolution("Call", "missing call subject")),
    };
    let operands = call
        .operands()
        .iter()
        .map(Expr::eval_const)
        .collect::<Result<Vec<_>>>()?;
    let operand = |i: usize| operands.get(i).cloned().unwrap_or_default();

    use Method::*;

    Ok(match call.method {
        IsNull => Value::Bool(subject.is_null()),
        NotNull => Value::Bool(!subject.is_null()),
        IsNullOrEmpty => Value::Bool(match &subject {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            value => return Err(Error::type_conversion(value.clone(), "string")),
        }),
        IsNullOrWhiteSpace => Value::Bool(match &subject {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            value => return Err(Error::type_conversion(value.clone(), "string")),
        }),
        Contains | NotContains => {
            let found = match (&subject, operand(0)) {
                (Value::List(items), item) => items.contains(&item),
                (Value::String(s), Value::String(needle)) => s.contains(needle.as_str()),
                (Value::Null, _) => return Ok(Value::Null),
                (value, _) => return Err(Error::type_conversion(value.clone(), "string")),
            };
            Value::Bool(found == (call.method == Contains))
        }
        StartsWith | EndsWith => match (&subject, operand(0)) {
            (Value::String(s), Value::String(fix)) => Value::Bool(if call.method == StartsWith {
                s.starts_with(fix.as_str())
            } else {
                s.ends_with(fix.as_str())
            }),
            (Value::Null, _) | (_, Value::Null) => Value::Null,
            (value, _) => return Err(Error::type_conversion(value.clone(), "string")),
        },
        Equals => eval_binary_op(BinaryOp::Eq, subject, operand(0))?,
        NotEquals => eval_binary_op(BinaryOp::Ne, subject, operand(0))?,
        LessThan => eval_binary_op(BinaryOp::Lt, subject, operand(0))?,
        LessThanOrEqual => eval_binary_op(BinaryOp::Le, subject, operand(0))?,
        GreaterThan => eval_binary_op(BinaryOp::Gt, subject, operand(0))?,
        GreaterThanOrEqual => eval_binary_op(BinaryOp::Ge, subject, operand(0))?,
        Trim | TrimStart | TrimEnd | ToUpper | ToLower | CharLength => {
            let s = match subject {
                Value::Null => return Ok(Value::Null),
                Value::String(s) => s,
                value => return Err(Error::type_conversion(value, "string")),
            };
            match call.method {
                Trim => Value::String(s.trim().to_string()),
                TrimStart => Value::String(s.trim_start().to_string()),
                TrimEnd => Value::String(s.trim_end().to_string()),
                ToUpper => Value::String(s.to_uppercase()),
                ToLower => Value::String(s.to_lowercase()),
                _ => Value::I64(s.chars().count() as i64),
            }
        }
        Concat => {
            if subject.is_null() {
                return Ok(Value::Null);
            }
            let mut out = subject.to_string();
            for value in &operands {
                if value.is_null() {
                    return Ok(Value::Null);
                }
                out.push_str(&value.to_string());
            }
            Value::String(out)
        }
        JsonExtract => match (subject, operand(0)) {
            (Value::Json(doc), Value::String(path)) => doc
                .pointer(&json_pointer(&path))
                .cloned()
                .map(Value::Json)
                .unwrap_or_default(),
            (Value::Null, _) => Value::Null,
            (value, _) => return Err(Error::type_conversion(value, "json")),
        },
        Max | Min | Avg | Sum | Count => eval_aggregate(call.method, subject)?,
    })
}

fn eval_aggregate(method: Method, subject: Value) -> Result<Value> {
    let items: Vec<Value> = match subject {
        Value::List(items) => items.into_iter().filter(|v| !v.is_null()).collect(),
        Value::Null => vec![],
        value => vec![value],
    };

    if method == Method::Count {
        return Ok(Value::I64(items.len() as i64));
    }

    let mut iter = items.into_iter();
    let Some(first) = iter.next() else {
        return Ok(Value::Null);
    };

    match method {
        Method::Max | Method::Min => {
            let want = if method == Method::Max {
                Ordering::Greater
            } else {
                Ordering::Less
            };
            iter.try_fold(first, |best, value| match value.compare(&best) {
                Some(ordering) if ordering == want => Ok(value),
                Some(_) => Ok(best),
                None => Err(Error::type_conversion(value, best.infer_ty().name())),
            })
        }
        _ => {
            let mut count = 1_i64;
            let mut total = first;
            for value in iter {
                total = Num::arithmetic(BinaryOp::Add, &total, &value)?;
                count += 1;
            }
            if method == Method::Sum {
                return Ok(total);
            }
            let total = match Num::from_value(&total).and_then(Num::to_decimal) {
                Some(total) => total,
                None => return Err(Error::type_conversion(total, "decimal")),
            };
            Ok(Value::Decimal(total / Decimal::from(count)))
        }
    }
}

/// Accepts a JSON pointer (`/a/0`) or a dotted path (`$.a.b`, `a.b`).
fn json_pointer(path: &str) -> String {
    if path.starts_with('/') || path.is_empty() {
        return path.to_string();
    }
    let path = path.strip_prefix('$').unwrap_or(path);
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .fold(String::new(), |mut out, segment| {
            out.push('/');
            out.push_str(&segment.replace('~', "~0").replace('/', "~1"));
            out
        })
}
