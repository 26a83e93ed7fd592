use super::Resolver;
use crate::{
    query::{ConditionGroup, Connector, Criterion, Entry, FieldRef, Format, Operator},
    schema::Registry,
    stmt::{BinaryOp, Expr, ExprCall, Lambda, Method, Type, Value},
    Error, Result,
};

/// Translates predicate lambdas into condition groups.
///
/// Holds no state between calls. Every translation returns an independent
/// value owned by the caller.
pub struct Translator<'a> {
    registry: &'a Registry,
}

struct Cx<'a> {
    resolver: Resolver<'a>,
    registry: &'a Registry,
}

impl<'a> Translator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Translates `lambda`. The result's connector is `connector`, which
    /// says how the predicate attaches to an enclosing query.
    pub fn translate(&self, lambda: &Lambda, connector: Connector) -> Result<ConditionGroup> {
        let cx = Cx {
            resolver: Resolver::new(self.registry, lambda),
            registry: self.registry,
        };

        Ok(match cx.translate_entry(&lambda.body, connector)? {
            Entry::Group(group) => group,
            entry => ConditionGroup::from_entries(connector, vec![entry]),
        })
    }
}

impl Cx<'_> {
    fn translate_entry(&self, expr: &Expr, connector: Connector) -> Result<Entry> {
        tracing::trace!(node = expr.name(), %connector, "translating predicate node");

        if expr.is_const() {
            return self.constant(expr, connector);
        }

        match expr {
            Expr::And(and) => self.logical(&and.lhs, &and.rhs, Connector::And, connector),
            Expr::Or(or) => self.logical(&or.lhs, &or.rhs, Connector::Or, connector),
            Expr::Not(not) => {
                let mut entry = self.translate_entry(&not.expr, connector)?;
                entry.negate();
                attach(&mut entry, connector);
                Ok(entry)
            }
            Expr::BinaryOp(binary) if binary.op.is_comparison() => {
                self.comparison(binary.op, &binary.lhs, &binary.rhs, connector)
            }
            Expr::Call(call) => self.call(call, connector),
            Expr::Member(_) => {
                let field = self.require(expr)?;
                self.check_ty(&field, expr, Type::Bool, "a boolean")?;
                Ok(criterion(
                    Operator::Equal,
                    field,
                    Some(FieldRef::constant(true)),
                    connector,
                ))
            }
            Expr::Cast(cast) if cast.ty.is_bool() => self.translate_entry(&cast.expr, connector),
            expr => Err(Error::unsupported_predicate(
                expr.name(),
                "expression is not a predicate",
            )),
        }
    }

    /// A predicate with no parameter, decided when translated.
    fn constant(&self, expr: &Expr, connector: Connector) -> Result<Entry> {
        let op = match expr.eval_const()? {
            Value::Bool(true) => Operator::AlwaysTrue,
            Value::Bool(false) => Operator::AlwaysFalse,
            value => {
                return Err(Error::unsupported_predicate(
                    expr.name(),
                    format!("constant `{value}` is not a boolean"),
                ))
            }
        };
        Ok(criterion(
            op,
            FieldRef::constant(op == Operator::AlwaysTrue),
            None,
            connector,
        ))
    }

    /// Translates `lhs node rhs` into one group.
    ///
    /// A left side group is spliced in whole. A right side group is
    /// spliced only when it already joins with `node`, which keeps the
    /// left-to-right reading unchanged.
    fn logical(
        &self,
        lhs: &Expr,
        rhs: &Expr,
        node: Connector,
        connector: Connector,
    ) -> Result<Entry> {
        let lhs = self.translate_entry(lhs, connector)?;
        let rhs = self.translate_entry(rhs, node)?;

        let mut group = ConditionGroup::new(connector);

        match lhs {
            Entry::Group(left) => group.entries.extend(left.entries),
            entry => group.push(entry),
        }

        match rhs {
            Entry::Group(right) if right.is_uniform(node) => {
                let start = group.entries.len();
                group.entries.extend(right.entries);
                if let Some(first) = group.entries.get_mut(start) {
                    attach(first, node);
                }
            }
            entry => group.push(entry),
        }

        if let Some(first) = group.entries.first_mut() {
            attach(first, connector);
        }

        Ok(Entry::Group(group))
    }

    fn comparison(&self, op: BinaryOp, lhs: &Expr, rhs: &Expr, connector: Connector) -> Result<Entry> {
        let Some(mapped) = Operator::from_comparison(op) else {
            return Err(Error::unsupported_predicate(
                "BinaryOp",
                format!("`{op}` is not a comparison"),
            ));
        };

        let left = self.cx_resolve(lhs)?;
        let right = self.cx_resolve(rhs)?;

        match (left, right) {
            (Some(left), Some(right)) => {
                for field in [&left, &right] {
                    if let Some(value) = field.as_constant() {
                        if !value.is_scalar() {
                            tracing::warn!(
                                %op,
                                value = %value,
                                "comparing against a non-scalar constant"
                            );
                        }
                    }
                }
                Ok(criterion(mapped, left, Some(right), connector))
            }
            (Some(field), None) | (None, Some(field)) => match op {
                BinaryOp::Eq => Ok(criterion(Operator::IsNull, field, None, connector)),
                BinaryOp::Ne => Ok(criterion(Operator::NotNull, field, None, connector)),
                op => Err(Error::null_ordering(op)),
            },
            (None, None) => Err(Error::unsupported_predicate(
                "BinaryOp",
                "both operands are null",
            )),
        }
    }

    fn call(&self, call: &ExprCall, connector: Connector) -> Result<Entry> {
        use Method::*;

        match call.method {
            Contains | NotContains => self.membership(call, connector),
            StartsWith => self.pattern(call, Operator::BeginLike, connector),
            EndsWith => self.pattern(call, Operator::EndLike, connector),
            Equals | NotEquals | LessThan | LessThanOrEqual | GreaterThan | GreaterThanOrEqual => {
                let (op, mapped) = match call.method {
                    Equals => (BinaryOp::Eq, Operator::Equal),
                    NotEquals => (BinaryOp::Ne, Operator::NotEqual),
                    LessThan => (BinaryOp::Lt, Operator::LessThan),
                    LessThanOrEqual => (BinaryOp::Le, Operator::LessThanOrEqual),
                    GreaterThan => (BinaryOp::Gt, Operator::GreaterThan),
                    _ => (BinaryOp::Ge, Operator::GreaterThanOrEqual),
                };
                let (subject, arg) = self.subject_and_arg(call)?;
                match subject {
                    Expr::Subquery(_) => self.against_subquery(mapped, subject, arg, connector),
                    _ => self.comparison(op, subject, arg, connector),
                }
            }
            IsNull | NotNull => {
                let subject = self.subject(call)?;
                Ok(match (self.cx_resolve(subject)?, call.method) {
                    (Some(field), IsNull) => criterion(Operator::IsNull, field, None, connector),
                    (Some(field), _) => criterion(Operator::NotNull, field, None, connector),
                    (None, IsNull) => always(true, connector),
                    (None, _) => always(false, connector),
                })
            }
            IsNullOrEmpty | IsNullOrWhiteSpace => {
                let subject = self.subject(call)?;
                let Some(field) = self.cx_resolve(subject)? else {
                    return Ok(always(true, connector));
                };
                self.check_ty(&field, subject, Type::String, "a string")?;

                let compared = if call.method == IsNullOrWhiteSpace {
                    field.clone().with_format(Format::Trim, None)
                } else {
                    field.clone()
                };

                Ok(Entry::Group(ConditionGroup::from_entries(
                    connector,
                    vec![
                        criterion(Operator::IsNull, field, None, connector),
                        criterion(
                            Operator::Equal,
                            compared,
                            Some(FieldRef::constant("")),
                            Connector::Or,
                        ),
                    ],
                )))
            }
            method => Err(Error::unsupported_predicate(
                "Call",
                format!("`{method}` is not a predicate"),
            )),
        }
    }

    /// `contains` / `not_contains`: subquery or list membership, otherwise a
    /// substring pattern.
    fn membership(&self, call: &ExprCall, connector: Connector) -> Result<Entry> {
        let negate = call.method == Method::NotContains;
        let (receiver, arg) = self.subject_and_arg(call)?;

        if receiver.is_subquery() {
            let op = if negate { Operator::NotIn } else { Operator::In };
            return self.against_subquery(op, receiver, arg, connector);
        }

        if receiver.is_const() {
            match receiver.eval_const()? {
                Value::List(items) => {
                    let Some(left) = self.cx_resolve(arg)? else {
                        return Err(Error::unsupported_predicate(
                            "Call",
                            "membership test of a null value",
                        ));
                    };
                    let op = if negate { Operator::NotIn } else { Operator::In };
                    return Ok(criterion(
                        op,
                        left,
                        Some(FieldRef::constant(Value::List(dedup(items)))),
                        connector,
                    ));
                }
                Value::Null => {
                    return Err(Error::unsupported_predicate(
                        "Call",
                        format!("`{}` on a null receiver", call.method),
                    ))
                }
                _ => {}
            }
        }

        let op = if negate {
            Operator::NotLike
        } else {
            Operator::Like
        };
        self.pattern(call, op, connector)
    }

    /// String pattern intrinsics on a string receiver.
    fn pattern(&self, call: &ExprCall, op: Operator, connector: Connector) -> Result<Entry> {
        let (receiver, arg) = self.subject_and_arg(call)?;

        let Some(left) = self.cx_resolve(receiver)? else {
            return Err(Error::unsupported_predicate(
                "Call",
                format!("`{}` on a null receiver", call.method),
            ));
        };
        self.check_ty(&left, receiver, Type::String, "a string")?;

        let Some(right) = self.cx_resolve(arg)? else {
            return Err(Error::unsupported_predicate(
                "Call",
                format!("`{}` with a null pattern", call.method),
            ));
        };

        Ok(criterion(op, left, Some(right), connector))
    }

    /// `subquery.op(arg)`: the argument is the left field.
    fn against_subquery(
        &self,
        op: Operator,
        subquery: &Expr,
        arg: &Expr,
        connector: Connector,
    ) -> Result<Entry> {
        let Some(left) = self.cx_resolve(arg)? else {
            return Err(Error::unsupported_predicate(
                "Subquery",
                "cannot compare null with a subquery",
            ));
        };
        let Some(right) = self.cx_resolve(subquery)? else {
            return Err(Error::unsupported_predicate("Subquery", "empty subquery"));
        };
        Ok(criterion(op, left, Some(right), connector))
    }

    fn subject<'e>(&self, call: &'e ExprCall) -> Result<&'e Expr> {
        call.subject().ok_or_else(|| {
            Error::unsupported_predicate("Call", format!("`{}` has no subject", call.method))
        })
    }

    fn subject_and_arg<'e>(&self, call: &'e ExprCall) -> Result<(&'e Expr, &'e Expr)> {
        let subject = self.subject(call)?;
        match call.operands().first() {
            Some(arg) => Ok((subject, arg)),
            None => Err(Error::unsupported_predicate(
                "Call",
                format!("`{}` takes an argument", call.method),
            )),
        }
    }

    fn cx_resolve(&self, expr: &Expr) -> Result<Option<FieldRef>> {
        self.resolver.resolve(expr)
    }

    fn require(&self, expr: &Expr) -> Result<FieldRef> {
        self.cx_resolve(expr)?.ok_or_else(|| {
            Error::unsupported_predicate(expr.name(), "null is not a predicate")
        })
    }

    /// Rejects a property field whose declared type is not `expected`.
    /// Formatted fields and constants are left to the planner.
    fn check_ty(&self, field: &FieldRef, expr: &Expr, expected: Type, what: &str) -> Result<()> {
        let Some(property) = field.as_property() else {
            return Ok(());
        };

        let model = self.registry.model(property.model)?;
        let declared = model.expect_field(&property.name)?;

        let yields_number = field.formats().any(|setting| setting.format.yields_number());
        let formatted = field.has_format();

        if (!formatted && declared.ty != expected) || (yields_number && expected.is_string()) {
            return Err(Error::unsupported_predicate(
                expr.name(),
                format!(
                    "`{}.{}` is `{}`, not {what}",
                    model.name,
                    property.name,
                    declared.ty.name()
                ),
            ));
        }
        Ok(())
    }
}

/// Sets how `entry` joins its siblings. A group's first entry describes the
/// same attachment, so it follows.
fn attach(entry: &mut Entry, connector: Connector) {
    entry.set_connector(connector);
    if let Entry::Group(group) = entry {
        if let Some(first) = group.entries.first_mut() {
            attach(first, connector);
        }
    }
}

fn criterion(op: Operator, left: FieldRef, right: Option<FieldRef>, connector: Connector) -> Entry {
    Entry::Criterion(Criterion {
        op,
        left,
        right,
        connector,
    })
}

fn always(value: bool, connector: Connector) -> Entry {
    let op = if value {
        Operator::AlwaysTrue
    } else {
        Operator::AlwaysFalse
    };
    criterion(op, FieldRef::constant(value), None, connector)
}

fn dedup(items: Vec<Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
