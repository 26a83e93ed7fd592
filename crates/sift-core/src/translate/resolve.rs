use crate::{
    query::{FieldRef, Format},
    schema::Registry,
    stmt::{Expr, ExprBinaryOp, ExprCall, ExprMember, Lambda, Value},
    Error, Result,
};

/// Resolves field-position expressions of one lambda to [`FieldRef`]s.
pub struct Resolver<'a> {
    registry: &'a Registry,
    lambda: &'a Lambda,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, lambda: &'a Lambda) -> Self {
        Self { registry, lambda }
    }

    /// Resolves `expr` to a field.
    ///
    /// `None` means the expression is a null constant, which callers turn
    /// into a null-aware operator.
    pub fn resolve(&self, expr: &Expr) -> Result<Option<FieldRef>> {
        match expr {
            Expr::Subquery(subquery) => Ok(Some(FieldRef::subquery(subquery.clone()))),
            expr if expr.is_const() => {
                Ok(match expr.eval_const()? {
                    Value::Null => None,
                    value => Some(FieldRef::constant(value)),
                })
            }
            Expr::Member(member) => self.resolve_member(member).map(Some),
            Expr::Call(call) if call.method.format().is_some() => {
                self.resolve_format_call(call).map(Some)
            }
            Expr::BinaryOp(binary) if binary.op.is_arithmetic() => {
                self.resolve_binary_op(binary).map(Some)
            }
            Expr::Cast(cast) => self.resolve(&cast.expr),
            Expr::Param(param) => Err(Error::resolution(
                "Param",
                format!("parameter `{}` is not a field; read a property of it", param.name),
            )),
            expr => Err(Error::resolution(expr.name(), "expression is not a field")),
        }
    }

    /// Like [`Resolver::resolve`], with a null constant as `Constant(Null)`.
    pub fn resolve_or_null(&self, expr: &Expr) -> Result<FieldRef> {
        Ok(self
            .resolve(expr)?
            .unwrap_or_else(|| FieldRef::constant(Value::Null)))
    }

    fn resolve_member(&self, member: &ExprMember) -> Result<FieldRef> {
        let Expr::Param(param) = &*member.base else {
            return Err(Error::resolution(
                member.base.name(),
                format!(
                    "`{}` must be read directly from a lambda parameter",
                    member.name
                ),
            ));
        };

        let Some(position) = self.lambda.position(param) else {
            return Err(Error::resolution(
                "Param",
                format!("parameter `{}` is not bound by the lambda", param.name),
            ));
        };

        let model = self.registry.model(param.model)?;
        let field = model.expect_field(&member.name)?;

        if !field.is_queryable() {
            return Err(Error::resolution(
                "Member",
                format!("field `{}.{}` is not queryable", model.name, member.name),
            ));
        }

        tracing::trace!(
            model = model.name,
            field = field.name(),
            position,
            "resolved property"
        );

        let mut resolved = FieldRef::property(param.model, field.name(), position);
        if let Some(format) = field.format {
            resolved.push_format(format, None);
        }
        Ok(resolved)
    }

    fn resolve_format_call(&self, call: &ExprCall) -> Result<FieldRef> {
        let Some(format) = call.method.format() else {
            return Err(Error::resolution(
                "Call",
                format!("`{}` is not a format", call.method),
            ));
        };

        let Some(subject) = call.subject() else {
            return Err(Error::resolution(
                "Call",
                format!("`{}` has nothing to apply to", call.method),
            ));
        };

        let mut field = self.resolve_or_null(subject)?;

        if format.takes_operand() {
            let operands = call.operands();
            if operands.is_empty() {
                return Err(Error::resolution(
                    "Call",
                    format!("`{}` takes an operand", call.method),
                ));
            }
            // `concat(a, b, c)` chains as `(a || b) || c`
            for operand in operands {
                let operand = self.resolve_or_null(operand)?;
                field.push_format(format, Some(operand));
            }
        } else {
            field.push_format(format, None);
        }

        Ok(field)
    }

    fn resolve_binary_op(&self, binary: &ExprBinaryOp) -> Result<FieldRef> {
        let Some(format) = Format::from_binary_op(binary.op) else {
            return Err(Error::resolution(
                "BinaryOp",
                format!("`{}` is not a format", binary.op),
            ));
        };

        let mut field = self.resolve_or_null(&binary.lhs)?;
        let operand = self.resolve_or_null(&binary.rhs)?;
        field.push_format(format, Some(operand));
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        query::{FieldKind, PropertyField},
        schema::{Behavior, Entity, ModelBuilder, ModelRef},
        stmt::Param,
    };

    struct Item {
        id: i64,
        label: String,
        secret: String,
    }

    impl Entity for Item {
        fn describe(model: &mut ModelBuilder<Self>) {
            model.field("id", |i| &i.id, |i| &mut i.id).key();
            model
                .field("label", |i| &i.label, |i| &mut i.label)
                .format(Format::Trim);
            model
                .field("secret", |i| &i.secret, |i| &mut i.secret)
                .behavior(Behavior::NOT_QUERY);
        }
    }

    fn resolve(body: Expr) -> Result<Option<FieldRef>> {
        let registry = Registry::new();
        let lambda = Lambda::new([Param::of::<Item>("i")], true);
        Resolver::new(&registry, &lambda).resolve(&body)
    }

    fn item(name: &str) -> Expr {
        Param::of::<Item>("i").member(name)
    }

    #[test]
    fn property() {
        let field = resolve(item("id")).unwrap().unwrap();
        assert_eq!(
            field.kind,
            FieldKind::Property(PropertyField {
                model: ModelRef::of::<Item>(),
                name: "id".into(),
                position: 0,
            })
        );
        assert!(!field.has_format());
    }

    #[test]
    fn default_format_is_innermost() {
        let field = resolve(item("label").char_length()).unwrap().unwrap();
        let chain: Vec<_> = field.formats().map(|setting| setting.format).collect();
        assert_eq!(chain, [Format::Trim, Format::CharLength]);
    }

    #[test]
    fn arithmetic_operand() {
        let field = resolve(item("id").add(1_i64)).unwrap().unwrap();
        let setting = field.formats().next().unwrap();
        assert_eq!(setting.format, Format::Add);
        assert_eq!(
            setting.operand.as_deref(),
            Some(&FieldRef::constant(1_i64))
        );
    }

    #[test]
    fn null_constant_is_none() {
        assert_eq!(resolve(Expr::null()).unwrap(), None);
        assert_eq!(
            resolve(Expr::captured(|| Option::<i32>::None)).unwrap(),
            None
        );
    }

    #[test]
    fn errors() {
        let err = resolve(item("missing")).unwrap_err();
        assert!(err.is_resolution());
        assert_eq!(
            err.to_string(),
            "cannot resolve field: Member: `Item` has no field `missing`"
        );

        assert!(resolve(item("secret")).unwrap_err().is_resolution());
        assert!(resolve(Param::of::<Item>("i").into()).unwrap_err().is_resolution());
        assert!(resolve(Param::of::<Item>("other").member("id"))
            .unwrap_err()
            .is_resolution());
        assert!(resolve(item("id").eq(1)).unwrap_err().is_resolution());
        assert!(resolve(item("id").member("x")).unwrap_err().is_resolution());
    }
}
