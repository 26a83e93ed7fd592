mod eval;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_captured;
pub use expr_captured::ExprCaptured;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_list;
pub use expr_list::ExprList;

mod expr_member;
pub use expr_member::ExprMember;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod lambda;
pub use lambda::{Lambda, Param};

mod method;
pub use method::Method;

mod op_binary;
pub use op_binary::BinaryOp;

mod primitive;
pub use primitive::Primitive;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
