use super::FieldRef;
use crate::stmt::BinaryOp;

/// A named transform applied to a field before it is compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    Trim,
    TrimStart,
    TrimEnd,
    CharLength,
    Upper,
    Lower,
    Max,
    Min,
    Avg,
    Sum,
    Count,
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    JsonExtract,
}

impl Format {
    pub fn from_binary_op(op: BinaryOp) -> Option<Self> {
        Some(match op {
            BinaryOp::Add => Self::Add,
            BinaryOp::Sub => Self::Sub,
            BinaryOp::Mul => Self::Mul,
            BinaryOp::Div => Self::Div,
            BinaryOp::Rem => Self::Rem,
            BinaryOp::BitAnd => Self::BitAnd,
            BinaryOp::BitOr => Self::BitOr,
            BinaryOp::BitXor => Self::BitXor,
            _ => return None,
        })
    }

    /// Formats that take one operand field.
    pub fn takes_operand(self) -> bool {
        matches!(
            self,
            Self::Concat
                | Self::Add
                | Self::Sub
                | Self::Mul
                | Self::Div
                | Self::Rem
                | Self::BitAnd
                | Self::BitOr
                | Self::BitXor
                | Self::JsonExtract
        )
    }

    /// Formats whose result is no longer a string, even over a string field.
    pub fn yields_number(self) -> bool {
        matches!(self, Self::CharLength | Self::Count)
    }
}

/// One link of a format chain. `next` is the next *outer* setting.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSetting {
    pub format: Format,
    pub operand: Option<Box<FieldRef>>,
    pub next: Option<Box<FormatSetting>>,
}

impl FormatSetting {
    pub fn new(format: Format, operand: Option<FieldRef>) -> Self {
        Self {
            format,
            operand: operand.map(Box::new),
            next: None,
        }
    }

    pub(crate) fn push_outer(&mut self, setting: FormatSetting) {
        match &mut self.next {
            Some(next) => next.push_outer(setting),
            None => self.next = Some(Box::new(setting)),
        }
    }
}
