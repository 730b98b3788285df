use crate::model::field::QueryField;
use aqueduct_core::{AqlValue, SqlFragment};

/// Comparison operator carried by a criterion leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Equals,
    NotEquals,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Like,
    NotLike,
}

impl ComparisonOp {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            ComparisonOp::Equals => "=",
            ComparisonOp::NotEquals => "!=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterOrEqual => ">=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessOrEqual => "<=",
            ComparisonOp::Like => "like",
            ComparisonOp::NotLike => "not like",
        }
    }

    /// The rendering used when the compared value is SQL NULL.
    const fn null_sql(&self) -> &'static str {
        match self {
            ComparisonOp::NotEquals | ComparisonOp::NotLike => "is not null",
            _ => "is null",
        }
    }
}

/// A predicate leaf or boolean combinator subtree.
///
/// Leaves compare a field against one literal value. Combinators render as
/// parenthesized groups, so the emitted text preserves the tree shape
/// exactly. A leaf with a non-null value binds exactly one `?`; bound values
/// accumulate in depth-first leaf visitation order.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Leaf {
        field: QueryField,
        op: ComparisonOp,
        value: AqlValue,
    },
    And(Vec<Criterion>),
    Or(Vec<Criterion>),
}

impl Criterion {
    pub fn leaf(field: QueryField, op: ComparisonOp, value: impl Into<AqlValue>) -> Self {
        Criterion::Leaf {
            field,
            op,
            value: value.into(),
        }
    }

    pub fn and(children: Vec<Criterion>) -> Self {
        Criterion::And(children)
    }

    pub fn or(children: Vec<Criterion>) -> Self {
        Criterion::Or(children)
    }

    /// Renders this subtree into `out`, appending bound values as leaves are
    /// visited.
    pub(crate) fn render(&self, out: &mut SqlFragment) {
        match self {
            Criterion::Leaf { field, op, value } => {
                out.push_raw(&field.qualified());
                out.push_raw(" ");
                if value.is_null() {
                    out.push_raw(op.null_sql());
                } else {
                    out.push_raw(op.as_sql());
                    out.push_raw(" ");
                    out.push_param(value.clone());
                }
            }
            Criterion::And(children) => Self::render_group(children, " and ", out),
            Criterion::Or(children) => Self::render_group(children, " or ", out),
        }
    }

    fn render_group(children: &[Criterion], separator: &str, out: &mut SqlFragment) {
        out.push_raw("(");
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push_raw(separator);
            }
            child.render(out);
        }
        out.push_raw(")");
    }

    /// Visits every field referenced anywhere in the subtree.
    pub(crate) fn for_each_field<F: FnMut(QueryField)>(&self, f: &mut F) {
        match self {
            Criterion::Leaf { field, .. } => f(*field),
            Criterion::And(children) | Criterion::Or(children) => {
                for child in children {
                    child.for_each_field(f);
                }
            }
        }
    }
}
