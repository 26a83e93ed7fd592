use super::{Connector, Criterion};

/// An ordered tree of criteria and nested groups.
///
/// Entries combine left to right: `e0 c1 e1 c2 e2` reads as
/// `((e0 c1 e1) c2 e2)`. The first entry's connector says how the group
/// attaches to its own siblings and is not used inside the group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionGroup {
    pub connector: Connector,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Criterion(Criterion),
    Group(ConditionGroup),
}

impl ConditionGroup {
    pub fn new(connector: Connector) -> Self {
        Self {
            connector,
            entries: vec![],
        }
    }

    pub fn from_entries(connector: Connector, entries: Vec<Entry>) -> Self {
        Self { connector, entries }
    }

    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if every entry after the first joins with `connector`,
    /// so the entries can be spliced into a group using that connector
    /// without regrouping.
    pub fn is_uniform(&self, connector: Connector) -> bool {
        self.entries
            .iter()
            .skip(1)
            .all(|entry| entry.connector() == connector)
    }

    /// Complements every operator and flips every connector, recursively.
    ///
    /// Under left-to-right combination this is De Morgan's law applied at
    /// every level, so the result is the logical negation of the group and
    /// `negate` twice is the identity.
    pub fn negate(&mut self) {
        self.connector = self.connector.flip();
        for entry in &mut self.entries {
            entry.negate();
        }
    }

    pub fn negated(mut self) -> Self {
        self.negate();
        self
    }

    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> {
        self.entries.iter().filter_map(Entry::as_criterion)
    }

    /// Evaluates the group, deciding each criterion with `f`. An empty group
    /// is `true`.
    pub fn evaluate(&self, f: &mut impl FnMut(&Criterion) -> bool) -> bool {
        let mut entries = self.entries.iter();
        let Some(first) = entries.next() else {
            return true;
        };

        let mut acc = first.evaluate(f);
        for entry in entries {
            let value = entry.evaluate(f);
            acc = match entry.connector() {
                Connector::And => acc && value,
                Connector::Or => acc || value,
            };
        }
        acc
    }
}

impl Entry {
    pub fn connector(&self) -> Connector {
        match self {
            Self::Criterion(criterion) => criterion.connector,
            Self::Group(group) => group.connector,
        }
    }

    pub fn set_connector(&mut self, connector: Connector) {
        match self {
            Self::Criterion(criterion) => criterion.connector = connector,
            Self::Group(group) => group.connector = connector,
        }
    }

    pub fn negate(&mut self) {
        match self {
            Self::Criterion(criterion) => criterion.negate(),
            Self::Group(group) => group.negate(),
        }
    }

    pub fn as_criterion(&self) -> Option<&Criterion> {
        match self {
            Self::Criterion(criterion) => Some(criterion),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&ConditionGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    fn evaluate(&self, f: &mut impl FnMut(&Criterion) -> bool) -> bool {
        match self {
            Self::Criterion(criterion) => f(criterion),
            Self::Group(group) => group.evaluate(f),
        }
    }
}

impl From<Criterion> for Entry {
    fn from(value: Criterion) -> Self {
        Self::Criterion(value)
    }
}

impl From<ConditionGroup> for Entry {
    fn from(value: ConditionGroup) -> Self {
        Self::Group(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FieldRef, Operator};

    fn criterion(id: i64, connector: Connector) -> Criterion {
        Criterion::new(
            Operator::Equal,
            FieldRef::constant(id),
            FieldRef::constant(true),
        )
        .with_connector(connector)
    }

    /// Decides `Equal(id, _)` from bit `id` of `bits`, and its complement
    /// as the opposite.
    fn decide(bits: u32) -> impl FnMut(&Criterion) -> bool {
        move |c| {
            let id = c.left.as_constant().and_then(|v| v.as_i128()).unwrap_or(0);
            let bit = bits & (1 << id) != 0;
            match c.op {
                Operator::Equal => bit,
                _ => !bit,
            }
        }
    }

    #[test]
    fn negate_is_logical_negation() {
        // a OR (b AND c) AND d
        let mut inner = ConditionGroup::new(Connector::Or);
        inner.push(criterion(1, Connector::And));
        inner.push(criterion(2, Connector::And));

        let mut group = ConditionGroup::new(Connector::And);
        group.push(criterion(0, Connector::And));
        group.push(inner);
        group.push(criterion(3, Connector::And));

        let negated = group.clone().negated();
        for bits in 0..16 {
            assert_eq!(
                group.evaluate(&mut decide(bits)),
                !negated.evaluate(&mut decide(bits)),
                "bits={bits:04b}"
            );
        }
    }

    #[test]
    fn negate_twice_is_identity() {
        let mut group = ConditionGroup::new(Connector::Or);
        group.push(criterion(0, Connector::And));
        group.push(criterion(1, Connector::Or));

        assert_eq!(group.clone().negated().negated(), group);
    }

    #[test]
    fn uniform() {
        let mut group = ConditionGroup::new(Connector::And);
        group.push(criterion(0, Connector::Or));
        group.push(criterion(1, Connector::And));
        assert!(group.is_uniform(Connector::And));
        assert!(!group.is_uniform(Connector::Or));
    }
}
