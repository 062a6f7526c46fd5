use crate::domain::{Label, Row, Score, ZeroCountError};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Anything that carries a sentiment label and can be counted in a [`Summary`].
pub trait Labeled {
    fn label(&self) -> Label;
}

impl Labeled for Label {
    fn label(&self) -> Label {
        *self
    }
}

impl Labeled for Row {
    fn label(&self) -> Label {
        self.label
    }
}

impl Labeled for (Label, Score) {
    fn label(&self) -> Label {
        self.0
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> Label {
        (**self).label()
    }
}

/// Count of rows per label over one batch.
///
/// Only labels that occurred are stored, so a batch without Neutral rows has no
/// Neutral entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    counts: BTreeMap<Label, usize>,
}

impl Summary {
    pub fn get(&self, label: Label) -> Option<usize> {
        self.counts.get(&label).copied()
    }

    /// Number of distinct labels present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of rows counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries ordered by descending count, ties broken by label order.
    pub fn iter_ranked(&self) -> Vec<(Label, usize)> {
        let mut ranked: Vec<(Label, usize)> = self
            .counts
            .iter()
            .map(|(label, count)| (*label, *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

impl FromIterator<Label> for Summary {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for label in iter {
            *counts.entry(label).or_insert(0) += 1;
        }
        Self { counts }
    }
}

impl TryFrom<BTreeMap<Label, usize>> for Summary {
    type Error = ZeroCountError;

    fn try_from(counts: BTreeMap<Label, usize>) -> Result<Self, Self::Error> {
        if let Some((&label, _)) = counts.iter().find(|&(_, &count)| count == 0) {
            return Err(ZeroCountError { label });
        }
        Ok(Self { counts })
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let counts = BTreeMap::<Label, usize>::deserialize(deserializer)?;
        Self::try_from(counts).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sentiment")?;
        for (label, count) in self.iter_ranked() {
            writeln!(f, "{label:<12}{count:>6}")?;
        }
        Ok(())
    }
}
