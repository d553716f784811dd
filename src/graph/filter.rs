use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Either every node of a kind, or an explicit set of ids
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(Vec<T>),
}

impl<T: PartialEq> Selection<T> {
    /// Build a selection from dropdown values; no value and no ids both mean "all".
    pub fn from_ids(ids: Option<Vec<T>>) -> Self {
        match ids {
            Some(ids) if !ids.is_empty() => Selection::Only(ids),
            _ => Selection::All,
        }
    }

    pub fn contains(&self, id: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(ids) => ids.contains(id),
        }
    }

    /// The id when exactly one is selected
    pub fn single(&self) -> Option<&T> {
        match self {
            Selection::Only(ids) if ids.len() == 1 => ids.first(),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("all"),
            Selection::Only(ids) => ids.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de> + PartialEq> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Ids(Vec<T>),
            Keyword(String),
        }

        match Option::<Repr<T>>::deserialize(deserializer)? {
            None => Ok(Selection::All),
            Some(Repr::Ids(ids)) => Ok(Selection::from_ids(Some(ids))),
            Some(Repr::Keyword(k)) if k == "all" => Ok(Selection::All),
            Some(Repr::Keyword(k)) => Err(de::Error::custom(format!(
                "expected \"all\" or a list of ids, got '{}'",
                k
            ))),
        }
    }
}

/// Inclusive bounds on edge importance, as fractions in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportanceRange {
    pub low: f64,
    pub high: f64,
}

impl ImportanceRange {
    /// Slider values are whole percentages
    pub fn from_percent(low: f64, high: f64) -> Self {
        Self {
            low: low / 100.0,
            high: high / 100.0,
        }
    }

    pub fn contains(&self, importance: f64) -> bool {
        self.low <= importance && importance <= self.high
    }
}

impl Default for ImportanceRange {
    fn default() -> Self {
        Self::from_percent(0.0, 100.0)
    }
}

/// What a filtered load keeps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub importance_range: ImportanceRange,
    pub selected_legislators: Selection<String>,
    pub selected_topics: Selection<super::TopicId>,
}

impl FilterCriteria {
    pub fn from_percent(
        threshold: [f64; 2],
        selected_legislators: Selection<String>,
        selected_topics: Selection<super::TopicId>,
    ) -> Self {
        Self {
            importance_range: ImportanceRange::from_percent(threshold[0], threshold[1]),
            selected_legislators,
            selected_topics,
        }
    }
}
