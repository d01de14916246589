//! Gift keys and the per-user score map.
//!
//! Keys form a closed set shared by the quiz, the synergy matrix and the
//! ministry catalog. Anything outside it is dropped at the boundary.

use super::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// One of the seven motivational gifts. Declaration order is key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GiftKey {
    #[serde(rename = "A_PROPHECY")]
    Prophecy,
    #[serde(rename = "B_SERVICE")]
    Service,
    #[serde(rename = "C_TEACHING")]
    Teaching,
    #[serde(rename = "D_EXHORTATION")]
    Exhortation,
    #[serde(rename = "E_GIVING")]
    Giving,
    #[serde(rename = "F_LEADERSHIP")]
    Leadership,
    #[serde(rename = "G_MERCY")]
    Mercy,
}

impl GiftKey {
    pub const ALL: [GiftKey; 7] = [
        GiftKey::Prophecy,
        GiftKey::Service,
        GiftKey::Teaching,
        GiftKey::Exhortation,
        GiftKey::Giving,
        GiftKey::Leadership,
        GiftKey::Mercy,
    ];

    /// Raw key as used in quiz results and data files.
    pub fn as_str(self) -> &'static str {
        match self {
            GiftKey::Prophecy => "A_PROPHECY",
            GiftKey::Service => "B_SERVICE",
            GiftKey::Teaching => "C_TEACHING",
            GiftKey::Exhortation => "D_EXHORTATION",
            GiftKey::Giving => "E_GIVING",
            GiftKey::Leadership => "F_LEADERSHIP",
            GiftKey::Mercy => "G_MERCY",
        }
    }
}

impl fmt::Display for GiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GiftKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        GiftKey::ALL
            .into_iter()
            .find(|g| g.as_str() == key)
            .ok_or_else(|| DomainError::UnknownGift(key.to_string()))
    }
}

/// Clamp a raw quiz score: non-finite and negative values become 0.
fn sanitise(score: f64) -> f64 {
    if !score.is_finite() || score < 0.0 {
        return 0.0;
    }
    score
}

/// Score per gift for one user. Unique keys; last insert wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>", into = "BTreeMap<String, f64>")]
pub struct GiftScores {
    scores: BTreeMap<GiftKey, f64>,
    unknown_keys: Vec<String>,
}

impl GiftScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (GiftKey, f64)>) -> Self {
        let mut scores = Self::new();
        for (gift, score) in pairs {
            scores.insert(gift, score);
        }
        scores
    }

    /// Build from string-keyed input. Unknown keys are skipped and recorded.
    pub fn from_raw<K: AsRef<str>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Self {
        let mut scores = Self::new();
        for (key, score) in pairs {
            scores.insert_raw(key.as_ref(), score);
        }
        scores
    }

    pub fn insert(&mut self, gift: GiftKey, score: f64) {
        self.scores.insert(gift, sanitise(score));
    }

    /// Insert by raw key. Returns false when the key is not a known gift.
    pub fn insert_raw(&mut self, key: &str, score: f64) -> bool {
        match key.parse::<GiftKey>() {
            Ok(gift) => {
                self.insert(gift, score);
                true
            }
            Err(_) => {
                self.record_unknown(key);
                false
            }
        }
    }

    /// Record a raw key that is not a gift.
    pub fn record_unknown(&mut self, key: &str) {
        warn!(key, "skipping unknown gift key");
        self.unknown_keys.push(key.to_string());
    }

    pub fn get(&self, gift: GiftKey) -> Option<f64> {
        self.scores.get(&gift).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Raw keys that were dropped because they are not gifts.
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (GiftKey, f64)> + '_ {
        self.scores.iter().map(|(g, s)| (*g, *s))
    }

    /// All gifts ranked by score descending. Equal scores fall back to key order.
    pub fn ranked(&self) -> Vec<(GiftKey, f64)> {
        let mut ranked: Vec<(GiftKey, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// The `n` highest-scoring gifts, ranked as in [`GiftScores::ranked`].
    pub fn top(&self, n: usize) -> Vec<(GiftKey, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Keys of the `n` highest-scoring gifts.
    pub fn top_keys(&self, n: usize) -> Vec<GiftKey> {
        self.top(n).into_iter().map(|(g, _)| g).collect()
    }
}

/// Unknown keys may carry any value; gift keys must carry a number.
impl TryFrom<BTreeMap<String, Value>> for GiftScores {
    type Error = DomainError;

    fn try_from(raw: BTreeMap<String, Value>) -> Result<Self, Self::Error> {
        let mut scores = Self::new();
        for (key, value) in raw {
            let Ok(gift) = key.parse::<GiftKey>() else {
                scores.record_unknown(&key);
                continue;
            };
            let score = value.as_f64().ok_or_else(|| {
                DomainError::ScoreSource(format!(
                    "score for {} is not a number: {}",
                    gift, value
                ))
            })?;
            scores.insert(gift, score);
        }
        Ok(scores)
    }
}

impl From<GiftScores> for BTreeMap<String, f64> {
    fn from(scores: GiftScores) -> Self {
        scores
            .scores
            .into_iter()
            .map(|(g, s)| (g.as_str().to_string(), s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown_keys() {
        assert_eq!("C_TEACHING".parse::<GiftKey>().unwrap(), GiftKey::Teaching);
        assert_eq!(" G_MERCY ".parse::<GiftKey>().unwrap(), GiftKey::Mercy);
        assert!(matches!(
            "H_HOSPITALITY".parse::<GiftKey>(),
            Err(DomainError::UnknownGift(k)) if k == "H_HOSPITALITY"
        ));
    }

    #[test]
    fn test_key_order_matches_lexical_order() {
        let mut names: Vec<&str> = GiftKey::ALL.iter().map(|g| g.as_str()).collect();
        let declared = names.clone();
        names.sort();
        assert_eq!(names, declared);
    }

    #[test]
    fn test_ranked_breaks_ties_by_key() {
        let scores = GiftScores::from_pairs([
            (GiftKey::Mercy, 50.0),
            (GiftKey::Service, 70.0),
            (GiftKey::Prophecy, 50.0),
            (GiftKey::Giving, 50.0),
        ]);
        assert_eq!(
            scores.top_keys(4),
            vec![
                GiftKey::Service,
                GiftKey::Prophecy,
                GiftKey::Giving,
                GiftKey::Mercy
            ]
        );
    }

    #[test]
    fn test_top_is_bounded_by_entries() {
        let scores = GiftScores::from_pairs([(GiftKey::Teaching, 10.0)]);
        assert_eq!(scores.top(3).len(), 1);
        assert!(GiftScores::new().top(3).is_empty());
    }

    #[test]
    fn test_invalid_scores_are_sanitised() {
        let mut scores = GiftScores::new();
        scores.insert(GiftKey::Giving, -5.0);
        scores.insert(GiftKey::Mercy, f64::NAN);
        scores.insert(GiftKey::Service, 12.5);
        assert_eq!(scores.get(GiftKey::Giving), Some(0.0));
        assert_eq!(scores.get(GiftKey::Mercy), Some(0.0));
        assert_eq!(scores.get(GiftKey::Service), Some(12.5));
    }

    #[test]
    fn test_duplicate_insert_keeps_last() {
        let scores = GiftScores::from_pairs([(GiftKey::Teaching, 10.0), (GiftKey::Teaching, 30.0)]);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(GiftKey::Teaching), Some(30.0));
    }

    #[test]
    fn test_from_raw_records_unknown_keys() {
        let scores = GiftScores::from_raw([("A_PROPHECY", 90.0), ("Z_UNKNOWN", 99.0)]);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.unknown_keys(), ["Z_UNKNOWN".to_string()]);
    }

    #[test]
    fn test_deserialize_json_object() {
        let scores: GiftScores =
            serde_json::from_str(r#"{"C_TEACHING": 85, "A_PROPHECY": 90, "nope": 1}"#).unwrap();
        assert_eq!(scores.top_keys(2), vec![GiftKey::Prophecy, GiftKey::Teaching]);
        assert_eq!(scores.unknown_keys().len(), 1);

        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"A_PROPHECY":90.0,"C_TEACHING":85.0}"#);
    }

    #[test]
    fn test_deserialize_skips_non_numeric_extra_fields() {
        let scores: GiftScores = serde_json::from_str(
            r#"{"A_PROPHECY": 90, "C_TEACHING": 85, "user": "ana", "meta": {"v": 2}}"#,
        )
        .unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(GiftKey::Teaching), Some(85.0));
        assert_eq!(scores.unknown_keys(), ["meta".to_string(), "user".to_string()]);
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_gift_score() {
        let result = serde_json::from_str::<GiftScores>(r#"{"A_PROPHECY": "high"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("A_PROPHECY"), "{}", err);
    }
}
