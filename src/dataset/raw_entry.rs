//! Raw word list entries as published by the complete-hsk-vocabulary project.
//! Older offline packs use flat `y` / `english` fields, so both shapes are accepted.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTranscriptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForm {
    #[serde(default)]
    pub m: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub s: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<RawTranscriptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub f: Vec<RawForm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default)]
    pub p: Vec<String>,
}

impl RawEntry {
    pub fn new(hanzi: &str, pinyin: &str, english: &str, pos: &[&str]) -> Self {
        Self {
            s: hanzi.to_string(),
            i: Some(RawTranscriptions {
                y: Some(pinyin.to_string()),
            }),
            y: None,
            f: vec![RawForm {
                m: vec![english.to_string()],
            }],
            english: None,
            p: pos.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn pinyin(&self) -> String {
        self.i
            .as_ref()
            .and_then(|i| i.y.clone())
            .or_else(|| self.y.clone())
            .unwrap_or_default()
    }

    /// First meaning of the first form, falling back to the flat `english` field.
    pub fn english(&self) -> String {
        self.f
            .first()
            .and_then(|form| form.m.first().cloned())
            .or_else(|| self.english.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_published_shape() {
        let json = r#"{"s":"你好","i":{"y":"nǐ hǎo"},"f":[{"m":["hello","hi"]}],"p":["i"]}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.s, "你好");
        assert_eq!(entry.pinyin(), "nǐ hǎo");
        assert_eq!(entry.english(), "hello");
        assert_eq!(entry.p, vec!["i".to_string()]);
    }

    #[test]
    fn test_parse_flat_shape() {
        let json = r#"{"s":"书","y":"shū","english":"book"}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.pinyin(), "shū");
        assert_eq!(entry.english(), "book");
        assert!(entry.p.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let entry: RawEntry = serde_json::from_str(r#"{"s":"的"}"#).unwrap();
        assert_eq!(entry.pinyin(), "");
        assert_eq!(entry.english(), "");
    }
}
