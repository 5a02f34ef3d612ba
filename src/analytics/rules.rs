use serde::{Deserialize, Serialize};

/// A single association rule as pushed by the analytics backend.
///
/// Only `rhs` matters for role aggregation; the remaining fields ride along so
/// the demo backend can rank and filter rules the same way the real one does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Left-hand side, e.g. `{TANK=good, YOU=Moira}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lhs: Option<String>,
    /// Right-hand side, e.g. `{YOU=Illari, OTHER=Moira}`
    #[serde(default)]
    pub rhs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift: Option<f64>,
}

impl RuleRecord {
    pub fn new(rhs: impl Into<String>) -> Self {
        Self {
            rhs: rhs.into(),
            ..Self::default()
        }
    }
}

/// Extract hero identifiers from the right-hand side of every rule.
///
/// Parsing is lenient: items without a value are skipped and nothing here
/// can fail. A corrupt rule lowers the counts instead of aborting the pass.
pub fn extract_heroes(rules: &[RuleRecord]) -> Vec<String> {
    rules
        .iter()
        .flat_map(|rule| rhs_values(&rule.rhs))
        .map(str::to_string)
        .collect()
}

/// Values of a `{KEY=value, KEY=value}` string, in order.
fn rhs_values(rhs: &str) -> impl Iterator<Item = &str> {
    rhs.trim()
        .trim_matches(|c| c == '{' || c == '}')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| {
            // Label is the first segment, value the second, so `A=b=c` yields `b`.
            // This matches the upstream dashboard's parser.
            let value = item.split('=').nth(1)?.trim();
            let value = value.trim_matches(|c| c == '{' || c == '}').trim();
            (!value.is_empty()).then_some(value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_two_heroes() {
        let rules = vec![RuleRecord::new("{YOU=Illari, OTHER=Moira}")];
        assert_eq!(extract_heroes(&rules), vec!["Illari", "Moira"]);
    }

    #[test]
    fn test_extract_keeps_rule_order() {
        let rules = vec![
            RuleRecord::new("{CHAR_1_DPS=Genji}"),
            RuleRecord::new("  { YOU = Ana ,  TANK_1=Winston }  "),
        ];
        assert_eq!(extract_heroes(&rules), vec!["Genji", "Ana", "Winston"]);
    }

    #[test]
    fn test_empty_rhs_contributes_nothing() {
        let rules = vec![RuleRecord::new("{}"), RuleRecord::new("   "), RuleRecord::new("")];
        assert!(extract_heroes(&rules).is_empty());
    }

    #[test]
    fn test_item_without_equals_is_skipped() {
        let rules = vec![RuleRecord::new("{garbage}")];
        assert!(extract_heroes(&rules).is_empty());
    }

    #[test]
    fn test_item_with_empty_value_is_skipped() {
        let rules = vec![RuleRecord::new("{YOU=, OTHER=Mercy,,}")];
        assert_eq!(extract_heroes(&rules), vec!["Mercy"]);
    }

    #[test]
    fn test_extra_equals_uses_second_segment() {
        let rules = vec![RuleRecord::new("{YOU=Ana=extra}")];
        assert_eq!(extract_heroes(&rules), vec!["Ana"]);
    }

    #[test]
    fn test_missing_rhs_field_deserializes_empty() {
        let rule: RuleRecord = serde_json::from_str(r#"{"lhs": "{YOU=Ana}", "lift": 1.4}"#).unwrap();
        assert_eq!(rule.rhs, "");
        assert_eq!(rule.lift, Some(1.4));
        assert!(extract_heroes(&[rule]).is_empty());
    }
}
