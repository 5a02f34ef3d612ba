use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::analytics::{PerformanceStatus, Role, RuleRecord};

/// Event names on the wire
pub const UPDATE_CHART: &str = "update_chart";
pub const RESET_CHART: &str = "reset_chart";
pub const TEAM_RULES: &str = "team_rules";
pub const UPDATE_RULES: &str = "update_hidden_rules_div";
pub const PERFORMANCE_UPDATE: &str = "performance_update";

/// Raw message as pushed by the backend: an event name plus an arbitrary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

/// Performance of a single role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleReport {
    pub text: String,
    pub status: PerformanceStatus,
}

/// Per-role performance pushed after every stats update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub tank: RoleReport,
    pub damage: RoleReport,
    pub support: RoleReport,
    #[serde(default)]
    pub team_composition: Vec<String>,
}

impl PerformanceReport {
    pub fn get(&self, role: Role) -> &RoleReport {
        match role {
            Role::Tank => &self.tank,
            Role::Damage => &self.damage,
            Role::Support => &self.support,
        }
    }
}

/// Payload of a full rules table push
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RulesTablePayload {
    #[serde(default)]
    table_html: String,
    #[serde(default)]
    rules: Option<Value>,
}

/// A decoded dashboard message.
///
/// Rule sets are `None` when the payload was missing or could not be decoded;
/// the dispatcher treats that as "no data".
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMessage {
    /// Latest win probability in [0, 1]
    WinProbability(f64),
    /// Start a new series
    ChartReset,
    /// Full rules table: HTML for display plus the rules behind it
    RulesTable {
        table_html: String,
        rules: Option<Vec<RuleRecord>>,
    },
    /// Rules only
    RulesUpdate(Option<Vec<RuleRecord>>),
    /// Per-role performance
    Performance(PerformanceReport),
}

impl DashboardMessage {
    /// Wire name of this message
    pub fn event_name(&self) -> &'static str {
        match self {
            DashboardMessage::WinProbability(_) => UPDATE_CHART,
            DashboardMessage::ChartReset => RESET_CHART,
            DashboardMessage::RulesTable { .. } => TEAM_RULES,
            DashboardMessage::RulesUpdate(_) => UPDATE_RULES,
            DashboardMessage::Performance(_) => PERFORMANCE_UPDATE,
        }
    }

    /// Decode one JSON line
    pub fn from_json(line: &str) -> Result<Self, DecodeError> {
        let envelope: Envelope = serde_json::from_str(line).map_err(DecodeError::Envelope)?;
        Self::try_from(envelope)
    }

    /// Encode as one JSON line
    pub fn to_json(&self) -> String {
        Envelope::from(self.clone()).to_json()
    }

    /// Short human readable summary for the message log
    pub fn summary(&self) -> String {
        match self {
            DashboardMessage::WinProbability(p) => format!("win {:.1}%", p * 100.0),
            DashboardMessage::ChartReset => "chart reset".to_string(),
            DashboardMessage::RulesTable { rules, .. } => match rules {
                Some(rules) => format!("rules table, {} rules", rules.len()),
                None => "rules table, no rules".to_string(),
            },
            DashboardMessage::RulesUpdate(rules) => match rules {
                Some(rules) => format!("{} rules", rules.len()),
                None => "malformed rules".to_string(),
            },
            DashboardMessage::Performance(report) => format!(
                "T:{} D:{} S:{}",
                report.tank.status.as_str(),
                report.damage.status.as_str(),
                report.support.status.as_str()
            ),
        }
    }
}

/// Why a line could not be turned into a message
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed message envelope: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("unknown event `{0}`")]
    UnknownEvent(String),
    #[error("malformed `{event}` payload: {source}")]
    Payload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn decode_rules(event: &'static str, value: Option<Value>) -> Option<Vec<RuleRecord>> {
    let value = value?;
    match serde_json::from_value(value) {
        Ok(rules) => Some(rules),
        Err(e) => {
            tracing::warn!(event, error = %e, "malformed rules payload");
            None
        }
    }
}

impl TryFrom<Envelope> for DashboardMessage {
    type Error = DecodeError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        match envelope.event.as_str() {
            UPDATE_CHART => serde_json::from_value(envelope.data)
                .map(DashboardMessage::WinProbability)
                .map_err(|source| DecodeError::Payload {
                    event: UPDATE_CHART,
                    source,
                }),
            RESET_CHART => Ok(DashboardMessage::ChartReset),
            TEAM_RULES => {
                let payload: RulesTablePayload = serde_json::from_value(envelope.data)
                    .map_err(|source| DecodeError::Payload {
                        event: TEAM_RULES,
                        source,
                    })?;
                Ok(DashboardMessage::RulesTable {
                    table_html: payload.table_html,
                    rules: decode_rules(TEAM_RULES, payload.rules),
                })
            }
            UPDATE_RULES => {
                let value = (!envelope.data.is_null()).then_some(envelope.data);
                Ok(DashboardMessage::RulesUpdate(decode_rules(UPDATE_RULES, value)))
            }
            PERFORMANCE_UPDATE => serde_json::from_value(envelope.data)
                .map(DashboardMessage::Performance)
                .map_err(|source| DecodeError::Payload {
                    event: PERFORMANCE_UPDATE,
                    source,
                }),
            _ => Err(DecodeError::UnknownEvent(envelope.event)),
        }
    }
}

impl From<DashboardMessage> for Envelope {
    fn from(message: DashboardMessage) -> Self {
        let event = message.event_name().to_string();
        let data = match message {
            DashboardMessage::WinProbability(p) => Value::from(p),
            DashboardMessage::ChartReset => Value::Null,
            DashboardMessage::RulesTable { table_html, rules } => {
                let mut payload = serde_json::Map::new();
                payload.insert("table_html".to_string(), Value::String(table_html));
                if let Some(rules) = rules {
                    payload.insert("rules".to_string(), rules_to_value(rules));
                }
                Value::Object(payload)
            }
            DashboardMessage::RulesUpdate(rules) => {
                rules.map(rules_to_value).unwrap_or(Value::Null)
            }
            DashboardMessage::Performance(report) => {
                serde_json::to_value(report).unwrap_or(Value::Null)
            }
        };
        Envelope { event, data }
    }
}

fn rules_to_value(rules: Vec<RuleRecord>) -> Value {
    serde_json::to_value(rules).unwrap_or_else(|_| Value::Array(Vec::new()))
}

impl Envelope {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
