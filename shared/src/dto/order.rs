//! # Order DTOs
//!
//! Structured order intents produced by the agent console parser, and the
//! simulated smart orders that carry them through execution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Discriminant of an [`OrderIntent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    Market,
    Smart,
    Trailing,
    Exit,
    Invalid,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Market => "market",
            IntentKind::Smart => "smart",
            IntentKind::Trailing => "trailing",
            IntentKind::Exit => "exit",
            IntentKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which leg a trailing order follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrailSide {
    Tp,
    Sl,
}

impl TrailSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailSide::Tp => "TP",
            TrailSide::Sl => "SL",
        }
    }
}

/// Trigger for an exit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExitCondition {
    Profit,
    Volume,
    Holders,
}

impl ExitCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitCondition::Profit => "PROFIT",
            ExitCondition::Volume => "VOLUME",
            ExitCondition::Holders => "HOLDERS",
        }
    }
}

/// Result of parsing one console command.
///
/// Created fresh per command string and never mutated afterwards.
/// `Invalid` carries the reason the command was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OrderIntent {
    /// `BUY <amount> <symbol>`
    Market { symbol: String, amount: f64 },
    /// `SMART <symbol> TP <price> SL <price> DCA <levels>`
    Smart {
        symbol: String,
        take_profit: f64,
        stop_loss: f64,
        dca_levels: u32,
    },
    /// `TRAIL <symbol> <TP|SL> <percent>`
    Trailing {
        symbol: String,
        side: TrailSide,
        trailing_percent: f64,
    },
    /// `EXIT <symbol> ON <PROFIT|VOLUME|HOLDERS>`
    Exit {
        symbol: String,
        condition: ExitCondition,
    },
    Invalid { validation_error: String },
}

impl OrderIntent {
    pub fn kind(&self) -> IntentKind {
        match self {
            OrderIntent::Market { .. } => IntentKind::Market,
            OrderIntent::Smart { .. } => IntentKind::Smart,
            OrderIntent::Trailing { .. } => IntentKind::Trailing,
            OrderIntent::Exit { .. } => IntentKind::Exit,
            OrderIntent::Invalid { .. } => IntentKind::Invalid,
        }
    }

    /// Asset ticker, absent for invalid intents
    pub fn symbol(&self) -> Option<&str> {
        match self {
            OrderIntent::Market { symbol, .. }
            | OrderIntent::Smart { symbol, .. }
            | OrderIntent::Trailing { symbol, .. }
            | OrderIntent::Exit { symbol, .. } => Some(symbol),
            OrderIntent::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, OrderIntent::Invalid { .. })
    }

    pub fn validation_error(&self) -> Option<&str> {
        match self {
            OrderIntent::Invalid { validation_error } => Some(validation_error),
            _ => None,
        }
    }

    /// One-line summary for the console
    pub fn describe(&self) -> String {
        match self {
            OrderIntent::Market { symbol, amount } => {
                format!("Market buy {} {}", amount, symbol)
            }
            OrderIntent::Smart {
                symbol,
                take_profit,
                stop_loss,
                dca_levels,
            } => format!(
                "Smart order {} TP {} / SL {} across {} DCA levels",
                symbol, take_profit, stop_loss, dca_levels
            ),
            OrderIntent::Trailing {
                symbol,
                side,
                trailing_percent,
            } => format!("Trailing {} on {} at {}%", side.as_str(), symbol, trailing_percent),
            OrderIntent::Exit { symbol, condition } => {
                format!("Exit {} on {}", symbol, condition.as_str())
            }
            OrderIntent::Invalid { validation_error } => format!("Invalid: {}", validation_error),
        }
    }
}

/// Simulated order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Validating,
    Executing,
    Completed,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Validating => "validating",
            OrderStatus::Executing => "executing",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Failed)
    }

    /// Legal edges of `draft -> validating -> executing -> {completed | failed}`.
    /// Validation may also fail straight to `failed`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Draft, OrderStatus::Validating)
                | (OrderStatus::Validating, OrderStatus::Executing)
                | (OrderStatus::Validating, OrderStatus::Failed)
                | (OrderStatus::Executing, OrderStatus::Completed)
                | (OrderStatus::Executing, OrderStatus::Failed)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a smart order's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
}

/// An order intent travelling through the simulated lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartOrder {
    pub id: Uuid,
    pub intent: OrderIntent,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    pub history: Vec<StatusChange>,
}

impl SmartOrder {
    /// Wrap an intent in a fresh `draft` order
    pub fn draft(intent: OrderIntent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            intent,
            status: OrderStatus::Draft,
            created_at: now,
            updated_at: now,
            failure_reason: None,
            history: vec![StatusChange {
                status: OrderStatus::Draft,
                at: now,
            }],
        }
    }

    /// Move to `next`, recording it in the history.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), IllegalTransition> {
        if !self.status.can_transition_to(next) {
            return Err(IllegalTransition {
                from: self.status,
                to: next,
            });
        }
        let now = Utc::now();
        self.status = next;
        self.updated_at = now;
        self.history.push(StatusChange { status: next, at: now });
        Ok(())
    }

    /// Move to `failed` with a reason
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), IllegalTransition> {
        self.transition(OrderStatus::Failed)?;
        self.failure_reason = Some(reason.into());
        Ok(())
    }

    /// First 8 characters of the id, for tables
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

// region:    --- Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalTransition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl fmt::Display for IllegalTransition {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "illegal order transition {} -> {}", self.from, self.to)
    }
}

impl std::error::Error for IllegalTransition {}
// endregion: --- Error
