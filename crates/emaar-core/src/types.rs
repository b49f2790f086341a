use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// =============================================================================
// Newtype Wrappers - Temporal
// =============================================================================

/// Wall-clock instant a message was minted, in local time.
///
/// Compared by value. Two Timestamps with the same inner value are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Local>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Local::now())
    }

    pub fn from_datetime(dt: DateTime<Local>) -> Self {
        Self(dt)
    }

    pub fn to_datetime(&self) -> DateTime<Local> {
        self.0
    }

    /// Clock time as shown next to a chat bubble, e.g. `03:07 PM`.
    pub fn time_label(&self) -> String {
        self.0.format("%I:%M %p").to_string()
    }

    /// Calendar date as shown in the message list, e.g. `Mar 04, 2025`.
    pub fn date_label(&self) -> String {
        self.0.format("%b %d, %Y").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

// =============================================================================
// Newtype Wrappers - Identity
// =============================================================================

/// Identifier of a message record within a conversation.
///
/// Minted from a monotonic counter, so ordering by id equals append order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_labels() {
        let dt = Local.with_ymd_and_hms(2025, 3, 4, 15, 7, 0).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.time_label(), "03:07 PM");
        assert_eq!(ts.date_label(), "Mar 04, 2025");
        assert_eq!(ts.to_datetime(), dt);
    }

    #[test]
    fn test_timestamp_ordering() {
        let earlier = Timestamp::from_datetime(Local.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Local.with_ymd_and_hms(2025, 1, 1, 9, 0, 1).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn test_timestamp_serde_roundtrip() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn test_message_id_ordering_and_display() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(MessageId(42).to_string(), "42");
    }
}
