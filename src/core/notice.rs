use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// A user-facing message that dismisses itself after `ttl`.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self::raised_at(message, ttl, Utc::now())
    }

    pub fn raised_at(message: impl Into<String>, ttl: Duration, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            raised_at,
            ttl,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        let ttl = TimeDelta::from_std(self.ttl).unwrap_or(TimeDelta::MAX);
        self.raised_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// Notices currently on screen.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drop every expired notice and hand them back.
    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) -> Vec<Notice> {
        let (expired, active) = std::mem::take(&mut self.notices)
            .into_iter()
            .partition(|notice| notice.is_expired(now));
        self.notices = active;
        expired
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let start = Utc::now();
        let notice = Notice::raised_at("boom", Duration::from_secs(5), start);

        assert!(!notice.is_expired(start));
        assert!(!notice.is_expired(start + TimeDelta::milliseconds(4_999)));
        assert!(notice.is_expired(start + TimeDelta::seconds(5)));
    }

    #[test]
    fn test_board_dismisses_only_expired() {
        let start = Utc::now();
        let mut board = NoticeBoard::new();
        board.push(Notice::raised_at("old", Duration::from_secs(1), start));
        board.push(Notice::raised_at("fresh", Duration::from_secs(10), start));

        let dismissed = board.dismiss_expired(start + TimeDelta::seconds(2));

        assert_eq!(dismissed.len(), 1);
        assert_eq!(dismissed[0].message, "old");
        assert_eq!(board.active().len(), 1);
        assert_eq!(board.active()[0].message, "fresh");
    }
}
