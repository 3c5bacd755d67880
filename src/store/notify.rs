use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
    /// Neutral detail, no status implied
    Plain,
}

/// A transient status message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>) -> Self {
        Notice {
            level,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title)
    }

    /// `title` or `title: description`
    pub fn text(&self) -> String {
        match &self.description {
            Some(d) => format!("{}: {}", self.title, d),
            None => self.title.clone(),
        }
    }
}

/// Most notices kept in memory; older ones are dropped
pub const NOTICE_CAP: usize = 50;

/// Bounded notice log. Presentation decides how long each one shows.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
    /// Notices evicted from the front so far
    dropped: usize,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        tracing::debug!(title = %notice.title, "notice");
        self.items.push(notice);
        if self.items.len() > NOTICE_CAP {
            let excess = self.items.len() - NOTICE_CAP;
            self.items.drain(..excess);
            self.dropped += excess;
        }
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }

    /// Total pushed so far, including evicted ones; lets a renderer notice
    /// new arrivals
    pub fn count(&self) -> usize {
        self.dropped + self.items.len()
    }

    /// Notices still held that were pushed after the first `count`
    pub fn since(&self, count: usize) -> &[Notice] {
        let start = count.saturating_sub(self.dropped).min(self.items.len());
        &self.items[start..]
    }

    pub fn all(&self) -> &[Notice] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::success("Saved").text(), "Saved");
        assert_eq!(
            Notice::info("Event Details").with_description("Standup").text(),
            "Event Details: Standup"
        );
    }

    #[test]
    fn test_latest_and_count() {
        let mut n = Notices::default();
        assert!(n.latest().is_none());
        n.push(Notice::info("a"));
        n.push(Notice::error("b"));
        assert_eq!(n.count(), 2);
        assert_eq!(n.latest().map(|x| x.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn test_queue_is_capped() {
        let mut n = Notices::default();
        for i in 0..NOTICE_CAP + 7 {
            n.push(Notice::info(format!("n{}", i)));
        }
        assert_eq!(n.all().len(), NOTICE_CAP);
        assert_eq!(n.count(), NOTICE_CAP + 7);
        assert_eq!(n.all()[0].title, "n7");
        assert_eq!(
            n.latest().map(|x| x.title.as_str()),
            Some(format!("n{}", NOTICE_CAP + 6).as_str())
        );
    }

    #[test]
    fn test_since_survives_eviction() {
        let mut n = Notices::default();
        for i in 0..NOTICE_CAP {
            n.push(Notice::info(format!("n{}", i)));
        }
        let before = n.count();
        n.push(Notice::success("fresh"));
        let new = n.since(before);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].title, "fresh");
        assert!(n.since(n.count()).is_empty());
        // A mark older than anything still held returns everything held
        assert_eq!(n.since(0).len(), NOTICE_CAP);
    }
}
