use crate::model::notification::{DayGroup, Notification};

pub struct NotificationScreen {
    feed: Vec<Notification>,
}

impl Default for NotificationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationScreen {
    pub fn new() -> Self {
        Self {
            feed: Notification::feed(),
        }
    }

    /// Notifications grouped by day, newest group first.
    pub fn grouped(&self) -> Vec<(DayGroup, Vec<&Notification>)> {
        let mut groups: Vec<(DayGroup, Vec<&Notification>)> = Vec::new();
        for item in &self.feed {
            match groups.iter_mut().find(|(day, _)| *day == item.day) {
                Some((_, items)) => items.push(item),
                None => groups.push((item.day, vec![item])),
            }
        }
        groups.sort_by_key(|(day, _)| *day);
        groups
    }
}
