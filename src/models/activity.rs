use serde::Serialize;

// One activity as stored and as listed. The name is the store key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_tracks_participant_count() {
        let activity = Activity::new("Board games", "Fridays", 2).with_participants(&["a@x.edu"]);
        assert!(!activity.is_full());

        let activity = activity.with_participants(&["a@x.edu", "b@x.edu", "c@x.edu"]);
        assert!(activity.is_full());
    }

    #[test]
    fn serializes_without_name_field() {
        let activity = Activity::new("Board games", "Fridays", 8).with_participants(&["a@x.edu"]);
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Board games",
                "schedule": "Fridays",
                "max_participants": 8,
                "participants": ["a@x.edu"],
            })
        );
    }
}
