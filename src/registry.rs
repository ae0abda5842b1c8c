use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::activity::Activity;

/// In-memory store of all activities, keyed by activity name. Constructed
/// once at startup; the key set never changes afterwards, only rosters do.
pub struct ActivityRegistry {
    activities: HashMap<String, Activity>,
}

impl ActivityRegistry {
    pub fn with_seed_data() -> Self {
        let mut activities = HashMap::new();

        activities.insert(
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        activities.insert(
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        );
        activities.insert(
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        );
        activities.insert(
            "Soccer Club".to_string(),
            Activity::new(
                "Join the school soccer team and compete in local matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
        );
        activities.insert(
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
        );
        activities.insert(
            "Art Club".to_string(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
        );
        activities.insert(
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
        );
        activities.insert(
            "Math Club".to_string(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(&["james@mergington.edu", "benjamin@mergington.edu"]),
        );
        activities.insert(
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(&["charlotte@mergington.edu", "henry@mergington.edu"]),
        );

        ActivityRegistry { activities }
    }

    pub fn list(&self) -> &HashMap<String, Activity> {
        &self.activities
    }

    /// Appends the email to the activity's roster.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> AppResult<()> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(AppError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(AppError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes the email from the activity's roster.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> AppResult<()> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(AppError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(AppError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(())
    }
}
