use crate::database::activity_store::ActivityDirectory;
use crate::models::Activity;

// Activities offered this term. Listing order follows this table.
const SEED: &[(&str, &str, &str, usize, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Train together and play matches against other schools",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["lucas@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice drills and compete in the district league",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["mason@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Improve your serve and play friendly singles and doubles",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        10,
        &[],
    ),
    (
        "Art Club",
        "Explore painting, drawing and sculpture",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct and stage the school plays",
        "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
        20,
        &["isabella@mergington.edu", "liam@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        12,
        &["noah@mergington.edu"],
    ),
    (
        "Debate Team",
        "Sharpen public speaking and argue current topics",
        "Fridays, 4:00 PM - 5:30 PM",
        16,
        &[],
    ),
];

pub fn seed_activities() -> ActivityDirectory {
    let mut directory = ActivityDirectory::new();
    for (name, description, schedule, max, participants) in SEED {
        directory.insert(
            *name,
            Activity::new(description, schedule, *max).with_participants(participants),
        );
    }
    directory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_unique_participants_within_capacity() {
        let directory = seed_activities();
        assert_eq!(directory.len(), SEED.len());

        for (name, activity) in directory.iter() {
            let mut seen = activity.participants.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), activity.participants.len(), "{name}");
            assert!(activity.participants.len() <= activity.max_participants, "{name}");
        }
    }

    #[test]
    fn seed_keeps_table_order() {
        let directory = seed_activities();
        let names: Vec<&str> = directory.names().collect();
        let expected: Vec<&str> = SEED.iter().map(|(n, ..)| *n).collect();
        assert_eq!(names, expected);
    }
}
