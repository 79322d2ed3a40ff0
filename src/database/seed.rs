use crate::models::{Activity, ActivityMap};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball team for varsity and junior varsity players",
        schedule: "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Improve your tennis skills and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 10,
        participants: &["sarah@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing, and sculpture techniques",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["ava@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Perform in plays and develop acting skills",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["liam@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 15,
        participants: &["noah@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &["isabella@mergington.edu", "ethan@mergington.edu"],
    },
];

/// The activity set the process starts with.
pub fn seed_activities() -> ActivityMap {
    SEED_ACTIVITIES
        .iter()
        .map(|s| {
            (
                s.name.to_string(),
                Activity {
                    description: s.description.to_string(),
                    schedule: s.schedule.to_string(),
                    max_participants: s.max_participants,
                    participants: s.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_keeps_declaration_order() {
        let activities = seed_activities();
        let names: Vec<&str> = activities.keys().map(|k| k.as_str()).collect();
        assert_eq!(names.first(), Some(&"Chess Club"));
        assert_eq!(names.last(), Some(&"Debate Team"));
        assert_eq!(names.len(), SEED_ACTIVITIES.len());
    }

    #[test]
    fn seed_records_are_well_formed() {
        for (name, activity) in seed_activities() {
            assert!(!activity.description.is_empty(), "{name}");
            assert!(!activity.schedule.is_empty(), "{name}");
            assert!(activity.max_participants > 0, "{name}");
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{name} is over capacity"
            );
            for p in &activity.participants {
                assert!(p.ends_with("@mergington.edu"), "{name}: {p}");
            }
        }
    }
}
