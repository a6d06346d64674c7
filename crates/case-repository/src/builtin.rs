//! The built-in case templates.

use case_core::{CaseTemplate, Evidence, Location, Mood, Solution, Suspect};

/// The templates used when no template file is configured.
pub fn builtin_templates() -> Vec<CaseTemplate> {
    vec![midnight_gallery_heist(), vanishing_violinist()]
}

fn midnight_gallery_heist() -> CaseTemplate {
    CaseTemplate {
        title: "The Midnight Gallery Heist".to_string(),
        victim: "Marcus Rothwell (Gallery Owner)".to_string(),
        time: "2:30 AM, October 15th".to_string(),
        location: "Rothwell Contemporary Art Gallery".to_string(),
        description: "A priceless painting was stolen from a high-security gallery. The alarm \
            system was disabled from the inside, and there are no signs of forced entry. The \
            gallery owner was found unconscious in his office."
            .to_string(),
        crime_scene_image: "https://images.pexels.com/photos/8166295/pexels-photo-8166295.jpeg"
            .to_string(),
        suspects: vec![
            Suspect::new(
                "1",
                "Elena Vasquez",
                "Security Guard",
                "Night shift security guard with access to all security systems. Recently \
                 divorced and facing financial difficulties.",
                "Claims she was doing her regular rounds when the theft occurred",
                Mood::Nervous,
            )
            .with_image("https://images.pexels.com/photos/8166318/pexels-photo-8166318.jpeg"),
            Suspect::new(
                "2",
                "Dr. James Morrison",
                "Art Appraiser",
                "Renowned art expert who recently appraised the stolen painting. Has gambling \
                 debts and connections to underground art dealers.",
                "Says he was at home sleeping, but has no witnesses",
                Mood::Defensive,
            )
            .with_image("https://images.pexels.com/photos/8166320/pexels-photo-8166320.jpeg"),
            Suspect::new(
                "3",
                "Sarah Chen",
                "Gallery Assistant",
                "Young art student who works part-time at the gallery. Has been acting \
                 strangely lately and was recently denied a promotion.",
                "Claims she left work early and went to a late-night café",
                Mood::Suspicious,
            )
            .with_image("https://images.pexels.com/photos/8166322/pexels-photo-8166322.jpeg"),
        ],
        evidence: vec![
            Evidence::new(
                "1",
                "Security Camera Footage",
                "Partial footage showing a figure in dark clothing near the painting",
                "Gallery Main Hall",
                "Shows the theft in progress but face is obscured",
            )
            .with_image("https://images.pexels.com/photos/8166310/pexels-photo-8166310.jpeg"),
            Evidence::new(
                "2",
                "Disabled Alarm Panel",
                "Security system was professionally disabled using an access code",
                "Security Office",
                "Indicates inside knowledge of security protocols",
            )
            .with_image("https://images.pexels.com/photos/8166312/pexels-photo-8166312.jpeg"),
            Evidence::new(
                "3",
                "Coffee Cup",
                "Fresh coffee cup found in the gallery office with lipstick traces",
                "Gallery Office",
                "Suggests someone was in the office recently",
            )
            .with_image("https://images.pexels.com/photos/8166314/pexels-photo-8166314.jpeg"),
        ],
        locations: vec![
            Location::new(
                "1",
                "Gallery Main Hall",
                "Where the painting was stolen from. High-security area with motion sensors.",
            )
            .with_evidence(["1"]),
            Location::new(
                "2",
                "Security Office",
                "Contains all security controls and monitoring equipment.",
            )
            .with_evidence(["2"]),
            Location::new(
                "3",
                "Gallery Office",
                "Private office where the gallery owner was found unconscious.",
            )
            .with_evidence(["3"]),
        ],
        solution: Solution::new("Elena Vasquez", "Financial Gain", "Inside Job"),
    }
}

fn vanishing_violinist() -> CaseTemplate {
    CaseTemplate {
        title: "The Vanishing Violinist".to_string(),
        victim: "Isabella Romano (Concert Violinist)".to_string(),
        time: "9:45 PM, November 3rd".to_string(),
        location: "Metropolitan Concert Hall".to_string(),
        description: "A world-renowned violinist disappeared during intermission of her \
            sold-out concert. Her priceless Stradivarius violin was left behind, but she \
            vanished without a trace."
            .to_string(),
        crime_scene_image: "https://images.pexels.com/photos/8166299/pexels-photo-8166299.jpeg"
            .to_string(),
        suspects: vec![
            Suspect::new(
                "1",
                "Victor Petrov",
                "Concert Manager",
                "Isabella's manager for the past 5 years. Recently discovered she was planning \
                 to switch to a rival agency.",
                "Claims he was handling VIP guests during intermission",
                Mood::Angry,
            )
            .with_image("https://images.pexels.com/photos/8166318/pexels-photo-8166318.jpeg"),
            Suspect::new(
                "2",
                "Dr. Amanda Foster",
                "Music Critic",
                "Influential music critic who recently wrote a scathing review of Isabella's \
                 performance. Known for her volatile temper.",
                "Says she was in the lobby during intermission",
                Mood::Defensive,
            )
            .with_image("https://images.pexels.com/photos/8166320/pexels-photo-8166320.jpeg"),
            Suspect::new(
                "3",
                "Thomas Blackwood",
                "Stage Hand",
                "Long-time employee of the concert hall. Has been acting strangely and was seen \
                 near Isabella's dressing room.",
                "Claims he was moving equipment backstage",
                Mood::Nervous,
            )
            .with_image("https://images.pexels.com/photos/8166322/pexels-photo-8166322.jpeg"),
        ],
        evidence: vec![
            Evidence::new(
                "1",
                "Abandoned Violin",
                "Isabella's priceless Stradivarius left in her dressing room",
                "Dressing Room",
                "She would never leave this behind willingly",
            )
            .with_image("https://images.pexels.com/photos/8166310/pexels-photo-8166310.jpeg"),
            Evidence::new(
                "2",
                "Torn Concert Program",
                "Ripped program found in the backstage area with threatening message",
                "Backstage Corridor",
                "Contains handwritten threats against Isabella",
            )
            .with_image("https://images.pexels.com/photos/8166312/pexels-photo-8166312.jpeg"),
            Evidence::new(
                "3",
                "Security Badge",
                "Staff security badge found in the parking garage",
                "Parking Garage",
                "Belongs to a concert hall employee",
            )
            .with_image("https://images.pexels.com/photos/8166314/pexels-photo-8166314.jpeg"),
        ],
        locations: vec![
            Location::new(
                "1",
                "Dressing Room",
                "Isabella's private dressing room where she was last seen.",
            )
            .with_evidence(["1"]),
            Location::new(
                "2",
                "Backstage Corridor",
                "Narrow hallway connecting dressing rooms to the stage.",
            )
            .with_evidence(["2"]),
            Location::new(
                "3",
                "Parking Garage",
                "Underground parking area with limited security coverage.",
            )
            .with_evidence(["3"]),
        ],
        solution: Solution::new("Thomas Blackwood", "Obsession", "Kidnapping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_are_valid() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 2);
        for template in &templates {
            assert!(template.validate().is_ok(), "{} is invalid", template.title);
        }
    }

    #[test]
    fn test_builtin_titles() {
        let titles: Vec<String> = builtin_templates().into_iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec!["The Midnight Gallery Heist", "The Vanishing Violinist"]
        );
    }
}
