//! Property tests: every routed reply is non-blank.

use canned_brain::ReplyTable;
use case_core::{Case, Mood, RandomSource, ReplyContext};
use case_repository::builtin_templates;
use proptest::prelude::*;

const MOODS: [Mood; 5] = [
    Mood::Nervous,
    Mood::Angry,
    Mood::Defensive,
    Mood::Calm,
    Mood::Suspicious,
];

fn case_with_mood(template: usize, mood: Mood) -> Case {
    let mut template = builtin_templates().remove(template);
    for suspect in &mut template.suspects {
        suspect.mood = mood;
    }
    template.stamp("CASE-PROP")
}

fn input() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{1,40}",
        "(alibi|victim|who|clue|when|how|where were you)",
        "\\s{1,4}",
    ]
}

proptest! {
    #[test]
    fn prop_assistant_reply_never_blank(
        input in input(),
        template in 0usize..2,
        seed in any::<u64>(),
    ) {
        let case = case_with_mood(template, Mood::Calm);
        let table = ReplyTable::assistant();

        let reply = table.reply(&input, &ReplyContext::for_case(&case), &RandomSource::seeded(seed));
        prop_assert!(!reply.trim().is_empty(), "blank reply for {:?}", input);
    }

    #[test]
    fn prop_suspect_reply_never_blank(
        input in input(),
        template in 0usize..2,
        mood in 0usize..5,
        suspect in 0usize..3,
        bias in prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0],
        seed in any::<u64>(),
    ) {
        let case = case_with_mood(template, MOODS[mood]);
        let suspect = &case.suspects()[suspect];
        let table = ReplyTable::suspect().with_mood_bias(bias);

        let reply = table.reply(
            &input,
            &ReplyContext::for_suspect(&case, suspect),
            &RandomSource::seeded(seed),
        );
        prop_assert!(!reply.trim().is_empty(), "blank reply for {:?} ({})", input, suspect.mood);
    }
}
