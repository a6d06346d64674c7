//! Keyword routing tables.
//!
//! A [`ReplyTable`] is an ordered list of [`ReplyPool`]s plus a fallback
//! pool. Routing walks the pools in order and takes the first whose
//! [`Trigger`] fires; the reply is then drawn uniformly from that pool.

use case_core::{Mood, RandomSource, ReplyContext};
use tracing::debug;

use crate::error::TableError;
use crate::render::render;

/// Category name reported when no pool fires.
pub const FALLBACK_CATEGORY: &str = "default";

/// Returned if a rendered reply comes out blank.
const BLANK_REPLY_FALLBACK: &str = "I'm not sure what to say to that.";

/// Default probability that a mood pool fires for a suspect with that mood.
pub const DEFAULT_MOOD_BIAS: f64 = 0.5;

/// Condition under which a reply pool is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// The lower-cased input contains any of these lower-case substrings.
    Keywords(Vec<String>),
    /// The input mentions the case's victim by descriptor or by name.
    VictimMentioned,
    /// The suspect being questioned has this mood and a biased coin flip succeeds.
    Mood(Mood),
    /// Any of the inner triggers fires, checked in order.
    AnyOf(Vec<Trigger>),
}

impl Trigger {
    /// Build a keyword trigger. Keywords are lower-cased.
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Trigger::Keywords(
            keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    fn fires(
        &self,
        input: &str,
        context: &ReplyContext<'_>,
        rng: &RandomSource,
        mood_bias: f64,
    ) -> bool {
        match self {
            Trigger::Keywords(keywords) => keywords.iter().any(|k| input.contains(k.as_str())),
            Trigger::VictimMentioned => {
                let case = context.case;
                [case.victim(), case.victim_name()]
                    .iter()
                    .map(|v| v.trim().to_lowercase())
                    .any(|v| !v.is_empty() && input.contains(&v))
            }
            Trigger::Mood(mood) => match context.suspect {
                Some(suspect) if suspect.mood == *mood => rng.chance(mood_bias),
                _ => false,
            },
            Trigger::AnyOf(triggers) => triggers
                .iter()
                .any(|t| t.fires(input, context, rng, mood_bias)),
        }
    }
}

/// A named set of canned replies and the trigger that selects it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPool {
    pub category: String,
    pub trigger: Trigger,
    pub replies: Vec<String>,
}

impl ReplyPool {
    pub fn new<I, S>(category: impl Into<String>, trigger: Trigger, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            trigger,
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

/// The outcome of routing an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route<'a> {
    pub category: &'a str,
    pub replies: &'a [String],
}

fn has_usable_reply(replies: &[String]) -> bool {
    !replies.is_empty() && replies.iter().all(|r| !r.trim().is_empty())
}

/// Ordered keyword router with a fallback pool.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyTable {
    pools: Vec<ReplyPool>,
    fallback: Vec<String>,
    mood_bias: f64,
}

impl ReplyTable {
    /// Create a table from pools in priority order and a fallback pool.
    ///
    /// Every pool, including the fallback, must hold at least one reply and
    /// no reply may be blank.
    pub fn new<I, S>(pools: Vec<ReplyPool>, fallback: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fallback: Vec<String> = fallback.into_iter().map(Into::into).collect();
        if !has_usable_reply(&fallback) {
            return Err(TableError::EmptyFallback);
        }
        if let Some(pool) = pools.iter().find(|p| !has_usable_reply(&p.replies)) {
            return Err(TableError::EmptyPool(pool.category.clone()));
        }

        Ok(Self {
            pools,
            fallback,
            mood_bias: DEFAULT_MOOD_BIAS,
        })
    }

    /// Set the probability that a mood pool fires for a matching suspect.
    pub fn with_mood_bias(mut self, mood_bias: f64) -> Self {
        self.mood_bias = mood_bias.clamp(0.0, 1.0);
        self
    }

    pub fn mood_bias(&self) -> f64 {
        self.mood_bias
    }

    pub fn pools(&self) -> &[ReplyPool] {
        &self.pools
    }

    /// Pick the pool for an input.
    ///
    /// Keyword triggers are deterministic; only mood triggers draw from `rng`.
    pub fn route<'a>(
        &'a self,
        input: &str,
        context: &ReplyContext<'_>,
        rng: &RandomSource,
    ) -> Route<'a> {
        let lowered = input.to_lowercase();

        self.pools
            .iter()
            .find(|pool| pool.trigger.fires(&lowered, context, rng, self.mood_bias))
            .map(|pool| Route {
                category: &pool.category,
                replies: &pool.replies,
            })
            .unwrap_or(Route {
                category: FALLBACK_CATEGORY,
                replies: &self.fallback,
            })
    }

    /// Route an input and draw a rendered reply from the chosen pool.
    pub fn reply(&self, input: &str, context: &ReplyContext<'_>, rng: &RandomSource) -> String {
        let route = self.route(input, context, rng);
        debug!("Routed input to '{}' pool", route.category);

        let text = rng
            .pick(route.replies)
            .map(|template| render(template, context))
            .unwrap_or_default();

        if text.trim().is_empty() {
            BLANK_REPLY_FALLBACK.to_string()
        } else {
            text
        }
    }

    /// Reply table for the case-level investigation assistant.
    pub fn assistant() -> Self {
        Self {
            pools: vec![
                ReplyPool::new(
                    "suspects",
                    Trigger::keywords(["suspect", "who"]),
                    [
                        "Based on the evidence, we have {suspect_count} suspects. Each has a different motive and opportunity. Would you like me to analyze their alibis?",
                        "The suspects show varying levels of suspicious behavior. I recommend focusing on those with the strongest motives and weakest alibis.",
                        "Interesting question about the suspects. Let me analyze their psychological profiles and behavioral patterns for you.",
                    ],
                ),
                ReplyPool::new(
                    "evidence",
                    Trigger::keywords(["evidence", "clue"]),
                    [
                        "We've collected {evidence_count} pieces of evidence. The most significant appears to be the security footage and physical traces left at the scene.",
                        "The evidence suggests this was a carefully planned operation. The perpetrator had inside knowledge of the security systems.",
                        "Cross-referencing the evidence with suspect profiles reveals some interesting connections. Would you like me to elaborate?",
                    ],
                ),
                ReplyPool::new(
                    "timeline",
                    Trigger::keywords(["timeline", "when", "time"]),
                    [
                        "The timeline shows the incident occurred at {time}. This timing is crucial for verifying alibis.",
                        "Based on the sequence of events, the perpetrator had a narrow window of opportunity. This helps narrow down our suspect list.",
                        "The timeline reveals some inconsistencies in the witness statements that we should investigate further.",
                    ],
                ),
                ReplyPool::new(
                    "crime",
                    Trigger::keywords(["crime", "scene", "how"]),
                    [
                        "The crime scene analysis reveals this was not a random act. The perpetrator knew the victim's routine and the location's security measures.",
                        "Forensic analysis suggests the perpetrator was familiar with the environment. This points to someone with regular access.",
                        "The method used indicates planning and premeditation. This wasn't a crime of passion.",
                    ],
                ),
            ],
            fallback: [
                "That's an interesting observation. Based on the case details, I can help you analyze the connections between suspects and evidence.",
                "Let me process that information against our case database. The patterns suggest we should focus on motive and opportunity.",
                "Your question touches on a key aspect of the investigation. The evidence supports multiple theories at this point.",
                "I understand your line of thinking. Let's examine how this relates to the physical evidence we've collected.",
                "That's a valid investigative approach. Would you like me to help you correlate this with the suspect profiles?",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            mood_bias: DEFAULT_MOOD_BIAS,
        }
    }

    /// Reply table for questioning a suspect.
    pub fn suspect() -> Self {
        Self {
            pools: vec![
                ReplyPool::new(
                    "alibi",
                    Trigger::keywords(["alibi", "where were you"]),
                    [
                        "I already told you where I was! {alibi}. Why do you keep asking me the same questions?",
                        "Look, I've been completely honest about my whereabouts. {alibi}. Check with anyone you want.",
                        "My alibi is solid. {alibi}. I don't understand why I'm even a suspect here.",
                    ],
                ),
                ReplyPool::new(
                    "victim",
                    Trigger::AnyOf(vec![Trigger::keywords(["victim"]), Trigger::VictimMentioned]),
                    [
                        "{victim} was... well, we had our differences, but I would never hurt anyone.",
                        "I knew {victim} professionally. We weren't close, but I respected their work.",
                        "My relationship with {victim} was complicated, but that doesn't make me a killer.",
                    ],
                ),
                ReplyPool::new(
                    "nervous",
                    Trigger::Mood(Mood::Nervous),
                    [
                        "I... I don't know what you want me to say. I'm just nervous because I've never been questioned by police before.",
                        "This whole situation is terrifying. Of course I'm nervous! Wouldn't you be?",
                        "I keep thinking about what happened. It's horrible. That's why I seem on edge.",
                    ],
                ),
                ReplyPool::new(
                    "angry",
                    Trigger::Mood(Mood::Angry),
                    [
                        "I'm tired of these accusations! I've told you everything I know!",
                        "This is ridiculous! You're wasting time questioning me instead of finding the real culprit!",
                        "I don't appreciate being treated like a criminal when I'm innocent!",
                    ],
                ),
                ReplyPool::new(
                    "defensive",
                    Trigger::Mood(Mood::Defensive),
                    [
                        "I don't have to answer that. I've been cooperative enough already.",
                        "You're trying to twist my words. I know my rights.",
                        "I think you're barking up the wrong tree here, detective.",
                    ],
                ),
            ],
            fallback: [
                "I'm not sure what you're getting at. Can you be more specific?",
                "I've told you everything I know about that night. What else do you want from me?",
                "I understand you have a job to do, but I'm not your person.",
                "Look, I want to help, but I don't know anything that would be useful to your investigation.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            mood_bias: DEFAULT_MOOD_BIAS,
        }
    }
}
