//! Built-in course content and the games assembled from it.
//!
//! Everything the app shows is compiled in. The [`Catalog`] validates
//! the playable content once at startup and hands out fresh game
//! instances on demand; the read-only reference material (concept
//! cards, timeline, pipeline walkthrough) is exposed as static slices.

use rand::rng;
use rand::seq::SliceRandom;

use literacy_core::games::{
    AssignmentGame, AssignmentItem, GridGame, Question, QuizGame, SlotGame, SlotItem, TriageCard,
    TriageGame,
};

use crate::error::CatalogError;

/// One glossary entry in the concepts tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptCard {
    pub name: &'static str,
    pub tag: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub example: &'static str,
}

/// One dated event inside an era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub event: &'static str,
    pub who: &'static str,
    pub summary: &'static str,
}

/// One period of the AI history timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    pub period: &'static str,
    pub label: &'static str,
    pub summary: &'static str,
    pub milestones: &'static [Milestone],
}

/// One stage of the language-model pipeline walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStep {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
}

/// One forecasting scenario in the applications tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub label: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HallucinationLevel {
    Fact,
    Stretch,
    Hallucination,
    Severe,
}

impl HallucinationLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fact => "fact",
            Self::Stretch => "stretching it",
            Self::Hallucination => "hallucination",
            Self::Severe => "severe hallucination",
        }
    }
}

/// One canned model answer on the imagination-temperature slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallucinationExample {
    pub temperature: u8,
    pub text: &'static str,
    pub level: HallucinationLevel,
}

const CONCEPTS: &[ConceptCard] = &[
    ConceptCard {
        name: "Algorithm",
        tag: "basics",
        tagline: "a step-by-step recipe for solving a problem",
        summary: "An ordered set of rules that tells a computer how to solve a problem. Follow the steps in order, like a cooking recipe, and the result comes out. Every AI technique is built on top of this.",
        example: "Stop on red, go on green: an if-then algorithm",
    },
    ConceptCard {
        name: "Program (rule-based AI)",
        tag: "basics",
        tagline: "every rule written out by hand",
        summary: "An algorithm turned into code. Early AI worked exactly this way: people wrote every rule themselves. Fast and precise, but helpless the moment something outside the rules happens.",
        example: "Keyword spam filters, calculators, traffic light controllers",
    },
    ConceptCard {
        name: "Machine learning (ML)",
        tag: "core",
        tagline: "give it data and it finds the patterns",
        summary: "Instead of writing rules, you show the system a large pile of data and it learns the patterns itself, like a new hire handed thousands of past reports. Data quality decides how good it gets.",
        example: "Demand forecasting, fault detection, spam sorting, movie recommendations",
    },
    ConceptCard {
        name: "Deep learning (DL)",
        tag: "core",
        tagline: "machine learning modeled on the brain",
        summary: "The evolved form of machine learning. Dozens to hundreds of layers modeled on the brain's neuron connections learn complex patterns on their own, and with enough data and compute it beats humans at image and speech recognition.",
        example: "Face recognition, self-driving, voice assistants, translation",
    },
    ConceptCard {
        name: "AI (artificial intelligence)",
        tag: "concept",
        tagline: "the umbrella term for machine intelligence",
        summary: "The widest term of all, covering algorithms, machine learning, deep learning and generative models alike. Any program that appears to think, judge or learn like a person counts as AI.",
        example: "Siri, Alexa, self-driving cars, Go engines and ChatGPT are all AI",
    },
    ConceptCard {
        name: "LLM (large language model)",
        tag: "current",
        tagline: "a language expert trained on billions of words",
        summary: "A model trained on a vast slice of the internet's text until it reads and writes like a person. Built on the transformer architecture; more parameters generally means more capable. The engine of the current AI boom.",
        example: "GPT-4 (OpenAI), Claude (Anthropic), Gemini (Google), Llama (Meta)",
    },
    ConceptCard {
        name: "AI agent",
        tag: "current",
        tagline: "give it a goal and it plans the steps itself",
        summary: "Goes beyond answering questions: it uses tools such as search, code execution and file access, and plans multi-step work on its own. An LLM with hands, able to automate whole workflows.",
        example: "Research agents, coding agents, automatic email triage",
    },
    ConceptCard {
        name: "AGI (artificial general intelligence)",
        tag: "future",
        tagline: "human-level performance across every field",
        summary: "Today's AI is narrow: good at one thing at a time. AGI would handle any intellectual task a person can and pick up new fields by itself. It does not exist yet and remains a research goal.",
        example: "Playing doctor, lawyer and scientist at once, learning new fields unaided",
    },
    ConceptCard {
        name: "ASI (artificial superintelligence)",
        tag: "future",
        tagline: "beyond the best humans at everything",
        summary: "A step past AGI: better than the best human expert at creativity, judgment and scientific discovery alike. The AI of science fiction. What it would mean for humanity is impossible to predict.",
        example: "Does not exist; a theoretical concept",
    },
];

const ERAS: &[Era] = &[
    Era {
        period: "1950-1980s",
        label: "Rule-based AI",
        summary: "People coded every rule by hand; systems ran on if-then logic alone.",
        milestones: &[
            Milestone {
                year: 1950,
                event: "The Turing test proposed",
                who: "Alan Turing",
                summary: "A test for the question 'can machines think?'. The seed of the whole field.",
            },
            Milestone {
                year: 1956,
                event: "AI named as a field",
                who: "John McCarthy",
                summary: "The Dartmouth workshop uses 'Artificial Intelligence' for the first time and the discipline is born.",
            },
            Milestone {
                year: 1966,
                event: "ELIZA, the first chatbot",
                who: "Joseph Weizenbaum",
                summary: "A rule-based program that held conversations, and fell apart the moment the rules ran out.",
            },
        ],
    },
    Era {
        period: "1980s-2010s",
        label: "Machine learning",
        summary: "Given data, systems learned the patterns themselves; nobody had to write the rules.",
        milestones: &[
            Milestone {
                year: 1989,
                event: "Backpropagation popularized",
                who: "Geoffrey Hinton",
                summary: "The core algorithm for training neural networks becomes practical.",
            },
            Milestone {
                year: 1997,
                event: "Deep Blue beats the chess champion",
                who: "IBM",
                summary: "A machine defeats Garry Kasparov for the first time and shocks the world.",
            },
            Milestone {
                year: 2006,
                event: "Deep networks reignite",
                who: "Hinton's group",
                summary: "After a long AI winter, deep neural networks draw serious attention again.",
            },
        ],
    },
    Era {
        period: "2010s",
        label: "Deep learning",
        summary: "Networks hundreds of layers deep start beating humans at image and speech recognition.",
        milestones: &[
            Milestone {
                year: 2012,
                event: "AlexNet upends image recognition",
                who: "Hinton's group",
                summary: "Halves the error rate of the image recognition contest and opens the deep learning era.",
            },
            Milestone {
                year: 2016,
                event: "AlphaGo defeats Lee Sedol 4-1",
                who: "Google DeepMind",
                summary: "A machine wins at Go, a game of near-infinite complexity, against the world champion.",
            },
            Milestone {
                year: 2017,
                event: "The transformer paper",
                who: "Google Research",
                summary: "'Attention Is All You Need' introduces the architecture every modern LLM is built on.",
            },
        ],
    },
    Era {
        period: "2020s-",
        label: "Generative AI",
        summary: "Models that create text, images and code themselves; the AI everyone now uses daily.",
        milestones: &[
            Milestone {
                year: 2020,
                event: "GPT-3 released",
                who: "OpenAI",
                summary: "A 175-billion-parameter model writes text hard to tell from a person's.",
            },
            Milestone {
                year: 2022,
                event: "ChatGPT launches",
                who: "OpenAI",
                summary: "A million users in five days, a hundred million in two months. AI goes mainstream.",
            },
            Milestone {
                year: 2024,
                event: "The model race",
                who: "Anthropic, Google, Meta and others",
                summary: "Claude, Gemini and open models compete; multimodal and agentic AI arrive.",
            },
        ],
    },
];

const PIPELINE_STEPS: &[PipelineStep] = &[
    PipelineStep {
        title: "Tokenization",
        subtitle: "chopping up the words",
        summary: "The model cannot read a sentence whole. The first step splits the text into small pieces called tokens.",
    },
    PipelineStep {
        title: "Embedding",
        subtitle: "turning tokens into numbers",
        summary: "Every token becomes a vector of numbers, the only form the network can actually compute with.",
    },
    PipelineStep {
        title: "Self-attention",
        subtitle: "reading the context",
        summary: "The model weighs how strongly each token relates to every other token, recovering the context hidden between the words.",
    },
    PipelineStep {
        title: "Feed-forward pass",
        subtitle: "through the layers",
        summary: "The weighted signals travel through the stacked network layers, each one refining the representation toward a conclusion.",
    },
    PipelineStep {
        title: "Softmax",
        subtitle: "from scores to probabilities",
        summary: "The raw output scores are squashed into a probability for every candidate next token, from near-certain to near-impossible.",
    },
    PipelineStep {
        title: "Auto-regression",
        subtitle: "predicting in a loop",
        summary: "The predicted token is appended to the text and the whole thing is fed back in to predict the one after. Generation is this loop.",
    },
    PipelineStep {
        title: "Backpropagation",
        subtitle: "learning from the miss",
        summary: "During training, a wrong prediction sends its error backwards through the layers and the weights are nudged to do better next time.",
    },
];

const SCENARIOS: &[Scenario] = &[
    Scenario {
        label: "Sudden heat wave",
        summary: "Air-conditioning load spikes and demand becomes hard to predict by hand.",
    },
    Scenario {
        label: "Factory coming online",
        summary: "A large industrial consumer ramps up without warning.",
    },
];

const HALLUCINATION_EXAMPLES: &[HallucinationExample] = &[
    HallucinationExample {
        temperature: 10,
        text: "The national utility is the public company responsible for the power supply.",
        level: HallucinationLevel::Fact,
    },
    HallucinationExample {
        temperature: 35,
        text: "The national utility was founded in 1961 as a state-owned enterprise.",
        level: HallucinationLevel::Fact,
    },
    HallucinationExample {
        temperature: 60,
        text: "The national utility is one of the largest power companies in the world.",
        level: HallucinationLevel::Stretch,
    },
    HallucinationExample {
        temperature: 80,
        text: "Edison personally founded the national utility in 1899.",
        level: HallucinationLevel::Hallucination,
    },
    HallucinationExample {
        temperature: 95,
        text: "Edison built the national utility centuries ago to light the royal palace.",
        level: HallucinationLevel::Severe,
    },
];

/// Glossary entries for the concepts tab.
#[must_use]
pub fn concepts() -> &'static [ConceptCard] {
    CONCEPTS
}

/// The history timeline, oldest era first.
#[must_use]
pub fn eras() -> &'static [Era] {
    ERAS
}

/// The language-model pipeline walkthrough, in order.
#[must_use]
pub fn pipeline_steps() -> &'static [PipelineStep] {
    PIPELINE_STEPS
}

/// Forecasting scenarios for the applications tab.
#[must_use]
pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

/// The canned answers behind the temperature slider, coolest first.
#[must_use]
pub fn hallucination_examples() -> &'static [HallucinationExample] {
    HALLUCINATION_EXAMPLES
}

/// The canned answer closest to the given temperature. Ties go to the
/// cooler example.
#[must_use]
pub fn hallucination_for(temperature: u8) -> &'static HallucinationExample {
    let mut best = &HALLUCINATION_EXAMPLES[0];
    for example in HALLUCINATION_EXAMPLES {
        let distance = temperature.abs_diff(example.temperature);
        if distance < temperature.abs_diff(best.temperature) {
            best = example;
        }
    }
    best
}

/// Validated game content, built once at startup.
///
/// Holds a checked prototype of every game so handing out a fresh
/// instance cannot fail mid-session; only the slot game, which
/// shuffles its pool per play-through, stays fallible.
#[derive(Debug, Clone)]
pub struct Catalog {
    quiz: QuizGame,
    assignment: AssignmentGame,
    triage: TriageGame,
    slot_roles: Vec<String>,
    slot_pool: Vec<SlotItem>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns a `CatalogError` when any built-in game content fails
    /// validation.
    pub fn new() -> Result<Self, CatalogError> {
        let quiz = QuizGame::new(quiz_questions()?)?;
        let assignment = AssignmentGame::new(assignment_categories(), assignment_items())?;
        let triage = TriageGame::new(triage_cards())?;

        let slot_roles = slot_roles();
        let slot_pool = slot_pool();
        // Validate the slot content up front; per-play instances only
        // reorder the pool.
        SlotGame::new(slot_roles.clone(), slot_pool.clone())?;

        Ok(Self {
            quiz,
            assignment,
            triage,
            slot_roles,
            slot_pool,
        })
    }

    /// A fresh quiz for the concepts tab.
    #[must_use]
    pub fn quiz(&self) -> QuizGame {
        self.quiz.clone()
    }

    /// A fresh assign-to-category game for the mechanics tab.
    #[must_use]
    pub fn assignment(&self) -> AssignmentGame {
        self.assignment.clone()
    }

    /// A fresh grid simulation for the applications tab.
    #[must_use]
    pub fn grid(&self) -> GridGame {
        GridGame::new()
    }

    /// A fresh slot game for the prompting tab, pool order shuffled.
    ///
    /// # Errors
    ///
    /// Propagates `SlotError` from construction; the content itself was
    /// validated when the catalog was built.
    pub fn slots(&self) -> Result<SlotGame, CatalogError> {
        let mut pool = self.slot_pool.clone();
        pool.shuffle(&mut rng());
        Ok(SlotGame::new(self.slot_roles.clone(), pool)?)
    }

    /// A fresh triage game for the cautions tab.
    #[must_use]
    pub fn triage(&self) -> TriageGame {
        self.triage.clone()
    }
}

fn quiz_questions() -> Result<Vec<Question>, CatalogError> {
    let raw: [(&str, [&str; 4], usize); 12] = [
        (
            "Which kind of AI has every rule written out by hand?",
            ["Machine learning", "Deep learning", "Rule-based AI", "LLM"],
            2,
        ),
        (
            "Which technique finds patterns on its own when given data?",
            ["Algorithm", "Machine learning", "AGI", "AI agent"],
            1,
        ),
        (
            "Which technique mimics the neuron connections of the human brain?",
            ["Rule-based AI", "Machine learning", "Deep learning", "Program"],
            2,
        ),
        (
            "GPT-4, Claude and Gemini are examples of which kind of AI?",
            ["AGI", "Algorithm", "Rule-based AI", "LLM"],
            3,
        ),
        (
            "Which AI plans and acts with tools on its own when given a goal?",
            ["LLM", "AI agent", "Deep learning", "Machine learning"],
            1,
        ),
        (
            "What is an AI that performs at human level across every field called?",
            ["ASI", "AGI", "LLM", "AI agent"],
            1,
        ),
        (
            "What is the theoretical AI that surpasses humans in every respect?",
            ["AGI", "GPT-4", "ASI", "Deep learning"],
            2,
        ),
        (
            "Which AI defeated Go world champion Lee Sedol?",
            ["Deep Blue", "AlexNet", "AlphaGo", "GPT-3"],
            2,
        ),
        (
            "Which architecture underpins today's ChatGPT and Claude?",
            ["CNN", "RNN", "LSTM", "Transformer"],
            3,
        ),
        (
            "How long did ChatGPT take to reach a million users?",
            ["5 days", "5 weeks", "5 months", "5 years"],
            0,
        ),
        (
            "In which year did deep learning first upend the image recognition contest?",
            ["2008", "2010", "2012", "2016"],
            2,
        ),
        (
            "At which meeting was the term 'Artificial Intelligence' coined?",
            [
                "An MIT seminar",
                "The 1956 Dartmouth workshop",
                "Google I/O 2000",
                "NeurIPS 1987",
            ],
            1,
        ),
    ];

    raw.into_iter()
        .map(|(prompt, options, answer)| {
            Ok(Question::new(
                prompt,
                options.into_iter().map(String::from).collect(),
                answer,
            )?)
        })
        .collect()
}

fn assignment_categories() -> Vec<String> {
    ["Rule-based AI", "Machine learning", "Deep learning"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn assignment_items() -> Vec<AssignmentItem> {
    vec![
        AssignmentItem::new("A spam filter that blocks mail containing listed keywords", 0),
        AssignmentItem::new("A traffic light cycling on a fixed schedule", 0),
        AssignmentItem::new("Forecasting electricity demand from years of usage data", 1),
        AssignmentItem::new("Recommending films from what similar viewers watched", 1),
        AssignmentItem::new("Unlocking a phone by recognizing its owner's face", 2),
        AssignmentItem::new("An assistant that understands free-form spoken commands", 2),
    ]
}

fn slot_roles() -> Vec<String> {
    ["Role", "Context", "Format"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn slot_pool() -> Vec<SlotItem> {
    vec![
        SlotItem::good("You are a veteran power-equipment engineer", 0),
        SlotItem::good("A gale tore down a 154 kV transmission line this morning", 1),
        SlotItem::good("Write the recovery procedure as a step-by-step checklist", 2),
        SlotItem::distractor("Just write something"),
        SlotItem::distractor("Make it good somehow"),
        SlotItem::distractor("Figure it out yourself"),
    ]
}

fn triage_cards() -> Vec<TriageCard> {
    vec![
        TriageCard::new(
            "Summarize our division's confidential budget spreadsheet",
            true,
            "Internal budget figures would leave the company.",
        ),
        TriageCard::new(
            "Write Python code that sorts a list of records",
            false,
            "An ordinary programming question with no sensitive data.",
        ),
        TriageCard::new(
            "Compile this customer's phone number and home address",
            true,
            "Entering customer personal data breaches privacy law.",
        ),
        TriageCard::new(
            "Proofread the grammar in this email",
            false,
            "Generic proofreading carries no security risk.",
        ),
        TriageCard::new(
            "Analyze the blueprints for the new power plant",
            true,
            "Unreleased infrastructure drawings are critical secrets.",
        ),
        TriageCard::new(
            "Explain how VLOOKUP works in Excel",
            false,
            "Everyday tool questions carry no security risk.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_builds_from_built_in_content() {
        let catalog = Catalog::new().unwrap();
        assert_eq!(catalog.quiz().total(), 12);
        assert_eq!(catalog.assignment().total(), 6);
        assert_eq!(catalog.triage().total(), 6);
        assert_eq!(catalog.grid().stability(), 100);
    }

    #[test]
    fn games_are_handed_out_fresh() {
        let catalog = Catalog::new().unwrap();
        let mut first = catalog.quiz();
        first.select(0);
        first.advance();
        assert_eq!(catalog.quiz().index(), 0);
    }

    #[test]
    fn assignment_uses_all_three_categories() {
        let catalog = Catalog::new().unwrap();
        let game = catalog.assignment();
        let used: BTreeSet<usize> = game.items().iter().map(|item| item.category()).collect();
        assert_eq!(used.len(), game.categories().len());
    }

    #[test]
    fn shuffled_slot_pool_keeps_the_same_items() {
        let catalog = Catalog::new().unwrap();
        let reference: BTreeSet<String> = slot_pool()
            .iter()
            .map(|item| item.text().to_owned())
            .collect();
        for _ in 0..5 {
            let game = catalog.slots().unwrap();
            let texts: BTreeSet<String> = game
                .pool()
                .iter()
                .map(|item| item.text().to_owned())
                .collect();
            assert_eq!(texts, reference);
            assert_eq!(game.total(), 3);
        }
    }

    #[test]
    fn triage_deck_mixes_risky_and_safe_cards() {
        let catalog = Catalog::new().unwrap();
        let game = catalog.triage();
        let risky = game.cards().iter().filter(|card| card.risky()).count();
        assert_eq!(risky, 3);
        assert_eq!(game.cards().len(), 6);
    }

    #[test]
    fn reference_content_is_complete() {
        assert_eq!(concepts().len(), 9);
        assert_eq!(eras().len(), 4);
        assert!(eras().iter().all(|era| era.milestones.len() == 3));
        assert_eq!(pipeline_steps().len(), 7);
        assert_eq!(scenarios().len(), 2);
    }

    #[test]
    fn hallucination_lookup_picks_the_nearest_example() {
        assert_eq!(hallucination_for(0).temperature, 10);
        assert_eq!(hallucination_for(30).temperature, 35);
        assert_eq!(hallucination_for(70).temperature, 60);
        assert_eq!(hallucination_for(100).temperature, 95);
    }
}
