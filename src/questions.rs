//! Question banks for each variant.
//!
//! The extended bank is the full set; the classic and reflective banks are
//! fixed slices of it. Question order is part of the content and is never
//! shuffled: answer `i` in a category always refers to question `i`.

use serde::Serialize;

use crate::constants::LIKERT_LABELS;
use crate::types::{Category, Variant};

const PHILOSOPHY: [&str; 7] = [
    "I can describe in my own words what happiness means to me.",
    "I put my inner voice ahead of social convention and other people's expectations.",
    "My everyday life has many moments where I feel truly fulfilled.",
    "I have no regrets about past choices and feel every experience had meaning.",
    "If my life ended tomorrow, I could accept the way I am living now.",
    "I can put the values at my core into words.",
    "When I am unsure, I have a standard I can return to.",
];

const ENVIRONMENT: [&str; 8] = [
    "I have a place where I can truly relax, such as a home or a community.",
    "I live without being threatened by money worries.",
    "I spend my time in surroundings where I can use my abilities.",
    "Where I live and work feels comfortable and lets me recharge.",
    "I have a financial base that lets me live without fearing the future.",
    "I have slack in my days: time to do nothing or to enjoy hobbies.",
    "I keep only things I love and that spark joy around me.",
    "I can keep my distance from people and situations that do not suit me.",
];

const TALENT: [&str; 8] = [
    "I know the strengths or gifts I can pour my passion into.",
    "I feel I contribute to others through those talents.",
    "I often reach a state of flow in my work or activities.",
    "There is something I lose track of time doing and never find a chore.",
    "My talents or strengths have made someone happy.",
    "In my work and activities I can be myself without pretending.",
    "People tell me they want to work with me or spend time with me.",
    "I enjoy updating myself through new knowledge and experiences.",
];

const VISION: [&str; 8] = [
    "I can picture my ideal future one and three years from now.",
    "Concrete plans toward my dreams and goals are under way.",
    "Thinking about the future excites me.",
    "I can picture the lifestyle I want to be living in three or five years.",
    "I take small steps today toward realising my dreams and goals.",
    "I have plans for enjoying life, like a list of things to do before I die.",
    "When something unexpected happens, I can find it interesting rather than a setback.",
    "When I think about the future, excitement outweighs anxiety.",
];

const VITALITY: [&str; 8] = [
    "I have enough energy to get through each day.",
    "I take good care of my body, including sleep and meals.",
    "I relieve stress well and my mood is stable.",
    "I wake up every morning refreshed and full of energy.",
    "I savour my meals and eat what my body welcomes.",
    "During the day I move comfortably without heaviness or fatigue.",
    "I protect my evenings so that I sleep well.",
    "I notice my body's signals, such as tiredness or pain, and look after them quickly.",
];

const CONNECTION: [&str; 8] = [
    "I have a partner or friends I trust enough to speak honestly with.",
    "I feel that I love and am loved.",
    "I can hold constructive conversations with people whose values differ from mine.",
    "Family, a partner, or friends I can talk openly with are close by.",
    "I express my gratitude to the people around me honestly.",
    "I find joy in doing things for others without keeping score.",
    "I rarely feel lonely and feel loosely connected to the world around me.",
    "I accept people who think differently and enjoy talking with them.",
];

fn full_bank(category: Category) -> &'static [&'static str] {
    match category {
        Category::Philosophy => &PHILOSOPHY,
        Category::Environment => &ENVIRONMENT,
        Category::Talent => &TALENT,
        Category::Vision => &VISION,
        Category::Vitality => &VITALITY,
        Category::Connection => &CONNECTION,
    }
}

/// Ordered questions for one category in one variant.
pub fn questions(variant: Variant, category: Category) -> &'static [&'static str] {
    let bank = full_bank(category);
    match (variant, category) {
        (Variant::Extended, _) => bank,
        // Philosophy lists its long-form questions first.
        (Variant::Classic, Category::Philosophy) => &bank[..5],
        (Variant::Reflective, Category::Philosophy) => &bank[..6],
        (Variant::Classic, _) => &bank[3..],
        (Variant::Reflective, _) => &bank[2..],
    }
}

/// Number of answers a category expects in a variant.
pub fn question_count(variant: Variant, category: Category) -> usize {
    questions(variant, category).len()
}

/// Total number of questions in a variant.
pub fn total_questions(variant: Variant) -> usize {
    Category::ALL
        .into_iter()
        .map(|c| question_count(variant, c))
        .sum()
}

#[derive(Serialize)]
pub struct CategorySection {
    pub category: Category,
    pub questions: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

/// Everything a front end needs to render the form.
#[derive(Serialize)]
pub struct Questionnaire {
    pub variant: Variant,
    pub total_questions: usize,
    pub default_answer: u8,
    pub options: Vec<LikertOption>,
    pub sections: Vec<CategorySection>,
}

pub fn questionnaire(variant: Variant) -> Questionnaire {
    Questionnaire {
        variant,
        total_questions: total_questions(variant),
        default_answer: crate::constants::LIKERT_DEFAULT,
        options: LIKERT_LABELS
            .iter()
            .enumerate()
            .map(|(i, &label)| LikertOption {
                value: i as u8 + 1,
                label,
            })
            .collect(),
        sections: Category::ALL
            .into_iter()
            .map(|category| CategorySection {
                category,
                questions: questions(variant, category).to_vec(),
            })
            .collect(),
    }
}
