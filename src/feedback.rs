//! Per-category feedback: score → level tag → canned (tag, paragraph).

use serde::Serialize;

use crate::constants::CATEGORY_COUNT;
use crate::types::{Category, Level};

/// One cell of the feedback table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Feedback {
    pub tag: &'static str,
    pub text: &'static str,
}

const fn fb(tag: &'static str, text: &'static str) -> Feedback {
    Feedback { tag, text }
}

/// `FEEDBACK[category][level]`, levels ordered H, M, L.
static FEEDBACK: [[Feedback; 3]; CATEGORY_COUNT] = [
    // Philosophy
    [
        fb(
            "[Established]",
            "You have a firm inner compass and have kept making choices your soul delights in. That is wonderful. \
             At the same time, could that unshakeable conviction sometimes feel like a wall to the people around you? \
             When you loosen your sense of being right just a little, the world may open up more gently.",
        ),
        fb(
            "[Searching]",
            "You are in the middle of looking for your true self while meeting new values. That uncertainty is a sign of growth. \
             But has the search for the right answer brought your thinking to a standstill? \
             When you are lost, stop thinking with your head and choose the direction that warms your heart.",
        ),
        fb(
            "[Absent]",
            "We can feel the kindness with which you have adapted to meet everyone's expectations. \
             But have you been putting your own voice last for too long? \
             Rather than living someone else's life, start by spending just five minutes a day on yourself.",
        ),
    ],
    // Environment
    [
        fb(
            "[Harmony]",
            "A place of peace and financial security: you are standing on very rich ground right now. \
             Savour that comfort, and if a small flame somewhere inside says you could go further, \
             a short adventure might be a lovely idea.",
        ),
        fb(
            "[Balance]",
            "Your daily life is protected and you play your part in it well. \
             Yet are you telling yourself this is enough and putting a lid on small discomforts? \
             Invite a little of the slack and play your senses are asking for into your life.",
        ),
        fb(
            "[Exhausted]",
            "You have worked harder than anyone to adapt to your surroundings, and that endurance is admirable. \
             But you have fought enough. There is no need to wear yourself down further. \
             Walking away is not losing; it is a loving choice to protect someone precious: you.",
        ),
    ],
    // Talent
    [
        fb(
            "[Blooming]",
            "Your gift is already bringing smiles to other people's faces. Please be confident in it. \
             Still, settling into what you are already good at might be a waste: \
             there are boxes of talent inside you that have not been opened yet.",
        ),
        fb(
            "[Rough Gem]",
            "You are starting to feel that this might be it. Treasure that sprout. \
             If you feel pressure to become amazing, relax your shoulders. \
             Simply spending more time on what absorbs you, not on what earns praise, is enough.",
        ),
        fb(
            "[Sealed]",
            "Careful and modest, you still seem to underestimate your own shine. Do you think you have nothing? \
             In fact your strongest weapon is hidden in the things you do as a matter of course. \
             Allow yourself to see your own good qualities.",
        ),
    ],
    // Vision
    [
        fb(
            "[Vivid]",
            "You can see your ideal future clearly. You are the screenwriter of your life, so cherish that exciting view. \
             If your footing feels a little neglected, spend slightly less time gazing into the distance \
             and make time to appreciate today's step.",
        ),
        fb(
            "[Outlook]",
            "You are swelling with the hope that things might turn out well, and that hope matters. \
             Rather than leaving the dream as someday, why not sharpen its resolution a little? \
             When you can imagine its smells and sounds, reality starts to move.",
        ),
        fb(
            "[Drifting]",
            "You face what is in front of you sincerely and live each day fully; that honesty is your strength. \
             But if you are uneasy about where you are heading, stop for a moment and look up at the stars. \
             Knowing where you are is never a waste of time.",
        ),
    ],
    // Vitality
    [
        fb(
            "[Full]",
            "Life force overflows and your intuition is sharp. That energy is the best gift for opening up your life; enjoy the feeling. \
             And precisely so you can keep running, give yourself time to slow down on purpose and rest your wings.",
        ),
        fb(
            "[Steady]",
            "You keep your own rhythm and get by without major waves, which shows your self-care is working. \
             But are you dismissing your body's vague sluggishness as business as usual? \
             Picking up those small signals carefully will make your performance steadier still.",
        ),
        fb(
            "[Depleted]",
            "Your sense of responsibility, carrying your duties on willpower alone, is humbling. \
             But the body is honest. Right now resting, not trying harder, is your most important job. \
             Please allow yourself to sleep like a log.",
        ),
    ],
    // Connection
    [
        fb(
            "[Love]",
            "You are wrapped in the joy of loving and being loved, in a warm sense of safety. That is a treasure beyond price. \
             With such a safe base, you can venture a little further into the outside world; \
             meeting people with different values will deepen your love even more.",
        ),
        fb(
            "[Harmony]",
            "You communicate smoothly with anyone, which is wonderful. \
             On the other hand, do you feel a little afraid of showing the weakness deep in your heart? \
             It may be when you show your imperfect self that a truly deep bond is formed.",
        ),
        fb(
            "[Solitude]",
            "You have the strength to stand alone without depending on anyone, and that independence is something to be proud of. \
             But if your heart is stretched tight, why not set down a little of your load? \
             The world is a far kinder and warmer place than you think.",
        ),
    ],
];

/// Look up the canned feedback for one (category, level) cell.
pub fn feedback(category: Category, level: Level) -> Feedback {
    FEEDBACK[category.index()][level.index()]
}

/// Band a score and look up its feedback.
pub fn feedback_for_score(category: Category, score: f64) -> (Level, Feedback) {
    let level = Level::from_score(score);
    (level, feedback(category, level))
}
