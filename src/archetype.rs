//! Archetype catalog: the fixed set of narrative classifications.
//!
//! Archetypes are selected, never constructed. Each id maps to one static
//! [`ArchetypeProfile`]; whether its reflective question is shown depends on
//! the variant, not on the archetype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of archetypes in the catalog.
pub const ARCHETYPE_COUNT: usize = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeId {
    BurnoutWarrior,
    NurturingGuardian,
    HarmoniousTraveler,
    PhilosopherSage,
    IntegratedSovereign,
    VibrantAdventurer,
    StrategicTactician,
    SolitaryArtisan,
    MagneticLeader,
    RadiantPerformer,
    LovingHeart,
    DreamingWanderer,
    VisionaryArchitect,
}

/// Static content for one archetype.
#[derive(Debug, Serialize)]
pub struct ArchetypeProfile {
    pub id: ArchetypeId,
    pub type_number: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub reflection: &'static str,
}

impl ArchetypeProfile {
    /// "Type 13: Visionary Architect"
    pub fn display_name(&self) -> String {
        format!("Type {}: {}", self.type_number, self.name)
    }
}

/// Catalog in type-number order.
pub static ARCHETYPES: [ArchetypeProfile; ARCHETYPE_COUNT] = [
    ArchetypeProfile {
        id: ArchetypeId::BurnoutWarrior,
        type_number: 1,
        name: "Burnout Warrior",
        description: "Out of responsibility and kindness you have kept fighting longer than anyone. \
            It is enough now. Why not take off that heavy armour and step away from the battlefield for a while? \
            Healing your wounds is not weakness; it is the brave choice that lets you move on.",
        icon: "🛡️",
        reflection: "If you allowed yourself one full day of rest this week, what would you stop doing first?",
    },
    ArchetypeProfile {
        id: ArchetypeId::NurturingGuardian,
        type_number: 2,
        name: "Nurturing Guardian",
        description: "You stand on a secure and generous foundation, and you have the warmth to protect and raise the people around you. \
            Do not only give: sometimes let yourself enjoy being the one who is protected.",
        icon: "🌳",
        reflection: "Who could you let take care of you this month?",
    },
    ArchetypeProfile {
        id: ArchetypeId::HarmoniousTraveler,
        type_number: 3,
        name: "Harmonious Traveler",
        description: "You have a fine sense of balance and the flexibility to adapt to any environment. \
            You may not have found your signature strength yet, but that is proof you could become anything. \
            Start by polishing the element with your lowest score.",
        icon: "🌱",
        reflection: "What small step this week would lift your lowest area by a single point?",
    },
    ArchetypeProfile {
        id: ArchetypeId::PhilosopherSage,
        type_number: 4,
        name: "Philosopher Sage",
        description: "You have an unshakeable inner compass and deep wisdom, and the noise around you does not sway you. \
            Share that noble spirit with others, and your world will grow wider still.",
        icon: "🦉",
        reflection: "Which of your convictions would you like to talk through with someone who disagrees?",
    },
    ArchetypeProfile {
        id: ArchetypeId::IntegratedSovereign,
        type_number: 5,
        name: "Integrated Sovereign",
        description: "Every element of your life is in harmony, and you govern your own kingdom with a steady hand. \
            Precisely because things look perfect, leaving room for play and a little imperfection will deepen your appeal.",
        icon: "👑",
        reflection: "Where could you deliberately leave room for play or imperfection?",
    },
    ArchetypeProfile {
        id: ArchetypeId::VibrantAdventurer,
        type_number: 6,
        name: "Vibrant Adventurer",
        description: "You overflow with life and energy, and your presence alone lights up the people around you. \
            When you spend that abundant energy on someone else, the legend begins.",
        icon: "🔥",
        reflection: "Whose project could your energy carry forward this month?",
    },
    ArchetypeProfile {
        id: ArchetypeId::StrategicTactician,
        type_number: 7,
        name: "Strategic Tactician",
        description: "You hold firm beliefs and eyes that see far into the future. \
            You have the intelligence to head for the goal by the shortest route without being carried away by emotion. \
            Add some charm to that cool cleverness and you are unstoppable.",
        icon: "♟️",
        reflection: "Which goal would go further if you invited others in instead of planning alone?",
    },
    ArchetypeProfile {
        id: ArchetypeId::SolitaryArtisan,
        type_number: 8,
        name: "Solitary Artisan",
        description: "You have outstanding skill and talent; the power to create quality no one else can imitate is a kind of magic. \
            The time has come to stop keeping it to yourself and open it to the world as a gift.",
        icon: "🔨",
        reflection: "What piece of your craft could you share publicly, unfinished, this week?",
    },
    ArchetypeProfile {
        id: ArchetypeId::MagneticLeader,
        type_number: 9,
        name: "Magnetic Leader",
        description: "People gather around you naturally and great currents form. \
            You are a leader who can carry everyone's hopes forward. \
            Meeting expectations matters, but keeping your own soul pure is what ultimately makes everyone happy.",
        icon: "🌞",
        reflection: "What do you want for yourself, apart from what the people following you expect?",
    },
    ArchetypeProfile {
        id: ArchetypeId::RadiantPerformer,
        type_number: 10,
        name: "Radiant Performer",
        description: "You have a brilliance that captivates people. \
            With both talent and charm, you were born to stand on a stage. \
            Put your own enjoyment ahead of other people's judgement.",
        icon: "🌟",
        reflection: "When did you last perform purely for the fun of it?",
    },
    ArchetypeProfile {
        id: ArchetypeId::LovingHeart,
        type_number: 11,
        name: "Loving Heart",
        description: "Your life is full of love and joy, and your connections with people are your source of energy. \
            While your warmth heals those around you, sometimes listen to your own inner voice as well.",
        icon: "💞",
        reflection: "What would your inner voice say if no one else's needs were in the room?",
    },
    ArchetypeProfile {
        id: ArchetypeId::DreamingWanderer,
        type_number: 12,
        name: "Dreaming Wanderer",
        description: "You see further into the future than anyone, and the dreams you talk about give people hope. \
            All that remains is the first step. Down-to-earth action that turns dreams into reality will make you a true hero.",
        icon: "🌈",
        reflection: "What is the smallest concrete action that would move your dream forward tomorrow?",
    },
    ArchetypeProfile {
        id: ArchetypeId::VisionaryArchitect,
        type_number: 13,
        name: "Visionary Architect",
        description: "A beautiful blueprint of the future is already complete in your mind, and your talent and vision can change the world. \
            The key now is building the foundation, your environment, that brings it down into reality.",
        icon: "🏗️",
        reflection: "What change to your surroundings would make building your blueprint easier?",
    },
];

impl ArchetypeId {
    pub const ALL: [ArchetypeId; ARCHETYPE_COUNT] = [
        ArchetypeId::BurnoutWarrior,
        ArchetypeId::NurturingGuardian,
        ArchetypeId::HarmoniousTraveler,
        ArchetypeId::PhilosopherSage,
        ArchetypeId::IntegratedSovereign,
        ArchetypeId::VibrantAdventurer,
        ArchetypeId::StrategicTactician,
        ArchetypeId::SolitaryArtisan,
        ArchetypeId::MagneticLeader,
        ArchetypeId::RadiantPerformer,
        ArchetypeId::LovingHeart,
        ArchetypeId::DreamingWanderer,
        ArchetypeId::VisionaryArchitect,
    ];

    /// Position in [`ARCHETYPES`] (type number − 1).
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn profile(self) -> &'static ArchetypeProfile {
        &ARCHETYPES[self.index()]
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}
