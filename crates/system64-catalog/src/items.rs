//! Item lists and the book list.
//!
//! Each [`ItemList`] names one fixed sequence of strings. The catalog owns
//! the mapping from identifier to sequence; resolution looks lists up by
//! identifier through the catalog, never by name.

use std::collections::BTreeMap;

/// Identifier of a named item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemList {
    /// Agility equipment.
    Agility,
    /// Strength equipment.
    Strength,
    /// Endurance venues and machines.
    Endurance,
    /// Puzzles and games.
    ProblemSolving,
    /// Learning resources.
    Learning,
    /// Creative tools.
    Creativity,
    /// Financial literacy resources.
    FinancialLiteracy,
    /// Budgeting tools.
    Budgeting,
    /// Investing resources.
    Investing,
    /// Discipline aids.
    Discipline,
    /// Community initiatives.
    Community,
    /// People to connect with.
    Relationship,
    /// Self-awareness aids.
    SelfAwareness,
}

impl ItemList {
    /// Every list identifier.
    pub const ALL: [Self; 13] = [
        Self::Agility,
        Self::Strength,
        Self::Endurance,
        Self::ProblemSolving,
        Self::Learning,
        Self::Creativity,
        Self::FinancialLiteracy,
        Self::Budgeting,
        Self::Investing,
        Self::Discipline,
        Self::Community,
        Self::Relationship,
        Self::SelfAwareness,
    ];

    /// Stable key used in error markers.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Agility => "AGILITY_X_ITEMS",
            Self::Strength => "STRENGTH_X_ITEMS",
            Self::Endurance => "ENDURANCE_X_ITEMS",
            Self::ProblemSolving => "PROBLEMSOLVING_X_ITEMS",
            Self::Learning => "LEARNING_X_ITEMS",
            Self::Creativity => "CREATIVITY_X_ITEMS",
            Self::FinancialLiteracy => "FINLIT_X_ITEMS",
            Self::Budgeting => "BUDGETING_X_ITEMS",
            Self::Investing => "INVESTING_X_ITEMS",
            Self::Discipline => "DISCIPLINE_X_ITEMS",
            Self::Community => "COMMUNITY_X_ITEMS",
            Self::Relationship => "RELATIONSHIP_X_ITEMS",
            Self::SelfAwareness => "SELFAWARENESS_X_ITEMS",
        }
    }
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

const fn entries(list: ItemList) -> &'static [&'static str] {
    match list {
        ItemList::Agility => &[
            "Agility ladder",
            "Obstacle course",
            "Jump rope",
            "Cone drills",
            "Balance board",
            "Speed hurdles",
            "Reaction ball",
            "Plyometric box",
            "Track field",
            "Agility cones",
        ],
        ItemList::Strength => &[
            "Free weights",
            "Resistance bands",
            "Weight machines",
            "Bodyweight exercises",
            "Dumbbells",
            "Kettlebells",
            "Barbell",
            "Medicine ball",
            "Power rack",
            "Pull-up bar",
        ],
        ItemList::Endurance => &[
            "Running track",
            "Cycling route",
            "Swimming pool",
            "Rowing machine",
            "Treadmill",
            "Elliptical",
            "Stair climber",
            "Jump rope",
            "Hiking trail",
            "Trail running",
        ],
        ItemList::ProblemSolving => &[
            "Puzzle games",
            "Brain teasers",
            "Strategy games",
            "Logic problems",
            "Escape rooms",
            "Coding challenges",
            "Riddles",
            "Math problems",
            "Sudoku",
            "Board games",
        ],
        ItemList::Learning => &[
            "Online courses",
            "Books",
            "Podcasts",
            "Tutorials",
            "Documentaries",
            "Webinars",
            "Workshops",
            "Educational videos",
            "Study groups",
            "Language apps",
        ],
        ItemList::Creativity => &[
            "Drawing canvas",
            "Painting easel",
            "Writing software",
            "Musical instrument",
            "Crafting station",
            "Digital camera",
            "Dance studio floor",
            "Acting script",
            "Design software",
            "Brainstorming whiteboard",
        ],
        ItemList::FinancialLiteracy => &[
            "Budgeting apps",
            "Financial books",
            "Fin-tech online courses",
            "Investment webinars",
            "Economic podcasts",
            "Stock simulators",
            "Wealth workshops",
            "Personal finance blogs",
            "Money management tools",
            "Certified financial advisors",
        ],
        ItemList::Budgeting => &[
            "Expense tracker app",
            "Digital budget planner",
            "Financial spreadsheet",
            "Mobile finance app",
            "Zero-based budget system",
            "Financial goal journal",
            "Bank transaction log",
            "Automated bill organizer",
            "Cash flow projection worksheet",
            "Savings target visualizer",
        ],
        ItemList::Investing => &[
            "Stock market simulators",
            "Robo-advisor apps",
            "Financial news aggregators",
            "Algorithmic trading courses",
            "Crypto exchange webinars",
            "Portfolio analysis trackers",
            "Mutual fund prospectuses",
            "Decentralized finance platforms",
            "Investment strategy clubs",
            "Brokerage API consultations",
        ],
        ItemList::Discipline => &[
            "Digital daily schedule",
            "Habit formation tracker",
            "Guided meditation routine",
            "AI personal trainer plan",
            "Adaptive study timetable",
            "Smart wake-up system",
            "Time-blocking software",
            "Productivity metrics journal",
            "Cognitive focus techniques",
            "Peer accountability network",
        ],
        ItemList::Community => &[
            "Local charity organization",
            "Community tech hub",
            "Online volunteer collective",
            "Urban eco-restoration drive",
            "Crowdsourced fundraising platform",
            "Digital food bank network",
            "Cyber-neighborhood watch program",
            "Elderly tech support initiative",
            "Virtual animal rescue shelter",
            "Youth mentorship program",
        ],
        ItemList::Relationship => &[
            "Family member",
            "Significant other",
            "Close confidant",
            "Old acquaintance",
            "Academic peer",
            "Forgotten contact",
            "Trusted friend",
            "Sibling unit",
            "Professional mentor",
            "Online community member",
        ],
        ItemList::SelfAwareness => &[
            "Encrypted digital journal",
            "Biofeedback meditation device",
            "AI therapy chatbot sessions",
            "Mindfulness training apps",
            "Cognitive bias reflection exercises",
            "Psychometric personality assessments",
            "360-degree peer feedback",
            "Gamified self-assessment quizzes",
            "Somatic breathing exercises",
            "Emotional intelligence check-ins",
        ],
    }
}

/// Build the identifier-to-sequence table for every list.
pub fn item_lists() -> BTreeMap<ItemList, Vec<String>> {
    ItemList::ALL
        .iter()
        .map(|list| {
            let items = entries(*list).iter().map(|s| (*s).to_owned()).collect();
            (*list, items)
        })
        .collect()
}

/// Titles picked for the book-title placeholder.
const BOOKS: &[&str] = &[
    "Meditations",
    "Sapiens",
    "Thinking, Fast and Slow",
    "The Power of Habit",
    "Man's Search for Meaning",
    "Atomic Habits",
    "Deep Work",
    "Grit",
    "Mindset",
    "How to Win Friends",
    "1984",
    "Brave New World",
    "The Art of War",
    "The Prince",
    "Cosmos",
    "The Selfish Gene",
    "Guns, Germs, and Steel",
    "A Short History of Nearly Everything",
    "Influence: The Psychology of Persuasion",
    "The 7 Habits of Highly Effective People",
    "To Kill a Mockingbird",
    "The Great Gatsby",
    "The Lord of the Rings",
    "Dune",
    "Foundation",
    "Fahrenheit 451",
    "The Hitchhiker's Guide to the Galaxy",
    "Surely You're Joking, Mr. Feynman!",
    "A Brief History of Time",
    "The Code Book",
    "Gödel, Escher, Bach",
    "The Republic",
    "Nicomachean Ethics",
    "Tao Te Ching",
    "Walden",
    "Thus Spoke Zarathustra",
    "The Bhagavad Gita",
    "Zen and the Art of Motorcycle Maintenance",
    "Letters from a Stoic",
    "Candide",
    "The Alchemist",
    "Flow: The Psychology of Optimal Experience",
    "Emotional Intelligence",
    "The Gifts of Imperfection",
    "Daring Greatly",
    "Quiet: The Power of Introverts in a World That Can't Stop Talking",
    "The Body Keeps the Score",
    "Thinking in Bets",
    "Start with Why",
    "Range: Why Generalists Triumph in a Specialized World",
    "The Subtle Art of Not Giving a F*ck",
    "Ultralearning",
    "Nonviolent Communication",
    "The Happiness Hypothesis",
    "Attached: The New Science of Adult Attachment",
    "Crucial Conversations",
    "On the Origin of Species",
    "Silent Spring",
    "The Double Helix",
    "The Emperor of All Maladies: A Biography of Cancer",
    "The Sixth Extinction: An Unnatural History",
    "Astrophysics for People in a Hurry",
    "The Immortal Life of Henrietta Lacks",
    "The Man Who Mistook His Wife for a Hat",
    "Why We Sleep",
    "Entangled Life",
    "The Diary of a Young Girl",
    "The Autobiography of Malcolm X",
    "Team of Rivals: The Political Genius of Abraham Lincoln",
    "Alexander Hamilton",
    "Unbroken: A World War II Story of Survival, Resilience, and Redemption",
    "SPQR: A History of Ancient Rome",
    "Genghis Khan and the Making of the Modern World",
    "The Gulag Archipelago",
    "A People's History of the United States",
    "The Warmth of Other Suns",
    "The Intelligent Investor",
    "Rich Dad Poor Dad",
    "Freakonomics",
    "The Lean Startup",
    "Good to Great",
    "Zero to One",
    "Thinking Strategically",
    "The Black Swan: The Impact of the Highly Improbable",
    "Fooled by Randomness",
    "I Will Teach You to Be Rich",
    "The Millionaire Next Door",
    "Principles: Life and Work",
    "Pride and Prejudice",
    "Moby Dick",
    "War and Peace",
    "Anna Karenina",
    "The Brothers Karamazov",
    "Crime and Punishment",
    "Jane Eyre",
    "Wuthering Heights",
    "Great Expectations",
    "Don Quixote",
    "The Count of Monte Cristo",
    "Frankenstein",
    "Dracula",
    "One Hundred Years of Solitude",
    "Beloved",
    "The Catcher in the Rye",
    "Slaughterhouse-Five",
    "Things Fall Apart",
    "The Handmaid's Tale",
    "Klara and the Sun",
    "The Road",
    "Life of Pi",
    "The Kite Runner",
    "Educated",
    "Where the Crawdads Sing",
    "Project Hail Mary",
    "Circe",
    "The Vanishing Half",
    "Steal Like an Artist",
    "Big Magic: Creative Living Beyond Fear",
    "Creativity, Inc.",
    "Originals: How Non-Conformists Move the World",
    "The War of Art",
    "How to Talk So Kids Will Listen & Listen So Kids Will Talk",
    "The Five Love Languages",
    "Difficult Conversations",
    "Thanks for the Feedback",
    "The Omnivore's Dilemma",
    "How Not to Die",
    "Spark: The Revolutionary New Science of Exercise and the Brain",
    "Breath: The New Science of a Lost Art",
    "Grain Brain",
    "The Blue Zones",
];

/// The book list as owned strings.
pub fn book_list() -> Vec<String> {
    BOOKS.iter().map(|s| (*s).to_owned()).collect()
}
