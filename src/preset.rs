/// Fixed configuration attached to a commit-type keyword.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    pub keyword: &'static str,
    /// Prepended to the user's message: `"<prefix>: <message>"`.
    pub prefix: &'static str,
    pub label: &'static str,
    pub success: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Fix,
    Feat,
    Refactoring,
    First,
    Default,
}

static PRESETS: [Preset; 5] = [
    Preset {
        keyword: "fix",
        prefix: "Fix",
        label: "fix",
        success: "Fix completed",
        icon: "🛠",
    },
    Preset {
        keyword: "feat",
        prefix: "Feat",
        label: "feat",
        success: "Feature completed",
        icon: "✨",
    },
    Preset {
        keyword: "refactoring",
        prefix: "Refactoring",
        label: "refactoring",
        success: "Refactoring completed",
        icon: "✏",
    },
    Preset {
        keyword: "first",
        prefix: "First Commit",
        label: "first",
        success: "First commit and push completed",
        icon: "🚀",
    },
    Preset {
        keyword: "default",
        prefix: "Automatic Commit",
        label: "commit",
        success: "Commit completed",
        icon: "🤖",
    },
];

impl CommitType {
    /// Exact, case-sensitive match. Anything unrecognized (or no keyword at all)
    /// falls back to `Default`.
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("fix") => CommitType::Fix,
            Some("feat") => CommitType::Feat,
            Some("refactoring") => CommitType::Refactoring,
            Some("first") => CommitType::First,
            _ => CommitType::Default,
        }
    }

    pub fn preset(self) -> &'static Preset {
        match self {
            CommitType::Fix => &PRESETS[0],
            CommitType::Feat => &PRESETS[1],
            CommitType::Refactoring => &PRESETS[2],
            CommitType::First => &PRESETS[3],
            CommitType::Default => &PRESETS[4],
        }
    }
}

pub fn presets() -> &'static [Preset] {
    &PRESETS
}
