//! Logical muscle groups and the catalog body-part labels they cover.
//!
//! A workout always targets exactly one group. Each group maps to one or
//! more `body_part` labels as they appear in the exercise catalog (the
//! catalog is not consistent, e.g. both `shoulder` and `shoulders`).

use rand::Rng;
use serde::Serialize;

/// A single-focus training group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Biceps,
    Triceps,
    Legs,
    Shoulders,
    Core,
}

impl MuscleGroup {
    /// Every group, in the order they are offered to users.
    pub const ALL: [MuscleGroup; 7] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Core,
    ];

    /// Lowercase key used in query strings (`?group=legs`).
    pub fn key(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Core => "core",
        }
    }

    /// Capitalized name shown to users (`"Legs"`).
    pub fn display_name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Core => "Core",
        }
    }

    /// Catalog `body_part` labels belonging to this group, lowercase.
    pub fn body_parts(self) -> &'static [&'static str] {
        match self {
            MuscleGroup::Chest => &["chest"],
            MuscleGroup::Back => &["back"],
            MuscleGroup::Biceps => &["biceps"],
            MuscleGroup::Triceps => &["triceps"],
            MuscleGroup::Legs => &["legs", "upper legs", "lower legs"],
            MuscleGroup::Shoulders => &["shoulders", "shoulder"],
            MuscleGroup::Core => &["abdominals", "abs", "core"],
        }
    }

    /// Look up a group by key. Surrounding whitespace and case are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|g| g.key() == key)
    }

    /// Whether a catalog `body_part` label belongs to this group.
    pub fn matches_body_part(self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        let label = label.to_lowercase();
        self.body_parts().iter().any(|bp| *bp == label)
    }

    /// Pick a group uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Resolve a requested key, falling back to a random group when the
    /// key is missing, blank or unknown.
    pub fn resolve<R: Rng + ?Sized>(requested: Option<&str>, rng: &mut R) -> Self {
        requested
            .and_then(Self::from_key)
            .unwrap_or_else(|| Self::random(rng))
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
