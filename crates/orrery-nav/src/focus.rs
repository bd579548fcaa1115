//! Hierarchical focus history.
//!
//! The stack drills down sun -> planet -> moon -> site. Selecting something at
//! the same or a higher level discards everything at and below that level
//! before the new entry is appended, so focusing a new planet drops a
//! previously focused moon.

use std::fmt;
use std::str::FromStr;

use orrery_orbit::{BodyId, BodyKind, Orbit, SUN_ID};
use tracing::debug;

use crate::SceneHandle;

/// What a focus entry points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusKind {
    /// The central star.
    Sun,
    /// A planet.
    Planet,
    /// A moon of the parent planet.
    Moon,
    /// A location on a body's surface.
    Site,
}

impl FocusKind {
    /// Hierarchy rank: sun 0, planet 1, moon 2, site 3.
    pub fn rank(self) -> u8 {
        match self {
            FocusKind::Sun => 0,
            FocusKind::Planet => 1,
            FocusKind::Moon => 2,
            FocusKind::Site => 3,
        }
    }

    /// Lower-case name as used by selection requests.
    pub fn as_str(self) -> &'static str {
        match self {
            FocusKind::Sun => "sun",
            FocusKind::Planet => "planet",
            FocusKind::Moon => "moon",
            FocusKind::Site => "site",
        }
    }
}

impl fmt::Display for FocusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a focus kind name is not part of the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown focus kind '{0}'")]
pub struct UnknownFocusKind(pub String);

impl FromStr for FocusKind {
    type Err = UnknownFocusKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sun" => Ok(FocusKind::Sun),
            "planet" => Ok(FocusKind::Planet),
            "moon" => Ok(FocusKind::Moon),
            "site" => Ok(FocusKind::Site),
            other => Err(UnknownFocusKind(other.to_string())),
        }
    }
}

impl From<BodyKind> for FocusKind {
    fn from(kind: BodyKind) -> Self {
        match kind {
            BodyKind::Sun => FocusKind::Sun,
            BodyKind::Planet => FocusKind::Planet,
            BodyKind::Moon => FocusKind::Moon,
        }
    }
}

/// Stable identity of a focus target, compared once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FocusKey {
    /// Kind of the target.
    pub kind: FocusKind,
    /// Catalog id of the target.
    pub id: BodyId,
}

impl fmt::Display for FocusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.id)
    }
}

/// Snapshot of the body data the camera needs.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusData {
    /// Display name.
    pub name: String,
    /// Visual radius.
    pub size: f32,
    /// Orbit (radii, period, start angle).
    pub orbit: Orbit,
    /// Weak key for live position lookups. `None` for entries with no scene object.
    pub scene_handle: Option<SceneHandle>,
}

/// One level of the focus hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusEntry {
    /// Kind of target.
    pub kind: FocusKind,
    /// Catalog id.
    pub id: BodyId,
    /// Body data.
    pub data: FocusData,
    /// The entry this one is framed against (a moon's planet).
    pub parent: Option<Box<FocusEntry>>,
}

impl FocusEntry {
    /// Entry with no parent.
    pub fn new(kind: FocusKind, id: BodyId, data: FocusData) -> Self {
        Self {
            kind,
            id,
            data,
            parent: None,
        }
    }

    /// Attach a parent entry.
    pub fn with_parent(mut self, parent: FocusEntry) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// The implicit root: the sun, with no scene object required.
    pub fn sun_root() -> Self {
        Self::new(
            FocusKind::Sun,
            SUN_ID,
            FocusData {
                name: "Sun".to_string(),
                size: 5.0,
                orbit: Orbit::stationary(),
                scene_handle: None,
            },
        )
    }

    /// Stable `(kind, id)` identity.
    pub fn key(&self) -> FocusKey {
        FocusKey {
            kind: self.kind,
            id: self.id,
        }
    }

    /// Caption for the info panel, e.g. "Planet: Earth".
    pub fn headline(&self) -> String {
        let label = match self.kind {
            FocusKind::Sun => "Star",
            FocusKind::Planet => "Planet",
            FocusKind::Moon => "Moon",
            FocusKind::Site => "Site",
        };
        format!("{label}: {}", self.data.name)
    }
}

/// Non-empty focus history with a single push/pop mutator contract.
///
/// Consumers are not notified of changes; the frame scheduler polls
/// [`FocusStack::current`] every tick.
#[derive(Clone, Debug)]
pub struct FocusStack {
    entries: Vec<FocusEntry>,
    previous: Option<FocusEntry>,
}

impl FocusStack {
    /// Create a stack holding only `root`.
    pub fn new(root: FocusEntry) -> Self {
        Self {
            entries: vec![root],
            previous: None,
        }
    }

    /// Push a new focus, truncating before the first entry of equal or deeper rank.
    pub fn push_focus(&mut self, entry: FocusEntry) {
        self.previous = Some(self.current().clone());
        let rank = entry.kind.rank();
        if let Some(cut) = self.entries.iter().position(|e| e.kind.rank() >= rank) {
            self.entries.truncate(cut);
        }
        debug!(
            focus = %entry.key(),
            depth = self.entries.len() + 1,
            "push focus"
        );
        self.entries.push(entry);
    }

    /// Pop the top entry. The last remaining entry is never removed.
    pub fn pop_focus(&mut self) -> Option<FocusEntry> {
        if self.entries.len() <= 1 {
            return None;
        }
        let popped = self.entries.pop()?;
        debug!(focus = %popped.key(), depth = self.entries.len(), "pop focus");
        self.previous = Some(popped.clone());
        Some(popped)
    }

    /// The focused entry.
    pub fn current(&self) -> &FocusEntry {
        // The stack is never empty.
        &self.entries[self.entries.len() - 1]
    }

    /// The focused entry as it was before the last effective mutation.
    pub fn previous(&self) -> Option<&FocusEntry> {
        self.previous.as_ref()
    }

    /// All entries, root first.
    pub fn entries(&self) -> &[FocusEntry] {
        &self.entries
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FocusStack {
    fn default() -> Self {
        Self::new(FocusEntry::sun_root())
    }
}
