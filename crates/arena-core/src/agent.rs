//! Agent identities and per-game color assignment.

use std::fmt;

use chess::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the two move-proposing parties in a game.
///
/// The id is stable across a whole batch; which provider backs each id
/// is decided by the caller (see the roster for display names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    A,
    B,
}

impl AgentId {
    pub fn opponent(self) -> Self {
        match self {
            AgentId::A => AgentId::B,
            AgentId::B => AgentId::A,
        }
    }
}

/// Board side, serde-friendly mirror of [`chess::Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn to_color(self) -> Color {
        match self {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Display names for the two agents (e.g. "ChatGPT" / "Gemini").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    a: String,
    b: String,
}

impl Roster {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn name(&self, id: AgentId) -> &str {
        match id {
            AgentId::A => &self.a,
            AgentId::B => &self.b,
        }
    }

    /// Reverse lookup, used when re-parsing textual summaries.
    pub fn id_of(&self, name: &str) -> Option<AgentId> {
        if name == self.a {
            Some(AgentId::A)
        } else if name == self.b {
            Some(AgentId::B)
        } else {
            None
        }
    }
}

/// Which agent plays which color, fixed for one game's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    pub white: AgentId,
    pub black: AgentId,
}

impl ColorAssignment {
    /// Unbiased coin flip at game start.
    pub fn random() -> Self {
        Self::from_coin(rand::thread_rng().gen_bool(0.5))
    }

    /// `a_is_white` decides the mapping; split out so tests can fix it.
    pub fn from_coin(a_is_white: bool) -> Self {
        if a_is_white {
            Self {
                white: AgentId::A,
                black: AgentId::B,
            }
        } else {
            Self {
                white: AgentId::B,
                black: AgentId::A,
            }
        }
    }

    pub fn agent_on(&self, side: Side) -> AgentId {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    pub fn side_of(&self, id: AgentId) -> Side {
        if self.white == id {
            Side::White
        } else {
            Side::Black
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod agent_tests;
