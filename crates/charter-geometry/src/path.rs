//! Path command sequences.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single drawing command in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo {
        ctrl1: (f64, f64),
        ctrl2: (f64, f64),
        to: (f64, f64),
    },
    /// Straight segment back to the most recent `MoveTo`.
    Close,
}

/// An ordered command sequence describing one continuous outline.
///
/// Paths are derived data: rebuilt whenever their inputs change, never edited
/// in place. `Display` renders SVG path syntax (`M 0,10 L 5,2 Z`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// The point the path starts from, if any.
    pub fn start(&self) -> Option<(f64, f64)> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(x, y)) => Some((*x, *y)),
            _ => None,
        }
    }

    /// A copy of this path with `extra` appended.
    #[must_use]
    pub fn extended<I>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = PathCommand>,
    {
        let mut commands = self.commands.clone();
        commands.extend(extra);
        Self { commands }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(x, y) => write!(f, "M {x},{y}"),
            PathCommand::LineTo(x, y) => write!(f, "L {x},{y}"),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                f,
                "C {},{} {},{} {},{}",
                ctrl1.0, ctrl1.1, ctrl2.0, ctrl2.1, to.0, to.1
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
