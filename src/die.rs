use std::fmt;

use crate::face_image::FaceImage;
use crate::random::FaceSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DieError {
    #[error("die face out of range: {0} (expected 1..=6)")]
    FaceOutOfRange(u8),
    #[error("scripted source needs at least one face")]
    EmptyScript,
}

/// The value shown on top of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face(u8);

impl Face {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub const ALL: [Face; 6] = [Face(1), Face(2), Face(3), Face(4), Face(5), Face(6)];

    pub fn new(value: u8) -> Result<Self, DieError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Face(value))
        } else {
            Err(DieError::FaceOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn image(self) -> FaceImage {
        FaceImage::ALL[usize::from(self.0 - 1)]
    }
}

impl TryFrom<u8> for Face {
    type Error = DieError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::new(value)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current result of the die. Lives exactly as long as the view owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieState {
    face: Face,
}

impl DieState {
    pub fn init<S: FaceSource + ?Sized>(source: &mut S) -> Self {
        Self {
            face: source.draw(),
        }
    }

    /// Discard the current face and draw a new one. The same face may come up again.
    pub fn reroll<S: FaceSource + ?Sized>(&mut self, source: &mut S) -> Face {
        self.face = source.draw();
        self.face
    }

    pub fn face(&self) -> Face {
        self.face
    }
}
