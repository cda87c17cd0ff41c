//! Equal-tempered note indices.
//!
//! A [`Note`] is a semitone index counted from the table's lowest C. The
//! octave and chroma are derived on demand, never stored.

use serde::{Deserialize, Serialize};

/// Number of equal-tempered semitones per octave.
pub const SEMITONES_PER_OCTAVE: u32 = 12;

/// The twelve chromatic pitch classes, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chroma {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Chroma {
    /// All pitch classes in ascending order starting at C.
    pub const ALL: [Chroma; 12] = [
        Chroma::C,
        Chroma::CSharp,
        Chroma::D,
        Chroma::DSharp,
        Chroma::E,
        Chroma::F,
        Chroma::FSharp,
        Chroma::G,
        Chroma::GSharp,
        Chroma::A,
        Chroma::ASharp,
        Chroma::B,
    ];

    /// Returns the pitch class for a semitone position (taken mod 12).
    pub fn from_semitone(semitone: u32) -> Self {
        Self::ALL[(semitone % SEMITONES_PER_OCTAVE) as usize]
    }

    /// Position of this pitch class within the octave (C = 0).
    pub fn semitone(&self) -> u32 {
        *self as u32
    }

    /// Sharp-spelled name as used in table labels.
    pub fn name(&self) -> &'static str {
        match self {
            Chroma::C => "C",
            Chroma::CSharp => "C#",
            Chroma::D => "D",
            Chroma::DSharp => "D#",
            Chroma::E => "E",
            Chroma::F => "F",
            Chroma::FSharp => "F#",
            Chroma::G => "G",
            Chroma::GSharp => "G#",
            Chroma::A => "A",
            Chroma::ASharp => "A#",
            Chroma::B => "B",
        }
    }
}

impl std::fmt::Display for Chroma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A semitone index counted from the lowest C of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(u32);

impl Note {
    /// Creates a note from its semitone index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Creates a note from an octave number and pitch class.
    pub fn from_parts(octave: u32, chroma: Chroma) -> Self {
        Self(octave * SEMITONES_PER_OCTAVE + chroma.semitone())
    }

    /// Semitone index.
    pub fn index(&self) -> u32 {
        self.0
    }

    /// Octave number (index div 12).
    pub fn octave(&self) -> u32 {
        self.0 / SEMITONES_PER_OCTAVE
    }

    /// Pitch class (index mod 12).
    pub fn chroma(&self) -> Chroma {
        Chroma::from_semitone(self.0)
    }

    /// Table label, e.g. `"A4"` or `"C#3"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.chroma().name(), self.octave())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_parts() {
        let a4 = Note::new(57);
        assert_eq!(a4.octave(), 4);
        assert_eq!(a4.chroma(), Chroma::A);
        assert_eq!(a4.label(), "A4");
        assert_eq!(Note::from_parts(4, Chroma::A), a4);
    }

    #[test]
    fn test_lowest_note() {
        let c0 = Note::new(0);
        assert_eq!(c0.octave(), 0);
        assert_eq!(c0.chroma(), Chroma::C);
        assert_eq!(c0.to_string(), "C0");
    }

    #[test]
    fn test_sharp_labels() {
        assert_eq!(Note::new(13).label(), "C#1");
        assert_eq!(Note::new(46).label(), "A#3");
        assert_eq!(Note::new(95).label(), "B7");
    }

    #[test]
    fn test_chroma_names_cycle() {
        let names: Vec<&str> = (0..24).map(|i| Chroma::from_semitone(i).name()).collect();
        assert_eq!(names[..12], names[12..]);
        assert_eq!(
            names[..12],
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }

    #[test]
    fn test_chroma_semitone_roundtrip() {
        for (i, chroma) in Chroma::ALL.iter().enumerate() {
            assert_eq!(chroma.semitone(), i as u32);
        }
    }
}
