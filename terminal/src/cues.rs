use std::io::{self, Write};

/// Audible feedback for match events. The terminal bell is the only sound
/// source we have, so cues differ by how many times it rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Elimination,
    Win,
}

impl Cue {
    fn bells(self) -> usize {
        match self {
            Cue::Elimination => 1,
            Cue::Win => 2,
        }
    }
}

pub fn play<W: Write>(out: &mut W, cues: &[Cue]) -> io::Result<()> {
    if cues.is_empty() {
        return Ok(());
    }
    for cue in cues {
        for _ in 0..cue.bells() {
            out.write_all(b"\x07")?;
        }
    }
    out.flush()
}
