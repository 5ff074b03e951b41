//! Player preference flags
//!
//! Persisted as a single packed byte; the file path is chosen by the caller.
//! Missing files are created with defaults so a fresh install starts with
//! music and sound on.

use std::fs;
use std::io;
use std::path::Path;

/// Boolean preference flags supplied to the game at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Welcome screen has been dismissed
    pub seen_welcome: bool,
    /// Movement/jump tutorial has been completed
    pub seen_tutorial: bool,
    pub music_on: bool,
    pub sfx_on: bool,
    /// Debug hitbox overlay
    pub show_hitboxes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seen_welcome: false,
            seen_tutorial: false,
            music_on: true,
            sfx_on: true,
            show_hitboxes: false,
        }
    }
}

impl Settings {
    /// Pack the flags into the settings byte:
    /// bit 4 welcome, bit 3 tutorial, bit 2 music, bit 1 sfx, bit 0 hitboxes
    pub fn to_byte(&self) -> u8 {
        (u8::from(self.seen_welcome) << 4)
            | (u8::from(self.seen_tutorial) << 3)
            | (u8::from(self.music_on) << 2)
            | (u8::from(self.sfx_on) << 1)
            | u8::from(self.show_hitboxes)
    }

    /// Unpack the settings byte; bits above the known flags are ignored
    pub fn from_byte(byte: u8) -> Self {
        Self {
            seen_welcome: (byte >> 4) & 1 != 0,
            seen_tutorial: (byte >> 3) & 1 != 0,
            music_on: (byte >> 2) & 1 != 0,
            sfx_on: (byte >> 1) & 1 != 0,
            show_hitboxes: byte & 1 != 0,
        }
    }

    /// Load settings from `path`, creating the file with defaults if it does
    /// not exist yet. An empty file also falls back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let settings = Self::default();
            settings.save(path)?;
            return Ok(settings);
        }
        let bytes = fs::read(path)?;
        match bytes.first() {
            Some(&byte) => Ok(Self::from_byte(byte)),
            None => Ok(Self::default()),
        }
    }

    /// Write the packed settings byte to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, [self.to_byte()])
    }
}
