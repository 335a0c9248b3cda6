use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Display preferences kept between runs. The session engine never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Show the back of each card first.
    pub back_first: bool,
    /// Play a side's recording as soon as it faces up. Playback belongs to an
    /// external player; the card screen only tags the recording as "auto".
    pub auto_play_audio: bool,
    /// Shuffle a deck right after opening it.
    pub shuffle_on_start: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            back_first: false,
            auto_play_audio: true,
            shuffle_on_start: false,
        }
    }
}

impl Preferences {
    /// Missing file means defaults; a malformed one is an error.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
