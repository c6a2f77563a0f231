//! Per-slot allow-list mode and its toggle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    AllStudents,
    AllowedOnly,
}

impl AccessMode {
    pub fn from_restricted(require_specific_email: bool) -> Self {
        if require_specific_email {
            AccessMode::AllowedOnly
        } else {
            AccessMode::AllStudents
        }
    }

    pub fn is_restricted(self) -> bool {
        self == AccessMode::AllowedOnly
    }

    pub fn flipped(self) -> Self {
        match self {
            AccessMode::AllStudents => AccessMode::AllowedOnly,
            AccessMode::AllowedOnly => AccessMode::AllStudents,
        }
    }
}

/// Two-state toggle with a single pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessToggle {
    mode: AccessMode,
    pending: bool,
}

impl AccessToggle {
    pub fn new(mode: AccessMode) -> Self {
        Self {
            mode,
            pending: false,
        }
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Starts a toggle and returns the mode to request, or `None` while an
    /// earlier toggle is still outstanding.
    pub fn request(&mut self) -> Option<AccessMode> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.mode.flipped())
    }

    /// Settles the outstanding toggle, flipping only on success.
    pub fn settle(&mut self, succeeded: bool) -> AccessMode {
        if self.pending && succeeded {
            self.mode = self.mode.flipped();
        }
        self.pending = false;
        self.mode
    }

    /// Replaces the mode with the server's value after a refetch.
    pub fn sync(&mut self, mode: AccessMode) {
        if !self.pending {
            self.mode = mode;
        }
    }
}
