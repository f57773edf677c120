//! Audio requests and the messages exchanged with the audio thread.

use crate::platform::{Cue, Track};

/// What the game wants to hear. Systems queue these in
/// [`AudioQueue`](crate::resources::audio::AudioQueue); the frame loop hands
/// them to the [`AudioPlayer`](crate::platform::AudioPlayer) at present time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioRequest {
    PlayLoop(Track),
    Pause,
    PlayOnce(Cue),
}

/// Commands sent *to* the audio thread
#[derive(Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { track: Track, path: String },
    PlayMusic { track: Track, looped: bool },
    PauseMusic { track: Track },
    LoadFx { cue: Cue, path: String },
    PlayFx { cue: Cue },
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Debug, Clone, PartialEq)]
pub enum AudioMessage {
    DeviceReady,
    DeviceFailed { error: String },
    MusicLoaded { track: Track },
    MusicLoadFailed { track: Track, error: String },
    MusicPlayStarted { track: Track },
    MusicPaused { track: Track },
    FxLoaded { cue: Cue },
    FxLoadFailed { cue: Cue, error: String },
}
