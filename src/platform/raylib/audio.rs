//! Raylib audio on a dedicated thread.
//!
//! [`audio_thread`] owns the raylib audio device and every `Music` and
//! `Sound` handle. It reacts to [`AudioCmd`] messages and reports back with
//! [`AudioMessage`]s over `crossbeam_channel`. [`RaylibAudioPlayer`] is the
//! game-side end of that bridge and implements
//! [`AudioPlayer`](crate::platform::AudioPlayer).
//!
//! Music streaming requires periodic `update_stream()` calls; the thread
//! takes care of it while tracks are playing and restarts looped tracks
//! when they run out.

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::platform::{AudioPlayer, Cue, Track};
use crate::resources::gameconfig::GameConfig;

/// How long startup waits for the audio thread to answer.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Entry point of the audio thread.
///
/// Blocks until it receives [`AudioCmd::Shutdown`]. If the device cannot be opened it reports
/// [`AudioMessage::DeviceFailed`] and returns right away.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            let _ = tx_msg.send(AudioMessage::DeviceFailed {
                error: e.to_string(),
            });
            return;
        }
    };
    let _ = tx_msg.send(AudioMessage::DeviceReady);

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut musics: FxHashMap<Track, Music> = FxHashMap::default();
    let mut playing: FxHashSet<Track> = FxHashSet::default();
    let mut looped: FxHashSet<Track> = FxHashSet::default();
    let mut sounds: FxHashMap<Cue, Sound> = FxHashMap::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { track, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("[audio] loaded {:?} path='{}'", track, path);
                        musics.insert(track, music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { track });
                    }
                    Err(e) => {
                        warn!(
                            "[audio] load failed {:?} path='{}' error='{}'",
                            track, path, e
                        );
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            track,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    track,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&track) {
                        debug!("[audio] play start {:?} looped={}", track, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(track);
                        if want_loop {
                            looped.insert(track);
                        } else {
                            looped.remove(&track);
                        }
                        let _ = tx_msg.send(AudioMessage::MusicPlayStarted { track });
                    }
                }
                AudioCmd::PauseMusic { track } => {
                    if let Some(music) = musics.get(&track) {
                        debug!("[audio] pause {:?}", track);
                        music.pause_stream();
                        playing.remove(&track);
                        let _ = tx_msg.send(AudioMessage::MusicPaused { track });
                    }
                }
                AudioCmd::LoadFx { cue, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("[audio] fx loaded {:?} path='{}'", cue, path);
                        sounds.insert(cue, sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { cue });
                    }
                    Err(e) => {
                        warn!(
                            "[audio] fx load failed {:?} path='{}' error='{}'",
                            cue, path, e
                        );
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            cue,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { cue } => {
                    if let Some(sound) = sounds.get(&cue) {
                        debug!("[audio] fx play {:?}", cue);
                        sound.play();
                    } else {
                        warn!("[audio] fx play failed {:?} reason='not loaded'", cue);
                    }
                }
                AudioCmd::Shutdown => {
                    debug!("[audio] shutdown requested");
                    break 'run;
                }
            }
        }

        // 2) Pump streaming and restart looped tracks that ran out
        for track in playing.iter() {
            if let Some(music) = musics.get(track) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if looped.contains(track)
                    && music.get_time_played() >= music.get_time_length() - 0.01
                {
                    debug!("[audio] restarting looped {:?}", track);
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            }
        }

        std::thread::sleep(Duration::from_millis(10));
    } // 'run

    musics.clear();
    sounds.clear();
    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );

    // musics and sounds drop before `audio`
}

/// Game-side handle on the audio thread.
///
/// Dropping it asks the thread to shut down and joins it.
pub struct RaylibAudioPlayer {
    tx_cmd: Sender<AudioCmd>,
    rx_msg: Receiver<AudioMessage>,
    handle: Option<JoinHandle<()>>,
}

impl RaylibAudioPlayer {
    /// Spawn the audio thread and load the configured music and cue.
    ///
    /// A device that cannot be opened is an error. A file that cannot be
    /// loaded is only logged; the game then runs without that sound.
    pub fn start(config: &GameConfig) -> Result<Self, String> {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

        let handle = std::thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || audio_thread(rx_cmd, tx_msg))
            .map_err(|e| format!("Failed to spawn audio thread: {}", e))?;

        let mut player = Self {
            tx_cmd,
            rx_msg,
            handle: Some(handle),
        };

        match player.recv_startup()? {
            AudioMessage::DeviceReady => {}
            AudioMessage::DeviceFailed { error } => {
                player.join();
                return Err(format!("Failed to initialize audio device: {}", error));
            }
            other => return Err(format!("Unexpected audio thread message: {:?}", other)),
        }

        player.send(AudioCmd::LoadMusic {
            track: Track::Ambient,
            path: config.music.to_string_lossy().into_owned(),
        });
        player.send(AudioCmd::LoadFx {
            cue: Cue::GoalReached,
            path: config.goal_sound.to_string_lossy().into_owned(),
        });
        // wait for both loads so the first frame can already play music
        for _ in 0..2 {
            match player.recv_startup()? {
                AudioMessage::MusicLoadFailed { track, error } => {
                    warn!("Music {:?} unavailable: {}", track, error)
                }
                AudioMessage::FxLoadFailed { cue, error } => {
                    warn!("Sound {:?} unavailable: {}", cue, error)
                }
                msg => debug!("[audio] {:?}", msg),
            }
        }

        Ok(player)
    }

    fn recv_startup(&self) -> Result<AudioMessage, String> {
        self.rx_msg
            .recv_timeout(STARTUP_TIMEOUT)
            .map_err(|e| format!("Audio thread did not answer: {}", e))
    }

    fn send(&self, cmd: AudioCmd) {
        // ignore send error on shutdown
        let _ = self.tx_cmd.send(cmd);
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl AudioPlayer for RaylibAudioPlayer {
    fn play_loop(&mut self, track: Track) {
        self.send(AudioCmd::PlayMusic {
            track,
            looped: true,
        });
    }

    fn pause(&mut self) {
        self.send(AudioCmd::PauseMusic {
            track: Track::Ambient,
        });
    }

    fn play_once(&mut self, cue: Cue) {
        self.send(AudioCmd::PlayFx { cue });
    }
}

impl Drop for RaylibAudioPlayer {
    fn drop(&mut self) {
        self.send(AudioCmd::Shutdown);
        self.join();
    }
}
