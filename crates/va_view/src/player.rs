//! Lifecycle of the embedded video player.
//!
//! The embed widget signals readiness asynchronously. Until then at most
//! one load request is parked; once ready, the controller creates a player
//! instance or swaps the video inside the existing one.

use std::time::Duration;

pub const DEFAULT_PLAYER_TITLE: &str = "Video Player";

/// Delay between the play command and the seek of a timestamp jump.
pub const SEEK_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

/// Fixed options every player is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    pub playsinline: bool,
    pub autoplay: bool,
    pub controls: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            playsinline: true,
            autoplay: false,
            controls: true,
        }
    }
}

/// One live embedded player.
pub trait PlayerInstance: Send {
    /// Whether the instance can switch videos in place.
    fn supports_load(&self) -> bool {
        true
    }
    fn load_video(&mut self, video_id: &str);
    fn play(&mut self);
    fn seek_to(&mut self, seconds: u64, allow_seek_ahead: bool);
    fn state(&self) -> PlaybackState;
    fn destroy(&mut self);
}

/// The embed script once it is ready: a factory for player instances.
pub trait PlayerWidget: Send {
    fn create(&mut self, video_id: &str, options: &PlayerOptions) -> Box<dyn PlayerInstance>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVideo {
    pub video_id: String,
    pub title: Option<String>,
}

/// Observable lifecycle stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerStage {
    Absent,
    Pending(PendingVideo),
    Ready(String),
}

/// What the display has to do after a load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerUpdate {
    /// Show the player section with this title.
    Show(String),
    /// Hide the player section.
    Hide,
    /// Parked until the widget is ready; nothing to show yet.
    Queued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Seeked,
    /// The link belongs to a video other than the loaded one.
    DifferentVideo,
    NoPlayer,
}

pub struct PlayerController {
    widget: Box<dyn PlayerWidget>,
    options: PlayerOptions,
    api_ready: bool,
    pending: Option<PendingVideo>,
    player: Option<Box<dyn PlayerInstance>>,
    current_video_id: Option<String>,
    title: Option<String>,
}

impl PlayerController {
    pub fn new(widget: Box<dyn PlayerWidget>) -> Self {
        Self {
            widget,
            options: PlayerOptions::default(),
            api_ready: false,
            pending: None,
            player: None,
            current_video_id: None,
            title: None,
        }
    }

    pub fn stage(&self) -> PlayerStage {
        match (&self.current_video_id, &self.pending) {
            (Some(video_id), _) if self.player.is_some() => PlayerStage::Ready(video_id.clone()),
            (_, Some(pending)) => PlayerStage::Pending(pending.clone()),
            _ => PlayerStage::Absent,
        }
    }

    pub fn current_video_id(&self) -> Option<&str> {
        self.current_video_id.as_deref()
    }

    pub fn is_api_ready(&self) -> bool {
        self.api_ready
    }

    /// Displayed title of the player section.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_PLAYER_TITLE)
    }

    /// Load, swap, keep or tear down the player for `video_id`.
    pub fn request(&mut self, video_id: Option<&str>, title: Option<&str>) -> PlayerUpdate {
        let Some(video_id) = video_id.filter(|id| !id.is_empty()) else {
            tracing::debug!("No video id provided, hiding player");
            self.teardown();
            return PlayerUpdate::Hide;
        };

        if !self.api_ready {
            tracing::info!("Player API not ready yet, queuing video {}", video_id);
            self.pending = Some(PendingVideo {
                video_id: video_id.to_string(),
                title: title.map(str::to_string),
            });
            return PlayerUpdate::Queued;
        }

        self.title = title.map(str::to_string);
        let same_video = self.current_video_id.as_deref() == Some(video_id);
        let can_swap = self.player.as_ref().map_or(false, |p| p.supports_load());

        if self.player.is_some() && same_video {
            // already showing this video
        } else if let Some(player) = self.player.as_mut().filter(|_| can_swap) {
            tracing::info!("Loading video {} into the existing player", video_id);
            player.load_video(video_id);
            self.current_video_id = Some(video_id.to_string());
        } else {
            self.create(video_id);
        }

        PlayerUpdate::Show(self.title().to_string())
    }

    /// The widget finished loading. Creates the parked player, if any.
    pub fn on_api_ready(&mut self) -> Option<PlayerUpdate> {
        tracing::info!("Player API is ready");
        self.api_ready = true;
        let pending = self.pending.take()?;
        Some(self.request(Some(&pending.video_id), pending.title.as_deref()))
    }

    /// Play the loaded video from `seconds`.
    ///
    /// Plays first, seeks after [`SEEK_DELAY`], then plays again if the
    /// widget did not resume on its own.
    pub async fn jump_to(&mut self, video_id: &str, seconds: u64) -> JumpOutcome {
        let Some(player) = self.player.as_mut() else {
            tracing::error!("No player available to seek");
            return JumpOutcome::NoPlayer;
        };

        if self.current_video_id.as_deref() != Some(video_id) {
            // TODO: load the linked video first, then seek
            tracing::warn!(
                "Timestamp for video {} clicked, but the player has {:?} loaded",
                video_id,
                self.current_video_id
            );
            return JumpOutcome::DifferentVideo;
        }

        tracing::debug!("Seeking {} to {}s", video_id, seconds);
        player.play();
        tokio::time::sleep(SEEK_DELAY).await;
        player.seek_to(seconds, true);
        if player.state() != PlaybackState::Playing {
            player.play();
        }
        JumpOutcome::Seeked
    }

    fn create(&mut self, video_id: &str) {
        if let Some(mut old) = self.player.take() {
            old.destroy();
        }
        tracing::info!("Creating new player for video {}", video_id);
        self.player = Some(self.widget.create(video_id, &self.options));
        self.current_video_id = Some(video_id.to_string());
    }

    fn teardown(&mut self) {
        if let Some(mut player) = self.player.take() {
            player.destroy();
        }
        self.pending = None;
        self.current_video_id = None;
        self.title = None;
    }
}

/// Human-readable reason for an embed player error code.
pub fn describe_player_error(code: i32) -> &'static str {
    match code {
        2 => "Invalid parameter value. Check video ID.",
        5 => "HTML5 player error.",
        100 => "Video not found or removed.",
        101 | 150 => "Embedding disabled by the video owner.",
        _ => "Unknown player error.",
    }
}

pub fn player_error_message(code: i32) -> String {
    format!("YouTube Player Error: {} (Code {})", describe_player_error(code), code)
}

/// Player without a screen: tracks playback state and logs commands.
#[derive(Debug, Default)]
pub struct HeadlessWidget;

impl PlayerWidget for HeadlessWidget {
    fn create(&mut self, video_id: &str, options: &PlayerOptions) -> Box<dyn PlayerInstance> {
        tracing::debug!("Headless player for {} with {:?}", video_id, options);
        Box::new(HeadlessPlayer {
            video_id: video_id.to_string(),
            state: if options.autoplay {
                PlaybackState::Playing
            } else {
                PlaybackState::Cued
            },
            position: 0,
        })
    }
}

#[derive(Debug)]
pub struct HeadlessPlayer {
    video_id: String,
    state: PlaybackState,
    position: u64,
}

impl PlayerInstance for HeadlessPlayer {
    fn load_video(&mut self, video_id: &str) {
        self.video_id = video_id.to_string();
        self.position = 0;
        self.state = PlaybackState::Playing;
    }

    fn play(&mut self) {
        tracing::info!("▶️ Playing {} at {}s", self.video_id, self.position);
        self.state = PlaybackState::Playing;
    }

    fn seek_to(&mut self, seconds: u64, _allow_seek_ahead: bool) {
        self.position = seconds;
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn destroy(&mut self) {
        self.state = PlaybackState::Ended;
    }
}
