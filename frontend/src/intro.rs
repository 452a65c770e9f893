use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config;
use crate::storage::{self, KeyValueStore};

#[wasm_bindgen]
extern "C" {
    // Animate-on-scroll library loaded by index.html
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: JsValue) -> Result<(), JsValue>;
}

/// Options handed to the scroll animation library's `init`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Animate each element the first time it scrolls in, never again.
    pub once: bool,
    pub offset: u32,
    pub duration: u32,
}

impl AnimationOptions {
    pub fn first_visit() -> Self {
        Self {
            once: true,
            offset: config::ANIMATION_OFFSET_PX,
            duration: config::FIRST_VISIT_ANIMATION_MS,
        }
    }

    pub fn return_visit() -> Self {
        Self {
            once: true,
            offset: config::ANIMATION_OFFSET_PX,
            duration: config::RETURN_VISIT_ANIMATION_MS,
        }
    }
}

/// Initializes scroll animations. Pages without the library loaded skip it.
pub fn init_scroll_animations(options: AnimationOptions) {
    let value = match serde_wasm_bindgen::to_value(&options) {
        Ok(value) => value,
        Err(err) => {
            log::error!("Failed to convert animation options: {}", err);
            return;
        }
    };
    match aos_init(value) {
        Ok(()) => log::debug!("Scroll animations ready ({}ms)", options.duration),
        Err(err) => log::debug!("Scroll animation library unavailable: {:?}", err),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadDecision {
    /// Puzzle already solved this session: show content right away.
    Bypass,
    RunPuzzle,
    /// Page variant without an intro section.
    NoIntro,
}

pub fn decide_on_load(puzzle_solved: bool, has_intro: bool) -> LoadDecision {
    if puzzle_solved {
        LoadDecision::Bypass
    } else if has_intro {
        LoadDecision::RunPuzzle
    } else {
        LoadDecision::NoIntro
    }
}

impl LoadDecision {
    /// Animation options to initialize with at load. A running puzzle
    /// initializes later, once the content is revealed.
    pub fn load_animations(&self) -> Option<AnimationOptions> {
        match self {
            LoadDecision::Bypass | LoadDecision::NoIntro => Some(AnimationOptions::return_visit()),
            LoadDecision::RunPuzzle => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Puzzle,
    FadingOut,
    Revealed,
}

impl IntroPhase {
    pub fn initial(decision: LoadDecision) -> Self {
        match decision {
            LoadDecision::RunPuzzle => IntroPhase::Puzzle,
            LoadDecision::Bypass | LoadDecision::NoIntro => IntroPhase::Revealed,
        }
    }

    /// Starts the fade. Only the first call from `Puzzle` counts.
    pub fn begin_fade(self) -> Option<Self> {
        match self {
            IntroPhase::Puzzle => Some(IntroPhase::FadingOut),
            _ => None,
        }
    }

    pub fn finish_fade(self) -> Option<Self> {
        match self {
            IntroPhase::FadingOut => Some(IntroPhase::Revealed),
            _ => None,
        }
    }

    pub fn shows_overlay(&self) -> bool {
        !matches!(self, IntroPhase::Revealed)
    }

    pub fn overlay_style(&self) -> &'static str {
        match self {
            IntroPhase::Puzzle => "opacity: 1;",
            IntroPhase::FadingOut => "opacity: 0;",
            IntroPhase::Revealed => "display: none;",
        }
    }

    pub fn content_style(&self) -> &'static str {
        match self {
            IntroPhase::Revealed => "display: block; opacity: 1;",
            _ => "display: none; opacity: 0;",
        }
    }
}

/// First half of the intro hand-off: starts the fade and remembers the solve
/// for the rest of the session. Returns `false` when the intro already left
/// the puzzle, in which case nothing is written.
pub fn complete_intro(phase: &mut IntroPhase, session: &impl KeyValueStore) -> bool {
    let Some(fading) = phase.begin_fade() else {
        log::debug!("Intro already completing, ignoring");
        return false;
    };
    if let Err(err) = storage::mark_puzzle_solved(session) {
        log::warn!("Could not remember solved intro: {}", err);
    }
    *phase = fading;
    true
}

/// Second half, run once the fade timer fires. `true` when the content should
/// be revealed and animated now.
pub fn finish_intro(phase: &mut IntroPhase) -> bool {
    match phase.finish_fade() {
        Some(revealed) => {
            *phase = revealed;
            true
        }
        None => false,
    }
}
