//! Cosmetic full-screen effects and the session's terminal state.
//!
//! The interpreter only requests an effect; the page starts it after the
//! requested delay and reports back when the animation ends. Each effect is
//! tracked independently, several may run at once.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Particle dissolve triggered by `clearall`.
    Disintegrate,
    /// Falling glyph overlay. Cancellable with Ctrl+C.
    Matrix,
    /// Hue/scale distortion.
    Glitch,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [
        EffectKind::Disintegrate,
        EffectKind::Matrix,
        EffectKind::Glitch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Disintegrate => "disintegrate",
            EffectKind::Matrix => "matrix",
            EffectKind::Glitch => "glitch",
        }
    }

    pub fn parse(name: &str) -> Option<EffectKind> {
        EffectKind::ALL.into_iter().find(|k| k.as_str() == name)
    }

    fn index(self) -> usize {
        match self {
            EffectKind::Disintegrate => 0,
            EffectKind::Matrix => 1,
            EffectKind::Glitch => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectPhase {
    #[default]
    Idle,
    Requested,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    /// One-way: the whole surface is replaced by the not-found screen.
    Broken,
}

#[derive(Debug, Default)]
pub struct Effects {
    phases: [EffectPhase; 3],
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, kind: EffectKind) -> EffectPhase {
        self.phases[kind.index()]
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.phase(kind) == EffectPhase::Active
    }

    pub fn any_pending(&self) -> bool {
        self.phases.iter().any(|p| *p != EffectPhase::Idle)
    }

    /// Idle -> Requested. Re-requesting a pending effect keeps its phase.
    pub fn request(&mut self, kind: EffectKind) {
        let phase = &mut self.phases[kind.index()];
        if *phase == EffectPhase::Idle {
            *phase = EffectPhase::Requested;
        }
    }

    /// Requested -> Active. Returns false for any other phase.
    pub fn begin(&mut self, kind: EffectKind) -> bool {
        let phase = &mut self.phases[kind.index()];
        if *phase != EffectPhase::Requested {
            return false;
        }
        *phase = EffectPhase::Active;
        true
    }

    /// Requested | Active -> Idle. Returns false when already idle.
    pub fn complete(&mut self, kind: EffectKind) -> bool {
        let phase = &mut self.phases[kind.index()];
        if *phase == EffectPhase::Idle {
            return false;
        }
        *phase = EffectPhase::Idle;
        true
    }
}
