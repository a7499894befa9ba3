//! Declarative entrance variants. Each variant is plain data: a hidden frame, a
//! visible frame and timing. Rendering produces inline CSS; the browser's
//! transition engine does the tweening.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleFrame {
    pub opacity: f64,
    pub x_px: f64,
    pub y_px: f64,
    pub scale: f64,
}

impl StyleFrame {
    pub const REST: StyleFrame = StyleFrame { opacity: 1.0, x_px: 0.0, y_px: 0.0, scale: 1.0 };

    const fn faded(x_px: f64, y_px: f64) -> Self {
        StyleFrame { opacity: 0.0, x_px, y_px, scale: 1.0 }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x_px, self.y_px, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_s: f64,
    pub ease: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub children_s: f64,
    pub delay_children_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Visible,
}

impl Phase {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Phase::Visible
        } else {
            Phase::Hidden
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: StyleFrame,
    pub visible: StyleFrame,
    pub timing: Timing,
    pub stagger: Option<Stagger>,
}

const EASE_OUT_600: Timing = Timing { duration_s: 0.6, ease: "ease-out" };

pub const FADE_IN_UP: Variant = Variant {
    hidden: StyleFrame::faded(0.0, 60.0),
    visible: StyleFrame::REST,
    timing: EASE_OUT_600,
    stagger: None,
};

pub const FADE_IN_LEFT: Variant = Variant {
    hidden: StyleFrame::faded(-60.0, 0.0),
    visible: StyleFrame::REST,
    timing: EASE_OUT_600,
    stagger: None,
};

pub const FADE_IN_RIGHT: Variant = Variant {
    hidden: StyleFrame::faded(60.0, 0.0),
    visible: StyleFrame::REST,
    timing: EASE_OUT_600,
    stagger: None,
};

pub const STAGGER_CONTAINER: Variant = Variant {
    hidden: StyleFrame::faded(0.0, 0.0),
    visible: StyleFrame::REST,
    timing: Timing { duration_s: 0.3, ease: "ease-out" },
    stagger: Some(Stagger { children_s: 0.2, delay_children_s: 0.1 }),
};

fn ms(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

impl Variant {
    pub fn frame(&self, phase: Phase) -> &StyleFrame {
        match phase {
            Phase::Hidden => &self.hidden,
            Phase::Visible => &self.visible,
        }
    }

    /// Inline style for `phase`, starting the transition after `delay_s`.
    pub fn style(&self, phase: Phase, delay_s: f64) -> String {
        let duration = ms(self.timing.duration_s);
        let delay = ms(delay_s);
        format!(
            "{} transition: opacity {duration}ms {ease} {delay}ms, transform {duration}ms {ease} {delay}ms;",
            self.frame(phase).css(),
            ease = self.timing.ease,
        )
    }

    /// Transition delay for the `index`th child of this container. Zero for non-containers.
    pub fn child_delay(&self, index: usize) -> f64 {
        match self.stagger {
            Some(stagger) => stagger.delay_children_s + stagger.children_s * index as f64,
            None => 0.0,
        }
    }
}

/// Linear map of `value` from `input` onto `output`, clamped to the output range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span.abs() < f64::EPSILON || !value.is_finite() {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}
