//! Declarative animation specs
//!
//! A [`Motion`] describes one CSS keyframe animation (the keyframes themselves
//! live in the site stylesheet) plus the condition that starts it. The UI
//! layer turns it into an inline `animation` declaration once its trigger
//! fires.

use std::f64::consts::PI;

/// Timing curve. CSS equivalents approximate the GSAP-style power curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Power1Out,
    Power1InOut,
    Power2Out,
    Power2InOut,
    Power3Out,
    SineInOut,
    BackOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Power1Out => "cubic-bezier(0.5, 1, 0.89, 1)",
            Easing::Power1InOut => "cubic-bezier(0.45, 0, 0.55, 1)",
            Easing::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Easing::Power3Out => "cubic-bezier(0.22, 1, 0.36, 1)",
            Easing::SineInOut => "cubic-bezier(0.37, 0, 0.63, 1)",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    /// Eased progress for linear progress `t`, clamped to [0, 1] on input.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut | Easing::Power1Out => power_out(t, 2),
            Easing::EaseInOut | Easing::Power1InOut => power_in_out(t, 2),
            Easing::Power2Out => power_out(t, 3),
            Easing::Power2InOut => power_in_out(t, 3),
            Easing::Power3Out => power_out(t, 4),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

fn power_out(t: f64, k: i32) -> f64 {
    1.0 - (1.0 - t).powi(k)
}

fn power_in_out(t: f64, k: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(k - 1) * t.powi(k)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(k) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Times(u32),
    Infinite,
}

impl Repeat {
    fn css(self) -> String {
        match self {
            Repeat::Once => "1".to_string(),
            Repeat::Times(n) => n.to_string(),
            Repeat::Infinite => "infinite".to_string(),
        }
    }
}

/// What starts an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// As soon as the element mounts
    Mount,
    /// When `threshold` (0..=1) of the element is inside the viewport
    InView { threshold: f64 },
}

impl Trigger {
    pub const fn in_view(threshold: f64) -> Self {
        Trigger::InView { threshold }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// `@keyframes` name in the stylesheet
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Alternate direction on every other iteration
    pub yoyo: bool,
    pub trigger: Trigger,
    /// Keep the element invisible until the trigger fires
    pub hidden_until_triggered: bool,
}

impl Motion {
    /// One-shot entrance animation that plays when scrolled into view
    pub const fn entrance(keyframes: &'static str, duration_ms: u32, easing: Easing) -> Self {
        Self {
            keyframes,
            duration_ms,
            delay_ms: 0,
            easing,
            repeat: Repeat::Once,
            yoyo: false,
            trigger: Trigger::in_view(0.3),
            hidden_until_triggered: true,
        }
    }

    /// Endless decorative loop that starts on mount
    pub const fn looping(keyframes: &'static str, duration_ms: u32, easing: Easing) -> Self {
        Self {
            keyframes,
            duration_ms,
            delay_ms: 0,
            easing,
            repeat: Repeat::Infinite,
            yoyo: false,
            trigger: Trigger::Mount,
            hidden_until_triggered: false,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub const fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Offset the delay for the `index`th sibling
    pub const fn staggered(mut self, index: usize, step_ms: u32) -> Self {
        self.delay_ms += index as u32 * step_ms;
        self
    }

    /// CSS `animation` shorthand
    pub fn css(&self) -> String {
        format!(
            "{} {}ms {} {}ms {} {} both",
            self.keyframes,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            self.repeat.css(),
            if self.yoyo { "alternate" } else { "normal" },
        )
    }

    /// Inline style for the element, given whether the trigger has fired
    pub fn style(&self, triggered: bool) -> String {
        if triggered {
            format!("animation: {};", self.css())
        } else if self.hidden_until_triggered {
            "opacity: 0;".to_string()
        } else {
            String::new()
        }
    }
}

/// Animation presets used across the site
pub mod presets {
    use super::{Easing, Motion, Trigger};

    pub const FADE_IN: Motion = Motion::entrance("fade-in-up", 600, Easing::EaseOut);
    pub const SCALE_IN: Motion = Motion::entrance("scale-in", 700, Easing::EaseOut);
    pub const SLIDE_IN_LEFT: Motion = Motion::entrance("slide-in-left", 800, Easing::EaseOut);
    pub const ROTATE_IN: Motion = Motion::entrance("rotate-in", 600, Easing::EaseOut);
    pub const FADE: Motion = Motion::entrance("fade", 500, Easing::EaseOut);
    pub const GROW_X: Motion = Motion::entrance("grow-x", 1000, Easing::EaseOut);

    pub const HEADER_DROP: Motion =
        Motion::entrance("drop-in", 500, Easing::EaseOut).with_trigger(Trigger::Mount);
    pub const MENU_EXPAND: Motion =
        Motion::entrance("expand-in", 300, Easing::EaseOut).with_trigger(Trigger::Mount);
    pub const PAGE_ENTER: Motion =
        Motion::entrance("fade-in-up", 600, Easing::EaseOut).with_trigger(Trigger::Mount);

    pub const HERO_TITLE: Motion =
        Motion::entrance("rise-in", 1200, Easing::Power3Out).with_trigger(Trigger::in_view(0.2));
    pub const HERO_AVATAR: Motion =
        Motion::entrance("pop-in", 1000, Easing::BackOut).with_trigger(Trigger::in_view(0.2));
    pub const HERO_TEXT: Motion = Motion::entrance("rise-in-short", 800, Easing::Power2Out)
        .with_trigger(Trigger::in_view(0.2))
        .with_delay(500);
    pub const HERO_ACTIONS: Motion = Motion::entrance("rise-in-short", 500, Easing::EaseOut)
        .with_trigger(Trigger::Mount)
        .with_delay(1_000);

    pub const SCROLL_HINT: Motion = Motion::looping("nudge", 1500, Easing::EaseInOut);

    pub const SPHERE: Motion = Motion::looping("sphere-spin", 15_000, Easing::Linear);
    pub const CUBE: Motion = Motion::looping("cube-spin", 20_000, Easing::Power1InOut).yoyo();
    pub const PYRAMID: Motion = Motion::looping("pyramid-tilt", 12_000, Easing::SineInOut).yoyo();
    pub const TORUS: Motion = Motion::looping("torus-roll", 25_000, Easing::Power2InOut);
    pub const BLOB_A: Motion = Motion::looping("breathe-a", 8_000, Easing::EaseInOut);
    pub const BLOB_B: Motion =
        Motion::looping("breathe-b", 10_000, Easing::EaseInOut).with_delay(1_000);

    /// Floating dot `index`: alternating direction, slower and later for each dot
    pub const fn float(index: usize) -> Motion {
        let keyframes = if index % 2 == 0 { "float-up" } else { "float-down" };
        Motion::looping(keyframes, 4_000, Easing::SineInOut)
            .with_duration(4_000 + index as u32 * 1_000)
            .staggered(index, 500)
            .yoyo()
    }

    /// Decorative line `index` stretching horizontally
    pub const fn line(index: usize) -> Motion {
        Motion::looping("stretch-x", 2_000, Easing::Power1InOut)
            .with_duration(2_000 + index as u32 * 1_000)
            .staggered(index, 300)
            .yoyo()
    }

    /// Background grid cell `index`, rippling across the grid
    pub const fn grid_cell(index: usize) -> Motion {
        Motion::looping("cell-pulse", 3_000, Easing::SineInOut)
            .staggered(index, 100)
            .yoyo()
    }
}

/// Count from zero up to `target` over `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl CountUp {
    pub const DEFAULT_DURATION_MS: u32 = 2_000;

    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::Power1Out,
        }
    }

    /// Displayed value after `elapsed_ms`. Rounds up so a started count never shows 0 for long.
    pub fn value_at(&self, elapsed_ms: u32) -> u32 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let progress = self.easing.apply(elapsed_ms as f64 / self.duration_ms as f64);
        ((self.target as f64 * progress).ceil() as u32).min(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        let all = [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Power1Out,
            Easing::Power1InOut,
            Easing::Power2Out,
            Easing::Power2InOut,
            Easing::Power3Out,
            Easing::SineInOut,
            Easing::BackOut,
        ];
        for easing in all {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_power_out_is_ahead_of_linear() {
        assert!(Easing::Power1Out.apply(0.5) > 0.5);
        assert!(Easing::Power3Out.apply(0.5) > Easing::Power1Out.apply(0.5));
    }

    #[test]
    fn test_entrance_css() {
        assert_eq!(
            FADE_IN.css(),
            "fade-in-up 600ms ease-out 0ms 1 normal both"
        );
    }

    #[test]
    fn test_looping_yoyo_css() {
        let css = CUBE.css();
        assert!(css.starts_with("cube-spin 20000ms"));
        assert!(css.contains("infinite alternate"));
    }

    #[test]
    fn test_staggered_adds_delay() {
        let third = FADE_IN.with_delay(100).staggered(2, 200);
        assert_eq!(third.delay_ms, 500);
        assert!(third.css().contains(" 500ms 1 "));
    }

    #[test]
    fn test_style_before_and_after_trigger() {
        assert_eq!(SCALE_IN.style(false), "opacity: 0;");
        assert!(SCALE_IN.style(true).starts_with("animation: scale-in 700ms"));
        assert_eq!(SPHERE.style(false), "");
    }

    #[test]
    fn test_float_alternates_direction() {
        assert_eq!(float(0).keyframes, "float-up");
        assert_eq!(float(1).keyframes, "float-down");
        assert_eq!(float(3).duration_ms, 7_000);
        assert_eq!(float(3).delay_ms, 1_500);
    }

    #[test]
    fn test_line_and_grid_stagger() {
        assert_eq!(line(2).duration_ms, 4_000);
        assert_eq!(line(2).delay_ms, 600);
        assert_eq!(grid_cell(10).delay_ms, 1_000);
        assert_eq!(grid_cell(10).duration_ms, 3_000);
    }

    #[test]
    fn test_trigger_defaults() {
        assert_eq!(FADE_IN.trigger, Trigger::InView { threshold: 0.3 });
        assert_eq!(HEADER_DROP.trigger, Trigger::Mount);
        assert_eq!(SPHERE.trigger, Trigger::Mount);
    }

    #[test]
    fn test_count_up_endpoints() {
        let count = CountUp::new(50);
        assert_eq!(count.value_at(0), 0);
        assert_eq!(count.value_at(count.duration_ms), 50);
        assert_eq!(count.value_at(count.duration_ms * 3), 50);
    }

    #[test]
    fn test_count_up_is_monotone() {
        let count = CountUp::new(25);
        let mut last = 0;
        for elapsed in (0..=2_000).step_by(16) {
            let value = count.value_at(elapsed);
            assert!(value >= last);
            assert!(value <= 25);
            last = value;
        }
    }

    #[test]
    fn test_count_up_rounds_up() {
        let count = CountUp::new(5);
        assert_eq!(count.value_at(1), 1);
    }

    #[test]
    fn test_count_up_zero_duration() {
        let count = CountUp {
            target: 15,
            duration_ms: 0,
            easing: Easing::Linear,
        };
        assert_eq!(count.value_at(0), 15);
    }
}
