use super::easing::ease_in_out;

/// Opacity of a breathing pulse: 1.0 at the ends of each period, dimming
/// to `1.0 - depth` halfway through. Nothing moves before `delay`.
pub fn pulse_opacity(elapsed: f32, delay: f32, period: f32, depth: f32) -> f32 {
    let local = elapsed - delay;
    if local <= 0.0 || period <= 0.0 {
        return 1.0;
    }
    let phase = (local / period).fract();
    let swing = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
    1.0 - depth * ease_in_out(swing)
}
