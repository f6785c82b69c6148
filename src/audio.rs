use crate::constants::*;
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{label} GainNode error: {:?}", e))?;
    g.gain().set_value(value);
    Ok(g)
}

/// Soft bell tones marking step changes and completion.
pub struct Chimes {
    ctx: web::AudioContext,
    master: web::GainNode,
}

impl Chimes {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, CHIME_MASTER_GAIN, "Master")?;
        let tone = web::BiquadFilterNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("BiquadFilterNode error: {:?}", e))?;
        tone.set_type(web::BiquadFilterType::Lowpass);
        tone.frequency().set_value(CHIME_LOWPASS_HZ);
        _ = master.connect_with_audio_node(&tone);
        _ = tone.connect_with_audio_node(&ctx.destination());
        Ok(Self { ctx, master })
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    pub fn step(&self, is_announcement: bool) {
        let hz = if is_announcement {
            CHIME_MYSTERY_HZ
        } else {
            CHIME_STEP_HZ
        };
        self.ring(hz, 0.0, 0.6);
    }

    pub fn complete(&self) {
        for (i, hz) in CHIME_COMPLETE_HZ.iter().enumerate() {
            self.ring(*hz, i as f64 * 0.35, 0.8);
        }
    }

    fn ring(&self, frequency_hz: f32, delay_sec: f64, velocity: f32) {
        let Ok(src) = web::OscillatorNode::new(&self.ctx) else {
            return;
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(frequency_hz);
        let Ok(g) = create_gain(&self.ctx, 0.0, "Chime") else {
            return;
        };
        let t0 = self.ctx.current_time() + 0.005 + delay_sec;
        _ = g.gain().linear_ramp_to_value_at_time(velocity, t0 + 0.02);
        _ = g
            .gain()
            .exponential_ramp_to_value_at_time(0.0001, t0 + CHIME_DURATION_SEC);
        _ = src.connect_with_audio_node(&g);
        _ = g.connect_with_audio_node(&self.master);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + CHIME_DURATION_SEC + 0.05);
    }
}
