/*
One-Pole Smoothing
==================

    out[i] = α · in[i] + (1 - α) · out[i - 1]

The cheapest possible low-pass: each output leans toward the new input by
α and keeps (1 - α) of the previous output. α = 1.0 passes everything,
smaller α tames the top end of white noise into a softer "air" texture.

This is the only recursive element in the crate; it must be fed strictly in
sample order.
*/

pub struct OnePole {
    alpha: f32,
    state: f32,
}

impl OnePole {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            state: 0.0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32) -> f32 {
        self.state = self.alpha * sample + (1.0 - self.alpha) * self.state;
        self.state
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}
