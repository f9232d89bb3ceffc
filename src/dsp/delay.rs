/// Fixed-length delay line.
///
/// Reads back what was written `delay_samples` calls ago and silence before
/// that, so the first `delay_samples` outputs are zero.
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    pub fn new(delay_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; delay_samples.max(1)],
            write_pos: 0,
        }
    }

    pub fn next_sample(&mut self, sample: f32) -> f32 {
        let delayed = self.buffer[self.write_pos];
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
        delayed
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lags_input_by_delay() {
        let mut line = DelayLine::new(6);
        let mut buffer: Vec<f32> = (1..=10).map(|i| i as f32).collect();
        line.render(&mut buffer);
        assert_eq!(&buffer[..6], &[0.0; 6]);
        assert_eq!(&buffer[6..], &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn reset_clears_history() {
        let mut line = DelayLine::new(2);
        line.next_sample(1.0);
        line.next_sample(2.0);
        line.reset();
        assert_eq!(line.next_sample(3.0), 0.0);
        assert_eq!(line.next_sample(4.0), 0.0);
        assert_eq!(line.next_sample(5.0), 3.0);
    }
}
