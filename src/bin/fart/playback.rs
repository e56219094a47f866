use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

/// Seconds of audio the ring buffer can hold ahead of the device.
const QUEUE_SECONDS: usize = 8;

/// An open output stream fed from a ring buffer of mono samples.
pub struct Playback {
    _stream: cpal::Stream,
    producer: Producer<f32>,
    sample_rate: f32,
}

impl Playback {
    /// Open the default output device.
    pub fn open() -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        log::info!("output: {} Hz, {} channels", sample_rate, channels);

        let (producer, mut consumer) =
            RingBuffer::<f32>::new(sample_rate as usize * QUEUE_SECONDS);

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                // Mono to all channels; silence once the queue runs dry
                for frame in data.chunks_mut(channels) {
                    let sample = consumer.pop().unwrap_or(0.0);
                    frame.fill(sample);
                }
            },
            |err| log::error!("audio error: {}", err),
            None,
        )?;
        stream.play()?;

        Ok(Self {
            _stream: stream,
            producer,
            sample_rate,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Queue a rendered buffer. Returns how many samples did not fit.
    pub fn queue(&mut self, samples: &[f32]) -> usize {
        let mut dropped = 0;
        for &sample in samples {
            if self.producer.push(sample).is_err() {
                dropped += 1;
            }
        }
        dropped
    }
}
