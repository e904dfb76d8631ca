use super::AudioBackend;
use anyhow::{anyhow, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{
    fs::File,
    io::BufReader,
    path::Path,
    time::Duration,
};

pub struct RodioBackend {
    sink: Sink,
    _stream: OutputStream,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            _stream: stream,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, track: &Path) -> Result<()> {
        let source = decode(track)?;

        self.sink.clear();
        self.sink.append(source);
        self.sink.play();

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn seek_to(&mut self, pos: Duration) -> Result<()> {
        self.sink
            .try_seek(pos)
            .map_err(|e| anyhow!("seek to {pos:?} failed: {e}"))
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn volume(&self) -> f32 {
        self.sink.volume()
    }

    fn track_ended(&self) -> bool {
        self.sink.empty()
    }
}

fn decode(track: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(track)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len);

    if let Some(ext) = track.extension().and_then(|e| e.to_str()) {
        builder = builder.with_hint(ext);
    }

    Ok(builder.build()?)
}
