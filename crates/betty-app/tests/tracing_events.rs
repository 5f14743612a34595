//! Setup emits structured events when the `tracing` feature is on.
#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use betty_app::{BettyConfig, EffectGraph};
use betty_platform::StereoSample;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn setup_and_mode_switch_are_logged() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = BettyConfig {
            param_smoothing_ms: 0.0,
            bias_smoothing_ms: 0.0,
            switch_smoothing_ms: 0.0,
            switch_hysteresis_ms: 1.0,
            ..BettyConfig::default()
        };
        let mut graph = EffectGraph::new(&config).unwrap();
        for _ in 0..100 {
            graph.process(StereoSample::default(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 0.5);
        }
    });

    let log = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(log.contains("effect graph ready"), "{log}");
    assert!(log.contains("hysteresis gate configured"), "{log}");
    assert!(log.contains("mode switch"), "{log}");
}
