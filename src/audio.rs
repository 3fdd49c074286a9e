//! Webview audio backend.
//!
//! Each acquired resource is one HTML `<audio>` element created through
//! `document::eval`. Commands go to the page with `dioxus.send`, events come
//! back through `dioxus.recv` and are pumped into the player's [`SignalSink`].

use std::cell::Cell;
use std::rc::Rc;

use dioxus::document::Eval;
use dioxus::prelude::*;
use keepsake_core::{
    KeepsakeError, KeepsakeResult, MediaBackend, MediaResource, MediaSignal, SignalSink,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Page-side half of a resource. `__SOURCE__` is replaced with the
/// JSON-encoded audio URI.
const AUDIO_SCRIPT: &str = r#"
const audio = new Audio(__SOURCE__);
audio.preload = "metadata";
audio.ontimeupdate = () => dioxus.send({ kind: "progress", seconds: audio.currentTime });
audio.onloadedmetadata = () => {
  if (Number.isFinite(audio.duration)) {
    dioxus.send({ kind: "duration", seconds: audio.duration });
  }
};
audio.onended = () => dioxus.send({ kind: "finished" });

while (true) {
  const command = await dioxus.recv();
  if (command.kind === "play") {
    audio.play()
      .then(() => dioxus.send({ kind: "started" }))
      .catch((err) => dioxus.send({ kind: "failed", reason: String(err) }));
  } else if (command.kind === "pause") {
    audio.pause();
  } else if (command.kind === "seek") {
    audio.currentTime = command.seconds;
  } else if (command.kind === "detach") {
    audio.ontimeupdate = null;
    audio.onloadedmetadata = null;
    audio.onended = null;
  } else if (command.kind === "release") {
    audio.pause();
    audio.removeAttribute("src");
    audio.load();
    dioxus.send({ kind: "released" });
    break;
  }
}
"#;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum AudioCommand {
    Play,
    Pause,
    Seek { seconds: f64 },
    Detach,
    Release,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum AudioMessage {
    Started,
    Failed { reason: String },
    Progress { seconds: f64 },
    Duration { seconds: f64 },
    Finished,
    Released,
}

/// Creates one `<audio>` element per acquired resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewAudio;

impl WebviewAudio {
    pub fn new() -> Self {
        Self
    }
}

impl MediaBackend for WebviewAudio {
    type Resource = WebviewResource;

    fn acquire(&mut self, uri: &str, sink: SignalSink) -> KeepsakeResult<WebviewResource> {
        let source = serde_json::to_string(uri)?;
        let eval = document::eval(&AUDIO_SCRIPT.replace("__SOURCE__", &source));

        let attached = Rc::new(Cell::new(true));
        let (start_tx, start_rx) = mpsc::unbounded_channel();
        tracing::debug!(session = %sink.session(), uri, "Audio element created");
        let pump = spawn(pump(eval.clone(), sink, attached.clone(), start_tx));

        Ok(WebviewResource {
            uri: uri.to_string(),
            eval,
            attached,
            starts: start_rx,
            pump,
        })
    }
}

/// Forward page events until the element is released or the page goes away.
async fn pump(
    mut eval: Eval,
    sink: SignalSink,
    attached: Rc<Cell<bool>>,
    starts: mpsc::UnboundedSender<Result<(), String>>,
) {
    loop {
        let message = match eval.recv::<AudioMessage>().await {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(session = %sink.session(), "Audio element channel closed: {:?}", e);
                let _ = starts.send(Err(format!("{e:?}")));
                break;
            }
        };

        let signal = match message {
            AudioMessage::Started => {
                let _ = starts.send(Ok(()));
                continue;
            }
            AudioMessage::Failed { reason } => {
                let _ = starts.send(Err(reason));
                continue;
            }
            AudioMessage::Released => break,
            AudioMessage::Progress { seconds } => MediaSignal::Progress(seconds),
            AudioMessage::Duration { seconds } => MediaSignal::DurationKnown(seconds),
            AudioMessage::Finished => MediaSignal::Finished,
        };

        if attached.get() {
            sink.emit(signal);
        }
    }
}

/// One `<audio>` element. Dropping it releases the element.
pub struct WebviewResource {
    uri: String,
    eval: Eval,
    attached: Rc<Cell<bool>>,
    starts: mpsc::UnboundedReceiver<Result<(), String>>,
    pump: Task,
}

impl WebviewResource {
    fn send(&self, command: AudioCommand) {
        if let Err(e) = self.eval.send(command) {
            tracing::trace!(uri = %self.uri, ?command, "Audio command dropped: {:?}", e);
        }
    }
}

impl MediaResource for WebviewResource {
    async fn play(&mut self) -> KeepsakeResult<()> {
        self.send(AudioCommand::Play);
        match self.starts.recv().await {
            Some(Ok(())) => Ok(()),
            Some(Err(reason)) => Err(KeepsakeError::PlaybackStart(reason)),
            None => Err(KeepsakeError::PlaybackStart(format!(
                "audio element for {} went away",
                self.uri
            ))),
        }
    }

    fn pause(&mut self) {
        self.send(AudioCommand::Pause);
    }

    fn set_position(&mut self, seconds: f64) {
        self.send(AudioCommand::Seek { seconds });
    }

    fn detach(&mut self) {
        self.attached.set(false);
        self.send(AudioCommand::Detach);
    }
}

impl Drop for WebviewResource {
    fn drop(&mut self) {
        self.send(AudioCommand::Release);
        self.pump.cancel();
    }
}
