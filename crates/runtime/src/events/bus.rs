//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use game_core::GameLogEntry;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{AnimationEvent, CommandEvent, PhaseEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Applied and rejected commands
    Command,
    /// Combat log entries as they are written
    Log,
    /// Paced replay of movement and enemy actions
    Animation,
    /// Phase transitions
    Phase,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Command, Topic::Log, Topic::Animation, Topic::Phase];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Command(CommandEvent),
    Log(GameLogEntry),
    Animation(AnimationEvent),
    Phase(PhaseEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Command(_) => Topic::Command,
            Event::Log(_) => Topic::Log,
            Event::Animation(_) => Topic::Animation,
            Event::Phase(_) => Topic::Phase,
        }
    }
}

struct Channels {
    command: broadcast::Sender<Event>,
    log: broadcast::Sender<Event>,
    animation: broadcast::Sender<Event>,
    phase: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Publishing never blocks; events sent while a topic has no subscriber are
/// dropped, and slow subscribers observe `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                command: broadcast::channel(capacity).0,
                log: broadcast::channel(capacity).0,
                animation: broadcast::channel(capacity).0,
                phase: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Command => &self.channels.command,
            Topic::Log => &self.channels.log,
            Topic::Animation => &self.channels.animation,
            Topic::Phase => &self.channels.phase,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
