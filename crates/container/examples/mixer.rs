//! Builds a small mixer session: tracks holding channels holding plugins,
//! then reorders and prunes it.
//!
//! Run with `RUST_LOG=trace cargo run --example mixer` to see every
//! structural change.

use anyhow::{Context, Result};
use container::{Absent, Container, Element, Id, Item, Nested};
use ident::IdGenerator;
use log::info;

/// A plugin slot on a channel
type Plugin = Item<Id, usize, String>;

/// A mixer channel: identified, ordered within its track, owning plugins
#[derive(Debug, Default)]
struct Channel {
    id: Id,
    index: usize,
    name: String,
    plugins: Container<Plugin>,
}

impl Channel {
    fn new(id: Id, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Element for Channel {
    type Id = Id;
    type Index = usize;

    fn id_slot(&self) -> &Id {
        &self.id
    }

    fn index_slot(&self) -> &usize {
        &self.index
    }

    fn index_slot_mut(&mut self) -> &mut usize {
        &mut self.index
    }

    fn nested(&self) -> Option<&dyn Nested> {
        Some(&self.plugins)
    }

    fn nested_mut(&mut self) -> Option<&mut dyn Nested> {
        Some(&mut self.plugins)
    }
}

/// A track is an identified, ordered container of channels
type Track = Container<Channel, Id, usize>;

/// The session holds tracks but is not itself part of anything
type Session = Container<Track, Absent, Absent>;

fn print_session(session: &Session) {
    for track in session {
        println!("track {} (#{})", track.id, track.index());
        for channel in track {
            println!("  channel {} {:?} (#{})", channel.id, channel.name, channel.index);
            for plugin in &channel.plugins {
                println!("    plugin {} {:?} (#{})", plugin.id, plugin.payload, plugin.index());
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut ids = IdGenerator::new();
    let mut session = Session::new();

    // A track restored from a saved session keeps its stored id
    let mut drums = Track::with_id(ids.generate_from(40));
    let kick = drums.add(Channel::new(ids.generate(), "kick"));
    kick.plugins
        .add(Plugin::identified(ids.generate(), "gate".to_string()));
    let compressor = ids.generate();
    kick.plugins
        .add(Plugin::identified(compressor, "compressor".to_string()));
    drums.add(Channel::new(ids.generate(), "snare"));
    let overheads = ids.generate();
    drums.insert(Channel::new(overheads, "overheads"), 0);
    session.add(drums);

    let mut keys = Track::with_id(ids.generate());
    keys.add(Channel::new(ids.generate(), "piano"));
    keys.add(Channel::new(ids.generate(), "organ"));
    let keys_id = keys.id;
    session
        .try_insert(keys, 0)
        .with_context(|| format!("Failed to insert track {}", keys_id))?;

    info!("Session built, id high-water mark {}", ids.high_water());
    print_session(&session);

    session
        .try_move_by_id(keys_id, 1)
        .with_context(|| format!("Failed to move track {}", keys_id))?;
    session
        .deep_find_by_id_mut::<Track>(Id::new(40))
        .context("drums track missing")?
        .move_by_id(overheads, 2);

    let removed = session
        .deep_remove_by_id::<Plugin>(compressor)
        .context("compressor plugin missing")?;
    info!("Removed plugin {:?}", removed.payload);

    println!("---");
    print_session(&session);
    Ok(())
}
