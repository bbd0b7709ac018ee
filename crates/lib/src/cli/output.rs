use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Where answers and messages produced by a puzzle end up.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn answer<T>(&mut self, answer: &T) -> io::Result<()>
    where
        T: fmt::Debug + Serialize,
    {
        match self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: answer,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{answer:?}")?;
            }
        }

        Ok(())
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message { output: m, kind },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{kind}: {m}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Answer,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
        }
    }
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
