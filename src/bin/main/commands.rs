use std::str::FromStr;

use showcase_core::input::{InputEvent, Key};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Command {
    /// Events routed to every widget, in order.
    Events(Vec<InputEvent>),
    Autoplay(bool),
    Filter(String),
    Open(String),
    /// Sets a form field, validating it as on blur. The value may be empty.
    Fill { field: String, value: String },
    Submit,
    Dismiss(u32),
    Wait(u64),
    Status,
    Quit,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub(super) enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid {what}: `{value}`")]
    InvalidArgument { what: &'static str, value: String },
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub(super) fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut args = line.split_whitespace();
        let Some(verb) = args.next() else {
            return Ok(None);
        };
        if verb.starts_with('#') {
            return Ok(None);
        }

        let command = match verb {
            "next" => Self::Events(vec![InputEvent::NextButton]),
            "prev" => Self::Events(vec![InputEvent::PrevButton]),
            "go" => Self::Events(vec![InputEvent::Indicator(number(
                args.next(),
                "slide index",
            )?)]),
            "key" => Self::Events(vec![InputEvent::Key(key(args.next())?)]),
            "swipe" => {
                let start = number(args.next(), "start x")?;
                let end = number(args.next(), "end x")?;
                Self::Events(vec![
                    InputEvent::TouchStart { x: start },
                    InputEvent::TouchEnd { x: end },
                ])
            }
            "drag" => {
                let start = number(args.next(), "start x")?;
                let end = number(args.next(), "end x")?;
                Self::Events(vec![
                    InputEvent::PointerDown { x: start },
                    InputEvent::PointerUp { x: end },
                ])
            }
            "show" => Self::Events(vec![InputEvent::Visibility(true)]),
            "hide" => Self::Events(vec![InputEvent::Visibility(false)]),
            "close" => Self::Events(vec![InputEvent::ModalClose]),
            "play" => Self::Autoplay(true),
            "pause" => Self::Autoplay(false),
            "filter" => Self::Filter(text(args.next(), "filter name")?),
            "open" => Self::Open(text(args.next(), "video source")?),
            "fill" => {
                let field = text(args.next(), "field name")?;
                let value = args.collect::<Vec<_>>().join(" ");
                Self::Fill { field, value }
            }
            "submit" => Self::Submit,
            "dismiss" => Self::Dismiss(number(args.next(), "toast id")?),
            "wait" => Self::Wait(number(args.next(), "duration")?),
            "status" => Self::Status,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }
}

fn number<T: FromStr>(arg: Option<&str>, what: &'static str) -> Result<T, CommandError> {
    let value = arg.ok_or(CommandError::MissingArgument(what))?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        what,
        value: value.to_owned(),
    })
}

fn text(arg: Option<&str>, what: &'static str) -> Result<String, CommandError> {
    arg.map(str::to_owned)
        .ok_or(CommandError::MissingArgument(what))
}

fn key(arg: Option<&str>) -> Result<Key, CommandError> {
    let value = arg.ok_or(CommandError::MissingArgument("key name"))?;
    match value {
        "left" => Ok(Key::ArrowLeft),
        "right" => Ok(Key::ArrowRight),
        "space" => Ok(Key::Space),
        "esc" | "escape" => Ok(Key::Escape),
        _ => Err(CommandError::InvalidArgument {
            what: "key name",
            value: value.to_owned(),
        }),
    }
}
