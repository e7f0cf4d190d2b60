use clap::Parser;
use showcase_core::carousel::MAX_SLIDES;

const DEFAULT_SLIDE_COUNT: u16 = 3;

/// Drives the showcase widgets from line commands on stdin.
///
/// Commands: next, prev, go <i>, key <left|right|space|esc>,
/// swipe <x0> <x1>, drag <x0> <x1>, show, hide, play, pause,
/// filter <name>, open <src>, close, fill <field> [value], submit,
/// dismiss <toast>, wait <ms>, status, quit.
#[derive(Parser, Debug, Clone)]
#[command(name = "showcase", version, about, long_about = None)]
pub(super) struct Args {
    /// Number of carousel slides.
    #[arg(
        long,
        env = "SHOWCASE_SLIDES",
        default_value_t = DEFAULT_SLIDE_COUNT,
        value_parser = clap::value_parser!(u16).range(1..=MAX_SLIDES as i64)
    )]
    pub(super) slides: u16,

    /// Make the simulated media host refuse every playback request.
    #[arg(
        long,
        env = "SHOWCASE_BLOCK_AUTOPLAY",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub(super) block_autoplay: bool,
}
