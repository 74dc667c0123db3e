use ahash::RandomState;
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Cyan,
    Magenta,
    Yellow,
    Green,
    Red,
    Blue,
}

/// Colors handed out to group labels.
pub const GROUP_HUES: [Hue; 6] = [
    Hue::Cyan,
    Hue::Magenta,
    Hue::Yellow,
    Hue::Green,
    Hue::Red,
    Hue::Blue,
];

/// Semantic styles used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Underline,
    MutedUnderline,
    Bold,
    Success,
    SuccessStrong,
    Warning,
    /// white on red
    Alert,
    /// black on yellow
    Caution,
    /// black on cyan
    Notice,
    Hue(Hue),
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }

        match tone {
            Tone::Muted => text.bright_black().to_string(),
            Tone::Underline => text.underline().to_string(),
            Tone::MutedUnderline => text.bright_black().underline().to_string(),
            Tone::Bold => text.bold().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::SuccessStrong => text.white().on_green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Alert => text.white().on_red().to_string(),
            Tone::Caution => text.black().on_yellow().to_string(),
            Tone::Notice => text.black().on_cyan().to_string(),
            Tone::Hue(hue) => match hue {
                Hue::Cyan => text.cyan().to_string(),
                Hue::Magenta => text.magenta().to_string(),
                Hue::Yellow => text.yellow().to_string(),
                Hue::Green => text.green().to_string(),
                Hue::Red => text.red().to_string(),
                Hue::Blue => text.blue().to_string(),
            },
        }
    }
}

/// Stable index into a pool of `pool_size` entries.
///
/// Fixed seeds keep the result stable for the lifetime of the process, so a
/// label keeps its color from one block to the next.
pub fn deterministic_index(seed: &str, pool_size: usize) -> usize {
    static HASHER: RandomState = RandomState::with_seeds(1, 2, 3, 4);
    (HASHER.hash_one(seed) % pool_size.max(1) as u64) as usize
}

pub fn hue_for(label: &str) -> Hue {
    GROUP_HUES[deterministic_index(label, GROUP_HUES.len())]
}

/// Display width of `text`, skipping ANSI SGR sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }

    width
}
