use unicode_width::UnicodeWidthStr;

use crate::domain::ConnectivityResult;

const TITLE: &str = "Wealth Planner";
const WELCOME: &str = "Welcome to Wealth Planner";
const QUIT_HINT: &str = "Press q to quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Title,
    Separator,
    Plain,
    Success,
    Warning,
    Hint,
}

#[derive(Clone, Debug)]
pub struct PanelLine {
    pub text: String,
    pub tone: Tone,
}

impl PanelLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Panel {
    pub lines: Vec<PanelLine>,
}

impl Panel {
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.text.as_str()))
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

pub fn connectivity_panel(result: &ConnectivityResult) -> Panel {
    let (token, tone) = if result.ok {
        ("PASS", Tone::Success)
    } else {
        ("FAIL", Tone::Warning)
    };
    Panel {
        lines: vec![
            PanelLine::new(TITLE, Tone::Title),
            separator(),
            PanelLine::new(format!("Database check: {token}"), tone),
            PanelLine::new(result.note.clone(), Tone::Plain),
            PanelLine::new(result.path.display().to_string(), Tone::Plain),
            PanelLine::new(QUIT_HINT, Tone::Hint),
        ],
    }
}

pub fn welcome_panel() -> Panel {
    Panel {
        lines: vec![
            PanelLine::new(TITLE, Tone::Title),
            separator(),
            PanelLine::new(WELCOME, Tone::Plain),
            PanelLine::new(QUIT_HINT, Tone::Hint),
        ],
    }
}

fn separator() -> PanelLine {
    let rule = "─".repeat(UnicodeWidthStr::width(TITLE));
    PanelLine::new(rule, Tone::Separator)
}
