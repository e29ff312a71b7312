mod panel;

#[cfg(test)]
mod tests;

pub use panel::{Panel, PanelLine, Tone, connectivity_panel, welcome_panel};
