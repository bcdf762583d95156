use std::collections::BTreeMap;

use super::constants::Region;
use super::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalDisplay {
    #[default]
    Hidden,
    Visible,
    /// Still laid out while the exit animation plays.
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetInnerHtml { region: Region, html: String },
    SetModalDisplay(ModalDisplay),
    SetBodyScrollLocked(bool),
}

/// Headless stand-in for the browser document: region markup plus the two
/// style switches the page toggles.
#[derive(Debug, Clone, Default)]
pub struct Document {
    regions: BTreeMap<Region, String>,
    modal: ModalDisplay,
    scroll_locked: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: DomCommand) {
        match command {
            DomCommand::SetInnerHtml { region, html } => {
                self.regions.insert(region, html);
            }
            DomCommand::SetModalDisplay(display) => self.modal = display,
            DomCommand::SetBodyScrollLocked(locked) => self.scroll_locked = locked,
        }
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = DomCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn region(&self, region: Region) -> &str {
        self.regions.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn modal_display(&self) -> ModalDisplay {
        self.modal
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Full page markup with every region filled in.
    pub fn to_html(&self) -> String {
        layout::page(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_commands_replace_region_content() {
        let mut doc = Document::new();
        doc.apply_all([
            DomCommand::SetInnerHtml {
                region: Region::Hero,
                html: "<p>loading</p>".to_string(),
            },
            DomCommand::SetInnerHtml {
                region: Region::Hero,
                html: "<p>done</p>".to_string(),
            },
            DomCommand::SetModalDisplay(ModalDisplay::Visible),
            DomCommand::SetBodyScrollLocked(true),
        ]);

        assert_eq!(doc.region(Region::Hero), "<p>done</p>");
        assert_eq!(doc.region(Region::FeaturedGrid), "");
        assert_eq!(doc.modal_display(), ModalDisplay::Visible);
        assert!(doc.scroll_locked());
    }
}
