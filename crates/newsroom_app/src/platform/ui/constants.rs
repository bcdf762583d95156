/// Regions of the page whose markup is replaced wholesale on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    CurrentDate,
    Hero,
    FeaturedGrid,
    ModalTitle,
    Recommendations,
    Newsletter,
    Notifications,
}

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::CurrentDate => "currentDate",
            Region::Hero => "hero",
            Region::FeaturedGrid => "featuredGrid",
            Region::ModalTitle => "modalTitle",
            Region::Recommendations => "recommendations",
            Region::Newsletter => "newsletter",
            Region::Notifications => "notifications",
        }
    }
}

pub const PAGE_TITLE: &str = "Newsroom";
pub const PAGE_FILENAME: &str = "index.html";

pub const ACTION_OPEN_ARTICLE: &str = "open-article";
pub const ACTION_RETRY: &str = "retry";
pub const ACTION_SUBSCRIBE: &str = "subscribe";
