use super::constants::{Region, PAGE_TITLE};
use super::document::{Document, ModalDisplay};

const KEYFRAMES: &str = "@keyframes fadeInUp{to{opacity:1;transform:translateY(0)}}\
@keyframes modalFadeOut{to{opacity:0}}\
@keyframes slideInRight{from{transform:translateX(100%);opacity:0}to{transform:translateX(0);opacity:1}}\
@keyframes slideOutRight{to{transform:translateX(100%);opacity:0}}";

/// Static page shell around the dynamic regions.
pub fn page(doc: &Document) -> String {
    let body_style = if doc.scroll_locked() {
        "overflow:hidden"
    } else {
        "overflow:auto"
    };
    let modal_style = match doc.modal_display() {
        ModalDisplay::Hidden => "display:none",
        ModalDisplay::Visible => "display:block",
        ModalDisplay::FadingOut => "display:block;animation:modalFadeOut 0.3s ease forwards",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{keyframes}</style>
</head>
<body style="{body_style}">
<header class="site-header">
  <h1>{title}</h1>
  <div id="{date_id}">{date}</div>
</header>
<main>
  <section id="{hero_id}" class="hero-section">{hero}</section>
  <section id="{grid_id}" class="featured-grid">{grid}</section>
</main>
<footer>
  <div id="{newsletter_id}">{newsletter}</div>
</footer>
<div id="modal" class="modal" data-role="backdrop" style="{modal_style}">
  <div class="modal-content" data-role="dialog">
    <h2 id="{modal_title_id}">{modal_title}</h2>
    <div id="{recs_id}" class="recommendations-grid">{recs}</div>
  </div>
</div>
<div id="{notifications_id}">{notifications}</div>
</body>
</html>
"#,
        title = PAGE_TITLE,
        keyframes = KEYFRAMES,
        body_style = body_style,
        date_id = Region::CurrentDate.element_id(),
        date = doc.region(Region::CurrentDate),
        hero_id = Region::Hero.element_id(),
        hero = doc.region(Region::Hero),
        grid_id = Region::FeaturedGrid.element_id(),
        grid = doc.region(Region::FeaturedGrid),
        newsletter_id = Region::Newsletter.element_id(),
        newsletter = doc.region(Region::Newsletter),
        modal_style = modal_style,
        modal_title_id = Region::ModalTitle.element_id(),
        modal_title = doc.region(Region::ModalTitle),
        recs_id = Region::Recommendations.element_id(),
        recs = doc.region(Region::Recommendations),
        notifications_id = Region::Notifications.element_id(),
        notifications = doc.region(Region::Notifications),
    )
}
